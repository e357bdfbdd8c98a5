//! Writing finished documents to disk.

use crate::error::GenerateError;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the generators write when no `--output` is given.
pub const DEFAULT_OUTPUT_DIR: &str = "/mnt/user-data/outputs/";

/// A file that was written, and how large it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputReport {
    pub path: PathBuf,
    pub bytes: u64,
}

impl OutputReport {
    /// Size rounded to whole kilobytes, as printed after each run.
    pub fn kilobytes(&self) -> u64 {
        (self.bytes + 512) / 1024
    }
}

/// Creates any missing parent directories, then writes `bytes` in one go.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<OutputReport, GenerateError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    let report = OutputReport {
        path: path.to_path_buf(),
        bytes: bytes.len() as u64,
    };
    log::info!("Wrote {} ({} bytes)", report.path.display(), report.bytes);
    Ok(report)
}

/// The two confirmation lines every generator prints.
pub fn print_confirmation(label: &str, report: &OutputReport) {
    println!("{label} generated: {}", report.path.display());
    println!("File size: {} KB", report.kilobytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/c/out.pdf");
        let report = write_output(&path, b"%PDF-1.7").unwrap();
        assert_eq!(report.bytes, 8);
        assert_eq!(fs::read(&path).unwrap(), b"%PDF-1.7");
    }

    #[test]
    fn bare_file_names_need_no_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flat.xlsx");
        assert!(write_output(&path, b"PK").is_ok());
    }

    #[test]
    fn kilobytes_round_to_nearest() {
        let report = |bytes| OutputReport { path: PathBuf::from("x"), bytes };
        assert_eq!(report(0).kilobytes(), 0);
        assert_eq!(report(1536).kilobytes(), 2);
        assert_eq!(report(1535).kilobytes(), 1);
    }
}
