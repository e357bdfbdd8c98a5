//! The command line shared by every generator binary.

use crate::documents::DocumentKind;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about = "Generate one document of the Safe Harbor bundle", long_about = None)]
pub struct OutputArgs {
    /// Output file; missing directories are created.
    /// Defaults to /mnt/user-data/outputs/<document file name>.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl OutputArgs {
    pub fn resolve(&self, kind: DocumentKind) -> PathBuf {
        self.output.clone().unwrap_or_else(|| kind.default_path())
    }
}

/// Parses the arguments, builds `kind` and maps the result to an exit code.
pub fn run(kind: DocumentKind) -> ExitCode {
    let args = OutputArgs::parse();
    let path = args.resolve(kind);
    match kind.build(&path) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{} failed: {e}", kind.file_name());
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_flag_is_optional() {
        let args = OutputArgs::try_parse_from(["policy_pack"]).unwrap();
        assert_eq!(args.output, None);
        assert!(args.resolve(DocumentKind::PolicyPack).ends_with("SB1188_Data_Sovereignty_Policy_Pack.pdf"));
    }

    #[test]
    fn output_flag_overrides_the_default() {
        let args = OutputArgs::try_parse_from(["ai_kit", "--output", "out/kit.pdf"]).unwrap();
        assert_eq!(args.resolve(DocumentKind::AiKit), PathBuf::from("out/kit.pdf"));
    }

    #[test]
    fn positional_arguments_are_rejected() {
        assert!(OutputArgs::try_parse_from(["roadmap", "extra"]).is_err());
    }
}
