//! The six deliverables of the Safe Harbor bundle.

pub mod ai_kit;
pub mod evidence_ledger;
pub mod impl_guide;
pub mod policy_pack;
pub mod roadmap;
pub mod staff_guide;

use crate::error::GenerateError;
use crate::output::{print_confirmation, write_output, OutputReport, DEFAULT_OUTPUT_DIR};
use crate::pipeline::render_pdf;
use harbor_layout::Document;
use harbor_style::StyleRegistry;
use harbor_template_dsl::PageChrome;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    PolicyPack,
    ImplementationGuide,
    StaffGuide,
    Roadmap,
    AiKit,
    EvidenceLedger,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 6] = [
        DocumentKind::PolicyPack,
        DocumentKind::ImplementationGuide,
        DocumentKind::StaffGuide,
        DocumentKind::Roadmap,
        DocumentKind::AiKit,
        DocumentKind::EvidenceLedger,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            DocumentKind::PolicyPack => policy_pack::FILE_NAME,
            DocumentKind::ImplementationGuide => impl_guide::FILE_NAME,
            DocumentKind::StaffGuide => staff_guide::FILE_NAME,
            DocumentKind::Roadmap => roadmap::FILE_NAME,
            DocumentKind::AiKit => ai_kit::FILE_NAME,
            DocumentKind::EvidenceLedger => evidence_ledger::FILE_NAME,
        }
    }

    /// `DEFAULT_OUTPUT_DIR` joined with the document's file name.
    pub fn default_path(self) -> PathBuf {
        Path::new(DEFAULT_OUTPUT_DIR).join(self.file_name())
    }

    /// The finished file's bytes, without touching the filesystem. The
    /// ledger skips recalculation here.
    pub fn render(self) -> Result<Vec<u8>, GenerateError> {
        let styles = StyleRegistry::standard();
        match self {
            DocumentKind::PolicyPack => render_pdf(&policy_pack::document(&styles), &policy_pack::chrome()),
            DocumentKind::ImplementationGuide => render_pdf(&impl_guide::document(&styles), &impl_guide::chrome()),
            DocumentKind::StaffGuide => render_pdf(&staff_guide::document(&styles), &staff_guide::chrome()),
            DocumentKind::Roadmap => render_pdf(&roadmap::document(&styles), &roadmap::chrome()),
            DocumentKind::AiKit => render_pdf(&ai_kit::document(&styles), &ai_kit::chrome()),
            DocumentKind::EvidenceLedger => Ok(harbor_ledger::to_bytes(&evidence_ledger::workbook()?)?),
        }
    }

    /// Builds the document and writes it to `path`.
    pub fn build(self, path: &Path) -> Result<OutputReport, GenerateError> {
        match self {
            DocumentKind::PolicyPack => policy_pack::build_document(path),
            DocumentKind::ImplementationGuide => impl_guide::build_document(path),
            DocumentKind::StaffGuide => staff_guide::build_document(path),
            DocumentKind::Roadmap => roadmap::build_document(path),
            DocumentKind::AiKit => ai_kit::build_document(path),
            DocumentKind::EvidenceLedger => evidence_ledger::build_document(path),
        }
    }
}

/// Renders a PDF document, writes it and prints the confirmation lines.
fn write_pdf(document: &Document, chrome: &PageChrome, path: &Path) -> Result<OutputReport, GenerateError> {
    let bytes = render_pdf(document, chrome)?;
    let report = write_output(path, &bytes)?;
    print_confirmation("PDF", &report);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_live_in_the_outputs_directory() {
        for kind in DocumentKind::ALL {
            let path = kind.default_path();
            assert!(path.starts_with(DEFAULT_OUTPUT_DIR));
            assert!(path.ends_with(kind.file_name()));
        }
    }

    #[test]
    fn file_names_are_distinct() {
        let mut names: Vec<_> = DocumentKind::ALL.iter().map(|k| k.file_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), DocumentKind::ALL.len());
    }
}
