#![allow(dead_code)]

pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use safe_harbor::DocumentKind;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// A text string from the Info dictionary, decoding UTF-16BE when it
    /// carries a byte order mark.
    pub fn info_string(&self, key: &str) -> Option<String> {
        let info_id = self.doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
        let info = self.doc.get_dictionary(info_id).ok()?;
        let raw = info.get(key.as_bytes()).ok()?.as_str().ok()?;
        Some(pdf_assertions::decode_text_string(raw))
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// The PDF generators, without the spreadsheet.
pub fn pdf_kinds() -> impl Iterator<Item = DocumentKind> {
    DocumentKind::ALL.into_iter().filter(|kind| *kind != DocumentKind::EvidenceLedger)
}

/// Renders one PDF generator in memory and loads it back.
pub fn render_pdf(kind: DocumentKind) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    GeneratedPdf::from_bytes(kind.render()?)
}
