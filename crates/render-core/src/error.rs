use harbor_layout::LayoutError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF content could not be encoded: {0}")]
    Pdf(String),
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),
    /// A renderer call arrived before `begin_document` or after `finish`.
    #[error("{0}")]
    NotStarted(&'static str),
}

impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}
