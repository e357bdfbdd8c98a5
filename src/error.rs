use harbor_ledger::LedgerError;
use harbor_render_core::RenderError;
use thiserror::Error;

/// Everything that can stop a generator from producing its file.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl From<harbor_layout::LayoutError> for GenerateError {
    fn from(e: harbor_layout::LayoutError) -> Self {
        GenerateError::Render(RenderError::Layout(e))
    }
}
