//! Streaming PDF renderer using lopdf.
//!
//! Pages are written to the output as they are rendered, using the standard
//! Type 1 fonts with `WinAnsiEncoding`, so no font data is embedded.

mod helpers;
mod renderer;
mod writer;

pub use helpers::render_elements_to_content;
pub use renderer::LopdfRenderer;
pub use writer::StreamingPdfWriter;
