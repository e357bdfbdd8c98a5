//! Generators for the Safe Harbor compliance bundle.
//!
//! Each module under [`documents`] holds the literal content of one
//! deliverable and builds it with the widgets from `harbor-template-dsl`
//! (PDFs) or `harbor-ledger` (the evidence spreadsheet). [`pipeline`] turns
//! a laid-out story into PDF bytes and [`output`] writes the result.

pub mod cli;
pub mod documents;
pub mod error;
pub mod output;
pub mod pipeline;

pub use documents::DocumentKind;
pub use error::GenerateError;
pub use output::{OutputReport, DEFAULT_OUTPUT_DIR};
pub use pipeline::render_pdf;
