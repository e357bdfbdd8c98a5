//! Core rendering abstractions.
//!
//! This crate provides the seams between layout and a concrete PDF backend:
//! - `DocumentRenderer` trait for abstracting PDF writing operations
//! - `PageDecoration` trait for running headers and footers
//! - Error types for rendering operations

mod error;
mod traits;

pub use error::RenderError;
pub use traits::{DocumentRenderer, NoDecoration, PageContext, PageDecoration};
