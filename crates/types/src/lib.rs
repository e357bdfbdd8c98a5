pub mod color;
pub mod document;
pub mod geometry;

pub use color::Color;
pub use document::DocumentMetadata;
pub use geometry::{Rect, Size};
