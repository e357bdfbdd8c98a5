//! Story model and flow layout.
//!
//! A [`Document`] is an ordered list of [`Node`]s. The [`LayoutEngine`]
//! breaks paragraphs into lines with the standard font metrics, resolves
//! table styling rules, and flows everything into fixed page frames,
//! producing one list of [`PositionedElement`]s per page.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Node has a height of {0:.2} which exceeds the total page content height of {1:.2}.")]
    ElementTooLarge(f32, f32),
    #[error("Generic layout error: {0}")]
    Generic(String),
}

pub mod config;
pub mod document;
pub mod markup;
pub mod node;
pub mod text;

mod elements;
mod engine;
mod table;

pub use self::config::{CellPadding, LayoutConfig};
pub use self::document::{Document, PageSetup};
pub use self::elements::{LayoutElement, LineElement, PositionedElement, RectElement, TextFragment, TextLine};
pub use self::engine::{LayoutEngine, Page};
pub use self::node::{Cell, CellRange, Node, PaddingSide, Paragraph, Rule, Table, TableRule, TableStyle};

// Re-export geometry types used by nodes from base to prevent type mismatches
pub use harbor_types::geometry::{Rect, Size};
