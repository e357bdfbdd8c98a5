//! Reusable building blocks for the compliance documents.
//!
//! Every function here is a "widget function": it takes literal content and
//! the shared [`StyleRegistry`](harbor_style::StyleRegistry) and returns
//! ready-made story [`Node`](harbor_layout::Node)s, so a document module is
//! little more than its prose.
//!
//! ```ignore
//! use harbor_template_dsl::prelude::*;
//!
//! let mut story = numbered_header(&styles, "SECTION 1", "PURPOSE");
//! story.push(callout(&styles, "<b>Note:</b> keep it domestic.", &BoxStyle::INFO));
//! story.push(checklist_table(&styles, &[("Sign policy", "Owner", "Signed PDF")], NAVY));
//! ```

mod boxes;
mod chrome;
mod cover;
mod sections;
mod tables;

pub use boxes::{callout, copy_ready_box, key_point_box, make_box, tip_box, warning_box, BoxStyle};
pub use chrome::PageChrome;
pub use cover::{banner, cover_highlight, cover_lead, cover_title, disclaimer, COVER_WIDTH};
pub use sections::{bullets, numbered_header, phase_header, section_rule, sub_bullets, toc, TocEntry};
pub use tables::{
    checklist_table, meta_table, signature_block, signature_line, DataTable, CHECKLIST_HEADER, CHECKLIST_WIDTHS,
};

/// Everything a document module usually needs in one import.
pub mod prelude {
    pub use super::*;
    pub use harbor_layout::{Cell, CellRange, Node, Paragraph, Rule, Table, TableRule, TableStyle};
    pub use harbor_style::palette::*;
    pub use harbor_style::{inch, StandardFont, StyleRegistry, TextAlign, VerticalAlign};
}
