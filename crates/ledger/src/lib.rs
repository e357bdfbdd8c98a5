//! An in-memory spreadsheet model for the evidence ledger.
//!
//! Sheets are assembled as plain data first (`model`, `format`, `blocks`), so
//! their structure can be inspected in tests, then handed to `writer` to
//! produce the XLSX bytes. `recalc` drives the external formula
//! recalculation helper.

pub mod blocks;
mod error;
pub mod format;
pub mod model;
pub mod recalc;
pub mod writer;

pub use error::LedgerError;
pub use format::{Border, BorderStyle, Borders, CellFormat, FontSpec, HAlign, VAlign};
pub use model::{column_letter, Cell, CellRange, CellRef, CellValue, CreationDate, ListValidation, Properties, Sheet, Workbook};
pub use recalc::{RecalcConfig, RecalcOutcome};
pub use writer::to_bytes;
