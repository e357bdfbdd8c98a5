//! Workbooks, sheets and cells. Rows and columns are 1-based, as in A1
//! references.

use crate::format::CellFormat;
use crate::LedgerError;
use harbor_types::Color;
use std::collections::BTreeMap;
use std::fmt;

/// `1 -> "A"`, `26 -> "Z"`, `27 -> "AA"`. Column 0 has no letter and maps
/// to the empty string.
pub fn column_letter(col: u16) -> String {
    let mut letters = Vec::new();
    let mut n = u32::from(col);
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellRef {
    pub row: u32,
    pub col: u16,
}

impl CellRef {
    pub const fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_letter(self.col), self.row)
    }
}

/// An inclusive rectangle of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    pub first: CellRef,
    pub last: CellRef,
}

impl CellRange {
    pub fn new(first: CellRef, last: CellRef) -> Result<Self, LedgerError> {
        if first.row == 0 || first.col == 0 {
            return Err(LedgerError::InvalidRange(format!(
                "row {} column {} is not 1-based",
                first.row, first.col
            )));
        }
        if last.row < first.row || last.col < first.col {
            return Err(LedgerError::InvalidRange(format!("{first} is after {last}")));
        }
        Ok(Self { first, last })
    }

    /// `col{first_row}:col{last_row}`.
    pub fn column(col: u16, first_row: u32, last_row: u32) -> Result<Self, LedgerError> {
        Self::new(CellRef::new(first_row, col), CellRef::new(last_row, col))
    }

    /// One row spanning `first_col..=last_col`.
    pub fn row(row: u32, first_col: u16, last_col: u16) -> Result<Self, LedgerError> {
        Self::new(CellRef::new(row, first_col), CellRef::new(row, last_col))
    }

    pub fn contains(&self, cell: CellRef) -> bool {
        (self.first.row..=self.last.row).contains(&cell.row) && (self.first.col..=self.last.col).contains(&cell.col)
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.first, self.last)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CellValue {
    #[default]
    Blank,
    Text(String),
    /// Formula source including the leading `=`.
    Formula(String),
}

impl CellValue {
    /// Text starting with `=` is a formula; the empty string is blank.
    pub fn parse(value: &str) -> Self {
        if value.is_empty() {
            CellValue::Blank
        } else if value.starts_with('=') {
            CellValue::Formula(value.to_string())
        } else {
            CellValue::Text(value.to_string())
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::parse(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::parse(&value)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    pub value: CellValue,
    pub format: CellFormat,
}

/// A dropdown list constraint over a range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListValidation {
    pub range: CellRange,
    pub options: Vec<String>,
    pub prompt: Option<String>,
    pub error: Option<String>,
}

impl ListValidation {
    pub fn new(range: CellRange, options: &str) -> Self {
        Self {
            range,
            options: options.split(',').map(str::to_string).collect(),
            prompt: None,
            error: None,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub tab_color: Option<Color>,
    pub column_widths: BTreeMap<u16, f64>,
    pub row_heights: BTreeMap<u32, f64>,
    cells: BTreeMap<(u32, u16), Cell>,
    pub merges: Vec<CellRange>,
    pub validations: Vec<ListValidation>,
    /// First cell below and right of the frozen panes.
    pub freeze: Option<CellRef>,
    pub autofilter: Option<CellRange>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tab_color: None,
            column_widths: BTreeMap::new(),
            row_heights: BTreeMap::new(),
            cells: BTreeMap::new(),
            merges: Vec::new(),
            validations: Vec::new(),
            freeze: None,
            autofilter: None,
        }
    }

    pub fn with_tab_color(mut self, color: Color) -> Self {
        self.tab_color = Some(color);
        self
    }

    pub fn set_column_width(&mut self, col: u16, width: f64) {
        self.column_widths.insert(col, width);
    }

    pub fn set_row_height(&mut self, row: u32, height: f64) {
        self.row_heights.insert(row, height);
    }

    /// Replaces value and format of one cell.
    pub fn write(&mut self, row: u32, col: u16, value: impl Into<CellValue>, format: CellFormat) {
        self.cells.insert(
            (row, col),
            Cell {
                value: value.into(),
                format,
            },
        );
    }

    /// Sets the value, leaving any existing format in place.
    pub fn set_value(&mut self, row: u32, col: u16, value: impl Into<CellValue>) {
        self.cells.entry((row, col)).or_default().value = value.into();
    }

    /// Rewrites the format, leaving any existing value in place.
    pub fn update_format(&mut self, row: u32, col: u16, f: impl FnOnce(CellFormat) -> CellFormat) {
        let cell = self.cells.entry((row, col)).or_default();
        cell.format = f(cell.format);
    }

    pub fn cell(&self, row: u32, col: u16) -> Option<&Cell> {
        self.cells.get(&(row, col))
    }

    /// The text of a cell, if it holds text.
    pub fn text(&self, row: u32, col: u16) -> Option<&str> {
        self.cell(row, col).and_then(|cell| cell.value.as_text())
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (CellRef, &Cell)> {
        self.cells.iter().map(|(&(row, col), cell)| (CellRef::new(row, col), cell))
    }

    pub fn merge(&mut self, range: CellRange) {
        self.merges.push(range);
    }

    pub fn add_validation(&mut self, validation: ListValidation) {
        self.validations.push(validation);
    }

    pub fn freeze_at(&mut self, cell: CellRef) {
        self.freeze = Some(cell);
    }

    pub fn set_autofilter(&mut self, range: CellRange) {
        self.autofilter = Some(range);
    }

    /// The merge covering `cell`, if any.
    pub fn merge_containing(&self, cell: CellRef) -> Option<&CellRange> {
        self.merges.iter().find(|range| range.contains(cell))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreationDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl CreationDate {
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

/// Document properties written to `docProps/core.xml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Properties {
    pub title: String,
    pub author: String,
    pub subject: String,
    pub company: String,
    /// Fixed so that repeated runs write identical files.
    pub created: CreationDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
    pub properties: Properties,
}

impl Workbook {
    pub fn new(properties: Properties) -> Self {
        Self {
            sheets: Vec::new(),
            properties,
        }
    }

    pub fn push(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|sheet| sheet.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_letters() {
        assert_eq!(column_letter(1), "A");
        assert_eq!(column_letter(11), "K");
        assert_eq!(column_letter(26), "Z");
        assert_eq!(column_letter(27), "AA");
        assert_eq!(column_letter(52), "AZ");
        assert_eq!(column_letter(703), "AAA");
        assert_eq!(column_letter(0), "");
    }

    #[test]
    fn ranges_display_in_a1_form() {
        let range = CellRange::column(5, 8, 38).unwrap();
        assert_eq!(range.to_string(), "E8:E38");
        let filter = CellRange::new(CellRef::new(7, 1), CellRef::new(37, 11)).unwrap();
        assert_eq!(filter.to_string(), "A7:K37");
    }

    #[test]
    fn ranges_reject_zero_and_reversed_corners() {
        assert!(matches!(CellRange::column(0, 1, 2), Err(LedgerError::InvalidRange(_))));
        assert!(matches!(CellRange::column(1, 9, 2), Err(LedgerError::InvalidRange(_))));
    }

    #[test]
    fn values_parse_formulas_and_blanks() {
        assert_eq!(CellValue::parse(""), CellValue::Blank);
        assert_eq!(CellValue::parse("=SUM(A1:A2)"), CellValue::Formula("=SUM(A1:A2)".into()));
        assert_eq!(CellValue::parse("Yes"), CellValue::Text("Yes".into()));
    }

    #[test]
    fn formats_and_values_update_independently() {
        let mut sheet = Sheet::new("Test");
        sheet.update_format(2, 3, |f| f.fill(Color::WHITE));
        sheet.set_value(2, 3, "Yes");
        let cell = sheet.cell(2, 3).unwrap();
        assert_eq!(cell.value, CellValue::Text("Yes".into()));
        assert_eq!(cell.format.fill, Some(Color::WHITE));
    }

    #[test]
    fn validation_options_split_on_commas() {
        let v = ListValidation::new(CellRange::column(4, 8, 38).unwrap(), "CRITICAL,HIGH,MODERATE,LOW");
        assert_eq!(v.options, ["CRITICAL", "HIGH", "MODERATE", "LOW"]);
    }

    #[test]
    fn merges_are_found_by_any_member_cell() {
        let mut sheet = Sheet::new("Test");
        sheet.merge(CellRange::row(5, 1, 11).unwrap());
        assert!(sheet.merge_containing(CellRef::new(5, 7)).is_some());
        assert!(sheet.merge_containing(CellRef::new(6, 1)).is_none());
    }
}
