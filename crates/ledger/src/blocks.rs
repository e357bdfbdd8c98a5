//! The recurring pieces of every ledger sheet: title block, instruction
//! line, header row and striped data rows.

use crate::format::{Border, Borders, CellFormat, HAlign, VAlign};
use crate::model::{CellRange, CellValue, Sheet};
use crate::LedgerError;
use harbor_style::palette::*;
use itertools::Itertools;

pub const TITLE: CellFormat = CellFormat::arial(14.0, NAVY).bold();
pub const SUBTITLE: CellFormat = CellFormat::arial(10.0, GRAY_500);
pub const SECTION: CellFormat = CellFormat::arial(11.0, NAVY_LIGHT).bold();
pub const INSTRUCTION: CellFormat = CellFormat::arial(9.0, GRAY_500).italic();

pub const HEADER: CellFormat = CellFormat::arial(10.0, WHITE)
    .bold()
    .fill(NAVY)
    .align(HAlign::Center)
    .valign(VAlign::Center)
    .wrap()
    .borders(Borders::all(Border::thin(NAVY_LIGHT)).with_bottom(Border::medium(GOLD_DARK)));

pub const BODY: CellFormat = CellFormat::arial(10.0, GRAY_700)
    .fill(WHITE)
    .valign(VAlign::Center)
    .wrap()
    .borders(Borders::all(Border::thin(GRAY_200)));

pub const EXAMPLE_FONT: CellFormat = CellFormat::arial(10.0, GRAY_500).italic();

/// Highlighted status text: green for verified or resolved entries.
pub const GOOD: CellFormat = CellFormat::arial(10.0, GREEN_600).bold();
pub const CAUTION: CellFormat = CellFormat::arial(10.0, AMBER_600).bold();
pub const ALERT: CellFormat = CellFormat::arial(10.0, RED_600).bold();

/// Number of columns the gold accent bar spans.
pub const ACCENT_COLUMNS: u16 = 11;

/// How a data row is shaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowKind {
    /// Sample content, set in grey italics.
    pub example: bool,
    /// Every other row is GRAY_50.
    pub alternate: bool,
}

impl RowKind {
    pub const fn new(example: bool, alternate: bool) -> Self {
        Self { example, alternate }
    }

    pub fn format(&self) -> CellFormat {
        let mut format = BODY;
        if self.example {
            format = format.with_font_of(&EXAMPLE_FONT);
        }
        if self.alternate {
            format = format.fill(GRAY_50);
        }
        format
    }
}

/// A gold row three points high across the accent columns.
pub fn accent_bar(sheet: &mut Sheet, row: u32, borders: Borders) {
    for col in 1..=ACCENT_COLUMNS {
        sheet.update_format(row, col, |f| f.fill(GOLD).borders(borders));
    }
    sheet.set_row_height(row, 3.0);
}

/// Title, subtitle and gold bar starting at `start_row`. Returns the first
/// row after the block.
pub fn title_block(sheet: &mut Sheet, title: &str, subtitle: &str, start_row: u32) -> u32 {
    sheet.write(start_row, 1, title, TITLE);
    sheet.write(start_row + 1, 1, subtitle, SUBTITLE);
    accent_bar(sheet, start_row + 2, Borders::bottom(Border::thin(GOLD_DARK)));
    start_row + 3
}

/// Italic guidance merged across the sheet's columns.
pub fn instruction_line(sheet: &mut Sheet, row: u32, text: &str, columns: u16) -> Result<(), LedgerError> {
    sheet.write(row, 1, text, INSTRUCTION);
    sheet.merge(CellRange::row(row, 1, columns)?);
    Ok(())
}

/// Writes the column headings and sets each column's width.
///
/// Panics if `headers` and `widths` differ in length.
pub fn header_row(sheet: &mut Sheet, row: u32, headers: &[&str], widths: &[f64]) {
    for (col, (header, width)) in (1u16..).zip(headers.iter().zip_eq(widths)) {
        sheet.write(row, col, *header, HEADER);
        sheet.set_column_width(col, *width);
    }
}

/// Styles the first `columns` cells of a row, then writes `values` from
/// column A.
pub fn data_row(sheet: &mut Sheet, row: u32, columns: u16, values: &[&str], kind: RowKind) {
    let format = kind.format();
    for col in 1..=columns {
        sheet.update_format(row, col, |_| format);
    }
    for (col, value) in (1u16..).zip(values) {
        sheet.set_value(row, col, CellValue::parse(value));
    }
}

/// Gives a cell the highlight font and, optionally, a fill.
pub fn highlight(sheet: &mut Sheet, row: u32, col: u16, font: CellFormat, fill: Option<harbor_types::Color>) {
    sheet.update_format(row, col, |f| {
        let f = f.with_font_of(&font);
        match fill {
            Some(color) => f.fill(color),
            None => f,
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::BorderStyle;

    #[test]
    fn title_block_returns_the_row_after_the_bar() {
        let mut sheet = Sheet::new("Test");
        let next = title_block(&mut sheet, "TITLE", "Subtitle", 1);
        assert_eq!(next, 4);
        assert_eq!(sheet.text(1, 1), Some("TITLE"));
        assert_eq!(sheet.row_heights.get(&3), Some(&3.0));
        let bar = sheet.cell(3, 11).unwrap();
        assert_eq!(bar.format.fill, Some(GOLD));
        assert_eq!(bar.format.borders.bottom, Some(Border::thin(GOLD_DARK)));
        assert!(sheet.cell(3, 12).is_none());
    }

    #[test]
    fn header_cells_have_a_heavy_gold_underline() {
        let mut sheet = Sheet::new("Test");
        header_row(&mut sheet, 7, &["#", "Name"], &[5.0, 22.0]);
        let cell = sheet.cell(7, 2).unwrap();
        assert_eq!(cell.format.borders.bottom.map(|b| b.style), Some(BorderStyle::Medium));
        assert_eq!(cell.format.fill, Some(NAVY));
        assert_eq!(sheet.column_widths.get(&2), Some(&22.0));
    }

    #[test]
    #[should_panic]
    fn header_and_width_counts_must_match() {
        let mut sheet = Sheet::new("Test");
        header_row(&mut sheet, 7, &["#", "Name"], &[5.0]);
    }

    #[test]
    fn example_rows_are_grey_italic_and_stripes_alternate() {
        let mut sheet = Sheet::new("Test");
        data_row(&mut sheet, 8, 3, &["1", "Vendor"], RowKind::new(true, false));
        data_row(&mut sheet, 9, 3, &["2"], RowKind::new(false, true));
        let example = sheet.cell(8, 2).unwrap();
        assert!(example.format.font.italic);
        assert_eq!(example.format.fill, Some(WHITE));
        let alt = sheet.cell(9, 3).unwrap();
        assert_eq!(alt.value, CellValue::Blank);
        assert_eq!(alt.format.fill, Some(GRAY_50));
        assert!(!alt.format.font.italic);
    }

    #[test]
    fn highlight_keeps_borders() {
        let mut sheet = Sheet::new("Test");
        data_row(&mut sheet, 8, 1, &["SOVEREIGN"], RowKind::default());
        highlight(&mut sheet, 8, 1, GOOD, Some(GREEN_50));
        let cell = sheet.cell(8, 1).unwrap();
        assert_eq!(cell.format.fill, Some(GREEN_50));
        assert!(cell.format.font.bold);
        assert_eq!(cell.format.borders, BODY.borders);
    }

    #[test]
    fn instruction_line_is_merged() {
        let mut sheet = Sheet::new("Test");
        instruction_line(&mut sheet, 5, "INSTRUCTIONS: ...", 10).unwrap();
        assert_eq!(sheet.merges[0].to_string(), "A5:J5");
    }
}
