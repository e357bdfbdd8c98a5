//! Serialises a [`Workbook`] to XLSX with `rust_xlsxwriter`.

use crate::format::{Border, BorderStyle, CellFormat, HAlign, VAlign};
use crate::model::{CellRange, CellRef, CellValue, ListValidation, Sheet, Workbook};
use crate::LedgerError;
use rust_xlsxwriter::{
    Color as XlsxColor, DataValidation, DocProperties, ExcelDateTime, Format, FormatAlign, FormatBorder, Formula,
    Worksheet,
};

/// Renders the workbook to XLSX bytes in memory.
pub fn to_bytes(book: &Workbook) -> Result<Vec<u8>, LedgerError> {
    let mut workbook = rust_xlsxwriter::Workbook::new();

    let props = &book.properties;
    let created = ExcelDateTime::from_ymd(props.created.year, props.created.month, props.created.day)?;
    let properties = DocProperties::new()
        .set_title(&props.title)
        .set_author(&props.author)
        .set_subject(&props.subject)
        .set_company(&props.company)
        .set_creation_datetime(&created);
    workbook.set_properties(&properties);

    for sheet in &book.sheets {
        let worksheet = workbook.add_worksheet();
        write_sheet(worksheet, sheet)?;
    }

    let bytes = workbook.save_to_buffer()?;
    log::debug!("Serialised {} sheets into {} bytes", book.sheets.len(), bytes.len());
    Ok(bytes)
}

fn write_sheet(worksheet: &mut Worksheet, sheet: &Sheet) -> Result<(), LedgerError> {
    worksheet.set_name(&sheet.name)?;
    if let Some(color) = sheet.tab_color {
        worksheet.set_tab_color(xlsx_color(color));
    }
    for (&col, &width) in &sheet.column_widths {
        worksheet.set_column_width(zero_based_col(col)?, width)?;
    }
    for (&row, &height) in &sheet.row_heights {
        worksheet.set_row_height(zero_based_row(row)?, height)?;
    }

    for range in &sheet.merges {
        let (first_row, first_col, last_row, last_col) = zero_based_range(range)?;
        let (text, format) = match sheet.cell(range.first.row, range.first.col) {
            Some(cell) => (cell.value.as_text().unwrap_or_default(), xlsx_format(&cell.format)),
            None => ("", Format::new()),
        };
        worksheet.merge_range(first_row, first_col, last_row, last_col, text, &format)?;
    }

    for (at, cell) in sheet.cells() {
        if sheet.merge_containing(at).is_some() {
            continue;
        }
        let (row, col) = zero_based(at)?;
        let format = xlsx_format(&cell.format);
        match &cell.value {
            CellValue::Text(text) => worksheet.write_string_with_format(row, col, text, &format)?,
            CellValue::Formula(formula) => {
                worksheet.write_formula_with_format(row, col, Formula::new(formula), &format)?
            }
            CellValue::Blank => worksheet.write_blank(row, col, &format)?,
        };
    }

    for validation in &sheet.validations {
        let (first_row, first_col, last_row, last_col) = zero_based_range(&validation.range)?;
        worksheet.add_data_validation(first_row, first_col, last_row, last_col, &data_validation(validation)?)?;
    }

    if let Some(freeze) = sheet.freeze {
        let (row, col) = zero_based(freeze)?;
        worksheet.set_freeze_panes(row, col)?;
    }
    if let Some(range) = &sheet.autofilter {
        let (first_row, first_col, last_row, last_col) = zero_based_range(range)?;
        worksheet.autofilter(first_row, first_col, last_row, last_col)?;
    }
    Ok(())
}

fn data_validation(validation: &ListValidation) -> Result<DataValidation, LedgerError> {
    let mut out = DataValidation::new().allow_list_strings(validation.options.as_slice())?;
    if let Some(prompt) = &validation.prompt {
        out = out.set_input_message(prompt.as_str())?;
    }
    if let Some(error) = &validation.error {
        out = out.set_error_message(error.as_str())?;
    }
    Ok(out)
}

fn xlsx_color(color: harbor_types::Color) -> XlsxColor {
    XlsxColor::RGB(color.to_rgb_u32())
}

fn xlsx_border(border: &Border) -> FormatBorder {
    match border.style {
        BorderStyle::Thin => FormatBorder::Thin,
        BorderStyle::Medium => FormatBorder::Medium,
    }
}

fn xlsx_format(format: &CellFormat) -> Format {
    let font = &format.font;
    let mut out = Format::new()
        .set_font_name(font.name)
        .set_font_size(font.size)
        .set_font_color(xlsx_color(font.color));
    if font.bold {
        out = out.set_bold();
    }
    if font.italic {
        out = out.set_italic();
    }
    if let Some(fill) = format.fill {
        out = out.set_background_color(xlsx_color(fill));
    }
    out = match format.align {
        HAlign::General => out,
        HAlign::Left => out.set_align(FormatAlign::Left),
        HAlign::Center => out.set_align(FormatAlign::Center),
        HAlign::Right => out.set_align(FormatAlign::Right),
    };
    out = match format.valign {
        VAlign::Bottom => out,
        VAlign::Center => out.set_align(FormatAlign::VerticalCenter),
        VAlign::Top => out.set_align(FormatAlign::Top),
    };
    if format.wrap {
        out = out.set_text_wrap();
    }

    let borders = &format.borders;
    if let Some(border) = &borders.top {
        out = out.set_border_top(xlsx_border(border)).set_border_top_color(xlsx_color(border.color));
    }
    if let Some(border) = &borders.bottom {
        out = out
            .set_border_bottom(xlsx_border(border))
            .set_border_bottom_color(xlsx_color(border.color));
    }
    if let Some(border) = &borders.left {
        out = out.set_border_left(xlsx_border(border)).set_border_left_color(xlsx_color(border.color));
    }
    if let Some(border) = &borders.right {
        out = out
            .set_border_right(xlsx_border(border))
            .set_border_right_color(xlsx_color(border.color));
    }
    out
}

fn zero_based_row(row: u32) -> Result<u32, LedgerError> {
    row.checked_sub(1)
        .ok_or_else(|| LedgerError::InvalidRange("row 0 is not 1-based".to_string()))
}

fn zero_based_col(col: u16) -> Result<u16, LedgerError> {
    col.checked_sub(1)
        .ok_or_else(|| LedgerError::InvalidRange("column 0 is not 1-based".to_string()))
}

fn zero_based(cell: CellRef) -> Result<(u32, u16), LedgerError> {
    Ok((zero_based_row(cell.row)?, zero_based_col(cell.col)?))
}

fn zero_based_range(range: &CellRange) -> Result<(u32, u16, u32, u16), LedgerError> {
    let (first_row, first_col) = zero_based(range.first)?;
    let (last_row, last_col) = zero_based(range.last)?;
    Ok((first_row, first_col, last_row, last_col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{self, RowKind};
    use crate::model::{CreationDate, Properties};

    fn sample() -> Workbook {
        let mut book = Workbook::new(Properties {
            title: "Test Ledger".into(),
            author: "Harbor".into(),
            subject: "Tests".into(),
            company: "Harbor".into(),
            created: CreationDate::new(2026, 2, 1),
        });
        let mut sheet = Sheet::new("Vendors");
        let next = blocks::title_block(&mut sheet, "VENDORS", "Register", 1);
        blocks::instruction_line(&mut sheet, next + 1, "INSTRUCTIONS: fill in", 3).unwrap();
        blocks::header_row(&mut sheet, 7, &["#", "Name", "Status"], &[5.0, 20.0, 14.0]);
        blocks::data_row(&mut sheet, 8, 3, &["1", "Acme", "SOVEREIGN"], RowKind::new(true, false));
        blocks::data_row(&mut sheet, 9, 3, &["2"], RowKind::new(false, true));
        sheet.write(11, 3, "=COUNTA(B8:B9)", blocks::SECTION);
        sheet.add_validation(ListValidation::new(CellRange::column(3, 8, 10).unwrap(), "SOVEREIGN,PENDING"));
        sheet.freeze_at(CellRef::new(8, 1));
        sheet.set_autofilter(CellRange::new(CellRef::new(7, 1), CellRef::new(9, 3)).unwrap());
        book.push(sheet);
        book
    }

    #[test]
    fn writes_a_zip_container() {
        let bytes = to_bytes(&sample()).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn output_is_deterministic() {
        let book = sample();
        assert_eq!(to_bytes(&book).unwrap(), to_bytes(&book).unwrap());
    }

    #[test]
    fn zero_rows_are_rejected() {
        let mut book = sample();
        book.sheets[0].write(0, 1, "bad", CellFormat::DEFAULT);
        assert!(matches!(to_bytes(&book), Err(LedgerError::InvalidRange(_))));
    }
}
