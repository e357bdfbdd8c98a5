//! The story model: an ordered list of block-level nodes.

use harbor_style::{ParagraphStyle, StandardFont, TextAlign, VerticalAlign};
use harbor_types::Color;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Paragraph(Paragraph),
    Spacer(f32),
    Table(Table),
    Rule(Rule),
    PageBreak,
}

impl Node {
    pub fn paragraph(markup: impl Into<String>, style: &Arc<ParagraphStyle>) -> Self {
        Node::Paragraph(Paragraph::new(markup, style))
    }

    pub fn spacer(height: f32) -> Self {
        Node::Spacer(height)
    }
}

impl From<Paragraph> for Node {
    fn from(paragraph: Paragraph) -> Self {
        Node::Paragraph(paragraph)
    }
}

impl From<Table> for Node {
    fn from(table: Table) -> Self {
        Node::Table(table)
    }
}

impl From<Rule> for Node {
    fn from(rule: Rule) -> Self {
        Node::Rule(rule)
    }
}

/// Marked-up text (`<b>`, `<i>`, `<u>`, `<br/>`, entities) in a shared style.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub markup: String,
    pub style: Arc<ParagraphStyle>,
}

impl Paragraph {
    pub fn new(markup: impl Into<String>, style: &Arc<ParagraphStyle>) -> Self {
        Self {
            markup: markup.into(),
            style: Arc::clone(style),
        }
    }
}

/// A horizontal rule drawn across a share of the frame width.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub width_percent: f32,
    pub thickness: f32,
    pub color: Color,
    pub align: TextAlign,
    pub space_before: f32,
    pub space_after: f32,
}

impl Rule {
    pub fn new(width_percent: f32, thickness: f32, color: Color) -> Self {
        Self {
            width_percent,
            thickness,
            color,
            align: TextAlign::Center,
            space_before: 1.0,
            space_after: 1.0,
        }
    }

    pub fn aligned(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn spacing(mut self, before: f32, after: f32) -> Self {
        self.space_before = before;
        self.space_after = after;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    /// Unwrapped text, broken only at `\n`, styled by the table's rules.
    Text(String),
    Paragraph(Paragraph),
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::Text(text)
    }
}

impl From<Paragraph> for Cell {
    fn from(paragraph: Paragraph) -> Self {
        Cell::Paragraph(paragraph)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub rows: Vec<Vec<Cell>>,
    /// Column widths in points.
    pub col_widths: Vec<f32>,
    pub style: TableStyle,
    /// Placement of the table within the frame.
    pub align: TextAlign,
}

impl Table {
    pub fn new(rows: Vec<Vec<Cell>>, col_widths: Vec<f32>) -> Self {
        Self {
            rows,
            col_widths,
            style: TableStyle::new(),
            align: TextAlign::Center,
        }
    }

    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    pub fn aligned(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.col_widths.len()
    }

    pub fn width(&self) -> f32 {
        self.col_widths.iter().sum()
    }
}

/// A rectangular block of cells as `(column, row)` corners, inclusive.
/// Negative indices count back from the last column or row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub start: (i32, i32),
    pub end: (i32, i32),
}

impl CellRange {
    pub const fn new(start: (i32, i32), end: (i32, i32)) -> Self {
        Self { start, end }
    }

    pub const fn all() -> Self {
        Self::new((0, 0), (-1, -1))
    }

    pub const fn row(row: i32) -> Self {
        Self::new((0, row), (-1, row))
    }

    pub const fn rows_from(row: i32) -> Self {
        Self::new((0, row), (-1, -1))
    }

    pub const fn column(col: i32) -> Self {
        Self::new((col, 0), (col, -1))
    }

    pub const fn cell(col: i32, row: i32) -> Self {
        Self::new((col, row), (col, row))
    }

    /// Concrete `(col_start, row_start, col_end, row_end)` for a table of
    /// the given shape.
    pub fn resolve(&self, columns: usize, rows: usize) -> (usize, usize, usize, usize) {
        let fix = |value: i32, count: usize| -> usize {
            let count = count as i32;
            let v = if value < 0 { count + value } else { value };
            v.clamp(0, (count - 1).max(0)) as usize
        };
        (
            fix(self.start.0, columns),
            fix(self.start.1, rows),
            fix(self.end.0, columns),
            fix(self.end.1, rows),
        )
    }

    /// Out-of-range corners select nothing, so `rows_from(1)` on a
    /// header-only table is empty.
    pub fn contains(&self, col: usize, row: usize, columns: usize, rows: usize) -> bool {
        let fix = |value: i32, count: usize| if value < 0 { count as i32 + value } else { value };
        let (col, row) = (col as i32, row as i32);
        (fix(self.start.0, columns)..=fix(self.end.0, columns)).contains(&col)
            && (fix(self.start.1, rows)..=fix(self.end.1, rows)).contains(&row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingSide {
    Top,
    Bottom,
    Left,
    Right,
}

/// One styling command, applied in order.
#[derive(Debug, Clone, PartialEq)]
pub enum TableRule {
    Background(CellRange, Color),
    /// Colours cycled over the rows of the range.
    RowBackgrounds(CellRange, Vec<Color>),
    TextColor(CellRange, Color),
    /// Face and optional size; a size also resets leading to 1.2 × size.
    Font(CellRange, StandardFont, Option<f32>),
    FontSize(CellRange, f32),
    Leading(CellRange, f32),
    Align(CellRange, TextAlign),
    VAlign(CellRange, VerticalAlign),
    Padding(CellRange, PaddingSide, f32),
    Grid(CellRange, f32, Color),
    Box(CellRange, f32, Color),
    LineBelow(CellRange, f32, Color),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableStyle {
    rules: Vec<TableRule>,
}

impl TableStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rules(&self) -> &[TableRule] {
        &self.rules
    }

    pub fn push(mut self, rule: TableRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn background(self, range: CellRange, color: Color) -> Self {
        self.push(TableRule::Background(range, color))
    }

    pub fn row_backgrounds(self, range: CellRange, colors: &[Color]) -> Self {
        self.push(TableRule::RowBackgrounds(range, colors.to_vec()))
    }

    pub fn text_color(self, range: CellRange, color: Color) -> Self {
        self.push(TableRule::TextColor(range, color))
    }

    pub fn font(self, range: CellRange, font: StandardFont) -> Self {
        self.push(TableRule::Font(range, font, None))
    }

    pub fn font_size(self, range: CellRange, size: f32) -> Self {
        self.push(TableRule::FontSize(range, size))
    }

    pub fn leading(self, range: CellRange, leading: f32) -> Self {
        self.push(TableRule::Leading(range, leading))
    }

    pub fn align(self, range: CellRange, align: TextAlign) -> Self {
        self.push(TableRule::Align(range, align))
    }

    pub fn valign(self, range: CellRange, valign: VerticalAlign) -> Self {
        self.push(TableRule::VAlign(range, valign))
    }

    pub fn top_padding(self, range: CellRange, value: f32) -> Self {
        self.push(TableRule::Padding(range, PaddingSide::Top, value))
    }

    pub fn bottom_padding(self, range: CellRange, value: f32) -> Self {
        self.push(TableRule::Padding(range, PaddingSide::Bottom, value))
    }

    pub fn left_padding(self, range: CellRange, value: f32) -> Self {
        self.push(TableRule::Padding(range, PaddingSide::Left, value))
    }

    pub fn right_padding(self, range: CellRange, value: f32) -> Self {
        self.push(TableRule::Padding(range, PaddingSide::Right, value))
    }

    /// Top/bottom and left/right padding in one call.
    pub fn padding(self, range: CellRange, vertical: f32, horizontal: f32) -> Self {
        self.top_padding(range, vertical)
            .bottom_padding(range, vertical)
            .left_padding(range, horizontal)
            .right_padding(range, horizontal)
    }

    pub fn grid(self, range: CellRange, width: f32, color: Color) -> Self {
        self.push(TableRule::Grid(range, width, color))
    }

    pub fn boxed(self, range: CellRange, width: f32, color: Color) -> Self {
        self.push(TableRule::Box(range, width, color))
    }

    pub fn line_below(self, range: CellRange, width: f32, color: Color) -> Self {
        self.push(TableRule::LineBelow(range, width, color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_indices_count_from_the_end() {
        let range = CellRange::new((1, 0), (-1, -2));
        assert_eq!(range.resolve(4, 10), (1, 0, 3, 8));
        assert!(range.contains(3, 8, 4, 10));
        assert!(!range.contains(0, 0, 4, 10));
        assert!(!range.contains(2, 9, 4, 10));
    }

    #[test]
    fn convenience_ranges() {
        assert_eq!(CellRange::row(0).resolve(3, 5), (0, 0, 2, 0));
        assert_eq!(CellRange::rows_from(1).resolve(3, 5), (0, 1, 2, 4));
        assert_eq!(CellRange::column(0).resolve(3, 5), (0, 0, 0, 4));
    }

    #[test]
    fn ranges_past_the_last_row_are_empty() {
        assert!(!CellRange::rows_from(1).contains(0, 0, 3, 1));
    }

    #[test]
    fn padding_shorthand_expands_to_four_rules() {
        let style = TableStyle::new().padding(CellRange::all(), 4.0, 8.0);
        assert_eq!(style.rules().len(), 4);
    }
}
