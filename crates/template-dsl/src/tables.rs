//! Table builders: striped data tables, label/value metadata, checklists
//! and signature lines.

use harbor_layout::{Cell, CellRange, Node, Paragraph, Rule, Table, TableRule, TableStyle};
use harbor_style::palette::*;
use harbor_style::{inch, ParagraphStyle, StandardFont, StyleRegistry, TextAlign, VerticalAlign};
use harbor_types::Color;
use std::sync::Arc;

/// A fluent builder for the navy-headed, striped, grid-lined tables used
/// throughout the documents.
///
/// ```ignore
/// let table = DataTable::new(&[inch(1.6), inch(2.0)])
///     .header(["System", "Examples"])
///     .row(["EMR", "Epic, Athenahealth"])
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct DataTable {
    col_widths: Vec<f32>,
    header: Option<Vec<Cell>>,
    rows: Vec<Vec<Cell>>,
    header_background: Color,
    header_font_size: f32,
    body_font_size: f32,
    stripes: Vec<Color>,
    padding: (f32, f32),
    valign: VerticalAlign,
    grid: Option<(f32, Color)>,
    body_style: Option<Arc<ParagraphStyle>>,
    extra: Vec<TableRule>,
}

impl DataTable {
    pub fn new(col_widths: &[f32]) -> Self {
        Self {
            col_widths: col_widths.to_vec(),
            header: None,
            rows: Vec::new(),
            header_background: NAVY,
            header_font_size: 8.0,
            body_font_size: 8.0,
            stripes: vec![WHITE, GRAY_100],
            padding: (5.0, 8.0),
            valign: VerticalAlign::Top,
            grid: Some((0.5, GRAY_200)),
            body_style: None,
            extra: Vec::new(),
        }
    }

    pub fn header<C: Into<Cell>>(mut self, cells: impl IntoIterator<Item = C>) -> Self {
        self.header = Some(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn row<C: Into<Cell>>(mut self, cells: impl IntoIterator<Item = C>) -> Self {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn rows<C: Into<Cell>, R: IntoIterator<Item = C>>(self, rows: impl IntoIterator<Item = R>) -> Self {
        rows.into_iter().fold(self, |table, row| table.row(row))
    }

    pub fn header_background(mut self, color: Color) -> Self {
        self.header_background = color;
        self
    }

    pub fn header_font_size(mut self, size: f32) -> Self {
        self.header_font_size = size;
        self
    }

    pub fn body_font_size(mut self, size: f32) -> Self {
        self.body_font_size = size;
        self
    }

    pub fn stripes(mut self, colors: &[Color]) -> Self {
        self.stripes = colors.to_vec();
        self
    }

    pub fn padding(mut self, vertical: f32, horizontal: f32) -> Self {
        self.padding = (vertical, horizontal);
        self
    }

    pub fn valign(mut self, valign: VerticalAlign) -> Self {
        self.valign = valign;
        self
    }

    pub fn grid(mut self, width: f32, color: Color) -> Self {
        self.grid = Some((width, color));
        self
    }

    /// Wraps plain body text as paragraphs in `style` instead of leaving
    /// it on one line.
    pub fn wrap_body(mut self, style: &Arc<ParagraphStyle>) -> Self {
        self.body_style = Some(Arc::clone(style));
        self
    }

    /// An additional rule applied after the built-in ones.
    pub fn rule(mut self, rule: TableRule) -> Self {
        self.extra.push(rule);
        self
    }

    pub fn build(self) -> Table {
        let body_start = i32::from(self.header.is_some());
        let mut style = TableStyle::new();
        if self.header.is_some() {
            let header = CellRange::row(0);
            style = style
                .background(header, self.header_background)
                .text_color(header, WHITE)
                .font(header, StandardFont::HelveticaBold)
                .font_size(header, self.header_font_size);
        }
        let body = CellRange::rows_from(body_start);
        style = style
            .font(body, StandardFont::Helvetica)
            .font_size(body, self.body_font_size)
            .text_color(body, GRAY_700)
            .row_backgrounds(body, &self.stripes);
        if let Some((width, color)) = self.grid {
            style = style.grid(CellRange::all(), width, color);
        }
        style = style
            .padding(CellRange::all(), self.padding.0, self.padding.1)
            .valign(CellRange::all(), self.valign);
        for rule in self.extra {
            style = style.push(rule);
        }

        let body_rows = match &self.body_style {
            Some(style) => self
                .rows
                .into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|cell| match cell {
                            Cell::Text(text) => Cell::Paragraph(Paragraph::new(text, style)),
                            other => other,
                        })
                        .collect()
                })
                .collect(),
            None => self.rows,
        };
        let mut rows = Vec::with_capacity(body_rows.len() + 1);
        rows.extend(self.header);
        rows.extend(body_rows);
        Table::new(rows, self.col_widths).with_style(style)
    }
}

impl From<DataTable> for Node {
    fn from(table: DataTable) -> Self {
        Node::Table(table.build())
    }
}

/// Two-column "Label:" / value rows as on the cover pages.
pub fn meta_table(rows: &[(&str, &str)], col_widths: [f32; 2], vertical_padding: f32) -> Node {
    let cells = rows
        .iter()
        .map(|(label, value)| vec![Cell::from(*label), Cell::from(*value)])
        .collect();
    let style = TableStyle::new()
        .font(CellRange::column(0), StandardFont::HelveticaBold)
        .font(CellRange::column(1), StandardFont::Helvetica)
        .font_size(CellRange::all(), 9.0)
        .text_color(CellRange::column(0), GRAY_500)
        .text_color(CellRange::column(1), GRAY_900)
        .top_padding(CellRange::all(), vertical_padding)
        .bottom_padding(CellRange::all(), vertical_padding)
        .left_padding(CellRange::all(), 0.0)
        .valign(CellRange::all(), VerticalAlign::Top);
    Table::new(cells, col_widths.to_vec()).with_style(style).into()
}

/// Header cells of every checklist.
pub const CHECKLIST_HEADER: [&str; 4] = ["", "Task", "Owner", "Deliverable"];

/// Widths of the checkbox, task, owner and deliverable columns.
pub const CHECKLIST_WIDTHS: [f32; 4] = [inch(0.45), inch(2.9), inch(1.1), inch(1.35)];

/// A four-column task list with an empty checkbox per row.
///
/// Produces one header row plus one row per item, in input order.
pub fn checklist_table(styles: &StyleRegistry, items: &[(&str, &str, &str)], accent: Color) -> Node {
    let task = styles.derive("cell", |s| s.with_size(9.0, 13.0));
    let header = &styles["cell_header"];

    let mut rows: Vec<Vec<Cell>> = Vec::with_capacity(items.len() + 1);
    rows.push(
        CHECKLIST_HEADER
            .iter()
            .map(|label| {
                if label.is_empty() {
                    Cell::Empty
                } else {
                    Paragraph::new(format!("<b>{label}</b>"), header).into()
                }
            })
            .collect(),
    );
    for (description, owner, deliverable) in items {
        rows.push(vec![
            Paragraph::new("[  ]", &styles["cell_check"]).into(),
            Paragraph::new(*description, &task).into(),
            Paragraph::new(*owner, &styles["cell_small"]).into(),
            Paragraph::new(*deliverable, &styles["cell_small"]).into(),
        ]);
    }

    let style = TableStyle::new()
        .background(CellRange::row(0), accent)
        .row_backgrounds(CellRange::rows_from(1), &[WHITE, GRAY_50])
        .grid(CellRange::all(), 0.5, GRAY_200)
        .padding(CellRange::all(), 6.0, 6.0)
        .valign(CellRange::all(), VerticalAlign::Top)
        .valign(CellRange::new((0, 1), (0, -1)), VerticalAlign::Middle);
    Table::new(rows, CHECKLIST_WIDTHS.to_vec()).with_style(style).into()
}

/// A label, a rule to sign on spanning `width_percent` of the frame, an
/// optional hint, and a gap.
pub fn signature_line(
    styles: &StyleRegistry,
    label: &str,
    hint: Option<&str>,
    width_percent: f32,
    gap: f32,
) -> Vec<Node> {
    let mut nodes = vec![
        Node::paragraph(label, &styles["sig_label"]),
        Rule::new(width_percent, 0.5, GRAY_500)
            .aligned(TextAlign::Left)
            .spacing(1.0, 2.0)
            .into(),
    ];
    if let Some(hint) = hint {
        nodes.push(Node::paragraph(hint, &styles["small"]));
    }
    if gap > 0.0 {
        nodes.push(Node::spacer(gap));
    }
    nodes
}

/// Signature lines of one width for each label; an empty label inserts a
/// 10pt gap.
pub fn signature_block(styles: &StyleRegistry, labels: &[&str], width_percent: f32, gap: f32) -> Vec<Node> {
    labels
        .iter()
        .flat_map(|label| {
            if label.is_empty() {
                vec![Node::spacer(10.0)]
            } else {
                signature_line(styles, label, None, width_percent, gap)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(node: Node) -> Table {
        match node {
            Node::Table(table) => table,
            other => panic!("expected a table, got {other:?}"),
        }
    }

    fn paragraph_text(cell: &Cell) -> &str {
        match cell {
            Cell::Paragraph(p) => &p.markup,
            other => panic!("expected a paragraph cell, got {other:?}"),
        }
    }

    #[test]
    fn checklist_has_one_row_per_item_plus_header() {
        let styles = StyleRegistry::standard();
        let items = [
            ("Run the scan", "Practice Manager", "Report"),
            ("Sign the policy", "Owner", "Signed PDF"),
            ("Train staff", "Office Admin", "Attestations"),
        ];
        let checklist = table(checklist_table(&styles, &items, NAVY));
        assert_eq!(checklist.row_count(), items.len() + 1);
        assert_eq!(checklist.column_count(), 4);
        assert!(checklist.rows.iter().all(|row| row.len() == 4));
        assert_eq!(checklist.rows[0][0], Cell::Empty);
        assert_eq!(paragraph_text(&checklist.rows[0][1]), "<b>Task</b>");
        for (row, (task, owner, deliverable)) in checklist.rows[1..].iter().zip(items) {
            assert_eq!(paragraph_text(&row[1]), task);
            assert_eq!(paragraph_text(&row[2]), owner);
            assert_eq!(paragraph_text(&row[3]), deliverable);
        }
    }

    #[test]
    fn empty_checklist_is_header_only() {
        let styles = StyleRegistry::standard();
        let checklist = table(checklist_table(&styles, &[], GREEN_600));
        assert_eq!(checklist.row_count(), 1);
    }

    #[test]
    fn data_table_puts_the_header_first() {
        let built = DataTable::new(&[100.0, 100.0])
            .header(["A", "B"])
            .rows([["1", "2"], ["3", "4"]])
            .build();
        assert_eq!(built.row_count(), 3);
        assert_eq!(built.rows[0][0], Cell::Text("A".to_string()));
        assert!(built.style.rules().iter().any(|r| matches!(r, TableRule::Grid(_, w, c) if *w == 0.5 && *c == GRAY_200)));
    }

    #[test]
    fn wrapped_bodies_become_paragraphs() {
        let styles = StyleRegistry::standard();
        let built = DataTable::new(&[100.0])
            .header(["Head"])
            .row(["A long body cell"])
            .wrap_body(&styles["cell"])
            .build();
        assert_eq!(built.rows[0][0], Cell::Text("Head".to_string()));
        assert_eq!(paragraph_text(&built.rows[1][0]), "A long body cell");
    }

    #[test]
    fn meta_table_has_two_columns() {
        let meta = table(meta_table(&[("Version:", "1.0")], [inch(1.6), inch(4.0)], 4.0));
        assert_eq!((meta.row_count(), meta.column_count()), (1, 2));
    }

    #[test]
    fn blank_signature_labels_become_gaps() {
        let styles = StyleRegistry::standard();
        let nodes = signature_block(&styles, &["Name", "", "Date"], 65.0, 8.0);
        // label + rule + gap, a lone gap, label + rule + gap
        assert_eq!(nodes.len(), 7);
        assert_eq!(nodes[3], Node::spacer(10.0));
    }

    #[test]
    fn signature_rules_take_the_requested_width() {
        let styles = StyleRegistry::standard();
        let nodes = signature_line(&styles, "Date:", None, 40.0, 0.0);
        assert_eq!(nodes.len(), 2);
        match &nodes[1] {
            Node::Rule(rule) => assert_eq!(rule.width_percent, 40.0),
            other => panic!("expected a rule, got {other:?}"),
        }
    }
}
