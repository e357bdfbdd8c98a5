//! Resolves a table's styling rules into per-cell settings and measured
//! content, and emits rows (or slices of rows) as drawing elements.

use crate::config::{CellPadding, LayoutConfig};
use crate::elements::{LayoutElement, PositionedElement};
use crate::node::{Cell, PaddingSide, Table, TableRule};
use crate::text::{layout_paragraph, layout_plain, TextBlock, TextSettings};
use harbor_style::{TextAlign, VerticalAlign};
use harbor_types::Color;

type Edge = Option<(f32, Color)>;

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Edges {
    top: Edge,
    bottom: Edge,
    left: Edge,
    right: Edge,
}

#[derive(Debug, Clone)]
pub(crate) struct ResolvedCell {
    pub(crate) block: TextBlock,
    background: Option<Color>,
    padding: CellPadding,
    valign: VerticalAlign,
    edges: Edges,
}

impl ResolvedCell {
    fn vertical_padding(&self) -> f32 {
        self.padding.top + self.padding.bottom
    }

    fn remaining_height(&self, start: usize) -> f32 {
        self.block.lines.len().saturating_sub(start) as f32 * self.block.leading
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ResolvedRow {
    pub(crate) cells: Vec<ResolvedCell>,
}

impl ResolvedRow {
    /// Height of the row from the given per-cell line offsets to the end.
    pub(crate) fn remaining_height(&self, starts: &[usize]) -> f32 {
        self.cells
            .iter()
            .zip(starts)
            .map(|(cell, &start)| cell.remaining_height(start) + cell.vertical_padding())
            .fold(0.0, f32::max)
    }

    /// Per-cell line offsets reachable within `available` points, or `None`
    /// when no cell could place another line.
    pub(crate) fn split_point(&self, starts: &[usize], available: f32, tolerance: f32) -> Option<Vec<usize>> {
        let ends: Vec<usize> = self
            .cells
            .iter()
            .zip(starts)
            .map(|(cell, &start)| {
                let room = available - cell.vertical_padding() + tolerance;
                let fit = if cell.block.leading > 0.0 && room > 0.0 {
                    (room / cell.block.leading).floor() as usize
                } else {
                    0
                };
                (start + fit).min(cell.block.lines.len())
            })
            .collect();
        let progress = ends.iter().zip(starts).any(|(end, start)| end > start);
        progress.then_some(ends)
    }

    /// Height of the slice between two sets of line offsets.
    pub(crate) fn slice_height(&self, starts: &[usize], ends: &[usize]) -> f32 {
        self.cells
            .iter()
            .zip(starts.iter().zip(ends))
            .map(|(cell, (&start, &end))| end.saturating_sub(start) as f32 * cell.block.leading + cell.vertical_padding())
            .fold(0.0, f32::max)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ResolvedTable {
    pub(crate) rows: Vec<ResolvedRow>,
    col_offsets: Vec<f32>,
    col_widths: Vec<f32>,
}

struct CellSettings {
    text: TextSettings,
    background: Option<Color>,
    padding: CellPadding,
    valign: VerticalAlign,
    edges: Edges,
}

pub(crate) fn resolve(table: &Table, config: &LayoutConfig) -> ResolvedTable {
    let columns = table.column_count();
    let row_count = table.row_count();

    let mut col_offsets = Vec::with_capacity(columns);
    let mut x = 0.0;
    for width in &table.col_widths {
        col_offsets.push(x);
        x += width;
    }

    let rows = table
        .rows
        .iter()
        .enumerate()
        .map(|(r, row)| {
            let cells = (0..columns)
                .map(|c| {
                    let settings = cell_settings(table, c, r, columns, row_count, config);
                    let width = (table.col_widths[c] - settings.padding.left - settings.padding.right).max(0.0);
                    let block = match row.get(c).unwrap_or(&Cell::Empty) {
                        Cell::Empty => TextBlock {
                            lines: Vec::new(),
                            leading: settings.text.leading,
                        },
                        Cell::Text(text) => layout_plain(text, &settings.text, width),
                        Cell::Paragraph(paragraph) => layout_paragraph(paragraph, width),
                    };
                    ResolvedCell {
                        block,
                        background: settings.background,
                        padding: settings.padding,
                        valign: settings.valign,
                        edges: settings.edges,
                    }
                })
                .collect();
            ResolvedRow { cells }
        })
        .collect();

    ResolvedTable {
        rows,
        col_offsets,
        col_widths: table.col_widths.clone(),
    }
}

fn cell_settings(table: &Table, col: usize, row: usize, columns: usize, rows: usize, config: &LayoutConfig) -> CellSettings {
    let mut settings = CellSettings {
        text: TextSettings {
            font: config.cell_font,
            font_size: config.cell_font_size,
            leading: config.cell_leading,
            color: Color::BLACK,
            alignment: TextAlign::Left,
        },
        background: None,
        padding: config.cell_padding,
        valign: VerticalAlign::Bottom,
        edges: Edges::default(),
    };

    for rule in table.style.rules() {
        match rule {
            TableRule::Background(range, color) if range.contains(col, row, columns, rows) => {
                settings.background = Some(*color);
            }
            TableRule::RowBackgrounds(range, colors) if range.contains(col, row, columns, rows) && !colors.is_empty() => {
                let (_, first_row, _, _) = range.resolve(columns, rows);
                settings.background = Some(colors[(row - first_row) % colors.len()]);
            }
            TableRule::TextColor(range, color) if range.contains(col, row, columns, rows) => {
                settings.text.color = *color;
            }
            TableRule::Font(range, font, size) if range.contains(col, row, columns, rows) => {
                settings.text.font = *font;
                if let Some(size) = size {
                    settings.text.font_size = *size;
                    settings.text.leading = size * 1.2;
                }
            }
            TableRule::FontSize(range, size) if range.contains(col, row, columns, rows) => {
                settings.text.font_size = *size;
            }
            TableRule::Leading(range, leading) if range.contains(col, row, columns, rows) => {
                settings.text.leading = *leading;
            }
            TableRule::Align(range, align) if range.contains(col, row, columns, rows) => {
                settings.text.alignment = *align;
            }
            TableRule::VAlign(range, valign) if range.contains(col, row, columns, rows) => {
                settings.valign = *valign;
            }
            TableRule::Padding(range, side, value) if range.contains(col, row, columns, rows) => match side {
                PaddingSide::Top => settings.padding.top = *value,
                PaddingSide::Bottom => settings.padding.bottom = *value,
                PaddingSide::Left => settings.padding.left = *value,
                PaddingSide::Right => settings.padding.right = *value,
            },
            TableRule::Grid(range, width, color) if range.contains(col, row, columns, rows) => {
                let edge = Some((*width, *color));
                settings.edges = Edges {
                    top: edge,
                    bottom: edge,
                    left: edge,
                    right: edge,
                };
            }
            TableRule::Box(range, width, color) if range.contains(col, row, columns, rows) => {
                let (c0, r0, c1, r1) = range.resolve(columns, rows);
                let edge = Some((*width, *color));
                if row == r0 {
                    settings.edges.top = edge;
                }
                if row == r1 {
                    settings.edges.bottom = edge;
                }
                if col == c0 {
                    settings.edges.left = edge;
                }
                if col == c1 {
                    settings.edges.right = edge;
                }
            }
            TableRule::LineBelow(range, width, color) if range.contains(col, row, columns, rows) => {
                settings.edges.bottom = Some((*width, *color));
            }
            _ => {}
        }
    }
    settings
}

impl ResolvedTable {
    /// Emits the slice `starts..ends` of row `row` with its top-left corner
    /// at `(x, y)` and the given height.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn emit_row(
        &self,
        row: &ResolvedRow,
        x: f32,
        y: f32,
        height: f32,
        starts: &[usize],
        ends: &[usize],
        out: &mut Vec<PositionedElement>,
    ) {
        for (c, cell) in row.cells.iter().enumerate() {
            if let Some(fill) = cell.background {
                out.push(PositionedElement::rect(x + self.col_offsets[c], y, self.col_widths[c], height, fill));
            }
        }

        for (c, cell) in row.cells.iter().enumerate() {
            let (start, end) = (starts[c], ends[c].min(cell.block.lines.len()));
            if start >= end {
                continue;
            }
            let leading = cell.block.leading;
            let content = (end - start) as f32 * leading;
            let area = height - cell.vertical_padding();
            let offset = match cell.valign {
                VerticalAlign::Top => 0.0,
                VerticalAlign::Middle => ((area - content) / 2.0).max(0.0),
                VerticalAlign::Bottom => (area - content).max(0.0),
            };
            let cell_x = x + self.col_offsets[c] + cell.padding.left;
            for (i, placed) in cell.block.lines[start..end].iter().enumerate() {
                out.push(PositionedElement {
                    x: cell_x + placed.x,
                    y: y + cell.padding.top + offset + i as f32 * leading,
                    width: placed.width,
                    height: leading,
                    element: LayoutElement::Text(placed.line.clone()),
                });
            }
        }

        for (c, cell) in row.cells.iter().enumerate() {
            let left = x + self.col_offsets[c];
            let right = left + self.col_widths[c];
            let bottom = y + height;
            let Edges {
                top,
                bottom: below,
                left: before,
                right: after,
            } = cell.edges;
            if let Some((w, color)) = top {
                out.push(PositionedElement::line(left, y, right, y, w, color));
            }
            if let Some((w, color)) = below {
                out.push(PositionedElement::line(left, bottom, right, bottom, w, color));
            }
            if let Some((w, color)) = before {
                out.push(PositionedElement::line(left, y, left, bottom, w, color));
            }
            if let Some((w, color)) = after {
                out.push(PositionedElement::line(right, y, right, bottom, w, color));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{CellRange, Paragraph, TableStyle};
    use harbor_style::{ParagraphStyle, StandardFont};
    use std::sync::Arc;

    #[test]
    fn later_rules_win_and_row_backgrounds_cycle() {
        let table = Table::new(
            vec![vec!["h".into()], vec!["a".into()], vec!["b".into()], vec!["c".into()]],
            vec![100.0],
        )
        .with_style(
            TableStyle::new()
                .row_backgrounds(CellRange::rows_from(1), &[Color::WHITE, Color::gray(200)])
                .background(CellRange::row(0), Color::BLACK),
        );
        let resolved = resolve(&table, &LayoutConfig::default());
        let backgrounds: Vec<_> = resolved.rows.iter().map(|r| r.cells[0].background).collect();
        assert_eq!(
            backgrounds,
            vec![Some(Color::BLACK), Some(Color::WHITE), Some(Color::gray(200)), Some(Color::WHITE)]
        );
    }

    #[test]
    fn plain_cells_use_font_rules_and_default_padding() {
        let table = Table::new(vec![vec!["Status".into()]], vec![80.0]).with_style(
            TableStyle::new()
                .font(CellRange::all(), StandardFont::HelveticaBold)
                .font_size(CellRange::all(), 8.0),
        );
        let resolved = resolve(&table, &LayoutConfig::default());
        let cell = &resolved.rows[0].cells[0];
        assert_eq!(cell.block.lines[0].line.fragments[0].font, StandardFont::HelveticaBold);
        assert_eq!(cell.block.leading, 12.0);
        // 12pt line + 3pt top + 3pt bottom
        assert_eq!(resolved.rows[0].remaining_height(&[0]), 18.0);
    }

    #[test]
    fn paragraph_cells_wrap_inside_padding() {
        let style = Arc::new(ParagraphStyle::new("cell", StandardFont::Helvetica, 10.0, 15.0, Color::BLACK));
        let paragraph = Paragraph::new("aaaa aaaa aaaa", &style);
        // 62pt column - 12pt padding = 50pt of text
        let table = Table::new(vec![vec![paragraph.into()]], vec![62.0]);
        let resolved = resolve(&table, &LayoutConfig::default());
        assert_eq!(resolved.rows[0].cells[0].block.lines.len(), 2);
        assert_eq!(resolved.rows[0].remaining_height(&[0]), 36.0);
    }

    #[test]
    fn splitting_a_row_advances_each_cell_independently() {
        let style = Arc::new(ParagraphStyle::new("cell", StandardFont::Helvetica, 10.0, 10.0, Color::BLACK));
        let long = Paragraph::new("one<br/>two<br/>three<br/>four", &style);
        let table = Table::new(vec![vec![long.into(), "x".into()]], vec![100.0, 100.0])
            .with_style(TableStyle::new().padding(CellRange::all(), 0.0, 0.0));
        let resolved = resolve(&table, &LayoutConfig::default());
        let row = &resolved.rows[0];
        let ends = row.split_point(&[0, 0], 25.0, 0.01).unwrap();
        assert_eq!(ends, vec![2, 1]);
        assert_eq!(row.slice_height(&[0, 0], &ends), 20.0);
        assert!(row.split_point(&[0, 0], 5.0, 0.01).is_none());
    }

    #[test]
    fn box_sets_only_the_outer_edges() {
        let table = Table::new(vec![vec!["a".into(), "b".into()], vec!["c".into(), "d".into()]], vec![50.0, 50.0])
            .with_style(TableStyle::new().boxed(CellRange::all(), 1.0, Color::BLACK));
        let resolved = resolve(&table, &LayoutConfig::default());
        let top_left = resolved.rows[0].cells[0].edges;
        assert!(top_left.top.is_some() && top_left.left.is_some());
        assert!(top_left.bottom.is_none() && top_left.right.is_none());
    }
}
