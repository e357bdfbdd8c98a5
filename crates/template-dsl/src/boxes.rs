//! Shaded single-cell tables used for callouts, tips, warnings and notices.

use harbor_layout::{Cell, CellRange, Node, Paragraph, Table, TableStyle};
use harbor_style::palette::*;
use harbor_style::{inch, StandardFont, StyleRegistry, TextAlign};
use harbor_types::Color;

/// Everything that distinguishes one kind of callout box from another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStyle {
    pub background: Color,
    /// Outline width and colour, or `None` for a flat box.
    pub border: Option<(f32, Color)>,
    pub text_color: Color,
    pub font: StandardFont,
    pub font_size: f32,
    pub leading: f32,
    pub alignment: TextAlign,
    /// Vertical (top and bottom) padding.
    pub padding_vertical: f32,
    /// Horizontal (left and right) padding.
    pub padding_horizontal: f32,
    pub width: f32,
}

const fn preset(background: Color, border: Option<Color>, text_color: Color) -> BoxStyle {
    BoxStyle {
        background,
        border: match border {
            Some(color) => Some((1.5, color)),
            None => None,
        },
        text_color,
        font: StandardFont::Helvetica,
        font_size: 9.5,
        leading: 14.0,
        alignment: TextAlign::Justify,
        padding_vertical: 12.0,
        padding_horizontal: 14.0,
        width: inch(5.8),
    }
}

impl BoxStyle {
    pub const INFO: BoxStyle = preset(BLUE_50, Some(BLUE_600), NAVY);
    pub const WARNING: BoxStyle = preset(RED_50, Some(RED_600), RED_700);
    pub const TIP: BoxStyle = preset(CREAM, Some(GOLD), NAVY);
    pub const SUCCESS: BoxStyle = preset(GREEN_50, Some(GREEN_600), GREEN_700);
    pub const QUOTE: BoxStyle = preset(GRAY_50, Some(GRAY_400), NAVY);
    pub const NOTICE: BoxStyle = preset(GRAY_100, None, GRAY_700);
    pub const AMBER: BoxStyle = preset(AMBER_50, Some(AMBER_600), AMBER_700);
    pub const DARK: BoxStyle = preset(NAVY, None, WHITE);

    /// A box with the default geometry and typography in the given colours.
    pub const fn custom(background: Color, border: Option<Color>, text_color: Color) -> Self {
        preset(background, border, text_color)
    }

    pub const fn sized(mut self, font_size: f32, leading: f32) -> Self {
        self.font_size = font_size;
        self.leading = leading;
        self
    }

    pub const fn padded(mut self, vertical: f32, horizontal: f32) -> Self {
        self.padding_vertical = vertical;
        self.padding_horizontal = horizontal;
        self
    }

    pub const fn aligned(mut self, alignment: TextAlign) -> Self {
        self.alignment = alignment;
        self
    }

    pub const fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub const fn font(mut self, font: StandardFont) -> Self {
        self.font = font;
        self
    }

    pub const fn border(mut self, width: f32, color: Color) -> Self {
        self.border = Some((width, color));
        self
    }
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self::NOTICE
    }
}

/// Wraps marked-up text in a one-cell table drawn with `style`.
pub fn callout(styles: &StyleRegistry, text: &str, style: &BoxStyle) -> Node {
    let paragraph_style = styles.derive("body", |s| {
        s.named("Box")
            .with_font(style.font)
            .with_size(style.font_size, style.leading)
            .with_color(style.text_color)
            .with_alignment(style.alignment)
            .with_spacing(0.0, 0.0)
    });
    let mut table_style = TableStyle::new()
        .background(CellRange::all(), style.background)
        .padding(CellRange::all(), style.padding_vertical, style.padding_horizontal);
    if let Some((width, color)) = style.border {
        table_style = table_style.boxed(CellRange::all(), width, color);
    }
    Table::new(
        vec![vec![Cell::Paragraph(Paragraph::new(text, &paragraph_style))]],
        vec![style.width],
    )
    .with_style(table_style)
    .into()
}

/// A default-geometry box in arbitrary colours.
pub fn make_box(styles: &StyleRegistry, text: &str, background: Color, border: Option<Color>, text_color: Color) -> Node {
    callout(styles, text, &BoxStyle::custom(background, border, text_color))
}

pub fn warning_box(styles: &StyleRegistry, text: &str) -> Node {
    callout(styles, &format!("<b>WARNING:</b> {text}"), &BoxStyle::WARNING)
}

pub fn tip_box(styles: &StyleRegistry, title: &str, text: &str) -> Node {
    callout(styles, &format!("<b>{title}</b><br/>{text}"), &BoxStyle::TIP)
}

pub fn key_point_box(styles: &StyleRegistry, text: &str) -> Node {
    callout(styles, &format!("<b>KEY POINT:</b> {text}"), &BoxStyle::INFO)
}

/// Labelled content meant to be copied verbatim: a small grey caption, a
/// hairline, then the body.
pub fn copy_ready_box(styles: &StyleRegistry, label: &str, text: &str, background: Color, border: Color) -> Node {
    let caption = styles.derive("small", |s| {
        s.named("CopyReadyLabel")
            .with_font(StandardFont::HelveticaBold)
            .with_size(8.0, 10.0)
            .with_spacing(0.0, 0.0)
    });
    let body = styles.derive("body", |s| {
        s.named("CopyReadyBody")
            .with_size(9.5, 14.5)
            .with_color(NAVY)
            .with_spacing(0.0, 0.0)
    });
    let style = TableStyle::new()
        .background(CellRange::all(), background)
        .top_padding(CellRange::row(0), 8.0)
        .bottom_padding(CellRange::row(0), 2.0)
        .top_padding(CellRange::row(1), 4.0)
        .bottom_padding(CellRange::row(1), 12.0)
        .left_padding(CellRange::all(), 14.0)
        .right_padding(CellRange::all(), 14.0)
        .boxed(CellRange::all(), 1.0, border)
        .line_below(CellRange::row(0), 0.5, GRAY_200);
    Table::new(
        vec![
            vec![Paragraph::new(format!("<b>{label}</b>"), &caption).into()],
            vec![Paragraph::new(text, &body).into()],
        ],
        vec![inch(5.8)],
    )
    .with_style(style)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use harbor_layout::TableRule;

    fn table(node: Node) -> Table {
        match node {
            Node::Table(table) => table,
            other => panic!("expected a table, got {other:?}"),
        }
    }

    #[test]
    fn presets_carry_their_colours() {
        assert_eq!(BoxStyle::WARNING.background, RED_50);
        assert_eq!(BoxStyle::WARNING.border, Some((1.5, RED_600)));
        assert_eq!(BoxStyle::NOTICE.border, None);
        assert_eq!(BoxStyle::DARK.text_color, WHITE);
        assert_eq!(BoxStyle::default(), BoxStyle::NOTICE);
    }

    #[test]
    fn callout_is_a_single_cell_table() {
        let styles = StyleRegistry::standard();
        let boxed = table(callout(&styles, "<b>Note:</b> text", &BoxStyle::INFO));
        assert_eq!((boxed.row_count(), boxed.column_count()), (1, 1));
        assert!((boxed.width() - inch(5.8)).abs() < 1e-3);
        assert!(boxed.style.rules().iter().any(|r| matches!(r, TableRule::Box(_, w, c) if *w == 1.5 && *c == BLUE_600)));
        match &boxed.rows[0][0] {
            Cell::Paragraph(p) => {
                assert_eq!(p.style.color, NAVY);
                assert_eq!(p.style.space_after, 0.0);
            }
            other => panic!("expected a paragraph cell, got {other:?}"),
        }
    }

    #[test]
    fn flat_boxes_have_no_outline() {
        let styles = StyleRegistry::standard();
        let flat = table(callout(&styles, "text", &BoxStyle::NOTICE));
        assert!(!flat.style.rules().iter().any(|r| matches!(r, TableRule::Box(..))));
    }

    #[test]
    fn copy_ready_box_has_caption_and_body_rows() {
        let styles = StyleRegistry::standard();
        let boxed = table(copy_ready_box(&styles, "COPY THIS", "Body", GRAY_50, GRAY_400));
        assert_eq!(boxed.row_count(), 2);
        assert!(boxed.style.rules().iter().any(|r| matches!(r, TableRule::LineBelow(..))));
    }
}
