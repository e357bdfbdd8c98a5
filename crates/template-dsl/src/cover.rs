//! Building blocks of the cover pages.

use crate::boxes::{callout, BoxStyle};
use harbor_layout::{CellRange, Node, Paragraph, Rule, Table, TableStyle};
use harbor_style::palette::{GOLD, NAVY, NAVY_LIGHT};
use harbor_style::{inch, StandardFont, StyleRegistry, TextAlign};

/// Width of the classification banner and the highlight box.
pub const COVER_WIDTH: f32 = inch(5.5);

/// A navy band with centred gold capitals.
pub fn banner(text: &str, width: f32) -> Node {
    let style = TableStyle::new()
        .background(CellRange::all(), NAVY)
        .text_color(CellRange::all(), GOLD)
        .font(CellRange::all(), StandardFont::HelveticaBold)
        .font_size(CellRange::all(), 8.0)
        .align(CellRange::all(), TextAlign::Center)
        .padding(CellRange::all(), 8.0, 20.0);
    Table::new(vec![vec![text.into()]], vec![width]).with_style(style).into()
}

/// The large title followed by a short gold rule.
pub fn cover_title(styles: &StyleRegistry, markup: &str) -> Vec<Node> {
    vec![
        Node::paragraph(markup, &styles["title"]),
        Node::spacer(4.0),
        Rule::new(40.0, 2.5, GOLD)
            .aligned(TextAlign::Left)
            .spacing(1.0, 16.0)
            .into(),
    ]
}

/// The descriptive paragraph under the cover title.
pub fn cover_lead(styles: &StyleRegistry, text: &str, space_after: f32) -> Node {
    let style = styles.derive("subtitle", |s| {
        s.named("CoverLead")
            .with_size(11.0, 16.0)
            .with_color(NAVY_LIGHT)
            .with_spacing(0.0, space_after)
    });
    Paragraph::new(text, &style).into()
}

/// The green headline box of a cover (duration, objective).
pub fn cover_highlight(styles: &StyleRegistry, text: &str) -> Node {
    callout(
        styles,
        text,
        &BoxStyle::SUCCESS.aligned(TextAlign::Left).width(COVER_WIDTH),
    )
}

/// Fine print in a flat grey panel.
pub fn disclaimer(styles: &StyleRegistry, text: &str) -> Node {
    callout(
        styles,
        text,
        &BoxStyle::NOTICE.sized(8.0, 11.0).padded(10.0, 14.0).width(inch(6.0)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_is_one_centred_cell() {
        match banner("CONFIDENTIAL", COVER_WIDTH) {
            Node::Table(t) => {
                assert_eq!(t.rows.len(), 1);
                assert_eq!(t.rows[0][0], harbor_layout::Cell::Text("CONFIDENTIAL".to_string()));
            }
            other => panic!("expected a table, got {other:?}"),
        }
    }

    #[test]
    fn cover_title_ends_with_a_short_left_rule() {
        let styles = StyleRegistry::standard();
        let nodes = cover_title(&styles, "AI Transparency<br/>Disclosure Kit");
        match nodes.last() {
            Some(Node::Rule(rule)) => {
                assert_eq!(rule.width_percent, 40.0);
                assert_eq!(rule.align, TextAlign::Left);
            }
            other => panic!("expected a rule, got {other:?}"),
        }
    }
}
