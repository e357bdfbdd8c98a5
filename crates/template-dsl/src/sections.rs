//! Headings, contents listings and bullet lists.

use harbor_layout::{Node, Paragraph, Rule};
use harbor_style::palette::{GOLD, GOLD_DARK, GRAY_200};
use harbor_style::{StandardFont, StyleRegistry};

/// The gold full-width rule closing every numbered heading.
pub fn section_rule(space_after: f32) -> Node {
    Rule::new(100.0, 0.75, GOLD).spacing(1.0, space_after).into()
}

/// A kicker line such as "SECTION 3" or "MODULE 1", the `h1` title and a
/// gold rule.
pub fn numbered_header(styles: &StyleRegistry, kicker: &str, title: &str) -> Vec<Node> {
    vec![
        Node::paragraph(kicker, &styles["section_num"]),
        Node::paragraph(title, &styles["h1"]),
        section_rule(10.0),
    ]
}

/// A numbered header with an italic time estimate under the title.
pub fn phase_header(styles: &StyleRegistry, kicker: &str, title: &str, time_estimate: &str) -> Vec<Node> {
    let estimate = styles.derive("section_num", |s| {
        s.named("Time")
            .with_font(StandardFont::HelveticaOblique)
            .with_color(GOLD_DARK)
            .with_spacing(0.0, 4.0)
    });
    vec![
        Node::paragraph(kicker, &styles["section_num"]),
        Node::paragraph(title, &styles["h1"]),
        Paragraph::new(format!("Estimated Time: {time_estimate}"), &estimate).into(),
        section_rule(10.0),
    ]
}

/// One contents entry: an optional bold label ("1.", "Phase 2:") and a title.
pub type TocEntry<'a> = (&'a str, &'a str);

/// A contents page: heading, grey rule, one line per entry, page break.
pub fn toc(styles: &StyleRegistry, heading: &str, entries: &[TocEntry<'_>]) -> Vec<Node> {
    let mut nodes = vec![
        Node::paragraph(heading, &styles["h1"]),
        Rule::new(100.0, 1.0, GRAY_200).spacing(1.0, 12.0).into(),
    ];
    nodes.extend(entries.iter().map(|(label, title)| {
        let markup = if label.is_empty() {
            title.to_string()
        } else {
            format!("<b>{label}</b> {title}")
        };
        Node::paragraph(markup, &styles["toc_item"])
    }));
    nodes.push(Node::PageBreak);
    nodes
}

/// Bullet paragraphs in the `bullet` style.
pub fn bullets<S: AsRef<str>>(styles: &StyleRegistry, items: &[S]) -> Vec<Node> {
    items
        .iter()
        .map(|item| Node::paragraph(format!("\u{2022}  {}", item.as_ref()), &styles["bullet"]))
        .collect()
}

/// Dash-led paragraphs in the deeper `sub_bullet` indent.
pub fn sub_bullets<S: AsRef<str>>(styles: &StyleRegistry, items: &[S]) -> Vec<Node> {
    items
        .iter()
        .map(|item| Node::paragraph(format!("\u{2013}  {}", item.as_ref()), &styles["sub_bullet"]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markup(node: &Node) -> &str {
        match node {
            Node::Paragraph(p) => &p.markup,
            other => panic!("expected a paragraph, got {other:?}"),
        }
    }

    #[test]
    fn numbered_header_is_kicker_title_rule() {
        let styles = StyleRegistry::standard();
        let nodes = numbered_header(&styles, "SECTION 3", "DEFINITIONS");
        assert_eq!(nodes.len(), 3);
        assert_eq!(markup(&nodes[0]), "SECTION 3");
        assert_eq!(markup(&nodes[1]), "DEFINITIONS");
        assert!(matches!(&nodes[2], Node::Rule(r) if r.width_percent == 100.0 && r.color == GOLD));
    }

    #[test]
    fn phase_header_adds_the_estimate() {
        let styles = StyleRegistry::standard();
        let nodes = phase_header(&styles, "PHASE 2", "Deploy", "10 minutes");
        assert_eq!(nodes.len(), 4);
        assert_eq!(markup(&nodes[2]), "Estimated Time: 10 minutes");
    }

    #[test]
    fn toc_bolds_labels_and_ends_the_page() {
        let styles = StyleRegistry::standard();
        let nodes = toc(&styles, "CONTENTS", &[("1.", "Purpose"), ("", "Appendix A")]);
        assert_eq!(markup(&nodes[2]), "<b>1.</b> Purpose");
        assert_eq!(markup(&nodes[3]), "Appendix A");
        assert_eq!(nodes.last(), Some(&Node::PageBreak));
    }

    #[test]
    fn bullets_keep_input_order() {
        let styles = StyleRegistry::standard();
        let nodes = bullets(&styles, &["first", "second"]);
        assert_eq!(markup(&nodes[0]), "\u{2022}  first");
        assert_eq!(markup(&nodes[1]), "\u{2022}  second");
    }
}
