//! Top-down flow of the story into fixed page frames.

use crate::config::LayoutConfig;
use crate::document::Document;
use crate::elements::{LayoutElement, PositionedElement};
use crate::node::{Node, Paragraph, Rule, Table};
use crate::table;
use crate::text::layout_paragraph;
use crate::LayoutError;
use harbor_style::TextAlign;
use harbor_types::Rect;

/// All elements placed on one physical page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// 1-based page number.
    pub number: usize,
    pub elements: Vec<PositionedElement>,
}

#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Flows the document's story into pages. Always yields at least one page.
    pub fn paginate(&self, document: &Document) -> Result<Vec<Page>, LayoutError> {
        let frame = document.page.frame();
        if frame.width <= 0.0 || frame.height <= 0.0 {
            return Err(LayoutError::Generic(format!(
                "Page margins leave no content area ({:.1} x {:.1})",
                frame.width, frame.height
            )));
        }

        let mut flow = Flow::new(frame, &self.config);
        for node in &document.story {
            flow.place(node)?;
        }
        let pages = flow.finish();
        log::debug!("Laid out '{}' into {} page(s)", document.metadata.title, pages.len());
        Ok(pages)
    }
}

struct Flow<'a> {
    frame: Rect,
    config: &'a LayoutConfig,
    pages: Vec<Page>,
    current: Vec<PositionedElement>,
    y: f32,
    has_content: bool,
}

impl<'a> Flow<'a> {
    fn new(frame: Rect, config: &'a LayoutConfig) -> Self {
        Self {
            frame,
            config,
            pages: Vec::new(),
            current: Vec::new(),
            y: frame.y,
            has_content: false,
        }
    }

    fn bottom(&self) -> f32 {
        self.frame.bottom()
    }

    fn remaining(&self) -> f32 {
        (self.bottom() - self.y).max(0.0)
    }

    fn fits(&self, height: f32) -> bool {
        self.y + height <= self.bottom() + self.config.fit_tolerance
    }

    fn new_page(&mut self) {
        let number = self.pages.len() + 1;
        self.pages.push(Page {
            number,
            elements: std::mem::take(&mut self.current),
        });
        self.y = self.frame.y;
        self.has_content = false;
    }

    fn finish(mut self) -> Vec<Page> {
        if self.has_content || !self.current.is_empty() || self.pages.is_empty() {
            self.new_page();
        }
        self.pages
    }

    /// Vertical space above a block; dropped at the top of a page.
    fn space_before(&mut self, amount: f32) {
        if self.has_content {
            self.y += amount;
        }
    }

    fn place(&mut self, node: &Node) -> Result<(), LayoutError> {
        match node {
            Node::Paragraph(paragraph) => self.place_paragraph(paragraph),
            Node::Spacer(height) => self.place_spacer(*height),
            Node::Table(table) => self.place_table(table)?,
            Node::Rule(rule) => self.place_rule(rule),
            Node::PageBreak => {
                if self.has_content {
                    self.new_page();
                }
            }
        }
        Ok(())
    }

    fn place_paragraph(&mut self, paragraph: &Paragraph) {
        let style = &paragraph.style;
        let block = layout_paragraph(paragraph, self.frame.width);
        self.space_before(style.space_before);

        for placed in &block.lines {
            if self.has_content && !self.fits(block.leading) {
                self.new_page();
            }
            if let Some(background) = style.background {
                self.current.push(PositionedElement::rect(
                    self.frame.x + style.left_indent,
                    self.y,
                    self.frame.width - style.left_indent,
                    block.leading,
                    background,
                ));
            }
            self.current.push(PositionedElement {
                x: self.frame.x + placed.x,
                y: self.y,
                width: placed.width,
                height: block.leading,
                element: LayoutElement::Text(placed.line.clone()),
            });
            self.y += block.leading;
            self.has_content = true;
        }

        self.y += style.space_after;
    }

    /// Spacers are clamped to the space left in the frame, so an oversized one
    /// ends the page it starts on without adding a page of its own.
    fn place_spacer(&mut self, height: f32) {
        self.y += height.min(self.remaining());
        self.has_content = true;
    }

    fn place_rule(&mut self, rule: &Rule) {
        self.space_before(rule.space_before);
        if self.has_content && !self.fits(rule.thickness) {
            self.new_page();
        }
        let width = self.frame.width * rule.width_percent / 100.0;
        let x = self.frame.x + horizontal_offset(rule.align, self.frame.width, width);
        let middle = self.y + rule.thickness / 2.0;
        self.current
            .push(PositionedElement::line(x, middle, x + width, middle, rule.thickness, rule.color));
        self.y += rule.thickness + rule.space_after;
        self.has_content = true;
    }

    fn place_table(&mut self, table: &Table) -> Result<(), LayoutError> {
        let resolved = table::resolve(table, self.config);
        let x = self.frame.x + horizontal_offset(table.align, self.frame.width, table.width());
        let tolerance = self.config.fit_tolerance;

        for row in &resolved.rows {
            let mut starts = vec![0usize; row.cells.len()];
            loop {
                let full = row.remaining_height(&starts);
                if self.fits(full) {
                    let ends: Vec<usize> = row.cells.iter().map(|c| c.block.lines.len()).collect();
                    resolved.emit_row(row, x, self.y, full, &starts, &ends, &mut self.current);
                    self.y += full;
                    self.has_content = true;
                    break;
                }

                // Rows taller than a whole frame are sliced between lines.
                if full > self.frame.height + tolerance {
                    if let Some(ends) = row.split_point(&starts, self.remaining(), tolerance) {
                        let height = row.slice_height(&starts, &ends);
                        resolved.emit_row(row, x, self.y, height, &starts, &ends, &mut self.current);
                        starts = ends;
                        self.new_page();
                        continue;
                    }
                }

                if !self.has_content {
                    return Err(LayoutError::ElementTooLarge(full, self.frame.height));
                }
                self.new_page();
            }
        }
        Ok(())
    }
}

fn horizontal_offset(align: TextAlign, available: f32, width: f32) -> f32 {
    match align {
        TextAlign::Left | TextAlign::Justify => 0.0,
        TextAlign::Center => (available - width) / 2.0,
        TextAlign::Right => available - width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::PageSetup;
    use crate::node::{CellRange, TableStyle};
    use harbor_style::{Margins, PageSize, ParagraphStyle, StandardFont};
    use harbor_types::{Color, DocumentMetadata};
    use std::sync::Arc;

    fn small_page() -> PageSetup {
        PageSetup {
            size: PageSize::Custom {
                width: 200.0,
                height: 200.0,
            },
            margins: Margins::all(50.0),
        }
    }

    fn doc(story: Vec<Node>) -> Document {
        Document::new(DocumentMetadata::new("test", "tests", "layout"), story).with_page_setup(small_page())
    }

    fn style(leading: f32, before: f32, after: f32) -> Arc<ParagraphStyle> {
        Arc::new(
            ParagraphStyle::new("p", StandardFont::Helvetica, 10.0, leading, Color::BLACK).with_spacing(before, after),
        )
    }

    fn text_lines(page: &Page) -> Vec<(f32, String)> {
        page.elements
            .iter()
            .filter_map(|e| match &e.element {
                LayoutElement::Text(t) => Some((e.y, t.content())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn empty_story_still_yields_one_page() {
        let pages = LayoutEngine::default().paginate(&doc(vec![])).unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].elements.is_empty());
    }

    #[test]
    fn space_before_is_dropped_at_the_top_of_a_page() {
        let heading = style(20.0, 30.0, 0.0);
        let pages = LayoutEngine::default()
            .paginate(&doc(vec![Node::paragraph("A", &heading), Node::paragraph("B", &heading)]))
            .unwrap();
        let lines = text_lines(&pages[0]);
        assert_eq!(lines[0], (50.0, "A".to_string()));
        assert_eq!(lines[1], (100.0, "B".to_string()));
    }

    #[test]
    fn paragraphs_split_between_lines() {
        // 100pt frame, 30pt leading: three lines per page.
        let tall = style(30.0, 0.0, 0.0);
        let pages = LayoutEngine::default()
            .paginate(&doc(vec![Node::paragraph("1<br/>2<br/>3<br/>4<br/>5", &tall)]))
            .unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(text_lines(&pages[0]).len(), 3);
        assert_eq!(text_lines(&pages[1]), vec![(50.0, "4".to_string()), (80.0, "5".to_string())]);
        assert_eq!(pages[1].number, 2);
    }

    #[test]
    fn page_break_on_an_empty_page_is_ignored() {
        let body = style(12.0, 0.0, 0.0);
        let pages = LayoutEngine::default()
            .paginate(&doc(vec![
                Node::PageBreak,
                Node::paragraph("one", &body),
                Node::PageBreak,
                Node::PageBreak,
                Node::paragraph("two", &body),
            ]))
            .unwrap();
        assert_eq!(pages.len(), 2);
    }

    #[test]
    fn spacer_that_does_not_fit_starts_a_new_page() {
        let body = style(12.0, 0.0, 0.0);
        let pages = LayoutEngine::default()
            .paginate(&doc(vec![
                Node::paragraph("one", &body),
                Node::spacer(95.0),
                Node::paragraph("two", &body),
            ]))
            .unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(text_lines(&pages[1]), vec![(50.0, "two".to_string())]);
    }

    #[test]
    fn oversized_spacer_on_an_empty_page_fills_only_that_page() {
        let body = style(12.0, 0.0, 0.0);
        let pages = LayoutEngine::default()
            .paginate(&doc(vec![Node::spacer(500.0), Node::paragraph("after", &body)]))
            .unwrap();
        assert_eq!(pages.len(), 2);
        assert!(pages[0].elements.is_empty());
        assert_eq!(text_lines(&pages[1]), vec![(50.0, "after".to_string())]);

        let pages = LayoutEngine::default()
            .paginate(&doc(vec![Node::spacer(500.0), Node::spacer(500.0)]))
            .unwrap();
        assert_eq!(pages.len(), 1);
    }

    #[test]
    fn tables_split_between_rows() {
        // Each row is 12pt + 6pt padding = 18pt; five fit in a 100pt frame.
        let rows = (0..8).map(|i| vec![format!("row {i}").into()]).collect();
        let table = Table::new(rows, vec![80.0]);
        let pages = LayoutEngine::default().paginate(&doc(vec![table.into()])).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(text_lines(&pages[0]).len(), 5);
        assert_eq!(text_lines(&pages[1])[0].1, "row 5");
    }

    #[test]
    fn a_row_taller_than_the_frame_is_sliced() {
        let body = style(10.0, 0.0, 0.0);
        let markup = (1..=15).map(|i| i.to_string()).collect::<Vec<_>>().join("<br/>");
        let table = Table::new(vec![vec![Paragraph::new(markup, &body).into()]], vec![80.0])
            .with_style(TableStyle::new().boxed(CellRange::all(), 1.0, Color::BLACK));
        let pages = LayoutEngine::default().paginate(&doc(vec![table.into()])).unwrap();
        assert_eq!(pages.len(), 2);
        let first: Vec<String> = text_lines(&pages[0]).into_iter().map(|(_, t)| t).collect();
        assert_eq!(first.first().map(String::as_str), Some("1"));
        assert_eq!(first.len(), 9);
        assert_eq!(text_lines(&pages[1])[0].1, "10");
    }

    #[test]
    fn tables_are_centred_by_default() {
        let table = Table::new(vec![vec!["x".into()]], vec![60.0]);
        let pages = LayoutEngine::default().paginate(&doc(vec![table.into()])).unwrap();
        let text = &pages[0].elements[0];
        // frame x 50, width 100 → table at 70, plus 6pt padding
        assert_eq!(text.x, 76.0);
    }

    #[test]
    fn rules_span_a_share_of_the_frame() {
        let rule = Rule::new(40.0, 2.0, Color::BLACK).aligned(TextAlign::Left);
        let pages = LayoutEngine::default().paginate(&doc(vec![rule.into()])).unwrap();
        let line = &pages[0].elements[0];
        assert_eq!((line.x, line.width), (50.0, 40.0));
    }

    #[test]
    fn degenerate_margins_are_rejected() {
        let mut document = doc(vec![]);
        document.page.margins = Margins::all(120.0);
        assert!(matches!(
            LayoutEngine::default().paginate(&document),
            Err(LayoutError::Generic(_))
        ));
    }
}
