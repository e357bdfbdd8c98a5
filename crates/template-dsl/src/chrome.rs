//! The running header and footer bands drawn on every page.

use harbor_layout::PositionedElement;
use harbor_render_core::{PageContext, PageDecoration};
use harbor_style::palette::{GOLD, GRAY_200, GRAY_500, NAVY, SLATE, WHITE};
use harbor_style::{inch, StandardFont};

const HEADER_HEIGHT: f32 = 42.0;
const FOOTER_HEIGHT: f32 = 36.0;
const HEADER_BASELINE: f32 = 28.0;
const FOOTER_BASELINE: f32 = 14.0;
const BRAND: &str = "KAIROLOGIC";

/// Navy header band with the brand and document tags, grey footer band
/// with a tagline and the page number.
#[derive(Debug, Clone, PartialEq)]
pub struct PageChrome {
    /// Gold text after the brand, e.g. "|  AI DISCLOSURE KIT".
    pub doc_tag: String,
    /// Right-aligned slate text in the header.
    pub right_tag: String,
    /// Footer text on the left.
    pub tagline: String,
}

impl PageChrome {
    pub fn new(doc_tag: impl Into<String>, right_tag: impl Into<String>, tagline: impl Into<String>) -> Self {
        Self {
            doc_tag: doc_tag.into(),
            right_tag: right_tag.into(),
            tagline: tagline.into(),
        }
    }
}

fn right_aligned(right_edge: f32, baseline: f32, text: &str, font: StandardFont, size: f32, color: harbor_types::Color) -> PositionedElement {
    let width = font.text_width(text, size);
    PositionedElement::text(right_edge - width, baseline, text, font, size, color)
}

impl PageDecoration for PageChrome {
    fn decorate(&self, page: &PageContext) -> Vec<PositionedElement> {
        let w = page.page_size.width;
        let h = page.page_size.height;
        let left = inch(0.75);
        let right = w - inch(0.75);
        let footer_baseline = h - FOOTER_BASELINE;

        vec![
            PositionedElement::rect(0.0, 0.0, w, HEADER_HEIGHT, NAVY),
            PositionedElement::rect(0.0, HEADER_HEIGHT, w, 2.0, GOLD),
            PositionedElement::text(left, HEADER_BASELINE, BRAND, StandardFont::HelveticaBold, 8.0, WHITE),
            PositionedElement::text(inch(1.72), HEADER_BASELINE, &*self.doc_tag, StandardFont::Helvetica, 7.0, GOLD),
            right_aligned(right, HEADER_BASELINE, &self.right_tag, StandardFont::Helvetica, 7.0, SLATE),
            PositionedElement::rect(0.0, h - FOOTER_HEIGHT, w, FOOTER_HEIGHT, GRAY_200),
            PositionedElement::rect(0.0, h - FOOTER_HEIGHT - 1.5, w, 1.5, GOLD),
            PositionedElement::text(left, footer_baseline, &*self.tagline, StandardFont::Helvetica, 7.0, GRAY_500),
            right_aligned(
                right,
                footer_baseline,
                &format!("Page {}", page.page_number),
                StandardFont::Helvetica,
                7.0,
                GRAY_500,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harbor_layout::LayoutElement;
    use harbor_types::Size;

    fn chrome() -> PageChrome {
        PageChrome::new("|  TEST DOC", "RIGHT  |  TAG", "KairoLogic  |  Tagline")
    }

    fn text_of(el: &PositionedElement) -> Option<String> {
        match &el.element {
            LayoutElement::Text(line) => Some(line.content()),
            _ => None,
        }
    }

    #[test]
    fn page_number_is_right_aligned_to_the_margin() {
        let page = PageContext {
            page_number: 7,
            page_size: Size::new(612.0, 792.0),
        };
        let elements = chrome().decorate(&page);
        let number = elements
            .iter()
            .find(|el| text_of(el).as_deref() == Some("Page 7"))
            .expect("page number drawn");
        assert!((number.x + number.width - (612.0 - 54.0)).abs() < 1e-3);
        // Baseline 14pt above the bottom edge.
        assert!((number.y + 7.0 - (792.0 - 14.0)).abs() < 1e-3);
    }

    #[test]
    fn header_band_sits_at_the_top() {
        let page = PageContext {
            page_number: 1,
            page_size: Size::new(612.0, 792.0),
        };
        let elements = chrome().decorate(&page);
        assert_eq!(elements[0], PositionedElement::rect(0.0, 0.0, 612.0, 42.0, NAVY));
        assert!(elements.iter().any(|el| text_of(el).as_deref() == Some("KAIROLOGIC")));
    }

    #[test]
    fn decoration_is_stateless() {
        let page = PageContext {
            page_number: 3,
            page_size: Size::new(612.0, 792.0),
        };
        let chrome = chrome();
        assert_eq!(chrome.decorate(&page), chrome.decorate(&page));
    }
}
