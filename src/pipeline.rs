//! Layout and PDF rendering for a finished [`Document`].

use crate::error::GenerateError;
use harbor_layout::{Document, LayoutConfig, LayoutEngine};
use harbor_render_core::{DocumentRenderer, PageContext, PageDecoration};
use harbor_render_lopdf::LopdfRenderer;
use std::io::Cursor;

/// Paginates the story, draws `decoration` beneath each page's content and
/// returns the PDF bytes.
pub fn render_pdf(document: &Document, decoration: &dyn PageDecoration) -> Result<Vec<u8>, GenerateError> {
    let engine = LayoutEngine::new(LayoutConfig::default());
    let pages = engine.paginate(document)?;
    let page_size = document.page.page_size();

    let mut renderer = LopdfRenderer::new();
    renderer.begin_document(Cursor::new(Vec::new()), &document.metadata)?;

    let mut page_ids = Vec::with_capacity(pages.len());
    for page in &pages {
        let context = PageContext {
            page_number: page.number,
            page_size,
        };
        let mut elements = decoration.decorate(&context);
        elements.extend(page.elements.iter().cloned());
        log::debug!("Page {}: {} elements", page.number, elements.len());

        let content_id = renderer.render_page_content(&elements, page_size)?;
        page_ids.push(renderer.write_page_object(vec![content_id], page_size)?);
    }

    let bytes = renderer.finish_into_buffer(page_ids)?;
    log::info!(
        "Rendered '{}': {} page(s), {} bytes",
        document.metadata.title,
        pages.len(),
        bytes.len()
    );
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use harbor_layout::Node;
    use harbor_render_core::NoDecoration;
    use harbor_style::StyleRegistry;
    use harbor_template_dsl::PageChrome;
    use harbor_types::DocumentMetadata;

    fn sample(paragraphs: usize) -> Document {
        let styles = StyleRegistry::standard();
        let story = (0..paragraphs)
            .map(|i| Node::paragraph(format!("Paragraph {i} of the sample story."), &styles["body"]))
            .collect();
        Document::new(DocumentMetadata::new("Sample", "Harbor", "Tests"), story)
    }

    #[test]
    fn empty_story_still_has_one_page() {
        let bytes = render_pdf(&sample(0), &NoDecoration).unwrap();
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn chrome_is_drawn_on_every_page() {
        let chrome = PageChrome::new("|  TEST", "RIGHT", "Tagline");
        let bytes = render_pdf(&sample(120), &chrome).unwrap();
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        let pages = doc.get_pages();
        assert!(pages.len() > 1);
        for number in pages.keys() {
            let text = doc.extract_text(&[*number]).unwrap();
            assert!(text.contains("KAIROLOGIC"), "page {number}: {text:?}");
            assert!(text.contains(&format!("Page {number}")), "page {number}: {text:?}");
        }
    }
}
