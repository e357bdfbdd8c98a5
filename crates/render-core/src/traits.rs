use crate::error::RenderError;
use harbor_layout::PositionedElement;
use harbor_types::{DocumentMetadata, Size};
use lopdf::ObjectId;
use std::io::{Seek, Write};

/// A trait for document renderers, abstracting the PDF-writing primitives.
pub trait DocumentRenderer<W: Write + Seek> {
    fn begin_document(&mut self, writer: W, metadata: &DocumentMetadata) -> Result<(), RenderError>;

    fn render_page_content(&mut self, elements: &[PositionedElement], page_size: Size) -> Result<ObjectId, RenderError>;

    fn write_page_object(&mut self, content_stream_ids: Vec<ObjectId>, page_size: Size) -> Result<ObjectId, RenderError>;

    fn finish(self: Box<Self>, page_ids: Vec<ObjectId>) -> Result<W, RenderError>;
}

/// What a decoration knows about the page it is drawing on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageContext {
    /// 1-based.
    pub page_number: usize,
    pub page_size: Size,
}

/// Per-page furniture (running header, footer, page number) drawn beneath
/// the page content. Implementations hold no state between pages.
pub trait PageDecoration {
    fn decorate(&self, page: &PageContext) -> Vec<PositionedElement>;
}

/// Draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDecoration;

impl PageDecoration for NoDecoration {
    fn decorate(&self, _page: &PageContext) -> Vec<PositionedElement> {
        Vec::new()
    }
}
