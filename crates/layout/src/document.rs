use crate::node::Node;
use harbor_style::{Margins, PageSize};
use harbor_types::{DocumentMetadata, Rect, Size};

/// Paper size and margins of every page in a document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSetup {
    pub size: PageSize,
    pub margins: Margins,
}

impl Default for PageSetup {
    fn default() -> Self {
        Self::letter_compliance()
    }
}

impl PageSetup {
    /// US Letter with room for the bundle's header and footer bands.
    pub fn letter_compliance() -> Self {
        Self {
            size: PageSize::Letter,
            margins: Margins::compliance(),
        }
    }

    pub fn page_size(&self) -> Size {
        let (width, height) = self.size.dimensions_pt();
        Size::new(width, height)
    }

    /// The content area, in top-down page coordinates.
    pub fn frame(&self) -> Rect {
        let page = self.page_size();
        Rect::new(
            self.margins.left,
            self.margins.top,
            page.width - self.margins.left - self.margins.right,
            page.height - self.margins.top - self.margins.bottom,
        )
    }
}

/// A complete, immutable document: metadata, page setup and the story.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub metadata: DocumentMetadata,
    pub page: PageSetup,
    pub story: Vec<Node>,
}

impl Document {
    pub fn new(metadata: DocumentMetadata, story: Vec<Node>) -> Self {
        Self {
            metadata,
            page: PageSetup::default(),
            story,
        }
    }

    pub fn with_page_setup(mut self, page: PageSetup) -> Self {
        self.page = page;
        self
    }
}
