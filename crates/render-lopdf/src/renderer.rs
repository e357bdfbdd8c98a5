use crate::helpers;
use crate::writer::StreamingPdfWriter;
use harbor_layout::PositionedElement;
use harbor_render_core::{DocumentRenderer, RenderError};
use harbor_style::StandardFont;
use harbor_types::{DocumentMetadata, Size};
use lopdf::{dictionary, Dictionary, Object, ObjectId, StringFormat};
use std::io::{Cursor, Seek, Write};

const PDF_VERSION: &str = "1.7";
const PRODUCER: &str = "Safe Harbor document generator";

/// A streaming PDF renderer over the standard Type 1 fonts.
///
/// Page content is written as soon as it is rendered; only the page tree,
/// catalog and information dictionary wait for `finish`.
pub struct LopdfRenderer<W: Write + Seek> {
    pub(crate) writer: Option<StreamingPdfWriter<W>>,
}

impl<W: Write + Seek> LopdfRenderer<W> {
    pub fn new() -> Self {
        Self { writer: None }
    }

    fn writer_mut(&mut self) -> Result<&mut StreamingPdfWriter<W>, RenderError> {
        self.writer
            .as_mut()
            .ok_or_else(|| RenderError::NotStarted("Document not started"))
    }
}

impl<W: Write + Seek> Default for LopdfRenderer<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl LopdfRenderer<Cursor<Vec<u8>>> {
    /// Completes an in-memory document and returns its bytes.
    pub fn finish_into_buffer(mut self, page_ids: Vec<ObjectId>) -> Result<Vec<u8>, RenderError> {
        let mut writer = self
            .writer
            .take()
            .ok_or_else(|| RenderError::NotStarted("Document not started or already finished"))?;
        writer.set_page_ids(page_ids);
        Ok(writer.finish()?.into_inner())
    }
}

fn font_dictionary() -> Dictionary {
    let mut font_dict = Dictionary::new();
    for font in StandardFont::ALL {
        let single_font_dict = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.postscript_name(),
            "Encoding" => "WinAnsiEncoding",
        };
        font_dict.set(font.resource_name().into_bytes(), Object::Dictionary(single_font_dict));
    }
    font_dict
}

/// PDF text strings: plain literals when ASCII, otherwise UTF-16BE with a BOM.
fn text_string(text: &str) -> Object {
    if text.is_ascii() {
        Object::String(text.as_bytes().to_vec(), StringFormat::Literal)
    } else {
        let mut bytes = vec![0xFE, 0xFF];
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        Object::String(bytes, StringFormat::Hexadecimal)
    }
}

fn info_dictionary(metadata: &DocumentMetadata) -> Dictionary {
    dictionary! {
        "Title" => text_string(&metadata.title),
        "Author" => text_string(&metadata.author),
        "Subject" => text_string(&metadata.subject),
        "Producer" => text_string(PRODUCER),
    }
}

impl<W: Write + Seek> DocumentRenderer<W> for LopdfRenderer<W> {
    fn begin_document(&mut self, writer: W, metadata: &DocumentMetadata) -> Result<(), RenderError> {
        let mut pdf = StreamingPdfWriter::new(writer, PDF_VERSION, font_dictionary())?;
        pdf.set_info(info_dictionary(metadata));
        self.writer = Some(pdf);
        Ok(())
    }

    fn render_page_content(&mut self, elements: &[PositionedElement], page_size: Size) -> Result<ObjectId, RenderError> {
        let content = helpers::render_elements_to_content(elements, page_size.height).encode()?;
        let content_id = self.writer_mut()?.write_content_stream(content)?;
        Ok(content_id)
    }

    fn write_page_object(&mut self, content_stream_ids: Vec<ObjectId>, page_size: Size) -> Result<ObjectId, RenderError> {
        let writer = self.writer_mut()?;
        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => writer.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), page_size.width.into(), page_size.height.into()],
            "Contents" => Object::Array(content_stream_ids.into_iter().map(Object::Reference).collect()),
            "Resources" => writer.resources_id,
        };
        let page_id = writer.write_object(page_dict.into())?;
        Ok(page_id)
    }

    fn finish(self: Box<Self>, page_ids: Vec<ObjectId>) -> Result<W, RenderError> {
        let mut renderer = *self;
        let mut writer = renderer
            .writer
            .take()
            .ok_or_else(|| RenderError::NotStarted("Document was never started with begin_document"))?;
        log::debug!("Finishing PDF with {} pages", page_ids.len());
        writer.set_page_ids(page_ids);
        Ok(writer.finish()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harbor_types::Color;

    fn render(pages: &[Vec<PositionedElement>]) -> Vec<u8> {
        let metadata = DocumentMetadata::new("Policy \u{2014} SB 1188", "Author", "Subject");
        let size = Size::new(612.0, 792.0);
        let mut renderer = LopdfRenderer::new();
        renderer.begin_document(Cursor::new(Vec::new()), &metadata).unwrap();
        let mut page_ids = Vec::new();
        for elements in pages {
            let content = renderer.render_page_content(elements, size).unwrap();
            page_ids.push(renderer.write_page_object(vec![content], size).unwrap());
        }
        renderer.finish_into_buffer(page_ids).unwrap()
    }

    #[test]
    fn pages_and_text_survive_a_round_trip_through_lopdf() {
        let line = PositionedElement::text(72.0, 100.0, "Hello Harbor", StandardFont::HelveticaBold, 12.0, Color::BLACK);
        let bytes = render(&[vec![line], vec![]]);

        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
        let text = doc.extract_text(&[1]).unwrap();
        assert!(text.contains("Hello Harbor"), "got {text:?}");
    }

    #[test]
    fn non_ascii_titles_are_utf16_hex_strings() {
        let bytes = render(&[vec![]]);
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        let info_id = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
        let info = doc.get_dictionary(info_id).unwrap();
        let raw = info.get(b"Title").unwrap().as_str().unwrap();
        assert_eq!(&raw[..2], &[0xFE, 0xFF]);
        let units: Vec<u16> = raw[2..].chunks(2).map(|c| u16::from_be_bytes([c[0], c[1]])).collect();
        assert_eq!(String::from_utf16(&units).unwrap(), "Policy \u{2014} SB 1188");
    }

    #[test]
    fn output_is_deterministic() {
        let line = PositionedElement::text(72.0, 100.0, "Same bytes", StandardFont::Helvetica, 10.0, Color::BLACK);
        assert_eq!(render(&[vec![line.clone()]]), render(&[vec![line]]));
    }

    #[test]
    fn rendering_before_begin_is_an_error() {
        let mut renderer: LopdfRenderer<Cursor<Vec<u8>>> = LopdfRenderer::new();
        let result = renderer.render_page_content(&[], Size::new(612.0, 792.0));
        assert!(matches!(result, Err(RenderError::NotStarted(_))));
    }
}
