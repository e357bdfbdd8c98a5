//! Translation of positioned layout elements into PDF content operators.

use harbor_layout::{LayoutElement, LineElement, PositionedElement, RectElement, TextLine};
use harbor_style::{encode_win_ansi, StandardFont};
use harbor_types::Color;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

/// Builds the content stream for one page.
///
/// Elements are drawn in order, so later elements paint over earlier ones.
pub fn render_elements_to_content(elements: &[PositionedElement], page_height: f32) -> Content {
    let mut builder = ContentBuilder::new(page_height);
    for el in elements {
        builder.draw_element(el);
    }
    builder.finish()
}

/// Tracks the graphics state already emitted so redundant operators are
/// skipped. The stream never uses `q`/`Q`, so state carries across text
/// objects for the whole page.
struct ContentBuilder {
    page_height: f32,
    content: Content,
    font: Option<(StandardFont, f32)>,
    fill: Option<Color>,
    stroke: Option<Color>,
    line_width: Option<f32>,
    word_spacing: f32,
}

impl ContentBuilder {
    fn new(page_height: f32) -> Self {
        Self {
            page_height,
            content: Content { operations: Vec::new() },
            font: None,
            fill: None,
            stroke: None,
            line_width: None,
            word_spacing: 0.0,
        }
    }

    fn finish(self) -> Content {
        self.content
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn draw_element(&mut self, el: &PositionedElement) {
        match &el.element {
            LayoutElement::Rectangle(rect) => self.draw_rect(rect, el),
            LayoutElement::Line(line) => self.draw_line(line, el),
            LayoutElement::Text(text) => self.draw_text(text, el),
        }
    }

    fn draw_rect(&mut self, rect: &RectElement, el: &PositionedElement) {
        let y = self.page_height - (el.y + el.height);
        let bounds = || vec![el.x.into(), y.into(), el.width.into(), el.height.into()];
        if let Some(fill) = rect.fill {
            self.set_fill_color(fill);
            self.push("re", bounds());
            self.push("f", vec![]);
        }
        if let Some((width, color)) = rect.stroke {
            self.set_line_width(width);
            self.set_stroke_color(color);
            self.push("re", bounds());
            self.push("S", vec![]);
        }
    }

    fn draw_line(&mut self, line: &LineElement, el: &PositionedElement) {
        self.stroke_segment(
            (el.x, el.y),
            (el.x + el.width, el.y + el.height),
            line.thickness,
            line.color,
        );
    }

    fn stroke_segment(&mut self, from: (f32, f32), to: (f32, f32), thickness: f32, color: Color) {
        self.set_line_width(thickness);
        self.set_stroke_color(color);
        self.push("m", vec![from.0.into(), (self.page_height - from.1).into()]);
        self.push("l", vec![to.0.into(), (self.page_height - to.1).into()]);
        self.push("S", vec![]);
    }

    fn draw_text(&mut self, text: &TextLine, el: &PositionedElement) {
        let baseline = el.y + text.baseline_offset;
        let pdf_y = self.page_height - baseline;

        self.push("BT", vec![]);
        self.set_fill_color(text.color);
        self.set_word_spacing(text.word_spacing);
        for fragment in text.fragments.iter().filter(|f| !f.text.is_empty()) {
            self.set_font(fragment.font, text.font_size);
            let x = el.x + fragment.x_offset;
            self.push(
                "Tm",
                vec![1.into(), 0.into(), 0.into(), 1.into(), x.into(), pdf_y.into()],
            );
            self.push(
                "Tj",
                vec![Object::String(encode_win_ansi(&fragment.text), StringFormat::Literal)],
            );
        }
        self.push("ET", vec![]);

        let underline_y = baseline + text.font_size * 0.12;
        let thickness = (text.font_size / 18.0).max(0.5);
        for fragment in text.fragments.iter().filter(|f| f.underline) {
            let x = el.x + fragment.x_offset;
            self.stroke_segment(
                (x, underline_y),
                (x + fragment.width, underline_y),
                thickness,
                text.color,
            );
        }
    }

    fn set_font(&mut self, font: StandardFont, size: f32) {
        if self.font != Some((font, size)) {
            self.push(
                "Tf",
                vec![Object::Name(font.resource_name().into_bytes()), size.into()],
            );
            self.font = Some((font, size));
        }
    }

    fn set_word_spacing(&mut self, spacing: f32) {
        if self.word_spacing != spacing {
            self.push("Tw", vec![spacing.into()]);
            self.word_spacing = spacing;
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.fill != Some(color) {
            let [r, g, b] = color.components();
            self.push("rg", vec![r.into(), g.into(), b.into()]);
            self.fill = Some(color);
        }
    }

    fn set_stroke_color(&mut self, color: Color) {
        if self.stroke != Some(color) {
            let [r, g, b] = color.components();
            self.push("RG", vec![r.into(), g.into(), b.into()]);
            self.stroke = Some(color);
        }
    }

    fn set_line_width(&mut self, width: f32) {
        if self.line_width != Some(width) {
            self.push("w", vec![width.into()]);
            self.line_width = Some(width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operators(content: &Content) -> Vec<&str> {
        content.operations.iter().map(|op| op.operator.as_str()).collect()
    }

    #[test]
    fn rectangles_are_flipped_into_pdf_space() {
        let el = PositionedElement::rect(10.0, 20.0, 100.0, 30.0, Color::BLACK);
        let content = render_elements_to_content(&[el], 792.0);
        assert_eq!(operators(&content), vec!["rg", "re", "f"]);
        let re = &content.operations[1];
        assert_eq!(re.operands[1].as_float().unwrap(), 742.0);
    }

    #[test]
    fn repeated_state_is_not_re_emitted() {
        let a = PositionedElement::text(72.0, 100.0, "One", StandardFont::Helvetica, 10.0, Color::BLACK);
        let b = PositionedElement::text(72.0, 112.0, "Two", StandardFont::Helvetica, 10.0, Color::BLACK);
        let content = render_elements_to_content(&[a, b], 792.0);
        let ops = operators(&content);
        assert_eq!(ops.iter().filter(|op| **op == "Tf").count(), 1);
        assert_eq!(ops.iter().filter(|op| **op == "rg").count(), 1);
        assert_eq!(ops.iter().filter(|op| **op == "BT").count(), 2);
    }

    #[test]
    fn text_is_encoded_as_win_ansi() {
        let el = PositionedElement::text(0.0, 10.0, "a\u{2014}b", StandardFont::Helvetica, 10.0, Color::BLACK);
        let content = render_elements_to_content(&[el], 792.0);
        let tj = content.operations.iter().find(|op| op.operator == "Tj").unwrap();
        assert_eq!(tj.operands[0].as_str().unwrap(), &[b'a', 0x97, b'b']);
    }
}
