use harbor_style::StandardFont;
use harbor_types::Color;
use std::fmt;

/// A single drawable item with its absolute position on the page.
///
/// Coordinates are in points with the origin at the top-left corner of the
/// page; renderers flip them into their own space.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
}

impl PositionedElement {
    pub fn rect(x: f32, y: f32, width: f32, height: f32, fill: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            element: LayoutElement::Rectangle(RectElement { fill: Some(fill), stroke: None }),
        }
    }

    /// A straight stroke from `(x1, y1)` to `(x2, y2)`.
    pub fn line(x1: f32, y1: f32, x2: f32, y2: f32, thickness: f32, color: Color) -> Self {
        Self {
            x: x1,
            y: y1,
            width: x2 - x1,
            height: y2 - y1,
            element: LayoutElement::Line(LineElement { thickness, color }),
        }
    }

    /// A single run of text whose baseline sits `baseline` points below the
    /// top of the page.
    pub fn text(x: f32, baseline: f32, text: impl Into<String>, font: StandardFont, font_size: f32, color: Color) -> Self {
        let text = text.into();
        let width = font.text_width(&text, font_size);
        Self {
            x,
            y: baseline - font_size,
            width,
            height: font_size,
            element: LayoutElement::Text(TextLine {
                fragments: vec![TextFragment {
                    text,
                    font,
                    x_offset: 0.0,
                    width,
                    underline: false,
                }],
                font_size,
                color,
                word_spacing: 0.0,
                baseline_offset: font_size,
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LayoutElement {
    Text(TextLine),
    Rectangle(RectElement),
    Line(LineElement),
}

impl fmt::Display for LayoutElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutElement::Text(t) => write!(f, "Text(\"{}\")", t.content()),
            LayoutElement::Rectangle(_) => write!(f, "Rectangle"),
            LayoutElement::Line(_) => write!(f, "Line"),
        }
    }
}

/// One laid-out line of a paragraph or cell.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    pub fragments: Vec<TextFragment>,
    pub font_size: f32,
    pub color: Color,
    /// Extra advance added to every space (PDF `Tw`).
    pub word_spacing: f32,
    /// Distance from the top of the line box to the baseline.
    pub baseline_offset: f32,
}

impl TextLine {
    /// The plain text of the line.
    pub fn content(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }
}

/// A run of text in one face.
#[derive(Clone, Debug, PartialEq)]
pub struct TextFragment {
    pub text: String,
    pub font: StandardFont,
    /// Offset from the line origin, including justification spacing.
    pub x_offset: f32,
    /// Advance width including justification spacing.
    pub width: f32,
    pub underline: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RectElement {
    pub fill: Option<Color>,
    pub stroke: Option<(f32, Color)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineElement {
    pub thickness: f32,
    pub color: Color,
}
