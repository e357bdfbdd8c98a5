use crate::font::StandardFont;
use crate::text::TextAlign;
use harbor_types::Color;
use serde::{Deserialize, Serialize};

/// Typographic settings for one kind of paragraph.
///
/// Styles are built once and shared through `Arc`; the `with_*` methods
/// produce derived variants for one-off boxes and badges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphStyle {
    pub name: String,
    pub font: StandardFont,
    pub font_size: f32,
    pub leading: f32,
    pub color: Color,
    #[serde(default)]
    pub alignment: TextAlign,
    #[serde(default)]
    pub space_before: f32,
    #[serde(default)]
    pub space_after: f32,
    #[serde(default)]
    pub left_indent: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self {
            name: "Normal".to_string(),
            font: StandardFont::Helvetica,
            font_size: 10.0,
            leading: 12.0,
            color: Color::BLACK,
            alignment: TextAlign::Left,
            space_before: 0.0,
            space_after: 0.0,
            left_indent: 0.0,
            background: None,
        }
    }
}

impl ParagraphStyle {
    pub fn new(name: impl Into<String>, font: StandardFont, font_size: f32, leading: f32, color: Color) -> Self {
        Self {
            name: name.into(),
            font,
            font_size,
            leading,
            color,
            ..Default::default()
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_font(mut self, font: StandardFont) -> Self {
        self.font = font;
        self
    }

    pub fn with_size(mut self, font_size: f32, leading: f32) -> Self {
        self.font_size = font_size;
        self.leading = leading;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_alignment(mut self, alignment: TextAlign) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_spacing(mut self, before: f32, after: f32) -> Self {
        self.space_before = before;
        self.space_after = after;
        self
    }

    pub fn with_left_indent(mut self, indent: f32) -> Self {
        self.left_indent = indent;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }
}
