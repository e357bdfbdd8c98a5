//! Cell formatting: font, fill, alignment and borders.

use harbor_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    #[default]
    General,
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    #[default]
    Bottom,
    Center,
    Top,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    Thin,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    pub style: BorderStyle,
    pub color: Color,
}

impl Border {
    pub const fn thin(color: Color) -> Self {
        Self { style: BorderStyle::Thin, color }
    }

    pub const fn medium(color: Color) -> Self {
        Self { style: BorderStyle::Medium, color }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Borders {
    pub top: Option<Border>,
    pub bottom: Option<Border>,
    pub left: Option<Border>,
    pub right: Option<Border>,
}

impl Borders {
    pub const NONE: Borders = Borders {
        top: None,
        bottom: None,
        left: None,
        right: None,
    };

    pub const fn all(border: Border) -> Self {
        Self {
            top: Some(border),
            bottom: Some(border),
            left: Some(border),
            right: Some(border),
        }
    }

    pub const fn bottom(border: Border) -> Self {
        Self {
            bottom: Some(border),
            ..Self::NONE
        }
    }

    pub const fn with_bottom(mut self, border: Border) -> Self {
        self.bottom = Some(border);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub name: &'static str,
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
    pub color: Color,
}

/// The complete look of one cell. Built with `const` setters so the ledger's
/// shared formats can be constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellFormat {
    pub font: FontSpec,
    pub fill: Option<Color>,
    pub align: HAlign,
    pub valign: VAlign,
    pub wrap: bool,
    pub borders: Borders,
}

impl Default for CellFormat {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl CellFormat {
    /// Calibri 11, black, no fill: what a spreadsheet shows for an untouched cell.
    pub const DEFAULT: CellFormat = CellFormat {
        font: FontSpec {
            name: "Calibri",
            size: 11.0,
            bold: false,
            italic: false,
            color: Color::BLACK,
        },
        fill: None,
        align: HAlign::General,
        valign: VAlign::Bottom,
        wrap: false,
        borders: Borders::NONE,
    };

    pub const fn arial(size: f64, color: Color) -> Self {
        let mut format = Self::DEFAULT;
        format.font.name = "Arial";
        format.font.size = size;
        format.font.color = color;
        format
    }

    pub const fn bold(mut self) -> Self {
        self.font.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.font.italic = true;
        self
    }

    pub const fn color(mut self, color: Color) -> Self {
        self.font.color = color;
        self
    }

    pub const fn fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub const fn align(mut self, align: HAlign) -> Self {
        self.align = align;
        self
    }

    pub const fn valign(mut self, valign: VAlign) -> Self {
        self.valign = valign;
        self
    }

    pub const fn wrap(mut self) -> Self {
        self.wrap = true;
        self
    }

    pub const fn borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    /// Same cell with a replacement font, keeping fill, alignment and borders.
    pub const fn with_font_of(mut self, other: &CellFormat) -> Self {
        self.font = other.font;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harbor_style::palette::{GOLD_DARK, NAVY};

    #[test]
    fn setters_compose() {
        let format = CellFormat::arial(10.0, NAVY).bold().fill(GOLD_DARK).wrap();
        assert_eq!(format.font.name, "Arial");
        assert!(format.font.bold && !format.font.italic);
        assert_eq!(format.fill, Some(GOLD_DARK));
        assert!(format.wrap);
    }

    #[test]
    fn with_font_of_keeps_the_cell_chrome() {
        let base = CellFormat::arial(10.0, NAVY).fill(GOLD_DARK).borders(Borders::all(Border::thin(NAVY)));
        let swapped = base.with_font_of(&CellFormat::arial(9.0, GOLD_DARK).italic());
        assert_eq!(swapped.fill, base.fill);
        assert_eq!(swapped.borders, base.borders);
        assert!(swapped.font.italic);
        assert_eq!(swapped.font.size, 9.0);
    }

    #[test]
    fn bottom_border_only() {
        let borders = Borders::bottom(Border::medium(GOLD_DARK));
        assert_eq!(borders.top, None);
        assert_eq!(borders.bottom.map(|b| b.style), Some(BorderStyle::Medium));
    }
}
