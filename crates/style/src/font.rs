//! The standard Type1 faces every PDF viewer ships, with their AFM advance
//! widths so text can be measured without embedding a font program.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum StandardFont {
    #[default]
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    Helvetica,
    Courier,
}

impl StandardFont {
    pub const ALL: [StandardFont; 8] = [
        StandardFont::Helvetica,
        StandardFont::HelveticaBold,
        StandardFont::HelveticaOblique,
        StandardFont::HelveticaBoldOblique,
        StandardFont::Courier,
        StandardFont::CourierBold,
        StandardFont::CourierOblique,
        StandardFont::CourierBoldOblique,
    ];

    pub fn postscript_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
            StandardFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
            StandardFont::Courier => "Courier",
            StandardFont::CourierBold => "Courier-Bold",
            StandardFont::CourierOblique => "Courier-Oblique",
            StandardFont::CourierBoldOblique => "Courier-BoldOblique",
        }
    }

    /// Page resource name (`/F1`, `/F2`, ...). Stable across runs.
    pub fn resource_name(&self) -> String {
        let index = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        format!("F{}", index + 1)
    }

    pub fn family(&self) -> FontFamily {
        match self {
            StandardFont::Helvetica
            | StandardFont::HelveticaBold
            | StandardFont::HelveticaOblique
            | StandardFont::HelveticaBoldOblique => FontFamily::Helvetica,
            _ => FontFamily::Courier,
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(
            self,
            StandardFont::HelveticaBold
                | StandardFont::HelveticaBoldOblique
                | StandardFont::CourierBold
                | StandardFont::CourierBoldOblique
        )
    }

    pub fn is_italic(&self) -> bool {
        matches!(
            self,
            StandardFont::HelveticaOblique
                | StandardFont::HelveticaBoldOblique
                | StandardFont::CourierOblique
                | StandardFont::CourierBoldOblique
        )
    }

    /// The face of the same family with the given weight and slant.
    pub fn variant(&self, bold: bool, italic: bool) -> StandardFont {
        match (self.family(), bold, italic) {
            (FontFamily::Helvetica, false, false) => StandardFont::Helvetica,
            (FontFamily::Helvetica, true, false) => StandardFont::HelveticaBold,
            (FontFamily::Helvetica, false, true) => StandardFont::HelveticaOblique,
            (FontFamily::Helvetica, true, true) => StandardFont::HelveticaBoldOblique,
            (FontFamily::Courier, false, false) => StandardFont::Courier,
            (FontFamily::Courier, true, false) => StandardFont::CourierBold,
            (FontFamily::Courier, false, true) => StandardFont::CourierOblique,
            (FontFamily::Courier, true, true) => StandardFont::CourierBoldOblique,
        }
    }

    /// Adds weight and slant on top of this face (markup never removes them).
    pub fn emphasised(&self, bold: bool, italic: bool) -> StandardFont {
        self.variant(self.is_bold() || bold, self.is_italic() || italic)
    }

    /// Advance width of `c` in thousandths of an em.
    pub fn char_width(&self, c: char) -> u16 {
        match self.family() {
            FontFamily::Courier => 600,
            FontFamily::Helvetica => {
                let bold = self.is_bold();
                let code = c as u32;
                if (32..=126).contains(&code) {
                    let table = if bold { &HELVETICA_BOLD_WIDTHS } else { &HELVETICA_WIDTHS };
                    return table[(code - 32) as usize];
                }
                helvetica_extended_width(c, bold)
            }
        }
    }

    /// Width of `text` in points at `size`.
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| u32::from(self.char_width(c))).sum();
        units as f32 * size / 1000.0
    }
}

fn helvetica_extended_width(c: char, bold: bool) -> u16 {
    match c {
        '\u{2022}' => 350,
        '\u{2013}' => 556,
        '\u{2014}' | '\u{2122}' | '\u{2026}' => 1000,
        '\u{2018}' | '\u{2019}' | '\u{201A}' => {
            if bold {
                278
            } else {
                222
            }
        }
        '\u{201C}' | '\u{201D}' | '\u{201E}' => {
            if bold {
                500
            } else {
                333
            }
        }
        '\u{00A0}' => 278,
        '\u{00A9}' | '\u{00AE}' => 737,
        '\u{00B0}' => 400,
        _ => 556,
    }
}

#[rustfmt::skip]
static HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

#[rustfmt::skip]
static HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures_ascii_with_afm_widths() {
        // "Hi" = H(722) + i(222)
        let width = StandardFont::Helvetica.text_width("Hi", 10.0);
        assert!((width - 9.44).abs() < 1e-4);
        assert_eq!(StandardFont::HelveticaBold.char_width('i'), 278);
        assert_eq!(StandardFont::CourierBold.text_width("[  ]", 10.0), 24.0);
    }

    #[test]
    fn oblique_shares_upright_metrics() {
        for c in "Data Sovereignty — 2026".chars() {
            assert_eq!(
                StandardFont::HelveticaOblique.char_width(c),
                StandardFont::Helvetica.char_width(c)
            );
        }
    }

    #[test]
    fn emphasis_keeps_family_and_existing_weight() {
        assert_eq!(
            StandardFont::HelveticaOblique.emphasised(true, false),
            StandardFont::HelveticaBoldOblique
        );
        assert_eq!(StandardFont::HelveticaBold.emphasised(false, false), StandardFont::HelveticaBold);
        assert_eq!(StandardFont::Courier.emphasised(true, false), StandardFont::CourierBold);
    }

    #[test]
    fn resource_names_follow_declaration_order() {
        assert_eq!(StandardFont::Helvetica.resource_name(), "F1");
        assert_eq!(StandardFont::CourierBoldOblique.resource_name(), "F8");
    }
}
