//! Page size, margins and the inch unit.
use serde::{Deserialize, Serialize};

/// Points per inch.
pub const INCH: f32 = 72.0;

pub const fn inch(value: f32) -> f32 {
    value * INCH
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// The margins every bundle document is set with: room for the header
    /// band at the top and the footer band at the bottom.
    pub fn compliance() -> Self {
        Self {
            top: inch(0.85),
            right: inch(0.75),
            bottom: inch(0.7),
            left: inch(0.75),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
#[derive(Default)]
pub enum PageSize {
    #[default]
    Letter,
    A4,
    Custom { width: f32, height: f32 },
}

impl PageSize {
    /// Returns the page dimensions in points (width, height).
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PageSize::Letter => (612.0, 792.0),
            PageSize::A4 => (595.28, 841.89),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }

    pub fn width(&self) -> f32 {
        self.dimensions_pt().0
    }

    pub fn height(&self) -> f32 {
        self.dimensions_pt().1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_is_eight_and_a_half_by_eleven() {
        assert_eq!(PageSize::Letter.dimensions_pt(), (inch(8.5), inch(11.0)));
    }

    #[test]
    fn compliance_margins() {
        let m = Margins::compliance();
        assert_eq!(m.left, 54.0);
        assert!((m.bottom - 50.4).abs() < 1e-4);
        assert!((m.top - 61.2).abs() < 1e-4);
    }
}
