//! The named paragraph styles the generators draw from.

use crate::font::StandardFont::{self, Courier, CourierBold, Helvetica, HelveticaBold, HelveticaOblique};
use crate::palette::*;
use crate::paragraph::ParagraphStyle;
use crate::text::TextAlign;
use harbor_types::Color;
use std::collections::BTreeMap;
use std::ops::Index;
use std::sync::Arc;

/// An immutable label-to-style map. Built once per run and passed by
/// reference into every content builder.
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    styles: BTreeMap<&'static str, Arc<ParagraphStyle>>,
}

impl StyleRegistry {
    /// The shared style sheet of the compliance bundle.
    pub fn standard() -> Self {
        let mut registry = Self { styles: BTreeMap::new() };

        registry.add("title", "Title", HelveticaBold, 22.0, 28.0, NAVY, |s| s.with_spacing(0.0, 6.0));
        registry.add("subtitle", "Subtitle", Helvetica, 11.0, 15.0, GRAY_500, |s| s.with_spacing(0.0, 20.0));
        registry.add("h1", "H1", HelveticaBold, 14.0, 20.0, NAVY, |s| s.with_spacing(20.0, 10.0));
        registry.add("h2", "H2", HelveticaBold, 11.0, 16.0, NAVY_LIGHT, |s| s.with_spacing(14.0, 6.0));
        registry.add("h3", "H3", HelveticaBold, 10.0, 14.0, NAVY, |s| s.with_spacing(10.0, 4.0));
        registry.add("body", "Body", Helvetica, 10.0, 15.0, GRAY_700, |s| {
            s.with_spacing(0.0, 8.0).with_alignment(TextAlign::Justify)
        });
        registry.add("body_bold", "BodyBold", HelveticaBold, 10.0, 15.0, GRAY_900, |s| {
            s.with_spacing(0.0, 8.0).with_alignment(TextAlign::Justify)
        });
        registry.add("bullet", "Bullet", Helvetica, 10.0, 15.0, GRAY_700, |s| {
            s.with_spacing(0.0, 4.0).with_left_indent(24.0)
        });
        registry.add("sub_bullet", "SubBullet", Helvetica, 9.5, 14.0, GRAY_700, |s| {
            s.with_spacing(0.0, 3.0).with_left_indent(42.0)
        });
        registry.add("callout", "Callout", HelveticaOblique, 9.5, 14.0, NAVY, |s| {
            s.with_spacing(0.0, 6.0).with_left_indent(12.0)
        });
        registry.add("footer", "Footer", Helvetica, 7.5, 10.0, GRAY_500, |s| s.with_alignment(TextAlign::Center));
        registry.add("section_num", "SectionNum", HelveticaBold, 9.0, 12.0, GOLD_DARK, |s| s.with_spacing(0.0, 2.0));
        registry.add("sig_label", "SigLabel", Helvetica, 9.0, 13.0, GRAY_500, |s| s.with_spacing(0.0, 2.0));
        registry.add("sig_line", "SigLine", Helvetica, 10.0, 14.0, GRAY_700, |s| s.with_spacing(0.0, 16.0));
        registry.add("small", "Small", Helvetica, 8.5, 12.0, GRAY_500, |s| s.with_spacing(0.0, 4.0));
        registry.add("toc_item", "TOCItem", Helvetica, 10.0, 18.0, NAVY, |s| s.with_spacing(0.0, 2.0));
        registry.add("code", "Code", Courier, 9.0, 13.0, NAVY, |s| {
            s.with_spacing(0.0, 4.0).with_left_indent(12.0).with_background(GRAY_100)
        });

        registry.add("cell", "CS", Helvetica, 8.5, 12.0, GRAY_700, |s| s);
        registry.add("cell_bold", "CSB", HelveticaBold, 8.5, 12.0, NAVY, |s| s);
        registry.add("cell_italic", "CSI", HelveticaOblique, 8.5, 12.0, GRAY_700, |s| s);
        registry.add("cell_header", "CSH", HelveticaBold, 8.0, 11.0, WHITE, |s| s);
        registry.add("cell_red", "CSR", HelveticaBold, 8.5, 12.0, RED_700, |s| s);
        registry.add("cell_green", "CSG", HelveticaBold, 8.5, 12.0, GREEN_700, |s| s);
        registry.add("cell_small", "CSSM", Helvetica, 8.0, 11.0, GRAY_500, |s| s);
        registry.add("cell_check", "CSCHK", CourierBold, 11.0, 13.0, GRAY_400, |s| {
            s.with_alignment(TextAlign::Center)
        });

        registry
    }

    #[allow(clippy::too_many_arguments)]
    fn add(
        &mut self,
        label: &'static str,
        name: &str,
        font: StandardFont,
        font_size: f32,
        leading: f32,
        color: Color,
        customize: impl FnOnce(ParagraphStyle) -> ParagraphStyle,
    ) {
        let style = customize(ParagraphStyle::new(name, font, font_size, leading, color));
        self.styles.insert(label, Arc::new(style));
    }

    pub fn get(&self, label: &str) -> Option<&Arc<ParagraphStyle>> {
        self.styles.get(label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.styles.keys().copied()
    }

    /// A derived copy of a registered style.
    pub fn derive(&self, label: &str, customize: impl FnOnce(ParagraphStyle) -> ParagraphStyle) -> Arc<ParagraphStyle> {
        Arc::new(customize(self[label].as_ref().clone()))
    }
}

impl Index<&str> for StyleRegistry {
    type Output = Arc<ParagraphStyle>;

    /// Panics on an unknown label; every label used by a builder is static.
    fn index(&self, label: &str) -> &Self::Output {
        match self.styles.get(label) {
            Some(style) => style,
            None => panic!("unknown paragraph style '{}'", label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_share_one_allocation() {
        let styles = StyleRegistry::standard();
        assert!(Arc::ptr_eq(&styles["body"], &styles["body"]));
        assert_eq!(styles["body"].alignment, TextAlign::Justify);
        assert_eq!(styles["h1"].space_before, 20.0);
    }

    #[test]
    fn probing_unknown_labels_returns_none() {
        let styles = StyleRegistry::standard();
        assert!(styles.get("h4").is_none());
        assert!(styles.labels().any(|l| l == "cell_check"));
    }

    #[test]
    #[should_panic(expected = "unknown paragraph style 'headline'")]
    fn indexing_unknown_label_panics() {
        let styles = StyleRegistry::standard();
        let _ = &styles["headline"];
    }

    #[test]
    fn derived_styles_leave_the_registry_untouched() {
        let styles = StyleRegistry::standard();
        let white = styles.derive("body", |s| s.with_color(WHITE));
        assert_eq!(white.color, WHITE);
        assert_eq!(styles["body"].color, GRAY_700);
    }
}
