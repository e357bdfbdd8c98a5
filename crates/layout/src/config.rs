use harbor_style::StandardFont;

/// Tunables for the flow layout. The defaults match the conventional
/// table cell settings of a report layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Padding applied to a table cell before any padding rule.
    pub cell_padding: CellPadding,
    /// Face of plain-text table cells without a font rule.
    pub cell_font: StandardFont,
    pub cell_font_size: f32,
    pub cell_leading: f32,
    /// Slack allowed when deciding whether content fits a page, in points.
    pub fit_tolerance: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPadding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            cell_padding: CellPadding {
                top: 3.0,
                right: 6.0,
                bottom: 3.0,
                left: 6.0,
            },
            cell_font: StandardFont::Helvetica,
            cell_font_size: 10.0,
            cell_leading: 12.0,
            fit_tolerance: 0.01,
        }
    }
}
