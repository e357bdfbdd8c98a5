//! Greedy line breaking over AFM metrics.

use crate::elements::{TextFragment, TextLine};
use crate::markup::{self, Inline};
use crate::node::Paragraph;
use harbor_style::{StandardFont, TextAlign};
use harbor_types::Color;

const EPSILON: f32 = 0.001;

/// Lines of one paragraph or cell, positioned relative to the left edge of
/// the box they were broken for.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub lines: Vec<PlacedLine>,
    pub leading: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub x: f32,
    pub width: f32,
    pub line: TextLine,
}

impl TextBlock {
    pub fn height(&self) -> f32 {
        self.lines.len() as f32 * self.leading
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TextSettings {
    pub font: StandardFont,
    pub font_size: f32,
    pub leading: f32,
    pub color: Color,
    pub alignment: TextAlign,
}

impl TextSettings {
    fn baseline_offset(&self) -> f32 {
        (self.leading + self.font_size) / 2.0
    }
}

/// Breaks a paragraph to `available_width`, honouring its left indent.
pub fn layout_paragraph(paragraph: &Paragraph, available_width: f32) -> TextBlock {
    let style = &paragraph.style;
    let settings = TextSettings {
        font: style.font,
        font_size: style.font_size,
        leading: style.leading,
        color: style.color,
        alignment: style.alignment,
    };
    let width = (available_width - style.left_indent).max(0.0);
    let mut block = layout_markup(&paragraph.markup, &settings, width);
    for line in &mut block.lines {
        line.x += style.left_indent;
    }
    block
}

/// Unwrapped text broken only at `\n`, as plain table cells are drawn.
pub fn layout_plain(text: &str, settings: &TextSettings, available_width: f32) -> TextBlock {
    let lines = text
        .split('\n')
        .map(|raw| {
            let width = settings.font.text_width(raw, settings.font_size);
            let line = TextLine {
                fragments: vec![TextFragment {
                    text: raw.to_string(),
                    font: settings.font,
                    x_offset: 0.0,
                    width,
                    underline: false,
                }],
                font_size: settings.font_size,
                color: settings.color,
                word_spacing: 0.0,
                baseline_offset: settings.baseline_offset(),
            };
            PlacedLine {
                x: align_offset(settings.alignment, available_width, width),
                width,
                line,
            }
        })
        .collect();
    TextBlock {
        lines,
        leading: settings.leading,
    }
}

struct Piece {
    text: String,
    font: StandardFont,
    underline: bool,
    width: f32,
}

enum Item {
    Word(Vec<Piece>),
    Space(Piece),
    Break,
}

#[derive(Clone, Copy, PartialEq)]
enum LineEnd {
    Wrapped,
    Forced,
    Last,
}

struct RawLine {
    pieces: Vec<Piece>,
    width: f32,
    end: LineEnd,
}

fn tokenize(items: &[Inline], settings: &TextSettings) -> Vec<Item> {
    let mut out = Vec::new();
    let mut word: Vec<Piece> = Vec::new();
    let piece = |text: String, font: StandardFont, underline: bool| Piece {
        width: font.text_width(&text, settings.font_size),
        text,
        font,
        underline,
    };

    for inline in items {
        match inline {
            Inline::LineBreak => {
                if !word.is_empty() {
                    out.push(Item::Word(std::mem::take(&mut word)));
                }
                out.push(Item::Break);
            }
            Inline::Text(span) => {
                let font = settings.font.emphasised(span.bold, span.italic);
                let mut chunk = String::new();
                for c in span.text.chars() {
                    if c == ' ' {
                        if !chunk.is_empty() {
                            word.push(piece(std::mem::take(&mut chunk), font, span.underline));
                        }
                        if !word.is_empty() {
                            out.push(Item::Word(std::mem::take(&mut word)));
                        }
                        out.push(Item::Space(piece(" ".to_string(), font, span.underline)));
                    } else {
                        chunk.push(c);
                    }
                }
                // A word may continue into the next run, e.g. "<b>Note</b>:".
                if !chunk.is_empty() {
                    word.push(piece(chunk, font, span.underline));
                }
            }
        }
    }
    if !word.is_empty() {
        out.push(Item::Word(word));
    }
    out
}

fn break_lines(items: Vec<Item>, available_width: f32) -> Vec<RawLine> {
    let mut lines = Vec::new();
    let mut current: Vec<Piece> = Vec::new();
    let mut width = 0.0;
    let mut pending_space: Option<Piece> = None;

    for item in items {
        match item {
            Item::Space(space) => {
                if !current.is_empty() {
                    pending_space = Some(space);
                }
            }
            Item::Word(pieces) => {
                let word_width: f32 = pieces.iter().map(|p| p.width).sum();
                let space_width = pending_space.as_ref().map_or(0.0, |s| s.width);
                if current.is_empty() || width + space_width + word_width <= available_width + EPSILON {
                    if let Some(space) = pending_space.take() {
                        width += space.width;
                        current.push(space);
                    }
                } else {
                    lines.push(RawLine {
                        pieces: std::mem::take(&mut current),
                        width,
                        end: LineEnd::Wrapped,
                    });
                    width = 0.0;
                    pending_space = None;
                }
                if current.is_empty() && word_width > available_width + EPSILON {
                    log::warn!("Word wider than its line ({:.1}pt > {:.1}pt)", word_width, available_width);
                }
                width += word_width;
                current.extend(pieces);
            }
            Item::Break => {
                lines.push(RawLine {
                    pieces: std::mem::take(&mut current),
                    width,
                    end: LineEnd::Forced,
                });
                width = 0.0;
                pending_space = None;
            }
        }
    }
    if !current.is_empty() {
        lines.push(RawLine {
            pieces: current,
            width,
            end: LineEnd::Last,
        });
    }
    if let Some(last) = lines.last_mut() {
        last.end = LineEnd::Last;
    }
    lines
}

fn align_offset(alignment: TextAlign, available_width: f32, width: f32) -> f32 {
    match alignment {
        TextAlign::Left | TextAlign::Justify => 0.0,
        TextAlign::Center => (available_width - width) / 2.0,
        TextAlign::Right => available_width - width,
    }
}

/// Breaks marked-up text into positioned lines.
pub fn layout_markup(markup_text: &str, settings: &TextSettings, available_width: f32) -> TextBlock {
    let items = tokenize(&markup::parse(markup_text), settings);
    let lines = break_lines(items, available_width)
        .into_iter()
        .map(|raw| finish_line(raw, settings, available_width))
        .collect();
    TextBlock {
        lines,
        leading: settings.leading,
    }
}

fn finish_line(raw: RawLine, settings: &TextSettings, available_width: f32) -> PlacedLine {
    let mut fragments: Vec<TextFragment> = Vec::new();
    for piece in raw.pieces {
        match fragments.last_mut() {
            Some(last) if last.font == piece.font && last.underline == piece.underline => {
                last.text.push_str(&piece.text);
                last.width += piece.width;
            }
            _ => fragments.push(TextFragment {
                text: piece.text,
                font: piece.font,
                x_offset: 0.0,
                width: piece.width,
                underline: piece.underline,
            }),
        }
    }

    let spaces = fragments
        .iter()
        .map(|f| f.text.matches(' ').count())
        .sum::<usize>();
    let word_spacing = if settings.alignment == TextAlign::Justify && raw.end == LineEnd::Wrapped && spaces > 0 {
        ((available_width - raw.width) / spaces as f32).max(0.0)
    } else {
        0.0
    };

    let mut cursor = 0.0;
    for fragment in &mut fragments {
        fragment.x_offset = cursor;
        fragment.width += word_spacing * fragment.text.matches(' ').count() as f32;
        cursor += fragment.width;
    }

    PlacedLine {
        x: align_offset(settings.alignment, available_width, raw.width),
        width: cursor,
        line: TextLine {
            fragments,
            font_size: settings.font_size,
            color: settings.color,
            word_spacing,
            baseline_offset: settings.baseline_offset(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(alignment: TextAlign) -> TextSettings {
        TextSettings {
            font: StandardFont::Helvetica,
            font_size: 10.0,
            leading: 15.0,
            color: Color::BLACK,
            alignment,
        }
    }

    fn texts(block: &TextBlock) -> Vec<String> {
        block.lines.iter().map(|l| l.line.content()).collect()
    }

    #[test]
    fn wraps_greedily_without_trailing_spaces() {
        // "aaaa" is 22.24pt at 10pt, a space 2.78pt.
        let block = layout_markup("aaaa aaaa aaaa", &settings(TextAlign::Left), 50.0);
        assert_eq!(texts(&block), vec!["aaaa aaaa", "aaaa"]);
        assert_eq!(block.height(), 30.0);
    }

    #[test]
    fn forced_breaks_keep_blank_lines() {
        let block = layout_markup("one<br/><br/>two", &settings(TextAlign::Left), 500.0);
        assert_eq!(texts(&block), vec!["one", "", "two"]);
    }

    #[test]
    fn justification_uses_word_spacing_except_on_last_line() {
        let block = layout_markup("aaaa aaaa aaaa", &settings(TextAlign::Justify), 50.0);
        let first = &block.lines[0];
        assert!(first.line.word_spacing > 0.0);
        assert!((first.width - 50.0).abs() < 0.01);
        assert_eq!(block.lines[1].line.word_spacing, 0.0);
    }

    #[test]
    fn lines_before_a_forced_break_are_not_stretched() {
        let block = layout_markup("aaaa aaaa<br/>aaaa", &settings(TextAlign::Justify), 80.0);
        assert_eq!(block.lines[0].line.word_spacing, 0.0);
    }

    #[test]
    fn emphasis_produces_separate_fragments() {
        let block = layout_markup("<b>KEY POINT:</b> keep it here", &settings(TextAlign::Left), 500.0);
        let fragments = &block.lines[0].line.fragments;
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].font, StandardFont::HelveticaBold);
        assert_eq!(fragments[0].text, "KEY POINT:");
        assert_eq!(fragments[1].text, " keep it here");
        assert!((fragments[1].x_offset - fragments[0].width).abs() < 1e-4);
    }

    #[test]
    fn centred_and_right_aligned_offsets() {
        let centred = layout_markup("Hi", &settings(TextAlign::Center), 100.0);
        assert!((centred.lines[0].x - (100.0 - 9.44) / 2.0).abs() < 1e-3);
        let right = layout_markup("Hi", &settings(TextAlign::Right), 100.0);
        assert!((right.lines[0].x - (100.0 - 9.44)).abs() < 1e-3);
    }

    #[test]
    fn plain_text_splits_only_on_newlines() {
        let block = layout_plain("Vendor Name\nand Region", &settings(TextAlign::Left), 10.0);
        assert_eq!(texts(&block), vec!["Vendor Name", "and Region"]);
    }

    #[test]
    fn overlong_word_sits_on_its_own_line() {
        let block = layout_markup("a verylongwordthatdoesnotfit b", &settings(TextAlign::Left), 40.0);
        assert_eq!(texts(&block), vec!["a", "verylongwordthatdoesnotfit", "b"]);
    }
}
