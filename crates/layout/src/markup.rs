//! Inline markup: `<b>`, `<i>`, `<u>`, `<br/>` and the basic XML entities.
//!
//! Whitespace is collapsed the way a paragraph renderer sees it: any run of
//! spaces or source newlines becomes one space, and whitespace at the start
//! of the paragraph or after a forced break is dropped.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(Span),
    LineBreak,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Span {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

#[derive(Default)]
struct Parser {
    items: Vec<Inline>,
    current: String,
    bold: u32,
    italic: u32,
    underline: u32,
    pending_space: bool,
    at_line_start: bool,
}

impl Parser {
    fn flush(&mut self) {
        if !self.current.is_empty() {
            let text = std::mem::take(&mut self.current);
            self.items.push(Inline::Text(Span {
                text,
                bold: self.bold > 0,
                italic: self.italic > 0,
                underline: self.underline > 0,
            }));
        }
    }

    fn push_char(&mut self, c: char) {
        if c.is_ascii_whitespace() {
            if !self.at_line_start {
                self.pending_space = true;
            }
            return;
        }
        if self.pending_space {
            self.current.push(' ');
            self.pending_space = false;
        }
        self.at_line_start = false;
        self.current.push(c);
    }

    fn tag(&mut self, raw: &str) {
        let name = raw.trim().trim_end_matches('/').trim().to_ascii_lowercase();
        let (closing, name) = match name.strip_prefix('/') {
            Some(rest) => (true, rest.trim().to_string()),
            None => (false, name),
        };
        let kind = match name.as_str() {
            "b" | "strong" => StyleKind::Bold,
            "i" | "em" => StyleKind::Italic,
            "u" => StyleKind::Underline,
            "br" => {
                self.flush();
                self.items.push(Inline::LineBreak);
                self.pending_space = false;
                self.at_line_start = true;
                return;
            }
            other => {
                log::debug!("Ignoring unsupported markup tag <{}>", other);
                return;
            }
        };
        // A space before a style change belongs to the run it follows.
        if self.pending_space {
            self.current.push(' ');
            self.pending_space = false;
        }
        self.flush();
        let counter = match kind {
            StyleKind::Bold => &mut self.bold,
            StyleKind::Italic => &mut self.italic,
            StyleKind::Underline => &mut self.underline,
        };
        if closing {
            *counter = counter.saturating_sub(1);
        } else {
            *counter += 1;
        }
    }
}

#[derive(Clone, Copy)]
enum StyleKind {
    Bold,
    Italic,
    Underline,
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" | "#39" => Some('\''),
        "nbsp" => Some('\u{00A0}'),
        _ => {
            let digits = entity.strip_prefix('#')?;
            let code = match digits.strip_prefix('x') {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => digits.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

/// Parses paragraph markup into styled runs and forced line breaks.
pub fn parse(markup: &str) -> Vec<Inline> {
    let mut parser = Parser {
        at_line_start: true,
        ..Default::default()
    };
    let mut rest = markup;

    while let Some(c) = rest.chars().next() {
        match c {
            '<' => match rest.find('>') {
                Some(end) => {
                    parser.tag(&rest[1..end]);
                    rest = &rest[end + 1..];
                }
                None => {
                    parser.push_char('<');
                    rest = &rest[1..];
                }
            },
            '&' => {
                let decoded = rest
                    .find(';')
                    .filter(|&end| end <= 10)
                    .and_then(|end| decode_entity(&rest[1..end]).map(|ch| (ch, end)));
                match decoded {
                    Some((ch, end)) => {
                        parser.push_char(ch);
                        rest = &rest[end + 1..];
                    }
                    None => {
                        parser.push_char('&');
                        rest = &rest[1..];
                    }
                }
            }
            _ => {
                parser.push_char(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    parser.flush();
    parser.items
}

/// The markup with tags removed and entities decoded.
pub fn plain_text(markup: &str) -> String {
    parse(markup)
        .into_iter()
        .map(|item| match item {
            Inline::Text(span) => span.text,
            Inline::LineBreak => "\n".to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(text: &str, bold: bool, italic: bool, underline: bool) -> Inline {
        Inline::Text(Span {
            text: text.to_string(),
            bold,
            italic,
            underline,
        })
    }

    #[test]
    fn splits_runs_on_emphasis() {
        let items = parse("<b>WARNING:</b> Do not paste <i>patient</i> data.");
        assert_eq!(
            items,
            vec![
                span("WARNING:", true, false, false),
                span(" Do not paste ", false, false, false),
                span("patient", false, true, false),
                span(" data.", false, false, false),
            ]
        );
    }

    #[test]
    fn line_breaks_drop_surrounding_whitespace() {
        let items = parse("<b>TITLE</b><br/>\n   body text");
        assert_eq!(
            items,
            vec![span("TITLE", true, false, false), Inline::LineBreak, span("body text", false, false, false)]
        );
    }

    #[test]
    fn collapses_source_whitespace() {
        assert_eq!(plain_text("  one\n   two\tthree "), "one two three");
    }

    #[test]
    fn decodes_entities() {
        assert_eq!(plain_text("Print &amp; Post &lt;here&gt; &#8212; &#x2122;"), "Print & Post <here> \u{2014} \u{2122}");
        assert_eq!(plain_text("R&D"), "R&D");
    }

    #[test]
    fn nested_tags_combine() {
        let items = parse("<b>bold <u>both</u></b>");
        assert_eq!(items, vec![span("bold ", true, false, false), span("both", true, false, true)]);
    }
}
