//! WinAnsi (CP1252) encoding for the simple fonts written to the PDF.

/// The WinAnsi code for `c`, if it has one.
pub fn win_ansi_byte(c: char) -> Option<u8> {
    let code = c as u32;
    match code {
        0x20..=0x7E | 0xA0..=0xFF => Some(code as u8),
        0x09 | 0x0A | 0x0D => Some(b' '),
        _ => cp1252_special(c),
    }
}

fn cp1252_special(c: char) -> Option<u8> {
    let byte = match c {
        '\u{20AC}' => 0x80,
        '\u{201A}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201E}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02C6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8A,
        '\u{2039}' => 0x8B,
        '\u{0152}' => 0x8C,
        '\u{017D}' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{02DC}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{0161}' => 0x9A,
        '\u{203A}' => 0x9B,
        '\u{0153}' => 0x9C,
        '\u{017E}' => 0x9E,
        '\u{0178}' => 0x9F,
        _ => return None,
    };
    Some(byte)
}

/// Encodes `text` for a `Tj` operand. Characters outside WinAnsi become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    let mut replaced = 0usize;
    let bytes = text
        .chars()
        .map(|c| {
            win_ansi_byte(c).unwrap_or_else(|| {
                replaced += 1;
                b'?'
            })
        })
        .collect();
    if replaced > 0 {
        log::warn!("Replaced {} character(s) with no WinAnsi glyph in {:?}", replaced, text);
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_and_latin1_pass_through() {
        assert_eq!(encode_win_ansi("SB 1188"), b"SB 1188".to_vec());
        assert_eq!(win_ansi_byte('\u{00A7}'), Some(0xA7));
    }

    #[test]
    fn typographic_punctuation_maps_to_cp1252() {
        assert_eq!(encode_win_ansi("\u{2022} \u{2014} \u{2013} \u{2122}"), vec![0x95, b' ', 0x97, b' ', 0x96, b' ', 0x99]);
        assert_eq!(encode_win_ansi("\u{2019}\u{201C}\u{201D}"), vec![0x92, 0x93, 0x94]);
    }

    #[test]
    fn unmappable_characters_become_question_marks() {
        assert_eq!(encode_win_ansi("a\u{2192}b"), b"a?b".to_vec());
    }
}
