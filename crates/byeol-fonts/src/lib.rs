//! Block glyph font for the byeol clock face.
//!
//! Glyphs are stored as tiny bitmaps (one byte per row, most significant
//! used bit on the left) and expanded to `██` per lit pixel, so a 3-pixel
//! digit is 6 terminal columns wide.

/// Rows in every rendered glyph.
pub const GLYPH_HEIGHT: usize = 5;

/// Columns of blank space between adjacent glyphs.
pub const GLYPH_GAP: usize = 1;

const PIXEL_ON: &str = "██";
const PIXEL_OFF: &str = "  ";

#[derive(Debug, Clone, Copy)]
struct Glyph {
    /// Width in pixels.
    width: u8,
    rows: [u8; GLYPH_HEIGHT],
}

const fn g(width: u8, rows: [u8; GLYPH_HEIGHT]) -> Glyph {
    Glyph { width, rows }
}

const DIGITS: [Glyph; 10] = [
    g(3, [0b111, 0b101, 0b101, 0b101, 0b111]),
    g(3, [0b010, 0b110, 0b010, 0b010, 0b111]),
    g(3, [0b111, 0b001, 0b111, 0b100, 0b111]),
    g(3, [0b111, 0b001, 0b111, 0b001, 0b111]),
    g(3, [0b101, 0b101, 0b111, 0b001, 0b001]),
    g(3, [0b111, 0b100, 0b111, 0b001, 0b111]),
    g(3, [0b111, 0b100, 0b111, 0b101, 0b111]),
    g(3, [0b111, 0b001, 0b001, 0b001, 0b001]),
    g(3, [0b111, 0b101, 0b111, 0b101, 0b111]),
    g(3, [0b111, 0b101, 0b111, 0b001, 0b111]),
];

const COLON: Glyph = g(1, [0, 1, 0, 1, 0]);
const SPACE: Glyph = g(1, [0; GLYPH_HEIGHT]);
const LETTER_A: Glyph = g(3, [0b010, 0b101, 0b111, 0b101, 0b101]);
const LETTER_P: Glyph = g(3, [0b110, 0b101, 0b110, 0b100, 0b100]);
const LETTER_M: Glyph = g(5, [0b10001, 0b11011, 0b10101, 0b10001, 0b10001]);

fn glyph(ch: char) -> Option<Glyph> {
    match ch {
        '0'..='9' => ch.to_digit(10).map(|d| DIGITS[d as usize]),
        ':' => Some(COLON),
        ' ' => Some(SPACE),
        'A' | 'a' => Some(LETTER_A),
        'P' | 'p' => Some(LETTER_P),
        'M' | 'm' => Some(LETTER_M),
        _ => None,
    }
}

fn glyphs(text: &str) -> impl Iterator<Item = Glyph> + '_ {
    text.chars().filter_map(glyph)
}

/// Whether every character of `text` has a glyph.
pub fn is_renderable(text: &str) -> bool {
    text.chars().all(|ch| glyph(ch).is_some())
}

/// Width in terminal columns of `text` once rendered.
pub fn text_width(text: &str) -> usize {
    let (count, pixels) =
        glyphs(text).fold((0usize, 0usize), |(n, w), gl| (n + 1, w + gl.width as usize));
    pixels * PIXEL_ON.chars().count() + count.saturating_sub(1) * GLYPH_GAP
}

/// Render `text` as [`GLYPH_HEIGHT`] rows of block art. Characters with no
/// glyph are skipped.
pub fn render_text(text: &str) -> Vec<String> {
    let gap = " ".repeat(GLYPH_GAP);
    (0..GLYPH_HEIGHT)
        .map(|row| {
            let mut line = String::new();
            for (i, gl) in glyphs(text).enumerate() {
                if i > 0 {
                    line.push_str(&gap);
                }
                for bit in (0..gl.width).rev() {
                    if gl.rows[row] & (1 << bit) != 0 {
                        line.push_str(PIXEL_ON);
                    } else {
                        line.push_str(PIXEL_OFF);
                    }
                }
            }
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_digit() {
        let rows = render_text("7");
        assert_eq!(rows.len(), GLYPH_HEIGHT);
        assert_eq!(rows[0], "██████");
        assert_eq!(rows[4], "    ██");
    }

    #[test]
    fn test_rows_match_width() {
        for text in ["12", "05", ":", "AM", "PM", "0123456789"] {
            let width = text_width(text);
            for row in render_text(text) {
                assert_eq!(row.chars().count(), width, "{text:?}");
            }
        }
    }

    #[test]
    fn test_width_includes_gaps() {
        assert_eq!(text_width(""), 0);
        assert_eq!(text_width("1"), 6);
        assert_eq!(text_width("12"), 13);
        assert_eq!(text_width("AM"), 6 + 1 + 10);
    }

    #[test]
    fn test_unknown_characters_are_skipped() {
        assert!(!is_renderable("1x"));
        assert!(is_renderable("12:34 PM"));
        assert_eq!(render_text("1x"), render_text("1"));
    }
}
