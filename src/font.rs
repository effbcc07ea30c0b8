//! Fixed 3x5 bitmap font for uppercase A-Z.
//!
//! The glyph table is a constant asset: each glyph is five rows of three
//! bits, most significant bit leftmost. Text runs left to right at a fixed
//! 4-pixel advance (3-pixel glyph plus 1-pixel gap). No wrapping, no
//! kerning, no lowercase/digit/punctuation coverage.

use crate::color::Color;
use crate::surface::Surface;

pub const GLYPH_WIDTH: i32 = 3;
pub const GLYPH_HEIGHT: i32 = 5;
pub const GLYPH_SPACING: i32 = 1;

/// Per-character x advance when laying out a run
pub const GLYPH_ADVANCE: i32 = GLYPH_WIDTH + GLYPH_SPACING;

#[rustfmt::skip]
const GLYPHS: [[u8; 5]; 26] = [
    [0b010, 0b101, 0b111, 0b101, 0b101], // A
    [0b110, 0b101, 0b110, 0b101, 0b110], // B
    [0b010, 0b101, 0b100, 0b101, 0b010], // C
    [0b110, 0b101, 0b101, 0b101, 0b110], // D
    [0b111, 0b100, 0b110, 0b100, 0b111], // E
    [0b111, 0b100, 0b110, 0b100, 0b100], // F
    [0b011, 0b100, 0b101, 0b101, 0b011], // G
    [0b101, 0b101, 0b111, 0b101, 0b101], // H
    [0b010, 0b010, 0b010, 0b010, 0b010], // I
    [0b001, 0b001, 0b001, 0b101, 0b010], // J
    [0b101, 0b101, 0b110, 0b101, 0b101], // K
    [0b100, 0b100, 0b100, 0b100, 0b111], // L
    [0b101, 0b111, 0b101, 0b101, 0b101], // M
    [0b101, 0b101, 0b111, 0b111, 0b101], // N
    [0b010, 0b101, 0b101, 0b101, 0b010], // O
    [0b110, 0b101, 0b110, 0b100, 0b100], // P
    [0b010, 0b101, 0b101, 0b111, 0b011], // Q
    [0b110, 0b101, 0b110, 0b101, 0b101], // R
    [0b011, 0b100, 0b010, 0b001, 0b110], // S
    [0b111, 0b010, 0b010, 0b010, 0b010], // T
    [0b101, 0b101, 0b101, 0b101, 0b010], // U
    [0b101, 0b101, 0b101, 0b010, 0b010], // V
    [0b101, 0b101, 0b101, 0b111, 0b101], // W
    [0b101, 0b101, 0b010, 0b101, 0b101], // X
    [0b101, 0b101, 0b010, 0b010, 0b010], // Y
    [0b111, 0b001, 0b010, 0b100, 0b111], // Z
];

#[inline]
fn glyph_for(ch: char) -> Option<&'static [u8; 5]> {
    if ch.is_ascii_uppercase() {
        Some(&GLYPHS[(ch as u8 - b'A') as usize])
    } else {
        None
    }
}

/// Draw one glyph with its top-left cell at (x, y).
///
/// Set cells go through the bounds-checked pixel primitive, so glyphs clip
/// at the surface edges. Characters outside A-Z are silently skipped.
pub fn draw_char(surface: &mut Surface, x: i32, y: i32, ch: char, color: Color) {
    let Some(glyph) = glyph_for(ch) else {
        return;
    };
    for (row, bits) in glyph.iter().enumerate() {
        for col in 0..GLYPH_WIDTH {
            if bits & (0b100 >> col) != 0 {
                surface.set(x + col, y + row as i32, color);
            }
        }
    }
}

/// Draw a run of glyphs left to right at a fixed [`GLYPH_ADVANCE`]
pub fn draw_text(surface: &mut Surface, x: i32, y: i32, text: &str, color: Color) {
    for (i, ch) in text.chars().enumerate() {
        draw_char(surface, x + i as i32 * GLYPH_ADVANCE, y, ch, color);
    }
}

/// Pixel width of a text run (the trailing gap is not counted)
pub fn text_width(text: &str) -> i32 {
    let count = text.chars().count() as i32;
    if count == 0 {
        0
    } else {
        count * GLYPH_ADVANCE - GLYPH_SPACING
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Color, WHITE};

    fn lit_pixels(surface: &Surface) -> Vec<(i32, i32)> {
        let mut lit = Vec::new();
        for y in 0..surface.height() as i32 {
            for x in 0..surface.width() as i32 {
                if surface.get(x, y) == Some(WHITE) {
                    lit.push((x, y));
                }
            }
        }
        lit
    }

    #[test]
    fn test_draw_char_a_shape() {
        let mut s = Surface::new(8, 8).unwrap();
        draw_char(&mut s, 0, 0, 'A', WHITE);
        // Row 0 of 'A' is .#.
        assert_eq!(s.get(0, 0), Some(Color::default()));
        assert_eq!(s.get(1, 0), Some(WHITE));
        assert_eq!(s.get(2, 0), Some(Color::default()));
        // Row 2 is ###
        assert_eq!(s.get(0, 2), Some(WHITE));
        assert_eq!(s.get(1, 2), Some(WHITE));
        assert_eq!(s.get(2, 2), Some(WHITE));
        // Nothing outside the 3x5 cell
        assert!(lit_pixels(&s).iter().all(|&(x, y)| x < 3 && y < 5));
    }

    #[test]
    fn test_non_uppercase_characters_skipped() {
        let mut s = Surface::new(8, 8).unwrap();
        for ch in ['a', '0', ' ', '!', '@'] {
            draw_char(&mut s, 0, 0, ch, WHITE);
        }
        assert!(lit_pixels(&s).is_empty());
    }

    #[test]
    fn test_draw_text_advance_is_four_pixels() {
        let mut ab = Surface::new(16, 8).unwrap();
        draw_text(&mut ab, 0, 0, "AB", WHITE);

        let mut a = Surface::new(16, 8).unwrap();
        draw_char(&mut a, 0, 0, 'A', WHITE);
        let mut b = Surface::new(16, 8).unwrap();
        draw_char(&mut b, 4, 0, 'B', WHITE);

        let mut expected = lit_pixels(&a);
        expected.extend(lit_pixels(&b));
        expected.sort_unstable();
        let mut got = lit_pixels(&ab);
        got.sort_unstable();
        assert_eq!(got, expected);
        // Column 3 is the gap between glyphs
        assert!(!lit_pixels(&ab).iter().any(|&(x, _)| x == 3));
    }

    #[test]
    fn test_draw_text_clips_at_edges() {
        let mut s = Surface::new(4, 4).unwrap();
        let before = s.clone();
        draw_text(&mut s, -10, -10, "HELLO", WHITE);
        assert_eq!(s, before);
        // Partially visible text draws only the in-bounds cells
        draw_text(&mut s, 2, 2, "W", WHITE);
        assert!(lit_pixels(&s).iter().all(|&(x, y)| x < 4 && y < 4));
        assert!(!lit_pixels(&s).is_empty());
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width(""), 0);
        assert_eq!(text_width("A"), 3);
        assert_eq!(text_width("AB"), 7);
        assert_eq!(text_width("WORD"), 15);
    }
}
