//! 8x8 glyph table and glyph resolvers
//!
//! Glyphs are stored in the controller's native page format: each of the 8
//! bytes is one vertical column of the character cell, least significant
//! bit at the top. A glyph can therefore be copied straight into one page of
//! the framebuffer.
//!
//! Two resolvers map a Latin-1 byte to a glyph:
//!
//! | Resolver | Case | Supported characters |
//! |----------|------|----------------------|
//! | [`BasicAscii`] | folded to upper case | `A`-`Z`, `0`-`9` |
//! | [`ExtendedLatin1`] | case-sensitive | `A`-`Z`, `a`-`z`, `0`-`9`, `. : # ! ? ,` and `ÃÂÁÀÉÊÍÓÔÕÚÇçãáàâéêíóôú` |
//!
//! Anything else resolves to the blank glyph at index 0.
//!
//! ```
//! use ssd1306_oled::font::{FontMode, GlyphResolver};
//!
//! assert_eq!(FontMode::BasicAscii.glyph_index(b'a'), 1);
//! assert_eq!(FontMode::ExtendedLatin1.glyph_index(b'a'), 37);
//! assert_eq!(FontMode::ExtendedLatin1.glyph_index(0xE9), 85); // é
//! assert_eq!(FontMode::BasicAscii.glyph_index(b'~'), 0);
//! ```

/// Width of a glyph cell in pixels
pub const GLYPH_WIDTH: usize = 8;

/// Height of a glyph cell in pixels (one page)
pub const GLYPH_HEIGHT: usize = 8;

/// Index of the blank glyph used for unsupported characters
pub const BLANK_GLYPH: usize = 0;

/// Number of glyphs in [`FONT`]
pub const GLYPH_COUNT: usize = 92;

/// Glyph bitmaps, one column per byte, LSB at the top
#[rustfmt::skip]
pub static FONT: [[u8; GLYPH_WIDTH]; GLYPH_COUNT] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // blank
    [0x00, 0x7C, 0x7E, 0x0B, 0x0B, 0x7E, 0x7C, 0x00], // A
    [0x00, 0x7F, 0x7F, 0x49, 0x49, 0x7F, 0x36, 0x00], // B
    [0x00, 0x3E, 0x7F, 0x41, 0x41, 0x63, 0x22, 0x00], // C
    [0x00, 0x7F, 0x7F, 0x41, 0x63, 0x3E, 0x1C, 0x00], // D
    [0x00, 0x7F, 0x7F, 0x49, 0x49, 0x41, 0x41, 0x00], // E
    [0x00, 0x7F, 0x7F, 0x09, 0x09, 0x01, 0x01, 0x00], // F
    [0x00, 0x3E, 0x7F, 0x41, 0x49, 0x7B, 0x3A, 0x00], // G
    [0x00, 0x7F, 0x7F, 0x08, 0x08, 0x7F, 0x7F, 0x00], // H
    [0x00, 0x00, 0x41, 0x7F, 0x7F, 0x41, 0x00, 0x00], // I
    [0x00, 0x20, 0x60, 0x41, 0x7F, 0x3F, 0x01, 0x00], // J
    [0x00, 0x7F, 0x7F, 0x1C, 0x36, 0x63, 0x41, 0x00], // K
    [0x00, 0x7F, 0x7F, 0x40, 0x40, 0x40, 0x40, 0x00], // L
    [0x00, 0x7F, 0x7F, 0x06, 0x0C, 0x06, 0x7F, 0x7F], // M
    [0x00, 0x7F, 0x7F, 0x0E, 0x1C, 0x7F, 0x7F, 0x00], // N
    [0x00, 0x3E, 0x7F, 0x41, 0x41, 0x7F, 0x3E, 0x00], // O
    [0x00, 0x7F, 0x7F, 0x09, 0x09, 0x0F, 0x06, 0x00], // P
    [0x00, 0x1E, 0x3F, 0x21, 0x61, 0x7F, 0x5E, 0x00], // Q
    [0x00, 0x7F, 0x7F, 0x19, 0x39, 0x6F, 0x46, 0x00], // R
    [0x00, 0x26, 0x6F, 0x49, 0x49, 0x7B, 0x32, 0x00], // S
    [0x00, 0x01, 0x01, 0x7F, 0x7F, 0x01, 0x01, 0x00], // T
    [0x00, 0x3F, 0x7F, 0x40, 0x40, 0x7F, 0x3F, 0x00], // U
    [0x00, 0x1F, 0x3F, 0x60, 0x60, 0x3F, 0x1F, 0x00], // V
    [0x00, 0x7F, 0x7F, 0x30, 0x18, 0x30, 0x7F, 0x7F], // W
    [0x00, 0x63, 0x77, 0x1C, 0x1C, 0x77, 0x63, 0x00], // X
    [0x00, 0x07, 0x0F, 0x78, 0x78, 0x0F, 0x07, 0x00], // Y
    [0x00, 0x61, 0x71, 0x59, 0x4D, 0x47, 0x43, 0x00], // Z
    [0x00, 0x3E, 0x7F, 0x49, 0x45, 0x7F, 0x3E, 0x00], // 0
    [0x00, 0x40, 0x44, 0x7F, 0x7F, 0x40, 0x40, 0x00], // 1
    [0x00, 0x62, 0x73, 0x51, 0x49, 0x4F, 0x46, 0x00], // 2
    [0x00, 0x22, 0x63, 0x49, 0x49, 0x7F, 0x36, 0x00], // 3
    [0x00, 0x18, 0x18, 0x14, 0x16, 0x7F, 0x7F, 0x10], // 4
    [0x00, 0x27, 0x67, 0x45, 0x45, 0x7D, 0x39, 0x00], // 5
    [0x00, 0x3E, 0x7F, 0x49, 0x49, 0x7B, 0x32, 0x00], // 6
    [0x00, 0x03, 0x03, 0x79, 0x7D, 0x07, 0x03, 0x00], // 7
    [0x00, 0x36, 0x7F, 0x49, 0x49, 0x7F, 0x36, 0x00], // 8
    [0x00, 0x26, 0x6F, 0x49, 0x49, 0x7F, 0x3E, 0x00], // 9
    [0x00, 0x20, 0x74, 0x54, 0x54, 0x7C, 0x78, 0x00], // a
    [0x00, 0x7F, 0x7F, 0x44, 0x44, 0x7C, 0x38, 0x00], // b
    [0x00, 0x38, 0x7C, 0x44, 0x44, 0x44, 0x00, 0x00], // c
    [0x00, 0x38, 0x7C, 0x44, 0x44, 0x7F, 0x7F, 0x00], // d
    [0x00, 0x38, 0x7C, 0x54, 0x54, 0x5C, 0x18, 0x00], // e
    [0x00, 0x08, 0x08, 0x7E, 0x7F, 0x09, 0x09, 0x00], // f
    [0x00, 0x98, 0xBC, 0xA4, 0xA4, 0xFC, 0x7C, 0x00], // g
    [0x00, 0x7F, 0x7F, 0x04, 0x04, 0x7C, 0x78, 0x00], // h
    [0x00, 0x00, 0x44, 0x7D, 0x7D, 0x40, 0x00, 0x00], // i
    [0x00, 0x40, 0xC0, 0x80, 0x84, 0xFD, 0x7D, 0x00], // j
    [0x00, 0x7F, 0x7F, 0x10, 0x38, 0x6C, 0x44, 0x00], // k
    [0x00, 0x00, 0x41, 0x7F, 0x7F, 0x40, 0x00, 0x00], // l
    [0x00, 0x7C, 0x7C, 0x18, 0x38, 0x1C, 0x7C, 0x78], // m
    [0x00, 0x7C, 0x7C, 0x04, 0x04, 0x7C, 0x78, 0x00], // n
    [0x00, 0x38, 0x7C, 0x44, 0x44, 0x7C, 0x38, 0x00], // o
    [0x00, 0xFC, 0xFC, 0x24, 0x24, 0x3C, 0x18, 0x00], // p
    [0x00, 0x18, 0x3C, 0x24, 0x24, 0xFC, 0xFC, 0x00], // q
    [0x00, 0x7C, 0x7C, 0x04, 0x04, 0x0C, 0x08, 0x00], // r
    [0x00, 0x48, 0x5C, 0x54, 0x54, 0x74, 0x24, 0x00], // s
    [0x00, 0x04, 0x04, 0x3F, 0x7F, 0x44, 0x44, 0x00], // t
    [0x00, 0x3C, 0x7C, 0x40, 0x40, 0x7C, 0x7C, 0x00], // u
    [0x00, 0x1C, 0x3C, 0x60, 0x60, 0x3C, 0x1C, 0x00], // v
    [0x00, 0x3C, 0x7C, 0x70, 0x38, 0x70, 0x7C, 0x3C], // w
    [0x00, 0x44, 0x6C, 0x38, 0x38, 0x6C, 0x44, 0x00], // x
    [0x00, 0x9C, 0xBC, 0xA0, 0xE0, 0x7C, 0x3C, 0x00], // y
    [0x00, 0x44, 0x64, 0x74, 0x5C, 0x4C, 0x44, 0x00], // z
    [0x00, 0x00, 0x00, 0x60, 0x60, 0x00, 0x00, 0x00], // .
    [0x00, 0x00, 0x00, 0x12, 0x12, 0x00, 0x00, 0x00], // :
    [0x14, 0x7F, 0x7F, 0x14, 0x7F, 0x7F, 0x14, 0x00], // #
    [0x00, 0x00, 0x06, 0x5F, 0x5F, 0x06, 0x00, 0x00], // !
    [0x00, 0x02, 0x03, 0x51, 0x59, 0x0F, 0x06, 0x00], // ?
    [0x00, 0xFA, 0xFD, 0x25, 0x26, 0xFE, 0xF9, 0x00], // Ã
    [0x00, 0xF8, 0xFE, 0x25, 0x25, 0xFE, 0xF8, 0x00], // Â
    [0x00, 0xF8, 0xFC, 0x26, 0x27, 0xFD, 0xF8, 0x00], // Á
    [0x00, 0xF8, 0xFD, 0x27, 0x26, 0xFC, 0xF8, 0x00], // À
    [0x00, 0xFC, 0xFC, 0x96, 0x97, 0x95, 0x84, 0x00], // É
    [0x00, 0xFC, 0xFE, 0x95, 0x95, 0x96, 0x84, 0x00], // Ê
    [0x00, 0x00, 0x84, 0xFE, 0xFF, 0x85, 0x00, 0x00], // Í
    [0x00, 0x78, 0xFC, 0x86, 0x87, 0xFD, 0x78, 0x00], // Ó
    [0x00, 0x78, 0xFE, 0x85, 0x85, 0xFE, 0x78, 0x00], // Ô
    [0x00, 0x7A, 0xFD, 0x85, 0x86, 0xFE, 0x79, 0x00], // Õ
    [0x00, 0x7C, 0xFC, 0x82, 0x83, 0xFD, 0x7C, 0x00], // Ú
    [0x00, 0x1E, 0xBF, 0xE1, 0x61, 0x33, 0x12, 0x00], // Ç
    [0x00, 0x1C, 0xBE, 0xE2, 0x62, 0x22, 0x00, 0x00], // ç
    [0x00, 0x22, 0x75, 0x55, 0x56, 0x7E, 0x79, 0x00], // ã
    [0x00, 0x20, 0x74, 0x56, 0x57, 0x7D, 0x78, 0x00], // á
    [0x00, 0x20, 0x75, 0x57, 0x56, 0x7C, 0x78, 0x00], // à
    [0x00, 0x20, 0x76, 0x55, 0x55, 0x7E, 0x78, 0x00], // â
    [0x00, 0x38, 0x7C, 0x56, 0x57, 0x5D, 0x18, 0x00], // é
    [0x00, 0x38, 0x7E, 0x55, 0x55, 0x5E, 0x18, 0x00], // ê
    [0x00, 0x00, 0x44, 0x7E, 0x7F, 0x41, 0x00, 0x00], // í
    [0x00, 0x38, 0x7C, 0x46, 0x47, 0x7D, 0x38, 0x00], // ó
    [0x00, 0x38, 0x7E, 0x45, 0x45, 0x7E, 0x38, 0x00], // ô
    [0x00, 0x3C, 0x7C, 0x42, 0x43, 0x7D, 0x7C, 0x00], // ú
    [0x00, 0x00, 0x80, 0xE0, 0x60, 0x00, 0x00, 0x00], // ,
];

/// Maps a Latin-1 byte to an entry of [`FONT`]
pub trait GlyphResolver {
    /// Index into [`FONT`]; [`BLANK_GLYPH`] for unsupported characters
    fn glyph_index(&self, ch: u8) -> usize;

    /// Glyph bitmap for `ch`
    fn glyph(&self, ch: u8) -> &'static [u8; GLYPH_WIDTH] {
        FONT.get(self.glyph_index(ch)).unwrap_or(&FONT[BLANK_GLYPH])
    }
}

/// Upper-case letters and digits; lower-case input is folded to upper case
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BasicAscii;

impl GlyphResolver for BasicAscii {
    fn glyph_index(&self, ch: u8) -> usize {
        match ch.to_ascii_uppercase() {
            c @ b'A'..=b'Z' => (c - b'A') as usize + 1,
            c @ b'0'..=b'9' => (c - b'0') as usize + 27,
            _ => BLANK_GLYPH,
        }
    }
}

/// Case-sensitive letters, digits, punctuation and Portuguese accented letters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtendedLatin1;

impl GlyphResolver for ExtendedLatin1 {
    fn glyph_index(&self, ch: u8) -> usize {
        match ch {
            b'A'..=b'Z' => (ch - b'A') as usize + 1,
            b'0'..=b'9' => (ch - b'0') as usize + 27,
            b'a'..=b'z' => (ch - b'a') as usize + 37,
            b'.' => 63,
            b':' => 64,
            b'#' => 65,
            b'!' => 66,
            b'?' => 67,
            0xC3 => 68, // Ã
            0xC2 => 69, // Â
            0xC1 => 70, // Á
            0xC0 => 71, // À
            0xC9 => 72, // É
            0xCA => 73, // Ê
            0xCD => 74, // Í
            0xD3 => 75, // Ó
            0xD4 => 76, // Ô
            0xD5 => 77, // Õ
            0xDA => 78, // Ú
            0xC7 => 79, // Ç
            0xE7 => 80, // ç
            0xE3 => 81, // ã
            0xE1 => 82, // á
            0xE0 => 83, // à
            0xE2 => 84, // â
            0xE9 => 85, // é
            0xEA => 86, // ê
            0xED => 87, // í
            0xF3 => 88, // ó
            0xF4 => 89, // ô
            0xFA => 90, // ú
            b',' => 91,
            _ => BLANK_GLYPH,
        }
    }
}

/// Glyph resolver selected at construction time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontMode {
    /// See [`BasicAscii`]
    BasicAscii,
    /// See [`ExtendedLatin1`]
    #[default]
    ExtendedLatin1,
}

impl GlyphResolver for FontMode {
    fn glyph_index(&self, ch: u8) -> usize {
        match self {
            Self::BasicAscii => BasicAscii.glyph_index(ch),
            Self::ExtendedLatin1 => ExtendedLatin1.glyph_index(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_glyph_is_empty() {
        assert_eq!(FONT[BLANK_GLYPH], [0u8; GLYPH_WIDTH]);
    }

    #[test]
    fn test_basic_ascii_folds_case() {
        for (upper, lower) in (b'A'..=b'Z').zip(b'a'..=b'z') {
            assert_eq!(BasicAscii.glyph_index(upper), BasicAscii.glyph_index(lower));
        }
        assert_eq!(BasicAscii.glyph_index(b'A'), 1);
        assert_eq!(BasicAscii.glyph_index(b'Z'), 26);
        assert_eq!(BasicAscii.glyph_index(b'0'), 27);
        assert_eq!(BasicAscii.glyph_index(b'9'), 36);
    }

    #[test]
    fn test_basic_ascii_has_no_punctuation_or_accents() {
        for ch in [b'.', b':', b'#', b'!', b'?', b',', b' ', 0xE9, 0xC7] {
            assert_eq!(BasicAscii.glyph_index(ch), BLANK_GLYPH);
        }
    }

    #[test]
    fn test_extended_is_case_sensitive() {
        assert_eq!(ExtendedLatin1.glyph_index(b'A'), 1);
        assert_eq!(ExtendedLatin1.glyph_index(b'a'), 37);
        assert_eq!(ExtendedLatin1.glyph_index(b'z'), 62);
        assert_ne!(ExtendedLatin1.glyph(b'a'), ExtendedLatin1.glyph(b'A'));
    }

    #[test]
    fn test_extended_punctuation_and_accents() {
        assert_eq!(ExtendedLatin1.glyph_index(b'.'), 63);
        assert_eq!(ExtendedLatin1.glyph_index(b'?'), 67);
        assert_eq!(ExtendedLatin1.glyph_index(0xC3), 68);
        assert_eq!(ExtendedLatin1.glyph_index(0xFA), 90);
        assert_eq!(ExtendedLatin1.glyph_index(b','), 91);
    }

    #[test]
    fn test_extended_unsupported_is_blank() {
        for ch in [b' ', b'~', b'@', 0x00, 0x7F, 0xFF, 0xE4] {
            assert_eq!(ExtendedLatin1.glyph_index(ch), BLANK_GLYPH);
            assert_eq!(ExtendedLatin1.glyph(ch), &FONT[BLANK_GLYPH]);
        }
    }

    #[test]
    fn test_every_supported_character_has_ink() {
        for ch in 0..=u8::MAX {
            let index = ExtendedLatin1.glyph_index(ch);
            if index != BLANK_GLYPH {
                assert!(FONT[index].iter().any(|column| *column != 0));
            }
        }
    }

    #[test]
    fn test_font_mode_dispatch() {
        assert_eq!(FontMode::default(), FontMode::ExtendedLatin1);
        assert_eq!(FontMode::BasicAscii.glyph(b'q'), BasicAscii.glyph(b'Q'));
        assert_eq!(FontMode::ExtendedLatin1.glyph(b'q'), &FONT[53]);
    }
}
