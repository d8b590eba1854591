//! Text rendering on the framebuffer
//!
//! Characters are drawn on 8x8 cells aligned to display pages. A glyph
//! replaces the 8 bytes under it wholesale, so text erases whatever was
//! drawn underneath its cell.
//!
//! [`Framebuffer::draw_utf8_multiline`] decodes UTF-8 input into Latin-1 with
//! [`Latin1Decoder`] and wraps to the next row at the right edge.
//!
//! ```
//! use ssd1306_oled::{Dimensions, Framebuffer};
//!
//! let mut fb = Framebuffer::new(Dimensions::W128_H32);
//! fb.draw_text(0, 0, "Distância: 42");
//! fb.draw_string(0, 24, "OK");
//! ```

use crate::font::{BLANK_GLYPH, FONT, GLYPH_HEIGHT, GLYPH_WIDTH, GlyphResolver};
use crate::framebuffer::Framebuffer;

const CELL_WIDTH: i32 = GLYPH_WIDTH as i32;
const CELL_HEIGHT: i32 = GLYPH_HEIGHT as i32;

/// Iterator decoding UTF-8 bytes into Latin-1 code points
///
/// Single-byte sequences pass through, two-byte sequences are combined.
/// Every other byte (continuation bytes, lead bytes of longer sequences) is
/// skipped on its own. A two-byte lead at the very end of the input ends the
/// iteration.
///
/// ```
/// use ssd1306_oled::Latin1Decoder;
///
/// let decoded: Vec<u16> = Latin1Decoder::new("aé".as_bytes()).collect();
/// assert_eq!(decoded, [0x61, 0xE9]);
/// ```
#[derive(Clone, Debug)]
pub struct Latin1Decoder<'a> {
    input: &'a [u8],
}

impl<'a> Latin1Decoder<'a> {
    /// Decode `input`
    pub fn new(input: &'a [u8]) -> Self {
        Self { input }
    }

    /// Bytes not consumed yet
    pub fn remaining(&self) -> &'a [u8] {
        self.input
    }
}

impl Iterator for Latin1Decoder<'_> {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        loop {
            let (&first, rest) = self.input.split_first()?;
            if first & 0x80 == 0 {
                self.input = rest;
                return Some(u16::from(first));
            }
            if first & 0xE0 == 0xC0 {
                let (&second, rest) = rest.split_first()?;
                self.input = rest;
                return Some((u16::from(first & 0x1F) << 6) | u16::from(second & 0x3F));
            }
            self.input = rest;
        }
    }
}

impl<B> Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Whether an 8x8 cell at (`x`, `y`) lies entirely on the panel
    fn cell_fits(&self, x: i32, y: i32) -> bool {
        let dimensions = self.dimensions();
        x >= 0
            && y >= 0
            && x <= i32::from(dimensions.width) - CELL_WIDTH
            && y <= i32::from(dimensions.height) - CELL_HEIGHT
    }

    fn blit_glyph(&mut self, x: i32, y: i32, glyph: &[u8; GLYPH_WIDTH]) {
        if !self.cell_fits(x, y) {
            return;
        }
        let width = self.dimensions().width as usize;
        let start = (y / CELL_HEIGHT) as usize * width + x as usize;
        if let Some(cell) = self.as_bytes_mut().get_mut(start..start + GLYPH_WIDTH) {
            cell.copy_from_slice(glyph);
        }
    }

    /// Draw one Latin-1 character with its top-left corner at (`x`, `y`)
    ///
    /// `y` is rounded down to a page boundary. Nothing is drawn unless the
    /// whole cell fits on the panel.
    pub fn draw_char(&mut self, x: i32, y: i32, ch: u8) {
        let glyph = self.font_mode().glyph(ch);
        self.blit_glyph(x, y, glyph);
    }

    /// Draw a string on one row, one byte per cell
    ///
    /// Characters past the right edge are dropped.
    pub fn draw_string(&mut self, x: i32, y: i32, text: &str) {
        if !self.cell_fits(x, y) {
            return;
        }
        let mut x = x;
        for ch in text.bytes() {
            self.draw_char(x, y, ch);
            x = x.saturating_add(CELL_WIDTH);
        }
    }

    /// Draw UTF-8 text, wrapping to the start of the next row at the right edge
    ///
    /// Code points outside Latin-1 draw the blank glyph. Text that does not
    /// fit above the bottom edge is dropped.
    pub fn draw_utf8_multiline(&mut self, x: i32, y: i32, text: &[u8]) {
        let dimensions = self.dimensions();
        let max_x = i32::from(dimensions.width) - CELL_WIDTH;
        let max_y = i32::from(dimensions.height) - CELL_HEIGHT;
        let (mut x, mut y) = (x, y);
        let mut decoder = Latin1Decoder::new(text);

        while y <= max_y {
            let Some(code_point) = decoder.next() else {
                break;
            };
            let glyph = u8::try_from(code_point)
                .map_or(&FONT[BLANK_GLYPH], |ch| self.font_mode().glyph(ch));
            self.blit_glyph(x, y, glyph);
            x = x.saturating_add(CELL_WIDTH);
            if x > max_x {
                x = 0;
                y = y.saturating_add(CELL_HEIGHT);
            }
        }
    }

    /// [`draw_utf8_multiline`](Self::draw_utf8_multiline) for string slices
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        self.draw_utf8_multiline(x, y, text.as_bytes());
    }
}
