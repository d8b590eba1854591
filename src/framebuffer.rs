//! Page-format framebuffer and pixel primitives
//!
//! The buffer mirrors the controller's GDDRAM in horizontal addressing mode:
//! byte `(y / 8) * width + x` holds the 8 vertical pixels of column `x` in
//! page `y / 8`, bit `y % 8` being pixel `y`.
//!
//! ```text
//!          col 0    col 1          col W-1
//! page 0  [byte 0] [byte 1]  ...  [byte W-1]      bit 0 = row 0 .. bit 7 = row 7
//! page 1  [byte W] [byte W+1] ... [byte 2W-1]     bit 0 = row 8 .. bit 7 = row 15
//! ```
//!
//! Coordinates are signed so that callers can position shapes partially off
//! the panel; pixels outside the panel are clipped.

use crate::config::{Dimensions, MAX_BUFFER_LEN, PAGE_HEIGHT};
use crate::error::BuilderError;
use crate::font::FontMode;

/// In-memory image of the display RAM
///
/// Generic over its storage. The default is a fixed array large enough for a
/// 128x64 panel; any `AsRef<[u8]> + AsMut<[u8]>` of at least
/// [`Dimensions::buffer_size`] bytes can be used instead.
///
/// ```
/// use ssd1306_oled::{Dimensions, Framebuffer};
///
/// let mut fb = Framebuffer::new(Dimensions::W128_H64);
/// fb.set_pixel(3, 10, true);
/// assert_eq!(fb.as_bytes()[128 + 3], 0b0000_0100);
/// ```
#[derive(Clone, Debug)]
pub struct Framebuffer<B = [u8; MAX_BUFFER_LEN]> {
    buffer: B,
    dimensions: Dimensions,
    font_mode: FontMode,
}

impl Framebuffer<[u8; MAX_BUFFER_LEN]> {
    /// Create a cleared framebuffer backed by a fixed array
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            buffer: [0; MAX_BUFFER_LEN],
            dimensions,
            font_mode: FontMode::default(),
        }
    }
}

impl<B> Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Wrap caller-provided storage
    ///
    /// The storage content is kept as is.
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::BufferTooSmall` if `buffer` is shorter than
    /// `dimensions.buffer_size()`.
    pub fn with_buffer(dimensions: Dimensions, buffer: B) -> Result<Self, BuilderError> {
        let required = dimensions.buffer_size();
        let provided = buffer.as_ref().len();
        if provided < required {
            return Err(BuilderError::BufferTooSmall { required, provided });
        }
        Ok(Self {
            buffer,
            dimensions,
            font_mode: FontMode::default(),
        })
    }

    /// Select the glyph resolver used by text drawing
    pub fn with_font_mode(mut self, font_mode: FontMode) -> Self {
        self.font_mode = font_mode;
        self
    }

    /// Panel geometry
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Glyph resolver used by text drawing
    pub fn font_mode(&self) -> FontMode {
        self.font_mode
    }

    /// Change the glyph resolver used by text drawing
    pub fn set_font_mode(&mut self, font_mode: FontMode) {
        self.font_mode = font_mode;
    }

    /// Image bytes, exactly `dimensions().buffer_size()` long
    pub fn as_bytes(&self) -> &[u8] {
        let len = self.dimensions.buffer_size();
        &self.buffer.as_ref()[..len]
    }

    /// Mutable image bytes, exactly `dimensions().buffer_size()` long
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let len = self.dimensions.buffer_size();
        &mut self.buffer.as_mut()[..len]
    }

    /// Release the underlying storage
    pub fn into_inner(self) -> B {
        self.buffer
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.fill(false);
    }

    /// Turn every pixel on or off
    pub fn fill(&mut self, on: bool) {
        let value = if on { 0xFF } else { 0x00 };
        self.as_bytes_mut().fill(value);
    }

    /// Copy a page-format image into the buffer
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::BufferTooSmall` if `image` is shorter than the
    /// panel's buffer size. Extra bytes are ignored.
    pub fn load_bitmap(&mut self, image: &[u8]) -> Result<(), BuilderError> {
        let required = self.dimensions.buffer_size();
        let source = image.get(..required).ok_or(BuilderError::BufferTooSmall {
            required,
            provided: image.len(),
        })?;
        self.as_bytes_mut().copy_from_slice(source);
        Ok(())
    }

    /// Byte offset and bit mask of a pixel, `None` when off the panel
    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        let width = i32::from(self.dimensions.width);
        let height = i32::from(self.dimensions.height);
        if x < 0 || y < 0 || x >= width || y >= height {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        let page_height = PAGE_HEIGHT as usize;
        let index = (y / page_height) * width as usize + x;
        Some((index, 1 << (y % page_height)))
    }

    /// Set or clear one pixel, leaving the other bits of its byte untouched
    ///
    /// Pixels outside the panel are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        let Some((index, mask)) = self.locate(x, y) else {
            return;
        };
        let bytes = self.as_bytes_mut();
        if on {
            bytes[index] |= mask;
        } else {
            bytes[index] &= !mask;
        }
    }

    /// State of one pixel; pixels outside the panel read as off
    pub fn get_pixel(&self, x: i32, y: i32) -> bool {
        self.locate(x, y)
            .is_some_and(|(index, mask)| self.as_bytes()[index] & mask != 0)
    }

    /// Draw a line with Bresenham's algorithm
    ///
    /// Both end points are plotted. A step may move along x and y at once.
    /// The segment is first clipped to the panel, so end points anywhere in
    /// the `i32` range are accepted; lines entirely off the panel draw nothing.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, on: bool) {
        let max_x = i64::from(self.dimensions.width) - 1;
        let max_y = i64::from(self.dimensions.height) - 1;
        let Some((x0, y0, x1, y1)) = clip_segment(
            (i64::from(x0), i64::from(y0)),
            (i64::from(x1), i64::from(y1)),
            max_x,
            max_y,
        ) else {
            return;
        };

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.set_pixel(x, y, on);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

/// Parameter `t = num / den` along a segment, `den > 0`
#[derive(Clone, Copy)]
struct Ratio {
    num: i128,
    den: i128,
}

impl Ratio {
    fn new(num: i64, den: i64) -> Self {
        if den < 0 {
            Self {
                num: -i128::from(num),
                den: -i128::from(den),
            }
        } else {
            Self {
                num: i128::from(num),
                den: i128::from(den),
            }
        }
    }

    fn less_than(self, other: Self) -> bool {
        self.num * other.den < other.num * self.den
    }

    /// `start + delta * t`, rounded to the nearest integer
    fn lerp(self, start: i64, delta: i64) -> i64 {
        let scaled = 2 * i128::from(delta) * self.num + self.den;
        let offset = scaled.div_euclid(2 * self.den);
        start + offset as i64
    }
}

/// Clip a segment to `[0, max_x] x [0, max_y]` (Liang-Barsky)
///
/// Returns the clipped end points, which always lie on the panel and fit in
/// `i32`, or `None` when the segment misses the panel.
fn clip_segment(
    (x0, y0): (i64, i64),
    (x1, y1): (i64, i64),
    max_x: i64,
    max_y: i64,
) -> Option<(i32, i32, i32, i32)> {
    let (dx, dy) = (x1 - x0, y1 - y0);
    let mut enter = Ratio::new(0, 1);
    let mut leave = Ratio::new(1, 1);

    for (p, q) in [(-dx, x0), (dx, max_x - x0), (-dy, y0), (dy, max_y - y0)] {
        if p == 0 {
            if q < 0 {
                return None;
            }
            continue;
        }
        let t = Ratio::new(q, p);
        if p < 0 {
            if leave.less_than(t) {
                return None;
            }
            if enter.less_than(t) {
                enter = t;
            }
        } else {
            if t.less_than(enter) {
                return None;
            }
            if t.less_than(leave) {
                leave = t;
            }
        }
    }

    let clipped = (
        enter.lerp(x0, dx),
        enter.lerp(y0, dy),
        leave.lerp(x0, dx),
        leave.lerp(y0, dy),
    );
    Some((
        i32::try_from(clipped.0).ok()?,
        i32::try_from(clipped.1).ok()?,
        i32::try_from(clipped.2).ok()?,
        i32::try_from(clipped.3).ok()?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_pixels<B: AsRef<[u8]> + AsMut<[u8]>>(fb: &Framebuffer<B>) -> u32 {
        fb.as_bytes().iter().map(|b| b.count_ones()).sum()
    }

    #[test]
    fn test_new_is_cleared() {
        let fb = Framebuffer::new(Dimensions::W128_H32);
        assert_eq!(fb.as_bytes().len(), 512);
        assert_eq!(lit_pixels(&fb), 0);
        assert_eq!(fb.font_mode(), FontMode::ExtendedLatin1);
    }

    #[test]
    fn test_set_pixel_addressing() {
        let mut fb = Framebuffer::new(Dimensions::W128_H64);
        fb.set_pixel(0, 0, true);
        fb.set_pixel(127, 63, true);
        fb.set_pixel(5, 9, true);
        assert_eq!(fb.as_bytes()[0], 0x01);
        assert_eq!(fb.as_bytes()[7 * 128 + 127], 0x80);
        assert_eq!(fb.as_bytes()[128 + 5], 0x02);
        assert_eq!(lit_pixels(&fb), 3);
    }

    #[test]
    fn test_set_pixel_merges_bits() {
        let mut fb = Framebuffer::new(Dimensions::W128_H64);
        fb.as_bytes_mut()[2] = 0b1010_0000;
        fb.set_pixel(2, 0, true);
        assert_eq!(fb.as_bytes()[2], 0b1010_0001);
        fb.set_pixel(2, 7, false);
        assert_eq!(fb.as_bytes()[2], 0b0010_0001);
    }

    #[test]
    fn test_set_pixel_round_trip_restores_byte() {
        let mut fb = Framebuffer::new(Dimensions::W128_H32);
        for (i, byte) in fb.as_bytes_mut().iter_mut().enumerate() {
            *byte = (i as u8).wrapping_mul(37);
        }
        let original = fb.clone();
        for y in 0..32 {
            for x in 0..128 {
                let before = fb.as_bytes()[(y as usize / 8) * 128 + x as usize];
                if before & (1 << (y % 8)) == 0 {
                    fb.set_pixel(x, y, true);
                    fb.set_pixel(x, y, false);
                } else {
                    fb.set_pixel(x, y, false);
                    fb.set_pixel(x, y, true);
                }
            }
        }
        assert_eq!(fb.as_bytes(), original.as_bytes());
    }

    #[test]
    fn test_out_of_range_pixels_are_clipped() {
        let mut fb = Framebuffer::new(Dimensions::W128_H32);
        fb.set_pixel(-1, 0, true);
        fb.set_pixel(0, -1, true);
        fb.set_pixel(128, 0, true);
        fb.set_pixel(0, 32, true);
        assert_eq!(lit_pixels(&fb), 0);
        assert!(!fb.get_pixel(0, 32));
    }

    #[test]
    fn test_get_pixel() {
        let mut fb = Framebuffer::new(Dimensions::W128_H64);
        fb.set_pixel(40, 20, true);
        assert!(fb.get_pixel(40, 20));
        assert!(!fb.get_pixel(40, 21));
    }

    #[test]
    fn test_line_single_point() {
        let mut fb = Framebuffer::new(Dimensions::W128_H64);
        fb.draw_line(0, 0, 0, 0, true);
        assert_eq!(lit_pixels(&fb), 1);
        assert!(fb.get_pixel(0, 0));
    }

    #[test]
    fn test_line_diagonal() {
        let mut fb = Framebuffer::new(Dimensions::W128_H64);
        fb.draw_line(0, 0, 7, 7, true);
        assert_eq!(lit_pixels(&fb), 8);
        for i in 0..8 {
            assert!(fb.get_pixel(i, i));
            assert_eq!(fb.as_bytes()[i as usize], 1 << i);
        }
    }

    #[test]
    fn test_line_horizontal_and_vertical() {
        let mut fb = Framebuffer::new(Dimensions::W128_H64);
        fb.draw_line(10, 5, 0, 5, true);
        assert_eq!(lit_pixels(&fb), 11);
        fb.clear();
        fb.draw_line(3, 0, 3, 63, true);
        assert_eq!(lit_pixels(&fb), 64);
        for page in 0..8 {
            assert_eq!(fb.as_bytes()[page * 128 + 3], 0xFF);
        }
    }

    #[test]
    fn test_line_shallow_slope() {
        let mut fb = Framebuffer::new(Dimensions::W128_H64);
        fb.draw_line(0, 0, 4, 2, true);
        assert_eq!(lit_pixels(&fb), 5);
        assert!(fb.get_pixel(0, 0));
        assert!(fb.get_pixel(4, 2));
        for x in 0..5 {
            assert_eq!((0..3).filter(|&y| fb.get_pixel(x, y)).count(), 1);
        }
    }

    #[test]
    fn test_line_clips_off_panel_points() {
        let mut fb = Framebuffer::new(Dimensions::W128_H32);
        fb.draw_line(-4, 0, 3, 0, true);
        assert_eq!(lit_pixels(&fb), 4);
        fb.draw_line(0, 0, 0, -1, false);
        assert!(!fb.get_pixel(0, 0));
    }

    #[test]
    fn test_line_extreme_coordinates() {
        let mut fb = Framebuffer::new(Dimensions::W128_H64);
        fb.draw_line(i32::MIN, 0, i32::MAX, 0, true);
        assert_eq!(lit_pixels(&fb), 128);
        assert_eq!(fb.as_bytes()[..128], [0x01; 128]);

        fb.clear();
        fb.draw_line(0, 0, 1_200_000_000, 0, true);
        assert_eq!(lit_pixels(&fb), 128);

        fb.clear();
        fb.draw_line(5, i32::MAX, 5, i32::MIN, true);
        assert_eq!(lit_pixels(&fb), 64);
        assert!((0..64).all(|y| fb.get_pixel(5, y)));

        fb.clear();
        fb.draw_line(i32::MIN, i32::MIN, i32::MAX, i32::MAX, true);
        assert!(fb.get_pixel(0, 0));
        assert!(fb.get_pixel(63, 63));
        assert_eq!(lit_pixels(&fb), 64);
    }

    #[test]
    fn test_line_entirely_off_panel() {
        let mut fb = Framebuffer::new(Dimensions::W128_H32);
        fb.draw_line(-10, -5, -1, -1, true);
        fb.draw_line(128, 0, i32::MAX, 31, true);
        fb.draw_line(i32::MIN, 40, i32::MAX, 40, true);
        assert_eq!(lit_pixels(&fb), 0);
    }

    #[test]
    fn test_line_clipped_keeps_slope() {
        let mut fb = Framebuffer::new(Dimensions::W128_H64);
        fb.draw_line(-10, -10, 10, 10, true);
        assert_eq!(lit_pixels(&fb), 11);
        assert!((0..=10).all(|i| fb.get_pixel(i, i)));
    }

    #[test]
    fn test_line_erases() {
        let mut fb = Framebuffer::new(Dimensions::W128_H64);
        fb.fill(true);
        fb.draw_line(0, 0, 7, 7, false);
        assert_eq!(lit_pixels(&fb), 128 * 64 - 8);
    }

    #[test]
    fn test_with_buffer_checks_size() {
        let result = Framebuffer::with_buffer(Dimensions::W128_H64, [0u8; 512]);
        assert!(matches!(
            result,
            Err(BuilderError::BufferTooSmall {
                required: 1024,
                provided: 512
            })
        ));
        let fb = Framebuffer::with_buffer(Dimensions::W128_H32, [0u8; 512]).unwrap();
        assert_eq!(fb.as_bytes().len(), 512);
    }

    #[test]
    fn test_as_bytes_limited_to_panel() {
        let mut fb = Framebuffer::new(Dimensions::W128_H32);
        fb.fill(true);
        assert_eq!(fb.as_bytes().len(), 512);
        let storage = fb.into_inner();
        assert!(storage[..512].iter().all(|b| *b == 0xFF));
        assert!(storage[512..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_load_bitmap() {
        let mut fb = Framebuffer::new(Dimensions::W128_H32);
        let image = [0xA5u8; 600];
        fb.load_bitmap(&image).unwrap();
        assert!(fb.as_bytes().iter().all(|b| *b == 0xA5));
        assert!(matches!(
            fb.load_bitmap(&image[..100]),
            Err(BuilderError::BufferTooSmall {
                required: 512,
                provided: 100
            })
        ));
    }
}
