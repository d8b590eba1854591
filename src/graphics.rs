//! Graphics support via embedded-graphics
//!
//! [`Framebuffer`] implements the
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) trait with
//! [`BinaryColor`] pixels, so any embedded-graphics primitive, font or image
//! can be drawn into it next to the built-in 8x8 text. Pixels outside the
//! panel are clipped.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     pixelcolor::BinaryColor,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! use ssd1306_oled::{Dimensions, Framebuffer};
//!
//! let mut fb = Framebuffer::new(Dimensions::W128_H64);
//!
//! let _ = Rectangle::new(Point::new(0, 0), Size::new(128, 16))
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
//!     .draw(&mut fb);
//!
//! let _ = Circle::new(Point::new(96, 24), 32)
//!     .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
//!     .draw(&mut fb);
//!
//! let _ = Text::new("12 cm", Point::new(4, 40), MonoTextStyle::new(&FONT_6X10, BinaryColor::On))
//!     .draw(&mut fb);
//!
//! // then: display.flush(&fb)
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
    prelude::Pixel,
};

use crate::framebuffer::Framebuffer;

impl<B> DrawTarget for Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.set_pixel(x, y, color.is_on());
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.is_on());
        Ok(())
    }
}

impl<B> OriginDimensions for Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        let dimensions = self.dimensions();
        Size::new(u32::from(dimensions.width), u32::from(dimensions.height))
    }
}
