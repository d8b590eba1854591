//! SSD1306 OLED Display Driver
//!
//! A driver for the SSD1306 monochrome OLED controller over I2C, for 128x64 and
//! 128x32 modules (any page-aligned geometry up to 128x64 is accepted).
//!
//! ## Features
//!
//! - `no_std` compatible, no allocation
//! - `embedded-hal` v1.0 support
//! - Page-format framebuffer with pixel and Bresenham line primitives
//! - 8x8 text with two glyph sets: upper-case ASCII, or Latin-1 with
//!   Portuguese accented letters
//! - UTF-8 text with automatic line wrap
//! - Partial transfers through column/page render areas
//! - `embedded-graphics` integration (with `graphics` feature)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};
//! use ssd1306_oled::{Builder, Dimensions, Display, FontMode, I2cInterface};
//!
//! # struct MockI2c;
//! # impl ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c<SevenBitAddress> for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # let i2c = MockI2c;
//! let config = match Builder::new()
//!     .dimensions(Dimensions::W128_H64)
//!     .font_mode(FontMode::ExtendedLatin1)
//!     .build()
//! {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let interface = I2cInterface::new(i2c, config.address);
//!
//! let mut display = Display::new(interface, config);
//! if display.init().is_err() {
//!     return;
//! }
//!
//! let mut fb = display.framebuffer();
//! fb.draw_text(0, 0, "Distância:");
//! fb.draw_string(0, 16, "42 CM");
//! fb.draw_line(0, 30, 127, 30, true);
//! let _ = display.flush(&fb);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// SSD1306 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// 8x8 glyph table and glyph resolvers
pub mod font;
/// Page-format framebuffer and pixel primitives
pub mod framebuffer;
/// Hardware interface abstraction
pub mod interface;
/// Column/page windows targeted by a transfer
pub mod render_area;
/// Text rendering on the framebuffer
pub mod text;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use config::{
    ALTERNATE_ADDRESS, Builder, Config, DEFAULT_ADDRESS, Dimensions,
    MAX_BUFFER_LEN, MAX_HEIGHT, MAX_WIDTH,
};
pub use display::{Display, init_sequence};
pub use error::{BuilderError, Error};
pub use font::{BasicAscii, ExtendedLatin1, FontMode, GlyphResolver};
pub use framebuffer::Framebuffer;
pub use interface::InterfaceError;
pub use interface::{DisplayInterface, I2cInterface};
pub use render_area::RenderArea;
pub use text::Latin1Decoder;
