//! SSD1306 command definitions
//!
//! This module defines the command bytes used to control the SSD1306 OLED
//! controller, plus the I2C control bytes that frame every transfer.
//!
//! ## Transfer Framing
//!
//! Over I2C every write starts with a control byte:
//! 1. [`CONTROL_COMMAND`] (0x80) followed by exactly one command byte
//! 2. [`CONTROL_DATA`] (0x40) followed by any number of GDDRAM data bytes
//!
//! Command arguments are themselves sent as single command bytes, so a
//! two-byte command such as "set contrast" is two command transfers.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1306_oled::{command, DisplayInterface, I2cInterface};
//! # use core::convert::Infallible;
//! # use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};
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
//! # let mut interface = I2cInterface::new(MockI2c, 0x3C);
//! # let page_data = [0xFFu8; 128];
//! // Set contrast to maximum
//! let _ = interface.send_commands(&[command::SET_CONTRAST, 0xFF]);
//!
//! // Write one page of pixels
//! let _ = interface.send_data(&page_data);
//! ```

// Transfer control bytes

/// Control byte announcing a single command byte (0x80)
pub const CONTROL_COMMAND: u8 = 0x80;

/// Control byte announcing a GDDRAM data stream (0x40)
pub const CONTROL_DATA: u8 = 0x40;

// Fundamental commands

/// Set contrast control command (0x81)
///
/// Requires 1 byte: contrast 0x00..=0xFF (0xFF = maximum).
pub const SET_CONTRAST: u8 = 0x81;

/// Resume display from GDDRAM content (0xA4)
pub const SET_ENTIRE_ON: u8 = 0xA4;

/// Force every pixel on regardless of GDDRAM content (0xA5)
pub const SET_ALL_ON: u8 = 0xA5;

/// Normal display, bit 1 = pixel on (0xA6)
pub const SET_NORMAL_DISPLAY: u8 = 0xA6;

/// Inverse display, bit 0 = pixel on (0xA7)
pub const SET_INVERSE_DISPLAY: u8 = 0xA7;

/// Display off / sleep (0xAE)
///
/// OR with 0x01 to get display on ([`SET_DISPLAY_ON`]).
pub const SET_DISPLAY: u8 = 0xAE;

/// Display on (0xAF)
pub const SET_DISPLAY_ON: u8 = SET_DISPLAY | 0x01;

// Scrolling commands

/// Continuous horizontal scroll setup, right direction (0x26)
///
/// Requires 6 bytes: dummy 0x00, start page, interval, end page,
/// dummy 0x00, dummy 0xFF.
pub const SET_HORIZONTAL_SCROLL: u8 = 0x26;

/// Deactivate scroll (0x2E)
///
/// OR with 0x01 to activate scroll (0x2F).
pub const SET_SCROLL: u8 = 0x2E;

// Addressing commands

/// Set memory addressing mode (0x20)
///
/// Requires 1 byte: 0x00 horizontal, 0x01 vertical, 0x02 page.
pub const SET_MEMORY_MODE: u8 = 0x20;

/// Horizontal addressing: the column pointer wraps to the next page
///
/// The only mode matching the [`Framebuffer`](crate::framebuffer::Framebuffer)
/// byte order and the column/page windows used by rendering.
pub const HORIZONTAL_ADDRESSING: u8 = 0x00;

/// Set column address window (0x21)
///
/// Requires 2 bytes: [start column, end column] (inclusive).
pub const SET_COLUMN_ADDRESS: u8 = 0x21;

/// Set page address window (0x22)
///
/// Requires 2 bytes: [start page, end page] (inclusive).
pub const SET_PAGE_ADDRESS: u8 = 0x22;

// Hardware configuration commands

/// Set display start line (0x40)
///
/// The start line (0..=63) is OR-ed into the low 6 bits.
pub const SET_DISPLAY_START_LINE: u8 = 0x40;

/// Set segment re-map (0xA0)
///
/// OR with 0x01 to map column address 127 to SEG0.
pub const SET_SEGMENT_REMAP: u8 = 0xA0;

/// Set multiplex ratio (0xA8)
///
/// Requires 1 byte: number of rows - 1.
pub const SET_MUX_RATIO: u8 = 0xA8;

/// Set COM output scan direction (0xC0)
///
/// OR with 0x08 to scan from COM[N-1] to COM0.
pub const SET_COMMON_OUTPUT_DIRECTION: u8 = 0xC0;

/// Set vertical display offset (0xD3)
///
/// Requires 1 byte.
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// Set COM pins hardware configuration (0xDA)
///
/// Requires 1 byte: 0x02 for 128x32 panels, 0x12 for 128x64 panels.
pub const SET_COMMON_PIN_CONFIGURATION: u8 = 0xDA;

// Timing and driving commands

/// Set display clock divide ratio / oscillator frequency (0xD5)
///
/// Requires 1 byte (0x80 = reset value).
pub const SET_DISPLAY_CLOCK_DIVIDE_RATIO: u8 = 0xD5;

/// Set pre-charge period (0xD9)
///
/// Requires 1 byte.
pub const SET_PRECHARGE: u8 = 0xD9;

/// Set VCOMH deselect level (0xDB)
///
/// Requires 1 byte.
pub const SET_VCOMH_DESELECT_LEVEL: u8 = 0xDB;

/// Charge pump setting (0x8D)
///
/// Requires 1 byte: 0x14 = enable (internal VCC), 0x10 = disable.
pub const SET_CHARGE_PUMP: u8 = 0x8D;
