//! Core display operations

use log::{debug, warn};

use crate::command::{
    HORIZONTAL_ADDRESSING, SET_CHARGE_PUMP, SET_COLUMN_ADDRESS, SET_COMMON_OUTPUT_DIRECTION,
    SET_COMMON_PIN_CONFIGURATION, SET_CONTRAST, SET_DISPLAY, SET_DISPLAY_CLOCK_DIVIDE_RATIO,
    SET_DISPLAY_OFFSET, SET_DISPLAY_ON, SET_DISPLAY_START_LINE, SET_ENTIRE_ON,
    SET_HORIZONTAL_SCROLL, SET_MEMORY_MODE, SET_MUX_RATIO, SET_NORMAL_DISPLAY, SET_PAGE_ADDRESS,
    SET_PRECHARGE, SET_SCROLL, SET_SEGMENT_REMAP, SET_VCOMH_DESELECT_LEVEL,
};
use crate::config::{Config, Dimensions};
use crate::error::Error;
use crate::framebuffer::Framebuffer;
use crate::interface::DisplayInterface;
use crate::render_area::RenderArea;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Number of command bytes sent by [`Display::init`]
pub const INIT_SEQUENCE_LEN: usize = 26;

/// Command bytes that bring the controller from reset to a running display
///
/// The geometry-dependent bytes (multiplex ratio, COM pins) and the
/// VCC-dependent bytes (pre-charge, charge pump) are taken from `config`.
///
/// ```
/// use ssd1306_oled::{display::init_sequence, Builder, Dimensions};
///
/// let config = match Builder::new().dimensions(Dimensions::W128_H32).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let sequence = init_sequence(&config);
/// assert_eq!(sequence[0], 0xAE);
/// assert_eq!(sequence[6], 31); // multiplex ratio
/// assert_eq!(sequence[11], 0x02); // COM pins, sequential
/// assert_eq!(sequence[25], 0xAF);
/// ```
pub fn init_sequence(config: &Config) -> [u8; INIT_SEQUENCE_LEN] {
    let dimensions = &config.dimensions;
    [
        SET_DISPLAY,
        SET_MEMORY_MODE,
        HORIZONTAL_ADDRESSING,
        SET_DISPLAY_START_LINE,
        SET_SEGMENT_REMAP | 0x01,
        SET_MUX_RATIO,
        dimensions.height.saturating_sub(1),
        SET_COMMON_OUTPUT_DIRECTION | 0x08,
        SET_DISPLAY_OFFSET,
        0x00,
        SET_COMMON_PIN_CONFIGURATION,
        dimensions.com_pin_configuration(),
        SET_DISPLAY_CLOCK_DIVIDE_RATIO,
        config.clock_divide,
        SET_PRECHARGE,
        config.precharge(),
        SET_VCOMH_DESELECT_LEVEL,
        config.vcomh_deselect,
        SET_CONTRAST,
        config.contrast,
        SET_ENTIRE_ON,
        SET_NORMAL_DISPLAY,
        SET_CHARGE_PUMP,
        config.charge_pump(),
        SET_SCROLL,
        SET_DISPLAY_ON,
    ]
}

/// Core display driver for SSD1306
///
/// Owns the transport and the configuration. Pixels are drawn into a
/// caller-owned [`Framebuffer`] and pushed with [`Display::flush`] or
/// [`Display::render`].
///
/// Every operation that talks to the panel, apart from [`Display::init`],
/// [`Display::send_command_list`] and [`Display::read_status`], returns
/// [`Error::NotInitialized`] until `init` has succeeded.
///
/// ## Example
///
/// ```rust,no_run
/// use ssd1306_oled::{Builder, Dimensions, Display, I2cInterface};
/// # use core::convert::Infallible;
/// # use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};
/// # struct MockI2c;
/// # impl ErrorType for MockI2c { type Error = Infallible; }
/// # impl I2c<SevenBitAddress> for MockI2c {
/// #     fn transaction(
/// #         &mut self,
/// #         _address: u8,
/// #         _operations: &mut [Operation<'_>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// # let config = match Builder::new().dimensions(Dimensions::W128_H64).build() {
/// #     Ok(config) => config,
/// #     Err(_) => return,
/// # };
/// let mut display = Display::new(I2cInterface::new(MockI2c, config.address), config);
/// let _ = display.init();
///
/// let mut fb = display.framebuffer();
/// fb.draw_line(0, 0, 127, 63, true);
/// let _ = display.flush(&fb);
///
/// let _ = display.show_message(&mut fb, "Olá, mundo!", 0);
/// ```
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Whether the last initialization sequence went through
    initialized: bool,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// Nothing is sent until [`Display::init`] is called.
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            initialized: false,
        }
    }

    /// Send the initialization sequence and switch the panel on
    ///
    /// # Errors
    ///
    /// Returns `Error::InitializationFailed` with the position of the first
    /// byte that could not be sent. The display then stays uninitialized.
    pub fn init(&mut self) -> DisplayResult<I> {
        self.initialized = false;
        let sequence = init_sequence(&self.config);
        for (command_index, &command) in sequence.iter().enumerate() {
            if let Err(error) = self.interface.send_command(command) {
                warn!(
                    "ssd1306: init command 0x{:02X} (byte {}) failed: {:?}",
                    command, command_index, error
                );
                return Err(Error::InitializationFailed {
                    command_index,
                    error,
                });
            }
        }
        self.initialized = true;
        debug!(
            "ssd1306: initialized {}x{} panel",
            self.config.dimensions.width, self.config.dimensions.height
        );
        Ok(())
    }

    /// Whether [`Display::init`] has succeeded
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Send raw command bytes, one transfer per byte
    pub fn send_command_list(&mut self, commands: &[u8]) -> DisplayResult<I> {
        self.interface
            .send_commands(commands)
            .map_err(Error::Interface)
    }

    /// Transfer `data` into the given column/page window
    ///
    /// Exactly `area.buffer_length()` bytes are sent; extra bytes are ignored.
    ///
    /// # Errors
    ///
    /// - `Error::NotInitialized` before a successful [`Display::init`]
    /// - `Error::InvalidRenderArea` if the area exceeds the panel
    /// - `Error::BufferTooSmall` if `data` is shorter than the area
    pub fn render(&mut self, area: &RenderArea, data: &[u8]) -> DisplayResult<I> {
        self.ensure_initialized()?;
        if !area.fits(&self.config.dimensions) {
            return Err(Error::InvalidRenderArea {
                start_column: area.start_column(),
                end_column: area.end_column(),
                start_page: area.start_page(),
                end_page: area.end_page(),
            });
        }
        let required = area.buffer_length();
        let payload = data.get(..required).ok_or(Error::BufferTooSmall {
            required,
            provided: data.len(),
        })?;

        debug!(
            "ssd1306: render columns {}..={} pages {}..={}",
            area.start_column(),
            area.end_column(),
            area.start_page(),
            area.end_page()
        );
        self.send_command_list(&[
            SET_COLUMN_ADDRESS,
            area.start_column(),
            area.end_column(),
            SET_PAGE_ADDRESS,
            area.start_page(),
            area.end_page(),
        ])?;
        self.interface.send_data(payload).map_err(Error::Interface)
    }

    /// Push the whole framebuffer to the panel
    pub fn flush<B>(&mut self, framebuffer: &Framebuffer<B>) -> DisplayResult<I>
    where
        B: AsRef<[u8]> + AsMut<[u8]>,
    {
        let area = RenderArea::full(&self.config.dimensions);
        self.render(&area, framebuffer.as_bytes())
    }

    /// Clear the framebuffer and the panel
    pub fn clear<B>(&mut self, framebuffer: &mut Framebuffer<B>) -> DisplayResult<I>
    where
        B: AsRef<[u8]> + AsMut<[u8]>,
    {
        self.ensure_initialized()?;
        framebuffer.clear();
        self.flush(framebuffer)
    }

    /// Replace the screen content with `text`, starting at row `y`
    ///
    /// The text is UTF-8 and wraps at the right edge. Glyphs are resolved
    /// with the configured [`FontMode`](crate::font::FontMode), which is
    /// also stored into `framebuffer`.
    pub fn show_message<B>(
        &mut self,
        framebuffer: &mut Framebuffer<B>,
        text: &str,
        y: i32,
    ) -> DisplayResult<I>
    where
        B: AsRef<[u8]> + AsMut<[u8]>,
    {
        self.ensure_initialized()?;
        framebuffer.set_font_mode(self.config.font_mode);
        framebuffer.clear();
        framebuffer.draw_text(0, y, text);
        debug!("ssd1306: message at row {}: {}", y, text);
        self.flush(framebuffer)
    }

    /// Load a full-screen page-format image and show it
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if `image` does not cover the panel.
    pub fn draw_bitmap<B>(
        &mut self,
        framebuffer: &mut Framebuffer<B>,
        image: &[u8],
    ) -> DisplayResult<I>
    where
        B: AsRef<[u8]> + AsMut<[u8]>,
    {
        self.ensure_initialized()?;
        framebuffer.load_bitmap(image)?;
        self.flush(framebuffer)
    }

    /// Start or stop continuous right scrolling of the whole panel
    pub fn set_scroll(&mut self, enabled: bool) -> DisplayResult<I> {
        self.ensure_initialized()?;
        let last_page = self.config.dimensions.pages().saturating_sub(1);
        debug!("ssd1306: scroll {}", if enabled { "on" } else { "off" });
        self.send_command_list(&[
            SET_HORIZONTAL_SCROLL,
            0x00, // dummy
            0x00, // start page
            0x00, // interval: 5 frames
            last_page,
            0x00, // dummy
            0xFF, // dummy
            SET_SCROLL | u8::from(enabled),
        ])
    }

    /// Change the contrast
    pub fn set_contrast(&mut self, contrast: u8) -> DisplayResult<I> {
        self.ensure_initialized()?;
        self.send_command_list(&[SET_CONTRAST, contrast])?;
        self.config.contrast = contrast;
        Ok(())
    }

    /// Switch the panel on (wake) or off (sleep)
    pub fn set_display_on(&mut self, on: bool) -> DisplayResult<I> {
        self.ensure_initialized()?;
        self.send_command_list(&[SET_DISPLAY | u8::from(on)])
    }

    /// Invert all pixels on the panel without touching its RAM
    pub fn set_inverted(&mut self, inverted: bool) -> DisplayResult<I> {
        self.ensure_initialized()?;
        self.send_command_list(&[SET_NORMAL_DISPLAY | u8::from(inverted)])
    }

    /// Read the controller status byte
    pub fn read_status(&mut self) -> Result<u8, Error<I>> {
        let mut status = [0u8; 1];
        self.interface
            .read(&mut status)
            .map_err(Error::Interface)?;
        Ok(status[0])
    }

    /// Cleared framebuffer sized for this panel, using the configured font mode
    pub fn framebuffer(&self) -> Framebuffer {
        Framebuffer::new(self.config.dimensions).with_font_mode(self.config.font_mode)
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Release the interface
    pub fn release(self) -> I {
        self.interface
    }

    fn ensure_initialized(&self) -> DisplayResult<I> {
        if self.initialized {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }
}
