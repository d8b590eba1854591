//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_HEIGHT, MAX_WIDTH};
use crate::font::FontMode;

/// Default 7-bit I2C address of SSD1306 modules (SA0 low)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Alternate 7-bit I2C address of SSD1306 modules (SA0 high)
pub const ALTERNATE_ADDRESS: u8 = 0x3D;

/// Height of one display page in pixels
pub const PAGE_HEIGHT: u8 = 8;

/// Framebuffer size in bytes for the largest supported panel (128x64)
pub const MAX_BUFFER_LEN: usize = MAX_WIDTH as usize * (MAX_HEIGHT as usize / PAGE_HEIGHT as usize);

/// Panel geometry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels (columns, corresponds to segment outputs)
    pub width: u8,
    /// Height in pixels (rows, corresponds to common outputs)
    pub height: u8,
}

impl Dimensions {
    /// 128x64 panel
    pub const W128_H64: Self = Self {
        width: 128,
        height: 64,
    };

    /// 128x32 panel
    pub const W128_H32: Self = Self {
        width: 128,
        height: 32,
    };

    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width == 0 or width > MAX_WIDTH
    /// - height == 0 or height > MAX_HEIGHT
    /// - height % 8 != 0 (must be page-aligned)
    pub fn new(width: u8, height: u8) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_WIDTH {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        if height == 0 || height > MAX_HEIGHT || !height.is_multiple_of(PAGE_HEIGHT) {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of 8-pixel pages
    pub fn pages(&self) -> u8 {
        self.height / PAGE_HEIGHT
    }

    /// Calculate required buffer size in bytes
    pub fn buffer_size(&self) -> usize {
        self.width as usize * self.pages() as usize
    }

    /// COM pins hardware configuration byte for this geometry
    ///
    /// 128x64 panels use the alternative COM pin layout (0x12); 128x32 and
    /// everything else use the sequential layout (0x02).
    pub fn com_pin_configuration(&self) -> u8 {
        match (self.width, self.height) {
            (128, 64) => 0x12,
            _ => 0x02,
        }
    }
}

/// Display configuration
///
/// Holds the panel geometry, bus address and the values sent by the
/// initialization sequence. Use [`Builder`] to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Panel dimensions
    pub dimensions: Dimensions,
    /// 7-bit I2C address
    pub address: u8,
    /// Glyph resolver used for text rendering
    pub font_mode: FontMode,
    /// Contrast (0xFF = maximum)
    pub contrast: u8,
    /// Whether VCC is supplied externally (charge pump off)
    pub external_vcc: bool,
    /// Display clock divide ratio / oscillator frequency
    pub clock_divide: u8,
    /// VCOMH deselect level
    pub vcomh_deselect: u8,
}

impl Config {
    /// Pre-charge period byte, depending on the VCC source
    pub fn precharge(&self) -> u8 {
        if self.external_vcc { 0x22 } else { 0xF1 }
    }

    /// Charge pump byte, depending on the VCC source
    pub fn charge_pump(&self) -> u8 {
        if self.external_vcc { 0x10 } else { 0x14 }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use ssd1306_oled::{Builder, Dimensions, FontMode};
///
/// let dims = match Dimensions::new(128, 64) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new()
///     .dimensions(dims)
///     .font_mode(FontMode::BasicAscii)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Panel dimensions (required)
    dimensions: Option<Dimensions>,
    /// 7-bit I2C address
    address: u8,
    /// Glyph resolver used for text rendering
    font_mode: FontMode,
    /// Contrast
    contrast: u8,
    /// Whether VCC is supplied externally
    external_vcc: bool,
    /// Display clock divide ratio
    clock_divide: u8,
    /// VCOMH deselect level
    vcomh_deselect: u8,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            address: DEFAULT_ADDRESS,
            font_mode: FontMode::ExtendedLatin1,
            // Maximum contrast
            contrast: 0xFF,
            // Most breakout boards generate VCC with the internal charge pump
            external_vcc: false,
            // Reset value: divide ratio 1, default oscillator frequency
            clock_divide: 0x80,
            vcomh_deselect: 0x30,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set panel dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set the 7-bit I2C address
    pub fn address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Set the glyph resolver used for text
    pub fn font_mode(mut self, font_mode: FontMode) -> Self {
        self.font_mode = font_mode;
        self
    }

    /// Set the contrast
    pub fn contrast(mut self, value: u8) -> Self {
        self.contrast = value;
        self
    }

    /// Set whether VCC is supplied externally
    pub fn external_vcc(mut self, value: bool) -> Self {
        self.external_vcc = value;
        self
    }

    /// Set the display clock divide ratio / oscillator frequency byte
    pub fn clock_divide(mut self, value: u8) -> Self {
        self.clock_divide = value;
        self
    }

    /// Set the VCOMH deselect level
    pub fn vcomh_deselect(mut self, value: u8) -> Self {
        self.vcomh_deselect = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set
    pub fn build(self) -> Result<Config, BuilderError> {
        Ok(Config {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            address: self.address,
            font_mode: self.font_mode,
            contrast: self.contrast,
            external_vcc: self.external_vcc,
            clock_divide: self.clock_divide,
            vcomh_deselect: self.vcomh_deselect,
        })
    }
}
