//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors while constructing configuration, render areas or framebuffers
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level I2C communication errors
//!
//! Unsupported characters and malformed UTF-8 are never errors: they render as
//! the blank glyph or are skipped.
//!
//! ## Example
//!
//! ```
//! use ssd1306_oled::{Builder, BuilderError, Dimensions};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Invalid dimensions
//! let result = Dimensions::new(128, 60); // Height not a multiple of 8
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Maximum number of columns (segment outputs) driven by the SSD1306
pub const MAX_WIDTH: u8 = 128;

/// Maximum number of rows (common outputs) driven by the SSD1306
pub const MAX_HEIGHT: u8 = 64;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (I2C)
    ///
    /// Wraps the underlying transport error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// A command of the initialization sequence failed to transmit
    ///
    /// The controller is left half-configured and must not be used until
    /// [`Display::init`](crate::display::Display::init) succeeds.
    InitializationFailed {
        /// Position of the failing byte in the initialization sequence
        command_index: usize,
        /// Underlying transport error
        error: I::Error,
    },
    /// A rendering operation was attempted before a successful initialization
    NotInitialized,
    /// Buffer is too small for the requested transfer
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
    /// Render area does not fit the panel
    InvalidRenderArea {
        /// First column
        start_column: u8,
        /// Last column (inclusive)
        end_column: u8,
        /// First page
        start_page: u8,
        /// Last page (inclusive)
        end_page: u8,
    },
    /// Rejected geometry passed to a display operation
    Configuration(BuilderError),
}

impl<I: DisplayInterface> From<BuilderError> for Error<I> {
    fn from(error: BuilderError) -> Self {
        match error {
            BuilderError::BufferTooSmall { required, provided } => {
                Self::BufferTooSmall { required, provided }
            }
            BuilderError::InvalidRenderArea {
                start_column,
                end_column,
                start_page,
                end_page,
            } => Self::InvalidRenderArea {
                start_column,
                end_column,
                start_page,
                end_page,
            },
            other => Self::Configuration(other),
        }
    }
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::InitializationFailed { command_index, .. } => {
                write!(
                    f,
                    "Initialization failed at command byte {command_index}"
                )
            }
            Self::NotInitialized => write!(f, "Display not initialized"),
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} bytes, provided {provided}"
                )
            }
            Self::InvalidRenderArea {
                start_column,
                end_column,
                start_page,
                end_page,
            } => write!(
                f,
                "Invalid render area: columns {start_column}..={end_column}, pages {start_page}..={end_page}"
            ),
            Self::Configuration(error) => write!(f, "Configuration error: {error}"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration, render areas or framebuffers
///
/// These errors occur before any bus traffic happens.
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width in pixels requested
        width: u8,
        /// Height in pixels requested
        height: u8,
    },
    /// Render area bounds are inverted (start after end)
    InvalidRenderArea {
        /// First column
        start_column: u8,
        /// Last column (inclusive)
        end_column: u8,
        /// First page
        start_page: u8,
        /// Last page (inclusive)
        end_page: u8,
    },
    /// Framebuffer storage is smaller than the panel needs
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max {MAX_WIDTH}x{MAX_HEIGHT}, height must be multiple of 8)"
            ),
            Self::InvalidRenderArea {
                start_column,
                end_column,
                start_page,
                end_page,
            } => write!(
                f,
                "Invalid render area: columns {start_column}..={end_column}, pages {start_page}..={end_page}"
            ),
            Self::BufferTooSmall { required, provided } => write!(
                f,
                "Framebuffer too small: required {required} bytes, provided {provided}"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    struct NullInterface;

    impl DisplayInterface for NullInterface {
        type Error = ();

        fn send_command(&mut self, _command: u8) -> Result<(), Self::Error> {
            Ok(())
        }

        fn send_data(&mut self, _data: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn read(&mut self, _buffer: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn test_builder_error_keeps_sizes() {
        let error: Error<NullInterface> = BuilderError::BufferTooSmall {
            required: 1024,
            provided: 10,
        }
        .into();
        assert!(matches!(
            error,
            Error::BufferTooSmall {
                required: 1024,
                provided: 10
            }
        ));
    }

    #[test]
    fn test_builder_error_keeps_area() {
        let error: Error<NullInterface> = BuilderError::InvalidRenderArea {
            start_column: 9,
            end_column: 3,
            start_page: 0,
            end_page: 1,
        }
        .into();
        assert_eq!(
            format!("{error}"),
            "Invalid render area: columns 9..=3, pages 0..=1"
        );
    }

    #[test]
    fn test_other_builder_errors_are_wrapped() {
        let error: Error<NullInterface> = BuilderError::MissingDimensions.into();
        assert!(matches!(
            error,
            Error::Configuration(BuilderError::MissingDimensions)
        ));
        assert_eq!(
            format!("{error}"),
            "Configuration error: Dimensions must be specified"
        );
    }
}
