//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the
//! [`I2cInterface`] struct for communicating with the SSD1306 controller over
//! I2C.
//!
//! ## Framing
//!
//! Every I2C write starts with a control byte:
//! - a command write is exactly 2 bytes: [`CONTROL_COMMAND`], command
//! - a data write is [`CONTROL_DATA`] followed by up to 1024 GDDRAM bytes
//!
//! Both frames are assembled in fixed buffers owned by the interface, so no
//! transfer allocates.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1306_oled::{DisplayInterface, I2cInterface};
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
//! let mut interface = I2cInterface::new(MockI2c, 0x3C);
//!
//! // Display off, then on
//! let _ = interface.send_commands(&[0xAE, 0xAF]);
//!
//! // Write pixels at the current RAM pointer
//! let _ = interface.send_data(&[0xFF, 0x00, 0xFF]);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::command::{CONTROL_COMMAND, CONTROL_DATA};
use crate::config::MAX_BUFFER_LEN;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the transport to the SSD1306 controller
///
/// This trait abstracts over different hardware implementations, allowing
/// the [`Display`](crate::display::Display) to work with any bus that can
/// deliver command and data bytes.
///
/// ## Implementing
///
/// For I2C modules use the provided [`I2cInterface`]. Other wirings (SPI with
/// a D/C pin, a bus shared behind a mutex) can implement this trait directly.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send one command byte (or one command argument byte)
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transfer fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send command bytes one by one, in order
    ///
    /// Stops at the first failing byte.
    ///
    /// # Errors
    ///
    /// Returns an error if any bus transfer fails.
    fn send_commands(&mut self, commands: &[u8]) -> InterfaceResult<(), Self::Error> {
        for &command in commands {
            self.send_command(command)?;
        }
        Ok(())
    }

    /// Send GDDRAM data bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transfer fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Read bytes from the controller
    ///
    /// The SSD1306 answers with its status byte.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transfer fails.
    fn read(&mut self, buffer: &mut [u8]) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
#[derive(Debug)]
pub enum InterfaceError<E> {
    /// I2C transfer error (NACK, arbitration loss, bus fault)
    I2c(E),
}

impl<E: Debug> core::fmt::Display for InterfaceError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::I2c(e) => write!(f, "I2C error: {e:?}"),
        }
    }
}

impl<E: Debug> core::error::Error for InterfaceError<E> {}

/// I2C implementation of [`DisplayInterface`]
///
/// ## Type Parameters
///
/// * `I2C` - bus implementing embedded-hal's [`I2c`]
///
/// ## Example
///
/// ```rust,no_run
/// use ssd1306_oled::{Builder, Dimensions, Display, I2cInterface, DEFAULT_ADDRESS};
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
/// let interface = I2cInterface::new(MockI2c, DEFAULT_ADDRESS);
///
/// # let config = match Builder::new().dimensions(Dimensions::W128_H32).build() {
/// #     Ok(config) => config,
/// #     Err(_) => return,
/// # };
/// let _display = Display::new(interface, config);
/// ```
pub struct I2cInterface<I2C> {
    /// I2C bus
    i2c: I2C,
    /// 7-bit device address
    address: SevenBitAddress,
    /// Command frame, byte 0 is the command control byte
    port_buffer: [u8; 2],
    /// Data frame, byte 0 is the data control byte
    ram_buffer: [u8; MAX_BUFFER_LEN + 1],
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c<SevenBitAddress>,
{
    /// Create a new interface for the device at `address`
    pub fn new(i2c: I2C, address: SevenBitAddress) -> Self {
        let mut ram_buffer = [0; MAX_BUFFER_LEN + 1];
        ram_buffer[0] = CONTROL_DATA;
        Self {
            i2c,
            address,
            port_buffer: [CONTROL_COMMAND, 0],
            ram_buffer,
        }
    }

    /// 7-bit device address
    pub fn address(&self) -> SevenBitAddress {
        self.address
    }

    /// Release the I2C bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> DisplayInterface for I2cInterface<I2C>
where
    I2C: I2c<SevenBitAddress>,
{
    type Error = InterfaceError<I2C::Error>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.port_buffer[1] = command;
        log::trace!("i2c 0x{:02X}: command 0x{:02X}", self.address, command);
        self.i2c
            .write(self.address, &self.port_buffer)
            .map_err(InterfaceError::I2c)
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        for chunk in data.chunks(MAX_BUFFER_LEN) {
            let frame_len = chunk.len() + 1;
            self.ram_buffer[1..frame_len].copy_from_slice(chunk);
            log::trace!("i2c 0x{:02X}: {} data bytes", self.address, chunk.len());
            self.i2c
                .write(self.address, &self.ram_buffer[..frame_len])
                .map_err(InterfaceError::I2c)?;
        }
        Ok(())
    }

    fn read(&mut self, buffer: &mut [u8]) -> InterfaceResult<(), Self::Error> {
        self.i2c
            .read(self.address, buffer)
            .map_err(InterfaceError::I2c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};

    /// Records every write frame; optionally fails the n-th transfer
    #[derive(Default)]
    struct RecordingI2c {
        writes: Vec<(u8, Vec<u8>)>,
        reads: usize,
        fail_at: Option<usize>,
        transfers: usize,
    }

    impl ErrorType for RecordingI2c {
        type Error = ErrorKind;
    }

    impl I2c<SevenBitAddress> for RecordingI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            let index = self.transfers;
            self.transfers += 1;
            if self.fail_at == Some(index) {
                return Err(ErrorKind::Bus);
            }
            for operation in operations {
                match operation {
                    Operation::Write(bytes) => self.writes.push((address, bytes.to_vec())),
                    Operation::Read(buffer) => {
                        self.reads += 1;
                        buffer.fill(0x43);
                    }
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_command_list_is_one_frame_per_byte() {
        let mut interface = I2cInterface::new(RecordingI2c::default(), 0x3C);
        interface.send_commands(&[0xAE, 0x20, 0x00, 0xAF]).unwrap();

        assert_eq!(
            interface.release().writes,
            vec![
                (0x3C, vec![0x80, 0xAE]),
                (0x3C, vec![0x80, 0x20]),
                (0x3C, vec![0x80, 0x00]),
                (0x3C, vec![0x80, 0xAF]),
            ]
        );
    }

    #[test]
    fn test_data_is_single_prefixed_frame() {
        let mut interface = I2cInterface::new(RecordingI2c::default(), 0x3D);
        interface.send_data(&[0x01, 0x02, 0x03]).unwrap();

        let i2c = interface.release();
        assert_eq!(i2c.writes, vec![(0x3D, vec![0x40, 0x01, 0x02, 0x03])]);
    }

    #[test]
    fn test_full_frame_fits_one_transfer() {
        let mut interface = I2cInterface::new(RecordingI2c::default(), 0x3C);
        interface.send_data(&[0xAA; 1024]).unwrap();

        let i2c = interface.release();
        assert_eq!(i2c.writes.len(), 1);
        assert_eq!(i2c.writes[0].1.len(), 1025);
        assert_eq!(i2c.writes[0].1[0], 0x40);
    }

    #[test]
    fn test_long_data_is_chunked() {
        let mut interface = I2cInterface::new(RecordingI2c::default(), 0x3C);
        let data: Vec<u8> = (0..1500u32).map(|i| i as u8).collect();
        interface.send_data(&data).unwrap();

        let i2c = interface.release();
        assert_eq!(i2c.writes.len(), 2);
        assert_eq!(i2c.writes[0].1.len(), 1025);
        assert_eq!(i2c.writes[1].1.len(), 1 + 476);
        assert_eq!(i2c.writes[1].1[0], 0x40);
        assert_eq!(&i2c.writes[1].1[1..], &data[1024..]);
    }

    #[test]
    fn test_empty_data_sends_nothing() {
        let mut interface = I2cInterface::new(RecordingI2c::default(), 0x3C);
        interface.send_data(&[]).unwrap();
        assert!(interface.release().writes.is_empty());
    }

    #[test]
    fn test_command_list_stops_at_failure() {
        let i2c = RecordingI2c {
            fail_at: Some(1),
            ..RecordingI2c::default()
        };
        let mut interface = I2cInterface::new(i2c, 0x3C);
        let result = interface.send_commands(&[0xAE, 0xA8, 0x3F]);
        assert!(matches!(result, Err(InterfaceError::I2c(ErrorKind::Bus))));

        let i2c = interface.release();
        assert_eq!(i2c.writes.len(), 1);
        assert_eq!(i2c.transfers, 2);
    }

    #[test]
    fn test_data_failure_is_reported_and_recoverable() {
        let i2c = RecordingI2c {
            fail_at: Some(0),
            ..RecordingI2c::default()
        };
        let mut interface = I2cInterface::new(i2c, 0x3C);
        let result = interface.send_data(&[0x11, 0x22]);
        assert!(matches!(result, Err(InterfaceError::I2c(ErrorKind::Bus))));

        interface.send_data(&[0x33]).unwrap();
        let i2c = interface.release();
        assert_eq!(i2c.writes, vec![(0x3C, vec![0x40, 0x33])]);
        assert_eq!(i2c.transfers, 2);
    }

    #[test]
    fn test_long_data_stops_at_failed_chunk() {
        let i2c = RecordingI2c {
            fail_at: Some(0),
            ..RecordingI2c::default()
        };
        let mut interface = I2cInterface::new(i2c, 0x3C);
        assert!(interface.send_data(&[0x55; 1500]).is_err());

        let i2c = interface.release();
        assert!(i2c.writes.is_empty());
        assert_eq!(i2c.transfers, 1);
    }

    #[test]
    fn test_read_status() {
        let mut interface = I2cInterface::new(RecordingI2c::default(), 0x3C);
        let mut status = [0u8; 1];
        interface.read(&mut status).unwrap();
        assert_eq!(status, [0x43]);
        assert_eq!(interface.address(), 0x3C);
        assert_eq!(interface.release().reads, 1);
    }

    #[test]
    fn test_interface_error_display() {
        let error = InterfaceError::I2c(ErrorKind::Bus);
        assert_eq!(alloc::format!("{error}"), "I2C error: Bus");
    }
}
