//! I2C bus abstractions
//!
//! The display only ever writes to the bus, so the trait is write-only.
//! [`HalI2c`] bridges any embedded-hal 1.0 blocking I2C peripheral.

use embedded_hal::i2c::{Error as _, ErrorKind};

/// I2C bus master
///
/// A blocking, fallible write of a byte string to a 7-bit device address.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write, sent as one transaction
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;
}

impl<T: I2cBus + ?Sized> I2cBus for &mut T {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        T::write(self, address, data)
    }
}

/// Chip-agnostic error from I2C operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError {
    /// Bus error (misplaced START/STOP)
    Bus,
    /// Arbitration lost
    ArbitrationLost,
    /// NACK received (address or data)
    Nack,
    /// Overrun
    Overrun,
    /// Other error
    Other,
}

impl From<ErrorKind> for I2cBusError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Bus => I2cBusError::Bus,
            ErrorKind::ArbitrationLoss => I2cBusError::ArbitrationLost,
            ErrorKind::NoAcknowledge(_) => I2cBusError::Nack,
            ErrorKind::Overrun => I2cBusError::Overrun,
            _ => I2cBusError::Other,
        }
    }
}

/// [`I2cBus`] adapter for embedded-hal 1.0 blocking I2C peripherals
pub struct HalI2c<T> {
    inner: T,
}

impl<T> HalI2c<T>
where
    T: embedded_hal::i2c::I2c,
{
    /// Wrap an embedded-hal I2C peripheral
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped peripheral
    pub fn inner(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Give the wrapped peripheral back
    pub fn release(self) -> T {
        self.inner
    }
}

impl<T> I2cBus for HalI2c<T>
where
    T: embedded_hal::i2c::I2c,
{
    type Error = I2cBusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.inner
            .write(address, data)
            .map_err(|e| I2cBusError::from(e.kind()))
    }
}
