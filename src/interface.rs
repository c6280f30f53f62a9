//! Bus driver boundary
//!
//! This module provides the traits the surfaces drive hardware through:
//!
//! - [`StripBus`]: a synchronous byte-transfer primitive for the strip chain
//! - [`PanelDriver`]: a synchronous `(x, y, color)` pixel-set primitive for a
//!   scanned panel controller
//!
//! Bus timing, pin assignment and clock setup belong to the implementor.
//! [`SpiStripBus`] adapts any embedded-hal v1.0 [`SpiBus`] configured for
//! MSB-first, mode 0.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::spi::SpiBus;
//! use pixel_blob::{SpiStripBus, StripBus};
//! # use core::convert::Infallible;
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiBus for MockSpi {
//! #     fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! let mut bus = SpiStripBus::new(MockSpi);
//! let _ = bus.transfer(0x80);
//! ```

use core::fmt::Debug;
use embedded_hal::spi::SpiBus;

/// Byte-serial transport for a chain of addressable LED strips
///
/// Transfers are fire-and-forget: the chain never acknowledges.
pub trait StripBus {
    /// Error type for bus operations
    type Error: Debug;

    /// Bring up the bus
    ///
    /// Called at most once per surface. The default does nothing, for buses
    /// configured before they are handed over.
    fn begin(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Clock one byte out onto the chain
    fn transfer(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Block until every queued byte has left the bus
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Random-access pixel writer backed by a scanned-panel controller
///
/// The controller owns scan timing and bit-plane expansion; this trait only
/// sets pixels in its frame memory.
pub trait PanelDriver {
    /// Error type for driver operations
    type Error: Debug;

    /// Initialize the panel controller
    ///
    /// May be called repeatedly.
    fn begin(&mut self) -> Result<(), Self::Error>;

    /// Set the pixel at `(x, y)` to a packed 5-6-5 color word
    fn set_pixel(&mut self, x: u16, y: u16, color: u16) -> Result<(), Self::Error>;
}

/// [`StripBus`] over an embedded-hal SPI bus
///
/// The strip chain has no chip select, so a bare [`SpiBus`] is used rather
/// than an `SpiDevice`.
pub struct SpiStripBus<SPI> {
    spi: SPI,
}

impl<SPI: SpiBus> SpiStripBus<SPI> {
    /// Wrap an SPI bus
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Give back the SPI bus
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> StripBus for SpiStripBus<SPI>
where
    SPI: SpiBus,
    SPI::Error: Debug,
{
    type Error = SPI::Error;

    fn transfer(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.spi.write(&[byte])
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.spi.flush()
    }
}
