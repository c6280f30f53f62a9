//! Pixel Blob LED Driver
//!
//! Firmware-side driver that takes pixel blobs received over a serial control
//! protocol and lights them on an LED display: either a chain of addressable
//! RGB strips fed bit-serially, or a scanned RGB matrix panel behind its own
//! controller.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 SPI adapter for strip chains
//! - One [`DisplaySurface`] interface over both topologies
//! - Counters for malformed blobs and overflowing writes
//! - `embedded-graphics` drawing on panels (with `graphics` feature)
//!
//! ## Pipeline
//!
//! ```text
//! host command ─▶ Dispatcher ─▶ BlobDecoder ─▶ DisplaySurface ─▶ StripBus / PanelDriver
//! ```
//!
//! Data flows one way. Nothing is read back from the display, and each blob
//! is handled completely before the call returns.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::spi::SpiBus;
//! use pixel_blob::{command, DisplaySurface, Dispatcher, SpiStripBus, StripBuilder, StripChain};
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiBus for MockSpi {
//! #     fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let spi = MockSpi;
//! let config = match StripBuilder::new().strip_count(48).strip_length(48).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let mut strip = StripChain::new(SpiStripBus::new(spi), config);
//! let _ = strip.begin();
//! let _ = strip.clear();
//!
//! let mut dispatcher = Dispatcher::new(strip);
//! let _ = dispatcher.handle(command::RESET, &[]);
//! let _ = dispatcher.handle(command::PIXEL_BLOB, &[0x7F, 0x00, 0x00, 0x00, 0x7F, 0x00]);
//! let _ = dispatcher.handle(command::RESET, &[]);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Pixel blob decoding
pub mod blob;
/// Colors and channel conversions
pub mod color;
/// Host command bytes
pub mod command;
/// Surface configuration types and builders
pub mod config;
/// Raster cursor for panels
pub mod cursor;
/// Host command routing
pub mod dispatch;
/// Error types for the driver
pub mod error;
/// Bus driver abstraction
pub mod interface;
/// Scanned-panel surface
pub mod panel;
/// Strip-chain surface
pub mod strip;
/// Display surface interface
pub mod surface;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use blob::{BYTES_PER_PIXEL, BlobDecoder, DecodeStats};
pub use color::{ChannelEncoding, Rgb};
pub use command::Command;
pub use config::{Dimensions, PanelBuilder, PanelConfig, StripBuilder, StripConfig};
pub use cursor::RasterCursor;
pub use dispatch::{Dispatcher, Outcome};
pub use error::{BuilderError, Error};
pub use interface::{PanelDriver, SpiStripBus, StripBus};
pub use panel::ScannedPanel;
pub use strip::StripChain;
pub use surface::{DisplaySurface, Surface, SurfaceBusError, SurfaceResult};
