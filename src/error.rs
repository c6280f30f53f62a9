//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and surface operations ([`Error`]).
//!
//! Malformed blobs and cursor overflow are deliberately absent: the wire
//! protocol treats both as silent, and they are surfaced as counters instead
//! (see [`DecodeStats`](crate::DecodeStats) and
//! [`DisplaySurface::wrap_count`](crate::DisplaySurface::wrap_count)).
//!
//! ## Example
//!
//! ```
//! use pixel_blob::{BuilderError, Dimensions, PanelBuilder};
//!
//! // Missing dimensions
//! let result = PanelBuilder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Zero-sized panel
//! assert!(Dimensions::new(0, 32).is_err());
//! ```

use core::fmt::Debug;

/// Errors that can occur while driving a display surface
///
/// Generic over the bus error type so callers can match on the
/// underlying hardware failure.
#[derive(Debug, PartialEq)]
pub enum Error<E> {
    /// The strip bus or panel driver reported a failure
    Bus(E),
    /// A command byte outside the wire protocol was received
    UnknownCommand(u8),
}

impl<E> Error<E> {
    /// Convert the bus error, leaving other variants untouched
    pub fn map_bus<F>(self, f: impl FnOnce(E) -> F) -> Error<F> {
        match self {
            Self::Bus(e) => Error::Bus(f(e)),
            Self::UnknownCommand(byte) => Error::UnknownCommand(byte),
        }
    }
}

impl<E: Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "Bus error: {e:?}"),
            Self::UnknownCommand(byte) => write!(f, "Unknown command byte 0x{byte:02X}"),
        }
    }
}

impl<E: Debug> core::error::Error for Error<E> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Panel dimensions were not specified
    ///
    /// [`PanelBuilder::dimensions()`](crate::config::PanelBuilder::dimensions) must be called before building.
    MissingDimensions,
    /// A surface with no pixels was requested
    InvalidDimensions {
        /// Columns (panel width, or strip count)
        width: u16,
        /// Rows (panel height, or strip length)
        height: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => {
                write!(f, "Invalid dimensions {width}x{height} (both must be non-zero)")
            }
        }
    }
}

impl core::error::Error for BuilderError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_display() {
        let e: Error<()> = Error::UnknownCommand(0x10);
        assert_eq!(e.to_string(), "Unknown command byte 0x10");
        let e: Error<&str> = Error::Bus("nack");
        assert_eq!(e.to_string(), "Bus error: \"nack\"");
    }

    #[test]
    fn test_builder_error_display() {
        let e = BuilderError::InvalidDimensions { width: 0, height: 8 };
        assert_eq!(
            e.to_string(),
            "Invalid dimensions 0x8 (both must be non-zero)"
        );
    }
}
