//! Command bytes accepted from the host
//!
//! The host's serial command dispatcher delivers a command byte and an
//! argument buffer. Only the blob, reset and configuration commands drive the
//! display; the remaining codes are reserved by the wire protocol and are
//! recognised so they can be reported rather than mistaken for garbage.
//!
//! ## Example
//!
//! ```
//! use pixel_blob::command::{self, Command};
//!
//! assert_eq!(Command::try_from(command::PIXEL_BLOB), Ok(Command::PixelBlob));
//! assert!(Command::try_from(0x00).is_err());
//! ```

/// Pixel blob transfer (0x7C)
///
/// Payload: packed 7-bit RGB triples.
pub const PIXEL_BLOB: u8 = 0x7C;

/// Reset addressing (0x43)
///
/// Sent by hosts once before and once after each frame. No payload.
pub const RESET: u8 = 0x43;

/// Configure and bring up the surface (0x44)
pub const CONFIG: u8 = 0x44;

/// 21-bit full color pixel, 7 bits per channel (0x42)
///
/// Reserved.
pub const PIXEL21: u8 = 0x42;

/// 7-bit indexed color pixel (0x45)
///
/// Reserved.
pub const PIXEL7: u8 = 0x45;

/// 1-bit monochrome pixels, 7 per byte (0x46)
///
/// Reserved.
pub const PIXEL1: u8 = 0x46;

/// Indexed color palette load (0x47)
///
/// Reserved.
pub const PIXEL7_PALETTE: u8 = 0x47;

/// A recognised command byte
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Command {
    /// See [`PIXEL_BLOB`]
    PixelBlob = PIXEL_BLOB,
    /// See [`RESET`]
    Reset = RESET,
    /// See [`CONFIG`]
    Config = CONFIG,
    /// See [`PIXEL21`]
    FullColorPixel = PIXEL21,
    /// See [`PIXEL7`]
    IndexedPixel = PIXEL7,
    /// See [`PIXEL1`]
    MonochromePixels = PIXEL1,
    /// See [`PIXEL7_PALETTE`]
    PalettePixel = PIXEL7_PALETTE,
}

impl Command {
    /// The command byte as sent on the wire
    pub fn byte(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Command {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            PIXEL_BLOB => Ok(Self::PixelBlob),
            RESET => Ok(Self::Reset),
            CONFIG => Ok(Self::Config),
            PIXEL21 => Ok(Self::FullColorPixel),
            PIXEL7 => Ok(Self::IndexedPixel),
            PIXEL1 => Ok(Self::MonochromePixels),
            PIXEL7_PALETTE => Ok(Self::PalettePixel),
            other => Err(other),
        }
    }
}
