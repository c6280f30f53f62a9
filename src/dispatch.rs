//! Routing of host commands to the display surface
//!
//! The serial command layer hands over `(command, payload)` pairs. The
//! [`Dispatcher`] owns the surface and the blob decoder, and maps each
//! command byte onto them. It is not reentrant; the firmware's single
//! execution context owns it.
//!
//! | Byte | Action |
//! |------|--------|
//! | `0x7C` | decode payload as a pixel blob |
//! | `0x43` | `reset()` |
//! | `0x44` | `begin()` |
//! | `0x42`, `0x45`, `0x46`, `0x47` | reserved, logged and skipped |
//! | anything else | [`Error::UnknownCommand`] |

use log::{debug, warn};

use crate::blob::{BlobDecoder, DecodeStats};
use crate::command::Command;
use crate::error::Error;
use crate::surface::DisplaySurface;

/// What a handled command did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A blob was decoded; holds the number of pixels written
    Drew(usize),
    /// Addressing was reset
    Reset,
    /// The surface was brought up
    Configured,
    /// A reserved command was recognised and ignored
    Reserved(Command),
}

/// Routes host commands onto a display surface
pub struct Dispatcher<S> {
    surface: S,
    decoder: BlobDecoder,
}

impl<S: DisplaySurface> Dispatcher<S> {
    /// Take ownership of a surface
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            decoder: BlobDecoder::new(),
        }
    }

    /// The surface being driven
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, e.g. for a `clear()` at start-up
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Blob counters so far
    pub fn stats(&self) -> DecodeStats {
        self.decoder.stats()
    }

    /// Give back the surface
    pub fn into_inner(self) -> S {
        self.surface
    }

    /// Handle one command from the host
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownCommand` for bytes outside the protocol, and
    /// `Error::Bus` if the surface's bus fails.
    pub fn handle(&mut self, command: u8, payload: &[u8]) -> Result<Outcome, Error<S::BusError>> {
        let command = Command::try_from(command).map_err(|byte| {
            warn!("unknown command byte 0x{:02X}", byte);
            Error::UnknownCommand(byte)
        })?;

        match command {
            Command::PixelBlob => {
                let written = self.decoder.decode(&mut self.surface, payload)?;
                Ok(Outcome::Drew(written))
            }
            Command::Reset => {
                debug!("reset addressing");
                self.surface.reset()?;
                Ok(Outcome::Reset)
            }
            Command::Config => {
                debug!("configure surface");
                self.surface.begin()?;
                Ok(Outcome::Configured)
            }
            Command::FullColorPixel
            | Command::IndexedPixel
            | Command::MonochromePixels
            | Command::PalettePixel => {
                warn!(
                    "reserved command 0x{:02X} ignored ({} byte payload)",
                    command.byte(),
                    payload.len()
                );
                Ok(Outcome::Reserved(command))
            }
        }
    }
}
