//! The display surface abstraction
//!
//! A [`DisplaySurface`] hides the physical topology behind an implicit write
//! position: pixels are written one after another and the surface decides
//! where each one lands. Two topologies implement it:
//!
//! - [`StripChain`]: pixels are streamed down a serial chain in order
//! - [`ScannedPanel`]: pixels are placed by a wrapping raster cursor
//!
//! [`Surface`] selects between them at construction time so the rest of the
//! firmware can be written once.

use core::fmt::Debug;

use crate::color::Rgb;
use crate::error::Error;
use crate::interface::{PanelDriver, StripBus};
use crate::panel::ScannedPanel;
use crate::strip::StripChain;

/// Result of a surface operation
pub type SurfaceResult<E> = core::result::Result<(), Error<E>>;

/// A display that accepts pixels in transmission order
pub trait DisplaySurface {
    /// Error type of the underlying bus or panel driver
    type BusError: Debug;

    /// Bring up the underlying hardware
    fn begin(&mut self) -> SurfaceResult<Self::BusError>;

    /// Return the write position to the first pixel
    fn reset(&mut self) -> SurfaceResult<Self::BusError>;

    /// Blank every pixel; leaves the write position at the first pixel
    fn clear(&mut self) -> SurfaceResult<Self::BusError>;

    /// Write one pixel in the device domain and advance the write position
    fn write_pixel(&mut self, color: Rgb) -> SurfaceResult<Self::BusError>;

    /// Write one pixel received in the raw 7-bit domain
    ///
    /// Each surface applies its own raw to device mapping.
    fn write_raw_pixel(&mut self, raw: Rgb) -> SurfaceResult<Self::BusError>;

    /// Number of addressable pixels
    fn pixel_count(&self) -> usize;

    /// Current write position as a linear pixel index
    fn position(&self) -> usize;

    /// Number of times writes ran off the end of the surface and restarted
    /// at the first pixel without an explicit reset
    fn wrap_count(&self) -> u32;
}

/// Bus error of either surface variant
#[derive(Debug, PartialEq)]
pub enum SurfaceBusError<S, P> {
    /// Raised by the strip bus
    Strip(S),
    /// Raised by the panel driver
    Panel(P),
}

/// A display surface whose topology is chosen at construction
pub enum Surface<B, P> {
    /// Serial chain of LED strips
    StripChain(StripChain<B>),
    /// Scanned RGB matrix panel
    ScannedPanel(ScannedPanel<P>),
}

impl<B, P> From<StripChain<B>> for Surface<B, P> {
    fn from(strip: StripChain<B>) -> Self {
        Self::StripChain(strip)
    }
}

impl<B, P> From<ScannedPanel<P>> for Surface<B, P> {
    fn from(panel: ScannedPanel<P>) -> Self {
        Self::ScannedPanel(panel)
    }
}

type EitherResult<B, P> =
    SurfaceResult<SurfaceBusError<<B as StripBus>::Error, <P as PanelDriver>::Error>>;

fn strip_err<S, P>(e: Error<S>) -> Error<SurfaceBusError<S, P>> {
    e.map_bus(SurfaceBusError::Strip)
}

fn panel_err<S, P>(e: Error<P>) -> Error<SurfaceBusError<S, P>> {
    e.map_bus(SurfaceBusError::Panel)
}

impl<B, P> DisplaySurface for Surface<B, P>
where
    B: StripBus,
    P: PanelDriver,
{
    type BusError = SurfaceBusError<B::Error, P::Error>;

    fn begin(&mut self) -> EitherResult<B, P> {
        match self {
            Self::StripChain(s) => s.begin().map_err(strip_err),
            Self::ScannedPanel(s) => s.begin().map_err(panel_err),
        }
    }

    fn reset(&mut self) -> EitherResult<B, P> {
        match self {
            Self::StripChain(s) => s.reset().map_err(strip_err),
            Self::ScannedPanel(s) => s.reset().map_err(panel_err),
        }
    }

    fn clear(&mut self) -> EitherResult<B, P> {
        match self {
            Self::StripChain(s) => s.clear().map_err(strip_err),
            Self::ScannedPanel(s) => s.clear().map_err(panel_err),
        }
    }

    fn write_pixel(&mut self, color: Rgb) -> EitherResult<B, P> {
        match self {
            Self::StripChain(s) => s.write_pixel(color).map_err(strip_err),
            Self::ScannedPanel(s) => s.write_pixel(color).map_err(panel_err),
        }
    }

    fn write_raw_pixel(&mut self, raw: Rgb) -> EitherResult<B, P> {
        match self {
            Self::StripChain(s) => s.write_raw_pixel(raw).map_err(strip_err),
            Self::ScannedPanel(s) => s.write_raw_pixel(raw).map_err(panel_err),
        }
    }

    fn pixel_count(&self) -> usize {
        match self {
            Self::StripChain(s) => s.pixel_count(),
            Self::ScannedPanel(s) => s.pixel_count(),
        }
    }

    fn position(&self) -> usize {
        match self {
            Self::StripChain(s) => s.position(),
            Self::ScannedPanel(s) => s.position(),
        }
    }

    fn wrap_count(&self) -> u32 {
        match self {
            Self::StripChain(s) => s.wrap_count(),
            Self::ScannedPanel(s) => s.wrap_count(),
        }
    }
}
