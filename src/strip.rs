//! Strip-chain surface
//!
//! A chain of LPD8806-style strips has no addressing of its own: every pixel
//! written is shifted one position further down the chain, and a run of zero
//! bytes makes the chips latch and start over from the first pixel.
//!
//! Each pixel costs three bus transfers, sent green first:
//!
//! | Transfer | Channel | Value |
//! |----------|---------|-------|
//! | 1 | green | `128..=255` |
//! | 2 | red   | `128..=255` |
//! | 3 | blue  | `128..=255` |

use log::{debug, warn};

use crate::color::Rgb;
use crate::config::StripConfig;
use crate::error::Error;
use crate::interface::StripBus;
use crate::surface::{DisplaySurface, SurfaceResult};

/// Display surface for a serial chain of LED strips
pub struct StripChain<B> {
    /// Byte transport to the first chip on the chain
    bus: B,
    config: StripConfig,
    /// Guards against reconfiguring the bus on repeat `begin()` calls
    is_initialized: bool,
    /// Pixels pushed since the last latch, in `0..=pixel_count`
    pushed: usize,
    wraps: u32,
}

impl<B: StripBus> StripChain<B> {
    /// Create a strip chain over a bus; nothing is transmitted until used
    pub fn new(bus: B, config: StripConfig) -> Self {
        Self {
            bus,
            config,
            is_initialized: false,
            pushed: 0,
            wraps: 0,
        }
    }

    /// Chain configuration
    pub fn config(&self) -> &StripConfig {
        &self.config
    }

    /// Whether `begin()` has brought up the bus
    pub fn is_initialized(&self) -> bool {
        self.is_initialized
    }

    /// Give back the bus
    pub fn release(self) -> B {
        self.bus
    }

    /// Push a full 8-bit color, compressing each channel into the device band
    pub fn write_full_pixel(&mut self, color: Rgb) -> SurfaceResult<B::Error> {
        self.write_pixel(color.compress_to_strip())
    }

    /// Push device white to the next pixel
    pub fn write_white(&mut self) -> SurfaceResult<B::Error> {
        self.write_pixel(Rgb::STRIP_WHITE)
    }

    /// Push device black to the next pixel
    pub fn write_black(&mut self) -> SurfaceResult<B::Error> {
        self.write_pixel(Rgb::STRIP_BLACK)
    }

    fn transfer(&mut self, byte: u8) -> SurfaceResult<B::Error> {
        self.bus.transfer(byte).map_err(Error::Bus)
    }

    fn latch(&mut self) -> SurfaceResult<B::Error> {
        for _ in 0..self.config.latch_bytes() {
            self.transfer(0)?;
        }
        self.bus.flush().map_err(Error::Bus)
    }
}

impl<B: StripBus> DisplaySurface for StripChain<B> {
    type BusError = B::Error;

    fn begin(&mut self) -> SurfaceResult<B::Error> {
        if self.is_initialized {
            return Ok(());
        }
        debug!(
            "strip chain: bringing up bus for {}x{} pixels",
            self.config.strip_count, self.config.strip_length
        );
        self.bus.begin().map_err(Error::Bus)?;
        self.is_initialized = true;
        Ok(())
    }

    /// Send one zero byte per 32 pixels so every chip re-latches addressing
    fn reset(&mut self) -> SurfaceResult<B::Error> {
        self.latch()?;
        self.pushed = 0;
        Ok(())
    }

    fn clear(&mut self) -> SurfaceResult<B::Error> {
        debug!("strip chain: clearing {} pixels", self.pixel_count());
        self.reset()?;
        for _ in 0..self.config.strip_count {
            for _ in 0..self.config.strip_length {
                self.write_black()?;
            }
        }
        self.reset()
    }

    fn write_pixel(&mut self, color: Rgb) -> SurfaceResult<B::Error> {
        for byte in color.strip_wire_order() {
            self.transfer(byte)?;
        }
        if self.pushed >= self.pixel_count() {
            self.pushed = 0;
            self.wraps = self.wraps.saturating_add(1);
            warn!(
                "strip chain: wrote past {} pixels without a reset",
                self.pixel_count()
            );
        }
        self.pushed += 1;
        Ok(())
    }

    fn write_raw_pixel(&mut self, raw: Rgb) -> SurfaceResult<B::Error> {
        self.write_pixel(raw.to_strip(self.config.encoding))
    }

    fn pixel_count(&self) -> usize {
        self.config.pixel_count()
    }

    fn position(&self) -> usize {
        self.pushed % self.pixel_count()
    }

    fn wrap_count(&self) -> u32 {
        self.wraps
    }
}
