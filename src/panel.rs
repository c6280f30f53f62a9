//! Scanned-panel surface
//!
//! Places each incoming pixel at the position of a [`RasterCursor`] and
//! hands it to a [`PanelDriver`] as a packed 5-6-5 word. Channels are taken
//! as-is; a blob's 7-bit values land in the lower half of the panel's range
//! unless the host pre-scales them.

use log::{debug, warn};

use crate::color::Rgb;
use crate::config::{Dimensions, PanelConfig};
use crate::cursor::RasterCursor;
use crate::error::Error;
use crate::interface::PanelDriver;
use crate::surface::{DisplaySurface, SurfaceResult};

/// Display surface for an RGB matrix panel with its own scan controller
pub struct ScannedPanel<P> {
    driver: P,
    config: PanelConfig,
    cursor: RasterCursor,
    wraps: u32,
}

impl<P: PanelDriver> ScannedPanel<P> {
    /// Create a panel surface with the cursor at the origin
    pub fn new(driver: P, config: PanelConfig) -> Self {
        Self {
            cursor: RasterCursor::new(config.dimensions),
            driver,
            config,
            wraps: 0,
        }
    }

    /// Panel dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.config.dimensions
    }

    /// Current cursor
    pub fn cursor(&self) -> &RasterCursor {
        &self.cursor
    }

    /// Give back the panel driver
    pub fn release(self) -> P {
        self.driver
    }

    /// Write a pixel at explicit coordinates, leaving the cursor alone
    pub(crate) fn set_pixel_at(&mut self, x: u16, y: u16, color: Rgb) -> SurfaceResult<P::Error> {
        self.driver
            .set_pixel(x, y, color.to_rgb565())
            .map_err(Error::Bus)
    }
}

impl<P: PanelDriver> DisplaySurface for ScannedPanel<P> {
    type BusError = P::Error;

    /// Forwarded to the driver on every call
    fn begin(&mut self) -> SurfaceResult<P::Error> {
        debug!(
            "scanned panel: initializing {}x{} driver",
            self.config.dimensions.width, self.config.dimensions.height
        );
        self.driver.begin().map_err(Error::Bus)
    }

    fn reset(&mut self) -> SurfaceResult<P::Error> {
        self.cursor.reset();
        Ok(())
    }

    fn clear(&mut self) -> SurfaceResult<P::Error> {
        let Dimensions { width, height } = self.config.dimensions;
        let color = self.config.clear_color;
        debug!("scanned panel: clearing to {:?}", color);
        for y in 0..height {
            for x in 0..width {
                self.set_pixel_at(x, y, color)?;
            }
        }
        self.cursor.reset();
        Ok(())
    }

    fn write_pixel(&mut self, color: Rgb) -> SurfaceResult<P::Error> {
        let (x, y) = self.cursor.position();
        self.set_pixel_at(x, y, color)?;
        if self.cursor.advance() {
            self.wraps = self.wraps.saturating_add(1);
            warn!("scanned panel: cursor wrapped to origin");
        }
        Ok(())
    }

    fn write_raw_pixel(&mut self, raw: Rgb) -> SurfaceResult<P::Error> {
        self.write_pixel(raw)
    }

    fn pixel_count(&self) -> usize {
        self.config.dimensions.pixel_count()
    }

    fn position(&self) -> usize {
        self.cursor.index()
    }

    fn wrap_count(&self) -> u32 {
        self.wraps
    }
}
