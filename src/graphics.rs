//! Graphics support via embedded-graphics
//!
//! [`ScannedPanel`] implements [`DrawTarget`] with [`Rgb888`] colors, so text
//! and primitives can be drawn straight onto the panel. Drawing addresses
//! pixels by coordinate and does not move the blob cursor.
//!
//! ## Example
//!
//! ```rust
//! use core::convert::Infallible;
//! use embedded_graphics::{
//!     pixelcolor::Rgb888,
//!     prelude::*,
//!     primitives::{PrimitiveStyle, Rectangle},
//! };
//! use pixel_blob::{Dimensions, PanelBuilder, PanelDriver, ScannedPanel};
//!
//! struct NullPanel;
//! impl PanelDriver for NullPanel {
//!     type Error = Infallible;
//!     fn begin(&mut self) -> Result<(), Infallible> { Ok(()) }
//!     fn set_pixel(&mut self, _x: u16, _y: u16, _color: u16) -> Result<(), Infallible> { Ok(()) }
//! }
//!
//! let config = PanelBuilder::new()
//!     .dimensions(Dimensions::new(32, 32).unwrap())
//!     .build()
//!     .unwrap();
//! let mut panel = ScannedPanel::new(NullPanel, config);
//!
//! Rectangle::new(Point::new(4, 4), Size::new(8, 8))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb888::GREEN))
//!     .draw(&mut panel)
//!     .unwrap();
//! ```

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::{Rgb888, RgbColor},
    prelude::Pixel,
};

use crate::color::Rgb;
use crate::error::Error;
use crate::interface::PanelDriver;
use crate::panel::ScannedPanel;

impl From<Rgb888> for Rgb {
    fn from(color: Rgb888) -> Self {
        Self::new(color.r(), color.g(), color.b())
    }
}

impl<P: PanelDriver> OriginDimensions for ScannedPanel<P> {
    fn size(&self) -> Size {
        let dims = self.dimensions();
        Size::new(dims.width as u32, dims.height as u32)
    }
}

impl<P: PanelDriver> DrawTarget for ScannedPanel<P> {
    type Color = Rgb888;
    type Error = Error<P::Error>;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let dims = self.dimensions();
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (u16::try_from(point.x), u16::try_from(point.y)) else {
                continue;
            };
            if x >= dims.width || y >= dims.height {
                continue;
            }
            self.set_pixel_at(x, y, color.into())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Dimensions, PanelBuilder};
    use crate::surface::DisplaySurface;
    use alloc::vec::Vec;
    use embedded_graphics::{
        prelude::*,
        primitives::{Line, PrimitiveStyle},
    };

    #[derive(Debug, Default)]
    struct MockDriver {
        pixels: Vec<(u16, u16, u16)>,
    }

    impl PanelDriver for MockDriver {
        type Error = core::convert::Infallible;

        fn begin(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }

        fn set_pixel(&mut self, x: u16, y: u16, color: u16) -> Result<(), Self::Error> {
            self.pixels.push((x, y, color));
            Ok(())
        }
    }

    fn panel() -> ScannedPanel<MockDriver> {
        let config = PanelBuilder::new()
            .dimensions(Dimensions::new(4, 4).unwrap())
            .build()
            .unwrap();
        ScannedPanel::new(MockDriver::default(), config)
    }

    #[test]
    fn test_size_matches_dimensions() {
        assert_eq!(panel().size(), Size::new(4, 4));
    }

    #[test]
    fn test_draw_clips_and_keeps_cursor() {
        let mut p = panel();
        p.write_pixel(Rgb::BLACK).unwrap();

        Line::new(Point::new(-1, 1), Point::new(5, 1))
            .into_styled(PrimitiveStyle::with_stroke(Rgb888::RED, 1))
            .draw(&mut p)
            .unwrap();
        assert_eq!(p.position(), 1);

        let drawn: Vec<(u16, u16, u16)> = p.release().pixels.into_iter().skip(1).collect();
        assert_eq!(
            drawn,
            [(0, 1, 0xF800), (1, 1, 0xF800), (2, 1, 0xF800), (3, 1, 0xF800)]
        );
    }

    #[test]
    fn test_rgb888_conversion() {
        assert_eq!(Rgb::from(Rgb888::new(1, 2, 3)), Rgb::new(1, 2, 3));
    }
}
