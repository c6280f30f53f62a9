//! Pixel blob decoding
//!
//! A blob is one transport payload of packed pixel triples:
//!
//! ```text
//! offset:  0    1    2    3    4    5   ...  3n  3n+1 3n+2
//!        [ R0 | G0 | B0 | R1 | G1 | B1 | ... | Rn | Gn | Bn ] [ tail ]
//! ```
//!
//! Every byte is a 7-bit channel value. `len / 3` pixels are written to the
//! surface in buffer order; a tail of one or two bytes is never read, and a
//! blob shorter than one triple does nothing. Nothing is carried between
//! blobs, so a triple can never span two calls.
//!
//! ## Example
//!
//! ```
//! use core::convert::Infallible;
//! use pixel_blob::{BlobDecoder, StripBuilder, StripBus, StripChain};
//!
//! struct NullBus;
//! impl StripBus for NullBus {
//!     type Error = Infallible;
//!     fn transfer(&mut self, _byte: u8) -> Result<(), Infallible> { Ok(()) }
//! }
//!
//! let config = StripBuilder::new().build().unwrap();
//! let mut strip = StripChain::new(NullBus, config);
//! let mut decoder = BlobDecoder::new();
//!
//! let written = decoder.decode(&mut strip, &[0x0A, 0x14, 0x1E, 0x01, 0x02]).unwrap();
//! assert_eq!(written, 1);
//! assert_eq!(decoder.stats().dropped_bytes, 2);
//! ```

use log::{trace, warn};

use crate::color::Rgb;
use crate::error::Error;
use crate::surface::DisplaySurface;

/// Bytes per encoded pixel
pub const BYTES_PER_PIXEL: usize = 3;

/// Running counters kept by a [`BlobDecoder`]
///
/// None of these conditions is reported to the host; the counters are the
/// only place they show up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeStats {
    /// Blobs handed to the decoder, including malformed ones
    pub blobs: u32,
    /// Pixels written to the surface
    pub pixels: u32,
    /// Blobs shorter than one pixel, ignored entirely
    pub short_blobs: u32,
    /// Trailing bytes of partial triples that were never read
    pub dropped_bytes: u32,
}

/// Decodes pixel blobs onto a [`DisplaySurface`]
#[derive(Debug, Default)]
pub struct BlobDecoder {
    stats: DecodeStats,
}

impl BlobDecoder {
    /// Create a decoder with zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters accumulated since creation or the last [`take_stats`](Self::take_stats)
    pub fn stats(&self) -> DecodeStats {
        self.stats
    }

    /// Return the counters and zero them
    pub fn take_stats(&mut self) -> DecodeStats {
        core::mem::take(&mut self.stats)
    }

    /// Write every whole pixel in `blob` to `surface`, in buffer order
    ///
    /// Returns the number of pixels written. A bus error stops the blob at
    /// the failing pixel.
    pub fn decode<S>(&mut self, surface: &mut S, blob: &[u8]) -> Result<usize, Error<S::BusError>>
    where
        S: DisplaySurface + ?Sized,
    {
        self.stats.blobs = self.stats.blobs.wrapping_add(1);

        if blob.len() < BYTES_PER_PIXEL {
            self.stats.short_blobs = self.stats.short_blobs.wrapping_add(1);
            warn!("blob of {} bytes is shorter than one pixel, ignored", blob.len());
            return Ok(0);
        }

        let pixels = blob.chunks_exact(BYTES_PER_PIXEL);
        let tail = pixels.remainder().len();
        if tail != 0 {
            self.stats.dropped_bytes = self.stats.dropped_bytes.wrapping_add(tail as u32);
            warn!("blob of {} bytes has a {} byte partial pixel, dropped", blob.len(), tail);
        }

        let mut written = 0;
        for triple in pixels {
            let raw = Rgb::new(triple[0], triple[1], triple[2]);
            surface.write_raw_pixel(raw)?;
            written += 1;
            self.stats.pixels = self.stats.pixels.wrapping_add(1);
        }

        trace!("blob: wrote {} pixels, cursor now at {}", written, surface.position());
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Dimensions, PanelBuilder, StripBuilder};
    use crate::interface::{PanelDriver, StripBus};
    use crate::panel::ScannedPanel;
    use crate::strip::StripChain;
    use alloc::vec::Vec;

    #[derive(Debug, Default)]
    struct MockBus {
        bytes: Vec<u8>,
        fail_after: Option<usize>,
    }

    impl StripBus for MockBus {
        type Error = ();

        fn transfer(&mut self, byte: u8) -> Result<(), Self::Error> {
            if self.fail_after.is_some_and(|n| self.bytes.len() >= n) {
                return Err(());
            }
            self.bytes.push(byte);
            Ok(())
        }
    }

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

    fn strip() -> StripChain<MockBus> {
        StripChain::new(MockBus::default(), StripBuilder::new().build().unwrap())
    }

    fn panel(width: u16, height: u16) -> ScannedPanel<MockDriver> {
        let config = PanelBuilder::new()
            .dimensions(Dimensions::new(width, height).unwrap())
            .build()
            .unwrap();
        ScannedPanel::new(MockDriver::default(), config)
    }

    #[test]
    fn test_short_blobs_write_nothing() {
        for len in 0..BYTES_PER_PIXEL {
            let mut s = strip();
            let mut decoder = BlobDecoder::new();
            let blob = [0x11u8; BYTES_PER_PIXEL];
            assert_eq!(decoder.decode(&mut s, &blob[..len]).unwrap(), 0);
            assert_eq!(s.position(), 0);
            assert_eq!(decoder.stats().short_blobs, 1);
            assert!(s.release().bytes.is_empty());
        }
    }

    #[test]
    fn test_pixel_count_is_floor_of_len_over_three() {
        let data: Vec<u8> = (0..40).collect();
        for len in BYTES_PER_PIXEL..data.len() {
            let mut s = strip();
            let mut decoder = BlobDecoder::new();
            let written = decoder.decode(&mut s, &data[..len]).unwrap();
            assert_eq!(written, len / 3);
            assert_eq!(s.position(), len / 3);
            assert_eq!(decoder.stats().dropped_bytes as usize, len % 3);
            assert_eq!(s.release().bytes.len(), (len / 3) * 3);
        }
    }

    #[test]
    fn test_trailing_bytes_are_never_read() {
        let mut p = panel(8, 8);
        let mut decoder = BlobDecoder::new();
        decoder.decode(&mut p, &[1, 2, 3, 0x7F, 0x7F]).unwrap();
        assert_eq!(p.release().pixels, [(0, 0, Rgb::new(1, 2, 3).to_rgb565())]);
    }

    #[test]
    fn test_two_pixel_blob_on_strip() {
        let mut s = strip();
        let mut decoder = BlobDecoder::new();
        let written = decoder
            .decode(&mut s, &[0x0A, 0x14, 0x1E, 0x01, 0x02, 0x03])
            .unwrap();
        assert_eq!(written, 2);
        // no latch bytes: reset is not part of decoding
        assert_eq!(s.release().bytes, [0x94, 0x8A, 0x9E, 0x82, 0x81, 0x83]);
    }

    #[test]
    fn test_default_strip_keeps_every_raw_bit() {
        let mut s = strip();
        let mut decoder = BlobDecoder::new();
        decoder.decode(&mut s, &[0x40, 0x00, 0x7F]).unwrap();
        // half-brightness red must not collapse into strip black
        assert_eq!(s.release().bytes, [0x80, 0xC0, 0xFF]);
    }

    #[test]
    fn test_blob_on_panel_passes_channels_through() {
        let mut p = panel(2, 2);
        let mut decoder = BlobDecoder::new();
        decoder
            .decode(&mut p, &[0x7F, 0, 0, 0, 0x7F, 0, 0, 0, 0x7F])
            .unwrap();
        let expected = [
            (0, 0, Rgb::new(0x7F, 0, 0).to_rgb565()),
            (1, 0, Rgb::new(0, 0x7F, 0).to_rgb565()),
            (0, 1, Rgb::new(0, 0, 0x7F).to_rgb565()),
        ];
        assert_eq!(p.release().pixels, expected);
    }

    #[test]
    fn test_cursor_persists_across_blobs() {
        let mut p = panel(2, 2);
        let mut decoder = BlobDecoder::new();
        decoder.decode(&mut p, &[0; 6]).unwrap();
        assert_eq!(p.position(), 2);
        decoder.decode(&mut p, &[0; 9]).unwrap();
        assert_eq!(p.position(), 1);
        assert_eq!(p.wrap_count(), 1);
    }

    #[test]
    fn test_bus_error_stops_blob() {
        let config = StripBuilder::new().build().unwrap();
        let bus = MockBus {
            bytes: Vec::new(),
            fail_after: Some(4),
        };
        let mut s = StripChain::new(bus, config);
        let mut decoder = BlobDecoder::new();
        assert_eq!(decoder.decode(&mut s, &[0; 9]), Err(Error::Bus(())));
        assert_eq!(decoder.stats().pixels, 1);
        assert_eq!(s.position(), 1);
    }

    #[test]
    fn test_take_stats_resets_counters() {
        let mut s = strip();
        let mut decoder = BlobDecoder::new();
        decoder.decode(&mut s, &[0; 7]).unwrap();
        decoder.decode(&mut s, &[0; 1]).unwrap();
        let stats = decoder.take_stats();
        assert_eq!(
            stats,
            DecodeStats {
                blobs: 2,
                pixels: 2,
                short_blobs: 1,
                dropped_bytes: 1,
            }
        );
        assert_eq!(decoder.stats(), DecodeStats::default());
    }
}
