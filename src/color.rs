//! Pixel colors and channel conversions
//!
//! Two color domains meet in this crate and must not be mixed up:
//!
//! | Domain | Channel range | Where it comes from |
//! |--------|---------------|---------------------|
//! | Raw    | 0..=127       | Blob payloads; the high bit is reserved by the transport framing |
//! | Device | 128..=255     | Strip chain: the top bit marks a byte as pixel data |
//! | Device | 0..=255       | Scanned panel: the controller does its own bit expansion |
//!
//! ## Example
//!
//! ```
//! use pixel_blob::{ChannelEncoding, Rgb};
//!
//! let raw = Rgb::new(10, 20, 30);
//! let device = raw.to_strip(ChannelEncoding::MarkOnly);
//! assert_eq!(device, Rgb::new(0x8A, 0x94, 0x9E));
//!
//! // Panel color words are packed 5-6-5
//! assert_eq!(Rgb::new(255, 0, 0).to_rgb565(), 0xF800);
//! ```

/// Mask of the bit that every strip-chain channel byte must carry
pub const STRIP_DATA_BIT: u8 = 0x80;

/// Largest channel value representable in the raw 7-bit domain
pub const RAW_CHANNEL_MAX: u8 = 0x7F;

/// An ordered (red, green, blue) triple of 8-bit channels
///
/// The same type carries raw and device values; which domain a value is in
/// is decided by the method it is handed to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// All channels off, in the panel's device domain
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Strip-chain device black: zero intensity with the data bit set
    pub const STRIP_BLACK: Self = Self::new(128, 128, 128);

    /// Strip-chain device white
    ///
    /// Perceived intensity is roughly that of one channel at full power.
    pub const STRIP_WHITE: Self = Self::new(169, 169, 169);

    /// Create a color from its three channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert a raw 7-bit color to strip-chain device values
    ///
    /// See [`ChannelEncoding`] for the per-channel mapping.
    pub fn to_strip(self, encoding: ChannelEncoding) -> Self {
        Self {
            r: encoding.apply(self.r),
            g: encoding.apply(self.g),
            b: encoding.apply(self.b),
        }
    }

    /// Compress a full 8-bit color into the strip-chain device band
    ///
    /// Each channel becomes `(v >> 1) | 0x80`.
    pub fn compress_to_strip(self) -> Self {
        Self {
            r: (self.r >> 1) | STRIP_DATA_BIT,
            g: (self.g >> 1) | STRIP_DATA_BIT,
            b: (self.b >> 1) | STRIP_DATA_BIT,
        }
    }

    /// Pack into the 16-bit 5-6-5 color word taken by panel drivers
    ///
    /// Low bits of each channel are truncated; no gamma is applied.
    pub fn to_rgb565(self) -> u16 {
        let (r, g, b) = (u16::from(self.r), u16::from(self.g), u16::from(self.b));
        ((r & 0xF8) << 8) | ((g & 0xFC) << 3) | (b >> 3)
    }

    /// Channels in the order the strip chain expects them on the wire
    pub fn strip_wire_order(self) -> [u8; 3] {
        [self.g, self.r, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// How a raw 7-bit channel is mapped into the strip-chain device band
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChannelEncoding {
    /// `v | 0x80`: sets the data bit and keeps all seven channel bits
    ///
    /// Lossless over 0..=127.
    #[default]
    MarkOnly,
    /// `(v << 1) | 0x80`: doubles a 6-bit channel into the device band
    ///
    /// Only 0..=63 survive. Bit 6 is shifted out, so `v` and `v + 64` land on
    /// the same device value. Meant for hosts that send 6-bit channels.
    Widen,
}

impl ChannelEncoding {
    /// Map a single raw channel to its device value
    ///
    /// The high bit of `raw` is ignored; it belongs to the transport.
    pub fn apply(self, raw: u8) -> u8 {
        let raw = raw & RAW_CHANNEL_MAX;
        match self {
            Self::Widen => (raw << 1) | STRIP_DATA_BIT,
            Self::MarkOnly => raw | STRIP_DATA_BIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_only_is_lossless() {
        let mut seen = [false; 256];
        for v in 0..=RAW_CHANNEL_MAX {
            let d = ChannelEncoding::MarkOnly.apply(v);
            assert_eq!(d & STRIP_DATA_BIT, STRIP_DATA_BIT, "raw {v} lost the data bit");
            assert_eq!(d & RAW_CHANNEL_MAX, v, "raw {v} changed intensity");
            assert!(!seen[d as usize], "collision at device value {d}");
            seen[d as usize] = true;
        }
    }

    #[test]
    fn test_default_encoding_is_lossless() {
        assert_eq!(ChannelEncoding::default(), ChannelEncoding::MarkOnly);
    }

    #[test]
    fn test_widen_folds_bit_six() {
        assert_eq!(ChannelEncoding::Widen.apply(0), 0x80);
        assert_eq!(ChannelEncoding::Widen.apply(63), 0xFE);
        // 64 lands on strip black, 127 on the same byte as 63
        assert_eq!(ChannelEncoding::Widen.apply(64), Rgb::STRIP_BLACK.r);
        assert_eq!(ChannelEncoding::Widen.apply(127), ChannelEncoding::Widen.apply(63));
    }

    #[test]
    fn test_widen_is_injective_over_six_bits() {
        let mut seen = [false; 256];
        for v in 0..64 {
            let d = ChannelEncoding::Widen.apply(v) as usize;
            assert!(!seen[d], "collision at device value {d}");
            seen[d] = true;
        }
    }

    #[test]
    fn test_mark_only_sets_data_bit() {
        assert_eq!(ChannelEncoding::MarkOnly.apply(0x0A), 0x8A);
        assert_eq!(ChannelEncoding::MarkOnly.apply(0), 0x80);
        assert_eq!(ChannelEncoding::MarkOnly.apply(0x7F), 0xFF);
    }

    #[test]
    fn test_transport_bit_is_ignored() {
        assert_eq!(
            ChannelEncoding::MarkOnly.apply(0x8A),
            ChannelEncoding::MarkOnly.apply(0x0A)
        );
    }

    #[test]
    fn test_compress_to_strip() {
        let c = Rgb::new(255, 0, 100).compress_to_strip();
        assert_eq!(c, Rgb::new(0xFF, 0x80, 0xB2));
    }

    #[test]
    fn test_strip_wire_order_is_grb() {
        assert_eq!(Rgb::new(10, 20, 30).strip_wire_order(), [20, 10, 30]);
    }

    #[test]
    fn test_rgb565_packing() {
        assert_eq!(Rgb::BLACK.to_rgb565(), 0x0000);
        assert_eq!(Rgb::new(255, 255, 255).to_rgb565(), 0xFFFF);
        assert_eq!(Rgb::new(255, 0, 0).to_rgb565(), 0xF800);
        assert_eq!(Rgb::new(0, 255, 0).to_rgb565(), 0x07E0);
        assert_eq!(Rgb::new(0, 0, 255).to_rgb565(), 0x001F);
    }

    #[test]
    fn test_strip_black_is_zero_with_data_bit() {
        assert_eq!(Rgb::new(0, 0, 0).to_strip(ChannelEncoding::Widen), Rgb::STRIP_BLACK);
        assert_eq!(Rgb::new(0, 0, 0).to_strip(ChannelEncoding::MarkOnly), Rgb::STRIP_BLACK);
    }
}
