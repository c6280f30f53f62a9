//! Surface configuration types and builders

use crate::color::{ChannelEncoding, Rgb};
pub use crate::error::BuilderError;

/// Default number of strips in a chain
pub const DEFAULT_STRIP_COUNT: u16 = 48;

/// Default number of pixels on each strip
pub const DEFAULT_STRIP_LENGTH: u16 = 48;

/// Number of pixels one latch byte re-addresses on the strip chain
pub const PIXELS_PER_LATCH_BYTE: usize = 32;

/// Panel dimensions in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Number of columns (`xMax`)
    pub width: u16,
    /// Number of rows (`yMax`)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if either side is zero.
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || height == 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Total number of addressable pixels
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Strip-chain configuration
///
/// Use [`StripBuilder`] to create one.
#[derive(Clone, Debug, PartialEq)]
pub struct StripConfig {
    /// Number of strips chained together
    pub strip_count: u16,
    /// Pixels on each strip
    pub strip_length: u16,
    /// Raw to device mapping used for blob pixels
    pub encoding: ChannelEncoding,
}

impl StripConfig {
    /// Total number of pixels on the chain (`numLEDs`)
    pub fn pixel_count(&self) -> usize {
        self.strip_count as usize * self.strip_length as usize
    }

    /// Zero bytes needed to re-latch addressing: one per 32 pixels, rounded up
    pub fn latch_bytes(&self) -> usize {
        self.pixel_count().div_ceil(PIXELS_PER_LATCH_BYTE)
    }
}

/// Builder for [`StripConfig`]
///
/// # Example
///
/// ```
/// use pixel_blob::StripBuilder;
///
/// let config = StripBuilder::new().strip_count(8).strip_length(60).build().unwrap();
/// assert_eq!(config.pixel_count(), 480);
/// assert_eq!(config.latch_bytes(), 15);
/// ```
#[must_use]
pub struct StripBuilder {
    strip_count: u16,
    strip_length: u16,
    encoding: ChannelEncoding,
}

impl Default for StripBuilder {
    fn default() -> Self {
        Self {
            strip_count: DEFAULT_STRIP_COUNT,
            strip_length: DEFAULT_STRIP_LENGTH,
            encoding: ChannelEncoding::MarkOnly,
        }
    }
}

impl StripBuilder {
    /// Create a new builder with a 48x48 chain and lossless channel encoding
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of strips in the chain
    pub fn strip_count(mut self, count: u16) -> Self {
        self.strip_count = count;
        self
    }

    /// Set the number of pixels per strip
    pub fn strip_length(mut self, length: u16) -> Self {
        self.strip_length = length;
        self
    }

    /// Set the raw to device channel mapping
    pub fn encoding(mut self, encoding: ChannelEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if the chain has no pixels.
    pub fn build(self) -> Result<StripConfig, BuilderError> {
        if self.strip_count == 0 || self.strip_length == 0 {
            return Err(BuilderError::InvalidDimensions {
                width: self.strip_count,
                height: self.strip_length,
            });
        }
        Ok(StripConfig {
            strip_count: self.strip_count,
            strip_length: self.strip_length,
            encoding: self.encoding,
        })
    }
}

/// Scanned-panel configuration
///
/// Use [`PanelBuilder`] to create one.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelConfig {
    /// Panel dimensions
    pub dimensions: Dimensions,
    /// Color written to every cell by `clear()`
    pub clear_color: Rgb,
}

/// Builder for [`PanelConfig`]
///
/// # Example
///
/// ```
/// use pixel_blob::{Dimensions, PanelBuilder, Rgb};
///
/// let config = PanelBuilder::new()
///     .dimensions(Dimensions::new(32, 32).unwrap())
///     .build()
///     .unwrap();
/// assert_eq!(config.clear_color, Rgb::BLACK);
/// ```
#[must_use]
#[derive(Default)]
pub struct PanelBuilder {
    /// Panel dimensions (required)
    dimensions: Option<Dimensions>,
    clear_color: Rgb,
}

impl PanelBuilder {
    /// Create a new builder; clears to black unless told otherwise
    pub fn new() -> Self {
        Self::default()
    }

    /// Set panel dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set the color used by `clear()`
    ///
    /// Older panel firmware cleared to full red, `Rgb::new(255, 0, 0)`.
    pub fn clear_color(mut self, color: Rgb) -> Self {
        self.clear_color = color;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set
    pub fn build(self) -> Result<PanelConfig, BuilderError> {
        Ok(PanelConfig {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            clear_color: self.clear_color,
        })
    }
}
