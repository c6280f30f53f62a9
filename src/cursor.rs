//! Raster cursor for the scanned panel
//!
//! Pixels arrive without coordinates. The cursor turns their arrival order
//! into raster positions: left to right along a row, then down one row, and
//! back to the origin once the frame is full. Wrapping is modular over the
//! whole frame and is never an error.
//!
//! ## Example
//!
//! ```
//! use pixel_blob::{Dimensions, RasterCursor};
//!
//! let mut cursor = RasterCursor::new(Dimensions::new(2, 2).unwrap());
//! assert_eq!(cursor.position(), (0, 0));
//! cursor.advance();
//! cursor.advance();
//! assert_eq!(cursor.position(), (0, 1));
//! cursor.advance();
//! assert!(cursor.advance()); // wrapped
//! assert_eq!(cursor.position(), (0, 0));
//! ```

use crate::config::Dimensions;

/// Current write position on a panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RasterCursor {
    x: u16,
    y: u16,
    dimensions: Dimensions,
}

impl RasterCursor {
    /// Create a cursor at the origin
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            x: 0,
            y: 0,
            dimensions,
        }
    }

    /// Current `(x, y)` position
    pub fn position(&self) -> (u16, u16) {
        (self.x, self.y)
    }

    /// Current position as a linear raster index, `y * width + x`
    pub fn index(&self) -> usize {
        self.y as usize * self.dimensions.width as usize + self.x as usize
    }

    /// Move back to the origin
    pub fn reset(&mut self) {
        self.x = 0;
        self.y = 0;
    }

    /// Step to the next raster position
    ///
    /// Returns `true` when the step wrapped past the last row back to `(0, 0)`.
    pub fn advance(&mut self) -> bool {
        self.x += 1;
        if self.x < self.dimensions.width {
            return false;
        }
        self.x = 0;
        self.y += 1;
        if self.y < self.dimensions.height {
            return false;
        }
        self.y = 0;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(width: u16, height: u16) -> RasterCursor {
        RasterCursor::new(Dimensions::new(width, height).unwrap())
    }

    #[test]
    fn test_row_wraps_into_next_row() {
        let mut c = cursor(3, 2);
        assert!(!c.advance());
        assert!(!c.advance());
        assert_eq!(c.position(), (2, 0));
        assert!(!c.advance());
        assert_eq!(c.position(), (0, 1));
    }

    #[test]
    fn test_frame_wraps_to_origin() {
        let mut c = cursor(3, 2);
        let wraps = (0..6).filter(|_| c.advance()).count();
        assert_eq!(wraps, 1);
        assert_eq!(c.position(), (0, 0));
    }

    #[test]
    fn test_arithmetic_is_modular_over_frame() {
        let mut c = cursor(4, 3);
        let frame = 12;
        for k in 1..30usize {
            c.reset();
            for _ in 0..(frame + k) {
                c.advance();
            }
            assert_eq!(c.index(), k % frame, "after {} pixels", frame + k);
        }
    }

    #[test]
    fn test_single_pixel_panel_wraps_every_step() {
        let mut c = cursor(1, 1);
        assert!(c.advance());
        assert!(c.advance());
        assert_eq!(c.position(), (0, 0));
    }

    #[test]
    fn test_reset_returns_to_origin() {
        let mut c = cursor(8, 8);
        for _ in 0..13 {
            c.advance();
        }
        assert_eq!(c.position(), (5, 1));
        c.reset();
        assert_eq!(c.index(), 0);
    }
}
