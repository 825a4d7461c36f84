//! Pixel and character buffers exchanged between pipeline stages.
//!
//! All buffers are row-major and owned by the caller for the duration of a
//! render call; no stage retains a reference past its invocation.

use crate::error::ConvertError;

/// Single-channel intensity buffer, 1 byte per pixel.
///
/// # Example
/// ```
/// use px_core::frame::GrayFrame;
/// let f = GrayFrame::new(4, 2);
/// assert_eq!(f.data.len(), 8);
/// ```
#[derive(Debug)]
pub struct GrayFrame {
    /// Intensity samples, row-major.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl GrayFrame {
    /// Zero-filled frame of the given dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; (width * height) as usize],
            width,
            height,
        }
    }

    /// Intensity at (x, y).
    #[inline(always)]
    #[must_use]
    pub fn intensity(&self, x: u32, y: u32) -> u8 {
        self.data[(y * self.width + x) as usize]
    }

    /// Check the declared dimensions against the backing buffer.
    ///
    /// # Errors
    /// Returns `ConvertError::DimensionMismatch` if they disagree.
    pub fn check(&self) -> Result<(), ConvertError> {
        let expected = (self.width * self.height) as usize;
        if self.data.len() != expected {
            return Err(ConvertError::DimensionMismatch {
                expected: format!("{expected} samples ({}×{})", self.width, self.height),
                actual: format!("{} samples", self.data.len()),
            });
        }
        Ok(())
    }
}

/// Three-channel color buffer, 3 bytes per pixel (RGB).
///
/// # Example
/// ```
/// use px_core::frame::RgbFrame;
/// let f = RgbFrame::new(2, 2);
/// assert_eq!(f.pixel(0, 0), (0, 0, 0));
/// ```
pub struct RgbFrame {
    /// RGB samples, row-major, 3 bytes per pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl RgbFrame {
    /// Zero-filled (black) frame of the given dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; (width * height * 3) as usize],
            width,
            height,
        }
    }

    /// Color at (x, y) as (r, g, b).
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let idx = ((y * self.width + x) * 3) as usize;
        (self.data[idx], self.data[idx + 1], self.data[idx + 2])
    }

    /// Perceptual luminance, BT.709 integer weights.
    ///
    /// # Example
    /// ```
    /// use px_core::frame::RgbFrame;
    /// let mut f = RgbFrame::new(1, 1);
    /// f.data.copy_from_slice(&[255, 255, 255]);
    /// assert_eq!(f.luminance(0, 0), 255);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn luminance(&self, x: u32, y: u32) -> u8 {
        let (r, g, b) = self.pixel(x, y);
        ((u32::from(r) * 2126 + u32::from(g) * 7152 + u32::from(b) * 722) / 10000) as u8
    }

    /// Check the declared dimensions against the backing buffer.
    ///
    /// # Errors
    /// Returns `ConvertError::DimensionMismatch` if they disagree.
    pub fn check(&self) -> Result<(), ConvertError> {
        let expected = (self.width * self.height * 3) as usize;
        if self.data.len() != expected {
            return Err(ConvertError::DimensionMismatch {
                expected: format!("{expected} bytes ({}×{} RGB)", self.width, self.height),
                actual: format!("{} bytes", self.data.len()),
            });
        }
        Ok(())
    }
}

/// Monochrome output grid: one palette character per cell, constant row
/// length across the grid.
///
/// # Example
/// ```
/// use px_core::frame::CharGrid;
/// let mut grid = CharGrid::new(3, 2);
/// grid.set(0, 0, '@');
/// assert_eq!(grid.row_string(0), "@  ");
/// ```
#[derive(Clone)]
pub struct CharGrid {
    /// Flat array of characters, row-major.
    pub cells: Vec<char>,
    /// Width in characters.
    pub width: u32,
    /// Height in characters.
    pub height: u32,
}

impl CharGrid {
    /// Space-filled grid of the given dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cells: vec![' '; (width * height) as usize],
            width,
            height,
        }
    }

    /// Set the character at (x, y).
    #[inline(always)]
    pub fn set(&mut self, x: u32, y: u32, ch: char) {
        self.cells[(y * self.width + x) as usize] = ch;
    }

    /// Character at (x, y).
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> char {
        self.cells[(y * self.width + x) as usize]
    }

    /// Row `y` as an owned string of exactly `width` characters.
    #[must_use]
    pub fn row_string(&self, y: u32) -> String {
        let start = (y * self.width) as usize;
        self.cells[start..start + self.width as usize]
            .iter()
            .collect()
    }
}

/// Color output canvas: RGB row-major byte buffer, zero-initialized so the
/// background is black wherever no glyph stroke lands.
pub struct Canvas {
    /// RGB bytes, row-major, 3 bytes per pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Black canvas of the given dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; (width * height * 3) as usize],
            width,
            height,
        }
    }

    /// Color at (x, y) as (r, g, b).
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let idx = ((y * self.width + x) * 3) as usize;
        (self.data[idx], self.data[idx + 1], self.data[idx + 2])
    }

    /// Write the color at (x, y).
    #[inline(always)]
    pub fn put(&mut self, x: u32, y: u32, rgb: (u8, u8, u8)) {
        let idx = ((y * self.width + x) * 3) as usize;
        self.data[idx] = rgb.0;
        self.data[idx + 1] = rgb.1;
        self.data[idx + 2] = rgb.2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luminance_of_white_is_full() {
        let mut f = RgbFrame::new(1, 1);
        f.data.copy_from_slice(&[255, 255, 255]);
        assert_eq!(f.luminance(0, 0), 255);
    }

    #[test]
    fn luminance_weights_green_heaviest() {
        let mut f = RgbFrame::new(3, 1);
        f.data.copy_from_slice(&[255, 0, 0, 0, 255, 0, 0, 0, 255]);
        let r = f.luminance(0, 0);
        let g = f.luminance(1, 0);
        let b = f.luminance(2, 0);
        assert!(g > r && r > b);
    }

    #[test]
    fn char_grid_rows_are_constant_length() {
        let mut grid = CharGrid::new(4, 3);
        grid.set(3, 2, '#');
        for y in 0..3 {
            assert_eq!(grid.row_string(y).chars().count(), 4);
        }
        assert_eq!(grid.get(3, 2), '#');
    }

    #[test]
    fn dimension_mismatch_detected() {
        let mut f = GrayFrame::new(2, 2);
        f.data.pop();
        assert!(matches!(
            f.check(),
            Err(ConvertError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn canvas_starts_black() {
        let canvas = Canvas::new(5, 5);
        assert_eq!(canvas.pixel(2, 2), (0, 0, 0));
    }
}
