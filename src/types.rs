//! Domain-specific types for decoded pixel data

use std::fmt;

/// Image dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: u16,
    pub cols: u16,
}

impl Dimensions {
    #[must_use]
    pub fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }

    #[inline]
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        usize::from(self.rows) * usize::from(self.cols)
    }

    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.rows > 0 && self.cols > 0
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{cols}x{rows}", cols = self.cols, rows = self.rows)
    }
}

/// Pixel representation (0028,0103): how stored sample values are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelRepresentation {
    Unsigned,
    Signed,
}

impl fmt::Display for PixelRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsigned => write!(f, "unsigned"),
            Self::Signed => write!(f, "signed"),
        }
    }
}

/// Pixel format descriptor supplied by the external decoder alongside the
/// raw pixel buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelFormat {
    pub bits_allocated: u16,
    pub representation: PixelRepresentation,
    pub samples_per_pixel: u16,
}

impl PixelFormat {
    #[must_use]
    pub fn new(
        bits_allocated: u16,
        representation: PixelRepresentation,
        samples_per_pixel: u16,
    ) -> Self {
        Self {
            bits_allocated,
            representation,
            samples_per_pixel,
        }
    }

    #[inline]
    #[must_use]
    pub fn bytes_per_sample(&self) -> usize {
        usize::from(self.bits_allocated / 8)
    }

    #[inline]
    #[must_use]
    pub fn is_signed(&self) -> bool {
        matches!(self.representation, PixelRepresentation::Signed)
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{bits}-bit {repr}, {samples} sample(s)/pixel",
            bits = self.bits_allocated,
            repr = self.representation,
            samples = self.samples_per_pixel
        )
    }
}

/// Window center/width pair for explicit contrast windowing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowLevel {
    pub center: f64,
    pub width: f64,
}

impl WindowLevel {
    #[must_use]
    pub fn new(center: f64, width: f64) -> Self {
        Self { center, width }
    }

    /// Lower window bound; raw values at or below it map to black
    #[inline]
    #[must_use]
    pub fn low(&self) -> f64 {
        self.center - self.width / 2.0
    }

    /// Upper window bound; raw values at or above it map to white
    #[inline]
    #[must_use]
    pub fn high(&self) -> f64 {
        self.center + self.width / 2.0
    }
}

impl fmt::Display for WindowLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "C={center} W={width}",
            center = self.center,
            width = self.width
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_pixel_count() {
        assert_eq!(Dimensions::new(2, 3).pixel_count(), 6);
        assert_eq!(Dimensions::new(0, 3).pixel_count(), 0);
    }

    #[test]
    fn test_dimensions_validity() {
        assert!(Dimensions::new(1, 1).is_valid());
        assert!(!Dimensions::new(0, 512).is_valid());
        assert!(!Dimensions::new(512, 0).is_valid());
    }

    #[test]
    fn test_pixel_format_bytes_per_sample() {
        let format = PixelFormat::new(16, PixelRepresentation::Signed, 1);
        assert_eq!(format.bytes_per_sample(), 2);
        assert!(format.is_signed());

        let format = PixelFormat::new(8, PixelRepresentation::Unsigned, 1);
        assert_eq!(format.bytes_per_sample(), 1);
        assert!(!format.is_signed());
    }

    #[test]
    fn test_window_level_bounds() {
        let wl = WindowLevel::new(100.0, 20.0);
        assert_eq!(wl.low(), 90.0);
        assert_eq!(wl.high(), 110.0);
    }
}
