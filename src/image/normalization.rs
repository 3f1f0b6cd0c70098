//! Full-range normalization support

/// Observed value range of a sample buffer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// A degenerate range (constant buffer, `max <= min`) is widened to
    /// span 1 so the normalization divisor is never zero.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let max = if max > min { max } else { min + 1.0 };
        Self { min, max }
    }

    #[inline]
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Single pass over all samples to find the observed minimum and maximum
#[must_use]
pub fn find_min_max(samples: impl Iterator<Item = f64>) -> ValueRange {
    let (min, max) = samples.fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(min, max), val| (min.min(val), max.max(val)),
    );

    ValueRange::new(min, max)
}

/// Convert a normalized fraction to a display byte, rounding half away
/// from zero and clamping against floating-point spill outside [0,1]
#[inline]
#[must_use]
pub(crate) fn scale_to_byte(t: f64) -> u8 {
    (t * 255.0).round().clamp(0.0, 255.0) as u8
}
