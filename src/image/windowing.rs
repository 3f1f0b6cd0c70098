//! Window/level resolution and per-sample intensity mapping
//!
//! Window Center (0028,1050) and Window Width (0028,1051) select a linear
//! contrast stretch over `center ± width/2`. When either hint is missing or
//! malformed the pipeline degrades to automatic full-range normalization;
//! that fallback is deliberate policy, not an error.

use crate::dataset::{DataSet, Tag, first_component, parse_number, tags};
use crate::types::WindowLevel;

use super::normalization::{ValueRange, scale_to_byte};

/// Window widths at or below this are treated as absent
const MIN_WINDOW_WIDTH: f64 = 1e-9;

/// Contrast policy resolved once per conversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowPolicy {
    /// Use the window center/width from the data set
    Explicit(WindowLevel),
    /// Scan the buffer and stretch its observed min..max to 0..255
    AutoRange,
}

/// Resolve the contrast policy from windowing metadata.
///
/// Falls back to [`WindowPolicy::AutoRange`] when either tag is absent,
/// fails to parse, or the width is degenerate. Multi-valued (per-frame)
/// window settings contribute only their first component.
#[must_use]
pub fn resolve_window(dataset: &DataSet) -> WindowPolicy {
    let center = numeric_tag_value(dataset, tags::WINDOW_CENTER);
    let width = numeric_tag_value(dataset, tags::WINDOW_WIDTH);

    match (center, width) {
        (Some(center), Some(width)) if width > MIN_WINDOW_WIDTH => {
            WindowPolicy::Explicit(WindowLevel::new(center, width))
        }
        _ => WindowPolicy::AutoRange,
    }
}

fn numeric_tag_value(dataset: &DataSet, tag: Tag) -> Option<f64> {
    let value = dataset.trimmed_string(tag)?;
    parse_number(first_component(&value))
}

/// Mapping from raw sample value to display byte, with the policy's
/// parameters already baked in
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntensityMap {
    /// Linear ramp between the window bounds, saturating outside them
    Windowed { low: f64, high: f64 },
    /// Linear stretch of the observed value range
    Ranged(ValueRange),
}

impl IntensityMap {
    #[must_use]
    pub fn windowed(window: WindowLevel) -> Self {
        Self::Windowed {
            low: window.low(),
            high: window.high(),
        }
    }

    #[must_use]
    pub fn ranged(range: ValueRange) -> Self {
        Self::Ranged(range)
    }

    #[inline(always)]
    #[must_use]
    // Hot path: called for every pixel during conversion
    pub fn map(&self, p: f64) -> u8 {
        match *self {
            Self::Windowed { low, high } => {
                if p <= low {
                    0
                } else if p >= high {
                    255
                } else {
                    scale_to_byte((p - low) / (high - low))
                }
            }
            Self::Ranged(range) => scale_to_byte((p - range.min) / range.span()),
        }
    }
}
