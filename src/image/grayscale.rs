//! Grayscale raster assembly
//!
//! Walks the validated sample buffer row-major and maps each sample to a
//! display byte under the resolved contrast policy.

use image::{GrayImage, Luma};

use crate::error::ConversionError;
use crate::types::{Dimensions, PixelFormat};

use super::normalization::find_min_max;
use super::samples::SampleView;
use super::windowing::{IntensityMap, WindowPolicy};

/// Produce the 8-bit raster for one frame.
///
/// The auto-range policy costs one extra scan over the buffer before the
/// mapping pass; explicit windowing maps in a single pass.
///
/// # Errors
///
/// Returns [`ConversionError::InvalidDimensions`] when either dimension is
/// zero and [`ConversionError::BufferTooSmall`] when the buffer holds fewer
/// bytes than `rows * cols * bytes_per_sample`.
pub fn convert_grayscale(
    buffer: &[u8],
    format: &PixelFormat,
    policy: &WindowPolicy,
    dimensions: Dimensions,
) -> Result<GrayImage, ConversionError> {
    if !dimensions.is_valid() {
        return Err(ConversionError::InvalidDimensions(dimensions));
    }

    let samples = SampleView::new(buffer, format, dimensions.pixel_count())?;

    let map = match policy {
        WindowPolicy::Explicit(window) => IntensityMap::windowed(*window),
        WindowPolicy::AutoRange => IntensityMap::ranged(find_min_max(samples.iter())),
    };

    let cols = usize::from(dimensions.cols);
    Ok(GrayImage::from_fn(
        u32::from(dimensions.cols),
        u32::from(dimensions.rows),
        |x, y| {
            let index = y as usize * cols + x as usize;
            Luma([map.map(samples.get(index))])
        },
    ))
}
