//! Pixel intensity mapping pipeline
//!
//! Converts one decoded monochrome frame to an 8-bit grayscale raster:
//! validate the pixel format, resolve the contrast policy from windowing
//! metadata, then map every sample to a display byte.

mod grayscale;
mod normalization;
mod samples;
mod validation;
mod windowing;

pub use grayscale::convert_grayscale;
pub use normalization::{ValueRange, find_min_max};
pub use samples::SampleView;
pub use validation::validate_format;
pub use windowing::{IntensityMap, WindowPolicy, resolve_window};

use image::GrayImage;

use crate::dataset::DataSet;
use crate::error::ConversionError;
use crate::types::{Dimensions, PixelFormat};

/// Convert one decoded frame to an 8-bit grayscale raster.
///
/// The conversion is pure and reentrant: the same inputs always yield the
/// same raster or the same error, and the caller's buffer is never
/// modified.
///
/// # Errors
///
/// Returns a [`ConversionError`] when the pixel format is unsupported, a
/// dimension is zero, or the buffer is shorter than the dimensions require.
/// Missing or malformed windowing metadata is not an error; it selects
/// automatic full-range normalization instead.
pub fn convert(
    buffer: &[u8],
    format: &PixelFormat,
    dataset: &DataSet,
    dimensions: Dimensions,
) -> Result<GrayImage, ConversionError> {
    validate_format(format)?;

    let policy = resolve_window(dataset);
    convert_grayscale(buffer, format, &policy, dimensions)
}
