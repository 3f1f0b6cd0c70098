//! Conversion error taxonomy
//!
//! Every failure mode of the conversion pipeline is a normal, recoverable
//! return value. Rejection of an unsupported format is an expected outcome
//! for some inputs, not a fault of the pipeline.

use crate::types::Dimensions;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Only single-channel (grayscale) pixel data is supported
    #[error("unsupported samples per pixel: {0} (only 1-channel grayscale is supported)")]
    UnsupportedChannelCount(u16),

    /// Only 8-bit and 16-bit samples are supported
    #[error("unsupported bits allocated: {0} (expected 8 or 16)")]
    UnsupportedBitDepth(u16),

    /// The supplied buffer holds fewer bytes than the dimensions require
    #[error("pixel buffer too small: got {actual} bytes, need {expected}")]
    BufferTooSmall { expected: usize, actual: usize },

    /// Rows and columns must both be non-zero
    #[error("invalid image dimensions: {0}")]
    InvalidDimensions(Dimensions),
}
