//! Pixel format validation
//!
//! Pure predicates over the decoder-supplied format descriptor. Rejection
//! short-circuits the pipeline before any pixel work happens.

use crate::error::ConversionError;
use crate::types::PixelFormat;

#[inline]
pub fn validate_samples_per_pixel(samples_per_pixel: u16) -> Result<(), ConversionError> {
    if samples_per_pixel != 1 {
        return Err(ConversionError::UnsupportedChannelCount(samples_per_pixel));
    }

    Ok(())
}

#[inline]
pub fn validate_bits_allocated(bits_allocated: u16) -> Result<(), ConversionError> {
    if !matches!(bits_allocated, 8 | 16) {
        return Err(ConversionError::UnsupportedBitDepth(bits_allocated));
    }

    Ok(())
}

pub fn validate_format(format: &PixelFormat) -> Result<(), ConversionError> {
    validate_samples_per_pixel(format.samples_per_pixel)?;
    validate_bits_allocated(format.bits_allocated)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PixelRepresentation;
    use assert_matches::assert_matches;

    #[test]
    fn test_accepts_supported_formats() {
        for bits in [8, 16] {
            for repr in [PixelRepresentation::Unsigned, PixelRepresentation::Signed] {
                let format = PixelFormat::new(bits, repr, 1);
                assert_matches!(validate_format(&format), Ok(()));
            }
        }
    }

    #[test]
    fn test_rejects_multi_channel() {
        let format = PixelFormat::new(8, PixelRepresentation::Unsigned, 3);
        assert_matches!(
            validate_format(&format),
            Err(ConversionError::UnsupportedChannelCount(3))
        );
    }

    #[test]
    fn test_rejects_unsupported_bit_depth() {
        let format = PixelFormat::new(32, PixelRepresentation::Unsigned, 1);
        assert_matches!(
            validate_format(&format),
            Err(ConversionError::UnsupportedBitDepth(32))
        );
    }

    #[test]
    fn test_channel_count_checked_before_bit_depth() {
        // Both invalid: the channel count rejection wins
        let format = PixelFormat::new(32, PixelRepresentation::Unsigned, 3);
        assert_matches!(
            validate_format(&format),
            Err(ConversionError::UnsupportedChannelCount(3))
        );
    }
}
