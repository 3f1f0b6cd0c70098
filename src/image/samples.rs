//! Bounds-checked sample decoding
//!
//! The raw buffer arrives as bytes; this view decodes it into typed sample
//! values. Length is validated once at construction so per-sample access
//! never indexes out of bounds.

use crate::error::ConversionError;
use crate::types::{PixelFormat, PixelRepresentation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SampleDecoder {
    U8,
    U16,
    I16,
}

/// Read-only typed view over a raw pixel buffer
#[derive(Debug, Clone, Copy)]
pub struct SampleView<'a> {
    bytes: &'a [u8],
    decoder: SampleDecoder,
    count: usize,
}

impl<'a> SampleView<'a> {
    /// Validates that `bytes` holds at least `count` samples of the
    /// declared size. Excess trailing bytes are ignored.
    pub fn new(
        bytes: &'a [u8],
        format: &PixelFormat,
        count: usize,
    ) -> Result<Self, ConversionError> {
        let decoder = match (format.bits_allocated, format.representation) {
            (8, _) => SampleDecoder::U8,
            (16, PixelRepresentation::Unsigned) => SampleDecoder::U16,
            (16, PixelRepresentation::Signed) => SampleDecoder::I16,
            (bits, _) => return Err(ConversionError::UnsupportedBitDepth(bits)),
        };

        let expected = count * format.bytes_per_sample();
        if bytes.len() < expected {
            return Err(ConversionError::BufferTooSmall {
                expected,
                actual: bytes.len(),
            });
        }

        Ok(Self {
            bytes: &bytes[..expected],
            decoder,
            count,
        })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Decode the sample at `index` (samples are host-native byte order)
    #[inline(always)]
    #[must_use]
    pub fn get(&self, index: usize) -> f64 {
        match self.decoder {
            SampleDecoder::U8 => f64::from(self.bytes[index]),
            SampleDecoder::U16 => {
                let offset = index * 2;
                f64::from(u16::from_ne_bytes([
                    self.bytes[offset],
                    self.bytes[offset + 1],
                ]))
            }
            SampleDecoder::I16 => {
                let offset = index * 2;
                f64::from(i16::from_ne_bytes([
                    self.bytes[offset],
                    self.bytes[offset + 1],
                ]))
            }
        }
    }

    /// Iterate over all samples in buffer order
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(|index| self.get(index))
    }
}
