pub mod dataset;
pub mod display_metadata;
pub mod error;
pub mod image;
pub mod metadata;
pub mod types;

// Re-export commonly used items
pub use dataset::{DataSet, Tag};
pub use display_metadata::print_metadata;
pub use error::ConversionError;
pub use crate::image::convert;
pub use metadata::{ImageMetadata, extract_metadata};
pub use types::{Dimensions, PixelFormat, PixelRepresentation, WindowLevel};
