//! Descriptive metadata passthrough
//!
//! These fields are extracted for display alongside the raster; none of
//! them participates in the intensity mapping itself. Absent or malformed
//! values simply stay `None`.

use crate::dataset::{DataSet, Tag, first_component, parse_number, tags};
use crate::types::Dimensions;

/// Display metadata for one frame
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageMetadata {
    pub patient_name: Option<String>,
    pub patient_id: Option<String>,
    pub modality: Option<String>,
    pub study_date: Option<String>,
    pub series_description: Option<String>,
    pub dimensions: Option<Dimensions>,
}

impl ImageMetadata {
    #[must_use]
    pub fn has_info(&self) -> bool {
        self.patient_name.is_some()
            || self.patient_id.is_some()
            || self.modality.is_some()
            || self.study_date.is_some()
            || self.series_description.is_some()
            || self.dimensions.is_some()
    }
}

/// Extract the descriptive fields from a data set
#[must_use]
pub fn extract_metadata(dataset: &DataSet) -> ImageMetadata {
    let dimensions = match (
        dimension_value(dataset, tags::ROWS),
        dimension_value(dataset, tags::COLUMNS),
    ) {
        (Some(rows), Some(cols)) => Some(Dimensions::new(rows, cols)),
        _ => None,
    };

    ImageMetadata {
        patient_name: dataset.trimmed_string(tags::PATIENT_NAME),
        patient_id: dataset.trimmed_string(tags::PATIENT_ID),
        modality: dataset.trimmed_string(tags::MODALITY),
        study_date: dataset.trimmed_string(tags::STUDY_DATE),
        series_description: dataset.trimmed_string(tags::SERIES_DESCRIPTION),
        dimensions,
    }
}

fn dimension_value(dataset: &DataSet, tag: Tag) -> Option<u16> {
    let value = dataset.trimmed_string(tag)?;
    let parsed = parse_number(first_component(&value))?;

    (parsed >= 0.0 && parsed <= f64::from(u16::MAX)).then(|| parsed as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_present_fields() {
        let mut ds = DataSet::new();
        ds.insert(tags::PATIENT_NAME, b"DOE^JANE ".as_slice());
        ds.insert(tags::PATIENT_ID, b"P-1234\0".as_slice());
        ds.insert(tags::MODALITY, b"CT".as_slice());
        ds.insert(tags::STUDY_DATE, b"20240115".as_slice());
        ds.insert(tags::SERIES_DESCRIPTION, b"AXIAL HEAD\r\n".as_slice());
        ds.insert(tags::ROWS, b"512".as_slice());
        ds.insert(tags::COLUMNS, b"512".as_slice());

        let metadata = extract_metadata(&ds);
        assert!(metadata.has_info());
        assert_eq!(metadata.patient_name.as_deref(), Some("DOE^JANE"));
        assert_eq!(metadata.patient_id.as_deref(), Some("P-1234"));
        assert_eq!(metadata.modality.as_deref(), Some("CT"));
        assert_eq!(metadata.study_date.as_deref(), Some("20240115"));
        assert_eq!(metadata.series_description.as_deref(), Some("AXIAL HEAD"));
        assert_eq!(metadata.dimensions, Some(Dimensions::new(512, 512)));
    }

    #[test]
    fn test_empty_dataset_yields_no_info() {
        let metadata = extract_metadata(&DataSet::new());
        assert!(!metadata.has_info());
        assert_eq!(metadata, ImageMetadata::default());
    }

    #[test]
    fn test_dimensions_require_both_tags() {
        let mut ds = DataSet::new();
        ds.insert(tags::ROWS, b"512".as_slice());

        let metadata = extract_metadata(&ds);
        assert_eq!(metadata.dimensions, None);
    }

    #[test]
    fn test_malformed_dimension_stays_none() {
        let mut ds = DataSet::new();
        ds.insert(tags::ROWS, b"lots".as_slice());
        ds.insert(tags::COLUMNS, b"512".as_slice());

        let metadata = extract_metadata(&ds);
        assert_eq!(metadata.dimensions, None);
    }
}
