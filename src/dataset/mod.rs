//! Generic DICOM tag/value store
//!
//! The external decoder hands over element values as raw bytes keyed by
//! (group, element) tag pairs. This module provides the store and the
//! reading primitives the rest of the crate builds on.

mod reader;
pub mod tags;

pub use reader::{first_component, parse_number};

use std::collections::HashMap;
use std::fmt;

/// DICOM data element tag: (group, element) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag {
    pub group: u16,
    pub element: u16,
}

impl Tag {
    #[must_use]
    pub const fn new(group: u16, element: u16) -> Self {
        Self { group, element }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({group:04X},{element:04X})",
            group = self.group,
            element = self.element
        )
    }
}

/// Read-only view of decoded data element values, keyed by tag
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    elements: HashMap<Tag, Vec<u8>>,
}

impl DataSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag: Tag, value: impl Into<Vec<u8>>) {
        self.elements.insert(tag, value.into());
    }

    #[must_use]
    pub fn get(&self, tag: Tag) -> Option<&[u8]> {
        self.elements.get(&tag).map(Vec::as_slice)
    }

    /// Element value as text with trailing padding (NUL, space, CR, LF)
    /// stripped. Returns `None` when the tag is absent or has no value
    /// bytes. Leading whitespace is preserved and bytes are taken verbatim.
    #[must_use]
    pub fn trimmed_string(&self, tag: Tag) -> Option<String> {
        let value = self.get(tag)?;
        if value.is_empty() {
            return None;
        }

        let end = value
            .iter()
            .rposition(|b| !matches!(b, b'\0' | b' ' | b'\r' | b'\n'))
            .map_or(0, |pos| pos + 1);

        Some(String::from_utf8_lossy(&value[..end]).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed_string_strips_trailing_padding() {
        let mut ds = DataSet::new();
        ds.insert(tags::MODALITY, b"CT \0".as_slice());
        assert_eq!(ds.trimmed_string(tags::MODALITY).as_deref(), Some("CT"));
    }

    #[test]
    fn test_trimmed_string_strips_cr_lf() {
        let mut ds = DataSet::new();
        ds.insert(tags::MODALITY, b"MR\r\n".as_slice());
        assert_eq!(ds.trimmed_string(tags::MODALITY).as_deref(), Some("MR"));
    }

    #[test]
    fn test_trimmed_string_preserves_leading_whitespace() {
        let mut ds = DataSet::new();
        ds.insert(tags::MODALITY, b" CT".as_slice());
        assert_eq!(ds.trimmed_string(tags::MODALITY).as_deref(), Some(" CT"));
    }

    #[test]
    fn test_trimmed_string_absent_tag() {
        let ds = DataSet::new();
        assert_eq!(ds.trimmed_string(tags::MODALITY), None);
    }

    #[test]
    fn test_trimmed_string_empty_value() {
        let mut ds = DataSet::new();
        ds.insert(tags::MODALITY, Vec::new());
        assert_eq!(ds.trimmed_string(tags::MODALITY), None);
    }

    #[test]
    fn test_trimmed_string_all_padding() {
        let mut ds = DataSet::new();
        ds.insert(tags::MODALITY, b"  \0".as_slice());
        assert_eq!(ds.trimmed_string(tags::MODALITY).as_deref(), Some(""));
    }

    #[test]
    fn test_tag_display() {
        assert_eq!(Tag::new(0x0028, 0x1050).to_string(), "(0028,1050)");
        assert_eq!(Tag::new(0x0008, 0x103E).to_string(), "(0008,103E)");
    }
}
