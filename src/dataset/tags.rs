//! Tags consumed by this crate

use super::Tag;

pub const STUDY_DATE: Tag = Tag::new(0x0008, 0x0020);
pub const MODALITY: Tag = Tag::new(0x0008, 0x0060);
pub const SERIES_DESCRIPTION: Tag = Tag::new(0x0008, 0x103E);

pub const PATIENT_NAME: Tag = Tag::new(0x0010, 0x0010);
pub const PATIENT_ID: Tag = Tag::new(0x0010, 0x0020);

pub const ROWS: Tag = Tag::new(0x0028, 0x0010);
pub const COLUMNS: Tag = Tag::new(0x0028, 0x0011);
pub const WINDOW_CENTER: Tag = Tag::new(0x0028, 0x1050);
pub const WINDOW_WIDTH: Tag = Tag::new(0x0028, 0x1051);
