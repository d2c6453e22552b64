//! Car Records

use crate::{domain::cars::errors::ValidationError, uuids::TypedUuid};

/// Longest accepted short description, in characters.
pub const SHORT_DESCRIPTION_MAX_CHARS: usize = 100;

/// Car UUID
pub type CarUuid = TypedUuid<CarRecord>;

/// Car Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarRecord {
    pub uuid: CarUuid,
    pub vin: String,
    pub brand: String,
    pub model: String,
    pub production_year: i32,
    pub color: String,
    pub short_description: String,
    pub photos: Vec<PhotoRecord>,
    pub price: Option<i64>,
}

/// Photo Record
///
/// `img_url` is a filename relative to the photo directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRecord {
    pub img_url: String,
}

impl PhotoRecord {
    /// Filename a photo is stored under: `{car}-{original}`.
    #[must_use]
    pub fn for_upload(car: CarUuid, original_name: &str) -> Self {
        Self {
            img_url: format!("{car}-{original_name}"),
        }
    }
}

pub(crate) fn validate_short_description(description: &str) -> Result<(), ValidationError> {
    let length = description.chars().count();

    if length > SHORT_DESCRIPTION_MAX_CHARS {
        return Err(ValidationError::DescriptionTooLong { length });
    }

    Ok(())
}
