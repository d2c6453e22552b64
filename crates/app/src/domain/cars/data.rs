//! Cars Data

use std::path::Path;

use crate::domain::cars::{
    errors::ValidationError,
    records::{CarRecord, CarUuid, PhotoRecord, validate_short_description},
};

/// New Car Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCar {
    pub vin: String,
    pub brand: String,
    pub model: String,
    pub production_year: i32,
    pub color: String,
    pub short_description: String,
    pub price: i64,
}

impl NewCar {
    /// Check the fields without building a record.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_short_description(&self.short_description)
    }

    pub(crate) fn into_record(self, uuid: CarUuid, photos: Vec<PhotoRecord>) -> CarRecord {
        CarRecord {
            uuid,
            vin: self.vin,
            brand: self.brand,
            model: self.model,
            production_year: self.production_year,
            color: self.color,
            short_description: self.short_description,
            photos,
            price: Some(self.price),
        }
    }
}

/// An uploaded photo: the client's filename and the raw file contents.
#[derive(Clone, PartialEq, Eq)]
pub struct NewPhoto {
    pub file_name: String,
    pub contents: Vec<u8>,
}

impl std::fmt::Debug for NewPhoto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewPhoto")
            .field("file_name", &self.file_name)
            .field("len", &self.contents.len())
            .finish()
    }
}

impl NewPhoto {
    /// The final path component of the uploaded filename.
    ///
    /// Browsers may send full client paths; anything that does not reduce to a
    /// plain filename is rejected.
    pub fn stored_name(&self) -> Result<&str, ValidationError> {
        let base = self
            .file_name
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or_default();

        match Path::new(base).file_name().and_then(|name| name.to_str()) {
            Some(name) if name == base => Ok(name),
            _ => Err(ValidationError::InvalidPhotoName {
                name: self.file_name.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn photo(file_name: &str) -> NewPhoto {
        NewPhoto {
            file_name: file_name.to_string(),
            contents: vec![0xFF, 0xD8],
        }
    }

    #[test]
    fn stored_name_keeps_plain_filenames() -> TestResult {
        assert_eq!(photo("front.jpg").stored_name()?, "front.jpg");

        Ok(())
    }

    #[test]
    fn stored_name_strips_client_directories() -> TestResult {
        assert_eq!(photo("C:\\Users\\me\\side.png").stored_name()?, "side.png");
        assert_eq!(photo("../../etc/rear.jpg").stored_name()?, "rear.jpg");

        Ok(())
    }

    #[test]
    fn stored_name_rejects_empty_and_dot_names() {
        for name in ["", ".", "..", "photos/"] {
            assert!(
                matches!(
                    photo(name).stored_name(),
                    Err(ValidationError::InvalidPhotoName { .. })
                ),
                "expected {name:?} to be rejected"
            );
        }
    }

    #[test]
    fn into_record_always_sets_price() {
        let car = NewCar {
            vin: "1HGCM82633A004352".to_string(),
            brand: "Honda".to_string(),
            model: "Accord".to_string(),
            production_year: 2003,
            color: "blue".to_string(),
            short_description: "clean".to_string(),
            price: 5000,
        };

        let uuid = CarUuid::new();
        let record = car.into_record(uuid, Vec::new());

        assert_eq!(record.uuid, uuid);
        assert_eq!(record.price, Some(5000));
        assert!(record.photos.is_empty());
    }
}
