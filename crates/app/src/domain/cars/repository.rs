//! Cars Repository
//!
//! The catalog is a single JSON array on disk. Every load parses and validates
//! the whole file, and every save replaces the whole file.

use std::{
    io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use serde_json::{Value, ser::PrettyFormatter};
use thiserror::Error;
use tokio::fs;
use uuid::Uuid;

use crate::domain::cars::{
    errors::ValidationError,
    records::{CarRecord, CarUuid, PhotoRecord, validate_short_description},
};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write catalog {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("catalog is not a JSON array of cars")]
    Malformed(#[source] serde_json::Error),

    #[error("failed to encode catalog")]
    Encode(#[source] serde_json::Error),

    #[error("car #{index} is not a valid catalog entry")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("car #{index} has an invalid short description")]
    InvalidDescription {
        index: usize,
        #[source]
        source: ValidationError,
    },
}

#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write an empty catalog if no file exists yet.
    ///
    /// Returns `true` when a new file was created.
    pub async fn ensure_exists(&self) -> Result<bool, CatalogError> {
        if fs::try_exists(&self.path)
            .await
            .map_err(|source| self.read_error(source))?
        {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| self.write_error(source))?;
        }

        self.save(&[]).await?;

        Ok(true)
    }

    /// Read and validate every car in the catalog, in file order.
    pub async fn load(&self) -> Result<Vec<CarRecord>, CatalogError> {
        let bytes = fs::read(&self.path)
            .await
            .map_err(|source| self.read_error(source))?;

        decode_catalog(&bytes)
    }

    /// Replace the catalog with `cars`.
    ///
    /// The new contents are written to a sibling temp file first and renamed
    /// over the catalog, so readers never see a half-written file.
    pub async fn save(&self, cars: &[CarRecord]) -> Result<(), CatalogError> {
        let bytes = encode_catalog(cars)?;
        let temp_path = self.temp_path();

        if let Err(source) = fs::write(&temp_path, &bytes).await {
            return Err(self.write_error(source));
        }

        if let Err(source) = fs::rename(&temp_path, &self.path).await {
            _ = fs::remove_file(&temp_path).await;

            return Err(self.write_error(source));
        }

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map_or_else(|| "catalog".into(), |name| name.to_string_lossy());

        self.path
            .with_file_name(format!(".{file_name}.{}.tmp", Uuid::new_v4().simple()))
    }

    fn read_error(&self, source: io::Error) -> CatalogError {
        CatalogError::Read {
            path: self.path.clone(),
            source,
        }
    }

    fn write_error(&self, source: io::Error) -> CatalogError {
        CatalogError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

#[derive(Serialize)]
struct StoredCar<'a> {
    id: CarUuid,
    vin: &'a str,
    brand: &'a str,
    model: &'a str,
    production_year: i32,
    color: &'a str,
    short_description: &'a str,
    photos: Vec<StoredPhoto<'a>>,
    price: Option<i64>,
}

#[derive(Serialize)]
struct StoredPhoto<'a> {
    img_url: &'a str,
}

impl<'a> From<&'a CarRecord> for StoredCar<'a> {
    fn from(car: &'a CarRecord) -> Self {
        StoredCar {
            id: car.uuid,
            vin: &car.vin,
            brand: &car.brand,
            model: &car.model,
            production_year: car.production_year,
            color: &car.color,
            short_description: &car.short_description,
            photos: car
                .photos
                .iter()
                .map(|photo| StoredPhoto {
                    img_url: &photo.img_url,
                })
                .collect(),
            price: car.price,
        }
    }
}

/// One catalog entry as read from disk. Absent or null `photos` and `price`
/// load as empty.
#[derive(Deserialize)]
struct LoadedCar {
    id: CarUuid,
    vin: String,
    brand: String,
    model: String,
    production_year: i32,
    color: String,
    short_description: String,
    #[serde(default)]
    photos: Option<Vec<LoadedPhoto>>,
    #[serde(default)]
    price: Option<i64>,
}

#[derive(Deserialize)]
struct LoadedPhoto {
    img_url: String,
}

impl From<LoadedCar> for CarRecord {
    fn from(car: LoadedCar) -> Self {
        CarRecord {
            uuid: car.id,
            vin: car.vin,
            brand: car.brand,
            model: car.model,
            production_year: car.production_year,
            color: car.color,
            short_description: car.short_description,
            photos: car
                .photos
                .unwrap_or_default()
                .into_iter()
                .map(|photo| PhotoRecord {
                    img_url: photo.img_url,
                })
                .collect(),
            price: car.price,
        }
    }
}

fn encode_catalog(cars: &[CarRecord]) -> Result<Vec<u8>, CatalogError> {
    let stored: Vec<StoredCar<'_>> = cars.iter().map(StoredCar::from).collect();

    let mut bytes = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut bytes, PrettyFormatter::with_indent(b"    "));

    stored
        .serialize(&mut serializer)
        .map_err(CatalogError::Encode)?;

    Ok(bytes)
}

pub(crate) fn decode_catalog(bytes: &[u8]) -> Result<Vec<CarRecord>, CatalogError> {
    let entries: Vec<Value> = serde_json::from_slice(bytes).map_err(CatalogError::Malformed)?;

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| decode_car(index, entry))
        .collect()
}

fn decode_car(index: usize, entry: Value) -> Result<CarRecord, CatalogError> {
    let car: LoadedCar = serde_json::from_value(entry)
        .map_err(|source| CatalogError::InvalidRecord { index, source })?;

    validate_short_description(&car.short_description)
        .map_err(|source| CatalogError::InvalidDescription { index, source })?;

    Ok(car.into())
}
