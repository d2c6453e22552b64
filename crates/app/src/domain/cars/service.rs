//! Cars service.

use std::collections::HashSet;

use async_trait::async_trait;
use mockall::automock;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::cars::{
    data::{NewCar, NewPhoto},
    errors::{CarsServiceError, ValidationError},
    photos::PhotoStore,
    records::{CarRecord, CarUuid, PhotoRecord},
    repository::JsonCatalog,
};

/// Cars service backed by a JSON catalog file and a photo directory.
///
/// The in-memory catalog is replaced by a full reload from disk on every
/// list, add and delete. The lock is held for each whole operation, so
/// concurrent mutations are applied one at a time.
#[derive(Debug)]
pub struct FileCarsService {
    catalog: JsonCatalog,
    photos: PhotoStore,
    cars: Mutex<Vec<CarRecord>>,
}

impl FileCarsService {
    /// Prepare the photo directory and catalog file, then load the catalog.
    pub async fn open(catalog: JsonCatalog, photos: PhotoStore) -> Result<Self, CarsServiceError> {
        photos.ensure_dir().await?;

        if catalog.ensure_exists().await? {
            info!(path = %catalog.path().display(), "created empty car catalog");
        }

        let cars = catalog.load().await?;

        info!(
            path = %catalog.path().display(),
            cars = cars.len(),
            "car catalog loaded"
        );

        Ok(Self {
            catalog,
            photos,
            cars: Mutex::new(cars),
        })
    }

    async fn write_new_car(
        &self,
        uploads: &[(PhotoRecord, &[u8])],
        cars: &[CarRecord],
    ) -> Result<(), CarsServiceError> {
        for (record, contents) in uploads {
            self.photos.save(record, contents).await?;
        }

        self.catalog.save(cars).await?;

        Ok(())
    }

    async fn reload(&self, cars: &mut Vec<CarRecord>) -> Result<(), CarsServiceError> {
        *cars = self.catalog.load().await?;

        debug!(cars = cars.len(), "car catalog reloaded");

        Ok(())
    }
}

#[async_trait]
impl CarsService for FileCarsService {
    async fn list_cars(&self) -> Result<Vec<CarRecord>, CarsServiceError> {
        let mut cars = self.cars.lock().await;

        self.reload(&mut cars).await?;

        Ok(cars.clone())
    }

    async fn get_car(&self, car: CarUuid) -> Result<CarRecord, CarsServiceError> {
        self.cars
            .lock()
            .await
            .iter()
            .find(|record| record.uuid == car)
            .cloned()
            .ok_or(CarsServiceError::NotFound)
    }

    async fn add_car(
        &self,
        car: NewCar,
        photos: Vec<NewPhoto>,
    ) -> Result<Vec<CarRecord>, CarsServiceError> {
        car.validate()?;

        let uuid = CarUuid::new();
        let uploads = photo_uploads(uuid, &photos)?;
        let records: Vec<PhotoRecord> = uploads.iter().map(|(record, _)| record.clone()).collect();

        let mut cars = self.cars.lock().await;

        let mut updated = cars.clone();
        updated.push(car.into_record(uuid, records.clone()));

        if let Err(error) = self.write_new_car(&uploads, &updated).await {
            if let Err(cleanup) = self.photos.remove_all(&records).await {
                warn!(car = %uuid, "failed to remove photos of a car that was not added: {cleanup}");
            }

            return Err(error);
        }

        *cars = updated;

        self.reload(&mut cars).await?;

        info!(car = %uuid, photos = records.len(), "car added");

        Ok(cars.clone())
    }

    async fn delete_car(&self, car: CarUuid) -> Result<Vec<CarRecord>, CarsServiceError> {
        let mut cars = self.cars.lock().await;

        self.reload(&mut cars).await?;

        let position = cars
            .iter()
            .position(|record| record.uuid == car)
            .ok_or(CarsServiceError::NotFound)?;

        let mut remaining = cars.clone();
        let removed = remaining.remove(position);

        self.catalog.save(&remaining).await?;

        *cars = remaining;

        self.photos.remove_all(&removed.photos).await?;

        info!(car = %car, photos = removed.photos.len(), "car deleted");

        Ok(cars.clone())
    }
}

/// Pair each upload with the record it is stored under. Every upload must
/// reduce to a distinct filename.
fn photo_uploads(
    car: CarUuid,
    photos: &[NewPhoto],
) -> Result<Vec<(PhotoRecord, &[u8])>, ValidationError> {
    let mut names = HashSet::with_capacity(photos.len());

    photos
        .iter()
        .map(|photo| {
            let name = photo.stored_name()?;

            if !names.insert(name) {
                return Err(ValidationError::DuplicatePhotoName {
                    name: name.to_string(),
                });
            }

            Ok((PhotoRecord::for_upload(car, name), photo.contents.as_slice()))
        })
        .collect()
}

#[automock]
#[async_trait]
pub trait CarsService: Send + Sync {
    /// Reloads the catalog and returns every car in file order.
    async fn list_cars(&self) -> Result<Vec<CarRecord>, CarsServiceError>;

    /// Looks a car up in the most recently loaded catalog.
    async fn get_car(&self, car: CarUuid) -> Result<CarRecord, CarsServiceError>;

    /// Stores a new car and its photos, returning the reloaded catalog.
    async fn add_car(
        &self,
        car: NewCar,
        photos: Vec<NewPhoto>,
    ) -> Result<Vec<CarRecord>, CarsServiceError>;

    /// Removes a car and its photos, returning the remaining catalog.
    async fn delete_car(&self, car: CarUuid) -> Result<Vec<CarRecord>, CarsServiceError>;
}
