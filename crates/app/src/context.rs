//! App Context

use std::{path::PathBuf, sync::Arc};

use thiserror::Error;

use crate::domain::cars::{
    CarsService, CarsServiceError, FileCarsService, photos::PhotoStore, repository::JsonCatalog,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to open car catalog")]
    Catalog(#[source] CarsServiceError),
}

/// Where the catalog file and uploaded photos live.
#[derive(Debug, Clone)]
pub struct StoragePaths {
    pub catalog_file: PathBuf,
    pub photos_dir: PathBuf,
}

#[derive(Clone)]
pub struct AppContext {
    pub cars: Arc<dyn CarsService>,
}

impl AppContext {
    /// Build application context backed by files on disk.
    ///
    /// # Errors
    ///
    /// Returns an error when the catalog cannot be created or loaded.
    pub async fn open(paths: StoragePaths) -> Result<Self, AppInitError> {
        let cars = FileCarsService::open(
            JsonCatalog::new(paths.catalog_file),
            PhotoStore::new(paths.photos_dir),
        )
        .await
        .map_err(AppInitError::Catalog)?;

        Ok(Self {
            cars: Arc::new(cars),
        })
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn open_prepares_storage_and_serves_empty_catalog() -> TestResult {
        let dir = tempdir()?;

        let app = AppContext::open(StoragePaths {
            catalog_file: dir.path().join("data").join("cars.json"),
            photos_dir: dir.path().join("static"),
        })
        .await?;

        assert!(app.cars.list_cars().await?.is_empty());
        assert!(dir.path().join("static").is_dir());

        Ok(())
    }

    #[tokio::test]
    async fn open_reports_unreadable_catalog() -> TestResult {
        let dir = tempdir()?;
        let catalog_file = dir.path().join("cars.json");

        std::fs::write(&catalog_file, "not json")?;

        let result = AppContext::open(StoragePaths {
            catalog_file,
            photos_dir: dir.path().to_path_buf(),
        })
        .await;

        assert!(
            matches!(result, Err(AppInitError::Catalog(_))),
            "expected catalog error, got {result:?}"
        );

        Ok(())
    }
}
