//! Storage Config

use std::path::PathBuf;

use clap::Args;

use carlot_app::context::StoragePaths;

/// Catalog and static file locations.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// JSON file holding the car catalog
    #[arg(long, env = "DATA_FILE", default_value = "data/cars.json")]
    pub data_file: PathBuf,

    /// Directory served under `/static`; uploaded photos are stored here too
    #[arg(long, env = "STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    /// Largest accepted add-car request body, photos included, in bytes
    #[arg(long, env = "MAX_UPLOAD_BYTES", default_value_t = 16 * 1024 * 1024)]
    pub max_upload_bytes: usize,
}

impl StorageConfig {
    /// Paths handed to the application context.
    #[must_use]
    pub fn storage_paths(&self) -> StoragePaths {
        StoragePaths {
            catalog_file: self.data_file.clone(),
            photos_dir: self.static_dir.clone(),
        }
    }
}
