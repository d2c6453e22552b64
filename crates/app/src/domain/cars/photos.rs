//! Photo storage.

use std::{
    io::{self, ErrorKind},
    path::PathBuf,
};

use thiserror::Error;
use tokio::fs;
use tracing::{debug, warn};

use crate::domain::cars::records::PhotoRecord;

#[derive(Debug, Error)]
pub enum PhotoStoreError {
    #[error("failed to prepare photo directory {path}")]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write photo {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to remove photo {path}")]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Directory holding uploaded photos, addressed by [`PhotoRecord::img_url`].
#[derive(Debug, Clone)]
pub struct PhotoStore {
    dir: PathBuf,
}

impl PhotoStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub async fn ensure_dir(&self) -> Result<(), PhotoStoreError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| PhotoStoreError::Directory {
                path: self.dir.clone(),
                source,
            })
    }

    /// Write `contents` under the photo's filename, replacing any existing file.
    pub async fn save(&self, photo: &PhotoRecord, contents: &[u8]) -> Result<(), PhotoStoreError> {
        let path = self.dir.join(&photo.img_url);

        fs::write(&path, contents)
            .await
            .map_err(|source| PhotoStoreError::Write {
                path: path.clone(),
                source,
            })?;

        debug!(path = %path.display(), bytes = contents.len(), "photo saved");

        Ok(())
    }

    /// Remove exactly the given photos. Files that are already gone are skipped.
    pub async fn remove_all(&self, photos: &[PhotoRecord]) -> Result<(), PhotoStoreError> {
        for photo in photos {
            let path = self.dir.join(&photo.img_url);

            match fs::remove_file(&path).await {
                Ok(()) => debug!(path = %path.display(), "photo removed"),
                Err(source) if source.kind() == ErrorKind::NotFound => {
                    warn!(path = %path.display(), "photo already missing");
                }
                Err(source) => return Err(PhotoStoreError::Remove { path, source }),
            }
        }

        Ok(())
    }
}
