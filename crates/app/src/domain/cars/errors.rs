//! Cars service errors.

use thiserror::Error;

use crate::domain::cars::{photos::PhotoStoreError, repository::CatalogError};

/// A car or photo upload that must not be stored.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("short description is {length} characters long, at most 100 are allowed")]
    DescriptionTooLong { length: usize },

    #[error("photo filename {name:?} is not usable")]
    InvalidPhotoName { name: String },

    #[error("photo filename {name:?} was uploaded more than once")]
    DuplicatePhotoName { name: String },
}

#[derive(Debug, Error)]
pub enum CarsServiceError {
    #[error("car not found")]
    NotFound,

    #[error("invalid car data")]
    InvalidData(#[from] ValidationError),

    #[error("catalog storage error")]
    Storage(#[from] CatalogError),

    #[error("photo storage error")]
    Photos(#[from] PhotoStoreError),
}
