//! Cars

pub mod data;
pub mod errors;
pub mod photos;
pub mod records;
pub mod repository;
pub mod service;

pub use errors::{CarsServiceError, ValidationError};
pub use service::*;
