//! Car catalog domain: records, JSON file storage, photo storage and the
//! catalog service used by the web front end.

pub mod context;
pub mod domain;

mod uuids;

pub use uuids::TypedUuid;
