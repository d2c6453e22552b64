//! Car Errors

use salvo::{Request, http::StatusError};
use tracing::{error, warn};

use carlot_app::domain::cars::{CarsServiceError, records::CarUuid};

use crate::extensions::*;

/// Route parameter carrying the car UUID.
pub(crate) const CAR_ID_PARAM: &str = "car_id";

pub(crate) fn into_status_error(error: CarsServiceError) -> StatusError {
    match error {
        CarsServiceError::NotFound => StatusError::not_found(),
        CarsServiceError::InvalidData(reason) => {
            warn!("rejected car payload: {reason}");

            StatusError::unprocessable_entity()
        }
        CarsServiceError::Storage(source) => {
            error!("car catalog storage failed: {source:?}");

            StatusError::internal_server_error()
        }
        CarsServiceError::Photos(source) => {
            error!("photo storage failed: {source:?}");

            StatusError::internal_server_error()
        }
    }
}

/// Parse the `{car_id}` path segment.
pub(crate) fn car_uuid_param(req: &Request) -> Result<CarUuid, StatusError> {
    req.param::<String>(CAR_ID_PARAM)
        .unwrap_or_default()
        .parse::<CarUuid>()
        .or_422("invalid car id")
}
