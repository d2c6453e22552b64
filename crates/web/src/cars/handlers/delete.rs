//! Delete Car Handler

use salvo::prelude::*;

use carlot_app::domain::cars::CarsServiceError;

use crate::{
    cars::errors::{car_uuid_param, into_status_error},
    extensions::*,
    pages::{CarsPage, PageReply},
};

/// Delete Car Handler
///
/// Removes the car and its photos, then renders the remaining catalog.
#[handler]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot) -> Result<PageReply, StatusError> {
    let state = depot.state_or_500()?;
    let car = car_uuid_param(req)?;

    match state.cars.delete_car(car).await {
        Ok(cars) => PageReply::page(&CarsPage::new(cars)),
        Err(CarsServiceError::NotFound) => Ok(PageReply::CarNotFoundJson),
        Err(error) => Err(into_status_error(error)),
    }
}
