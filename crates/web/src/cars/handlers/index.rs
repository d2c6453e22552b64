//! Car Index Handler

use salvo::prelude::*;

use crate::{
    cars::errors::into_status_error,
    extensions::*,
    pages::{CarsPage, PageReply},
};

/// Car Index Handler
///
/// Reloads the catalog and renders every car.
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<PageReply, StatusError> {
    let state = depot.state_or_500()?;

    let cars = state.cars.list_cars().await.map_err(into_status_error)?;

    PageReply::page(&CarsPage::new(cars))
}
