//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use carlot_app::domain::cars::{
    MockCarsService,
    records::{CarRecord, CarUuid, PhotoRecord},
};

use crate::state::State;

/// A mock that fails the test on any call not explicitly expected.
pub(crate) fn strict_cars_mock() -> MockCarsService {
    let mut cars = MockCarsService::new();

    cars.expect_list_cars().never();
    cars.expect_get_car().never();
    cars.expect_add_car().never();
    cars.expect_delete_car().never();

    cars
}

pub(crate) fn state_with_cars(cars: MockCarsService) -> Arc<State> {
    Arc::new(State::new(Arc::new(cars)))
}

pub(crate) fn cars_service(cars: MockCarsService, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state_with_cars(cars))).push(route))
}

pub(crate) fn make_car(uuid: CarUuid) -> CarRecord {
    CarRecord {
        uuid,
        vin: "1HGCM82633A004352".to_string(),
        brand: "Honda".to_string(),
        model: "Accord".to_string(),
        production_year: 2003,
        color: "blue".to_string(),
        short_description: "clean".to_string(),
        photos: vec![PhotoRecord::for_upload(uuid, "front.jpg")],
        price: Some(5000),
    }
}
