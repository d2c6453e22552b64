//! Get Car Handler

use salvo::prelude::*;

use carlot_app::domain::cars::CarsServiceError;

use crate::{
    cars::errors::{car_uuid_param, into_status_error},
    extensions::*,
    pages::{CarDetailsPage, PageReply},
};

/// Get Car Handler
///
/// Renders one car from the loaded catalog, or a plain-text 404.
#[handler]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot) -> Result<PageReply, StatusError> {
    let state = depot.state_or_500()?;
    let car = car_uuid_param(req)?;

    match state.cars.get_car(car).await {
        Ok(car) => PageReply::page(&CarDetailsPage { car: car.into() }),
        Err(CarsServiceError::NotFound) => Ok(PageReply::CarNotFoundText),
        Err(error) => Err(into_status_error(error)),
    }
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use carlot_app::domain::cars::{MockCarsService, records::CarUuid};

    use crate::test_helpers::{cars_service, make_car, strict_cars_mock};

    use super::*;

    fn make_service(cars: MockCarsService) -> Service {
        cars_service(cars, Router::with_path("car-details/{car_id}").get(handler))
    }

    #[tokio::test]
    async fn test_get_renders_car_details() -> TestResult {
        let uuid = CarUuid::new();
        let car = make_car(uuid);

        let mut cars = MockCarsService::new();

        cars.expect_get_car()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| Ok(car));

        cars.expect_list_cars().never();
        cars.expect_add_car().never();
        cars.expect_delete_car().never();

        let mut res = TestClient::get(format!("http://example.com/car-details/{uuid}"))
            .send(&make_service(cars))
            .await;

        let body = res.take_string().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.contains("1HGCM82633A004352"));
        assert!(body.contains(&format!("/static/{uuid}-front.jpg")));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_car_returns_plain_404() -> TestResult {
        let uuid = CarUuid::new();

        let mut cars = MockCarsService::new();

        cars.expect_get_car()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(|_| Err(CarsServiceError::NotFound));

        cars.expect_list_cars().never();
        cars.expect_add_car().never();
        cars.expect_delete_car().never();

        let mut res = TestClient::get(format!("http://example.com/car-details/{uuid}"))
            .send(&make_service(cars))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(res.take_string().await?, "Car not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_malformed_id_returns_422() {
        let res = TestClient::get("http://example.com/car-details/123")
            .send(&make_service(strict_cars_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));
    }
}
