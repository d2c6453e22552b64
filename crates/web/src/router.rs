//! App Router

use std::{path::Path, sync::Arc, time::Duration};

use salvo::{affix_state::inject, prelude::*, serve_static::StaticDir, trailing_slash::remove_slash};

use crate::{cars, healthcheck, home, observability::RequestLogging, state::State};

/// Every route of the site, wrapped in the request logging, panic and
/// trailing-slash hoops.
pub(crate) fn app_router(
    state: Arc<State>,
    static_dir: &Path,
    slow_request: Duration,
    max_upload_bytes: usize,
) -> Router {
    Router::new()
        .hoop(RequestLogging::new(slow_request))
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(state))
        .get(home::handler)
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("cars").get(cars::index::handler))
        .push(Router::with_path("car-details/{car_id}").get(cars::get::handler))
        .push(
            Router::with_path("add-car")
                .hoop(cars::create::UploadLimit::new(max_upload_bytes))
                .get(cars::create::add_form)
                .post(cars::create::handler),
        )
        .push(Router::with_path("delete-car/{car_id}").delete(cars::delete::handler))
        .push(
            Router::with_path("static/{**path}").get(StaticDir::new(static_dir.to_path_buf())),
        )
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use tempfile::{TempDir, tempdir};
    use testresult::TestResult;

    use carlot_app::domain::cars::{CarsServiceError, MockCarsService, records::CarUuid};

    use crate::test_helpers::{make_car, state_with_cars, strict_cars_mock};

    use super::*;

    fn make_service(cars: MockCarsService, static_dir: &TempDir) -> Service {
        Service::new(app_router(
            state_with_cars(cars),
            static_dir.path(),
            Duration::from_secs(1),
            1024 * 1024,
        ))
    }

    #[tokio::test]
    async fn test_home_page_is_served() -> TestResult {
        let dir = tempdir()?;

        let res = TestClient::get("http://example.com/")
            .send(&make_service(strict_cars_mock(), &dir))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_cars_route_lists_catalog() -> TestResult {
        let dir = tempdir()?;
        let uuid = CarUuid::new();

        let mut cars = MockCarsService::new();

        cars.expect_list_cars()
            .once()
            .return_once(move || Ok(vec![make_car(uuid)]));

        cars.expect_get_car().never();
        cars.expect_add_car().never();
        cars.expect_delete_car().never();

        let mut res = TestClient::get("http://example.com/cars")
            .send(&make_service(cars, &dir))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(res.take_string().await?.contains(&uuid.to_string()));

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_car_details_is_plain_text() -> TestResult {
        let dir = tempdir()?;

        let mut cars = MockCarsService::new();

        cars.expect_get_car()
            .once()
            .return_once(|_| Err(CarsServiceError::NotFound));

        cars.expect_list_cars().never();
        cars.expect_add_car().never();
        cars.expect_delete_car().never();

        let mut res = TestClient::get(format!("http://example.com/car-details/{}", CarUuid::new()))
            .send(&make_service(cars, &dir))
            .await;

        let content_type = res
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert!(content_type.is_some_and(|v| v.starts_with("text/plain")));
        assert_eq!(res.take_string().await?, "Car not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_static_route_serves_uploaded_photos() -> TestResult {
        let dir = tempdir()?;

        std::fs::write(dir.path().join("car-front.jpg"), b"jpeg bytes")?;

        let mut res = TestClient::get("http://example.com/static/car-front.jpg")
            .send(&make_service(strict_cars_mock(), &dir))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_bytes(None).await?.to_vec(), b"jpeg bytes".to_vec());

        Ok(())
    }

    #[tokio::test]
    async fn test_static_route_decodes_escaped_filenames() -> TestResult {
        let dir = tempdir()?;

        std::fs::write(dir.path().join("car-my car #1.jpg"), b"jpeg bytes")?;

        let res = TestClient::get("http://example.com/static/car-my%20car%20%231.jpg")
            .send(&make_service(strict_cars_mock(), &dir))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_static_route_missing_file_is_404() -> TestResult {
        let dir = tempdir()?;

        let res = TestClient::get("http://example.com/static/nothing.jpg")
            .send(&make_service(strict_cars_mock(), &dir))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_responses_carry_request_id() -> TestResult {
        let dir = tempdir()?;

        let res = TestClient::get("http://example.com/healthcheck")
            .add_header("x-request-id", "req-42", true)
            .send(&make_service(strict_cars_mock(), &dir))
            .await;

        let request_id = res
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok());

        assert_eq!(request_id, Some("req-42"));

        Ok(())
    }
}
