//! Request-level logging and request IDs.

use std::time::{Duration, Instant};

use salvo::{
    Request, handler,
    http::{StatusCode, header::HeaderValue},
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::{Instrument as _, error, info, warn};
use uuid::Uuid;

pub(crate) const REQUEST_ID_HEADER: &str = "x-request-id";
const REQUEST_ID_DEPOT_KEY: &str = "request_id";

/// Wraps each request in an `http.request` span and logs how it ended.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequestLogging {
    slow_threshold: Duration,
}

impl RequestLogging {
    pub(crate) fn new(slow_threshold: Duration) -> Self {
        Self { slow_threshold }
    }
}

#[handler]
impl RequestLogging {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        let started = Instant::now();

        let request_id = resolve_request_id(req.header::<String>(REQUEST_ID_HEADER));

        depot.insert(REQUEST_ID_DEPOT_KEY, request_id.clone());

        set_request_id_header(res, &request_id);

        let method = req.method().to_string();
        let path = req.uri().path().to_owned();

        let span = tracing::info_span!(
            parent: None,
            "http.request",
            request_id = %request_id,
            method = %method,
            path = %path,
            status = tracing::field::Empty,
            duration_ms = tracing::field::Empty
        );

        ctrl.call_next(req, depot, res)
            .instrument(span.clone())
            .await;

        let duration = started.elapsed();
        let status = res.status_code.unwrap_or(StatusCode::OK);
        let duration_ms = duration.as_millis();

        span.record("status", status.as_u16());
        span.record("duration_ms", duration_ms);

        span.in_scope(|| {
            info!(status = status.as_u16(), duration_ms, "request.completed");

            if status.is_server_error() {
                error!(status = status.as_u16(), method = %method, path = %path, "server error response");
            } else if status.is_client_error() {
                warn!(status = status.as_u16(), method = %method, path = %path, "client error response");
            }

            if duration > self.slow_threshold {
                warn!(
                    method = %method,
                    path = %path,
                    duration_ms,
                    threshold_ms = self.slow_threshold.as_millis(),
                    "slow request detected"
                );
            }
        });
    }
}

fn resolve_request_id(header_value: Option<String>) -> String {
    header_value
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| Uuid::now_v7().to_string())
}

fn set_request_id_header(res: &mut Response, request_id: &str) {
    match HeaderValue::from_str(request_id) {
        Ok(value) => {
            res.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        Err(source) => {
            warn!(request_id, "could not encode request id for response header: {source}");
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::{prelude::*, test::TestClient};

    use super::*;

    #[handler]
    async fn ping() -> &'static str {
        "ok"
    }

    fn service() -> Service {
        Service::new(
            Router::new()
                .hoop(RequestLogging::new(Duration::from_secs(1)))
                .push(Router::with_path("ping").get(ping)),
        )
    }

    fn request_id_of(res: &Response) -> Option<String> {
        res.headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    }

    #[tokio::test]
    async fn echoes_incoming_request_id() {
        let res = TestClient::get("http://example.com/ping")
            .add_header(REQUEST_ID_HEADER, "abc-123", true)
            .send(&service())
            .await;

        assert_eq!(request_id_of(&res).as_deref(), Some("abc-123"));
    }

    #[tokio::test]
    async fn generates_request_id_when_missing() {
        let res = TestClient::get("http://example.com/ping")
            .send(&service())
            .await;

        let request_id = request_id_of(&res).unwrap_or_default();

        assert!(Uuid::parse_str(&request_id).is_ok(), "got {request_id:?}");
    }

    #[test]
    fn blank_request_id_is_replaced() {
        assert_ne!(resolve_request_id(Some("  ".to_string())), "  ");
    }
}
