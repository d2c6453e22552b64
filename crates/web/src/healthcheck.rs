//! Liveness probe.

use salvo::prelude::*;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub(crate) struct Health {
    status: &'static str,
}

/// Reports that the process is up. The catalog is not touched.
#[handler]
pub(crate) async fn handler() -> Json<Health> {
    Json(Health { status: "ok" })
}
