//! State

use std::sync::Arc;

use carlot_app::{context::AppContext, domain::cars::CarsService};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) cars: Arc<dyn CarsService>,
}

impl State {
    #[must_use]
    pub(crate) fn new(cars: Arc<dyn CarsService>) -> Self {
        Self { cars }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(app.cars))
    }
}
