// --- File: crates/bookable_scheduling/src/routes.rs ---

use crate::handlers::{get_availability_handler, get_bookable_dates_handler, SchedulingState};
use axum::{routing::get, Router};
use bookable_common::services::{BoxedError, SchedulingStore};
use bookable_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing all routes for the scheduling feature.
///
/// The store handle is constructed once by the caller and shared by reference.
pub fn routes(config: Arc<AppConfig>, store: Arc<dyn SchedulingStore<Error = BoxedError>>) -> Router {
    let state = Arc::new(SchedulingState { config, store });

    Router::new()
        .route("/availability", get(get_availability_handler))
        .route("/dates", get(get_bookable_dates_handler))
        .with_state(state)
}
