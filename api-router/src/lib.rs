use axum::{
    extract::FromRef,
    routing::{get, post},
    Router,
};

use api_state::ApiState;
use routes::{ask::ask, probes::live, probes::ready};

pub mod api_state;
mod routes;

/// The question-answering surface: one form-encoded endpoint, answers as
/// JSON-wrapped HTML fragments. Mounted at the application root.
pub fn ask_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    ApiState: FromRef<S>,
{
    Router::new().route("/ask", post(ask))
}

/// Probe endpoints for k8s/systemd, version 1. Mounted under /api/v1.
pub fn api_routes_v1<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    ApiState: FromRef<S>,
{
    Router::new()
        .route("/ready", get(ready))
        .route("/live", get(live))
}
