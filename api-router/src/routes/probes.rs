use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::api_state::ApiState;

/// Liveness probe: always returns 200 to indicate the process is running.
pub async fn live() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Readiness probe. Degraded states (empty corpus, unavailable QA backend)
/// still serve the fallback answers, so this stays 200 and reports the
/// checks in-band.
pub async fn ready(State(state): State<ApiState>) -> impl IntoResponse {
    let qa_backend = state
        .qa
        .as_ref()
        .map_or("unavailable", |provider| provider.backend_label());

    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "checks": {
                "corpus_entries": state.corpus.len(),
                "qa_backend": qa_backend,
            }
        })),
    )
}
