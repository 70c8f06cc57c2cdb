use std::path::Path;

use axum::{extract::FromRef, http::StatusCode, routing::get, Router};
use tower_http::services::ServeDir;

use html_state::HtmlState;
use routes::index::index_handler;

pub mod error;
pub mod html_state;
mod routes;

/// Html routes: the landing page plus its static assets.
pub fn html_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    HtmlState: FromRef<S>,
{
    let assets_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");

    Router::new()
        .route("/", get(index_handler))
        // Chrome probes this whenever devtools opens; answer quietly
        // instead of filling the logs with 404s.
        .route(
            "/.well-known/appspecific/com.chrome.devtools.json",
            get(|| async { StatusCode::NO_CONTENT }),
        )
        .nest_service("/assets", ServeDir::new(assets_dir))
}
