use std::sync::Arc;

use api_router::{api_routes_v1, api_state::ApiState, ask_routes};
use axum::{extract::FromRef, Router};
use common::{corpus::Corpus, utils::config::get_config};
use html_router::{html_routes, html_state::HtmlState};
use qa_pipeline::QaProvider;
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();

    // Get config
    let config = get_config()?;

    // Both the corpus and the QA capability degrade to inert states on
    // failure; the service keeps serving its fixed fallback answers.
    let corpus = Arc::new(Corpus::load(&config.corpus_path, config.max_context_chars));

    let qa = match QaProvider::from_config(&config) {
        Ok(provider) => {
            info!(backend = provider.backend_label(), "QA provider initialized");
            Some(Arc::new(provider))
        }
        Err(e) => {
            error!("QA provider failed to initialize: {e}");
            None
        }
    };

    let api_state = ApiState::new(&config, corpus, qa);
    let html_state = HtmlState::new(config.clone())?;

    // Create Axum router
    let app = Router::new()
        .merge(ask_routes())
        .nest("/api/v1", api_routes_v1())
        .merge(html_routes())
        .layer(CorsLayer::permissive())
        .with_state(AppState {
            api_state,
            html_state,
        });

    info!("Starting server listening on 0.0.0.0:{}", config.http_port);
    let serve_address = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(serve_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[derive(Clone, FromRef)]
struct AppState {
    api_state: ApiState,
    html_state: HtmlState,
}
