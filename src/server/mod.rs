pub mod handlers;
mod types;

pub use types::{ErrorResponse, ExtractionRequest};

use crate::{Result, config::Config, llm::OpenAiCompatClient};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{MethodRouter, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

fn extraction_route() -> MethodRouter<handlers::AppState> {
    post(handlers::extract).fallback(handlers::method_not_allowed)
}

/// Every path is the extraction endpoint; only the method is checked.
pub fn router(app_state: handlers::AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", extraction_route())
        .route("/*path", extraction_route())
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

pub async fn run(config: Config) -> Result<()> {
    let llm = OpenAiCompatClient::new(config.llm.clone());
    info!("Using model {} at {}", llm.model(), config.llm.base_url);

    let app_state = handlers::AppState {
        llm: Arc::new(llm),
        extraction: config.extraction.clone(),
    };

    let app = router(app_state, config.server.max_body_bytes);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
