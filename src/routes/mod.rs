//! Route modules for Mindmap Server

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub mod health;
pub mod mindmap;

/// Room for multipart boundaries and headers on top of the file itself
const MULTIPART_OVERHEAD: usize = 1024 * 1024;

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    let body_limit =
        usize::try_from(state.config().upload.max_file_size).unwrap_or(usize::MAX);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/health", get(health::health_check))
        .nest("/api/v1/mindmap", mindmap::router())
        .layer(DefaultBodyLimit::max(body_limit.saturating_add(MULTIPART_OVERHEAD)))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
