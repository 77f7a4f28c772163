//! HTTP surface: `POST /ocr` plus liveness checks.

mod errors;
mod handler;
mod state;
mod types;

pub use errors::OcrError;
pub use handler::{ocr_handler, recognize_image};
pub use state::{AppState, ServerConfig};
pub use types::{ErrorResponse, OcrRequest, OcrResponse};

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

pub fn create_app(state: AppState) -> Router {
    let max_body_bytes = state.config.max_body_bytes;

    Router::new()
        .route("/ping", get(|| async { "pong" }))
        .route("/health", get(|| async { "healthy" }))
        .route("/ocr", post(ocr_handler))
        // Oversized bodies surface as a JSON rejection in the handler
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}
