// src/routes/mod.rs
pub mod chat;

use std::path::Path;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::chat_handler;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn create_router(static_dir: impl AsRef<Path>) -> Router<SharedState> {
    let static_files = ServeDir::new(static_dir.as_ref());

    // Methods other than POST on /chat fall through to the static files.
    Router::new()
        .route(
            "/chat",
            post(chat_handler).fallback_service(static_files.clone()),
        )
        .route("/health", get(|| async { "OK" }))
        .fallback_service(static_files)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
