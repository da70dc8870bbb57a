// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorBody;
use crate::services::chat_session::ModelError;

pub const MESSAGE_REQUIRED: &str = "Message body is required.";
pub const UPSTREAM_FAILURE: &str = "An internal AI error has occurred. How disappointing.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("message body is required")]
    MissingMessage,

    #[error("upstream failure: {0}")]
    Upstream(#[from] ModelError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Upstream causes stay in the log; callers get one generic message.
        let (status, error) = match &self {
            AppError::MissingMessage => (StatusCode::BAD_REQUEST, MESSAGE_REQUIRED),
            AppError::Upstream(_) => (StatusCode::INTERNAL_SERVER_ERROR, UPSTREAM_FAILURE),
        };
        (status, Json(ErrorBody { error: error.to_string() })).into_response()
    }
}
