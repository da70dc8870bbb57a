use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    // An unreadable body carries no message either.
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            tracing::debug!(%rejection, "chat body rejected");
            return Err(AppError::MissingMessage);
        }
    };

    let Some(message) = payload.message() else {
        return Err(AppError::MissingMessage);
    };

    let session = state.session();
    match session.send_message(state.model.as_ref(), &message).await {
        Ok(response) => Ok(Json(ChatResponse { response })),
        Err(err) => {
            tracing::error!(error = %err, model = session.model(), "Gemini API Error");
            Err(AppError::Upstream(err))
        }
    }
}
