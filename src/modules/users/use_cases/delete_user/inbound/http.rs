use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::users::adapters::inbound::http_error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.users.delete(&id).await {
        Ok(()) => {
            tracing::info!(user_id = %id, "user deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) if err.is_not_found() => {
            tracing::warn!(user_id = %id, "user not found");
            ApiError::from(err).into_response()
        }
        Err(err) => {
            tracing::error!(user_id = %id, error = %err, "error trying to delete user");
            ApiError::from(err).into_response()
        }
    }
}
