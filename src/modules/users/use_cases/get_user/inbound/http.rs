use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::users::adapters::inbound::http_error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.users.get(&id).await {
        Ok(user) => {
            tracing::info!(user_id = %user.id, version = user.version, "get user succeeded");
            Json(user).into_response()
        }
        Err(err) if err.is_not_found() => {
            tracing::warn!(user_id = %id, "user not found");
            ApiError::from(err).into_response()
        }
        Err(err) => {
            tracing::error!(user_id = %id, error = %err, "error trying to get user");
            ApiError::from(err).into_response()
        }
    }
}
