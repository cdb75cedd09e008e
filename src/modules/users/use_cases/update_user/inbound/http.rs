use axum::{
    Json,
    extract::rejection::JsonRejection,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::users::adapters::inbound::http_error::ApiError;
use crate::modules::users::core::user::UpdateFields;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateFields>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return ApiError::bad_request(rejection).into_response(),
    };

    match state.users.update(&id, body).await {
        Ok(user) => {
            tracing::info!(user_id = %id, version = user.version, "user updated");
            Json(user).into_response()
        }
        Err(err) if err.is_not_found() => {
            tracing::warn!(user_id = %id, "user not found");
            ApiError::from(err).into_response()
        }
        Err(err) => {
            tracing::error!(user_id = %id, error = %err, "error trying to update user");
            ApiError::from(err).into_response()
        }
    }
}
