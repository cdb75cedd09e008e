use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::users::adapters::inbound::http_error::ApiError;
use crate::modules::users::core::user::NewUser;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<NewUser>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return ApiError::bad_request(rejection).into_response(),
    };

    match state.users.create(body).await {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "user created");
            (StatusCode::CREATED, Json(user)).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "error trying to create user");
            ApiError::from(err).into_response()
        }
    }
}
