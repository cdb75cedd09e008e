use axum::{
    Extension, Json, Router,
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::users::use_cases::create_user::inbound::http as create_http;
use crate::modules::users::use_cases::delete_user::inbound::http as delete_http;
use crate::modules::users::use_cases::get_user::inbound::http as get_http;
use crate::modules::users::use_cases::update_user::inbound::http as update_http;
use crate::shell::graphql::{self, graphiql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = graphql::schema(state.clone());

    Router::new()
        .route("/ping", get(ping))
        .route("/users", post(create_http::handle))
        .route(
            "/users/{id}",
            get(get_http::handle)
                .patch(update_http::handle)
                .delete(delete_http::handle),
        )
        .route("/gql", get(graphiql).post(graphql::graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn ping() -> Json<Value> {
    Json(json!({ "message": "pong" }))
}
