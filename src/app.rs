use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/project_hours", get(handlers::project_hours))
        .route("/api/project_users", get(handlers::project_users))
        .with_state(state)
}
