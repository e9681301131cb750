use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/update", get(handlers::update_record))
        .route("/domains", get(handlers::list_domains))
        .with_state(state)
}
