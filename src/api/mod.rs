use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::service::payload::{read_handler, save_handler};
use crate::utils::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/save", post(save_handler))
        .route("/read", get(read_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
