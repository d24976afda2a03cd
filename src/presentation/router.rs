// Router assembly
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    health_check, login, logout, select_device, show_dashboard, view_json,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub fn build(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(show_dashboard))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/devices/select", post(select_device))
        .route("/api/view", get(view_json))
        .route("/healthz", get(health_check))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
