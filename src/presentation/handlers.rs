// HTTP request handlers
use crate::domain::session::Action;
use crate::domain::view::DashboardView;
use crate::infrastructure::html_response::DashboardPage;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Query, State},
    response::Redirect,
    Form, Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct PageQuery {
    /// Accepted and echoed back; no filtering is applied.
    pub search: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize)]
pub struct SelectForm {
    #[serde(default)]
    pub device: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Render whichever screen the session currently shows
pub async fn show_dashboard(
    Query(query): Query<PageQuery>,
    State(state): State<Arc<AppState>>,
) -> DashboardPage {
    let view = state.dashboard_service.current_view().await;
    DashboardPage::new(view, query.search)
}

/// Current view as JSON
pub async fn view_json(State(state): State<Arc<AppState>>) -> Json<DashboardView> {
    Json(state.dashboard_service.current_view().await)
}

pub async fn login(State(state): State<Arc<AppState>>, Form(form): Form<LoginForm>) -> Redirect {
    let action = Action::Login {
        username: form.username,
        password: form.password,
    };
    state.dashboard_service.dispatch(action).await;
    Redirect::to("/")
}

pub async fn logout(State(state): State<Arc<AppState>>) -> Redirect {
    state.dashboard_service.dispatch(Action::Logout).await;
    Redirect::to("/")
}

pub async fn select_device(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SelectForm>,
) -> Redirect {
    let action = state.dashboard_service.select_action(&form.device);
    state.dashboard_service.dispatch(action).await;
    Redirect::to("/")
}
