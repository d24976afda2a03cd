// HTML rendering of the dashboard view
use crate::domain::view::DashboardView;
use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

pub const PAGE_TITLE: &str = "Battery Monitoring Dashboard";

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub heading: &'static str,
    pub search: String,
    pub view: DashboardView,
}

impl DashboardPage {
    pub fn new(view: DashboardView, search: Option<String>) -> Self {
        Self {
            heading: PAGE_TITLE,
            search: search.unwrap_or_default(),
            view,
        }
    }
}

impl IntoResponse for DashboardPage {
    fn into_response(self) -> Response {
        match self.render() {
            Ok(body) => Html(body).into_response(),
            Err(e) => {
                tracing::error!(error = %e, "failed to render dashboard page");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
