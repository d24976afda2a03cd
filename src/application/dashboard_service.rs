// Dashboard service - applies user actions to the session and renders the view
use crate::domain::device::Dataset;
use crate::domain::session::{Action, Credentials, Outcome, Session};
use crate::domain::view::{render, DashboardView};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct DashboardService {
    dataset: Arc<Dataset>,
    credentials: Arc<Credentials>,
    session: Arc<Mutex<Session>>,
}

impl DashboardService {
    pub fn new(dataset: Dataset, credentials: Credentials) -> Self {
        Self {
            dataset: Arc::new(dataset),
            credentials: Arc::new(credentials),
            session: Arc::new(Mutex::new(Session::default())),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Resolves a selector button's device id into an action.
    pub fn select_action(&self, device_id: &str) -> Action {
        match self.dataset.position(device_id) {
            Some(index) => Action::SelectDevice(index),
            None => Action::Unknown,
        }
    }

    pub async fn current_view(&self) -> DashboardView {
        let session = self.session.lock().await;
        render(&session, &self.dataset)
    }

    /// Applies one action under the session lock and returns the re-rendered view.
    pub async fn dispatch(&self, action: Action) -> DashboardView {
        let mut session = self.session.lock().await;
        let (next, outcome) = session.apply(&action, &self.credentials, self.dataset.len());
        *session = next;

        match outcome {
            Outcome::LoggedIn => tracing::info!("login succeeded"),
            Outcome::InvalidCredentials => tracing::info!("login rejected: invalid credentials"),
            Outcome::LoggedOut => tracing::info!("logged out"),
            Outcome::Selected(index) => tracing::debug!(
                device = %self.dataset.get_or_first(index).id,
                "device selected"
            ),
            Outcome::Ignored => tracing::debug!(?action, "ignoring unrecognized action"),
        }

        render(&session, &self.dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::device::default_devices;
    use crate::domain::session::Screen;

    fn service() -> DashboardService {
        DashboardService::new(
            Dataset::new(default_devices()).unwrap(),
            Credentials::default(),
        )
    }

    fn login(username: &str, password: &str) -> Action {
        Action::Login {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_end_to_end_battery_scenario() {
        let service = service();

        let view = service.current_view().await;
        assert_eq!(view.screen, Screen::Login);

        let view = service.dispatch(login("admin", "password")).await;
        assert!(view.dashboard_visible);
        assert!(!view.login_visible);
        assert_eq!(view.stats.best, "Best: 50 hrs");
        assert_eq!(view.stats.normal, "Normal: 30 hrs");
        assert_eq!(view.stats.worst, "Worst: 10 hrs");

        let view = service.dispatch(service.select_action("Battery B")).await;
        assert_eq!(view.stats.best, "Best: 30 hrs");
        assert_eq!(view.stats.normal, "Normal: 40 hrs");
        assert_eq!(view.stats.worst, "Worst: 20 hrs");
        let values: Vec<u32> = view.chart.bars.iter().map(|b| b.value).collect();
        assert_eq!(values, service.dataset().devices()[1].last_30_days);

        let view = service.dispatch(Action::Logout).await;
        assert_eq!(view.screen, Screen::Login);

        let view = service.dispatch(login("admin", "password")).await;
        assert_eq!(view.screen, Screen::Dashboard);
        assert_eq!(view.selected_device, "Battery B");
        assert_eq!(view.stats.best, "Best: 30 hrs");
    }

    #[tokio::test]
    async fn test_failed_login_logs_out() {
        let service = service();
        service.dispatch(login("admin", "password")).await;
        let view = service.dispatch(login("admin", "nope")).await;
        assert!(view.login_visible);
        assert!(!view.dashboard_visible);
    }

    #[tokio::test]
    async fn test_unknown_device_keeps_state() {
        let service = service();
        service.dispatch(login("admin", "password")).await;
        let action = service.select_action("Battery Z");
        assert_eq!(action, Action::Unknown);
        let view = service.dispatch(action).await;
        assert!(view.dashboard_visible);
        assert_eq!(view.selected_device, "Battery A");
    }
}
