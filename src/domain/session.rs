// Session state and the actions that drive it
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new("admin", "password")
    }
}

/// A user interaction, tagged by the control that fired it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Login { username: String, password: String },
    Logout,
    SelectDevice(usize),
    /// Anything the dashboard does not recognize.
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Login,
    Dashboard,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    pub authenticated: bool,
    pub selected_index: usize,
}

/// What happened when an action was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    LoggedIn,
    InvalidCredentials,
    LoggedOut,
    Selected(usize),
    Ignored,
}

impl Session {
    pub fn screen(&self) -> Screen {
        if self.authenticated {
            Screen::Dashboard
        } else {
            Screen::Login
        }
    }

    /// Applies `action` and returns the next session. `device_count` bounds
    /// the selectable indices.
    pub fn apply(
        self,
        action: &Action,
        credentials: &Credentials,
        device_count: usize,
    ) -> (Session, Outcome) {
        match action {
            Action::Login { username, password } => {
                let authenticated = credentials.matches(username, password);
                let outcome = if authenticated {
                    Outcome::LoggedIn
                } else {
                    Outcome::InvalidCredentials
                };
                (
                    Session {
                        authenticated,
                        ..self
                    },
                    outcome,
                )
            }
            Action::Logout => (
                Session {
                    authenticated: false,
                    ..self
                },
                Outcome::LoggedOut,
            ),
            Action::SelectDevice(index) if *index < device_count => (
                Session {
                    selected_index: *index,
                    ..self
                },
                Outcome::Selected(*index),
            ),
            Action::SelectDevice(_) | Action::Unknown => (self, Outcome::Ignored),
        }
    }
}
