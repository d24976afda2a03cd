use crate::domain::device::{default_devices, Dataset, Device};
use crate::domain::session::Credentials;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub credentials: Credentials,
    pub devices: DeviceList,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
    /// `RUST_LOG`-style filter used when the environment sets none.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(transparent)]
pub struct DeviceList(pub Vec<Device>);

impl Default for DeviceList {
    fn default() -> Self {
        Self(default_devices())
    }
}

impl AppConfig {
    /// Host and port to listen on; the host may be a name or an IP address.
    pub fn bind_target(&self) -> (&str, u16) {
        (self.server.host.as_str(), self.server.port)
    }

    pub fn dataset(&self) -> anyhow::Result<Dataset> {
        Ok(Dataset::new(self.devices.0.clone())?)
    }
}

/// Loads `config/dashboard.{toml,...}` if present, then `DASHBOARD__*` env overrides.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    load_from("config/dashboard", env_source())
}

/// `DASHBOARD__SERVER__PORT=9000` overrides `server.port`.
fn env_source() -> config::Environment {
    config::Environment::with_prefix("DASHBOARD")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn load_from(path: &str, env: config::Environment) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .add_source(env)
        .build()?;

    Ok(settings.try_deserialize()?)
}
