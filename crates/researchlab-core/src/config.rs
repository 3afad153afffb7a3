//! Application configuration
//!
//! Layered with `figment`: built-in defaults, then the user config file,
//! then an explicit file (if given), then `RESEARCHLAB_*` environment variables.

use crate::error::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Default backend base URL
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Runtime configuration for the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the research backend
    pub backend_url: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Pause between simulated agent phases in milliseconds
    pub phase_delay_ms: u64,
    /// Directory holding the SQLite database
    pub data_dir: Option<PathBuf>,
    /// Theme used when no choice has been persisted yet
    pub dark_mode: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout_secs: 60,
            phase_delay_ms: 1000,
            data_dir: None,
            dark_mode: false,
        }
    }
}

impl AppConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn phase_delay(&self) -> Duration {
        Duration::from_millis(self.phase_delay_ms)
    }

    /// Resolve the data directory, falling back to the platform data dir
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("researchlab")
        })
    }
}

/// Path of the per-user config file, if the platform has a config dir
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("researchlab").join("config.toml"))
}

/// Load configuration from all layers
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig> {
    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            debug!("Merging user config: {:?}", user_config);
            figment = figment.merge(Toml::file(user_config));
        }
    }

    if let Some(path) = explicit {
        debug!("Merging config file: {:?}", path);
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(Env::prefixed("RESEARCHLAB_"));

    Ok(figment.extract()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.backend_url, "http://localhost:5000");
        assert_eq!(config.phase_delay(), Duration::from_secs(1));
        assert!(!config.dark_mode);
    }

    /// Point the platform config dir into the jail and drop ambient overrides
    fn isolate(jail: &mut figment::Jail) {
        jail.clear_env();
        let home = jail.directory().display().to_string();
        jail.set_env("HOME", &home);
        jail.set_env("XDG_CONFIG_HOME", &home);
    }

    #[test]
    fn test_file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file(
                "lab.toml",
                "backend_url = \"http://research.local:8080\"\nphase_delay_ms = 250",
            )?;

            let config = load_config(Some(Path::new("lab.toml")))
                .map_err(|e| figment::Error::from(e.to_string()))?;

            assert_eq!(config.backend_url, "http://research.local:8080");
            assert_eq!(config.phase_delay_ms, 250);
            assert_eq!(config.request_timeout_secs, 60);
            Ok(())
        });
    }

    #[test]
    fn test_ambient_env_is_ignored_inside_jail() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("RESEARCHLAB_REQUEST_TIMEOUT_SECS", "9");
            isolate(jail);

            let config = load_config(None).map_err(|e| figment::Error::from(e.to_string()))?;
            assert_eq!(config, AppConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        figment::Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file("lab.toml", "request_timeout_secs = 5")?;
            jail.set_env("RESEARCHLAB_REQUEST_TIMEOUT_SECS", "9");

            let config = load_config(Some(Path::new("lab.toml")))
                .map_err(|e| figment::Error::from(e.to_string()))?;
            assert_eq!(config.request_timeout_secs, 9);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let config = AppConfig {
            data_dir: Some(PathBuf::from("/tmp/lab")),
            ..Default::default()
        };
        assert_eq!(config.resolved_data_dir(), PathBuf::from("/tmp/lab"));
    }
}
