//! CLI configuration

use config::{Config, ConfigError, Environment, File};
use parkspot_frontend_common::config::{ApiConfig, AuthConfig};
use parkspot_frontend_common::ApiSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Client settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Backend connection
    #[serde(default)]
    pub api: ApiSection,
    /// Login form behavior
    #[serde(default)]
    pub login: LoginSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSection {
    /// Base URL of the ParkSpot backend
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds; unset means no client-side timeout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginSection {
    /// How long "Login successful" stays up before the landing page
    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u64,
}

fn default_base_url() -> String {
    ApiConfig::DEFAULT_BASE_URL.to_string()
}

fn default_redirect_delay_ms() -> u64 {
    AuthConfig::LOGIN_REDIRECT_DELAY_MS
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl Default for LoginSection {
    fn default() -> Self {
        Self {
            redirect_delay_ms: default_redirect_delay_ms(),
        }
    }
}

impl Settings {
    /// Load defaults, discovered config files, an explicit file and then
    /// `PARKSPOT__SECTION__KEY` environment variables, later sources winning
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_from(&Self::search_paths(), explicit)
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("parkspot.toml")];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("parkspot").join("parkspot.toml"));
        }
        paths
    }

    fn load_from(search_paths: &[PathBuf], explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        // Start with defaults
        builder = builder.add_source(Config::try_from(&Settings::default())?);

        for path in search_paths {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()).required(false));
            }
        }

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PARKSPOT")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings {
            base_url: self.api.base_url.clone(),
            timeout: self.api.timeout_secs.map(Duration::from_secs),
        }
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.login.redirect_delay_ms)
    }

    /// Default settings as a TOML document
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&Settings::default())
    }
}
