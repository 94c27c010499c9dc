//! Client configuration loaded from `infotech.toml`.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

pub const CONFIG_FILE: &str = "infotech.toml";
pub const API_URL_ENV: &str = "INFOTECH_API_URL";
pub const TOKEN_ENV: &str = "INFOTECH_TOKEN";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Storefront API configuration.
    #[serde(default)]
    pub api: ApiConfig,
}

impl ClientConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.api.validate()
    }

    /// Apply environment overrides. `lookup` is `std::env::var` in production.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(API_URL_ENV).filter(|value| !value.trim().is_empty()) {
            self.api.base_url = parse_base_url(raw.trim())?;
        }
        Ok(())
    }
}

/// Storefront API endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Base URL including the `/api` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), timeout_secs: default_timeout() }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        if self.base_url.cannot_be_a_base() {
            return Err(AppError::config_error(format!(
                "base_url '{}' cannot be used as a base URL",
                self.base_url
            )));
        }
        Ok(())
    }

    /// Resolve an endpoint path (e.g. `products/abc`) against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        base.join(path.trim_start_matches('/'))
            .map_err(|e| AppError::config_error(format!("Invalid endpoint '{path}': {e}")))
    }
}

/// Parse a base URL, forcing a trailing slash so `join` appends instead of replacing.
pub fn parse_base_url(raw: &str) -> Result<Url, AppError> {
    let normalized = if raw.ends_with('/') { raw.to_string() } else { format!("{raw}/") };
    Url::parse(&normalized)
        .map_err(|e| AppError::config_error(format!("Invalid API URL '{raw}': {e}")))
}

fn default_base_url() -> Url {
    Url::parse("http://localhost:8001/api/").expect("Default API URL must be valid")
}

fn default_timeout() -> u64 {
    30
}
