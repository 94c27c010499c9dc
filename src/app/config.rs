//! Client configuration loading: `infotech.toml`, then environment overrides.

use std::fs;
use std::path::Path;

use crate::domain::client_config::{CONFIG_FILE, TOKEN_ENV};
use crate::domain::{AppError, AuthSession, ClientConfig};

/// Load configuration from `path`, or from `./infotech.toml` when no path is given.
///
/// An explicit path must exist. The implicit file is optional; defaults apply without it.
pub fn load_client_config(path: Option<&Path>) -> Result<ClientConfig, AppError> {
    load_client_config_with(path, |key| std::env::var(key).ok())
}

pub fn load_client_config_with<F>(path: Option<&Path>, lookup: F) -> Result<ClientConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::config_error(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            parse_config_file(path)?
        }
        None => {
            let default_path = Path::new(CONFIG_FILE);
            if default_path.exists() { parse_config_file(default_path)? } else { ClientConfig::default() }
        }
    };

    config.apply_env(lookup)?;
    config.validate()?;
    tracing::debug!(base_url = %config.api.base_url, "configuration loaded");
    Ok(config)
}

pub fn parse_config_content(content: &str) -> Result<ClientConfig, AppError> {
    let config: ClientConfig = toml::from_str(content)?;
    Ok(config)
}

fn parse_config_file(path: &Path) -> Result<ClientConfig, AppError> {
    let content = fs::read_to_string(path)?;
    parse_config_content(&content).map_err(|err| match err {
        AppError::TomlParseError(inner) => {
            AppError::config_error(format!("{}: {}", path.display(), inner.message()))
        }
        other => other,
    })
}

/// Session from an explicit token, falling back to `INFOTECH_TOKEN`.
pub fn session_from<F>(explicit: Option<&str>, lookup: F) -> Option<AuthSession>
where
    F: Fn(&str) -> Option<String>,
{
    explicit
        .map(str::to_string)
        .or_else(|| lookup(TOKEN_ENV))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .map(AuthSession::from_token)
}
