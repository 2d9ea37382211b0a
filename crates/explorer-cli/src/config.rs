//! Application configuration
//!
//! Read from an optional TOML file, then overridden by `EXPLORER_*` environment
//! variables.

use explorer_api::{ApiConfig, RetryPolicy};
use explorer_core::{ClickCommit, SessionConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {key}: '{value}'")]
    InvalidVar { key: &'static str, value: String },

    #[error("no API url configured; set EXPLORER_API_URL or api_url")]
    MissingApiUrl,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_url: Option<String>,
    pub lang: String,
    pub debounce_ms: u64,
    pub timeout_secs: u64,
    pub log_level: String,
    pub click_commit: ClickCommit,
    pub retry: RetryPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        let session = SessionConfig::default();
        Self {
            api_url: None,
            lang: session.lang,
            debounce_ms: session.debounce_ms,
            timeout_secs: 30,
            log_level: "info".to_string(),
            click_commit: session.click_commit,
            retry: session.retry,
        }
    }
}

impl AppConfig {
    /// Load from a file (if given) and the process environment
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or parsed, or an environment
    /// variable holds an invalid number.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a TOML file
    ///
    /// # Errors
    /// Returns `ConfigError::Read` or `ConfigError::Parse`.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&text)?)
    }

    /// Override fields from variables found by `lookup`
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidVar` for unparsable numbers.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("EXPLORER_API_URL") {
            self.api_url = Some(url);
        }
        if let Some(lang) = lookup("EXPLORER_LANG") {
            self.lang = lang;
        }
        if let Some(level) = lookup("EXPLORER_LOG_LEVEL") {
            self.log_level = level;
        }
        if let Some(value) = lookup("EXPLORER_DEBOUNCE_MS") {
            self.debounce_ms = parse_var("EXPLORER_DEBOUNCE_MS", value)?;
        }
        if let Some(value) = lookup("EXPLORER_TIMEOUT_SECS") {
            self.timeout_secs = parse_var("EXPLORER_TIMEOUT_SECS", value)?;
        }
        Ok(())
    }

    /// HTTP client settings
    ///
    /// # Errors
    /// Returns `ConfigError::MissingApiUrl` when no URL is configured.
    pub fn api(&self) -> Result<ApiConfig, ConfigError> {
        let url = self.api_url.as_deref().ok_or(ConfigError::MissingApiUrl)?;
        Ok(ApiConfig::new(url).with_timeout_secs(self.timeout_secs))
    }

    #[must_use]
    pub fn session(&self) -> SessionConfig {
        SessionConfig::new()
            .with_debounce(std::time::Duration::from_millis(self.debounce_ms))
            .with_click_commit(self.click_commit)
            .with_retry(self.retry)
            .with_lang(self.lang.clone())
    }
}

fn parse_var(key: &'static str, value: String) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidVar { key, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn env_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "api_url = \"http://file:8000\"\nlang = \"es\"\ndebounce_ms = 400\n\n[retry]\nretries = 1"
        )
        .unwrap();

        let mut config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.lang, "es");
        assert_eq!(config.retry.retries, 1);
        assert_eq!(config.retry.base_delay_ms, 1_000);

        config
            .apply_env(vars(&[
                ("EXPLORER_API_URL", "http://env:9000"),
                ("EXPLORER_DEBOUNCE_MS", "375"),
            ]))
            .unwrap();
        assert_eq!(config.api_url.as_deref(), Some("http://env:9000"));
        assert_eq!(config.debounce_ms, 375);
        assert_eq!(config.lang, "es");
        assert_eq!(config.session().debounce_ms, 375);
    }

    #[test]
    fn invalid_number_is_reported() {
        let err = AppConfig::default()
            .apply_env(vars(&[("EXPLORER_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for EXPLORER_TIMEOUT_SECS: 'soon'"
        );
    }

    #[test]
    fn api_url_is_required_for_http() {
        assert!(matches!(
            AppConfig::default().api(),
            Err(ConfigError::MissingApiUrl)
        ));
    }

    #[test]
    fn load_reads_process_environment() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        std::env::set_var("EXPLORER_LANG", "fr");

        let config = AppConfig::load(None).unwrap();
        assert_eq!(config.lang, "fr");
        assert_eq!(config.debounce_ms, 450);

        std::env::remove_var("EXPLORER_LANG");
    }
}
