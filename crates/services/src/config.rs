use std::env;
use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_BASE_URL: &str = "PATHWAY_API_URL";
pub const ENV_AUTH_TOKEN: &str = "PATHWAY_AUTH_TOKEN";
pub const ENV_TIMEOUT_SECS: &str = "PATHWAY_TIMEOUT_SECS";

/// Unvalidated generator settings, e.g. straight from the environment or flags.
#[derive(Clone, Debug, Default)]
pub struct ApiConfigDraft {
    pub base_url: Option<String>,
    pub auth_token: Option<String>,
    pub timeout_secs: Option<String>,
}

impl ApiConfigDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: env::var(ENV_BASE_URL).ok(),
            auth_token: env::var(ENV_AUTH_TOKEN).ok(),
            timeout_secs: env::var(ENV_TIMEOUT_SECS).ok(),
        }
    }

    /// Validate and normalize the draft. Blank values fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the base URL does not parse or the timeout is
    /// not a positive number of seconds.
    pub fn validate(self) -> Result<ApiConfig, ConfigError> {
        let base_url = normalize_optional(self.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if Url::parse(&base_url).is_err() {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }

        let timeout_secs = match normalize_optional(self.timeout_secs) {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout(raw))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(ApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token: normalize_optional(self.auth_token),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Where and how to reach the generator service.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    auth_token: Option<String>,
    timeout: Duration,
}

impl ApiConfig {
    /// Read the configuration from `PATHWAY_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        ApiConfigDraft::from_env().validate()
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            auth_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_uses_defaults() {
        let config = ApiConfigDraft::new().validate().unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.auth_token(), None);
    }

    #[test]
    fn draft_trims_values() {
        let config = ApiConfigDraft {
            base_url: Some(" https://paths.example.com/api/ ".into()),
            auth_token: Some("  ".into()),
            timeout_secs: Some("5".into()),
        }
        .validate()
        .unwrap();

        assert_eq!(config.base_url(), "https://paths.example.com/api");
        assert_eq!(config.auth_token(), None);
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(
            config.endpoint("/quiz/generate"),
            "https://paths.example.com/api/quiz/generate"
        );
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = ApiConfigDraft {
            base_url: Some("not a url".into()),
            ..ApiConfigDraft::default()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl(_)));

        let err = ApiConfigDraft {
            timeout_secs: Some("0".into()),
            ..ApiConfigDraft::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, ConfigError::InvalidTimeout("0".into()));
    }

    #[test]
    fn debug_redacts_token() {
        let config = ApiConfigDraft {
            auth_token: Some("secret-token".into()),
            ..ApiConfigDraft::default()
        }
        .validate()
        .unwrap();
        assert!(!format!("{config:?}").contains("secret-token"));
    }
}
