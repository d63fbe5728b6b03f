//! Connection configuration
//!
//! A connection is described by two settings, the Freshservice domain and an
//! API token. Each can come from the connection configuration or from the
//! process environment; configured values take precedence.

use crate::error::{Error, Result};
use crate::types::OptionStringExt;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Environment variable consulted when `domain` is not configured
pub const DOMAIN_ENV: &str = "FRESHSERVICE_ADDR";

/// Environment variable consulted when `token` is not configured
pub const TOKEN_ENV: &str = "FRESHSERVICE_TOKEN";

/// Path prefix of the v2 REST API
const API_PREFIX: &str = "/api/v2";

// ============================================================================
// Connection Config
// ============================================================================

/// Connection settings as supplied by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Freshservice domain: `acme`, `acme.freshservice.com` or a full URL
    #[serde(default)]
    pub domain: Option<String>,

    /// API key of the agent the connector acts as
    #[serde(default)]
    pub token: Option<String>,

    /// HTTP client tuning
    #[serde(default)]
    pub http: HttpSettings,
}

impl ConnectionConfig {
    /// Create an empty config (everything comes from the environment)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the domain
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Set the token
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Load a config file; `.json` files are parsed as JSON, anything else as YAML
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        if is_json {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(serde_yaml::from_str(&content)?)
        }
    }

    /// Resolve against the process environment
    pub fn resolve_from_env(&self) -> Result<ConnectionParams> {
        self.resolve(|key| std::env::var(key).ok())
    }

    /// Resolve connection parameters, falling back to `env` for unset values
    ///
    /// Empty strings are treated as unset. When either value is missing the
    /// error names every missing value together with the config key and the
    /// environment variable that would supply it.
    pub fn resolve<F>(&self, env: F) -> Result<ConnectionParams>
    where
        F: Fn(&str) -> Option<String>,
    {
        let domain = self
            .domain
            .clone()
            .none_if_empty()
            .or_else(|| env(DOMAIN_ENV).none_if_empty());
        let token = self
            .token
            .clone()
            .none_if_empty()
            .or_else(|| env(TOKEN_ENV).none_if_empty());

        let (domain, token) = match (domain, token) {
            (Some(domain), Some(token)) => (domain, token),
            (domain, token) => {
                let mut missing = Vec::new();
                if domain.is_none() {
                    missing.push(missing_option("domain", DOMAIN_ENV));
                }
                if token.is_none() {
                    missing.push(missing_option("token", TOKEN_ENV));
                }
                return Err(Error::config(missing.join("; ")));
            }
        };

        let base_url = api_base_url(&domain)?;
        debug!(%base_url, "resolved connection parameters");

        Ok(ConnectionParams {
            domain,
            token,
            base_url,
            http: self.http.clone(),
        })
    }
}

fn missing_option(key: &str, env: &str) -> String {
    format!("configuration option '{key}' or environment variable '{env}' must be set")
}

/// Build the API base URL from a domain setting
///
/// `acme` becomes `https://acme.freshservice.com/api/v2`, a host gets an
/// `https://` scheme and a full URL keeps its own scheme and port.
pub fn api_base_url(domain: &str) -> Result<String> {
    let domain = domain.trim().trim_end_matches('/');

    let origin = if domain.contains("://") {
        domain.to_string()
    } else if domain.contains('.') || domain.contains(':') {
        format!("https://{domain}")
    } else {
        format!("https://{domain}.freshservice.com")
    };

    let parsed = url::Url::parse(&origin)?;
    if parsed.host_str().is_none() {
        return Err(Error::config(format!("domain '{domain}' has no host")));
    }

    let origin = origin.trim_end_matches('/');
    if origin.ends_with(API_PREFIX) {
        Ok(origin.to_string())
    } else {
        Ok(format!("{origin}{API_PREFIX}"))
    }
}

// ============================================================================
// Resolved Parameters
// ============================================================================

/// Connection parameters after precedence resolution
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionParams {
    /// Domain as configured
    pub domain: String,
    /// API token
    pub token: String,
    /// API base URL, e.g. `https://acme.freshservice.com/api/v2`
    pub base_url: String,
    /// HTTP client tuning
    pub http: HttpSettings,
}

impl std::fmt::Debug for ConnectionParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionParams")
            .field("domain", &self.domain)
            .field("token", &"***")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// HTTP Settings
// ============================================================================

/// HTTP client settings that can be tuned from the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of retries for retryable failures
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Requests per second allowed by the client-side rate limiter
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            requests_per_second: default_requests_per_second(),
        }
    }
}

impl HttpSettings {
    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_requests_per_second() -> u32 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_takes_precedence_over_env() {
        let config = ConnectionConfig::new()
            .with_domain("configured")
            .with_token("config-token");
        let env = env_of(&[(DOMAIN_ENV, "fromenv"), (TOKEN_ENV, "env-token")]);

        let params = config.resolve(env).unwrap();
        assert_eq!(params.domain, "configured");
        assert_eq!(params.token, "config-token");
        assert_eq!(params.base_url, "https://configured.freshservice.com/api/v2");
    }

    #[test]
    fn test_env_used_when_config_missing() {
        let env = env_of(&[(DOMAIN_ENV, "acme"), (TOKEN_ENV, "env-token")]);
        let params = ConnectionConfig::new().resolve(env).unwrap();
        assert_eq!(params.domain, "acme");
        assert_eq!(params.token, "env-token");
    }

    #[test]
    fn test_domain_read_from_addr_variable() {
        let env = env_of(&[("FRESHSERVICE_ADDR", "acme"), ("FRESHSERVICE_TOKEN", "t")]);
        let params = ConnectionConfig::new().resolve(env).unwrap();
        assert_eq!(params.base_url, "https://acme.freshservice.com/api/v2");

        let err = ConnectionConfig::new()
            .with_token("t")
            .resolve(env_of(&[]))
            .unwrap_err();
        assert!(err.to_string().contains("'FRESHSERVICE_ADDR'"));
    }

    #[test]
    fn test_empty_config_value_falls_back_to_env() {
        let config = ConnectionConfig::new().with_domain("").with_token("");
        let env = env_of(&[(DOMAIN_ENV, "acme"), (TOKEN_ENV, "env-token")]);
        let params = config.resolve(env).unwrap();
        assert_eq!(params.token, "env-token");
    }

    #[test]
    fn test_missing_token_names_key_and_env() {
        let config = ConnectionConfig::new().with_domain("acme");
        let err = config.resolve(env_of(&[])).unwrap_err();
        let message = err.to_string();

        assert!(matches!(err, Error::Config { .. }));
        assert!(message.contains("'token'"));
        assert!(message.contains(TOKEN_ENV));
        assert!(!message.contains("'domain'"));
    }

    #[test]
    fn test_missing_both_names_both() {
        let err = ConnectionConfig::new().resolve(env_of(&[])).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'domain'"));
        assert!(message.contains(DOMAIN_ENV));
        assert!(message.contains("'token'"));
        assert!(message.contains(TOKEN_ENV));
    }

    #[test]
    fn test_api_base_url_forms() {
        assert_eq!(
            api_base_url("acme").unwrap(),
            "https://acme.freshservice.com/api/v2"
        );
        assert_eq!(
            api_base_url("acme.freshservice.com").unwrap(),
            "https://acme.freshservice.com/api/v2"
        );
        assert_eq!(
            api_base_url("http://127.0.0.1:8080/").unwrap(),
            "http://127.0.0.1:8080/api/v2"
        );
        assert_eq!(
            api_base_url("https://acme.freshservice.com/api/v2").unwrap(),
            "https://acme.freshservice.com/api/v2"
        );
    }

    #[test]
    fn test_debug_masks_token() {
        let params = ConnectionConfig::new()
            .with_domain("acme")
            .with_token("secret")
            .resolve(env_of(&[]))
            .unwrap();
        let debug = format!("{params:?}");
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "domain: acme\ntoken: abc\nhttp:\n  max_retries: 1").unwrap();

        let config = ConnectionConfig::from_file(file.path()).unwrap();
        assert_eq!(config.domain.as_deref(), Some("acme"));
        assert_eq!(config.token.as_deref(), Some("abc"));
        assert_eq!(config.http.max_retries, 1);
        assert_eq!(config.http.timeout_secs, 30);
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"domain": "acme"}}"#).unwrap();

        let config = ConnectionConfig::from_file(file.path()).unwrap();
        assert_eq!(config.domain.as_deref(), Some("acme"));
        assert!(config.token.is_none());
        assert_eq!(config.http, HttpSettings::default());
    }
}
