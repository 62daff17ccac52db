pub mod error;

use std::collections::HashMap;
use std::env;
use std::fmt;

use tracing::debug;

pub use error::ConfigError;
use error::Result;

/// Environment variable consulted when no API key is passed explicitly
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Base URL of the hosted API
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Source of environment-style lookups.
///
/// Resolution goes through this trait instead of reading the process
/// environment directly, so tests can hand in a plain map.
pub trait EnvSource {
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads the real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Resolved connection settings for the client.
///
/// Only obtainable through [`Config::resolve`] or [`Config::from_env`], so
/// the API key is never empty.
#[derive(Clone)]
pub struct Config {
    /// Bearer token sent with every request
    pub(crate) api_key: String,

    /// Endpoint root, without a trailing slash
    pub(crate) base_url: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Config {
    /// Resolve the API key from an explicit value, falling back to `env`.
    ///
    /// Empty strings count as missing on both sides.
    pub fn resolve(explicit: Option<String>, env: &impl EnvSource) -> Result<Self> {
        let api_key = match explicit.filter(|key| !key.is_empty()) {
            Some(key) => {
                debug!("Using explicitly provided API key");
                key
            }
            None => {
                let key = env
                    .var(API_KEY_ENV)
                    .filter(|key| !key.is_empty())
                    .ok_or_else(|| ConfigError::MissingApiKey(API_KEY_ENV.to_string()))?;
                debug!(var = API_KEY_ENV, "Using API key from environment");
                key
            }
        };

        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Resolve against the process environment
    pub fn from_env(explicit: Option<String>) -> Result<Self> {
        Self::resolve(explicit, &ProcessEnv)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Point the client at another OpenAI-compatible server
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Full URL of an endpoint below the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with_key(key: &str) -> HashMap<String, String> {
        let mut env = HashMap::new();
        env.insert(API_KEY_ENV.to_string(), key.to_string());
        env
    }

    #[test]
    fn test_missing_key_fails() {
        let result = Config::resolve(None, &HashMap::<String, String>::new());

        match result {
            Err(ConfigError::MissingApiKey(var)) => assert_eq!(var, API_KEY_ENV),
            other => panic!("expected MissingApiKey, got {:?}", other),
        }
    }

    #[test]
    fn test_explicit_key_without_env() {
        let config =
            Config::resolve(Some("sk-explicit".to_string()), &HashMap::<String, String>::new())
                .unwrap();
        assert_eq!(config.api_key, "sk-explicit");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_explicit_key_takes_precedence() {
        let env = env_with_key("sk-from-env");
        let config = Config::resolve(Some("sk-explicit".to_string()), &env).unwrap();
        assert_eq!(config.api_key, "sk-explicit");
    }

    #[test]
    fn test_env_fallback() {
        let env = env_with_key("sk-from-env");
        let config = Config::resolve(None, &env).unwrap();
        assert_eq!(config.api_key, "sk-from-env");
    }

    #[test]
    fn test_empty_explicit_key_falls_back() {
        let env = env_with_key("sk-from-env");
        let config = Config::resolve(Some(String::new()), &env).unwrap();
        assert_eq!(config.api_key, "sk-from-env");
    }

    #[test]
    fn test_empty_env_key_fails() {
        let env = env_with_key("");
        assert!(Config::resolve(None, &env).is_err());
        assert!(Config::resolve(Some(String::new()), &env).is_err());
    }

    #[test]
    fn test_endpoint_join() {
        let config = Config::resolve(Some("k".to_string()), &HashMap::<String, String>::new())
            .unwrap()
            .with_base_url("http://localhost:8080/v1/");

        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(
            config.endpoint("chat/completions"),
            "http://localhost:8080/v1/chat/completions"
        );
        assert_eq!(
            config.endpoint("/images/generations"),
            "http://localhost:8080/v1/images/generations"
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = Config::resolve(
            Some("sk-secret-value".to_string()),
            &HashMap::<String, String>::new(),
        )
        .unwrap();
        let printed = format!("{:?}", config);
        assert!(!printed.contains("sk-secret-value"));
        assert!(printed.contains("api.openai.com"));
    }
}
