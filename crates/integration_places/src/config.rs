//! Places client configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Configuration for the Google Places client
#[derive(Clone, Serialize, Deserialize)]
pub struct PlacesConfig {
    /// Google Places API key (sensitive - uses SecretString)
    ///
    /// Requests are still issued without a key; the provider rejects them
    /// with `REQUEST_DENIED`.
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Default result language (e.g. "en", "de"), sent with every request
    /// unless the call's parameters carry their own language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Base URL of the Places web service, without the endpoint path
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl std::fmt::Debug for PlacesConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesConfig")
            .field(
                "api_key",
                &if self.api_key.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("language", &self.language)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn default_base_url() -> String {
    crate::endpoint::DEFAULT_BASE_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("integration_places/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            language: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl PlacesConfig {
    /// Create a configuration with the given API key and defaults otherwise
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::default().with_api_key(api_key)
    }

    /// Create a configuration for testing (dummy key, short timeout)
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: Some(SecretString::from("test-api-key")),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Set the API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Set the default language
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Point the client at a different host (proxies, mock servers)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Check if an API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().is_empty())
    }

    /// Base URL without a trailing slash
    #[must_use]
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("base_url must start with http:// or https://".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.language.as_deref().is_some_and(|l| l.trim().is_empty()) {
            return Err("language must not be empty when set".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlacesConfig::default();
        assert!(config.api_key.is_none());
        assert!(config.language.is_none());
        assert_eq!(
            config.base_url,
            "https://maps.googleapis.com/maps/api/place"
        );
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.starts_with("integration_places/"));
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_builder_helpers() {
        let config = PlacesConfig::new("abc")
            .with_language("de")
            .with_base_url("http://localhost:8080/");
        assert!(config.has_api_key());
        assert_eq!(config.language.as_deref(), Some("de"));
        assert_eq!(config.normalized_base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_empty_key_is_not_a_key() {
        let config = PlacesConfig::new("");
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_validation_success() {
        assert!(PlacesConfig::default().validate().is_ok());
        assert!(PlacesConfig::for_testing().validate().is_ok());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let config = PlacesConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_bad_scheme() {
        let config = PlacesConfig::default().with_base_url("ftp://example.com");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = PlacesConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_blank_language() {
        let config = PlacesConfig::default().with_language("  ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = PlacesConfig::new("super-secret-key");
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("super-secret-key"));
    }

    #[test]
    fn test_api_key_never_serialized() {
        let config = PlacesConfig::new("super-secret-key").with_language("en");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("super-secret-key"));
        assert!(json.contains("\"language\":\"en\""));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: PlacesConfig =
            serde_json::from_str(r#"{ "api_key": "k", "language": "fr" }"#).unwrap();
        assert!(config.has_api_key());
        assert_eq!(config.api_key.as_ref().unwrap().expose_secret(), "k");
        assert_eq!(config.language.as_deref(), Some("fr"));
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.normalized_base_url(), crate::endpoint::DEFAULT_BASE_URL);
    }
}
