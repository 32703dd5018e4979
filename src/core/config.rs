//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use crate::core::api::DEFAULT_API_BASE;

pub const DEFAULT_SITE_NAME: &str = "Edutalks";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the external REST API, handed to the browser
    /// Example: https://api.edutalksacademy.in/api
    pub api_url: String,

    /// Display name used in page titles
    pub site_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("EDUTALKS_API_URL").ok(),
            std::env::var("EDUTALKS_SITE_NAME").ok(),
        )
    }

    /// Blank values fall back to the defaults
    pub fn from_values(api_url: Option<String>, site_name: Option<String>) -> Self {
        let non_blank = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        Self {
            api_url: non_blank(api_url)
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            site_name: non_blank(site_name).unwrap_or_else(|| DEFAULT_SITE_NAME.to_string()),
        }
    }

    /// Check if the API URL differs from the development default
    pub fn has_custom_api(&self) -> bool {
        self.api_url != DEFAULT_API_BASE
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_url, "http://localhost:5000/api");
        assert_eq!(config.site_name, "Edutalks");
        assert!(!config.has_custom_api());
    }

    #[test]
    fn test_custom_values() {
        let config = Config::from_values(
            Some("https://api.edutalksacademy.in/api/".to_string()),
            Some("Edutalks Academy".to_string()),
        );
        assert_eq!(config.api_url, "https://api.edutalksacademy.in/api");
        assert_eq!(config.site_name, "Edutalks Academy");
        assert!(config.has_custom_api());
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = Config::from_values(Some("   ".to_string()), Some(String::new()));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment
        let config = Config::from_env();
        assert!(!config.api_url.is_empty());
        assert!(!config.site_name.is_empty());
    }
}
