// src/config.rs
use std::env;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use crate::services::gemini::DEFAULT_ENDPOINT;

pub const DEFAULT_LOG_FILTER: &str = "portfolio_chat=info,tower_http=info";

#[derive(Clone, Debug)]
pub struct Config {
    /// Gemini credential. Missing is allowed; requests then report it.
    pub api_key: Option<String>,
    pub api_url: String,
    pub bind_addr: String,
    pub static_dir: String,
    /// `RUST_LOG`-style directives, e.g. `portfolio_chat=debug,tower_http=debug`.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_ENDPOINT.to_string(),
            bind_addr: "0.0.0.0:3000".to_string(),
            static_dir: "public".to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source. `LOG_LEVEL` wins over `RUST_LOG`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            // Only an empty key counts as missing.
            api_key: lookup("GEMINI_API_KEY").filter(|k| !k.is_empty()),
            api_url: lookup("GEMINI_API_URL").unwrap_or(defaults.api_url),
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            static_dir: lookup("STATIC_DIR").unwrap_or(defaults.static_dir),
            log_filter: lookup("LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_filter),
        }
    }

    pub fn env_filter(&self) -> Result<EnvFilter, ParseError> {
        EnvFilter::try_new(&self.log_filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = from_pairs(&[]);
        assert_eq!(config.api_key, None);
        assert_eq!(config.api_url, DEFAULT_ENDPOINT);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert!(config.env_filter().is_ok());
    }

    #[test]
    fn only_empty_key_is_missing() {
        assert_eq!(from_pairs(&[("GEMINI_API_KEY", "")]).api_key, None);
        assert_eq!(
            from_pairs(&[("GEMINI_API_KEY", "  ")]).api_key.as_deref(),
            Some("  ")
        );
        assert_eq!(
            from_pairs(&[("GEMINI_API_KEY", "abc")]).api_key.as_deref(),
            Some("abc")
        );
    }

    #[test]
    fn log_filter_accepts_directives() {
        let config = from_pairs(&[("LOG_LEVEL", "portfolio_chat=debug,tower_http=debug")]);
        assert!(config.env_filter().is_ok());

        let bare = from_pairs(&[("LOG_LEVEL", "debug")]);
        assert!(bare.env_filter().is_ok());
    }

    #[test]
    fn log_level_takes_precedence_over_rust_log() {
        let config = from_pairs(&[("RUST_LOG", "warn"), ("LOG_LEVEL", "trace")]);
        assert_eq!(config.log_filter, "trace");

        let config = from_pairs(&[("RUST_LOG", "tower_http=debug")]);
        assert_eq!(config.log_filter, "tower_http=debug");
    }

    #[test]
    fn bad_directive_is_reported() {
        let config = from_pairs(&[("LOG_LEVEL", "portfolio_chat=loud")]);
        assert!(config.env_filter().is_err());
    }
}
