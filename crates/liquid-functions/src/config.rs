//! Application configuration

use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: String,

    /// Port for function requests
    pub port: u16,

    /// First path segment in front of every function route ("api" -> /api/{function})
    pub route_prefix: String,

    /// Largest request body read before the request is rejected
    pub max_body_bytes: usize,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup. Missing or
    /// unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            bind_addr: lookup("LIQUID_FUNCTIONS_BIND_ADDR")
                .unwrap_or_else(|| "0.0.0.0".to_string()),

            port: lookup("LIQUID_FUNCTIONS_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(7071),

            route_prefix: lookup("LIQUID_FUNCTIONS_ROUTE_PREFIX")
                .map(|s| s.trim_matches('/').to_string())
                .unwrap_or_else(|| "api".to_string()),

            max_body_bytes: lookup("LIQUID_FUNCTIONS_MAX_BODY_BYTES")
                .and_then(|s| s.parse().ok())
                .unwrap_or(1024 * 1024),
        }
    }

    /// `host:port` string for the listener
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    /// Route pattern under which functions are served, e.g. `/api/{function}`
    pub fn function_route(&self) -> String {
        if self.route_prefix.is_empty() {
            "/{function}".to_string()
        } else {
            format!("/{}/{{function}}", self.route_prefix)
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.listen_addr(), "0.0.0.0:7071");
        assert_eq!(config.route_prefix, "api");
        assert_eq!(config.max_body_bytes, 1024 * 1024);
        assert_eq!(config.function_route(), "/api/{function}");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("LIQUID_FUNCTIONS_BIND_ADDR", "127.0.0.1"),
            ("LIQUID_FUNCTIONS_PORT", "9000"),
            ("LIQUID_FUNCTIONS_ROUTE_PREFIX", "/fn/"),
            ("LIQUID_FUNCTIONS_MAX_BODY_BYTES", "16"),
        ]));
        assert_eq!(config.listen_addr(), "127.0.0.1:9000");
        assert_eq!(config.function_route(), "/fn/{function}");
        assert_eq!(config.max_body_bytes, 16);
    }

    #[test]
    fn test_bad_numbers_fall_back() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("LIQUID_FUNCTIONS_PORT", "not-a-port"),
            ("LIQUID_FUNCTIONS_MAX_BODY_BYTES", "-1"),
        ]));
        assert_eq!(config.port, 7071);
        assert_eq!(config.max_body_bytes, 1024 * 1024);
    }

    #[test]
    fn test_empty_prefix_serves_at_root() {
        let config = AppConfig::from_lookup(lookup_from(&[("LIQUID_FUNCTIONS_ROUTE_PREFIX", "")]));
        assert_eq!(config.function_route(), "/{function}");
    }
}
