//! Console configuration.

use std::env;

/// Gateway address used when `ADMIN_API_URL` is unset.
pub const DEFAULT_ADMIN_API_URL: &str = "http://localhost:4001";

/// Where and as whom the console talks to the gateway.
#[derive(Clone)]
pub struct ConsoleConfig {
    /// Gateway base URL, without trailing slash
    pub base_url: String,
    /// Bearer token sent with every request
    pub token: Option<String>,
}

impl std::fmt::Debug for ConsoleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl ConsoleConfig {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, token }
    }

    /// Load from `ADMIN_API_URL` and `ADMIN_API_TOKEN`.
    pub fn from_env() -> Self {
        Self::new(
            env::var("ADMIN_API_URL").unwrap_or_else(|_| DEFAULT_ADMIN_API_URL.to_string()),
            env::var("ADMIN_API_TOKEN").ok().filter(|t| !t.is_empty()),
        )
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_API_URL, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_dropped() {
        let config = ConsoleConfig::new("http://admin.test:8080/", None);
        assert_eq!(config.base_url, "http://admin.test:8080");
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ConsoleConfig::new(DEFAULT_ADMIN_API_URL, Some("secret-token".to_string()));
        let printed = format!("{:?}", config);
        assert!(!printed.contains("secret-token"));
        assert!(printed.contains("[REDACTED]"));
    }
}
