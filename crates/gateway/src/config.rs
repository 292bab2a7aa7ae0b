//! Gateway configuration.

use std::env;

use common::{env_flag, DatabaseConfig, JwtConfig};
use domain::AccessPolicy;

/// Default port, matching the address the admin console posts to.
pub const DEFAULT_GATEWAY_PORT: u16 = 4001;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    /// Authorisation applied to `POST /auth/delete/user`
    pub delete_user_policy: AccessPolicy,
    /// Origins allowed by CORS; empty allows any origin
    pub cors_allowed_origins: Vec<String>,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("GATEWAY_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_GATEWAY_PORT),
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env(),
            delete_user_policy: AccessPolicy {
                require_admin: env_flag("USER_DELETE_REQUIRE_ADMIN", true),
            },
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_default(),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_GATEWAY_PORT,
            database: DatabaseConfig::default(),
            jwt: JwtConfig::default(),
            delete_user_policy: AccessPolicy::admin_only(),
            cors_allowed_origins: Vec::new(),
        }
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_skips_blanks() {
        assert_eq!(
            parse_origins("http://a.test, ,http://b.test "),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn test_default_requires_admin_for_deletes() {
        let config = GatewayConfig::default();
        assert!(config.delete_user_policy.require_admin);
        assert_eq!(config.server_addr(), "0.0.0.0:4001");
    }
}
