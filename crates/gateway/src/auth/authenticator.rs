//! HS256 JWT authenticator.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use common::{AppResult, JwtConfig};
use domain::{UserRole, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Username of the caller
    pub sub: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Token response returned by the `token` command
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token expiration time in seconds
    #[schema(example = 86400)]
    pub expires_in: i64,
}

/// Signs and verifies bearer tokens with the shared secret.
pub struct Authenticator {
    config: JwtConfig,
}

impl Authenticator {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    /// Mint a token for `username` carrying `role`.
    pub fn issue_token(&self, username: &str, role: &UserRole) -> AppResult<TokenResponse> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.config.expiration_hours);

        let claims = Claims {
            sub: username.to_string(),
            role: role.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.secret_bytes()),
        )?;

        Ok(TokenResponse {
            access_token: token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.config.expiration_hours * SECONDS_PER_HOUR,
        })
    }

    /// Verify signature and expiry, returning the claims.
    pub fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.secret_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}
