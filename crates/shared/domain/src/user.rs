//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{ROLE_ADMIN, ROLE_USER, USERNAME_REQUIRED_MESSAGE};
use crate::error::{DomainError, DomainResult};

/// User roles enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s {
            ROLE_ADMIN => UserRole::Admin,
            _ => UserRole::User,
        }
    }
}

impl From<String> for UserRole {
    fn from(s: String) -> Self {
        UserRole::from(s.as_str())
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.to_string()
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "{}", ROLE_ADMIN),
            UserRole::User => write!(f, "{}", ROLE_USER),
        }
    }
}

/// Account identifier as supplied by callers.
///
/// Only presence is checked: the value is kept verbatim, so `" bob"` and
/// `"bob"` name different accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Accept any non-empty username.
    pub fn parse(raw: Option<String>) -> DomainResult<Self> {
        match raw {
            Some(value) if !value.is_empty() => Ok(Self(value)),
            _ => Err(DomainError::validation(USERNAME_REQUIRED_MESSAGE)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with default role
    pub fn new(id: Uuid, username: String) -> Self {
        Self {
            id,
            username,
            role: UserRole::User,
            created_at: Utc::now(),
        }
    }

    /// Check if user has admin role
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rejects_absent_and_empty() {
        let expected = DomainError::validation(USERNAME_REQUIRED_MESSAGE);
        assert_eq!(Username::parse(None), Err(expected.clone()));
        assert_eq!(Username::parse(Some(String::new())), Err(expected));
    }

    #[test]
    fn test_username_is_kept_verbatim() {
        let username = Username::parse(Some("  Bob ".to_string())).unwrap();
        assert_eq!(username.as_str(), "  Bob ");
    }

    #[test]
    fn test_role_round_trip_through_strings() {
        assert_eq!(UserRole::from("admin"), UserRole::Admin);
        assert_eq!(UserRole::from("user"), UserRole::User);
        // Unknown values fall back to the least privileged role
        assert_eq!(UserRole::from("superuser"), UserRole::User);
        assert_eq!(String::from(UserRole::Admin), "admin");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&UserRole::Admin).unwrap();
        assert_eq!(json, "\"admin\"");
    }

    #[test]
    fn test_new_user_is_not_admin() {
        let user = User::new(Uuid::new_v4(), "carol".to_string());
        assert!(!user.is_admin());
    }
}
