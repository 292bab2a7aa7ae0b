//! Domain-level constants.
//!
//! These constants define business rules and the wording returned to callers.

// =============================================================================
// User Roles
// =============================================================================

/// Default role assigned to new users
pub const ROLE_USER: &str = "user";

/// Administrator role with elevated privileges
pub const ROLE_ADMIN: &str = "admin";

// =============================================================================
// Account deletion
// =============================================================================

/// Returned when a delete request carries no usable username
pub const USERNAME_REQUIRED_MESSAGE: &str = "Username is required";

/// Returned when the persistence layer fails during a delete
pub const DELETE_FAILED_MESSAGE: &str = "An error occurred while deleting the user.";

/// Message for a successful delete.
pub fn user_deleted_message(username: &str) -> String {
    format!("User {} deleted successfully.", username)
}

/// Message for a delete that matched no account.
pub fn user_not_found_message(username: &str) -> String {
    format!("User {} not found.", username)
}

// =============================================================================
// Authentication
// =============================================================================

/// Default JWT token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Seconds per hour (for token expiration calculation)
pub const SECONDS_PER_HOUR: i64 = 3600;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// JWT token type identifier
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_username() {
        assert_eq!(user_deleted_message("alice"), "User alice deleted successfully.");
        assert_eq!(user_not_found_message("bob"), "User bob not found.");
    }
}
