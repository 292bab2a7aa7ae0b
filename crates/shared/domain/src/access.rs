//! Route-level access rules.

use crate::error::{DomainError, DomainResult};
use crate::user::UserRole;

/// Authorisation requirement attached to a route.
///
/// `require_admin = false` lets any authenticated caller through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccessPolicy {
    pub require_admin: bool,
}

impl AccessPolicy {
    /// Any authenticated caller.
    pub const fn authenticated() -> Self {
        Self {
            require_admin: false,
        }
    }

    /// Admin callers only.
    pub const fn admin_only() -> Self {
        Self {
            require_admin: true,
        }
    }

    /// Check a caller's role against this policy.
    pub fn authorise(&self, role: &UserRole) -> DomainResult<()> {
        if self.require_admin && !role.is_admin() {
            return Err(DomainError::Forbidden);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticated_policy_admits_everyone() {
        let policy = AccessPolicy::authenticated();
        assert!(policy.authorise(&UserRole::User).is_ok());
        assert!(policy.authorise(&UserRole::Admin).is_ok());
    }

    #[test]
    fn test_admin_policy_rejects_plain_users() {
        let policy = AccessPolicy::admin_only();
        assert_eq!(policy.authorise(&UserRole::User), Err(DomainError::Forbidden));
        assert!(policy.authorise(&UserRole::Admin).is_ok());
    }
}
