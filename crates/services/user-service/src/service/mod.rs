//! Account use cases.

mod user_service;

pub use user_service::{DeletionOutcome, UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use user_service::MockUserService;
