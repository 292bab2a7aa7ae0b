//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Types here are shared by the user service and the gateway.

pub mod access;
pub mod constants;
pub mod error;
pub mod user;

pub use access::AccessPolicy;
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use user::{User, UserRole, Username};
