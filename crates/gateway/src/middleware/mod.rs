//! Middleware for authentication and authorisation.

mod auth;
mod authorisation;

pub use auth::{auth_middleware, CurrentUser};
pub use authorisation::authorisation_middleware;
