//! Bearer token issuing and verification.

mod authenticator;

pub use authenticator::{Authenticator, Claims, TokenResponse};
