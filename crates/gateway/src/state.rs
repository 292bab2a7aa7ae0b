//! Application state for dependency injection.

use std::sync::Arc;

use user_service_lib::UserService;

use crate::auth::Authenticator;
use crate::config::GatewayConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub authenticator: Arc<Authenticator>,
    pub config: GatewayConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(user_service: Arc<dyn UserService>, config: GatewayConfig) -> Self {
        let authenticator = Arc::new(Authenticator::new(config.jwt.clone()));
        Self {
            user_service,
            authenticator,
            config,
        }
    }
}
