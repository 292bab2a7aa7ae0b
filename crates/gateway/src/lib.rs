//! API Gateway Library
//!
//! HTTP surface for account administration: the authenticated
//! `POST /auth/delete/user` endpoint, health checks and API docs, backed
//! in-process by the user service.

pub mod auth;
pub mod config;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use common::AppResult;
use domain::{User, UserRole, Username};
use user_service_lib::UserService;

use crate::auth::{Authenticator, TokenResponse};
use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Connect to the database and run the HTTP server until shutdown.
pub async fn run_server(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    let user_service = Arc::new(user_service_lib::connect_service(&config.database).await?);

    let addr: SocketAddr = config.server_addr().parse()?;
    info!(
        require_admin = config.delete_user_policy.require_admin,
        "User deletion policy loaded"
    );

    let state = AppState::new(user_service, config);
    let app = create_router(state);

    info!("Gateway listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Mint a bearer token for an existing user, carrying their stored role.
pub async fn issue_token(config: &GatewayConfig, username: &str) -> AppResult<TokenResponse> {
    let service = user_service_lib::connect_service(&config.database).await?;
    let user = service.get_user_by_username(username).await?;

    Authenticator::new(config.jwt.clone()).issue_token(&user.username, &user.role)
}

/// Create a user account.
pub async fn add_user(config: &GatewayConfig, username: &str, role: UserRole) -> AppResult<User> {
    let username = Username::parse(Some(username.to_string()))?;
    let service = user_service_lib::connect_service(&config.database).await?;
    service.create_user(username, role).await
}
