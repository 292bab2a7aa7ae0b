//! Role-based authorisation middleware.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use common::AppError;
use domain::AccessPolicy;

use super::auth::CurrentUser;

/// Check the authenticated caller against the route's [`AccessPolicy`].
///
/// Must run after [`super::auth_middleware`]; a request without a
/// `CurrentUser` is treated as unauthenticated.
pub async fn authorisation_middleware(
    State(policy): State<AccessPolicy>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let user = request
        .extensions()
        .get::<CurrentUser>()
        .ok_or(AppError::Unauthorized)?;

    if let Err(e) = policy.authorise(&user.role) {
        tracing::warn!(username = %user.username, role = %user.role, "Caller lacks required role");
        return Err(e.into());
    }

    Ok(next.run(request).await)
}
