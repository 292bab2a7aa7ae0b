//! Account administration handlers.

use axum::{
    extract::{Extension, State},
    response::Json,
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use common::{AppError, AppResult};
use domain::{user_deleted_message, user_not_found_message, Username, DELETE_FAILED_MESSAGE};
use user_service_lib::DeletionOutcome;

use crate::extractors::ValidatedJson;
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// Delete-account request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct DeleteUserRequest {
    /// Username of the account to remove
    #[validate(
        required(message = "Username is required"),
        length(min = 1, message = "Username is required")
    )]
    #[schema(example = "jdoe")]
    pub username: Option<String>,
}

/// Message-only response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "User jdoe deleted successfully.")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Create account administration routes (nested under `/auth`).
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/delete/user", post(delete_user_by_username))
}

/// Delete a user account by username
#[utoipa::path(
    post,
    path = "/auth/delete/user",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = DeleteUserRequest,
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Username is required", body = common::ErrorResponse),
        (status = 401, description = "Unauthorized", body = common::ErrorResponse),
        (status = 403, description = "Forbidden - policy requires admin", body = common::ErrorResponse),
        (status = 404, description = "No user with that username", body = common::ErrorResponse),
        (status = 500, description = "Persistence failure, with detail", body = common::ErrorResponse)
    )
)]
pub async fn delete_user_by_username(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<DeleteUserRequest>,
) -> AppResult<Json<MessageResponse>> {
    let username = Username::parse(payload.username)?;

    match state.user_service.delete_user_by_username(&username).await {
        Ok(DeletionOutcome::Deleted { rows }) => {
            tracing::info!(
                actor = %current_user.username,
                admin = current_user.is_admin(),
                %username,
                rows,
                "User deleted"
            );
            Ok(Json(MessageResponse::new(user_deleted_message(username.as_str()))))
        }
        Ok(DeletionOutcome::NotFound) => {
            tracing::warn!(actor = %current_user.username, %username, "User to delete not found");
            Err(AppError::not_found(user_not_found_message(username.as_str())))
        }
        Err(e) => {
            tracing::error!(actor = %current_user.username, %username, error = %e, "User deletion failed");
            Err(AppError::operation_failed(DELETE_FAILED_MESSAGE, &e))
        }
    }
}
