//! OpenAPI documentation.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::auth::TokenResponse;
use crate::handlers::user_handler::{DeleteUserRequest, MessageResponse};
use common::ErrorResponse;
use domain::UserRole;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(crate::handlers::user_handler::delete_user_by_username),
    components(
        schemas(
            DeleteUserRequest,
            MessageResponse,
            ErrorResponse,
            TokenResponse,
            UserRole,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Users", description = "User account administration"),
    )
)]
pub struct ApiDoc;

/// Security scheme modifier.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_delete_endpoint_with_bearer_scheme() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/auth/delete/user"));

        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
        assert!(components.schemas.contains_key("DeleteUserRequest"));
        assert!(components.schemas.contains_key("ErrorResponse"));
    }
}
