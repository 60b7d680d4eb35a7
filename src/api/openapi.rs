//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::domain::{Authentication, Count, PartialUser, UserResponse};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::user_handler::list_users,
        crate::api::handlers::user_handler::create_user,
        crate::api::handlers::user_handler::get_user,
        crate::api::handlers::user_handler::patch_user,
        crate::api::handlers::user_handler::delete_user,
        crate::api::handlers::user_handler::authenticate,
    ),
    components(
        schemas(
            PartialUser,
            UserResponse,
            Authentication,
            Count,
        )
    ),
    tags(
        (name = "Users", description = "User management endpoints"),
    )
)]
pub struct ApiDoc;
