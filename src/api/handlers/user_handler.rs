//! User handlers.
//!
//! Route table (nested under `/users`):
//!
//! | Method | Path            | Handler          |
//! |--------|-----------------|------------------|
//! | GET    | `/`             | [`list_users`]   |
//! | POST   | `/`             | [`create_user`]  |
//! | POST   | `/authenticate` | [`authenticate`] |
//! | GET    | `/{id}`         | [`get_user`]     |
//! | PATCH  | `/{id}`         | [`patch_user`]   |
//! | DELETE | `/{id}`         | [`delete_user`]  |

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};

use crate::api::extractors::{JsonBody, PathParam};
use crate::api::AppState;
use crate::domain::{Authentication, Count, PartialUser, UserResponse};
use crate::errors::AppResult;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/authenticate", post(authenticate))
        .route("/:id", get(get_user).patch(patch_user).delete(delete_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users ordered by id", body = Vec<UserResponse>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Create a user
///
/// Absent or null fields are stored as null.
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = PartialUser,
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 400, description = "Malformed body")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<PartialUser>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.create_user(payload).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Partially update a user; absent fields are left unchanged
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = PartialUser,
    responses(
        (status = 200, description = "Merged user", body = UserResponse),
        (status = 400, description = "Malformed body or invalid id"),
        (status = 404, description = "User not found")
    )
)]
pub async fn patch_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(patch): JsonBody<PartialUser>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.patch_user(id, patch).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Delete a user and return the remaining count
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = Count),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> AppResult<Json<Count>> {
    let count = state.user_service.delete_user(id).await?;
    Ok(Json(count))
}

/// Check an email/password pair
///
/// The password is compared as plain text.
#[utoipa::path(
    post,
    path = "/users/authenticate",
    tag = "Users",
    request_body = PartialUser,
    responses(
        (status = 200, description = "Outcome of the check", body = Authentication),
        (status = 400, description = "Malformed body"),
        (status = 404, description = "No user with this email")
    )
)]
pub async fn authenticate(
    State(state): State<AppState>,
    JsonBody(credentials): JsonBody<PartialUser>,
) -> AppResult<Json<Authentication>> {
    let authentication = state.user_service.authenticate(credentials).await?;
    Ok(Json(authentication))
}
