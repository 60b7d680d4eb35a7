//! User domain entity and related types.
//!
//! Passwords are stored and compared as plain text, without hashing.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity
///
/// Email and password are nullable, matching what a create payload may omit.
/// Never returned to clients directly; see [`UserResponse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub email: Option<String>,
    /// Plain-text password.
    pub password: Option<String>,
}

impl User {
    pub fn new(id: i32, email: Option<String>, password: Option<String>) -> Self {
        Self { id, email, password }
    }

    /// Overwrite the fields present in `patch`, leaving the rest untouched.
    ///
    /// No validation is performed; any text is accepted. The caller is
    /// responsible for persisting the merged record.
    pub fn merge(&mut self, patch: PartialUser) {
        if let Some(email) = patch.email {
            self.email = Some(email);
        }
        if let Some(password) = patch.password {
            self.password = Some(password);
        }
    }

    /// Exact string comparison against the stored password.
    ///
    /// A missing candidate or a missing stored password never matches.
    pub fn password_matches(&self, candidate: Option<&str>) -> bool {
        match (self.password.as_deref(), candidate) {
            (Some(stored), Some(candidate)) => stored == candidate,
            _ => false,
        }
    }
}

/// User-shaped payload where any field may be absent.
///
/// Body of `POST /users` (absent fields are stored as null), of
/// `PATCH /users/{id}` (absent means "do not change") and of
/// `POST /users/authenticate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct PartialUser {
    /// Email address
    #[schema(example = "first@user.com")]
    pub email: Option<String>,
    /// Password (stored as given)
    #[schema(example = "first password")]
    pub password: Option<String>,
}

impl PartialUser {
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserResponse {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub id: i32,
    /// User email address, omitted when null
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "first@user.com")]
    pub email: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}
