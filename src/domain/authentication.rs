//! Credential check outcome.

use serde::Serialize;
use utoipa::ToSchema;

use super::user::{User, UserResponse};

/// Result of `POST /users/authenticate`.
///
/// `user` is only present when `authenticated` is true and is omitted from
/// the JSON body otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Authentication {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
}

impl Authentication {
    /// Compare `password` with the stored one and build the outcome.
    pub fn check(user: User, password: Option<&str>) -> Self {
        if user.password_matches(password) {
            Self::granted(user)
        } else {
            Self::denied()
        }
    }

    pub fn granted(user: User) -> Self {
        Self {
            authenticated: true,
            user: Some(UserResponse::from(user)),
        }
    }

    pub fn denied() -> Self {
        Self {
            authenticated: false,
            user: None,
        }
    }
}
