//! Domain layer - Core business entities and logic
//!
//! Contains the user entity with its partial-update merge, the
//! authentication outcome and the post-delete count. No infrastructure
//! dependencies.

pub mod authentication;
pub mod count;
pub mod user;

pub use authentication::Authentication;
pub use count::Count;
pub use user::{PartialUser, User, UserResponse};
