//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and the user store to fulfill
//! application use cases. They depend on the `UserRepository` trait, not
//! on a concrete database.

mod user_service;

pub use user_service::{UserManager, UserService};
