//! Post-delete record count.

use serde::Serialize;
use utoipa::ToSchema;

/// Total number of stored users, returned after a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct Count {
    #[schema(example = 0)]
    pub count: u64,
}

impl From<u64> for Count {
    fn from(count: u64) -> Self {
        Self { count }
    }
}
