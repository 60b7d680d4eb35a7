//! Entity-agnostic repository operations.
//!
//! Implementors only supply the connection; lookups, counting and deletion
//! by primary key come for free for any SeaORM entity.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, PrimaryKeyTrait};

use crate::errors::AppResult;

/// Generic CRUD operations keyed by primary key.
#[async_trait]
pub trait CrudRepository<E>: Send + Sync
where
    E: EntityTrait,
    E::Model: Send + Sync,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Find entity by primary key
    async fn find_by_key(
        &self,
        key: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> AppResult<Option<E::Model>>
    where
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: Send,
    {
        E::find_by_id(key).one(self.db()).await.map_err(Into::into)
    }

    /// Count all entities
    async fn count_rows(&self) -> AppResult<u64> {
        E::find()
            .paginate(self.db(), 1)
            .num_items()
            .await
            .map_err(Into::into)
    }

    /// Delete entity by primary key, returning the number of rows removed
    async fn delete_by_key(
        &self,
        key: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> AppResult<u64>
    where
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: Send,
    {
        let result = E::delete_by_id(key).exec(self.db()).await?;
        Ok(result.rows_affected)
    }
}
