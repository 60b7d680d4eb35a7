//! User repository - the store behind every user operation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use super::base::CrudRepository;
use super::entities::{UserActiveModel, UserColumn, UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; the store assigns the id. Absent fields are stored as null
    async fn create(&self, email: Option<String>, password: Option<String>) -> AppResult<User>;

    /// Persist all fields of an existing user
    async fn update(&self, user: User) -> AppResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Find user by exact email match (lowest id wins on duplicates)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List all users ordered by id
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Delete user by ID
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// Total number of stored users
    async fn count(&self) -> AppResult<u64>;
}

/// SeaORM-backed implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl CrudRepository<UserEntity> for UserStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, email: Option<String>, password: Option<String>) -> AppResult<User> {
        let active_model = UserActiveModel {
            id: ActiveValue::NotSet,
            email: ActiveValue::Set(email),
            password: ActiveValue::Set(password),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(User::from(model))
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let active_model = UserActiveModel {
            id: ActiveValue::Unchanged(user.id),
            email: ActiveValue::Set(user.email),
            password: ActiveValue::Set(user.password),
        };

        let model = active_model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => AppError::NotFound,
            other => AppError::from(other),
        })?;
        Ok(User::from(model))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = self.find_by_key(id).await?;
        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .order_by_asc(UserColumn::Id)
            .one(&self.db)
            .await?;

        Ok(result.map(User::from))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(UserColumn::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        if self.delete_by_key(id).await? == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        self.count_rows().await
    }
}
