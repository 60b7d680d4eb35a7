//! User service - Handles user-related business logic.
//!
//! Every operation is a single stateless transaction against the store.
//! Concurrent patches to the same user are last-write-wins.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Authentication, Count, PartialUser, User};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Store a new user and return it with its assigned id
    ///
    /// Fields absent from `payload` are stored as null.
    async fn create_user(&self, payload: PartialUser) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// Merge the present fields of `patch` into the user and persist it
    async fn patch_user(&self, id: i32, patch: PartialUser) -> AppResult<User>;

    /// Delete user by ID and report how many users remain
    async fn delete_user(&self, id: i32) -> AppResult<Count>;

    /// Check an email/password pair against the stored user
    async fn authenticate(&self, credentials: PartialUser) -> AppResult<Authentication>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn create_user(&self, payload: PartialUser) -> AppResult<User> {
        let PartialUser { email, password } = payload;
        let user = self.repo.create(email, password).await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn patch_user(&self, id: i32, patch: PartialUser) -> AppResult<User> {
        let mut user = self.repo.find_by_id(id).await?.ok_or_not_found()?;
        user.merge(patch);
        self.repo.update(user).await
    }

    async fn delete_user(&self, id: i32) -> AppResult<Count> {
        self.repo.delete(id).await?;
        let remaining = self.repo.count().await?;
        tracing::info!(user_id = id, remaining, "User deleted");
        Ok(Count::from(remaining))
    }

    async fn authenticate(&self, credentials: PartialUser) -> AppResult<Authentication> {
        let PartialUser { email, password } = credentials;
        let email = email.ok_or_not_found()?;

        let user = self.repo.find_by_email(&email).await?.ok_or_not_found()?;
        let authentication = Authentication::check(user, password.as_deref());
        if !authentication.authenticated {
            tracing::debug!(%email, "Password mismatch");
        }

        Ok(authentication)
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use tokio_test::{assert_err, assert_ok};

    use super::*;
    use crate::errors::AppError;
    use crate::infra::MockUserRepository;

    fn first_user(id: i32) -> User {
        User::new(
            id,
            Some("first@user.com".to_string()),
            Some("first password".to_string()),
        )
    }

    fn service(repo: MockUserRepository) -> UserManager {
        UserManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_create_user_passes_payload_to_store() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .with(
                eq(Some("new@email.com".to_string())),
                eq(Some("asdfllkj".to_string())),
            )
            .times(1)
            .returning(|email, password| Ok(User::new(1, email, password)));

        let payload = PartialUser::default()
            .with_email("new@email.com")
            .with_password("asdfllkj");
        let user = assert_ok!(service(repo).create_user(payload).await);

        assert_eq!(user.id, 1);
        assert_eq!(user.email.as_deref(), Some("new@email.com"));
    }

    #[tokio::test]
    async fn test_create_user_stores_absent_fields_as_null() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .with(eq(Some("new@email.com".to_string())), eq(None::<String>))
            .times(1)
            .returning(|email, password| Ok(User::new(1, email, password)));

        let payload = PartialUser::default().with_email("new@email.com");
        let user = assert_ok!(service(repo).create_user(payload).await);

        assert_eq!(user.password, None);
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().with(eq(42)).returning(|_| Ok(None));

        let result = service(repo).get_user(42).await;

        assert!(matches!(assert_err!(result), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_patch_password_only_keeps_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(3))
            .returning(|id| Ok(Some(first_user(id))));
        repo.expect_update()
            .withf(|user| {
                user.id == 3
                    && user.email.as_deref() == Some("first@user.com")
                    && user.password.as_deref() == Some("newbadpassword")
            })
            .times(1)
            .returning(Ok);

        let patch = PartialUser::default().with_password("newbadpassword");
        let user = assert_ok!(service(repo).patch_user(3, patch).await);

        assert_eq!(user.email.as_deref(), Some("first@user.com"));
        assert_eq!(user.password.as_deref(), Some("newbadpassword"));
    }

    #[tokio::test]
    async fn test_patch_unknown_user_does_not_save() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_update().never();

        let patch = PartialUser::default().with_email("new@email.com");
        let result = service(repo).patch_user(9, patch).await;

        assert!(matches!(assert_err!(result), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_user_returns_remaining_count() {
        let mut repo = MockUserRepository::new();
        let mut seq = mockall::Sequence::new();
        repo.expect_delete()
            .with(eq(5))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        repo.expect_count()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(2));

        let count = assert_ok!(service(repo).delete_user(5).await);

        assert_eq!(count, Count { count: 2 });
    }

    #[tokio::test]
    async fn test_delete_unknown_user_skips_count() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete().returning(|_| Err(AppError::NotFound));
        repo.expect_count().never();

        let result = service(repo).delete_user(5).await;

        assert!(matches!(assert_err!(result), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_authenticate_with_valid_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "first@user.com")
            .returning(|_| Ok(Some(first_user(1))));

        let credentials = PartialUser::default()
            .with_email("first@user.com")
            .with_password("first password");
        let auth = assert_ok!(service(repo).authenticate(credentials).await);

        assert!(auth.authenticated);
        assert_eq!(auth.user.map(|u| u.id), Some(1));
    }

    #[tokio::test]
    async fn test_authenticate_with_wrong_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Ok(Some(first_user(1))));

        let credentials = PartialUser::default()
            .with_email("first@user.com")
            .with_password("wrong password");
        let auth = assert_ok!(service(repo).authenticate(credentials).await);

        assert_eq!(auth, Authentication::denied());
    }

    #[tokio::test]
    async fn test_authenticate_user_without_password_is_denied() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|email| Ok(Some(User::new(1, Some(email.to_string()), None))));

        let credentials = PartialUser::default().with_email("first@user.com");
        let auth = assert_ok!(service(repo).authenticate(credentials).await);

        assert_eq!(auth, Authentication::denied());
    }

    #[tokio::test]
    async fn test_authenticate_unknown_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));

        let credentials = PartialUser::default()
            .with_email("nobody@user.com")
            .with_password("first password");
        let result = service(repo).authenticate(credentials).await;

        assert!(matches!(assert_err!(result), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_authenticate_without_email_skips_lookup() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().never();

        let credentials = PartialUser::default().with_password("first password");
        let result = service(repo).authenticate(credentials).await;

        assert!(matches!(assert_err!(result), AppError::NotFound));
    }
}
