//! In-memory user repository.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::AppResult;
use domain::{default_seed, ensure_email_available, validate_seed, NewUser, User, UserId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Records keep insertion order. `create` is the only mutation.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Find user by email address (case-insensitive)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// First record matching the email (case-insensitive) and password (exact)
    async fn find_by_credentials(&self, email: &str, password: &str) -> AppResult<Option<User>>;

    /// Append a new user with the next id.
    ///
    /// Fails with `Conflict` if the email is already taken.
    async fn create(&self, new_user: NewUser) -> AppResult<User>;

    /// List all users in insertion order
    async fn list(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserRepository backed by a shared vector.
#[derive(Clone)]
pub struct UserStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl UserStore {
    /// Create a store holding `seed`, rejecting duplicate ids or emails.
    pub fn new(seed: Vec<User>) -> AppResult<Self> {
        validate_seed(&seed)?;
        Ok(Self {
            users: Arc::new(RwLock::new(seed)),
        })
    }

    /// Create a store holding the built-in fixture
    pub fn seeded() -> AppResult<Self> {
        Self::new(default_seed())
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.has_email(email)).cloned())
    }

    async fn find_by_credentials(&self, email: &str, password: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.has_credentials(email, password))
            .cloned())
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        // Check, id assignment and append happen under one write guard
        let mut users = self.users.write().await;

        ensure_email_available(users.iter(), &new_user.email)?;
        let id = User::next_id(users.iter())?;

        let user = new_user.into_user(id);
        users.push(user.clone());
        Ok(user)
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }
}
