//! User service - Login, lookup and registration over the user directory.
//!
//! SOLID (SRP): Handles user-related use cases only.
//! SOLID (DIP): Depends on repository and mail traits, injected at construction.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{NewUser, User, UserId};

use crate::mail::MailService;
use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Authenticate by email (case-insensitive) and password (exact).
    ///
    /// Unknown email and wrong password both yield `InvalidCredentials`.
    async fn login(&self, email: String, password: String) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: UserId) -> AppResult<User>;

    /// Register a new user; the email must not exist in any letter case
    async fn register(&self, email: String, password: String, name: String) -> AppResult<User>;

    /// List all users in directory order
    async fn list_users(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserService.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    mailer: Arc<dyn MailService>,
}

impl UserManager {
    /// Create new user service instance with its collaborators
    pub fn new(repo: Arc<dyn UserRepository>, mailer: Arc<dyn MailService>) -> Self {
        Self { repo, mailer }
    }

    async fn notify_login(&self, user: &User) {
        if let Err(e) = self.mailer.send_login_mail(user).await {
            tracing::warn!(user_id = user.id, error = %e, "Login mail failed");
        }
    }

    async fn notify_registration(&self, user: &User) {
        if let Err(e) = self.mailer.send_registration_mail(user).await {
            tracing::warn!(user_id = user.id, error = %e, "Registration mail failed");
        }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn login(&self, email: String, password: String) -> AppResult<User> {
        let user = match self.repo.find_by_credentials(&email, &password).await? {
            Some(user) => user,
            None => {
                tracing::warn!(email = %email, "Login failed");
                return Err(AppError::InvalidCredentials);
            }
        };

        self.notify_login(&user).await;
        tracing::info!(user_id = user.id, "User logged in");
        Ok(user)
    }

    async fn get_user(&self, id: UserId) -> AppResult<User> {
        tracing::debug!(user_id = id, "Looking up user");
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn register(&self, email: String, password: String, name: String) -> AppResult<User> {
        // Early rejection; `create` repeats the check under the write lock
        if self.repo.find_by_email(&email).await?.is_some() {
            tracing::warn!("Registration rejected: email already exists");
            return Err(AppError::Conflict("Email".to_string()));
        }

        let user = self
            .repo
            .create(NewUser::new(email, password, name))
            .await
            .map_err(|e| {
                if matches!(e, AppError::Conflict(_)) {
                    tracing::warn!("Registration rejected: email already exists");
                }
                e
            })?;

        self.notify_registration(&user).await;
        tracing::info!(user_id = user.id, email = %user.email, "User registered");
        Ok(user)
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }
}
