//! User Service Library
//!
//! An in-memory user directory with login, lookup and registration.
//! Successful logins and registrations are announced through an injected
//! [`mail::MailService`].
//!
//! # Architecture
//!
//! - **config**: Environment-driven settings
//! - **repository**: `UserRepository` trait and the in-memory `UserStore`
//! - **mail**: Notification collaborator and mail payloads
//! - **service**: `UserService` use cases

pub mod config;
pub mod mail;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use common::AppResult;
use domain::default_seed;

use crate::config::UserServiceConfig;
use crate::mail::LogMailer;
use crate::repository::{load_seed_file, UserStore};
use crate::service::UserManager;

/// Wire a user service from configuration.
///
/// Loads the seed (file or built-in fixture), builds the store and hands
/// it, together with a `LogMailer`, to the service constructor.
pub async fn build_user_service(config: &UserServiceConfig) -> AppResult<UserManager> {
    let seed = match &config.seed_file {
        Some(path) => load_seed_file(path).await?,
        None => default_seed(),
    };
    let seeded = seed.len();

    let store = Arc::new(UserStore::new(seed)?);
    let mailer = Arc::new(LogMailer::new(config.mail.clone()));

    info!(users = seeded, "User directory initialized");
    Ok(UserManager::new(store, mailer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::UserService;

    #[tokio::test]
    async fn test_build_with_default_seed() {
        let service = build_user_service(&UserServiceConfig::default())
            .await
            .unwrap();

        let user = service
            .login("bob@example.com".to_string(), "password".to_string())
            .await
            .unwrap();
        assert_eq!(user.name, "Bob");
    }

    #[tokio::test]
    async fn test_build_with_missing_seed_file() {
        let config = UserServiceConfig::default().with_seed_file("/nonexistent/seed.json");
        assert!(build_user_service(&config).await.is_err());
    }
}
