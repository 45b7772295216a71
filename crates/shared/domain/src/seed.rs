//! Initial directory contents.

use std::collections::HashSet;

use serde::Deserialize;

use crate::constants::{SEED_PASSWORD, SEED_USERS};
use crate::error::{DomainError, DomainResult};
use crate::user::{fold_email, User, UserId};

/// One record of a seed file
#[derive(Debug, Clone, Deserialize)]
pub struct SeedUser {
    pub id: UserId,
    pub email: String,
    pub password: String,
    pub name: String,
}

impl From<SeedUser> for User {
    fn from(seed: SeedUser) -> Self {
        User::new(seed.id, seed.email, seed.password, seed.name)
    }
}

/// The built-in fixture: Bob, Alice and Tom.
pub fn default_seed() -> Vec<User> {
    SEED_USERS
        .iter()
        .map(|(id, email, name)| User::new(*id, *email, SEED_PASSWORD, *name))
        .collect()
}

/// Check that ids are unique and emails are unique ignoring case.
pub fn validate_seed(users: &[User]) -> DomainResult<()> {
    let mut ids = HashSet::with_capacity(users.len());
    let mut emails = HashSet::with_capacity(users.len());

    for user in users {
        if !ids.insert(user.id) {
            return Err(DomainError::validation(format!(
                "Duplicate user id {} in seed",
                user.id
            )));
        }
        if !emails.insert(fold_email(&user.email)) {
            return Err(DomainError::validation(format!(
                "Duplicate email '{}' in seed",
                user.email
            )));
        }
    }

    Ok(())
}
