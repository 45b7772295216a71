//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The user service builds its directory on top of these types.

pub mod constants;
pub mod error;
pub mod password;
pub mod seed;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use password::Password;
pub use seed::{default_seed, validate_seed, SeedUser};
pub use user::{emails_match, ensure_email_available, NewUser, User, UserId};
