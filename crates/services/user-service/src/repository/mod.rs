//! Repository layer for data access.

mod seed_file;
mod user_repository;

pub use seed_file::load_seed_file;
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
