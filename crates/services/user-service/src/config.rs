//! User service configuration.

use std::env;
use std::path::PathBuf;

use common::MailConfig;

/// User service configuration.
#[derive(Debug, Clone, Default)]
pub struct UserServiceConfig {
    /// JSON file with the initial records; the built-in fixture is used when unset
    pub seed_file: Option<PathBuf>,
    /// Notification mail settings
    pub mail: MailConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            seed_file: env::var("USER_SERVICE_SEED_FILE")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            mail: MailConfig::from_env(),
        }
    }

    /// Override the seed file (e.g. from a CLI flag).
    pub fn with_seed_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.seed_file = Some(path.into());
        self
    }
}
