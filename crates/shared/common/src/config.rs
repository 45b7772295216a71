//! Shared configuration structures.

use std::env;

use domain::{DEFAULT_MAIL_FROM, DEFAULT_PRODUCT_NAME};
use serde::{Deserialize, Serialize};

/// Notification mail configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MailConfig {
    /// Sender address for outgoing notifications
    pub from: String,
    /// Product name used in subjects and greetings
    pub product_name: String,
}

impl MailConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            from: env::var("MAIL_FROM").unwrap_or_else(|_| DEFAULT_MAIL_FROM.to_string()),
            product_name: env::var("MAIL_PRODUCT_NAME")
                .unwrap_or_else(|_| DEFAULT_PRODUCT_NAME.to_string()),
        }
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            from: DEFAULT_MAIL_FROM.to_string(),
            product_name: DEFAULT_PRODUCT_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env vars are process-wide, so every case runs in this one test
    #[test]
    fn test_from_env_overrides_and_defaults() {
        env::set_var("MAIL_FROM", "alerts@acme.test");
        env::set_var("MAIL_PRODUCT_NAME", "Acme");
        let config = MailConfig::from_env();
        assert_eq!(config.from, "alerts@acme.test");
        assert_eq!(config.product_name, "Acme");

        env::remove_var("MAIL_FROM");
        env::remove_var("MAIL_PRODUCT_NAME");
        let config = MailConfig::from_env();
        assert_eq!(config.from, "noreply@example.com");
        assert_eq!(config.product_name, "User Directory");
        assert_eq!(config, MailConfig::default());
    }
}
