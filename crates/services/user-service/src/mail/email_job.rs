//! Notification mail payloads.

use chrono::{DateTime, Utc};
use serde::Serialize;

use common::MailConfig;
use domain::User;

/// Email job payload
#[derive(Debug, Clone, Serialize)]
pub struct EmailJob {
    /// Recipient email address
    pub to: String,
    /// Sender address
    pub from: String,
    /// Email subject line
    pub subject: String,
    /// Plain text body
    pub body: String,
    /// When the job was created
    pub queued_at: DateTime<Utc>,
}

impl EmailJob {
    /// Create a new email job from the configured sender
    pub fn new(
        config: &MailConfig,
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into(),
            from: config.from.clone(),
            subject: subject.into(),
            body: body.into(),
            queued_at: Utc::now(),
        }
    }

    /// "New sign-in" notice sent after a successful login
    pub fn login_notice(user: &User, config: &MailConfig) -> Self {
        let subject = format!("[{}] New sign-in to your account", config.product_name);
        let mut job = Self::new(config, &user.email, subject, String::new());
        job.body = format!(
            "Hi {name},\n\n\
             Your account {email} was signed in at {at}.\n\
             If this wasn't you, please contact support.\n\n\
             -- {product}",
            name = user.name,
            email = user.email,
            at = job.queued_at.format("%Y-%m-%d %H:%M:%S UTC"),
            product = config.product_name,
        );
        job
    }

    /// Welcome mail sent after a successful registration
    pub fn registration_welcome(user: &User, config: &MailConfig) -> Self {
        let subject = format!("Welcome to {}", config.product_name);
        let body = format!(
            "Hi {name},\n\n\
             Thanks for registering with {product}.\n\
             Your account id is {id} and you sign in with {email}.\n\n\
             -- {product}",
            name = user.name,
            product = config.product_name,
            id = user.id,
            email = user.email,
        );

        Self::new(config, &user.email, subject, body)
    }

    /// Basic recipient sanity check, `local@domain`
    pub fn has_valid_recipient(&self) -> bool {
        match self.to.split_once('@') {
            Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carol() -> User {
        User::new(4, "carol@example.com", "pw", "Carol")
    }

    #[test]
    fn test_login_notice() {
        let config = MailConfig::default();
        let job = EmailJob::login_notice(&carol(), &config);

        assert_eq!(job.to, "carol@example.com");
        assert_eq!(job.from, config.from);
        assert!(job.subject.contains("New sign-in"));
        assert!(job.body.starts_with("Hi Carol,"));
    }

    #[test]
    fn test_login_notice_body_uses_queued_at() {
        let job = EmailJob::login_notice(&carol(), &MailConfig::default());
        let stamp = job.queued_at.format("%Y-%m-%d %H:%M:%S UTC").to_string();

        assert!(job.body.contains(&stamp));
    }

    #[test]
    fn test_registration_welcome_mentions_id() {
        let config = MailConfig {
            from: "hello@acme.test".to_string(),
            product_name: "Acme".to_string(),
        };
        let job = EmailJob::registration_welcome(&carol(), &config);

        assert_eq!(job.subject, "Welcome to Acme");
        assert_eq!(job.from, "hello@acme.test");
        assert!(job.body.contains("account id is 4"));
        assert!(!job.body.contains("pw"));
    }

    #[test]
    fn test_recipient_check() {
        let config = MailConfig::default();

        assert!(EmailJob::new(&config, "a@b", "s", "b").has_valid_recipient());
        assert!(!EmailJob::new(&config, "nobody", "s", "b").has_valid_recipient());
        assert!(!EmailJob::new(&config, "@example.com", "s", "b").has_valid_recipient());
    }
}
