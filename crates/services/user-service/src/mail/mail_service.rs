//! Notification mail collaborator.
//!
//! Mail is never actually sent: `LogMailer` renders each notification and
//! logs it, like a development-mode mail transport.

use async_trait::async_trait;

use common::{AppError, AppResult, MailConfig};
use domain::User;

use super::email_job::EmailJob;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Mail service trait for dependency injection.
///
/// Callers treat both notifications as best-effort.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MailService: Send + Sync {
    /// Notify a user that their account was signed in
    async fn send_login_mail(&self, user: &User) -> AppResult<()>;

    /// Welcome a newly registered user
    async fn send_registration_mail(&self, user: &User) -> AppResult<()>;
}

/// Mail service that logs rendered mails instead of sending them.
pub struct LogMailer {
    config: MailConfig,
}

impl LogMailer {
    pub fn new(config: MailConfig) -> Self {
        Self { config }
    }

    fn deliver(&self, job: EmailJob) -> AppResult<()> {
        if !job.has_valid_recipient() {
            return Err(AppError::mail(format!("invalid recipient '{}'", job.to)));
        }

        tracing::info!(
            to = %job.to,
            from = %job.from,
            subject = %job.subject,
            "Processing email job"
        );
        tracing::debug!(
            "=== EMAIL (not sent) ===\n\
             From: {}\n\
             To: {}\n\
             Date: {}\n\
             Subject: {}\n\
             Body:\n{}\n\
             ========================",
            job.from,
            job.to,
            job.queued_at.to_rfc2822(),
            job.subject,
            job.body
        );
        Ok(())
    }
}

#[async_trait]
impl MailService for LogMailer {
    async fn send_login_mail(&self, user: &User) -> AppResult<()> {
        self.deliver(EmailJob::login_notice(user, &self.config))
    }

    async fn send_registration_mail(&self, user: &User) -> AppResult<()> {
        self.deliver(EmailJob::registration_welcome(user, &self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_mailer_accepts_valid_recipient() {
        let mailer = LogMailer::new(MailConfig::default());
        let user = User::new(1, "bob@example.com", "password", "Bob");

        assert!(tokio_test::block_on(mailer.send_login_mail(&user)).is_ok());
        assert!(tokio_test::block_on(mailer.send_registration_mail(&user)).is_ok());
    }

    #[test]
    fn test_log_mailer_rejects_invalid_recipient() {
        let mailer = LogMailer::new(MailConfig::default());
        let user = User::new(5, "not-an-address", "pw", "Mallory");

        let result = tokio_test::block_on(mailer.send_registration_mail(&user));
        assert!(matches!(result, Err(AppError::Mail(_))));
    }
}
