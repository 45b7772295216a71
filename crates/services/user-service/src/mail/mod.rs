//! Outgoing user notifications.

mod email_job;
mod mail_service;

pub use email_job::EmailJob;
pub use mail_service::{LogMailer, MailService};

#[cfg(any(test, feature = "test-utils"))]
pub use mail_service::MockMailService;
