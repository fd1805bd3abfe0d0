//! Contact Mailer - relays website contact form submissions over SMTP
//!
//! Each submission is rendered into a small HTML email and sent from the
//! configured sender account to the configured receiver, over a STARTTLS
//! session with the Gmail relay.
//!
//! ## Architecture
//!
//! ```text
//! HTTP gateway → ContactMailer (this) → smtp.gmail.com:587 → Receiver inbox
//! ```
//!
//! The gateway only sees the [`ContactMailer`] trait, so tests can swap the
//! SMTP transport for an in-memory stub.
//!
//! ## Failure taxonomy
//!
//! | Variant | Cause |
//! |---|---|
//! | [`MailError::Authentication`] | relay rejected the sender credentials |
//! | [`MailError::Connection`] | relay unreachable, TLS failure, timeout |
//! | [`MailError::Message`] | message could not be built |
//! | [`MailError::Transport`] | any other SMTP failure |

use std::time::Duration;

use async_trait::async_trait;

pub mod error;
pub mod smtp;
pub mod template;
pub mod types;

pub use error::{ConfigError, MailError};
pub use smtp::SmtpSender;
pub use template::{render_contact_email, subject_line};
pub use types::{ContactSubmission, MailReceipt};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed SMTP relay host
pub const SMTP_SERVER: &str = "smtp.gmail.com";

/// STARTTLS submission port
pub const SMTP_PORT: u16 = 587;

/// Default bound on a whole SMTP session
pub const DEFAULT_SMTP_TIMEOUT_SECS: u64 = 10;

/// Message returned to the caller after a successful relay
pub const SUCCESS_MESSAGE: &str = "Contact form submitted successfully!";

/// Sends one contact submission as an email.
///
/// Exactly one attempt is made per call; implementations never retry.
#[async_trait]
pub trait ContactMailer: Send + Sync {
    async fn send_contact(&self, submission: &ContactSubmission) -> Result<MailReceipt, MailError>;
}

/// Configuration for the SMTP relay
#[derive(Clone)]
pub struct MailerConfig {
    /// Gmail account the message is sent from (also the SMTP username)
    pub sender_email: String,

    /// Gmail app password for `sender_email`
    pub app_password: String,

    /// Mailbox that receives contact submissions
    pub receiver_email: String,

    /// Relay host
    pub smtp_host: String,

    /// Relay port
    pub smtp_port: u16,

    /// Bound on the SMTP session
    pub timeout: Duration,
}

impl std::fmt::Debug for MailerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailerConfig")
            .field("sender_email", &self.sender_email)
            .field("app_password", &"<redacted>")
            .field("receiver_email", &self.receiver_email)
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl MailerConfig {
    /// Load from environment variables
    ///
    /// Expected variables:
    /// - GMAIL_SENDER_EMAIL (required)
    /// - GMAIL_APP_PASSWORD (required)
    /// - GMAIL_RECIEVER_EMAIL (required)
    /// - SMTP_TIMEOUT_SECS (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let sender_email = required("GMAIL_SENDER_EMAIL")?;
        let app_password = required("GMAIL_APP_PASSWORD")?;
        let receiver_email = required("GMAIL_RECIEVER_EMAIL")?;

        let timeout_secs = match lookup("SMTP_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
                key: "SMTP_TIMEOUT_SECS",
                reason: e.to_string(),
            })?,
            None => DEFAULT_SMTP_TIMEOUT_SECS,
        };

        Ok(Self {
            sender_email,
            app_password,
            receiver_email,
            smtp_host: SMTP_SERVER.to_string(),
            smtp_port: SMTP_PORT,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
