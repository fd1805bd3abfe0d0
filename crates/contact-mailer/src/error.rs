//! Error types for the contact mailer

use thiserror::Error;

/// Failure while relaying a contact submission
#[derive(Debug, Error)]
pub enum MailError {
    /// The relay rejected the sender credentials
    #[error("SMTP Authentication Error. Check your GMAIL_SENDER_EMAIL and GMAIL_APP_PASSWORD.")]
    Authentication,

    /// The relay could not be reached or the session dropped
    #[error("SMTP Connection Error. Could not connect to Gmail's SMTP server. Check internet connection or firewall.")]
    Connection(String),

    #[error("Failed to build email: {0}")]
    Message(String),

    #[error("{0}")]
    Transport(String),
}

/// Missing or malformed environment configuration
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },

    #[error("Cannot set up SMTP relay {host}: {reason}")]
    Relay { host: String, reason: String },
}
