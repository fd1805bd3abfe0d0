//! Contact form request/response structures

use serde::{Deserialize, Serialize};

/// One contact form submission.
///
/// All four fields are required; none are format-checked, so `email` may be
/// any string the visitor typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Result of a successful relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailReceipt {
    pub message: String,
}

impl MailReceipt {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
