//! SMTP relay implementation
//!
//! Sends contact emails through an authenticated STARTTLS session and maps
//! lettre failures onto [`MailError`].

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::{
        authentication::Credentials,
        response::{Category, Code, Detail, Severity},
        Error as SmtpError,
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{error, info, instrument, warn};

use crate::error::{ConfigError, MailError};
use crate::template::{render_contact_email, subject_line};
use crate::types::{ContactSubmission, MailReceipt};
use crate::{ContactMailer, MailerConfig, SUCCESS_MESSAGE};

/// Contact mailer backed by a lettre SMTP transport
pub struct SmtpSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpSender {
    /// Build the transport and parse both mailboxes.
    ///
    /// No connection is opened here; the relay is first contacted on send.
    pub fn new(config: &MailerConfig) -> Result<Self, ConfigError> {
        let from: Mailbox = config
            .sender_email
            .parse()
            .map_err(|e: lettre::address::AddressError| ConfigError::Invalid {
                key: "GMAIL_SENDER_EMAIL",
                reason: e.to_string(),
            })?;
        let to: Mailbox = config
            .receiver_email
            .parse()
            .map_err(|e: lettre::address::AddressError| ConfigError::Invalid {
                key: "GMAIL_RECIEVER_EMAIL",
                reason: e.to_string(),
            })?;

        let credentials =
            Credentials::new(config.sender_email.clone(), config.app_password.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| ConfigError::Relay {
                host: config.smtp_host.clone(),
                reason: e.to_string(),
            })?
            .port(config.smtp_port)
            .credentials(credentials)
            .timeout(Some(config.timeout))
            .build();

        Ok(Self { transport, from, to })
    }

    fn build_message(&self, submission: &ContactSubmission) -> Result<Message, MailError> {
        Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(subject_line(submission))
            .header(ContentType::TEXT_HTML)
            .body(render_contact_email(submission))
            .map_err(|e| MailError::Message(e.to_string()))
    }
}

#[async_trait]
impl ContactMailer for SmtpSender {
    #[instrument(skip(self, submission), fields(from = %submission.email))]
    async fn send_contact(&self, submission: &ContactSubmission) -> Result<MailReceipt, MailError> {
        let message = self.build_message(submission)?;

        self.transport.send(message).await.map_err(|e| {
            error!(error = %e, "SMTP send failed");
            classify(e)
        })?;

        info!(
            "Contact form email sent successfully from {} to {}",
            submission.email, self.to
        );

        Ok(MailReceipt::new(SUCCESS_MESSAGE))
    }
}

/// Map a lettre SMTP error onto the mail failure taxonomy
fn classify(err: SmtpError) -> MailError {
    if let Some(code) = err.status() {
        if is_auth_rejection(&code) {
            warn!(%code, "SMTP relay rejected credentials");
            return MailError::Authentication;
        }
        return MailError::Transport(err.to_string());
    }

    if err.is_client() || err.is_response() {
        return MailError::Transport(err.to_string());
    }

    // network, TLS and timeout failures carry no reply code
    MailError::Connection(err.to_string())
}

/// 534 (mechanism too weak / app password required) and 535 (bad credentials)
fn is_auth_rejection(code: &Code) -> bool {
    matches!(code.severity, Severity::PermanentNegativeCompletion)
        && matches!(code.category, Category::Unspecified3)
        && matches!(code.detail, Detail::Four | Detail::Five)
}
