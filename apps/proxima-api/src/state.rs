//! Application state for the Proxima API

use std::sync::Arc;

use anyhow::Result;
use contact_mailer::{ContactMailer, SmtpSender};

use crate::config::ServiceConfig;
use crate::store::{PgVisitStore, VisitStore};

/// Read-only state shared by every request
pub struct AppState {
    pub visits: Arc<dyn VisitStore>,
    pub mailer: Arc<dyn ContactMailer>,
    pub sender_email: String,
    pub receiver_email: String,
}

impl AppState {
    pub fn new(
        visits: Arc<dyn VisitStore>,
        mailer: Arc<dyn ContactMailer>,
        sender_email: impl Into<String>,
        receiver_email: impl Into<String>,
    ) -> Self {
        Self {
            visits,
            mailer,
            sender_email: sender_email.into(),
            receiver_email: receiver_email.into(),
        }
    }
}

/// Startup resources. The Postgres store is kept separately so `main` can
/// close its pool once the server has stopped.
pub struct Resources {
    pub state: Arc<AppState>,
    pub visits: Arc<PgVisitStore>,
}

impl Resources {
    pub async fn init(config: &ServiceConfig) -> Result<Self> {
        let visits = Arc::new(PgVisitStore::connect(&config.database).await?);
        let mailer = Arc::new(SmtpSender::new(&config.mail)?);

        tracing::info!(
            "Relaying contact form mail from {} to {} via {}:{} (contact-mailer v{})",
            config.mail.sender_email,
            config.mail.receiver_email,
            config.mail.smtp_host,
            config.mail.smtp_port,
            contact_mailer::VERSION
        );

        let state = AppState::new(
            visits.clone(),
            mailer,
            config.mail.sender_email.clone(),
            config.mail.receiver_email.clone(),
        );

        Ok(Self {
            state: Arc::new(state),
            visits,
        })
    }
}
