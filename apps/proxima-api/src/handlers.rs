//! HTTP handlers for the Proxima API

use std::sync::Arc;

use axum::{extract::State, Json};
use contact_mailer::{ContactSubmission, MailReceipt};

use crate::error::ApiError;
use crate::extract::ValidJson;
use crate::models::{HealthResponse, MessageResponse, VisitEvent};
use crate::state::AppState;

/// Health check endpoint
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        sender: state.sender_email.clone(),
        reciever: state.receiver_email.clone(),
        message: "Fast API is running.".to_string(),
    })
}

/// Record one QR code visit
pub async fn track_qr_visit(
    State(state): State<Arc<AppState>>,
    ValidJson(visit): ValidJson<VisitEvent>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.visits.record(&visit).await?;

    tracing::info!(source = %visit.source, "Tracked QR visit");

    Ok(Json(MessageResponse::new("QR visit tracked successfully!")))
}

/// Relay a contact form submission by email
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    ValidJson(submission): ValidJson<ContactSubmission>,
) -> Result<Json<MailReceipt>, ApiError> {
    let mailer = state.mailer.clone();

    // Own task so a panic in the mail path still yields a response
    let receipt = tokio::spawn(async move { mailer.send_contact(&submission).await })
        .await
        .map_err(|e| ApiError::ContactDispatch(e.to_string()))??;

    Ok(Json(receipt))
}
