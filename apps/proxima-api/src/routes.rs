//! Router and cross-origin policy

use std::sync::Arc;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Browser origins allowed to call the API
pub const ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:5173",
    "http://127.0.0.1:5173",
    "https://proximacloud.ddns.net",
];

/// Credentialed CORS for the fixed origin list. Methods and headers are
/// mirrored because wildcards are not allowed alongside credentials.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(
            ALLOWED_ORIGINS.map(HeaderValue::from_static),
        ))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/", get(handlers::health))
        // QR visit tracking
        .route("/track-qr-visit", post(handlers::track_qr_visit))
        // Contact form relay
        .route("/submit-contact/", post(handlers::submit_contact))
        .route("/submit-contact", post(handlers::submit_contact))
        // Add middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}
