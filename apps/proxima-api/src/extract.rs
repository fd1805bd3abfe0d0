//! Request extractors

use axum::extract::FromRequest;

use crate::error::ApiError;

/// `Json` that answers every body rejection with 422 and a `detail` message
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ValidJson<T>(pub T);
