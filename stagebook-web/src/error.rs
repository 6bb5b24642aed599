//! Error types for stagebook-web
//!
//! Handler errors render the dedicated 404 and 500 pages instead of JSON.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::pages::{self, HtmlPage};

/// Handler error type
#[derive(Debug, Error)]
pub enum WebError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// stagebook-common error
    #[error(transparent)]
    Common(#[from] stagebook_common::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::NotFound(what)
            | WebError::Common(stagebook_common::Error::NotFound(what)) => {
                warn!("Not found: {}", what);
                HtmlPage::with_status(StatusCode::NOT_FOUND, pages::errors::not_found_page())
                    .into_response()
            }
            other => {
                error!("Request failed: {}", other);
                HtmlPage::with_status(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    pages::errors::server_error_page(),
                )
                .into_response()
            }
        }
    }
}

/// Result type for handlers
pub type WebResult<T> = Result<T, WebError>;

/// Parse a numeric path id; anything else is a missing page
pub fn parse_id(raw: &str) -> WebResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| WebError::NotFound(format!("invalid id {:?}", raw)))
}
