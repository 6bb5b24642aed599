//! HTTP handlers for stagebook-web

pub mod artists;
pub mod health;
pub mod shows;
pub mod venues;

pub use artists::artist_routes;
pub use health::health_routes;
pub use shows::show_routes;
pub use venues::venue_routes;

use axum::{
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::error::WebError;
use crate::flash::{Flash, PendingFlashes};
use crate::forms::CHECK_FIELDS_MESSAGE;
use crate::pages::{self, HtmlPage};

const STYLESHEET: &str = include_str!("../../static/stagebook.css");

/// Search box submission (`search_term` form field)
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

/// GET /
pub async fn home(headers: HeaderMap) -> HtmlPage {
    let pending = PendingFlashes::from_headers(&headers);
    HtmlPage::ok(pages::home::home_page(pending.messages())).consuming(&pending)
}

/// GET /static/stagebook.css
pub async fn serve_css() -> Response {
    (
        StatusCode::OK,
        [("content-type", "text/css; charset=utf-8")],
        STYLESHEET,
    )
        .into_response()
}

/// Fallback for unmatched routes
pub async fn not_found() -> WebError {
    WebError::NotFound("no matching route".to_string())
}

/// Re-rendered form after failed validation: 422 plus the check-fields flash
pub(crate) fn invalid_form(pending: &PendingFlashes, render: impl FnOnce(&[Flash]) -> String) -> Response {
    let mut flashes = pending.messages().to_vec();
    flashes.push(Flash::error(CHECK_FIELDS_MESSAGE));
    HtmlPage::with_status(StatusCode::UNPROCESSABLE_ENTITY, render(&flashes))
        .consuming(pending)
        .into_response()
}
