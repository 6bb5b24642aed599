//! One-shot flash messages
//!
//! A flash set before a redirect travels in the `stagebook_flash` cookie as
//! URL-safe base64 of a JSON list. The next rendered page shows the messages
//! and expires the cookie.

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect, Response};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const FLASH_COOKIE: &str = "stagebook_flash";

/// `Set-Cookie` value that expires the flash cookie
pub const CLEAR_FLASH_COOKIE: &str = "stagebook_flash=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    Message,
    Error,
}

impl FlashCategory {
    pub fn css_class(self) -> &'static str {
        match self {
            FlashCategory::Message => "flash-message",
            FlashCategory::Error => "flash-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub category: FlashCategory,
    pub message: String,
}

impl Flash {
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            category: FlashCategory::Message,
            message: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            category: FlashCategory::Error,
            message: text.into(),
        }
    }
}

/// Flashes delivered with the current request
#[derive(Debug, Clone, Default)]
pub struct PendingFlashes {
    flashes: Vec<Flash>,
    cookie_present: bool,
}

impl PendingFlashes {
    /// Read the flash cookie from request headers; a malformed cookie yields no messages
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let raw = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == FLASH_COOKIE)
            .map(|(_, value)| value.to_string());

        match raw {
            Some(value) => Self {
                flashes: decode(&value),
                cookie_present: true,
            },
            None => Self::default(),
        }
    }

    pub fn messages(&self) -> &[Flash] {
        &self.flashes
    }

    /// True when the response must expire the cookie
    pub fn needs_clearing(&self) -> bool {
        self.cookie_present
    }
}

/// Encode flashes into a cookie value
pub fn encode(flashes: &[Flash]) -> String {
    // Serializing plain strings and unit variants cannot fail
    let json = serde_json::to_vec(flashes).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json)
}

/// Decode a cookie value; anything unreadable decodes to no messages
pub fn decode(value: &str) -> Vec<Flash> {
    let Ok(bytes) = URL_SAFE_NO_PAD.decode(value) else {
        debug!("Ignoring flash cookie with invalid base64");
        return Vec::new();
    };
    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        debug!("Ignoring flash cookie with invalid payload: {}", e);
        Vec::new()
    })
}

/// 303 redirect carrying flashes to the next page
pub fn redirect(to: &str, flashes: Vec<Flash>) -> Response {
    let cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        FLASH_COOKIE,
        encode(&flashes)
    );
    ([(SET_COOKIE, cookie)], Redirect::to(to)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, StatusCode};

    #[test]
    fn test_encode_decode_preserves_category() {
        let flashes = vec![
            Flash::message("Venue The Fillmore was successfully listed!"),
            Flash::error("An error occurred."),
        ];
        assert_eq!(decode(&encode(&flashes)), flashes);
    }

    #[test]
    fn test_decode_garbage_is_empty() {
        assert!(decode("not base64 !!").is_empty());
        assert!(decode(&URL_SAFE_NO_PAD.encode(b"{\"oops\":1}")).is_empty());
    }

    #[test]
    fn test_from_headers_finds_cookie_among_others() {
        let value = encode(&[Flash::message("hello")]);
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("theme=dark; {}={}; lang=en", FLASH_COOKIE, value))
                .unwrap(),
        );

        let pending = PendingFlashes::from_headers(&headers);
        assert!(pending.needs_clearing());
        assert_eq!(pending.messages(), &[Flash::message("hello")]);
    }

    #[test]
    fn test_from_headers_without_cookie() {
        let pending = PendingFlashes::from_headers(&HeaderMap::new());
        assert!(!pending.needs_clearing());
        assert!(pending.messages().is_empty());
    }

    #[test]
    fn test_redirect_sets_cookie() {
        let response = redirect("/venues", vec![Flash::error("nope")]);
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get("location").unwrap(), "/venues");

        let cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(cookie.starts_with("stagebook_flash="));
    }
}
