//! Field validators
//!
//! Each validator takes the raw (already trimmed) submission and returns the
//! typed value or the message shown next to the field.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use stagebook_common::datetime::parse_datetime;
use stagebook_common::genres::{is_known_genre, is_storable};
use url::Url;

/// Two-letter codes accepted for `state`
pub const STATE_CHOICES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

pub const NAME_MAX: usize = 120;
pub const LINK_MAX: usize = 500;

// North American 10-digit number with optional area-code parentheses and separators
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(?\d{3}\)?[-. ]?\d{3}[-. ]?\d{4}$").expect("phone pattern compiles")
});

const REQUIRED: &str = "This field is required.";

fn too_long(max: usize) -> String {
    format!("Field cannot be longer than {} characters.", max)
}

/// Non-empty text of at most `max` characters
pub fn required(value: &str, max: usize) -> Result<String, String> {
    if value.is_empty() {
        return Err(REQUIRED.to_string());
    }
    if value.chars().count() > max {
        return Err(too_long(max));
    }
    Ok(value.to_string())
}

/// Optional text of at most `max` characters; blank becomes `None`
pub fn optional(value: &str, max: usize) -> Result<Option<String>, String> {
    if value.is_empty() {
        return Ok(None);
    }
    if value.chars().count() > max {
        return Err(too_long(max));
    }
    Ok(Some(value.to_string()))
}

/// One of [`STATE_CHOICES`], case-insensitive
pub fn state(value: &str) -> Result<String, String> {
    if value.is_empty() {
        return Err(REQUIRED.to_string());
    }
    let upper = value.to_ascii_uppercase();
    if STATE_CHOICES.contains(&upper.as_str()) {
        Ok(upper)
    } else {
        Err("Not a valid choice.".to_string())
    }
}

/// Optional phone number
pub fn phone(value: &str) -> Result<Option<String>, String> {
    if value.is_empty() {
        return Ok(None);
    }
    if PHONE_RE.is_match(value) {
        Ok(Some(value.to_string()))
    } else {
        Err("Invalid phone number. Use a format like 415-555-0100.".to_string())
    }
}

/// Optional absolute http(s) URL of at most `max` characters
pub fn link(value: &str, max: usize) -> Result<Option<String>, String> {
    let Some(value) = optional(value, max)? else {
        return Ok(None);
    };

    match Url::parse(&value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host().is_some() => {
            Ok(Some(value))
        }
        _ => Err("Invalid URL.".to_string()),
    }
}

/// At least one genre, each from the fixed choice list, without duplicates
pub fn genres(values: &[String]) -> Result<Vec<String>, String> {
    let mut chosen: Vec<String> = Vec::new();
    for value in values.iter().filter(|v| !v.is_empty()) {
        if !is_known_genre(value) || !is_storable(value) {
            return Err(format!("'{}' is not a valid choice for this field.", value));
        }
        if !chosen.contains(value) {
            chosen.push(value.clone());
        }
    }

    if chosen.is_empty() {
        return Err(REQUIRED.to_string());
    }
    Ok(chosen)
}

/// HTML checkbox: present with a truthy value means checked
pub fn checkbox(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("y" | "yes" | "on" | "true" | "1")
    )
}

/// Positive integer record id
pub fn record_id(value: &str) -> Result<i64, String> {
    if value.is_empty() {
        return Err(REQUIRED.to_string());
    }
    match value.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err("Not a valid id.".to_string()),
    }
}

/// Parseable date/time
pub fn date_time(value: &str) -> Result<NaiveDateTime, String> {
    if value.is_empty() {
        return Err(REQUIRED.to_string());
    }
    parse_datetime(value).map_err(|_| "Not a valid date/time value.".to_string())
}
