//! # Stagebook Common Library
//!
//! Shared code for the Stagebook booking site:
//! - Database schema, models and queries (venues, artists, shows)
//! - Configuration resolution
//! - Date formatting presets
//! - Genre list codec

pub mod config;
pub mod datetime;
pub mod db;
pub mod error;
pub mod genres;

pub use datetime::DateFormat;
pub use error::{Error, Result};
