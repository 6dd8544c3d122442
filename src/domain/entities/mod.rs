//! Core domain entities.
//!
//! - [`UrlMapping`] - A stored short code with its target URL and hit counter
//! - [`NewUrlMapping`] - Insert payload for a new mapping
//! - [`UsageSummary`] - Store-wide totals

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping, UsageSummary};
