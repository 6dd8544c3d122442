//! Application layer services implementing business logic.
//!
//! Services consume repository traits, apply validation and retry rules, and
//! provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Short code creation, resolution and lifecycle

pub mod services;
