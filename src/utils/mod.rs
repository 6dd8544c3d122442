//! Utility functions for code generation and URL validation.
//!
//! - [`code_generator`] - Random short code generation
//! - [`url_validator`] - Absolute http/https URL validation

pub mod code_generator;
pub mod url_validator;
