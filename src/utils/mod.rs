//! Utility functions for code generation and URL validation.
//!
//! This module provides helper functions used across the application:
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`url_validator`] - Submitted URL validation

pub mod code_generator;
pub mod url_validator;

pub use code_generator::{generate_code, validate_custom_code};
pub use url_validator::validate_url;
