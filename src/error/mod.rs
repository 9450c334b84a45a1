//! Error types for validation failures.
//!
//! This module provides the closed vocabulary of failed rules and the error
//! records produced when a value does not satisfy a rule.

mod validation_error;

pub use validation_error::{ErrorKind, ValidationError, ValidationErrors};
