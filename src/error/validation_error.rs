//! Validation error types.
//!
//! This module provides [`ErrorKind`] for the closed set of rule tags,
//! [`ValidationError`] for a single failed rule, and [`ValidationErrors`]
//! for a non-empty collection of failures.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use stillwater::prelude::*;

/// The rule that produced a [`ValidationError`].
///
/// Serialized with the same camelCase tags a form front end reads back:
/// `required`, `email`, `minLength`, `maxLength`, `match`, `custom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    /// The value was missing, empty, or whitespace-only.
    Required,
    /// The value is not a well-formed email address.
    Email,
    /// The value is shorter than the configured minimum.
    MinLength,
    /// The value is longer than the configured maximum.
    MaxLength,
    /// The value differs from the value it must equal.
    Match,
    /// A caller-supplied predicate rejected the value.
    Custom,
}

impl ErrorKind {
    /// Returns the wire tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Required => "required",
            ErrorKind::Email => "email",
            ErrorKind::MinLength => "minLength",
            ErrorKind::MaxLength => "maxLength",
            ErrorKind::Match => "match",
            ErrorKind::Custom => "custom",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single failed rule.
///
/// `ValidationError` pairs the tag of the rule that failed with the message
/// to show next to the field. The message defaults per kind and may be
/// replaced by the caller, but the kind never changes.
///
/// # Example
///
/// ```rust
/// use formguard::{ErrorKind, ValidationError};
///
/// let error = ValidationError::new(ErrorKind::Email, "Please enter a valid email address");
///
/// assert_eq!(error.kind, ErrorKind::Email);
/// assert_eq!(error.to_string(), "email: Please enter a valid email address");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// The rule that failed.
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    /// Human-readable error message.
    pub message: String,
}

impl ValidationError {
    /// Creates a new error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ValidationError {}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};

/// A non-empty collection of validation errors.
///
/// `ValidationErrors` wraps a `NonEmptyVec<ValidationError>` so that a
/// failed `stillwater::Validation` always carries at least one error. It is
/// what [`ValidationResult::into_validation`](crate::ValidationResult::into_validation)
/// produces on failure.
///
/// # Combining Errors
///
/// ```rust
/// use formguard::{ErrorKind, ValidationError, ValidationErrors};
/// use stillwater::prelude::*;
///
/// let errors1 = ValidationErrors::single(ValidationError::new(ErrorKind::Required, "required"));
/// let errors2 = ValidationErrors::single(ValidationError::new(ErrorKind::Email, "bad email"));
///
/// let combined = errors1.combine(errors2);
/// assert_eq!(combined.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(NonEmptyVec<ValidationError>);

impl ValidationErrors {
    /// Creates a `ValidationErrors` containing a single error.
    pub fn single(error: ValidationError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Creates a `ValidationErrors` from a vec, or `None` if it is empty.
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        NonEmptyVec::from_vec(errors).map(Self)
    }

    /// Returns the number of errors in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection holds at least one error.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the contained errors.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Returns the first error in the collection.
    pub fn first(&self) -> &ValidationError {
        self.0.head()
    }

    /// Returns all errors of the given kind.
    pub fn of_kind(&self, kind: ErrorKind) -> Vec<&ValidationError> {
        self.0.iter().filter(|e| e.kind == kind).collect()
    }

    /// Converts this collection into a `Vec<ValidationError>`.
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0.into_vec()
    }
}

impl Semigroup for ValidationErrors {
    fn combine(self, other: Self) -> Self {
        ValidationErrors(self.0.combine(other.0))
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationErrors>();
    assert_sync::<ValidationErrors>();
};
