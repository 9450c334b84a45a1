//! The uniform result of every validation operation.
//!
//! This module provides [`ValidationResult`], the `{valid, errors}` value that
//! primitive validators, field validation, and form validation all return,
//! and [`combine_validation_results`] for merging results without re-running
//! the underlying checks.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use stillwater::prelude::*;
use stillwater::Validation;

use crate::error::{ErrorKind, ValidationError, ValidationErrors};

/// Outcome of validating one value (or of combining several outcomes).
///
/// A result is valid exactly when it carries no errors. Validity is derived
/// from the error list rather than stored next to it, so the two can never
/// disagree. Errors keep the order in which the rules that produced them
/// were evaluated.
///
/// Serializes as `{"valid": bool, "errors": [...]}`. Deserializing ignores
/// any incoming `valid` flag and recomputes it from `errors`.
///
/// # Example
///
/// ```rust
/// use formguard::{validate_required, ErrorKind};
///
/// let result = validate_required(Some("   "), None);
/// assert!(!result.is_valid());
/// assert_eq!(result.errors()[0].kind, ErrorKind::Required);
///
/// let json = serde_json::to_value(&result).unwrap();
/// assert_eq!(json["valid"], false);
/// assert_eq!(json["errors"][0]["type"], "required");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawValidationResult")]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Creates a passing result with no errors.
    pub fn ok() -> Self {
        Self::default()
    }

    /// Creates a failing result holding a single error.
    pub fn failure(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Creates a result from an ordered list of errors.
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// Returns true iff no errors were recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the recorded errors in evaluation order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns the first recorded error, if any.
    pub fn first_error(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    /// Returns true if any recorded error has the given kind.
    pub fn has_kind(&self, kind: ErrorKind) -> bool {
        self.errors.iter().any(|e| e.kind == kind)
    }

    /// Returns the kinds of all recorded errors, in order.
    pub fn kinds(&self) -> Vec<ErrorKind> {
        self.errors.iter().map(|e| e.kind).collect()
    }

    /// Returns the messages of all recorded errors, in order.
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }

    /// Appends a single error.
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Consumes the result, returning its errors.
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Converts this result into a `stillwater::Validation`.
    ///
    /// Valid results become `Success(())`; invalid results become
    /// `Failure` with a non-empty [`ValidationErrors`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use formguard::validate_email;
    ///
    /// let validation = validate_email(Some("nope"), None).into_validation();
    /// assert!(validation.is_failure());
    /// ```
    pub fn into_validation(self) -> Validation<(), ValidationErrors> {
        match ValidationErrors::from_vec(self.errors) {
            None => Validation::Success(()),
            Some(errors) => Validation::Failure(errors),
        }
    }
}

impl Semigroup for ValidationResult {
    fn combine(mut self, other: Self) -> Self {
        self.errors.extend(other.errors);
        self
    }
}

impl Extend<ValidationResult> for ValidationResult {
    fn extend<I: IntoIterator<Item = ValidationResult>>(&mut self, iter: I) {
        for result in iter {
            self.errors.extend(result.errors);
        }
    }
}

impl FromIterator<ValidationResult> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationResult>>(iter: I) -> Self {
        let mut combined = ValidationResult::ok();
        combined.extend(iter);
        combined
    }
}

impl From<ValidationErrors> for ValidationResult {
    fn from(errors: ValidationErrors) -> Self {
        Self::from_errors(errors.into_vec())
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("errors", &self.errors)?;
        state.end()
    }
}

#[derive(Deserialize)]
struct RawValidationResult {
    #[serde(default)]
    errors: Vec<ValidationError>,
}

impl From<RawValidationResult> for ValidationResult {
    fn from(raw: RawValidationResult) -> Self {
        Self::from_errors(raw.errors)
    }
}

/// Merges results into one, concatenating their errors in order.
///
/// The combined result is valid iff every input was valid. An empty input
/// combines to a valid result.
///
/// # Example
///
/// ```rust
/// use formguard::{combine_validation_results, validate_match, validate_required};
///
/// let combined = combine_validation_results([
///     validate_required(Some("Ada"), None),
///     validate_match(Some("p1"), Some("p2"), None),
/// ]);
///
/// assert!(!combined.is_valid());
/// assert_eq!(combined.errors().len(), 1);
/// ```
pub fn combine_validation_results<I>(results: I) -> ValidationResult
where
    I: IntoIterator<Item = ValidationResult>,
{
    results.into_iter().collect()
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationResult>();
    assert_sync::<ValidationResult>();
};
