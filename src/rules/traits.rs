//! Traits for rule polymorphism.
//!
//! This module provides the [`FieldRule`] trait that lets configured rules,
//! rule lists, and plain functions be applied to a field value uniformly.

use std::sync::Arc;

use crate::validation::ValidationResult;

/// A check that turns a raw field value into a [`ValidationResult`].
///
/// Implementations must be stateless: the result depends only on the value
/// passed in. The `Send + Sync` bounds allow rules to be shared across
/// threads and stored in trait objects like `Box<dyn FieldRule>`.
///
/// # Example
///
/// ```rust
/// use formguard::{validate_field, FieldRule, Rule};
/// use formguard::rules::from_fn;
///
/// let rules: Vec<Box<dyn FieldRule>> = vec![
///     Box::new(Rule::required()),
///     Box::new(from_fn(|v| formguard::validate_length(v, &formguard::rules::LengthOptions::new().max(3)))),
/// ];
///
/// assert!(validate_field(Some("abc"), &rules).is_valid());
/// ```
pub trait FieldRule: Send + Sync {
    /// Evaluates this rule against a value.
    fn evaluate(&self, value: Option<&str>) -> ValidationResult;
}

impl<R: FieldRule + ?Sized> FieldRule for &R {
    fn evaluate(&self, value: Option<&str>) -> ValidationResult {
        (**self).evaluate(value)
    }
}

impl<R: FieldRule + ?Sized> FieldRule for Box<R> {
    fn evaluate(&self, value: Option<&str>) -> ValidationResult {
        (**self).evaluate(value)
    }
}

impl<R: FieldRule + ?Sized> FieldRule for Arc<R> {
    fn evaluate(&self, value: Option<&str>) -> ValidationResult {
        (**self).evaluate(value)
    }
}

/// A [`FieldRule`] backed by a function.
///
/// Created with [`from_fn`].
#[derive(Clone)]
pub struct FnRule<F>(F);

impl<F> FieldRule for FnRule<F>
where
    F: Fn(Option<&str>) -> ValidationResult + Send + Sync,
{
    fn evaluate(&self, value: Option<&str>) -> ValidationResult {
        (self.0)(value)
    }
}

/// Wraps a function as a [`FieldRule`].
///
/// Useful for plugging a primitive validator with bespoke options straight
/// into a rule list.
pub fn from_fn<F>(f: F) -> FnRule<F>
where
    F: Fn(Option<&str>) -> ValidationResult + Send + Sync,
{
    FnRule(f)
}
