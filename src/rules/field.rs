//! Field validation.
//!
//! This module provides [`validate_field`], which runs an ordered list of
//! rules against a single value, and [`FieldRules`], a builder for such
//! lists. Every rule runs; no failure stops the rules after it.

use crate::validation::ValidationResult;

use super::primitives::LengthOptions;
use super::rule::Rule;
use super::traits::FieldRule;

/// Applies every rule to `value` and accumulates all errors in rule order.
///
/// The result is valid iff no rule produced an error. An empty rule list
/// yields a valid result.
///
/// # Example
///
/// ```rust
/// use formguard::{validate_field, ErrorKind, Rule};
///
/// let result = validate_field(Some(""), &[Rule::required(), Rule::email()]);
///
/// assert_eq!(result.kinds(), vec![ErrorKind::Required, ErrorKind::Email]);
/// ```
pub fn validate_field<R: FieldRule>(value: Option<&str>, rules: &[R]) -> ValidationResult {
    rules.iter().map(|rule| rule.evaluate(value)).collect()
}

/// An ordered list of rules for one field.
///
/// `FieldRules` is built with chained calls, one per rule, and is itself a
/// [`FieldRule`], so lists can be nested inside other lists.
///
/// # Example
///
/// ```rust
/// use formguard::{FieldRule, FieldRules, ErrorKind};
///
/// let message = FieldRules::new()
///     .required()
///     .error("Please write a message")
///     .min_len(10);
///
/// let result = message.evaluate(Some(""));
/// assert_eq!(result.kinds(), vec![ErrorKind::Required, ErrorKind::MinLength]);
/// assert_eq!(result.messages()[0], "Please write a message");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldRules {
    rules: Vec<Rule>,
}

impl FieldRules {
    /// Creates an empty rule list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an arbitrary rule.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Appends a required rule.
    pub fn required(self) -> Self {
        self.rule(Rule::required())
    }

    /// Appends an email rule.
    pub fn email(self) -> Self {
        self.rule(Rule::email())
    }

    /// Appends a length rule with full options.
    pub fn length(self, options: LengthOptions) -> Self {
        self.rule(Rule::length(options))
    }

    /// Appends a minimum length rule.
    pub fn min_len(self, min: usize) -> Self {
        self.rule(Rule::min_len(min))
    }

    /// Appends a maximum length rule.
    pub fn max_len(self, max: usize) -> Self {
        self.rule(Rule::max_len(max))
    }

    /// Appends a rule requiring the value to equal `other`.
    pub fn equals(self, other: impl Into<String>) -> Self {
        self.rule(Rule::equals(other))
    }

    /// Appends a predicate rule.
    pub fn custom<F>(self, predicate: F) -> Self
    where
        F: Fn(Option<&str>) -> bool + Send + Sync + 'static,
    {
        self.rule(Rule::custom(predicate))
    }

    /// Sets a custom message for the most recently added rule.
    ///
    /// Has no effect on an empty list.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        if let Some(last) = self.rules.pop() {
            self.rules.push(last.with_message(message));
        }
        self
    }

    /// Returns the rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the list has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns true if the list contains a required rule.
    pub fn is_required(&self) -> bool {
        self.rules.iter().any(Rule::is_required)
    }

    /// Returns true if a missing value fails at least one rule.
    ///
    /// This covers more than [`is_required`](Self::is_required): an email
    /// rule, a positive minimum length, a fixed match value or a predicate
    /// rejecting `None` all make the field effectively mandatory.
    pub fn rejects_missing(&self) -> bool {
        !self.validate(None).is_valid()
    }

    /// Validates a value against every rule in the list.
    pub fn validate(&self, value: Option<&str>) -> ValidationResult {
        validate_field(value, &self.rules)
    }
}

impl FieldRule for FieldRules {
    fn evaluate(&self, value: Option<&str>) -> ValidationResult {
        self.validate(value)
    }
}

impl From<Vec<Rule>> for FieldRules {
    fn from(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}

impl From<Rule> for FieldRules {
    fn from(rule: Rule) -> Self {
        Self { rules: vec![rule] }
    }
}

impl FromIterator<Rule> for FieldRules {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_empty_rules_are_valid() {
        let rules: Vec<Rule> = Vec::new();
        assert!(validate_field(None, &rules).is_valid());
        assert!(FieldRules::new().validate(None).is_valid());
    }

    #[test]
    fn test_no_short_circuit() {
        let result = validate_field(None, &[Rule::required(), Rule::email(), Rule::min_len(3)]);
        assert_eq!(
            result.kinds(),
            vec![ErrorKind::Required, ErrorKind::Email, ErrorKind::MinLength]
        );
    }

    #[test]
    fn test_rule_order_preserved() {
        let result = validate_field(Some("x"), &[Rule::min_len(3), Rule::email()]);
        assert_eq!(result.kinds(), vec![ErrorKind::MinLength, ErrorKind::Email]);

        let result = validate_field(Some("x"), &[Rule::email(), Rule::min_len(3)]);
        assert_eq!(result.kinds(), vec![ErrorKind::Email, ErrorKind::MinLength]);
    }

    #[test]
    fn test_builder_error_targets_last_rule() {
        let rules = FieldRules::new().required().email().error("bad email");

        let result = rules.validate(Some(""));
        assert_eq!(
            result.messages(),
            vec![crate::rules::primitives::REQUIRED_MESSAGE, "bad email"]
        );
    }

    #[test]
    fn test_error_on_empty_list_is_noop() {
        let rules = FieldRules::new().error("ignored");
        assert!(rules.is_empty());
    }

    #[test]
    fn test_nested_rule_lists() {
        let inner = FieldRules::new().required().email();
        let outer = vec![inner, FieldRules::new().max_len(5)];

        let result = validate_field(Some(""), &outer);
        assert_eq!(result.kinds(), vec![ErrorKind::Required, ErrorKind::Email]);
    }

    #[test]
    fn test_rejects_missing() {
        assert!(FieldRules::new().required().rejects_missing());
        assert!(FieldRules::new().email().rejects_missing());
        assert!(FieldRules::new().min_len(5).rejects_missing());
        assert!(FieldRules::new().equals("yes").rejects_missing());
        assert!(FieldRules::new().custom(|v| v.is_some()).rejects_missing());

        assert!(!FieldRules::new().rejects_missing());
        assert!(!FieldRules::new().max_len(100).rejects_missing());
        assert!(!FieldRules::new().min_len(0).rejects_missing());
        assert!(!FieldRules::new().custom(|_| true).rejects_missing());
    }

    #[test]
    fn test_conversions() {
        let from_vec = FieldRules::from(vec![Rule::required(), Rule::email()]);
        assert_eq!(from_vec.len(), 2);
        assert!(from_vec.is_required());

        let from_rule = FieldRules::from(Rule::email());
        assert!(!from_rule.is_required());

        let collected: FieldRules = [Rule::min_len(1), Rule::max_len(2)].into_iter().collect();
        assert_eq!(collected.rules().len(), 2);
    }
}
