//! Configured rules.
//!
//! A [`Rule`] is a primitive validator bound to its options, so that a list
//! of rules can describe everything a single field must satisfy.

use std::fmt;
use std::sync::Arc;

use crate::validation::ValidationResult;

use super::primitives::{
    validate_custom, validate_email, validate_length, validate_match, validate_required,
    LengthOptions,
};
use super::traits::FieldRule;

/// Shared predicate used by [`Rule::Custom`].
pub type Predicate = Arc<dyn Fn(Option<&str>) -> bool + Send + Sync>;

/// One primitive validator together with its options.
///
/// Rules are evaluated with [`FieldRule::evaluate`], which dispatches to the
/// matching primitive validator.
///
/// # Example
///
/// ```rust
/// use formguard::{FieldRule, Rule, ErrorKind};
///
/// let rule = Rule::min_len(10).with_message("Tell us a bit more");
///
/// let result = rule.evaluate(Some("Hi"));
/// assert_eq!(result.kinds(), vec![ErrorKind::MinLength]);
/// assert_eq!(result.messages(), vec!["Tell us a bit more"]);
/// ```
#[derive(Clone)]
pub enum Rule {
    /// Value must be present and not blank.
    Required { message: Option<String> },
    /// Value must be a well-formed email address.
    Email { message: Option<String> },
    /// Value length must fall within the bounds.
    Length(LengthOptions),
    /// Value must equal `other` exactly.
    Match {
        other: Option<String>,
        message: Option<String>,
    },
    /// Value must satisfy a caller-supplied predicate.
    Custom {
        predicate: Predicate,
        message: Option<String>,
    },
}

impl Rule {
    /// Creates a required rule.
    pub fn required() -> Self {
        Rule::Required { message: None }
    }

    /// Creates an email rule.
    pub fn email() -> Self {
        Rule::Email { message: None }
    }

    /// Creates a length rule from full options.
    pub fn length(options: LengthOptions) -> Self {
        Rule::Length(options)
    }

    /// Creates a length rule with only a minimum.
    pub fn min_len(min: usize) -> Self {
        Rule::Length(LengthOptions::new().min(min))
    }

    /// Creates a length rule with only a maximum.
    pub fn max_len(max: usize) -> Self {
        Rule::Length(LengthOptions::new().max(max))
    }

    /// Creates a rule requiring the value to equal `other`.
    pub fn equals(other: impl Into<String>) -> Self {
        Rule::Match {
            other: Some(other.into()),
            message: None,
        }
    }

    /// Creates a rule backed by a predicate over the raw value.
    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(Option<&str>) -> bool + Send + Sync + 'static,
    {
        Rule::Custom {
            predicate: Arc::new(predicate),
            message: None,
        }
    }

    /// Replaces the default message.
    ///
    /// For a length rule both the minimum and maximum messages are replaced.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        match &mut self {
            Rule::Required { message: m }
            | Rule::Email { message: m }
            | Rule::Match { message: m, .. }
            | Rule::Custom { message: m, .. } => *m = Some(message),
            Rule::Length(options) => {
                options.min_message = Some(message.clone());
                options.max_message = Some(message);
            }
        }
        self
    }

    /// Returns true for [`Rule::Required`].
    pub fn is_required(&self) -> bool {
        matches!(self, Rule::Required { .. })
    }
}

impl FieldRule for Rule {
    fn evaluate(&self, value: Option<&str>) -> ValidationResult {
        match self {
            Rule::Required { message } => validate_required(value, message.as_deref()),
            Rule::Email { message } => validate_email(value, message.as_deref()),
            Rule::Length(options) => validate_length(value, options),
            Rule::Match { other, message } => {
                validate_match(value, other.as_deref(), message.as_deref())
            }
            Rule::Custom { predicate, message } => {
                validate_custom(value, |v| predicate(v), message.as_deref())
            }
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required { message } => {
                f.debug_struct("Required").field("message", message).finish()
            }
            Rule::Email { message } => f.debug_struct("Email").field("message", message).finish(),
            Rule::Length(options) => f.debug_tuple("Length").field(options).finish(),
            Rule::Match { other, message } => f
                .debug_struct("Match")
                .field("other", other)
                .field("message", message)
                .finish(),
            Rule::Custom { message, .. } => f
                .debug_struct("Custom")
                .field("predicate", &"<fn>")
                .field("message", message)
                .finish(),
        }
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Rule>();
    assert_sync::<Rule>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_required_rule() {
        assert!(Rule::required().evaluate(Some("x")).is_valid());
        assert_eq!(
            Rule::required().evaluate(None).kinds(),
            vec![ErrorKind::Required]
        );
    }

    #[test]
    fn test_email_rule() {
        assert!(Rule::email().evaluate(Some("a@b.co")).is_valid());
        assert!(!Rule::email().evaluate(Some("a@b")).is_valid());
    }

    #[test]
    fn test_length_rule_shorthands() {
        assert!(!Rule::min_len(3).evaluate(Some("ab")).is_valid());
        assert!(Rule::min_len(3).evaluate(Some("abc")).is_valid());
        assert!(!Rule::max_len(3).evaluate(Some("abcd")).is_valid());
    }

    #[test]
    fn test_length_with_message_sets_both() {
        let rule = Rule::length(LengthOptions::new().min(2).max(4)).with_message("2 to 4");

        assert_eq!(rule.evaluate(Some("a")).messages(), vec!["2 to 4"]);
        assert_eq!(rule.evaluate(Some("abcde")).messages(), vec!["2 to 4"]);
    }

    #[test]
    fn test_equals_rule() {
        let rule = Rule::equals("secret");
        assert!(rule.evaluate(Some("secret")).is_valid());
        assert_eq!(rule.evaluate(Some("Secret")).kinds(), vec![ErrorKind::Match]);
        assert!(!rule.evaluate(None).is_valid());
    }

    #[test]
    fn test_custom_rule() {
        let rule = Rule::custom(|v| v.is_some_and(|s| s.starts_with("https://")))
            .with_message("Use a secure link");

        assert!(rule.evaluate(Some("https://example.com")).is_valid());
        let result = rule.evaluate(Some("http://example.com"));
        assert_eq!(result.kinds(), vec![ErrorKind::Custom]);
        assert_eq!(result.messages(), vec!["Use a secure link"]);
    }

    #[test]
    fn test_with_message_keeps_kind() {
        let result = Rule::email().with_message("nope").evaluate(Some("x"));
        assert_eq!(result.errors()[0].kind, ErrorKind::Email);
    }

    #[test]
    fn test_is_required() {
        assert!(Rule::required().is_required());
        assert!(!Rule::email().is_required());
    }

    #[test]
    fn test_debug_hides_predicate() {
        let debug = format!("{:?}", Rule::custom(|_| true));
        assert!(debug.contains("Custom"));
        assert!(debug.contains("<fn>"));
    }
}
