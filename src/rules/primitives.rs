//! Primitive validators.
//!
//! Each function tests one value against one rule and returns a
//! [`ValidationResult`]. A value of `None` stands for a missing field (null
//! or undefined in the submitting client); every validator accepts it and
//! produces a result rather than failing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ErrorKind, ValidationError};
use crate::validation::ValidationResult;

pub(crate) const REQUIRED_MESSAGE: &str = "This field is required";
pub(crate) const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub(crate) const MATCH_MESSAGE: &str = "Values do not match";
pub(crate) const CUSTOM_MESSAGE: &str = "Invalid value";

/// Local part and domain labels are dot-separated runs without whitespace,
/// `@`, or empty segments; the domain needs at least two labels.
const EMAIL_PATTERN: &str = r"^[^\s@.]+(?:\.[^\s@.]+)*@[^\s@.]+(?:\.[^\s@.]+)+$";

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));

/// Returns true if `value` satisfies the email grammar.
///
/// # Example
///
/// ```rust
/// use formguard::rules::is_email;
///
/// assert!(is_email("first.last@sub.example.com"));
/// assert!(!is_email("a@b..com"));
/// ```
pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

fn fail(kind: ErrorKind, message: Option<&str>, default: impl FnOnce() -> String) -> ValidationResult {
    let message = message.map_or_else(default, str::to_string);
    ValidationResult::failure(ValidationError::new(kind, message))
}

/// Fails with [`ErrorKind::Required`] when the value is missing, empty, or
/// whitespace-only.
///
/// Any other string passes, including strings made only of punctuation or
/// digits.
///
/// # Example
///
/// ```rust
/// use formguard::validate_required;
///
/// assert!(validate_required(Some("42"), None).is_valid());
/// assert!(!validate_required(Some(" \t"), None).is_valid());
/// assert!(!validate_required(None, Some("Name is required")).is_valid());
/// ```
pub fn validate_required(value: Option<&str>, message: Option<&str>) -> ValidationResult {
    match value {
        Some(s) if !s.trim().is_empty() => ValidationResult::ok(),
        _ => fail(ErrorKind::Required, message, || REQUIRED_MESSAGE.to_string()),
    }
}

/// Fails with [`ErrorKind::Email`] unless the value is a well-formed email
/// address.
///
/// Missing and empty values fail with `email` as well; pair this with
/// [`validate_required`] to report both problems for an empty field.
pub fn validate_email(value: Option<&str>, message: Option<&str>) -> ValidationResult {
    match value {
        Some(s) if is_email(s) => ValidationResult::ok(),
        _ => fail(ErrorKind::Email, message, || EMAIL_MESSAGE.to_string()),
    }
}

/// Bounds and messages for [`validate_length`].
///
/// Both bounds are inclusive and optional. Messages left as `None` use the
/// defaults, which mention the bound.
///
/// # Example
///
/// ```rust
/// use formguard::rules::LengthOptions;
///
/// let options = LengthOptions::new()
///     .min(10)
///     .max(500)
///     .min_message("Tell us a little more");
///
/// assert_eq!(options.min, Some(10));
/// assert_eq!(options.max_message, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LengthOptions {
    /// Minimum number of characters.
    pub min: Option<usize>,
    /// Maximum number of characters.
    pub max: Option<usize>,
    /// Message used when the value is shorter than `min`.
    pub min_message: Option<String>,
    /// Message used when the value is longer than `max`.
    pub max_message: Option<String>,
}

impl LengthOptions {
    /// Creates options with no bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum length.
    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the maximum length.
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Overrides the message for values below the minimum.
    pub fn min_message(mut self, message: impl Into<String>) -> Self {
        self.min_message = Some(message.into());
        self
    }

    /// Overrides the message for values above the maximum.
    pub fn max_message(mut self, message: impl Into<String>) -> Self {
        self.max_message = Some(message.into());
        self
    }
}

/// Checks the value's length against the bounds in `options`.
///
/// Length is counted in characters without trimming; a missing value has
/// length 0. A character is one Unicode scalar value, so an emoji outside
/// the Basic Multilingual Plane counts once, not as two UTF-16 units, the
/// same way JSON Schema `minLength` and `maxLength` count.
///
/// The minimum and maximum are checked independently, and a value exactly
/// at a bound passes.
///
/// # Example
///
/// ```rust
/// use formguard::{validate_length, ErrorKind};
/// use formguard::rules::LengthOptions;
///
/// let result = validate_length(Some("abc"), &LengthOptions::new().min(5));
/// assert_eq!(result.kinds(), vec![ErrorKind::MinLength]);
///
/// let result = validate_length(Some("abc"), &LengthOptions::new().min(3).max(3));
/// assert!(result.is_valid());
/// ```
pub fn validate_length(value: Option<&str>, options: &LengthOptions) -> ValidationResult {
    let len = value.map_or(0, |s| s.chars().count());
    let mut result = ValidationResult::ok();

    if let Some(min) = options.min {
        if len < min {
            let message = options
                .min_message
                .clone()
                .unwrap_or_else(|| format!("Must be at least {} characters", min));
            result.push(ValidationError::new(ErrorKind::MinLength, message));
        }
    }

    if let Some(max) = options.max {
        if len > max {
            let message = options
                .max_message
                .clone()
                .unwrap_or_else(|| format!("Must be no more than {} characters", max));
            result.push(ValidationError::new(ErrorKind::MaxLength, message));
        }
    }

    result
}

/// Fails with [`ErrorKind::Match`] unless `value` equals `other` exactly.
///
/// Comparison is case-sensitive. Two missing values are equal.
pub fn validate_match(
    value: Option<&str>,
    other: Option<&str>,
    message: Option<&str>,
) -> ValidationResult {
    if value == other {
        ValidationResult::ok()
    } else {
        fail(ErrorKind::Match, message, || MATCH_MESSAGE.to_string())
    }
}

/// Fails with [`ErrorKind::Custom`] when `predicate` returns false.
///
/// The predicate receives the raw value. A panic inside the predicate is not
/// caught.
///
/// # Example
///
/// ```rust
/// use formguard::validate_custom;
///
/// let has_digit = |v: Option<&str>| v.is_some_and(|s| s.chars().any(|c| c.is_ascii_digit()));
///
/// assert!(validate_custom(Some("hunter2"), has_digit, None).is_valid());
/// assert!(!validate_custom(Some("hunter"), has_digit, Some("Add a digit")).is_valid());
/// ```
pub fn validate_custom<F>(value: Option<&str>, predicate: F, message: Option<&str>) -> ValidationResult
where
    F: FnOnce(Option<&str>) -> bool,
{
    if predicate(value) {
        ValidationResult::ok()
    } else {
        fail(ErrorKind::Custom, message, || CUSTOM_MESSAGE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        for value in [None, Some(""), Some(" "), Some("\t\n  ")] {
            let result = validate_required(value, None);
            assert!(!result.is_valid(), "{:?} should be rejected", value);
            assert_eq!(result.kinds(), vec![ErrorKind::Required]);
            assert_eq!(result.errors()[0].message, REQUIRED_MESSAGE);
        }
    }

    #[test]
    fn test_required_accepts_punctuation_and_digits() {
        assert!(validate_required(Some("..."), None).is_valid());
        assert!(validate_required(Some("0"), None).is_valid());
        assert!(validate_required(Some("  x  "), None).is_valid());
    }

    #[test]
    fn test_custom_message_keeps_kind() {
        let result = validate_required(Some(""), Some("Name please"));
        assert_eq!(result.errors()[0].kind, ErrorKind::Required);
        assert_eq!(result.errors()[0].message, "Name please");
    }

    #[test]
    fn test_email_empty_fails_with_email_kind() {
        for value in [None, Some("")] {
            let result = validate_email(value, None);
            assert_eq!(result.kinds(), vec![ErrorKind::Email]);
            assert_eq!(result.errors()[0].message, EMAIL_MESSAGE);
        }
    }

    #[test]
    fn test_email_grammar() {
        assert!(is_email("email@example.com"));
        assert!(is_email("first.last@sub.example.com"));
        assert!(is_email("user+tag@example.co.uk"));

        assert!(!is_email("plainaddress"));
        assert!(!is_email("@missing.com"));
        assert!(!is_email("a@b..com"));
        assert!(!is_email("user@domain"));
        assert!(!is_email("user@domain.com."));
        assert!(!is_email("a@@b.com"));
        assert!(!is_email("a@b@c.com"));
        assert!(!is_email("user name@example.com"));
        assert!(!is_email("first..last@example.com"));
    }

    #[test]
    fn test_length_missing_value_is_zero() {
        let result = validate_length(None, &LengthOptions::new().min(1));
        assert_eq!(result.kinds(), vec![ErrorKind::MinLength]);

        assert!(validate_length(None, &LengthOptions::new().max(0)).is_valid());
    }

    #[test]
    fn test_length_default_messages() {
        let short = validate_length(Some("ab"), &LengthOptions::new().min(5));
        assert_eq!(short.errors()[0].message, "Must be at least 5 characters");

        let long = validate_length(Some("abcdef"), &LengthOptions::new().max(5));
        assert_eq!(long.errors()[0].message, "Must be no more than 5 characters");
    }

    #[test]
    fn test_length_message_overrides() {
        let options = LengthOptions::new()
            .min(5)
            .max(6)
            .min_message("too short")
            .max_message("too long");

        assert_eq!(validate_length(Some("ab"), &options).messages(), vec!["too short"]);
        assert_eq!(validate_length(Some("abcdefg"), &options).messages(), vec!["too long"]);
    }

    #[test]
    fn test_length_both_bounds_independent() {
        // Contradictory bounds report both violations.
        let options = LengthOptions::new().min(5).max(2);
        let result = validate_length(Some("abc"), &options);
        assert_eq!(result.kinds(), vec![ErrorKind::MinLength, ErrorKind::MaxLength]);
    }

    #[test]
    fn test_length_does_not_trim() {
        let result = validate_length(Some("   "), &LengthOptions::new().min(3));
        assert!(result.is_valid());
    }

    #[test]
    fn test_length_counts_characters() {
        let options = LengthOptions::new().min(3).max(3);
        assert!(validate_length(Some("日本語"), &options).is_valid());
    }

    #[test]
    fn test_length_counts_astral_emoji_once() {
        // "🎉" is one scalar value but two UTF-16 units.
        let options = LengthOptions::new().max(1);
        assert!(validate_length(Some("🎉"), &options).is_valid());
        assert_eq!(
            validate_length(Some("🎉🎊"), &options).kinds(),
            vec![ErrorKind::MaxLength]
        );
    }

    #[test]
    fn test_email_regex_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|i| std::thread::spawn(move || is_email(&format!("user{}@example.com", i))))
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    #[test]
    fn test_match() {
        assert!(validate_match(Some("x"), Some("x"), None).is_valid());
        assert!(validate_match(None, None, None).is_valid());

        let result = validate_match(Some("Secret"), Some("secret"), None);
        assert_eq!(result.kinds(), vec![ErrorKind::Match]);
        assert_eq!(result.errors()[0].message, MATCH_MESSAGE);

        assert!(!validate_match(Some(""), None, None).is_valid());
    }

    #[test]
    fn test_custom_receives_raw_value() {
        let result = validate_custom(None, |v| v.is_none(), None);
        assert!(result.is_valid());

        let result = validate_custom(Some("abc"), |v| v == Some("xyz"), None);
        assert_eq!(result.kinds(), vec![ErrorKind::Custom]);
        assert_eq!(result.errors()[0].message, CUSTOM_MESSAGE);
    }

    #[test]
    #[should_panic(expected = "predicate bug")]
    fn test_custom_predicate_panic_propagates() {
        let _ = validate_custom(Some("x"), |_| panic!("predicate bug"), None);
    }
}
