//! Rules and the validators behind them.
//!
//! This module provides the primitive validators, the [`Rule`] enum that
//! binds a validator to its options, the [`FieldRule`] trait shared by
//! everything that can check a field value, and [`validate_field`] for
//! running an ordered list of rules.
//!
//! # Example
//!
//! ```rust
//! use formguard::rules::{validate_field, FieldRules, Rule};
//!
//! let password = FieldRules::new()
//!     .required()
//!     .min_len(8)
//!     .custom(|v| v.is_some_and(|s| s.chars().any(|c| c.is_ascii_digit())))
//!     .error("Include at least one digit");
//!
//! assert!(password.validate(Some("correct horse 1")).is_valid());
//! assert_eq!(password.validate(Some("short")).errors().len(), 2);
//!
//! let result = validate_field(Some("a@b.co"), &[Rule::required(), Rule::email()]);
//! assert!(result.is_valid());
//! ```

mod field;
mod primitives;
mod rule;
mod traits;

pub use field::{validate_field, FieldRules};
pub use primitives::{
    is_email, validate_custom, validate_email, validate_length, validate_match,
    validate_required, LengthOptions,
};
pub use rule::{Predicate, Rule};
pub use traits::{from_fn, FieldRule, FnRule};
