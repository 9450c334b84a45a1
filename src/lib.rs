//! # Formguard
//!
//! A form validation engine that reports ALL failed rules, giving users
//! every problem with a field at once rather than one per resubmission.
//!
//! ## Overview
//!
//! Validation happens in four layers, each built on the one below:
//!
//! - primitive validators ([`validate_required`], [`validate_email`],
//!   [`validate_length`], [`validate_match`], [`validate_custom`]) test one
//!   value against one rule
//! - [`validate_field`] runs an ordered list of rules against one value
//! - [`validate_form`] runs each field's rules across a whole submission
//! - [`combine_validation_results`] merges results into one
//!
//! Every operation returns a [`ValidationResult`]. A value that fails a rule
//! is data, never an `Err` or a panic, and every call is a pure function of
//! its arguments.
//!
//! ## Core Types
//!
//! - [`ValidationError`]: one failed rule, tagged with an [`ErrorKind`]
//! - [`ValidationResult`]: the `{valid, errors}` outcome of any validation
//! - [`Rule`] / [`FieldRules`]: configured rules for a field
//! - [`FormSchema`]: field names mapped to their rules
//! - [`FormRegistry`]: named schemas shared across threads
//!
//! ## Example
//!
//! ```rust
//! use formguard::{validate_form, ErrorKind, FieldRules, FormSchema, FormValues};
//!
//! let schema = FormSchema::new()
//!     .field("name", FieldRules::new().required())
//!     .field("email", FieldRules::new().required().email())
//!     .field("message", FieldRules::new().required().min_len(10));
//!
//! let values = FormValues::new()
//!     .with("name", "")
//!     .with("email", "invalid")
//!     .with("message", "Hi")
//!     .with("company", "Acme");
//!
//! let result = validate_form(&values, &schema);
//!
//! assert_eq!(result.get("name").unwrap().kinds(), vec![ErrorKind::Required]);
//! assert_eq!(result.get("email").unwrap().kinds(), vec![ErrorKind::Email]);
//! assert_eq!(result.get("message").unwrap().kinds(), vec![ErrorKind::MinLength]);
//! assert!(result.get("company").is_none());
//! ```

pub mod error;
pub mod form;
pub mod interop;
pub mod presets;
pub mod registry;
pub mod rules;
pub mod validation;

pub use error::{ErrorKind, ValidationError, ValidationErrors};
pub use form::{validate_form, FormResult, FormSchema, FormValues, FormValuesError};
pub use interop::ToJsonSchema;
pub use registry::{FormRegistry, RegistryError};
pub use rules::{
    validate_custom, validate_email, validate_field, validate_length, validate_match,
    validate_required, FieldRule, FieldRules, LengthOptions, Rule,
};
pub use validation::{combine_validation_results, ValidationResult};
