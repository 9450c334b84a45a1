//! Form-level validation.
//!
//! This module applies per-field rule lists across a whole submission and
//! reports one [`ValidationResult`](crate::ValidationResult) per field named
//! in the schema.
//!
//! # Example
//!
//! ```rust
//! use formguard::{validate_form, FieldRules, FormSchema, FormValues};
//!
//! let schema = FormSchema::new()
//!     .field("name", FieldRules::new().required())
//!     .field("email", FieldRules::new().required().email());
//!
//! let values = FormValues::new()
//!     .with("name", "Ada")
//!     .with("email", "ada@example.com");
//!
//! assert!(validate_form(&values, &schema).is_valid());
//! ```

mod result;
mod schema;
mod values;

pub use result::FormResult;
pub use schema::{validate_form, FormSchema};
pub use values::{FormValues, FormValuesError};
