//! Ready-made schemas for the site's forms.

use crate::form::FormSchema;
use crate::registry::{FormRegistry, RegistryError};
use crate::rules::FieldRules;

/// Registry name of [`contact_form`].
pub const CONTACT: &str = "contact";
/// Registry name of [`newsletter_form`].
pub const NEWSLETTER: &str = "newsletter";

/// The contact form: name, email, and message are checked; company is
/// accepted as-is.
///
/// # Example
///
/// ```rust
/// use formguard::{presets, FormValues};
///
/// let values = FormValues::new()
///     .with("name", "Ada Lovelace")
///     .with("email", "ada@example.com")
///     .with("company", "Analytical Engines")
///     .with("message", "We would like a quote for a new site.");
///
/// assert!(presets::contact_form().validate(&values).is_valid());
/// ```
pub fn contact_form() -> FormSchema {
    FormSchema::new()
        .field(
            "name",
            FieldRules::new()
                .required()
                .error("Name is required")
                .max_len(100),
        )
        .field(
            "email",
            FieldRules::new()
                .required()
                .error("Email is required")
                .email(),
        )
        .field(
            "message",
            FieldRules::new()
                .required()
                .error("Message is required")
                .min_len(10)
                .error("Message must be at least 10 characters")
                .max_len(5000),
        )
}

/// The newsletter signup form: a single required email field.
pub fn newsletter_form() -> FormSchema {
    FormSchema::new().field(
        "email",
        FieldRules::new()
            .required()
            .error("Email is required")
            .email(),
    )
}

/// Creates a registry holding every preset form.
pub fn registry() -> Result<FormRegistry, RegistryError> {
    let registry = FormRegistry::new();
    registry.register(CONTACT, contact_form())?;
    registry.register(NEWSLETTER, newsletter_form())?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::form::FormValues;

    #[test]
    fn test_contact_rejects_blank_submission() {
        let result = contact_form().validate(&FormValues::new());

        assert_eq!(result.invalid_fields(), vec!["name", "email", "message"]);
        assert_eq!(
            result.get("email").unwrap().kinds(),
            vec![ErrorKind::Required, ErrorKind::Email]
        );
        assert_eq!(
            result.get("message").unwrap().messages(),
            vec!["Message is required", "Message must be at least 10 characters"]
        );
    }

    #[test]
    fn test_contact_name_too_long() {
        let values = FormValues::new()
            .with("name", "x".repeat(101))
            .with("email", "a@b.co")
            .with("message", "long enough message");

        let result = contact_form().validate(&values);
        assert_eq!(result.invalid_fields(), vec!["name"]);
        assert_eq!(
            result.get("name").unwrap().kinds(),
            vec![ErrorKind::MaxLength]
        );
    }

    #[test]
    fn test_newsletter() {
        let schema = newsletter_form();
        assert!(schema
            .validate(&FormValues::new().with("email", "a@b.co"))
            .is_valid());
        assert!(!schema
            .validate(&FormValues::new().with("email", "a@b"))
            .is_valid());
    }

    #[test]
    fn test_registry_has_presets() {
        let registry = registry().unwrap();
        assert_eq!(registry.names(), vec![CONTACT, NEWSLETTER]);
    }
}
