//! Tests for form registry operations.

use formguard::{
    presets, ErrorKind, FieldRules, FormRegistry, FormSchema, FormValues, RegistryError,
};

#[test]
fn test_register_and_validate() {
    let registry = FormRegistry::new();
    registry
        .register(
            "signup",
            FormSchema::new()
                .field("email", FieldRules::new().required().email())
                .field("password", FieldRules::new().required().min_len(8))
                .matching("confirm", "password"),
        )
        .unwrap();

    let values = FormValues::new()
        .with("email", "ada@example.com")
        .with("password", "hunter22")
        .with("confirm", "hunter22");

    let result = registry.validate("signup", &values).unwrap();
    assert!(result.is_valid());
}

#[test]
fn test_duplicate_registration_fails() {
    let registry = FormRegistry::new();
    registry.register("contact", FormSchema::new()).unwrap();

    let result = registry.register("contact", presets::contact_form());
    assert!(matches!(result, Err(RegistryError::DuplicateName(name)) if name == "contact"));
}

#[test]
fn test_validate_missing_form() {
    let registry = FormRegistry::new();
    let result = registry.validate("contact", &FormValues::new());
    assert!(matches!(result, Err(RegistryError::NotFound(_))));
}

#[test]
fn test_batch_preserves_order() {
    let registry = presets::registry().unwrap();

    let submissions: Vec<FormValues> = (0..64)
        .map(|i| {
            let email = if i % 3 == 0 {
                format!("user{}@example", i)
            } else {
                format!("user{}@example.com", i)
            };
            FormValues::new().with("email", email)
        })
        .collect();

    let results = registry
        .validate_batch(presets::NEWSLETTER, &submissions)
        .unwrap();

    assert_eq!(results.len(), submissions.len());
    for (i, result) in results.iter().enumerate() {
        assert_eq!(result.is_valid(), i % 3 != 0, "submission {}", i);
        if i % 3 == 0 {
            assert_eq!(result.get("email").unwrap().kinds(), vec![ErrorKind::Email]);
        }
    }
}

#[test]
fn test_batch_empty() {
    let registry = presets::registry().unwrap();
    let results = registry.validate_batch(presets::CONTACT, &[]).unwrap();
    assert!(results.is_empty());
}
