//! Per-field results of form validation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::validation::{combine_validation_results, ValidationResult};

/// The results of validating a form, keyed by field name.
///
/// Only fields named in the schema have an entry; fields that were
/// submitted but not described by the schema are absent. Serializes as a
/// JSON object of field name to `{"valid", "errors"}`.
///
/// # Example
///
/// ```rust
/// use formguard::{validate_form, FieldRules, FormSchema, FormValues};
///
/// let schema = FormSchema::new().field("name", FieldRules::new().required());
/// let result = validate_form(&FormValues::new().with("company", "Acme"), &schema);
///
/// assert!(!result.is_valid());
/// assert!(result.get("company").is_none());
/// assert_eq!(result.invalid_fields(), vec!["name"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormResult {
    fields: IndexMap<String, ValidationResult>,
}

impl FormResult {
    pub(crate) fn from_fields(fields: IndexMap<String, ValidationResult>) -> Self {
        Self { fields }
    }

    /// Returns the result for a field, if the schema names it.
    pub fn get(&self, field: &str) -> Option<&ValidationResult> {
        self.fields.get(field)
    }

    /// Returns true if the schema names the field.
    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns true if every validated field is valid.
    pub fn is_valid(&self) -> bool {
        self.fields.values().all(ValidationResult::is_valid)
    }

    /// Returns the names of invalid fields in schema order.
    pub fn invalid_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(_, r)| !r.is_valid())
            .map(|(k, _)| k.as_str())
            .collect()
    }

    /// Merges every field's errors into one result, in schema order.
    pub fn combined(&self) -> ValidationResult {
        combine_validation_results(self.fields.values().cloned())
    }

    /// Returns the number of validated fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields were validated.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns an iterator over field results in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationResult)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Consumes the result, returning the underlying map.
    pub fn into_inner(self) -> IndexMap<String, ValidationResult> {
        self.fields
    }
}

impl IntoIterator for FormResult {
    type Item = (String, ValidationResult);
    type IntoIter = indexmap::map::IntoIter<String, ValidationResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, ValidationError};
    use serde_json::json;

    fn sample() -> FormResult {
        let mut fields = IndexMap::new();
        fields.insert("name".to_string(), ValidationResult::ok());
        fields.insert(
            "email".to_string(),
            ValidationResult::failure(ValidationError::new(ErrorKind::Email, "bad")),
        );
        fields.insert(
            "message".to_string(),
            ValidationResult::failure(ValidationError::new(ErrorKind::MinLength, "short")),
        );
        FormResult::from_fields(fields)
    }

    #[test]
    fn test_queries() {
        let result = sample();

        assert!(!result.is_valid());
        assert_eq!(result.len(), 3);
        assert!(result.contains_field("name"));
        assert!(!result.contains_field("company"));
        assert_eq!(result.invalid_fields(), vec!["email", "message"]);
    }

    #[test]
    fn test_combined_in_schema_order() {
        let combined = sample().combined();
        assert_eq!(combined.kinds(), vec![ErrorKind::Email, ErrorKind::MinLength]);
    }

    #[test]
    fn test_empty_is_valid() {
        let result = FormResult::default();
        assert!(result.is_valid());
        assert!(result.is_empty());
        assert!(result.combined().is_valid());
    }

    #[test]
    fn test_serializes_as_object() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["name"], json!({"valid": true, "errors": []}));
        assert_eq!(json["email"]["valid"], false);
        assert_eq!(json["message"]["errors"][0]["type"], "minLength");
    }

    #[test]
    fn test_json_round_trip() {
        let original = sample();
        let text = serde_json::to_string(&original).unwrap();
        let parsed: FormResult = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, original);
    }
}
