//! Form schemas and form validation.
//!
//! This module provides [`FormSchema`], an ordered mapping from field name
//! to the rules that field must satisfy, and [`validate_form`], which
//! validates every field the schema names.

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::rules::{validate_match, FieldRules};

use super::result::FormResult;
use super::values::FormValues;

/// A field whose value must equal another field of the same submission.
#[derive(Debug, Clone)]
struct FieldMatch {
    other: String,
    message: Option<String>,
}

/// Definition of a field within a form schema.
#[derive(Debug, Clone, Default)]
struct FieldDef {
    rules: FieldRules,
    matches: Option<FieldMatch>,
}

/// Describes which fields of a form are validated and how.
///
/// Fields are validated independently and reported in the order they were
/// added. Submitted fields the schema does not name are ignored.
///
/// # Example
///
/// ```rust
/// use formguard::{FieldRules, FormSchema, FormValues, ErrorKind};
///
/// let schema = FormSchema::new()
///     .field("email", FieldRules::new().required().email())
///     .field("password", FieldRules::new().required().min_len(8))
///     .matching("confirm", "password");
///
/// let values = FormValues::new()
///     .with("email", "ada@example.com")
///     .with("password", "correct horse")
///     .with("confirm", "correct hose");
///
/// let result = schema.validate(&values);
/// assert!(result.get("password").unwrap().is_valid());
/// assert_eq!(result.get("confirm").unwrap().kinds(), vec![ErrorKind::Match]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormSchema {
    fields: IndexMap<String, FieldDef>,
}

impl FormSchema {
    /// Creates a schema with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rules for a field.
    ///
    /// Calling this again for the same name replaces the earlier rules but
    /// keeps the field's position.
    pub fn field(mut self, name: impl Into<String>, rules: impl Into<FieldRules>) -> Self {
        self.fields.entry(name.into()).or_default().rules = rules.into();
        self
    }

    /// Requires `field` to equal the submitted value of `other`.
    ///
    /// The comparison runs after the field's own rules and reports a
    /// `match` error. `field` is added to the schema if it is not there yet.
    pub fn matching(self, field: impl Into<String>, other: impl Into<String>) -> Self {
        self.add_match(field.into(), other.into(), None)
    }

    /// Like [`matching`](Self::matching), with a custom message.
    pub fn matching_with_message(
        self,
        field: impl Into<String>,
        other: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.add_match(field.into(), other.into(), Some(message.into()))
    }

    fn add_match(mut self, field: String, other: String, message: Option<String>) -> Self {
        self.fields.entry(field).or_default().matches = Some(FieldMatch { other, message });
        self
    }

    /// Returns the rules for a field, if the schema names it.
    pub fn rules(&self, field: &str) -> Option<&FieldRules> {
        self.fields.get(field).map(|def| &def.rules)
    }

    /// Returns the name of the field that `field` must equal, if any.
    pub fn match_target(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .and_then(|def| def.matches.as_ref())
            .map(|m| m.other.as_str())
    }

    /// Returns an iterator over field names and rules in schema order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldRules)> {
        self.fields.iter().map(|(k, def)| (k.as_str(), &def.rules))
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the schema names no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validates a submission against this schema.
    pub fn validate(&self, values: &FormValues) -> FormResult {
        let mut results = IndexMap::with_capacity(self.fields.len());

        for (name, def) in &self.fields {
            let value = values.get(name);
            let mut result = def.rules.validate(value);

            if let Some(m) = &def.matches {
                result.extend([validate_match(
                    value,
                    values.get(&m.other),
                    m.message.as_deref(),
                )]);
            }

            trace!(field = %name, errors = result.errors().len(), "validated field");
            results.insert(name.clone(), result);
        }

        let result = FormResult::from_fields(results);
        debug!(
            fields = result.len(),
            invalid = result.invalid_fields().len(),
            "validated form"
        );
        result
    }
}

/// Validates every field named in `schema` against `values`.
///
/// A field missing from `values` is validated as a missing value. Fields in
/// `values` that the schema does not name produce no entry.
///
/// # Example
///
/// ```rust
/// use formguard::{validate_form, FieldRules, FormSchema, FormValues, ErrorKind};
///
/// let schema = FormSchema::new()
///     .field("name", FieldRules::new().required())
///     .field("message", FieldRules::new().required().min_len(10));
///
/// let values = FormValues::new().with("message", "Hi").with("company", "Acme");
/// let result = validate_form(&values, &schema);
///
/// assert_eq!(result.get("name").unwrap().kinds(), vec![ErrorKind::Required]);
/// assert_eq!(result.get("message").unwrap().kinds(), vec![ErrorKind::MinLength]);
/// assert!(result.get("company").is_none());
/// ```
pub fn validate_form(values: &FormValues, schema: &FormSchema) -> FormResult {
    schema.validate(values)
}

impl From<FormSchema> for IndexMap<String, FieldRules> {
    fn from(schema: FormSchema) -> Self {
        schema
            .fields
            .into_iter()
            .map(|(name, def)| (name, def.rules))
            .collect()
    }
}

impl<K: Into<String>, R: Into<FieldRules>> FromIterator<(K, R)> for FormSchema {
    fn from_iter<I: IntoIterator<Item = (K, R)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(FormSchema::new(), |schema, (name, rules)| schema.field(name, rules))
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<FormSchema>();
    assert_sync::<FormSchema>();
};
