//! Raw form submissions.
//!
//! This module provides [`FormValues`], the keyed input handed to form
//! validation, and [`FormValuesError`] for submissions that cannot be read
//! as flat string fields.

use indexmap::IndexMap;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when reading a submission from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormValuesError {
    /// The submission is not a JSON object.
    #[error("form submission must be an object, got {got}")]
    NotAnObject { got: &'static str },

    /// A field holds a nested array or object.
    #[error("field '{field}' must be a string, number, boolean, or null, got {got}")]
    UnsupportedValue { field: String, got: &'static str },
}

/// The values of a submitted form, keyed by field name.
///
/// A field may be present with a value, present without one (a JSON
/// `null`), or absent. Validation treats the last two alike.
///
/// # Example
///
/// ```rust
/// use formguard::FormValues;
///
/// let values: FormValues = [("name", "Ada"), ("email", "ada@example.com")]
///     .into_iter()
///     .collect();
///
/// assert_eq!(values.get("name"), Some("Ada"));
/// assert_eq!(values.get("company"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    fields: IndexMap<String, Option<String>>,
}

impl FormValues {
    /// Creates an empty submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value, returning self for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a field value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), Some(value.into()));
    }

    /// Records a field as present but without a value.
    pub fn insert_null(&mut self, name: impl Into<String>) {
        self.fields.insert(name.into(), None);
    }

    /// Returns the value of a field, or `None` if it is null or absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(|v| v.as_deref())
    }

    /// Returns true if the field was submitted, even as null.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Returns the number of submitted fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields were submitted.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns an iterator over fields in submission order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Reads a submission from a JSON object.
    ///
    /// Strings are taken as-is, `null` becomes a field without a value, and
    /// numbers and booleans use their JSON text. Nested arrays and objects
    /// are rejected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use formguard::FormValues;
    /// use serde_json::json;
    ///
    /// let values = FormValues::from_json(&json!({
    ///     "name": "Ada",
    ///     "age": 36,
    ///     "company": null
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(values.get("age"), Some("36"));
    /// assert!(values.contains("company"));
    /// assert_eq!(values.get("company"), None);
    /// ```
    pub fn from_json(value: &Value) -> Result<Self, FormValuesError> {
        let obj = value.as_object().ok_or(FormValuesError::NotAnObject {
            got: value_type_name(value),
        })?;

        let mut values = FormValues::new();
        for (name, field) in obj {
            match field {
                Value::Null => values.insert_null(name.clone()),
                Value::String(s) => values.insert(name.clone(), s.clone()),
                Value::Bool(_) | Value::Number(_) => values.insert(name.clone(), field.to_string()),
                Value::Array(_) | Value::Object(_) => {
                    return Err(FormValuesError::UnsupportedValue {
                        field: name.clone(),
                        got: value_type_name(field),
                    })
                }
            }
        }
        Ok(values)
    }
}

impl<K, V> FromIterator<(K, V)> for FormValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = FormValues::new();
        for (name, value) in iter {
            values.insert(name, value);
        }
        values
    }
}

impl TryFrom<&Value> for FormValues {
    type Error = FormValuesError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        FormValues::from_json(value)
    }
}

/// Returns the JSON type name for a value.
fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
