//! JSON Schema interoperability.
//!
//! This module renders field rule lists and form schemas as JSON Schema
//! (draft 2020-12) documents, so that a browser-side validator can enforce
//! the same constraints before a form is submitted.

use serde_json::{json, Map, Value};

use crate::form::FormSchema;
use crate::rules::{FieldRules, Rule};

const DRAFT_2020_12: &str = "https://json-schema.org/draft/2020-12/schema";

/// Trait for converting rule types to JSON Schema format.
pub trait ToJsonSchema {
    /// Converts this value to a JSON Schema representation.
    fn to_json_schema(&self) -> Value;
}

impl ToJsonSchema for FieldRules {
    /// Renders the rules as a string schema.
    ///
    /// A field that accepts a missing value is typed `["string", "null"]`, so
    /// an explicit `null` validates the same way on both sides. Required becomes `minLength: 1` with a non-whitespace `pattern`, email
    /// becomes `format: "email"`, length bounds keep the tightest value, and
    /// a fixed match value becomes `const`. Custom predicates cannot be
    /// expressed and are left out.
    fn to_json_schema(&self) -> Value {
        let mut schema = Map::new();
        let kind = if self.rejects_missing() {
            json!("string")
        } else {
            json!(["string", "null"])
        };
        schema.insert("type".to_string(), kind);

        let mut min: Option<usize> = None;
        let mut max: Option<usize> = None;

        for rule in self.rules() {
            match rule {
                Rule::Required { .. } => {
                    min = Some(min.map_or(1, |m| m.max(1)));
                    schema.insert("pattern".to_string(), json!(r"\S"));
                }
                Rule::Email { .. } => {
                    schema.insert("format".to_string(), json!("email"));
                }
                Rule::Length(options) => {
                    if let Some(lo) = options.min {
                        min = Some(min.map_or(lo, |m| m.max(lo)));
                    }
                    if let Some(hi) = options.max {
                        max = Some(max.map_or(hi, |m| m.min(hi)));
                    }
                }
                Rule::Match {
                    other: Some(other), ..
                } => {
                    schema.insert("const".to_string(), json!(other));
                }
                Rule::Match { other: None, .. } | Rule::Custom { .. } => {}
            }
        }

        if let Some(min) = min {
            schema.insert("minLength".to_string(), json!(min));
        }
        if let Some(max) = max {
            schema.insert("maxLength".to_string(), json!(max));
        }

        Value::Object(schema)
    }
}

impl ToJsonSchema for FormSchema {
    /// Renders the form as an object schema.
    ///
    /// Fields whose rules reject a missing value are listed under `required`,
    /// whether through a required rule or through email, minimum length,
    /// fixed match or predicate rules that fail on `None`. Unlisted
    /// properties are allowed, mirroring form validation ignoring them.
    fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for (name, rules) in self.fields() {
            properties.insert(name.to_string(), rules.to_json_schema());
            if rules.rejects_missing() {
                required.push(json!(name));
            }
        }

        json!({
            "$schema": DRAFT_2020_12,
            "type": "object",
            "properties": properties,
            "required": required
        })
    }
}
