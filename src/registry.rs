//! Form registry for named schema storage.
//!
//! This module provides the [`FormRegistry`] type that stores form schemas
//! under names such as `"contact"` or `"newsletter"`, so that a submission
//! can be validated by the id of the form it came from.

use parking_lot::RwLock;
use rayon::prelude::*;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::form::{FormResult, FormSchema, FormValues};
use crate::interop::ToJsonSchema;

/// Type alias for the schema storage map.
type SchemaMap = Arc<RwLock<HashMap<String, Arc<FormSchema>>>>;

/// A thread-safe registry of named form schemas.
///
/// # Thread Safety
///
/// The registry uses `Arc<RwLock<...>>` for thread-safe access:
/// - Multiple threads can validate concurrently (read-only access)
/// - Registration operations are serialized (write access)
///
/// Cloning a registry yields a handle to the same storage.
///
/// # Example
///
/// ```rust
/// use formguard::{FieldRules, FormRegistry, FormSchema, FormValues};
///
/// let registry = FormRegistry::new();
/// registry
///     .register("newsletter", FormSchema::new().field("email", FieldRules::new().required().email()))
///     .unwrap();
///
/// let result = registry
///     .validate("newsletter", &FormValues::new().with("email", "ada@example.com"))
///     .unwrap();
/// assert!(result.is_valid());
/// ```
#[derive(Clone, Default)]
pub struct FormRegistry {
    schemas: SchemaMap,
}

impl FormRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a schema with the given name.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateName` if the name is already registered.
    pub fn register(&self, name: impl Into<String>, schema: FormSchema) -> Result<(), RegistryError> {
        let name = name.into();
        let mut schemas = self.schemas.write();

        if schemas.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        debug!(form = %name, fields = schema.len(), "registered form schema");
        schemas.insert(name, Arc::new(schema));
        Ok(())
    }

    /// Retrieves a schema by name.
    pub fn get(&self, name: &str) -> Option<Arc<FormSchema>> {
        self.schemas.read().get(name).cloned()
    }

    /// Returns true if a schema is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.read().contains_key(name)
    }

    /// Returns the registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.schemas.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Returns the number of registered schemas.
    pub fn len(&self) -> usize {
        self.schemas.read().len()
    }

    /// Returns true if no schemas are registered.
    pub fn is_empty(&self) -> bool {
        self.schemas.read().is_empty()
    }

    fn lookup(&self, name: &str) -> Result<Arc<FormSchema>, RegistryError> {
        self.get(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// Validates a submission against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` if the name is not registered.
    pub fn validate(&self, name: &str, values: &FormValues) -> Result<FormResult, RegistryError> {
        let schema = self.lookup(name)?;
        debug!(form = %name, "validating submission");
        Ok(schema.validate(values))
    }

    /// Validates many submissions against a named schema in parallel.
    ///
    /// Results are returned in the order of `submissions`. The lock is not
    /// held while validating.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` if the name is not registered.
    ///
    /// # Example
    ///
    /// ```rust
    /// use formguard::{FieldRules, FormRegistry, FormSchema, FormValues};
    ///
    /// let registry = FormRegistry::new();
    /// registry
    ///     .register("signup", FormSchema::new().field("email", FieldRules::new().email()))
    ///     .unwrap();
    ///
    /// let batch = vec![
    ///     FormValues::new().with("email", "a@example.com"),
    ///     FormValues::new().with("email", "nope"),
    /// ];
    /// let results = registry.validate_batch("signup", &batch).unwrap();
    ///
    /// assert!(results[0].is_valid());
    /// assert!(!results[1].is_valid());
    /// ```
    pub fn validate_batch(
        &self,
        name: &str,
        submissions: &[FormValues],
    ) -> Result<Vec<FormResult>, RegistryError> {
        let schema = self.lookup(name)?;
        debug!(form = %name, submissions = submissions.len(), "validating batch");
        Ok(submissions
            .par_iter()
            .map(|values| schema.validate(values))
            .collect())
    }

    /// Exports all registered schemas as a JSON Schema document with `$defs`.
    pub fn to_json_schema(&self) -> Value {
        let schemas = self.schemas.read();
        let mut defs = serde_json::Map::new();

        for (name, schema) in schemas.iter() {
            defs.insert(name.clone(), schema.to_json_schema());
        }

        json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "$defs": defs
        })
    }
}

/// Errors that can occur during registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a form with a name that already exists.
    #[error("form '{0}' already registered")]
    DuplicateName(String),

    /// Attempted to validate with a form name that doesn't exist.
    #[error("form '{0}' not found")]
    NotFound(String),
}
