//! Request validation layer.
//!
//! Validation takes the raw JSON object of a request and produces either a
//! typed, sanitized input or a [`FieldErrors`] map of field → messages.
//!
//! Rules run in two stages:
//!
//! 1. **Shape rules** (`required`, `integer`) are declared on the per-entity
//!    input structs with the `validator` derive and need no storage access.
//! 2. **Storage rules** (`unique`, `exists`) are run by the services against
//!    their repositories, only for fields that passed the shape rules.
//!
//! Both stages write into the same [`FieldErrors`], so a client sees every
//! problem with a request in a single 422 response.

pub mod city;
pub mod country;
pub mod freight;

pub use city::CityInput;
pub use country::CountryInput;
pub use freight::FreightInput;

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use validator::ValidationErrors;

use crate::error::AppError;

/// The untyped JSON object of a request body.
pub type RawInput = Map<String, Value>;

/// Validation messages keyed by request field.
///
/// Serializes as a plain object: `{"city_name": ["..."], "country": ["..."]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an error map holding a single message.
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Appends a message to a field; a field may collect several messages.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Returns true if the field has at least one message.
    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(())` when no field failed, otherwise a validation error.
    pub fn into_result(self) -> Result<(), AppError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self))
        }
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = Self::new();

        for (field, errs) in errors.field_errors() {
            for err in errs {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("The {} is invalid.", messages::attribute(&field)));
                fields.add(&field, message);
            }
        }

        fields
    }
}

/// Message catalogue for every rule.
pub mod messages {
    /// Human-readable attribute name: `freight_speditor_name` → `freight speditor name`.
    pub fn attribute(field: &str) -> String {
        field.replace('_', " ")
    }

    pub fn required(field: &str) -> String {
        format!("The {} field is required.", attribute(field))
    }

    pub fn taken(field: &str) -> String {
        format!("The {} has already been taken.", attribute(field))
    }

    pub fn integer(field: &str) -> String {
        format!("The {} must be an integer.", attribute(field))
    }

    pub fn invalid_selection(field: &str) -> String {
        format!("The selected {} is invalid.", attribute(field))
    }
}

/// Returns the value of a field when it counts as present.
///
/// Missing keys, `null`, blank strings and empty arrays/objects are absent.
pub fn present<'a>(raw: &'a RawInput, field: &str) -> Option<&'a Value> {
    raw.get(field).filter(|v| !is_blank(v))
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Reads a field as text.
///
/// Strings are trimmed; numbers and booleans use their JSON text; arrays and
/// objects are kept as compact JSON.
pub fn text(raw: &RawInput, field: &str) -> Option<String> {
    present(raw, field).map(|value| match value {
        Value::String(s) => s.trim().to_string(),
        other => other.to_string(),
    })
}

/// Interprets a value as an integer: a JSON integer or a string holding an
/// optionally signed decimal integer.
pub fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => {
            let s = s.trim();
            let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            s.parse().ok()
        }
        _ => None,
    }
}
