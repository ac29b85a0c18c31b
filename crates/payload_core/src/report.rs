//! Validation outcomes and error reports.
//!
//! This module contains the diagnostic types returned by validators:
//! - [`ErrorDetail`]: why a single value was rejected
//! - [`FieldError`]: one entry of a schema report
//! - [`Report`]: every failing field of a payload, in order
//! - [`ErrorObject`]: the `{code, message}` error body adapters return to clients

use crate::Value;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Message recorded for a declared field absent from the payload.
pub const MISSING_MESSAGE: &str = "Value is missing!";

/// Message used when a payload is rejected as a whole.
pub const REJECTED_MESSAGE: &str = "Payload validation failed";

/// Category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Runtime type differs from the validator's target type
    TypeMismatch,
    /// Numeric value or string length outside the configured bounds
    BoundViolation,
    /// String does not match the configured pattern
    PatternViolation,
    /// Declared field absent from the payload
    Missing,
    /// An array element failed the element validator
    ElementError,
    /// A nested object failed its schema
    FieldErrors,
}

/// Why a value was rejected.
///
/// Carries a human-readable message and, for composite validators, the
/// detail of the nested failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDetail {
    /// Failure category
    pub kind: ErrorKind,

    /// Human-readable description
    pub message: String,

    /// Position of the first failing element (array-of validators)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_index: Option<usize>,

    /// Detail of the first failing element (array-of validators)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_error: Option<Box<ErrorDetail>>,

    /// Per-field report of a nested object (schema validators)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Report>,

    /// Custom message of the validator that produced this detail, when it
    /// is not the field's own validator (array-of elements)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub err_message: Option<String>,
}

impl ErrorDetail {
    /// Creates a detail with no nested failure.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            element_index: None,
            element_error: None,
            fields: None,
            err_message: None,
        }
    }

    /// Creates a new type mismatch detail.
    pub fn type_mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TypeMismatch, message)
    }

    /// Creates a new bound violation detail.
    pub fn bound_violation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BoundViolation, message)
    }

    /// Creates a new pattern violation detail.
    pub fn pattern_violation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::PatternViolation, message)
    }

    /// Creates the detail recorded for a missing field.
    pub fn missing() -> Self {
        Self::new(ErrorKind::Missing, MISSING_MESSAGE)
    }

    /// Wraps the failure of the element at `index`.
    pub fn element(index: usize, message: impl Into<String>, inner: ErrorDetail) -> Self {
        Self {
            element_index: Some(index),
            element_error: Some(Box::new(inner)),
            ..Self::new(ErrorKind::ElementError, message)
        }
    }

    /// Attaches the custom message of the validator that failed.
    pub fn with_err_message(mut self, err_message: Option<String>) -> Self {
        self.err_message = err_message;
        self
    }

    /// The innermost custom message along the chain of element failures.
    pub fn custom_message(&self) -> Option<&str> {
        self.element_error
            .as_deref()
            .and_then(ErrorDetail::custom_message)
            .or(self.err_message.as_deref())
    }

    /// Wraps the report of a nested object.
    pub fn nested(message: impl Into<String>, report: Report) -> Self {
        Self {
            fields: Some(report),
            ..Self::new(ErrorKind::FieldErrors, message)
        }
    }
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// A single entry of a schema [`Report`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    /// Why the field was rejected
    pub error: ErrorDetail,

    /// The raw value found in the payload (`Null` when missing)
    pub value: Value,

    /// Custom message configured on the field's validator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub err_message: Option<String>,
}

impl FieldError {
    /// Creates an entry for a value that failed its validator.
    pub fn rejected(error: ErrorDetail, value: Value, err_message: Option<String>) -> Self {
        Self {
            error,
            value,
            err_message,
        }
    }

    /// Creates an entry for a declared field absent from the payload.
    pub fn missing() -> Self {
        Self {
            error: ErrorDetail::missing(),
            value: Value::Null,
            err_message: None,
        }
    }

    /// Returns true if this entry records a missing field.
    pub fn is_missing(&self) -> bool {
        self.error.kind == ErrorKind::Missing
    }

    /// The message to show a client.
    ///
    /// The field's own custom message wins, then one configured on a failing
    /// element validator, then the generic message.
    pub fn message(&self) -> &str {
        self.err_message
            .as_deref()
            .or_else(|| self.error.custom_message())
            .unwrap_or(&self.error.message)
    }
}

/// Per-field errors of one payload validation.
///
/// Entries for present fields follow payload order; missing fields follow,
/// in the order the schema declares them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Report {
    entries: IndexMap<String, FieldError>,
}

impl Report {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the error for `field`, replacing any earlier entry.
    pub fn insert(&mut self, field: impl Into<String>, error: FieldError) {
        self.entries.insert(field.into(), error);
    }

    /// Returns the number of failing fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no field failed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gets the entry for a field.
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.entries.get(field)
    }

    /// Returns true if the field has an entry.
    pub fn contains(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    /// Returns an iterator over `(field, error)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the failing field names in report order.
    pub fn field_names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = (&'a String, &'a FieldError);
    type IntoIter = indexmap::map::Iter<'a, String, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Uniform error body returned to clients by an adapter layer.
///
/// Validation failures embed the report under `errors`; other failures
/// (such as a malformed body) only carry `code` and `message`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorObject {
    /// Status code chosen by the adapter
    pub code: u16,

    /// Human-readable summary
    pub message: String,

    /// Per-field errors, for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Report>,
}

impl ErrorObject {
    /// Creates an error body without a report.
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            errors: None,
        }
    }

    /// Creates the error body for a rejected payload.
    pub fn from_report(code: u16, report: Report) -> Self {
        Self {
            code,
            message: REJECTED_MESSAGE.to_string(),
            errors: Some(report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_report_preserves_insertion_order() {
        let mut report = Report::new();
        report.insert(
            "age",
            FieldError::rejected(
                ErrorDetail::bound_violation("Value must be greater than 13"),
                Value::Int(10),
                None,
            ),
        );
        report.insert("name", FieldError::missing());
        report.insert("hobbies", FieldError::missing());

        assert_eq!(report.len(), 3);
        assert_eq!(report.field_names(), vec!["age", "name", "hobbies"]);
        assert!(report.get("name").unwrap().is_missing());
        assert!(!report.get("age").unwrap().is_missing());
    }

    #[test]
    fn test_field_error_prefers_custom_message() {
        let generic = FieldError::rejected(
            ErrorDetail::type_mismatch("Value must be an Integer and not null"),
            Value::from("x"),
            None,
        );
        assert_eq!(generic.message(), "Value must be an Integer and not null");

        let custom = FieldError::rejected(
            ErrorDetail::type_mismatch("Value must be an Integer and not null"),
            Value::from("x"),
            Some("Age is required".to_string()),
        );
        assert_eq!(custom.message(), "Age is required");
    }

    #[test]
    fn test_field_error_falls_back_to_element_message() {
        let element = ErrorDetail::element(
            0,
            "An error occurred validating the element at index 0",
            ErrorDetail::bound_violation("Value must be less than 5")
                .with_err_message(Some("Scores go up to 5".to_string())),
        );
        assert_eq!(element.custom_message(), Some("Scores go up to 5"));

        let entry = FieldError::rejected(element.clone(), Value::Array(vec![Value::Int(9)]), None);
        assert_eq!(entry.message(), "Scores go up to 5");

        let overridden = FieldError::rejected(
            element,
            Value::Array(vec![Value::Int(9)]),
            Some("Bad scores".to_string()),
        );
        assert_eq!(overridden.message(), "Bad scores");
    }

    #[test]
    fn test_report_serialization_shape() {
        let mut report = Report::new();
        report.insert(
            "hobbies",
            FieldError::rejected(
                ErrorDetail::element(
                    1,
                    "An error occurred validating some values in the Array",
                    ErrorDetail::bound_violation("Length of value must be greater than 2"),
                ),
                Value::Array(vec![Value::from("ok"), Value::from("a")]),
                Some("Bad hobbies".to_string()),
            ),
        );
        report.insert("name", FieldError::missing());

        let body = ErrorObject::from_report(400, report);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "code": 400,
                "message": "Payload validation failed",
                "errors": {
                    "hobbies": {
                        "error": {
                            "kind": "element_error",
                            "message": "An error occurred validating some values in the Array",
                            "element_index": 1,
                            "element_error": {
                                "kind": "bound_violation",
                                "message": "Length of value must be greater than 2"
                            }
                        },
                        "value": ["ok", "a"],
                        "err_message": "Bad hobbies"
                    },
                    "name": {
                        "error": {"kind": "missing", "message": "Value is missing!"},
                        "value": null
                    }
                }
            })
        );
    }

    #[test]
    fn test_error_object_without_report() {
        let body = ErrorObject::new(415, "Request body must be JSON");
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"code": 415, "message": "Request body must be JSON"})
        );
    }
}
