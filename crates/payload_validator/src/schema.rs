//! Schema validation logic.
//!
//! A [`SchemaValidator`] maps field names to validators and checks a whole
//! payload at once: every declared field present in the payload is run
//! through its validator, every declared field absent from it is reported
//! missing, and all failures land in one [`Report`].

use indexmap::IndexMap;
use payload_core::{
    ErrorDetail, ErrorObject, FieldError, Outcome, Payload, Report, Validator, Value,
    nullable_short_circuit,
};
use std::collections::HashSet;
use tracing::{debug, trace, warn};

/// Message returned by [`SchemaValidator::accept`] for a body that is not an object.
pub const NOT_AN_OBJECT_MESSAGE: &str = "Request body must be a JSON object";

/// Validates payloads against an ordered set of field validators.
///
/// Keys in the payload without a declared validator are ignored. A declared
/// field missing from the payload is always reported, whatever its
/// validator's nullability: nullability only governs a value that is
/// present but falsy.
///
/// # Example
///
/// ```rust
/// use payload_core::Value;
/// use payload_validator::{ArrayOfValidator, IntValidator, SchemaValidator, StringValidator};
/// use serde_json::json;
///
/// let users = SchemaValidator::new()
///     .field("name", StringValidator::new().min(2).max(15).nullable(false))
///     .field("age", IntValidator::new().min(13).nullable(false))
///     .field(
///         "hobbies",
///         ArrayOfValidator::new(StringValidator::new().min(2).max(15).nullable(false)),
///     );
///
/// let payload = Value::from(json!({"age": 10})).into_payload().unwrap();
/// let report = users.validate_payload(&payload).unwrap_err();
///
/// assert_eq!(report.field_names(), vec!["age", "name", "hobbies"]);
/// ```
#[derive(Debug)]
pub struct SchemaValidator {
    fields: IndexMap<String, Box<dyn Validator>>,
    nullable: bool,
    err_message: Option<String>,
}

impl SchemaValidator {
    /// Name of this validator kind.
    pub const NAME: &'static str = "SchemaValidator";

    /// Creates a schema with no fields.
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
            nullable: true,
            err_message: None,
        }
    }

    /// Declares a field.
    ///
    /// Declaring the same name twice replaces the earlier validator but keeps
    /// the field's original position.
    pub fn field(self, name: impl Into<String>, validator: impl Validator + 'static) -> Self {
        self.field_boxed(name, Box::new(validator))
    }

    /// Declares a field with an already boxed validator.
    pub fn field_boxed(mut self, name: impl Into<String>, validator: Box<dyn Validator>) -> Self {
        let name = name.into();
        if let Some(previous) = self.fields.insert(name.clone(), validator) {
            warn!(
                "Field '{}' declared twice, replacing its {}",
                name,
                previous.name()
            );
        }
        self
    }

    /// Sets whether a falsy value is accepted when this schema validates a
    /// nested object field.
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Sets the custom failure message used when this schema validates a
    /// nested object field.
    pub fn err_message(mut self, message: impl Into<String>) -> Self {
        self.err_message = Some(message.into());
        self
    }

    /// Returns the declared field names in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    /// Returns the validator declared for a field.
    pub fn get(&self, name: &str) -> Option<&dyn Validator> {
        self.fields.get(name).map(|v| v.as_ref())
    }

    /// Returns the number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field is declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validates a payload against the schema.
    ///
    /// # Returns
    ///
    /// `Ok(())` if every declared field is present and valid, or a
    /// [`Report`] with one entry per failing or missing field. Failing
    /// fields appear in payload order, followed by missing fields in
    /// declaration order.
    pub fn validate_payload(&self, payload: &Payload) -> Result<(), Report> {
        let mut report = Report::new();

        for (key, value) in payload {
            let Some(validator) = self.fields.get(key) else {
                trace!("Ignoring undeclared field '{}'", key);
                continue;
            };

            if let Err(error) = validator.validate(value) {
                trace!("Field '{}' rejected: {}", key, error);
                report.insert(
                    key.clone(),
                    FieldError::rejected(
                        error,
                        value.clone(),
                        validator.error_message().map(str::to_string),
                    ),
                );
            }
        }

        for name in self.fields.keys() {
            if !payload.contains_key(name) {
                trace!("Field '{}' missing", name);
                report.insert(name.clone(), FieldError::missing());
            }
        }

        if report.is_empty() {
            Ok(())
        } else {
            debug!(
                "Payload rejected: {} of {} declared fields failed",
                report.len(),
                self.fields.len()
            );
            Err(report)
        }
    }

    /// Checks that every declared field is among `names`.
    ///
    /// Independent of [`SchemaValidator::validate_payload`]: only names are
    /// compared, values are not looked at.
    pub fn check_parameters<I, S>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.missing_parameters(names).is_empty()
    }

    /// Returns the declared fields absent from `names`, in declaration order.
    pub fn missing_parameters<I, S>(&self, names: I) -> Vec<&str>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: HashSet<String> = names
            .into_iter()
            .map(|name| name.as_ref().to_string())
            .collect();

        self.fields
            .keys()
            .filter(|field| !names.contains(field.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// Validates a payload, turning a failure into the client error body.
    ///
    /// This is the guard an adapter wraps around a request handler; `code`
    /// is the status the adapter answers with.
    pub fn check(&self, payload: &Payload, code: u16) -> Result<(), ErrorObject> {
        self.validate_payload(payload)
            .map_err(|report| ErrorObject::from_report(code, report))
    }

    /// Converts a parsed JSON body into a payload and validates it.
    ///
    /// A body that is not a JSON object is rejected without consulting the
    /// field validators. On success the accepted payload is returned.
    pub fn accept(&self, body: serde_json::Value, code: u16) -> Result<Payload, ErrorObject> {
        let Some(payload) = Value::from(body).into_payload() else {
            debug!("Rejecting non-object request body");
            return Err(ErrorObject::new(code, NOT_AN_OBJECT_MESSAGE));
        };

        self.check(&payload, code)?;
        Ok(payload)
    }
}

impl Default for SchemaValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for SchemaValidator {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn is_nullable(&self) -> bool {
        self.nullable
    }

    fn error_message(&self) -> Option<&str> {
        self.err_message.as_deref()
    }

    fn validate(&self, value: &Value) -> Outcome {
        if nullable_short_circuit(self.nullable, value) {
            return Ok(());
        }

        let Some(payload) = value.as_object() else {
            return Err(ErrorDetail::type_mismatch(
                "Value must be an Object and not null",
            ));
        };

        self.validate_payload(payload)
            .map_err(|report| ErrorDetail::nested("Object contains invalid fields", report))
    }
}
