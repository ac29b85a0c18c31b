//! Array validators.
//!
//! - [`ArrayValidator`]: the value must be an array, elements unchecked
//! - [`ArrayOfValidator`]: every element must pass an inner validator

use crate::options::{FLAG_KEYS, FlagOptions, parse_options};
use payload_core::{ErrorDetail, Outcome, Result, Validator, Value, nullable_short_circuit};

const ARRAY_TYPE_MESSAGE: &str = "Value must be an Array";

/// Validator for arrays of any elements.
#[derive(Debug, Clone)]
pub struct ArrayValidator {
    nullable: bool,
    err_message: Option<String>,
}

impl ArrayValidator {
    /// Name of this validator kind.
    pub const NAME: &'static str = "ArrayValidator";

    /// Creates a nullable array validator.
    pub fn new() -> Self {
        Self {
            nullable: true,
            err_message: None,
        }
    }

    /// Builds a validator from a JSON object of options.
    ///
    /// Recognized keys: `nullable`, `err_msg` (alias `err_message`).
    pub fn from_options(options: &serde_json::Value) -> Result<Self> {
        let opts: FlagOptions = parse_options(Self::NAME, FLAG_KEYS, options)?;
        Ok(Self {
            nullable: opts.nullable,
            err_message: opts.err_msg,
        })
    }

    /// Sets whether falsy values are accepted without checks.
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Sets the custom failure message.
    pub fn err_message(mut self, message: impl Into<String>) -> Self {
        self.err_message = Some(message.into());
        self
    }
}

impl Default for ArrayValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for ArrayValidator {
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

        match value {
            Value::Array(_) => Ok(()),
            _ => Err(ErrorDetail::type_mismatch(ARRAY_TYPE_MESSAGE)),
        }
    }
}

/// Validator for arrays whose elements all pass an inner validator.
///
/// Elements are checked in order and the scan stops at the first failure;
/// the returned detail names that element's index and wraps its error.
///
/// # Example
///
/// ```rust
/// use payload_core::{ErrorKind, Validator, Value};
/// use payload_validator::{ArrayOfValidator, StringValidator};
///
/// let hobbies = ArrayOfValidator::new(StringValidator::new().min(2).max(15).nullable(false));
///
/// let err = hobbies
///     .validate(&Value::Array(vec![Value::from("ok"), Value::from("a")]))
///     .unwrap_err();
/// assert_eq!(err.kind, ErrorKind::ElementError);
/// assert_eq!(err.element_index, Some(1));
/// ```
#[derive(Debug)]
pub struct ArrayOfValidator {
    of: Box<dyn Validator>,
    nullable: bool,
    err_message: Option<String>,
}

impl ArrayOfValidator {
    /// Name of this validator kind.
    pub const NAME: &'static str = "ArrayOfValidator";

    /// Creates a nullable validator applying `of` to every element.
    pub fn new(of: impl Validator + 'static) -> Self {
        Self::boxed(Box::new(of))
    }

    /// Same as [`ArrayOfValidator::new`] for an already boxed validator.
    pub fn boxed(of: Box<dyn Validator>) -> Self {
        Self {
            of,
            nullable: true,
            err_message: None,
        }
    }

    /// Builds a validator from an element validator and a JSON object of options.
    ///
    /// Recognized keys: `nullable`, `err_msg` (alias `err_message`).
    pub fn from_options(of: Box<dyn Validator>, options: &serde_json::Value) -> Result<Self> {
        let opts: FlagOptions = parse_options(Self::NAME, FLAG_KEYS, options)?;
        Ok(Self {
            of,
            nullable: opts.nullable,
            err_message: opts.err_msg,
        })
    }

    /// Sets whether falsy values are accepted without checks.
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Sets the custom failure message.
    pub fn err_message(mut self, message: impl Into<String>) -> Self {
        self.err_message = Some(message.into());
        self
    }

    /// Returns the element validator.
    pub fn element_validator(&self) -> &dyn Validator {
        self.of.as_ref()
    }
}

impl Validator for ArrayOfValidator {
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

        let Some(items) = value.as_array() else {
            return Err(ErrorDetail::type_mismatch(ARRAY_TYPE_MESSAGE));
        };

        for (index, item) in items.iter().enumerate() {
            if let Err(inner) = self.of.validate(item) {
                let inner = match self.of.error_message() {
                    Some(message) => inner.with_err_message(Some(message.to_string())),
                    None => inner,
                };
                return Err(ErrorDetail::element(
                    index,
                    format!("An error occurred validating the element at index {index}"),
                    inner,
                ));
            }
        }

        Ok(())
    }
}
