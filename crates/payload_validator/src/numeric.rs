//! Integer and float validators.
//!
//! Both kinds share one implementation, [`NumberValidator`], parameterized by
//! the number type. Integers and floats never stand in for each other: `5`
//! fails a float validator and `5.0` fails an integer validator.

use crate::Bounds;
use crate::options::{NUMERIC_KEYS, NumericOptions, parse_options};
use payload_core::{ErrorDetail, Outcome, Result, Validator, Value, nullable_short_circuit};
use serde::de::DeserializeOwned;
use std::fmt::{Debug, Display};

/// A number type a [`NumberValidator`] can target.
pub trait Number: Copy + PartialOrd + Display + Debug + DeserializeOwned + Send + Sync {
    /// Name of the validator kind for this number type.
    const VALIDATOR: &'static str;

    /// Message returned when the value has another type.
    const TYPE_MESSAGE: &'static str;

    /// Extracts the number if the value has exactly this type.
    fn extract(value: &Value) -> Option<Self>;
}

impl Number for i64 {
    const VALIDATOR: &'static str = "IntValidator";
    const TYPE_MESSAGE: &'static str = "Value must be an Integer and not null";

    fn extract(value: &Value) -> Option<Self> {
        value.as_int()
    }
}

impl Number for f64 {
    const VALIDATOR: &'static str = "FloatValidator";
    const TYPE_MESSAGE: &'static str = "Value must be a Float and not null";

    fn extract(value: &Value) -> Option<Self> {
        value.as_float()
    }
}

/// Validator for numbers of type `T`, with optional inclusive bounds.
///
/// # Example
///
/// ```rust
/// use payload_core::{Validator, Value};
/// use payload_validator::IntValidator;
///
/// let age = IntValidator::new().min(13).nullable(false);
///
/// assert!(age.validate(&Value::Int(13)).is_ok());
/// assert_eq!(
///     age.validate(&Value::Int(12)).unwrap_err().message,
///     "Value must be greater than 13"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct NumberValidator<T> {
    bounds: Bounds<T>,
    nullable: bool,
    err_message: Option<String>,
}

/// Validator for integers.
pub type IntValidator = NumberValidator<i64>;

/// Validator for floats.
pub type FloatValidator = NumberValidator<f64>;

impl<T: Number> NumberValidator<T> {
    /// Creates a nullable validator with no bounds.
    pub fn new() -> Self {
        Self {
            bounds: Bounds::default(),
            nullable: true,
            err_message: None,
        }
    }

    /// Builds a validator from a JSON object of options.
    ///
    /// Recognized keys: `max`, `min`, `nullable`, `err_msg` (alias `err_message`).
    pub fn from_options(options: &serde_json::Value) -> Result<Self> {
        let opts: NumericOptions<T> = parse_options(T::VALIDATOR, NUMERIC_KEYS, options)?;
        Ok(Self {
            bounds: Bounds {
                max: opts.max,
                min: opts.min,
            },
            nullable: opts.nullable,
            err_message: opts.err_msg,
        })
    }

    /// Sets the largest accepted value.
    pub fn max(mut self, max: T) -> Self {
        self.bounds.max = Some(max);
        self
    }

    /// Sets the smallest accepted value.
    pub fn min(mut self, min: T) -> Self {
        self.bounds.min = Some(min);
        self
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

    /// Returns the configured bounds.
    pub fn bounds(&self) -> Bounds<T> {
        self.bounds
    }
}

impl<T: Number> Default for NumberValidator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Number> Validator for NumberValidator<T> {
    fn name(&self) -> &'static str {
        T::VALIDATOR
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

        match T::extract(value) {
            Some(number) => self.bounds.check(number, "Value"),
            None => Err(ErrorDetail::type_mismatch(T::TYPE_MESSAGE)),
        }
    }
}
