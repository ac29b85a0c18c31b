//! Boolean validator.

use crate::options::{FLAG_KEYS, FlagOptions, parse_options};
use payload_core::{ErrorDetail, Outcome, Result, Validator, Value, nullable_short_circuit};

/// Validator for booleans.
///
/// A value of any other type is rejected. Integers are never read as
/// booleans, even `0` and `1`.
#[derive(Debug, Clone)]
pub struct BooleanValidator {
    nullable: bool,
    err_message: Option<String>,
}

impl BooleanValidator {
    /// Name of this validator kind.
    pub const NAME: &'static str = "BooleanValidator";

    /// Creates a nullable boolean validator.
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

impl Default for BooleanValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for BooleanValidator {
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
            Value::Bool(_) => Ok(()),
            _ => Err(ErrorDetail::type_mismatch(
                "Value must be a Boolean and not null",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payload_core::ErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_accepts_booleans() {
        let validator = BooleanValidator::new().nullable(false);
        assert!(validator.validate(&Value::Bool(true)).is_ok());
        assert!(validator.validate(&Value::Bool(false)).is_ok());
    }

    #[test]
    fn test_type_mismatch_is_invalid() {
        let validator = BooleanValidator::new().nullable(false);

        for value in [Value::Int(1), Value::from("true"), Value::Null] {
            let err = validator.validate(&value).unwrap_err();
            assert_eq!(err.kind, ErrorKind::TypeMismatch);
            assert_eq!(err.message, "Value must be a Boolean and not null");
        }
    }

    #[test]
    fn test_nullable_accepts_falsy_non_booleans() {
        let validator = BooleanValidator::new();
        assert!(validator.validate(&Value::Int(0)).is_ok());
        assert!(validator.validate(&Value::Null).is_ok());
        assert!(validator.validate(&Value::Int(1)).is_err());
    }
}
