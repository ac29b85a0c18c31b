//! The validator contract.
//!
//! Every validator kind, primitive or composite, implements [`Validator`].
//! Schemas hold their fields as `Box<dyn Validator>`, so new kinds plug in
//! without touching the aggregation logic.

use crate::{ErrorDetail, Value};
use std::fmt::Debug;

/// Result of validating one value: `Ok(())` or the reason for rejection.
pub type Outcome = std::result::Result<(), ErrorDetail>;

/// Core trait for checking a value against a set of constraints.
///
/// Implementations are immutable after construction. `validate` never
/// mutates the validator, so one instance can be shared across threads and
/// reused for any number of payloads.
///
/// # Example
///
/// ```rust
/// use payload_core::{ErrorDetail, Outcome, Validator, Value};
///
/// #[derive(Debug)]
/// struct EvenValidator;
///
/// impl Validator for EvenValidator {
///     fn name(&self) -> &'static str {
///         "EvenValidator"
///     }
///
///     fn is_nullable(&self) -> bool {
///         false
///     }
///
///     fn validate(&self, value: &Value) -> Outcome {
///         match value.as_int() {
///             Some(i) if i % 2 == 0 => Ok(()),
///             _ => Err(ErrorDetail::type_mismatch("Value must be an even Integer")),
///         }
///     }
/// }
///
/// assert!(EvenValidator.validate(&Value::Int(4)).is_ok());
/// assert!(EvenValidator.validate(&Value::Int(3)).is_err());
/// ```
pub trait Validator: Send + Sync + Debug {
    /// Name of the validator kind, used in configuration errors and logs.
    fn name(&self) -> &'static str;

    /// Whether falsy values are accepted without further checks.
    fn is_nullable(&self) -> bool;

    /// Custom message to surface instead of the generic one on failure.
    fn error_message(&self) -> Option<&str> {
        None
    }

    /// Validates a single value.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the value is accepted, or the [`ErrorDetail`] describing
    /// the first violated constraint.
    fn validate(&self, value: &Value) -> Outcome;
}

/// The nullability short-circuit shared by every validator kind.
///
/// Returns true when the value is falsy and the validator is nullable, in
/// which case the value is accepted before any type or bound check. A
/// nullable field therefore also accepts falsy values of the wrong type,
/// such as `0` for a string field.
pub fn nullable_short_circuit(nullable: bool, value: &Value) -> bool {
    nullable && value.is_falsy()
}
