//! Inclusive min/max bounds.

use payload_core::{ErrorDetail, Outcome};
use std::fmt::Display;

/// Optional inclusive bounds on a numeric quantity.
///
/// A missing bound leaves that side unconstrained. Zero is a real bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    /// Largest accepted value
    pub max: Option<T>,
    /// Smallest accepted value
    pub min: Option<T>,
}

impl<T> Default for Bounds<T> {
    fn default() -> Self {
        Self {
            max: None,
            min: None,
        }
    }
}

impl<T: PartialOrd + Display + Copy> Bounds<T> {
    /// Checks `actual` against the bounds.
    ///
    /// The maximum is checked first; once it fails the minimum is not
    /// looked at. `subject` names the checked quantity in the message
    /// (`"Value"`, `"Length of value"`).
    pub fn check(&self, actual: T, subject: &str) -> Outcome {
        if let Some(max) = self.max {
            if actual > max {
                return Err(ErrorDetail::bound_violation(format!(
                    "{subject} must be less than {max}"
                )));
            }
        }

        if let Some(min) = self.min {
            if actual < min {
                return Err(ErrorDetail::bound_violation(format!(
                    "{subject} must be greater than {min}"
                )));
            }
        }

        Ok(())
    }
}
