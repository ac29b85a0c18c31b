//! String validator with length bounds and an optional pattern.

use crate::Bounds;
use crate::options::{STRING_KEYS, StringOptions, parse_options};
use payload_core::{
    ConfigError, ErrorDetail, Outcome, Result, Validator, Value, nullable_short_circuit,
};
use regex::Regex;

/// A regex compiled once for both match modes.
#[derive(Debug, Clone)]
struct Pattern {
    source: String,
    /// Whole string must match
    full: Regex,
    /// Match anchored at the start only
    prefix: Regex,
}

impl Pattern {
    fn compile(source: &str) -> Result<Self> {
        let full = Regex::new(&format!("^(?:{source})$"))
            .map_err(|e| ConfigError::invalid_pattern(source, e))?;
        let prefix = Regex::new(&format!("^(?:{source})"))
            .map_err(|e| ConfigError::invalid_pattern(source, e))?;
        Ok(Self {
            source: source.to_string(),
            full,
            prefix,
        })
    }
}

/// Validator for strings.
///
/// Bounds apply to the length in characters. The pattern, when set, is
/// checked only after the bounds pass; by default the whole string must
/// match (`fullmatch`), otherwise a match at the start is enough.
///
/// # Example
///
/// ```rust
/// use payload_core::{Validator, Value};
/// use payload_validator::StringValidator;
///
/// # fn main() -> Result<(), payload_core::ConfigError> {
/// let username = StringValidator::new()
///     .min(2)
///     .max(15)
///     .pattern(r"[a-z0-9_]+")?
///     .nullable(false);
///
/// assert!(username.validate(&Value::from("ada_l")).is_ok());
/// assert!(username.validate(&Value::from("Ada L")).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct StringValidator {
    bounds: Bounds<usize>,
    pattern: Option<Pattern>,
    fullmatch: bool,
    nullable: bool,
    err_message: Option<String>,
}

impl StringValidator {
    /// Name of this validator kind.
    pub const NAME: &'static str = "StringValidator";

    /// Creates a nullable validator with no bounds and no pattern.
    pub fn new() -> Self {
        Self {
            bounds: Bounds::default(),
            pattern: None,
            fullmatch: true,
            nullable: true,
            err_message: None,
        }
    }

    /// Builds a validator from a JSON object of options.
    ///
    /// Recognized keys: `max`, `min`, `regex`, `fullmatch`, `nullable`,
    /// `err_msg` (alias `err_message`).
    pub fn from_options(options: &serde_json::Value) -> Result<Self> {
        let opts: StringOptions = parse_options(Self::NAME, STRING_KEYS, options)?;
        let pattern = opts.regex.as_deref().map(Pattern::compile).transpose()?;

        Ok(Self {
            bounds: Bounds {
                max: opts.max,
                min: opts.min,
            },
            pattern,
            fullmatch: opts.fullmatch,
            nullable: opts.nullable,
            err_message: opts.err_msg,
        })
    }

    /// Sets the maximum length in characters.
    pub fn max(mut self, max: usize) -> Self {
        self.bounds.max = Some(max);
        self
    }

    /// Sets the minimum length in characters.
    pub fn min(mut self, min: usize) -> Self {
        self.bounds.min = Some(min);
        self
    }

    /// Sets the pattern the string must match.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPattern`] if the regex does not compile.
    pub fn pattern(mut self, regex: &str) -> Result<Self> {
        self.pattern = Some(Pattern::compile(regex)?);
        Ok(self)
    }

    /// Chooses between whole-string (`true`, the default) and prefix matching.
    pub fn fullmatch(mut self, fullmatch: bool) -> Self {
        self.fullmatch = fullmatch;
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

    /// Returns the configured length bounds.
    pub fn bounds(&self) -> Bounds<usize> {
        self.bounds
    }

    /// Returns the pattern as supplied, if any.
    pub fn regex(&self) -> Option<&str> {
        self.pattern.as_ref().map(|p| p.source.as_str())
    }

    fn check_pattern(&self, value: &str) -> Outcome {
        let Some(pattern) = &self.pattern else {
            return Ok(());
        };

        let matched = if self.fullmatch {
            pattern.full.is_match(value)
        } else {
            pattern.prefix.is_match(value)
        };

        if matched {
            Ok(())
        } else {
            Err(ErrorDetail::pattern_violation(format!(
                "String must match {}",
                pattern.source
            )))
        }
    }
}

impl Default for StringValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for StringValidator {
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

        let Some(s) = value.as_str() else {
            return Err(ErrorDetail::type_mismatch(
                "Value must be a String and not null",
            ));
        };

        self.bounds.check(s.chars().count(), "Length of value")?;
        self.check_pattern(s)
    }
}
