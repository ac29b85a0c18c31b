//! Dynamic validator configuration.
//!
//! Typed builders cover schemas written in code. When constraints come from
//! external data instead, they arrive as a JSON object of options; this
//! module checks the keys against the set each validator kind recognizes
//! and deserializes the values.

use payload_core::{ConfigError, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Option keys understood by the integer and float validators.
pub const NUMERIC_KEYS: &[&str] = &["max", "min", "nullable", "err_msg", "err_message"];

/// Option keys understood by the string validator.
pub const STRING_KEYS: &[&str] = &[
    "max",
    "min",
    "regex",
    "fullmatch",
    "nullable",
    "err_msg",
    "err_message",
];

/// Option keys understood by the boolean, array and array-of validators.
pub const FLAG_KEYS: &[&str] = &["nullable", "err_msg", "err_message"];

fn default_true() -> bool {
    true
}

/// Options for the integer and float validators.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct NumericOptions<T> {
    pub max: Option<T>,
    pub min: Option<T>,
    #[serde(default = "default_true")]
    pub nullable: bool,
    #[serde(alias = "err_message")]
    pub err_msg: Option<String>,
}

/// Options for the string validator.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct StringOptions {
    pub max: Option<usize>,
    pub min: Option<usize>,
    pub regex: Option<String>,
    #[serde(default = "default_true")]
    pub fullmatch: bool,
    #[serde(default = "default_true")]
    pub nullable: bool,
    #[serde(alias = "err_message")]
    pub err_msg: Option<String>,
}

/// Options for validators that only carry nullability and a custom message.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FlagOptions {
    #[serde(default = "default_true")]
    pub nullable: bool,
    #[serde(alias = "err_message")]
    pub err_msg: Option<String>,
}

/// Parses a JSON object of options for the named validator kind.
///
/// `null` is treated as an empty object. Every key outside `recognized` is
/// reported at once, sorted, before any value is looked at.
pub(crate) fn parse_options<T: DeserializeOwned>(
    validator: &'static str,
    recognized: &[&str],
    options: &serde_json::Value,
) -> Result<T> {
    let empty = serde_json::Value::Object(serde_json::Map::new());
    let options = match options {
        serde_json::Value::Null => &empty,
        serde_json::Value::Object(map) => {
            let mut unknown: Vec<String> = map
                .keys()
                .filter(|key| !recognized.contains(&key.as_str()))
                .cloned()
                .collect();
            if !unknown.is_empty() {
                unknown.sort();
                debug!("Rejecting options {:?} for {}", unknown, validator);
                return Err(ConfigError::unknown_options(validator, unknown));
            }
            options
        }
        _ => return Err(ConfigError::NotAnObject { validator }),
    };

    T::deserialize(options).map_err(|e| ConfigError::invalid_option(validator, e))
}
