//! # Payload Core
//!
//! Core data structures and types for validating request payloads.
//!
//! A payload is a JSON-like mapping of field name to value. Callers declare a
//! validator per field; validating a payload yields either acceptance or a
//! structured, per-field report of what was wrong.
//!
//! ## Key Concepts
//!
//! - **Value**: A JSON-like value as found in a parsed request body
//! - **Validator**: A stateless, reusable rule checking one value
//! - **ErrorDetail**: Why a single value was rejected
//! - **Report**: Every failing field of one payload, missing fields included
//! - **ErrorObject**: The `{code, message}` body an adapter returns to clients
//!
//! ## Example
//!
//! ```rust
//! use payload_core::{ErrorObject, FieldError, Report};
//!
//! let mut report = Report::new();
//! report.insert("name", FieldError::missing());
//!
//! let body = ErrorObject::from_report(400, report);
//! assert_eq!(body.code, 400);
//! assert!(body.errors.unwrap().get("name").unwrap().is_missing());
//! ```

pub mod error;
pub mod report;
pub mod validator;
pub mod value;

pub use error::*;
pub use report::*;
pub use validator::*;
pub use value::*;
