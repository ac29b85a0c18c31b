//! # Payload Validator
//!
//! Declarative validators for request payloads. Callers declare a validator
//! per field; a [`SchemaValidator`] checks a whole payload and aggregates
//! every failure into one report:
//!
//! - Primitive validators: integers, floats, strings, booleans, arrays
//! - Composite validators: arrays whose elements pass an inner validator,
//!   and schemas nested as object fields
//! - Missing-field detection and per-field error aggregation
//!
//! Validators are immutable once built and can be shared across threads.
//!
//! ## Example
//!
//! ```rust
//! use payload_validator::{ArrayOfValidator, IntValidator, SchemaValidator, StringValidator};
//! use serde_json::json;
//!
//! let users = SchemaValidator::new()
//!     .field("name", StringValidator::new().min(2).max(15).nullable(false))
//!     .field("age", IntValidator::new().min(13).nullable(false))
//!     .field(
//!         "hobbies",
//!         ArrayOfValidator::new(StringValidator::new().min(2).max(15).nullable(false)),
//!     );
//!
//! match users.accept(json!({"name": "Al", "age": 13, "hobbies": ["chess"]}), 400) {
//!     Ok(payload) => println!("Accepted {} fields", payload.len()),
//!     Err(body) => println!("Rejected: {}", serde_json::to_string(&body).unwrap()),
//! }
//! ```

mod array;
mod boolean;
mod bounds;
mod numeric;
mod options;
mod schema;
mod string;

pub use array::*;
pub use boolean::*;
pub use bounds::*;
pub use numeric::*;
pub use options::{FLAG_KEYS, NUMERIC_KEYS, STRING_KEYS};
pub use schema::*;
pub use string::*;
