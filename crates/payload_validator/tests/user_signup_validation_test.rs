//! End-to-end tests for a realistic user-signup schema.
//!
//! The schema mirrors what a web service would declare once at startup and
//! reuse for every `POST /users` request.

use anyhow::Result;
use payload_core::{ErrorKind, ErrorObject, Payload, Value};
use payload_validator::{
    ArrayOfValidator, BooleanValidator, FloatValidator, IntValidator, SchemaValidator,
    StringValidator,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use std::thread;

/// Creates the schema for a user signup payload
fn create_signup_schema() -> Result<SchemaValidator> {
    Ok(SchemaValidator::new()
        .field("name", StringValidator::new().min(2).max(15).nullable(false))
        .field(
            "email",
            StringValidator::new()
                .pattern(r"[^@\s]+@[^@\s]+\.[a-z]{2,}")?
                .nullable(false)
                .err_message("Please enter a valid email address"),
        )
        .field("age", IntValidator::new().min(13).nullable(false))
        .field("rating", FloatValidator::new().min(0.0).max(5.0))
        .field("newsletter", BooleanValidator::new())
        .field(
            "hobbies",
            ArrayOfValidator::new(StringValidator::new().min(2).max(15).nullable(false)),
        ))
}

fn payload(json: serde_json::Value) -> Payload {
    Value::from(json).into_payload().expect("payload must be an object")
}

fn valid_signup() -> serde_json::Value {
    json!({
        "name": "Ada",
        "email": "ada@example.com",
        "age": 36,
        "rating": 4.5,
        "newsletter": true,
        "hobbies": ["chess", "poetry"]
    })
}

#[test]
fn test_valid_signup_passes() -> Result<()> {
    let schema = create_signup_schema()?;

    let result = schema.validate_payload(&payload(valid_signup()));

    assert_eq!(result, Ok(()));
    Ok(())
}

#[test]
fn test_every_failing_field_is_reported() -> Result<()> {
    let schema = create_signup_schema()?;

    let report = schema
        .validate_payload(&payload(json!({
            "name": "A",
            "email": "not-an-email",
            "age": 12,
            "rating": 5,
            "newsletter": "yes",
            "hobbies": ["chess", "x"]
        })))
        .unwrap_err();

    assert_eq!(
        report.field_names(),
        vec!["name", "email", "age", "rating", "newsletter", "hobbies"]
    );

    let kinds: Vec<ErrorKind> = report.iter().map(|(_, e)| e.error.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ErrorKind::BoundViolation,
            ErrorKind::PatternViolation,
            ErrorKind::BoundViolation,
            ErrorKind::TypeMismatch,
            ErrorKind::TypeMismatch,
            ErrorKind::ElementError,
        ]
    );

    let email = report.get("email").unwrap();
    assert_eq!(email.message(), "Please enter a valid email address");
    assert_eq!(email.value, Value::from("not-an-email"));

    let hobbies = report.get("hobbies").unwrap();
    assert_eq!(hobbies.error.element_index, Some(1));
    Ok(())
}

#[test]
fn test_missing_fields_follow_declaration_order() -> Result<()> {
    let schema = create_signup_schema()?;

    let report = schema
        .validate_payload(&payload(json!({"hobbies": ["chess"], "age": 10})))
        .unwrap_err();

    assert_eq!(
        report.field_names(),
        vec!["age", "name", "email", "rating", "newsletter"]
    );
    assert!(!report.get("age").unwrap().is_missing());
    for field in ["name", "email", "rating", "newsletter"] {
        assert!(report.get(field).unwrap().is_missing(), "{field} should be missing");
    }
    Ok(())
}

#[test]
fn test_rejection_body_shape() -> Result<()> {
    let schema = SchemaValidator::new()
        .field("name", StringValidator::new().min(2).max(15).nullable(false))
        .field("age", IntValidator::new().min(13).nullable(false));

    let body = schema.accept(json!({"age": 10}), 400).unwrap_err();

    assert_eq!(
        serde_json::to_value(&body)?,
        json!({
            "code": 400,
            "message": "Payload validation failed",
            "errors": {
                "age": {
                    "error": {
                        "kind": "bound_violation",
                        "message": "Value must be greater than 13"
                    },
                    "value": 10
                },
                "name": {
                    "error": {"kind": "missing", "message": "Value is missing!"},
                    "value": null
                }
            }
        })
    );
    Ok(())
}

#[test]
fn test_element_err_message_reaches_the_report() -> Result<()> {
    let schema = SchemaValidator::new().field(
        "hobbies",
        ArrayOfValidator::new(
            StringValidator::new()
                .min(2)
                .err_message("Each hobby needs 2+ chars"),
        ),
    );

    let report = schema
        .validate_payload(&payload(json!({"hobbies": ["ok", "a"]})))
        .unwrap_err();

    assert_eq!(
        report.get("hobbies").unwrap().message(),
        "Each hobby needs 2+ chars"
    );
    assert_eq!(
        serde_json::to_value(&report)?,
        json!({
            "hobbies": {
                "error": {
                    "kind": "element_error",
                    "message": "An error occurred validating the element at index 1",
                    "element_index": 1,
                    "element_error": {
                        "kind": "bound_violation",
                        "message": "Length of value must be greater than 2",
                        "err_message": "Each hobby needs 2+ chars"
                    }
                },
                "value": ["ok", "a"]
            }
        })
    );
    Ok(())
}

#[test]
fn test_malformed_body_uses_same_error_object() -> Result<()> {
    let schema = create_signup_schema()?;

    let body = schema.accept(json!("just a string"), 400).unwrap_err();

    assert_eq!(body, ErrorObject::new(400, "Request body must be a JSON object"));
    assert_eq!(body.errors, None);
    Ok(())
}

#[test]
fn test_validation_is_idempotent() -> Result<()> {
    let schema = create_signup_schema()?;
    let input = payload(json!({"name": "A", "age": 10, "hobbies": ["x"]}));

    let first = schema.validate_payload(&input);
    let second = schema.validate_payload(&input);

    assert_eq!(first, second);
    assert!(first.is_err());
    Ok(())
}

#[test]
fn test_schema_shared_across_threads() -> Result<()> {
    let schema = Arc::new(create_signup_schema()?);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let schema = Arc::clone(&schema);
            thread::spawn(move || {
                let mut signup = valid_signup();
                if i % 2 == 1 {
                    signup["age"] = json!(i);
                }
                schema.validate_payload(&payload(signup)).is_ok()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let passed = handle.join().expect("validation thread panicked");
        assert_eq!(passed, i % 2 == 0, "thread {i}");
    }
    Ok(())
}

#[test]
fn test_check_parameters_requires_every_field() -> Result<()> {
    let schema = create_signup_schema()?;
    let body = payload(valid_signup());

    assert!(schema.check_parameters(body.keys()));
    assert!(!schema.check_parameters(["name", "email", "age"]));
    assert_eq!(
        schema.missing_parameters(["name", "email", "age"]),
        vec!["rating", "newsletter", "hobbies"]
    );
    Ok(())
}
