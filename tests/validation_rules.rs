//! Validation Rule Tests
//!
//! - Undeclared fields are always rejected
//! - Required fields must be present on insert; optional ones never are
//! - Types match exactly
//! - The first violation in check order is the one reported

use serde_json::{json, Value};
use tabula::schema::{SchemaValidator, ValidationMode};
use tabula::{Database, FieldSpec, FieldType, Row, SchemaError, StoreError, TableSchema};

// =============================================================================
// Helper Functions
// =============================================================================

fn row(value: Value) -> Row {
    value.as_object().cloned().expect("row must be a JSON object")
}

fn profiles() -> TableSchema {
    TableSchema::new(
        "profiles",
        vec![
            FieldSpec::id(),
            FieldSpec::text("handle").not_null(),
            FieldSpec::integer("age"),
            FieldSpec::text("bio"),
            FieldSpec::integer("score").not_null(),
        ],
    )
}

fn schema_error(err: StoreError) -> SchemaError {
    err.schema_error().cloned().expect("expected a schema error")
}

// =============================================================================
// Schema Closure Tests
// =============================================================================

/// Any undeclared field fails, whatever its value.
#[test]
fn test_unknown_field_always_rejected() {
    let schema = profiles();
    let validator = SchemaValidator::new(&schema);

    for value in [json!(null), json!(1), json!("x"), json!([1]), json!({"a": 1})] {
        let mut candidate = row(json!({"handle": "h", "score": 1}));
        candidate.insert("nickname".into(), value);

        for mode in [ValidationMode::Insert, ValidationMode::Update] {
            assert_eq!(
                validator.validate(&candidate, mode).unwrap_err(),
                SchemaError::unknown_field("nickname")
            );
        }
    }
}

/// An unknown field is reported ahead of missing required fields.
#[test]
fn test_unknown_field_reported_first() {
    let mut db = Database::new();
    db.create_table(
        "messages",
        vec![
            FieldSpec::id(),
            FieldSpec::text("title").not_null(),
            FieldSpec::text("description").not_null(),
        ],
    )
    .unwrap();

    let err = db
        .table("messages")
        .unwrap()
        .insert(&row(json!({"name": "John Doe"})))
        .unwrap_err();
    assert_eq!(err.to_string(), "name doesnt exists on schema");

    let err = db
        .table("messages")
        .unwrap()
        .insert(&row(json!({"description": "A message description"})))
        .unwrap_err();
    assert_eq!(err.to_string(), "title cannot be null");
}

// =============================================================================
// Null Enforcement Tests
// =============================================================================

/// Omitting any required field on insert fails with MissingRequiredField.
#[test]
fn test_omitted_required_field_fails() {
    let schema = profiles();
    let validator = SchemaValidator::new(&schema);

    let err = validator.validate_insert(&row(json!({"score": 1}))).unwrap_err();
    assert_eq!(err, SchemaError::missing_required("handle"));

    let err = validator.validate_insert(&row(json!({"handle": "h"}))).unwrap_err();
    assert_eq!(err, SchemaError::missing_required("score"));
}

/// Optional fields may always be omitted or null.
#[test]
fn test_optional_fields_never_required() {
    let schema = profiles();
    let validator = SchemaValidator::new(&schema);

    assert!(validator
        .validate_insert(&row(json!({"handle": "h", "score": 1})))
        .is_ok());
    assert!(validator
        .validate_insert(&row(json!({"handle": "h", "score": 1, "age": null, "bio": null})))
        .is_ok());
}

/// Optional fields left out are absent from the stored record.
#[test]
fn test_optional_fields_absent_in_record() {
    let mut db = Database::new();
    db.create_table_from_schema(profiles()).unwrap();

    let record = db
        .table("profiles")
        .unwrap()
        .insert(&row(json!({"handle": "h", "score": 5, "bio": null})))
        .unwrap();
    assert_eq!(record.to_json(), json!({"id": 1, "handle": "h", "score": 5}));
}

/// Update may omit required fields but may not null them.
#[test]
fn test_update_required_field_rules() {
    let mut db = Database::new();
    db.create_table_from_schema(profiles()).unwrap();
    db.table("profiles")
        .unwrap()
        .insert(&row(json!({"handle": "h", "score": 5, "age": 40})))
        .unwrap();

    let updated = db
        .table("profiles")
        .unwrap()
        .update(1, &row(json!({"age": 41})))
        .unwrap();
    assert_eq!(updated.get_integer("score"), Some(5));

    let err = db
        .table("profiles")
        .unwrap()
        .update(1, &row(json!({"score": null})))
        .unwrap_err();
    assert_eq!(schema_error(err), SchemaError::missing_required("score"));

    let cleared = db
        .table("profiles")
        .unwrap()
        .update(1, &row(json!({"age": null})))
        .unwrap();
    assert!(!cleared.contains("age"));
}

// =============================================================================
// Type Conformance Tests
// =============================================================================

/// Text fields reject numbers; integer fields reject strings and floats.
#[test]
fn test_type_mismatch() {
    let schema = profiles();
    let validator = SchemaValidator::new(&schema);

    let err = validator
        .validate_insert(&row(json!({"handle": 10, "score": 1})))
        .unwrap_err();
    assert_eq!(err, SchemaError::type_mismatch("handle", FieldType::Text));

    let err = validator
        .validate_insert(&row(json!({"handle": "h", "score": "1"})))
        .unwrap_err();
    assert_eq!(err, SchemaError::type_mismatch("score", FieldType::Integer));

    let err = validator
        .validate_update(&row(json!({"age": 2.5})))
        .unwrap_err();
    assert_eq!(err.to_string(), "age must be an integer");
}

/// Negative and large integers are accepted as-is.
#[test]
fn test_integer_range() {
    let schema = profiles();
    let validated = SchemaValidator::new(&schema)
        .validate_insert(&row(json!({"handle": "h", "score": i64::MIN, "age": i64::MAX})))
        .unwrap();
    assert_eq!(validated.len(), 3);
}

// =============================================================================
// Primary Key Tests
// =============================================================================

/// The primary key is assigned by the store, on insert and forever after.
#[test]
fn test_primary_key_not_caller_supplied() {
    let mut db = Database::new();
    db.create_table_from_schema(profiles()).unwrap();

    let err = db
        .table("profiles")
        .unwrap()
        .insert(&row(json!({"id": 10, "handle": "h", "score": 1})))
        .unwrap_err();
    assert_eq!(err.code(), "TABULA_PRIMARY_KEY_SUPPLIED");

    db.table("profiles")
        .unwrap()
        .insert(&row(json!({"handle": "h", "score": 1})))
        .unwrap();
    let err = db
        .table("profiles")
        .unwrap()
        .update(1, &row(json!({"id": 2})))
        .unwrap_err();
    assert_eq!(err.code(), "TABULA_PRIMARY_KEY_SUPPLIED");
}

/// Schemas without exactly one auto-increment integer primary key are refused.
#[test]
fn test_invalid_schemas_refused() {
    let mut db = Database::new();

    let err = db
        .create_table("a", vec![FieldSpec::text("name")])
        .unwrap_err();
    assert_eq!(err.code(), "TABULA_INVALID_SCHEMA");

    let err = db
        .create_table("b", vec![FieldSpec::integer("id").primary_key()])
        .unwrap_err();
    assert_eq!(err.code(), "TABULA_INVALID_SCHEMA");

    assert!(db.table_names().is_empty());
}

/// A primary key need not be called `id`.
#[test]
fn test_custom_primary_key_name() {
    let mut db = Database::new();
    db.create_table(
        "tags",
        vec![
            FieldSpec::text("label").not_null(),
            FieldSpec::integer("tag_id").primary_key().auto_increment(),
        ],
    )
    .unwrap();

    let tag = db
        .table("tags")
        .unwrap()
        .insert(&row(json!({"label": "rust"})))
        .unwrap();
    assert_eq!(serde_json::to_string(&tag).unwrap(), r#"{"label":"rust","tag_id":1}"#);
    assert_eq!(db.table("tags").unwrap().delete_by_id(1).unwrap(), tag);
}

// =============================================================================
// Determinism Tests
// =============================================================================

/// The same invalid row fails the same way every time.
#[test]
fn test_validation_is_deterministic() {
    let schema = profiles();
    let validator = SchemaValidator::new(&schema);
    let candidate = row(json!({"score": "x", "age": "y"}));

    let first = validator.validate_insert(&candidate).unwrap_err();
    assert_eq!(first, SchemaError::missing_required("handle"));
    for _ in 0..100 {
        assert_eq!(validator.validate_insert(&candidate).unwrap_err(), first);
    }
}
