//! Integration test: parse data files with `dval-core` and validate them
//! against schemas loaded from disk, the way the handler and the CLI do.

use std::io::Write;

use dval_core::DataFormat;
use dval_schema::{SchemaValidationError, SchemaValidator};
use serde_json::json;

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

fn rows_schema() -> tempfile::NamedTempFile {
    let schema = json!({
        "type": "array",
        "items": {
            "type": "object",
            "required": ["sku", "qty"],
            "properties": {
                "sku": { "type": "string", "minLength": 1 },
                "qty": { "type": "string", "pattern": "^[0-9]+$" }
            }
        }
    });
    write_temp(&schema.to_string())
}

#[test]
fn test_csv_rows_satisfy_string_schema() {
    let schema_file = rows_schema();
    let validator = SchemaValidator::from_file(schema_file.path()).unwrap();
    let data = DataFormat::Csv.parse(b"sku,qty\nA-1,3\nB-2,10\n").unwrap();
    let outcome = validator.validate(&data);
    assert!(outcome.is_valid(), "{:?}", outcome.errors());
}

#[test]
fn test_csv_short_row_fails_on_null_field() {
    let schema_file = rows_schema();
    let validator = SchemaValidator::from_file(schema_file.path()).unwrap();
    let data = DataFormat::Csv.parse(b"sku,qty\nA-1\n").unwrap();
    let outcome = validator.validate(&data);
    assert!(!outcome.is_valid());
    assert_eq!(outcome.violations()[0].instance_path, "/0/qty");
}

#[test]
fn test_csv_values_fail_numeric_schema() {
    // CSV values are strings, so a schema expecting numbers rejects them.
    let validator = SchemaValidator::from_value(
        "numeric",
        &json!({"type": "array", "items": {"properties": {"qty": {"type": "integer"}}}}),
    )
    .unwrap();
    let data = DataFormat::Csv.parse(b"qty\n3\n").unwrap();
    assert!(!validator.validate(&data).is_valid());
}

#[test]
fn test_json_document_against_file_schema() {
    let schema_file = write_temp(r#"{"type": "object", "required": ["id"]}"#);
    let validator = SchemaValidator::from_file(schema_file.path()).unwrap();
    let good = DataFormat::Json.parse(br#"{"id": 1}"#).unwrap();
    let bad = DataFormat::Json.parse(br#"{"name": "x"}"#).unwrap();
    assert!(validator.validate(&good).is_valid());
    assert!(!validator.validate(&bad).is_valid());
}

#[test]
fn test_missing_schema_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SchemaValidator::from_file(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SchemaValidationError::SchemaLoadError { .. }));
}
