use form_schema_core::{
    FieldType, SchemaIssue, default_schema_text, generate_default_schema, parse_schema,
    validate_document,
};
use serde_json::{Value, json};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn errors_of(doc: Value) -> Vec<String> {
    validate_document(&doc).errors()
}

// ---------------------------------------------------------------------------
// Document-level checks
// ---------------------------------------------------------------------------

#[test]
fn non_list_fields_report_only_title_and_fields_errors() {
    let result = validate_document(&json!({"fields": "not-a-list"}));
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "valid": false,
            "errors": ["Form title is required", "Fields must be an array"]
        })
    );
}

#[test]
fn non_list_fields_with_title_reports_single_error() {
    for fields in [json!(null), json!(3), json!({"0": {}}), json!("abc")] {
        let errors = errors_of(json!({"formTitle": "T", "fields": fields}));
        assert_eq!(errors, vec!["Fields must be an array"]);
    }
}

#[test]
fn empty_field_list_is_valid() {
    assert!(validate_document(&json!({"formTitle": "T", "fields": []})).is_valid());
}

// ---------------------------------------------------------------------------
// Field-level checks
// ---------------------------------------------------------------------------

#[test]
fn select_without_id_or_options() {
    let result = validate_document(&json!({
        "formTitle": "T",
        "fields": [{"type": "select", "label": "L"}]
    }));
    assert!(!result.is_valid());
    assert!(result.issues.contains(&SchemaIssue::MissingFieldId { index: 0 }));
    assert!(result.issues.iter().any(|issue| matches!(
        issue,
        SchemaIssue::MissingOptions { field_type, .. } if field_type == "select"
    )));
    assert_eq!(
        result.errors(),
        vec![
            "Field at index 0 is missing an ID",
            "SELECT field undefined requires options",
        ]
    );
}

#[test]
fn missing_options_reported_once_per_field() {
    let errors = errors_of(json!({
        "formTitle": "T",
        "fields": [
            {"id": "a", "type": "radio", "label": "A"},
            {"id": "b", "type": "select", "label": "B", "options": []},
            {"id": "c", "type": "select", "label": "C", "options": [{"value": "1", "label": "One"}]},
        ]
    }));
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| e.ends_with("requires options")));
}

#[test]
fn bad_options_reference_index_and_field() {
    let errors = errors_of(json!({
        "formTitle": "T",
        "fields": [{
            "id": "plan",
            "type": "select",
            "label": "Plan",
            "options": [{"value": "free"}, {"label": "Pro"}, {"value": "team", "label": "Team"}]
        }]
    }));
    assert_eq!(
        errors,
        vec![
            "Option 0 in field plan is missing value or label",
            "Option 1 in field plan is missing value or label",
        ]
    );
}

#[test]
fn errors_keep_document_order() {
    let errors = errors_of(json!({
        "fields": [
            {"type": "text"},
            {"id": "r", "type": "radio", "label": "R", "options": [{}]},
        ]
    }));
    assert_eq!(
        errors,
        vec![
            "Form title is required",
            "Field at index 0 is missing an ID",
            "Field at index 0 is missing a label",
            "Option 0 in field r is missing value or label",
        ]
    );
}

// ---------------------------------------------------------------------------
// Round trips
// ---------------------------------------------------------------------------

#[test]
fn default_schema_validates_cleanly() {
    let doc = serde_json::to_value(generate_default_schema()).unwrap();
    assert_eq!(
        serde_json::to_value(validate_document(&doc)).unwrap(),
        json!({"valid": true, "errors": []})
    );
}

#[test]
fn default_schema_text_parses_back() {
    let parsed = parse_schema(&default_schema_text(2)).unwrap();
    let field = &parsed.schema.fields[0];
    assert_eq!(field.id, "name");
    assert_eq!(field.field_type, FieldType::Text);
    assert_eq!(field.label, "Full Name");
    assert_eq!(field.placeholder.as_deref(), Some("Enter your full name"));
}

#[test]
fn validating_twice_gives_identical_results() {
    let doc = json!({"formTitle": "", "fields": [{"id": "x", "type": "select"}]});
    let first = validate_document(&doc);
    let second = validate_document(&doc);
    assert_eq!(first, second);
    assert_eq!(first.errors(), second.errors());
}
