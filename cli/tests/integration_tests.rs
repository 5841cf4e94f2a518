use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_form-preview"))
        .args(args)
        .output()
        .expect("failed to run form-preview")
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("failed to write fixture");
    path
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

const CONTACT_SCHEMA: &str = r#"{
  "formTitle": "Contact",
  "fields": [
    {"id": "name", "type": "text", "label": "Name", "required": true},
    {"id": "topic", "type": "select", "label": "Topic",
     "options": [{"value": "sales", "label": "Sales"}, {"value": "support", "label": "Support"}]}
  ]
}"#;

// ---------------------------------------------------------------------------
// init
// ---------------------------------------------------------------------------

#[test]
fn init_prints_default_schema() {
    let output = run(&["init"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let doc: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(doc["formTitle"], "Sample Dynamic Form");
    assert_eq!(doc["fields"][0]["id"], "name");
    assert!(stdout.starts_with("{\n  \"formTitle\""));
}

#[test]
fn init_respects_configured_indent() {
    let dir = TempDir::new().unwrap();
    let config = write_file(&dir, "preview.yml", "indent: 4\n");
    let target = dir.path().join("schema.json");

    let output = run(&[
        "init",
        "--config",
        path_str(&config),
        "--output",
        path_str(&target),
    ]);
    assert!(output.status.success());

    let written = fs::read_to_string(&target).unwrap();
    assert!(written.starts_with("{\n    \"formTitle\""));
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

#[test]
fn validate_accepts_valid_and_reports_invalid() {
    let dir = TempDir::new().unwrap();
    let good = write_file(&dir, "good.json", CONTACT_SCHEMA);
    let bad = write_file(&dir, "bad.json", r#"{"fields": "not-a-list"}"#);

    let output = run(&["validate", path_str(&good), path_str(&bad)]);
    assert!(!output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("good.json: valid"));
    assert!(stdout.contains("bad.json: invalid"));
    assert!(stdout.contains("  - Form title is required"));
    assert!(stdout.contains("  - Fields must be an array"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1 of 2 schema file(s) rejected"));
}

#[test]
fn validate_json_output() {
    let dir = TempDir::new().unwrap();
    let broken = write_file(&dir, "broken.json", "{ nope");

    let output = run(&["validate", "--format", "json", path_str(&broken)]);
    assert!(!output.status.success());

    let reports: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(reports[0]["valid"], false);
    assert_eq!(reports[0]["errors"], serde_json::json!(["Invalid JSON format"]));
}

#[test]
fn validate_warns_on_unknown_type() {
    let dir = TempDir::new().unwrap();
    let schema = write_file(
        &dir,
        "dates.json",
        r#"{"formTitle": "T", "fields": [{"id": "d", "type": "date", "label": "D"}]}"#,
    );

    let output = run(&["validate", path_str(&schema)]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unsupported type date"));
}

// ---------------------------------------------------------------------------
// render
// ---------------------------------------------------------------------------

#[test]
fn render_writes_html() {
    let dir = TempDir::new().unwrap();
    let schema = write_file(&dir, "contact.json", CONTACT_SCHEMA);

    let output = run(&["render", path_str(&schema)]);
    assert!(output.status.success());

    let html = String::from_utf8_lossy(&output.stdout);
    assert!(html.contains("<h2>Contact</h2>"));
    assert!(html.contains("<option value=\"\">Select Topic</option>"));
    assert!(html.contains(">Validate Form</button>"));
}

#[test]
fn render_invalid_schema_shows_placeholder() {
    let dir = TempDir::new().unwrap();
    let schema = write_file(&dir, "bad.json", r#"{"formTitle": "T"}"#);

    let output = run(&["render", path_str(&schema)]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Please provide a valid JSON schema"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Fields must be an array"));
}

// ---------------------------------------------------------------------------
// submit
// ---------------------------------------------------------------------------

#[test]
fn submit_prints_values() {
    let dir = TempDir::new().unwrap();
    let schema = write_file(&dir, "contact.json", CONTACT_SCHEMA);

    let output = run(&[
        "submit",
        path_str(&schema),
        "--value",
        "name=Ada",
        "--value",
        "topic=support",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json = stdout
        .strip_prefix("Form Validated\n\n")
        .expect("report header");
    let values: serde_json::Value = serde_json::from_str(json).unwrap();
    assert_eq!(values, serde_json::json!({"name": "Ada", "topic": "support"}));
}

#[test]
fn submit_blocked_by_required_field() {
    let dir = TempDir::new().unwrap();
    let schema = write_file(&dir, "contact.json", CONTACT_SCHEMA);

    let output = run(&["submit", path_str(&schema)]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("name: Name is required"));
    assert!(stderr.contains("Submission blocked by 1 field error(s)"));
}

#[test]
fn submit_reads_values_json() {
    let dir = TempDir::new().unwrap();
    let schema = write_file(&dir, "contact.json", CONTACT_SCHEMA);
    let values = write_file(&dir, "values.json", r#"{"name": "Grace"}"#);

    let output = run(&["submit", path_str(&schema), "--values-json", path_str(&values)]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("\"name\": \"Grace\""));
}

#[test]
fn submit_rejects_unknown_field() {
    let dir = TempDir::new().unwrap();
    let schema = write_file(&dir, "contact.json", CONTACT_SCHEMA);

    let output = run(&["submit", path_str(&schema), "--value", "nope=1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown field: nope"));
}
