use fundscope_lib::{parse_all_records, CandidateReport, ClassificationThresholds};
use serde_json::Value;
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("CLI crate should be inside workspace")
        .to_path_buf()
}

fn load_fixture_reports() -> Vec<Value> {
    let path = workspace_root()
        .join("fec_weball/tests/fixtures")
        .join("weball_sample.txt");
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read fixture {}: {}", path.display(), e));
    let thresholds = ClassificationThresholds::default();
    parse_all_records(&text)
        .iter()
        .map(|r| serde_json::to_value(CandidateReport::build(r, &thresholds)).unwrap())
        .collect()
}

fn load_schema(name: &str) -> Value {
    let path = workspace_root().join("schema").join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read schema {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("schema is valid JSON")
}

// ---------------------------------------------------------------------------
// Positive validation: every fixture record's report conforms
// ---------------------------------------------------------------------------

#[test]
fn test_fixture_reports_conform_to_schema() {
    let schema = load_schema("analysis.schema.json");
    let validator = jsonschema::draft202012::new(&schema).expect("analysis schema compiles");

    let reports = load_fixture_reports();
    assert_eq!(reports.len(), 7);
    for report in &reports {
        if let Err(e) = validator.validate(report) {
            panic!(
                "report for {} failed validation: {e}",
                report["record"]["candidateId"]
            );
        }
    }
}

#[test]
fn test_blank_record_report_conforms() {
    let schema = load_schema("analysis.schema.json");
    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");

    let reports = load_fixture_reports();
    let doe = reports
        .iter()
        .find(|r| r["record"]["candidateId"] == "P80001571")
        .expect("fixture has the blank presidential record");
    assert!(doe["record"]["coverageEnd"].is_null());
    assert!(validator.validate(doe).is_ok());
}

// ---------------------------------------------------------------------------
// Negative validation: schema rejects invalid data
// ---------------------------------------------------------------------------

#[test]
fn test_schema_rejects_missing_required_field() {
    let schema = load_schema("analysis.schema.json");
    let mut report = load_fixture_reports().remove(0);

    report["analytics"]
        .as_object_mut()
        .expect("analytics is an object")
        .remove("transfers");

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&report).is_err(),
        "schema should reject analytics missing transfers"
    );
}

#[test]
fn test_schema_rejects_invalid_enum() {
    let schema = load_schema("analysis.schema.json");
    let mut report = load_fixture_reports().remove(0);

    report["contributors"]
        .as_object_mut()
        .expect("contributors is an object")
        .insert(
            "primaryFundingSource".to_string(),
            Value::String("lobbyist".to_string()),
        );

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&report).is_err(),
        "schema should reject unknown funding source"
    );
}

#[test]
fn test_schema_rejects_negative_adjusted_receipts() {
    let schema = load_schema("analysis.schema.json");
    let mut report = load_fixture_reports().remove(0);

    report["analytics"]["transfers"]["adjustedTotalReceipts"] = serde_json::json!(-1.0);

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(validator.validate(&report).is_err());
}

#[test]
fn test_schema_rejects_additional_properties() {
    let schema = load_schema("analysis.schema.json");
    let mut report = load_fixture_reports().remove(0);

    report["record"]
        .as_object_mut()
        .expect("record is an object")
        .insert("bogusField".to_string(), Value::Number(123.into()));

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&report).is_err(),
        "schema should reject additional properties"
    );
}
