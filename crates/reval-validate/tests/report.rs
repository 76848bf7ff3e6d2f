//! Report writer tests.

use std::fs;
use std::path::PathBuf;

use reval_model::{Violation, ViolationKind, Violations};
use reval_validate::write_violation_report_json;

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "reval-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    dir
}

#[test]
fn report_lists_violations_in_order() {
    let dir = unique_temp_dir("report");
    let mut violations = Violations::new();
    violations.add(Violation::new("Name", ViolationKind::WrongLength));
    violations.add(Violation::new("Age", ViolationKind::BelowMinimum));

    let path = write_violation_report_json(&dir, &violations).expect("write report");
    let raw = fs::read_to_string(&path).expect("read report");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("parse report");

    assert_eq!(json["schema"], "reval.violation-report");
    assert_eq!(json["schema_version"], 1);
    assert_eq!(json["violations"][0]["field"], "Name");
    assert_eq!(json["violations"][0]["kind"], "WrongLength");
    assert_eq!(json["violations"][0]["message"], "Name: wrong length");
    assert_eq!(json["violations"][1]["field"], "Age");
    assert_eq!(json["violations"][1]["message"], "Age: below minimum");

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn report_is_valid_for_empty_lists() {
    let dir = unique_temp_dir("empty-report");
    let path = write_violation_report_json(&dir, &Violations::new()).expect("write report");
    let raw = fs::read_to_string(&path).expect("read report");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("parse report");
    assert_eq!(json["violations"].as_array().map(Vec::len), Some(0));
    fs::remove_dir_all(&dir).ok();
}
