//! JSON violation report writer.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use reval_model::{ViolationKind, Violations};

const REPORT_SCHEMA: &str = "reval.violation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct ViolationReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub violations: Vec<ViolationJson>,
}

#[derive(Debug, Serialize)]
pub struct ViolationJson {
    pub field: String,
    pub kind: ViolationKind,
    pub message: String,
}

/// Write the full ordered violation list as `violation_report.json` under
/// `output_dir`, creating the directory if needed.
pub fn write_violation_report_json(output_dir: &Path, violations: &Violations) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("violation_report.json");
    let payload = ViolationReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        violations: violations
            .iter()
            .map(|violation| ViolationJson {
                field: violation.field.clone(),
                kind: violation.kind.clone(),
                message: violation.to_string(),
            })
            .collect(),
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n"))?;
    Ok(output_path)
}
