//! Audit report assembly

use chrono::Utc;
use serde::Serialize;
use tracing::debug;

use compliance_engine::ComplianceEngine;
use shared_types::BatchResult;

use crate::error::CliError;

/// Report written to stdout: the batch result plus run metadata
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub success: bool,
    pub audited_at: String,
    pub source: String,
    pub enabled_rules: Vec<String>,
    #[serde(flatten)]
    pub result: BatchResult,
}

/// Parse a JSON log and audit it
pub fn audit_log(
    engine: &ComplianceEngine,
    source: &str,
    content: &str,
) -> Result<AuditReport, CliError> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    debug!("Parsed {} bytes of JSON from {}", content.len(), source);

    let result = engine.audit_json(&value)?;

    Ok(AuditReport {
        success: true,
        audited_at: Utc::now().to_rfc3339(),
        source: source.to_string(),
        enabled_rules: engine
            .enabled_rules()
            .iter()
            .map(|id| id.as_str().to_string())
            .collect(),
        result,
    })
}
