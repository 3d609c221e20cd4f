use serde::{Deserialize, Serialize};

/// A record as supplied by the caller, before identifiers are assigned
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordInput {
    pub id: Option<String>,
    pub body: Option<String>,
}

impl RecordInput {
    pub fn new(id: Option<&str>, body: &str) -> Self {
        Self {
            id: id.map(str::to_string),
            body: Some(body.to_string()),
        }
    }
}

/// A record with its resolved identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub body: String,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }

    /// Highest contribution among the given violations, LOW when there are none
    pub fn highest<'a>(violations: impl IntoIterator<Item = &'a Violation>) -> Self {
        violations
            .into_iter()
            .map(|v| v.risk)
            .max()
            .unwrap_or(RiskLevel::Low)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub rule: String, // e.g., "discount-authority"
    pub risk: RiskLevel,
    pub message: String,
    pub evidence: Option<String>, // Matched term or value
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditStatus {
    Clean,
    Flagged,
}

/// Per-record result of an audit pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditOutcome {
    pub id: String,
    pub position: usize, // Index in the submitted batch
    pub status: AuditStatus,
    pub risk_level: RiskLevel,
    pub violations: Vec<String>,
    pub findings: Vec<Violation>,
}

impl AuditOutcome {
    /// Build an outcome from the violations found for a record.
    ///
    /// Risk resolves to the highest contribution among the violations.
    pub fn from_violations(record: &Record, position: usize, findings: Vec<Violation>) -> Self {
        let risk_level = RiskLevel::highest(&findings);
        let status = if findings.is_empty() {
            AuditStatus::Clean
        } else {
            AuditStatus::Flagged
        };

        Self {
            id: record.id.clone(),
            position,
            status,
            risk_level,
            violations: findings.iter().map(|v| v.message.clone()).collect(),
            findings,
        }
    }

    pub fn clean(record: &Record, position: usize) -> Self {
        Self::from_violations(record, position, Vec::new())
    }

    pub fn is_flagged(&self) -> bool {
        self.status == AuditStatus::Flagged
    }

    /// One-line summary: the first violation, or a compliant note
    pub fn reason(&self) -> &str {
        self.violations
            .first()
            .map(String::as_str)
            .unwrap_or("Compliant with policy.")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskBreakdown {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl RiskBreakdown {
    pub fn record(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::Low => self.low += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::High => self.high += 1,
        }
    }
}

/// Batch-level audit result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    pub score: u8, // Integrity score, 0..=100
    pub total_records: usize,
    pub flagged_count: usize,
    pub risk_breakdown: RiskBreakdown,
    pub outcomes: Vec<AuditOutcome>,
}
