//! Optional enrichment stage
//!
//! An [`Enricher`] contributes provisional violations for a record before the
//! deterministic rules run. Enrichment can only add findings: its output is
//! merged under the deterministic violations, and a failing enricher is
//! skipped for that record.

use shared_types::{Record, RiskLevel, Violation};

use crate::error::EnrichmentError;
use crate::patterns::contains_term;

/// A per-record signal source that runs ahead of the deterministic rules.
///
/// Implementations that call out to external services are responsible for
/// their own timeouts and should report them as [`EnrichmentError::Timeout`].
pub trait Enricher: Send + Sync {
    fn name(&self) -> &str;

    fn enrich(&self, record: &Record) -> Result<Vec<Violation>, EnrichmentError>;
}

/// Claims an agent commonly makes up when it has no documentation behind it
pub const TRUTH_SOURCE_KEYWORDS: &[&str] =
    &["refund", "discount", "free", "guarantee", "cancel", "promise"];

pub const TRUTH_SOURCE_RULE: &str = "truth-source";

/// Cross-checks risky claims against a reference document.
///
/// A claim keyword present in the record but absent from the truth source is
/// reported as a contradiction. Matching is plain substring containment.
#[derive(Debug, Clone)]
pub struct TruthSourceEnricher {
    truth_source: String,
}

impl TruthSourceEnricher {
    pub fn new(truth_source: &str) -> Self {
        Self {
            truth_source: truth_source.to_lowercase(),
        }
    }
}

impl Enricher for TruthSourceEnricher {
    fn name(&self) -> &str {
        "truth-source"
    }

    fn enrich(&self, record: &Record) -> Result<Vec<Violation>, EnrichmentError> {
        if self.truth_source.trim().is_empty() {
            return Ok(Vec::new());
        }

        let text_lower = record.body.to_lowercase();
        let violations = TRUTH_SOURCE_KEYWORDS
            .iter()
            .filter(|kw| contains_term(&text_lower, kw))
            .filter(|kw| !contains_term(&self.truth_source, kw))
            .map(|kw| Violation {
                rule: TRUTH_SOURCE_RULE.to_string(),
                risk: RiskLevel::Medium,
                message: format!(
                    "Contradicts truth source: claim involving '{}' not found in documentation",
                    kw
                ),
                evidence: Some(kw.to_string()),
            })
            .collect();

        Ok(violations)
    }
}
