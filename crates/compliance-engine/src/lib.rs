//! Policy compliance engine for agent transcripts
//!
//! Each record goes through the same pipeline:
//!
//! 1. Enrichment (optional) - provisional violations from extra signal sources
//! 2. Extraction - text to [`SignalBag`]
//! 3. Evaluation - the [`RuleSet`] runs against the bag, risk is resolved
//!
//! Outcomes are then folded into a [`BatchResult`] with an integrity score.
//! Records are independent, so batches are evaluated in parallel when the
//! `parallel` feature is on.

pub mod aggregate;
pub mod batch;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod evaluator;
pub mod extractors;
pub mod patterns;
pub mod rules;

use std::panic::{self, AssertUnwindSafe};

use serde_json::Value;
use shared_types::{AuditOutcome, BatchResult, Record, RecordInput, Violation};
use tracing::{debug, info, warn};

pub use aggregate::{aggregate, integrity_score};
pub use batch::{assign_ids, parse_batch};
pub use config::AuditConfig;
pub use enrichment::{Enricher, TruthSourceEnricher};
pub use error::{AuditError, EnrichmentError};
pub use evaluator::{evaluate, resolve_risk, Evaluation};
pub use extractors::{SignalBag, SignalExtractor, SignalTag, Vocabulary};
pub use rules::{Rule, RuleId, RuleSet};

/// ComplianceEngine entry point
pub struct ComplianceEngine {
    config: AuditConfig,
    extractor: SignalExtractor,
    rules: RuleSet,
    enrichers: Vec<Box<dyn Enricher>>,
}

impl ComplianceEngine {
    /// Engine with the default policy
    pub fn new() -> Self {
        Self::build(AuditConfig::default())
    }

    /// Engine with an explicit policy
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::InvalidConfig`] if the configuration fails validation
    pub fn with_config(config: AuditConfig) -> Result<Self, AuditError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: AuditConfig) -> Self {
        Self {
            extractor: SignalExtractor::new(Vocabulary::from_config(&config)),
            rules: RuleSet::from_config(&config),
            enrichers: Vec::new(),
            config,
        }
    }

    /// Add an enrichment stage; enrichers run in the order they were added
    pub fn with_enricher<E: Enricher + 'static>(mut self, enricher: E) -> Self {
        self.enrichers.push(Box::new(enricher));
        self
    }

    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    pub fn enabled_rules(&self) -> Vec<RuleId> {
        self.rules.rules().iter().map(|r| r.id).collect()
    }

    pub fn extract(&self, text: &str) -> SignalBag {
        self.extractor.extract(text)
    }

    /// Check compliance on raw text with the deterministic rules only
    pub fn check_text(&self, text: &str) -> Vec<Violation> {
        evaluate(&self.extractor.extract(text), &self.rules).violations
    }

    /// Run the full pipeline for one record.
    ///
    /// Never fails: a record whose evaluation panics is reported as CLEAN.
    pub fn evaluate_record(&self, record: &Record, position: usize) -> AuditOutcome {
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let enriched = self.run_enrichers(record);
            let evaluation = evaluate(&self.extractor.extract(&record.body), &self.rules);
            let violations = evaluator::merge_violations(enriched, evaluation.violations);
            AuditOutcome::from_violations(record, position, violations)
        }));

        match result {
            Ok(outcome) => {
                debug!(
                    "Record {} ({}): {:?}, risk {}, {} violation(s)",
                    outcome.id,
                    position,
                    outcome.status,
                    outcome.risk_level.as_str(),
                    outcome.violations.len()
                );
                outcome
            }
            Err(_) => {
                warn!(
                    "Evaluation of record {} ({}) panicked; reporting it as clean",
                    record.id, position
                );
                AuditOutcome::clean(record, position)
            }
        }
    }

    fn run_enrichers(&self, record: &Record) -> Vec<Violation> {
        let mut violations = Vec::new();

        for enricher in &self.enrichers {
            let result = panic::catch_unwind(AssertUnwindSafe(|| enricher.enrich(record)));
            match result {
                Ok(Ok(found)) => violations.extend(found),
                Ok(Err(err)) => warn!(
                    "Enricher '{}' failed for record {}: {}; using deterministic rules only",
                    enricher.name(),
                    record.id,
                    err
                ),
                Err(_) => warn!(
                    "Enricher '{}' panicked for record {}; using deterministic rules only",
                    enricher.name(),
                    record.id
                ),
            }
        }

        violations
    }

    /// Audit an ordered batch of records
    pub fn audit(&self, inputs: &[RecordInput]) -> BatchResult {
        let records = assign_ids(inputs);
        let outcomes = self.evaluate_all(&records);
        let result = aggregate(outcomes);

        info!(
            "Audited {} record(s): {} flagged, integrity score {}",
            result.total_records, result.flagged_count, result.score
        );
        result
    }

    /// Audit a batch supplied as parsed JSON
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::MalformedBatch`] if `value` is not an array;
    /// nothing is evaluated in that case
    pub fn audit_json(&self, value: &Value) -> Result<BatchResult, AuditError> {
        let inputs = parse_batch(value)?;
        Ok(self.audit(&inputs))
    }

    #[cfg(feature = "parallel")]
    fn evaluate_all(&self, records: &[Record]) -> Vec<AuditOutcome> {
        use rayon::prelude::*;

        if !self.config.parallel {
            return self.evaluate_sequential(records);
        }

        // Indexed collect keeps input order
        records
            .par_iter()
            .enumerate()
            .map(|(position, record)| self.evaluate_record(record, position))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate_all(&self, records: &[Record]) -> Vec<AuditOutcome> {
        self.evaluate_sequential(records)
    }

    fn evaluate_sequential(&self, records: &[Record]) -> Vec<AuditOutcome> {
        records
            .iter()
            .enumerate()
            .map(|(position, record)| self.evaluate_record(record, position))
            .collect()
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::new()
    }
}
