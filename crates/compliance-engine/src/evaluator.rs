//! Rule evaluation and risk resolution

use shared_types::{RiskLevel, Violation};

use crate::extractors::SignalBag;
use crate::rules::RuleSet;

/// Violations fired for one signal bag, with the resolved risk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub violations: Vec<Violation>,
    pub risk_level: RiskLevel,
}

/// Run every enabled rule against the bag.
///
/// There is no early exit: all rules run so every applicable violation is
/// reported. Violations keep rule declaration order.
pub fn evaluate(signals: &SignalBag, rules: &RuleSet) -> Evaluation {
    let violations: Vec<Violation> = rules
        .rules()
        .iter()
        .filter_map(|rule| rule.apply(signals, rules.config()))
        .collect();

    Evaluation {
        risk_level: resolve_risk(&violations),
        violations,
    }
}

/// HIGH if any violation is HIGH, else MEDIUM if any is MEDIUM, else LOW
pub fn resolve_risk(violations: &[Violation]) -> RiskLevel {
    RiskLevel::highest(violations)
}

/// Merge enrichment output with the deterministic violations.
///
/// Deterministic violations are always kept. Enrichment violations come
/// first, minus exact duplicates of a deterministic one.
pub fn merge_violations(enriched: Vec<Violation>, deterministic: Vec<Violation>) -> Vec<Violation> {
    let mut merged: Vec<Violation> = enriched
        .into_iter()
        .filter(|v| !deterministic.contains(v))
        .collect();
    merged.extend(deterministic);
    merged
}
