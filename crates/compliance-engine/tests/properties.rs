//! Property-based tests for extraction, evaluation and scoring

use compliance_engine::{integrity_score, ComplianceEngine};
use proptest::prelude::*;
use shared_types::{AuditStatus, RecordInput, RiskLevel};

/// Lowercase prose with no digits and none of the policy vocabulary
fn neutral_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "thanks", "for", "your", "order", "it", "shipped", "today", "hello", "support",
            "team", "tracking", "number", "sent",
        ]),
        0..20,
    )
    .prop_map(|words| words.join(" "))
}

/// Phrases that each trigger one rule family
fn violating_phrase() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("refund within 45 days"),
        Just("I will override the policy"),
        Just("free shipping on $20"),
        Just("take 12% off"),
        Just("take 40% off"),
        Just("we ship to Europe"),
        Just("we guarantee it"),
    ]
}

proptest! {
    /// Property: text without digits or vocabulary is clean and low risk
    #[test]
    fn neutral_text_is_clean(text in neutral_text()) {
        let result = ComplianceEngine::new().audit(&[RecordInput::new(None, &text)]);
        prop_assert_eq!(result.outcomes[0].status, AuditStatus::Clean);
        prop_assert_eq!(result.outcomes[0].risk_level, RiskLevel::Low);
    }

    /// Property: auditing the same record twice gives identical outcomes
    #[test]
    fn evaluation_is_idempotent(text in ".{0,200}") {
        let engine = ComplianceEngine::new();
        let input = [RecordInput::new(Some("x"), &text)];
        let first = serde_json::to_string(&engine.audit(&input)).unwrap();
        let second = serde_json::to_string(&engine.audit(&input)).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: appending a violating phrase never lowers the resolved risk
    #[test]
    fn risk_is_monotonic(text in neutral_text(), phrases in prop::collection::vec(violating_phrase(), 1..5)) {
        let engine = ComplianceEngine::new();
        let mut current = text;
        let mut previous = RiskLevel::Low;

        for phrase in phrases {
            current = format!("{} {}", current, phrase);
            let outcome = engine.audit(&[RecordInput::new(None, &current)]).outcomes.remove(0);
            prop_assert!(outcome.risk_level >= previous);
            prop_assert_eq!(outcome.status, AuditStatus::Flagged);
            previous = outcome.risk_level;
        }
    }

    /// Property: resolved risk is at least every violation's contribution
    #[test]
    fn risk_covers_every_violation(text in ".{0,200}") {
        let outcome = ComplianceEngine::new()
            .audit(&[RecordInput::new(None, &text)])
            .outcomes
            .remove(0);
        for finding in &outcome.findings {
            prop_assert!(outcome.risk_level >= finding.risk);
        }
    }

    /// Property: the integrity score stays within 0..=100
    #[test]
    fn score_is_bounded(total in 0usize..500, flagged_ratio in 0.0f64..=1.0) {
        let flagged = (total as f64 * flagged_ratio) as usize;
        let score = integrity_score(flagged, total);
        prop_assert!(score <= 100);
        if flagged == 0 {
            prop_assert_eq!(score, 100);
        }
    }

    /// Property: generated ids are unique and outcomes keep input order
    #[test]
    fn batch_preserves_order_and_ids(bodies in prop::collection::vec(".{0,40}", 0..40)) {
        let inputs: Vec<RecordInput> = bodies.iter().map(|b| RecordInput::new(None, b)).collect();
        let result = ComplianceEngine::new().audit(&inputs);

        prop_assert_eq!(result.total_records, inputs.len());
        let mut ids = std::collections::HashSet::new();
        for (position, outcome) in result.outcomes.iter().enumerate() {
            prop_assert_eq!(outcome.position, position);
            prop_assert!(ids.insert(outcome.id.clone()));
        }
    }
}
