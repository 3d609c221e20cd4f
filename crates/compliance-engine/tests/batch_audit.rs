//! End-to-end batch audits through the public engine API

use compliance_engine::{AuditConfig, AuditError, ComplianceEngine, TruthSourceEnricher};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AuditStatus, RecordInput, RiskLevel};

fn audit_one(text: &str) -> shared_types::AuditOutcome {
    let result = ComplianceEngine::new().audit(&[RecordInput::new(Some("one"), text)]);
    result.outcomes.into_iter().next().unwrap()
}

#[test]
fn test_four_record_scenario() {
    let engine = ComplianceEngine::new();
    let inputs = vec![
        RecordInput::new(Some("clean"), "Thanks for contacting us, your order is on its way."),
        RecordInput::new(Some("refund"), "refund after 30 days"),
        RecordInput::new(Some("discount"), "15% discount, no approval"),
        RecordInput::new(Some("geo"), "ship to Canada, guarantee satisfaction"),
    ];

    let result = engine.audit(&inputs);

    assert_eq!(result.total_records, 4);
    assert_eq!(result.flagged_count, 3);
    assert_eq!(result.score, 25);

    let statuses: Vec<AuditStatus> = result.outcomes.iter().map(|o| o.status).collect();
    assert_eq!(
        statuses,
        vec![
            AuditStatus::Clean,
            AuditStatus::Flagged,
            AuditStatus::Flagged,
            AuditStatus::Flagged,
        ]
    );

    let fourth = &result.outcomes[3];
    assert_eq!(fourth.id, "geo");
    assert_eq!(fourth.risk_level, RiskLevel::High);
    assert_eq!(fourth.violations.len(), 2);
    assert!(fourth.violations[0].starts_with("Restricted geography"));
    assert!(fourth.violations[1].starts_with("Prohibited liability language"));

    assert_eq!(result.outcomes[2].risk_level, RiskLevel::Medium);
}

#[test]
fn test_empty_batch() {
    let result = ComplianceEngine::new().audit(&[]);
    assert_eq!(result.score, 100);
    assert_eq!(result.flagged_count, 0);
    assert!(result.outcomes.is_empty());
}

#[test]
fn test_day_window_boundary() {
    assert_eq!(audit_one("We can refund within 15 days").status, AuditStatus::Flagged);
    assert_eq!(audit_one("We can refund within 14 days").status, AuditStatus::Clean);
}

#[test]
fn test_delivery_estimates_are_not_refund_windows() {
    let outcome = audit_one("Standard delivery takes 20 days.");
    assert_eq!(outcome.status, AuditStatus::Clean);
    assert_eq!(outcome.risk_level, RiskLevel::Low);
}

#[test]
fn test_unrelated_numbers_do_not_fire_rules() {
    assert_eq!(audit_one("We are 100% committed").status, AuditStatus::Clean);
    assert_eq!(audit_one("The battery is at 30% charge").status, AuditStatus::Clean);
    assert_eq!(audit_one("Feel free to call about order $45").status, AuditStatus::Clean);
}

#[test]
fn test_discount_tiers() {
    let mid = audit_one("12% discount");
    assert_eq!(mid.risk_level, RiskLevel::Medium);
    assert!(mid.violations[0].starts_with("Agent Cap Breach"));

    assert_eq!(audit_one("30% discount, VP approved").status, AuditStatus::Clean);
    assert_eq!(audit_one("30% discount").risk_level, RiskLevel::High);
}

#[test]
fn test_shipping_threshold() {
    assert_eq!(audit_one("free shipping on $40 order").status, AuditStatus::Flagged);
    assert_eq!(audit_one("free shipping on $60 order").status, AuditStatus::Clean);
}

#[test]
fn test_geography_is_always_high() {
    assert_eq!(audit_one("we can ship to Germany").risk_level, RiskLevel::High);
    assert_eq!(
        audit_one("we can ship to Germany with a 12% discount, we promise").risk_level,
        RiskLevel::High
    );
}

#[test]
fn test_json_batch_with_malformed_records() {
    let engine = ComplianceEngine::new();
    let batch = json!([
        {"id": "a", "response": "ship to Canada"},
        {"id": "b", "response": null},
        {"id": "c"},
        17,
        {"response": "refund after 30 days"},
    ]);

    let result = engine.audit_json(&batch).unwrap();
    assert_eq!(result.total_records, 5);
    assert_eq!(result.flagged_count, 2);
    assert_eq!(result.outcomes[1].status, AuditStatus::Clean);
    assert_eq!(result.outcomes[3].status, AuditStatus::Clean);
    assert!(result.outcomes[4].id.starts_with("rec-"));
    assert_eq!(result.score, 60);
}

#[test]
fn test_json_batch_must_be_an_array() {
    let err = ComplianceEngine::new()
        .audit_json(&json!({"response": "ship to Canada"}))
        .unwrap_err();
    assert!(matches!(err, AuditError::MalformedBatch(_)));
}

#[test]
fn test_order_ids_are_not_quantities_for_rules() {
    let outcome = audit_one("Order #48213 has been refunded to your card.");
    assert_eq!(outcome.status, AuditStatus::Clean);
}

#[test]
fn test_custom_policy() {
    let config = AuditConfig::from_toml(
        r#"
        refundWindowCeilingDays = 30
        shippingMinimumAmount = 35.0
        restrictedGeographies = ["atlantis"]
        "#,
    )
    .unwrap();
    let engine = ComplianceEngine::with_config(config).unwrap();

    let result = engine.audit(&[
        RecordInput::new(None, "refund after 30 days"),
        RecordInput::new(None, "free shipping on $40 order"),
        RecordInput::new(None, "ship to Canada"),
        RecordInput::new(None, "ship to Atlantis"),
    ]);

    let flagged: Vec<bool> = result.outcomes.iter().map(|o| o.is_flagged()).collect();
    assert_eq!(flagged, vec![false, false, false, true]);
}

#[test]
fn test_truth_source_enrichment_adds_findings() {
    let engine = ComplianceEngine::new()
        .with_enricher(TruthSourceEnricher::new("Refunds are issued within 14 days."));

    let result = engine.audit(&[
        RecordInput::new(Some("documented"), "Your refund is on its way"),
        RecordInput::new(Some("invented"), "You can cancel anytime for a refund"),
        RecordInput::new(Some("both"), "ship to Canada, we promise"),
    ]);

    assert_eq!(result.outcomes[0].status, AuditStatus::Clean);

    let invented = &result.outcomes[1];
    assert_eq!(invented.risk_level, RiskLevel::Medium);
    assert_eq!(invented.findings[0].rule, "truth-source");

    let both = &result.outcomes[2];
    let rules: Vec<&str> = both.findings.iter().map(|v| v.rule.as_str()).collect();
    assert_eq!(
        rules,
        vec!["truth-source", "geographic-restriction", "liability-language"]
    );
    assert_eq!(both.risk_level, RiskLevel::High);
}
