//! Batch aggregation and integrity scoring

use shared_types::{AuditOutcome, BatchResult, RiskBreakdown};

/// Fold per-record outcomes into a batch result, keeping their order
pub fn aggregate(outcomes: Vec<AuditOutcome>) -> BatchResult {
    let total_records = outcomes.len();
    let flagged_count = outcomes.iter().filter(|o| o.is_flagged()).count();

    let mut risk_breakdown = RiskBreakdown::default();
    for outcome in &outcomes {
        risk_breakdown.record(outcome.risk_level);
    }

    BatchResult {
        score: integrity_score(flagged_count, total_records),
        total_records,
        flagged_count,
        risk_breakdown,
        outcomes,
    }
}

/// `max(0, 100 - round(100 * flagged / total))`, rounding halves up.
///
/// An empty batch scores 100.
pub fn integrity_score(flagged: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }

    let flagged = flagged.min(total) as u64;
    let total = total as u64;
    let flagged_percent = (200 * flagged + total) / (2 * total);
    100u64.saturating_sub(flagged_percent) as u8
}
