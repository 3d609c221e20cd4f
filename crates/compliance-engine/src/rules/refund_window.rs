// Refund window ceiling
use shared_types::{RiskLevel, Violation};

use super::{violation, RuleId};
use crate::config::AuditConfig;
use crate::extractors::{SignalBag, SignalTag};

/// Flags refund or return windows longer than the configured ceiling.
///
/// Only numbers attached to a day unit count, and only when the text talks
/// about refunds or returns. Delivery estimates are not refund windows.
pub fn check_refund_window(signals: &SignalBag, config: &AuditConfig) -> Option<Violation> {
    if !signals.has(SignalTag::RefundWindow) {
        return None;
    }

    let days = signals.max_day_window()?;
    let ceiling = config.refund_window_ceiling_days;

    if days <= ceiling {
        return None;
    }

    Some(violation(
        RuleId::RefundWindow,
        RiskLevel::High,
        format!(
            "Refund window of {} days exceeds the {}-day policy limit",
            days, ceiling
        ),
        Some(format!("{} days", days)),
    ))
}
