// Discount authority tiers
use shared_types::{RiskLevel, Violation};

use super::{violation, RuleId};
use crate::config::AuditConfig;
use crate::extractors::{SignalBag, SignalTag};

/// Tiered discount check on the largest percentage in the text.
///
/// Percentages only count when the text is about a price reduction
/// ("discount", "off", "coupon", ...).
///
/// - At or above the authority ceiling: HIGH, unless an authorization marker
///   is present. The marker suppresses this tier only.
/// - Above the agent cap but below the ceiling: MEDIUM, always.
/// - At or below the agent cap: compliant.
pub fn check_discount_authority(signals: &SignalBag, config: &AuditConfig) -> Option<Violation> {
    if !signals.has(SignalTag::DiscountContext) {
        return None;
    }

    let percent = signals.max_percentage()?;
    let cap = config.discount_agent_cap_percent;
    let ceiling = config.discount_authority_ceiling_percent;

    if percent >= ceiling {
        if signals.has(SignalTag::AuthorizationMarker) {
            return None;
        }
        return Some(violation(
            RuleId::DiscountAuthority,
            RiskLevel::High,
            format!(
                "Unauthorized discount: {}% meets the {}% authority ceiling without VP approval",
                percent, ceiling
            ),
            Some(format!("{}%", percent)),
        ));
    }

    if percent > cap {
        return Some(violation(
            RuleId::DiscountAuthority,
            RiskLevel::Medium,
            format!(
                "Agent Cap Breach: {}% discount exceeds the {}% agent limit",
                percent, cap
            ),
            Some(format!("{}%", percent)),
        ));
    }

    None
}
