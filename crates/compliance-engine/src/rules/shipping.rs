// Free shipping threshold
use shared_types::{RiskLevel, Violation};

use super::{violation, RuleId};
use crate::config::AuditConfig;
use crate::extractors::{SignalBag, SignalTag};

/// Flags free or waived shipping on an order below the minimum amount.
///
/// The waiver term must appear alongside a shipping word, so "feel free"
/// on its own is not an offer.
///
/// Without a price in the text there is not enough evidence to judge the
/// offer, so the rule stays quiet.
pub fn check_shipping_threshold(signals: &SignalBag, config: &AuditConfig) -> Option<Violation> {
    if !signals.has(SignalTag::ShippingWaiver) || !signals.has(SignalTag::ShippingContext) {
        return None;
    }

    let price = signals.min_price()?;
    let minimum = config.shipping_minimum_amount;
    if price >= minimum {
        return None;
    }

    Some(violation(
        RuleId::ShippingThreshold,
        RiskLevel::Medium,
        format!(
            "Free shipping offered on a ${:.2} order, below the ${:.2} minimum",
            price, minimum
        ),
        Some(format!("${:.2}", price)),
    ))
}
