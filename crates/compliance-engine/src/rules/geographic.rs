// Restricted shipping and service regions
use shared_types::{RiskLevel, Violation};

use super::override_authority::quoted_list;
use super::{violation, RuleId};
use crate::config::AuditConfig;
use crate::extractors::{SignalBag, SignalTag};

/// Flags any mention of a restricted region. Always HIGH.
pub fn check_restricted_geography(signals: &SignalBag, _config: &AuditConfig) -> Option<Violation> {
    let regions = signals.terms(SignalTag::GeographicRestriction);
    if regions.is_empty() {
        return None;
    }

    Some(violation(
        RuleId::GeographicRestriction,
        RiskLevel::High,
        format!(
            "Restricted geography: {} is outside the approved service area",
            quoted_list(regions)
        ),
        regions.first().cloned(),
    ))
}
