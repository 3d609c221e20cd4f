// Manual policy override language
use shared_types::{RiskLevel, Violation};

use super::{violation, RuleId};
use crate::config::AuditConfig;
use crate::extractors::{SignalBag, SignalTag};

/// Flags any offer to override, waive, or make an exception to policy.
///
/// Agents have no override authority at any magnitude, so numbers play no part.
pub fn check_override_language(signals: &SignalBag, _config: &AuditConfig) -> Option<Violation> {
    let terms = signals.terms(SignalTag::AuthorityOverride);
    if terms.is_empty() {
        return None;
    }

    Some(violation(
        RuleId::AuthorityOverride,
        RiskLevel::High,
        format!(
            "Unauthorized policy override: agent offered to {}",
            quoted_list(terms)
        ),
        terms.first().cloned(),
    ))
}

pub(crate) fn quoted_list(terms: &[String]) -> String {
    terms
        .iter()
        .map(|t| format!("'{}'", t))
        .collect::<Vec<_>>()
        .join(", ")
}
