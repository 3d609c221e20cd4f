// Definitive legal promises
use shared_types::{RiskLevel, Violation};

use super::override_authority::quoted_list;
use super::{violation, RuleId};
use crate::config::AuditConfig;
use crate::extractors::{SignalBag, SignalTag};

/// Flags guarantee/promise language. MEDIUM on its own.
pub fn check_liability_language(signals: &SignalBag, _config: &AuditConfig) -> Option<Violation> {
    let terms = signals.terms(SignalTag::LiabilityTerm);
    if terms.is_empty() {
        return None;
    }

    Some(violation(
        RuleId::LiabilityLanguage,
        RiskLevel::Medium,
        format!(
            "Prohibited liability language: {} creates a binding commitment",
            quoted_list(terms)
        ),
        terms.first().cloned(),
    ))
}
