//! Policy rule families
//!
//! Each family is a pure check from a [`SignalBag`] to an optional
//! [`Violation`]. A [`RuleSet`] holds the enabled families in evaluation
//! order; order decides message order only, never the resolved risk.

pub mod discount;
pub mod geographic;
pub mod liability;
pub mod override_authority;
pub mod refund_window;
pub mod shipping;

use std::fmt;

use serde::{Deserialize, Serialize};
use shared_types::{RiskLevel, Violation};

use crate::config::AuditConfig;
use crate::extractors::SignalBag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    RefundWindow,
    AuthorityOverride,
    ShippingThreshold,
    DiscountAuthority,
    GeographicRestriction,
    LiabilityLanguage,
}

impl RuleId {
    /// All families in evaluation order
    pub const ALL: [RuleId; 6] = [
        RuleId::RefundWindow,
        RuleId::AuthorityOverride,
        RuleId::ShippingThreshold,
        RuleId::DiscountAuthority,
        RuleId::GeographicRestriction,
        RuleId::LiabilityLanguage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::RefundWindow => "refund-window",
            RuleId::AuthorityOverride => "authority-override",
            RuleId::ShippingThreshold => "shipping-threshold",
            RuleId::DiscountAuthority => "discount-authority",
            RuleId::GeographicRestriction => "geographic-restriction",
            RuleId::LiabilityLanguage => "liability-language",
        }
    }

    /// Highest risk the family can contribute
    pub fn max_risk(&self) -> RiskLevel {
        match self {
            RuleId::ShippingThreshold | RuleId::LiabilityLanguage => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }

    fn check(&self) -> RuleCheck {
        match self {
            RuleId::RefundWindow => refund_window::check_refund_window,
            RuleId::AuthorityOverride => override_authority::check_override_language,
            RuleId::ShippingThreshold => shipping::check_shipping_threshold,
            RuleId::DiscountAuthority => discount::check_discount_authority,
            RuleId::GeographicRestriction => geographic::check_restricted_geography,
            RuleId::LiabilityLanguage => liability::check_liability_language,
        }
    }
}

pub type RuleCheck = fn(&SignalBag, &AuditConfig) -> Option<Violation>;

/// A named check bound to the policy limits it runs against
#[derive(Clone, Copy)]
pub struct Rule {
    pub id: RuleId,
    check: RuleCheck,
}

impl Rule {
    pub fn new(id: RuleId) -> Self {
        Self {
            id,
            check: id.check(),
        }
    }

    pub fn apply(&self, signals: &SignalBag, config: &AuditConfig) -> Option<Violation> {
        (self.check)(signals, config)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("id", &self.id).finish()
    }
}

/// Ordered, immutable collection of enabled rules
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
    config: AuditConfig,
}

impl RuleSet {
    /// Every family not listed in `config.disabled_rules`, in evaluation order
    pub fn from_config(config: &AuditConfig) -> Self {
        let rules = RuleId::ALL
            .into_iter()
            .filter(|id| config.is_enabled(*id))
            .map(Rule::new)
            .collect();

        Self {
            rules,
            config: config.clone(),
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::from_config(&AuditConfig::default())
    }
}

/// Build a violation for `rule` with the given contribution
pub(crate) fn violation(
    rule: RuleId,
    risk: RiskLevel,
    message: String,
    evidence: Option<String>,
) -> Violation {
    Violation {
        rule: rule.as_str().to_string(),
        risk,
        message,
        evidence,
    }
}

#[cfg(test)]
pub(crate) fn signals_for(text: &str) -> SignalBag {
    crate::extractors::SignalExtractor::default().extract(text)
}
