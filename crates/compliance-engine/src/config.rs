//! Audit policy configuration
//!
//! Every option is independently settable and falls back to the documented
//! default when omitted. Configuration is passed to the engine explicitly;
//! nothing is read from the process environment.
//!
//! ```toml
//! refundWindowCeilingDays = 30
//! shippingMinimumAmount = 75.0
//! restrictedGeographies = ["canada", "mexico"]
//! disabledRules = ["liability-language"]
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::AuditError;
use crate::patterns::{AUTHORIZATION_KEYWORDS, GEOGRAPHY_KEYWORDS, LIABILITY_KEYWORDS};
use crate::rules::RuleId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditConfig {
    /// Longest refund window an agent may offer, in days (default: 14)
    #[serde(default = "default_refund_window_ceiling_days")]
    pub refund_window_ceiling_days: f64,
    /// Smallest order that qualifies for free shipping (default: 50.00)
    #[serde(default = "default_shipping_minimum_amount")]
    pub shipping_minimum_amount: f64,
    /// Largest discount an agent may give on their own, in percent (default: 10)
    #[serde(default = "default_discount_agent_cap_percent")]
    pub discount_agent_cap_percent: f64,
    /// Discounts at or above this need VP approval, in percent (default: 25)
    #[serde(default = "default_discount_authority_ceiling_percent")]
    pub discount_authority_ceiling_percent: f64,
    #[serde(default = "default_restricted_geographies")]
    pub restricted_geographies: Vec<String>,
    #[serde(default = "default_prohibited_liability_terms")]
    pub prohibited_liability_terms: Vec<String>,
    #[serde(default = "default_authorization_markers")]
    pub authorization_markers: Vec<String>,
    /// Rule families to skip
    #[serde(default)]
    pub disabled_rules: Vec<RuleId>,
    /// Evaluate records of a batch in parallel (default: true)
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_refund_window_ceiling_days() -> f64 {
    14.0
}

fn default_shipping_minimum_amount() -> f64 {
    50.0
}

fn default_discount_agent_cap_percent() -> f64 {
    10.0
}

fn default_discount_authority_ceiling_percent() -> f64 {
    25.0
}

fn default_restricted_geographies() -> Vec<String> {
    GEOGRAPHY_KEYWORDS.iter().map(|t| t.to_string()).collect()
}

fn default_prohibited_liability_terms() -> Vec<String> {
    LIABILITY_KEYWORDS.iter().map(|t| t.to_string()).collect()
}

fn default_authorization_markers() -> Vec<String> {
    AUTHORIZATION_KEYWORDS.iter().map(|t| t.to_string()).collect()
}

fn default_parallel() -> bool {
    true
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            refund_window_ceiling_days: default_refund_window_ceiling_days(),
            shipping_minimum_amount: default_shipping_minimum_amount(),
            discount_agent_cap_percent: default_discount_agent_cap_percent(),
            discount_authority_ceiling_percent: default_discount_authority_ceiling_percent(),
            restricted_geographies: default_restricted_geographies(),
            prohibited_liability_terms: default_prohibited_liability_terms(),
            authorization_markers: default_authorization_markers(),
            disabled_rules: Vec::new(),
            parallel: default_parallel(),
        }
    }
}

impl AuditConfig {
    /// Load and validate configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is malformed,
    /// or the values fail [`AuditConfig::validate`]
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(s: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(s).context("Failed to parse TOML configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn is_enabled(&self, rule: RuleId) -> bool {
        !self.disabled_rules.contains(&rule)
    }

    /// Check limits and vocabularies for values the rules cannot work with
    pub fn validate(&self) -> Result<(), AuditError> {
        let limits = [
            ("refundWindowCeilingDays", self.refund_window_ceiling_days),
            ("shippingMinimumAmount", self.shipping_minimum_amount),
            ("discountAgentCapPercent", self.discount_agent_cap_percent),
            (
                "discountAuthorityCeilingPercent",
                self.discount_authority_ceiling_percent,
            ),
        ];
        for (name, value) in limits {
            if !value.is_finite() || value < 0.0 {
                return Err(AuditError::InvalidConfig(format!(
                    "{} must be a non-negative number (found: {})",
                    name, value
                )));
            }
        }

        if self.discount_agent_cap_percent >= self.discount_authority_ceiling_percent {
            return Err(AuditError::InvalidConfig(format!(
                "discountAgentCapPercent ({}) must be below discountAuthorityCeilingPercent ({})",
                self.discount_agent_cap_percent, self.discount_authority_ceiling_percent
            )));
        }

        let vocabularies = [
            ("restrictedGeographies", &self.restricted_geographies),
            ("prohibitedLiabilityTerms", &self.prohibited_liability_terms),
            ("authorizationMarkers", &self.authorization_markers),
        ];
        for (name, terms) in vocabularies {
            if terms.iter().any(|t| t.trim().is_empty()) {
                return Err(AuditError::InvalidConfig(format!(
                    "{} contains a blank entry",
                    name
                )));
            }
        }

        Ok(())
    }
}
