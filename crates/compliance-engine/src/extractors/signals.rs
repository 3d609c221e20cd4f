//! Signal extraction
//!
//! Turns a free-text record into a [`SignalBag`]: numeric quantities grouped
//! by unit, plus the categorical keyword tags found in the text. Extraction
//! knows nothing about policy limits; it only reports what the text says.

use std::collections::BTreeMap;

use serde::Serialize;

use super::numeric::{extract_day_windows, extract_percentages, extract_prices, extract_quantities};
use crate::config::AuditConfig;
use crate::patterns::{
    find_terms, AUTHORIZATION_KEYWORDS, DISCOUNT_KEYWORDS, GEOGRAPHY_KEYWORDS,
    LIABILITY_KEYWORDS, OVERRIDE_KEYWORDS, REFUND_KEYWORDS, SHIPPING_KEYWORDS,
    SHIPPING_WAIVER_KEYWORDS,
};

/// Categorical signal tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignalTag {
    RefundWindow,
    ShippingWaiver,
    AuthorityOverride,
    GeographicRestriction,
    LiabilityTerm,
    AuthorizationMarker,
    ShippingContext,
    DiscountContext,
}

impl SignalTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalTag::RefundWindow => "refund-window",
            SignalTag::ShippingWaiver => "shipping-waiver",
            SignalTag::AuthorityOverride => "authority-override",
            SignalTag::GeographicRestriction => "geographic-restriction",
            SignalTag::LiabilityTerm => "liability-term",
            SignalTag::AuthorizationMarker => "authorization-marker",
            SignalTag::ShippingContext => "shipping-context",
            SignalTag::DiscountContext => "discount-context",
        }
    }
}

/// Signals derived from one record's text
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SignalBag {
    /// Every number in the text, unit or not
    pub quantities: Vec<f64>,
    pub day_windows: Vec<f64>,
    pub percentages: Vec<f64>,
    pub prices: Vec<f64>,
    /// Matched vocabulary terms per tag; a tag is present only if it matched
    pub terms: BTreeMap<SignalTag, Vec<String>>,
}

impl SignalBag {
    /// `None` when the text held no numbers at all
    pub fn max_quantity(&self) -> Option<f64> {
        max_of(&self.quantities)
    }

    pub fn max_day_window(&self) -> Option<f64> {
        max_of(&self.day_windows)
    }

    pub fn max_percentage(&self) -> Option<f64> {
        max_of(&self.percentages)
    }

    pub fn min_price(&self) -> Option<f64> {
        self.prices.iter().copied().reduce(f64::min)
    }

    pub fn has(&self, tag: SignalTag) -> bool {
        self.terms.contains_key(&tag)
    }

    pub fn terms(&self, tag: SignalTag) -> &[String] {
        self.terms.get(&tag).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty() && self.terms.is_empty()
    }
}

fn max_of(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

/// Term lists for each categorical tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    pub refund: Vec<String>,
    pub shipping_waiver: Vec<String>,
    pub overrides: Vec<String>,
    pub geographies: Vec<String>,
    pub liability: Vec<String>,
    pub authorization: Vec<String>,
    pub shipping: Vec<String>,
    pub discount: Vec<String>,
}

impl Vocabulary {
    /// Fixed vocabularies plus the configurable ones from `config`
    pub fn from_config(config: &AuditConfig) -> Self {
        Self {
            geographies: lowercase_all(&config.restricted_geographies),
            liability: lowercase_all(&config.prohibited_liability_terms),
            authorization: lowercase_all(&config.authorization_markers),
            ..Self::default()
        }
    }

    fn tagged(&self) -> [(SignalTag, &[String]); 8] {
        [
            (SignalTag::RefundWindow, self.refund.as_slice()),
            (SignalTag::ShippingWaiver, self.shipping_waiver.as_slice()),
            (SignalTag::AuthorityOverride, self.overrides.as_slice()),
            (SignalTag::GeographicRestriction, self.geographies.as_slice()),
            (SignalTag::LiabilityTerm, self.liability.as_slice()),
            (SignalTag::AuthorizationMarker, self.authorization.as_slice()),
            (SignalTag::ShippingContext, self.shipping.as_slice()),
            (SignalTag::DiscountContext, self.discount.as_slice()),
        ]
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            refund: owned_terms(REFUND_KEYWORDS),
            shipping_waiver: owned_terms(SHIPPING_WAIVER_KEYWORDS),
            overrides: owned_terms(OVERRIDE_KEYWORDS),
            geographies: owned_terms(GEOGRAPHY_KEYWORDS),
            liability: owned_terms(LIABILITY_KEYWORDS),
            authorization: owned_terms(AUTHORIZATION_KEYWORDS),
            shipping: owned_terms(SHIPPING_KEYWORDS),
            discount: owned_terms(DISCOUNT_KEYWORDS),
        }
    }
}

fn owned_terms(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}

fn lowercase_all(terms: &[String]) -> Vec<String> {
    terms.iter().map(|t| t.trim().to_lowercase()).collect()
}

/// Stateless extractor; the same text always yields the same bag
#[derive(Debug, Clone, Default)]
pub struct SignalExtractor {
    vocabulary: Vocabulary,
}

impl SignalExtractor {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn extract(&self, text: &str) -> SignalBag {
        let text_lower = text.to_lowercase();

        let terms = self
            .vocabulary
            .tagged()
            .into_iter()
            .filter_map(|(tag, vocabulary)| {
                let found = find_terms(&text_lower, vocabulary);
                (!found.is_empty()).then_some((tag, found))
            })
            .collect();

        SignalBag {
            quantities: extract_quantities(text),
            day_windows: extract_day_windows(text),
            percentages: extract_percentages(text),
            prices: extract_prices(text),
            terms,
        }
    }
}
