//! Keyword vocabularies and term matching for categorical signals

/// Definitive legal promises an agent may not make
pub const LIABILITY_KEYWORDS: &[&str] = &["guarantee", "promise", "ensure", "assure"];

/// Manual policy overrides an agent may not offer
pub const OVERRIDE_KEYWORDS: &[&str] = &["override", "waive", "exception"];

/// Regions the business does not serve
pub const GEOGRAPHY_KEYWORDS: &[&str] = &[
    "europe",
    "european union",
    "uk",
    "united kingdom",
    "canada",
    "international",
    "overseas",
    "germany",
    "france",
    "mexico",
    "australia",
];

/// Markers showing a discount was signed off above agent level
pub const AUTHORIZATION_KEYWORDS: &[&str] = &["vp approved", "vp-approved", "vp-level", "vp level"];

/// Offers to drop shipping charges
pub const SHIPPING_WAIVER_KEYWORDS: &[&str] = &["free", "waive"];

/// Words that make a shipping waiver about shipping
pub const SHIPPING_KEYWORDS: &[&str] = &["shipping", "delivery", "postage", "freight"];

/// Refund and return context
pub const REFUND_KEYWORDS: &[&str] = &["refund", "return", "money back"];

/// Price-reduction context; a bare percentage is not a discount
pub const DISCOUNT_KEYWORDS: &[&str] = &[
    "discount", "off", "coupon", "promo", "markdown", "savings", "price cut",
];

/// Terms no longer than this must stand alone as a word ("uk" must not match "bulk")
const SHORT_TERM_LEN: usize = 3;

/// Case-insensitive containment check for a single vocabulary term.
///
/// `text_lower` must already be lowercased.
pub fn contains_term(text_lower: &str, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return false;
    }

    if term.chars().count() > SHORT_TERM_LEN {
        return text_lower.contains(&term);
    }

    text_lower.match_indices(&term).any(|(start, matched)| {
        let before = text_lower[..start].chars().next_back();
        let after = text_lower[start + matched.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// Every vocabulary term present in the text, in vocabulary order
pub fn find_terms<S: AsRef<str>>(text_lower: &str, vocabulary: &[S]) -> Vec<String> {
    vocabulary
        .iter()
        .map(|term| term.as_ref())
        .filter(|term| contains_term(text_lower, term))
        .map(|term| term.trim().to_lowercase())
        .collect()
}
