// Numeric extraction utilities for signal detection
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Any digit run with an optional decimal fraction
    static ref QUANTITY_PATTERN: Regex = Regex::new(r"\d+(?:\.\d+)?").unwrap();

    /// A number directly followed by "day" or "days" ("15 days", "30-day")
    static ref DAY_WINDOW_PATTERN: Regex =
        Regex::new(r"(?i)(\d+(?:\.\d+)?)[\s-]*days?\b").unwrap();

    /// A number directly followed by a percent sign or the word "percent"
    static ref PERCENTAGE_PATTERN: Regex =
        Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(?:%|percent\b|per\s+cent\b)").unwrap();

    /// Dollar-prefixed amounts ("$40", "$1,250.00")
    static ref DOLLAR_PREFIX_PATTERN: Regex = Regex::new(r"\$\s*(\d[\d,]*(?:\.\d+)?)").unwrap();

    /// Amounts followed by a currency word ("40 dollars", "60 USD")
    static ref CURRENCY_SUFFIX_PATTERN: Regex =
        Regex::new(r"(?i)(\d[\d,]*(?:\.\d+)?)\s*(?:dollars?|usd)\b").unwrap();
}

/// Every numeric quantity in the text, in order of appearance
pub fn extract_quantities(text: &str) -> Vec<f64> {
    QUANTITY_PATTERN
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect()
}

/// Numbers immediately followed by a day unit
pub fn extract_day_windows(text: &str) -> Vec<f64> {
    captured_numbers(&DAY_WINDOW_PATTERN, text)
}

/// Numbers immediately followed by a percent marker
pub fn extract_percentages(text: &str) -> Vec<f64> {
    captured_numbers(&PERCENTAGE_PATTERN, text)
}

/// Monetary amounts with at most two decimal places.
///
/// Only amounts tied to a currency marker count; bare numbers such as order
/// IDs are never read as prices.
pub fn extract_prices(text: &str) -> Vec<f64> {
    let mut matches: Vec<(usize, f64)> = [&*DOLLAR_PREFIX_PATTERN, &*CURRENCY_SUFFIX_PATTERN]
        .into_iter()
        .flat_map(|pattern| pattern.captures_iter(text))
        .filter_map(|cap| {
            let amount = cap.get(1)?;
            parse_amount(amount.as_str()).map(|value| (amount.start(), value))
        })
        .collect();

    // "$40 dollars" is one amount, not two
    matches.sort_by_key(|(start, _)| *start);
    matches.dedup_by_key(|(start, _)| *start);
    matches.into_iter().map(|(_, value)| value).collect()
}

fn captured_numbers(pattern: &Regex, text: &str) -> Vec<f64> {
    pattern
        .captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect()
}

/// Parse "1,250.00" style amounts, rejecting more than two decimal places
fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim_end_matches(',').replace(',', "");
    if let Some((_, fraction)) = cleaned.split_once('.') {
        if fraction.len() > 2 {
            return None;
        }
    }
    cleaned.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_quantities() {
        assert_eq!(extract_quantities("Order 123 shipped in 2.5 days"), vec![123.0, 2.5]);
        assert!(extract_quantities("no digits here").is_empty());
    }

    #[test]
    fn test_extract_day_windows() {
        assert_eq!(extract_day_windows("Refund within 30 days"), vec![30.0]);
        assert_eq!(extract_day_windows("a 15-day return window"), vec![15.0]);
        assert_eq!(extract_day_windows("1 Day shipping"), vec![1.0]);
        assert_eq!(extract_day_windows("15days"), vec![15.0]);
    }

    #[test]
    fn test_bare_numbers_are_not_day_windows() {
        assert!(extract_day_windows("Order 4521 was refunded").is_empty());
        assert!(extract_day_windows("Call us on Monday at 30").is_empty());
        assert!(extract_day_windows("15 daylight hours").is_empty());
    }

    #[test]
    fn test_extract_percentages() {
        assert_eq!(extract_percentages("Take 12% off"), vec![12.0]);
        assert_eq!(extract_percentages("a 30 % discount"), vec![30.0]);
        assert_eq!(extract_percentages("save 15 percent today"), vec![15.0]);
        assert!(extract_percentages("15 days").is_empty());
    }

    #[test]
    fn test_extract_prices() {
        assert_eq!(extract_prices("free shipping on $40 order"), vec![40.0]);
        assert_eq!(extract_prices("orders over $1,250.00 ship free"), vec![1250.0]);
        assert_eq!(extract_prices("only 60 dollars"), vec![60.0]);
        assert_eq!(extract_prices("$40 dollars"), vec![40.0]);
    }

    #[test]
    fn test_prices_need_a_currency_marker() {
        assert!(extract_prices("order 40 shipped").is_empty());
        assert!(extract_prices("12% off").is_empty());
    }

    #[test]
    fn test_prices_reject_three_decimal_places() {
        assert!(extract_prices("$40.125 per unit").is_empty());
        assert_eq!(extract_prices("$40.12 per unit"), vec![40.12]);
    }
}
