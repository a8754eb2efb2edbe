//! Parsing of free-text price strings and rendering of revenue totals.
//!
//! Prices are entered by hand (`"¥5,000,000"`, `"800000"`, `"50万円"`), so
//! parsing never fails: anything without a leading number counts as zero.

use std::sync::LazyLock;

use regex::Regex;

/// Currency symbol used when rendering revenue.
pub const CURRENCY_SYMBOL: char = '¥';

/// Characters stripped before numeric parsing (half- and full-width yen, separators).
const STRIPPED_CHARS: &[char] = &['¥', '￥', ','];

/// Revenue is displayed in millions.
pub const REVENUE_UNIT: f64 = 1_000_000.0;

static LEADING_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").expect("valid regex")
});

/// Parse a price string into a number.
///
/// Strips the currency symbol and thousands separators, then reads the
/// longest leading decimal number. Returns `0.0` when no number can be read
/// or the result is not finite.
///
/// # Examples
///
/// ```
/// use anken_core::pricing::parse_price;
/// assert_eq!(parse_price("¥5,000,000"), 5_000_000.0);
/// assert_eq!(parse_price("50万円"), 50.0);
/// assert_eq!(parse_price("応相談"), 0.0);
/// ```
pub fn parse_price(raw: &str) -> f64 {
    let cleaned: String = raw.chars().filter(|c| !STRIPPED_CHARS.contains(c)).collect();
    let cleaned = cleaned.trim();

    LEADING_NUMBER_RE
        .find(cleaned)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Sum the parsed value of every non-empty price.
pub fn sum_prices<'a>(prices: impl IntoIterator<Item = &'a str>) -> f64 {
    prices
        .into_iter()
        .filter(|p| !p.is_empty())
        .map(parse_price)
        .fold(0.0, |acc, p| acc + p)
}

/// Render a revenue total as millions with one decimal, e.g. `"¥7.5M"`.
///
/// Negative zero renders as `"¥0.0M"`.
pub fn format_revenue(total: f64) -> String {
    let millions = total / REVENUE_UNIT + 0.0;
    format!("{CURRENCY_SYMBOL}{millions:.1}M")
}
