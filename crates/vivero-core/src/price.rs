//! # Price Module
//!
//! Provides the `Price` type for the `precio` column.
//!
//! ## Why Text?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  STORAGE vs. ARITHMETIC                                                 │
//! │                                                                         │
//! │  The `precio` column is TEXT. Existing files hold whatever the user     │
//! │  typed: "150", "150.50", "$ 99,90".                                     │
//! │                                                                         │
//! │  Storage:    Price keeps the exact text (round-trips byte for byte)     │
//! │  Arithmetic: Price::to_cents() parses on demand into integer cents      │
//! │              and returns None for text that is not a plain amount       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vivero_core::price::Price;
//!
//! let price = Price::new("150.5");
//! assert_eq!(price.as_str(), "150.5");
//! assert_eq!(price.to_cents(), Some(15050));
//!
//! assert_eq!(Price::new("a consultar").to_cents(), None);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Price Type
// =============================================================================

/// A product price exactly as the user entered it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type), sqlx(transparent))]
pub struct Price(String);

impl Price {
    /// Wraps the given text without validating it.
    pub fn new(text: impl Into<String>) -> Self {
        Price(text.into())
    }

    /// The stored text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the text is empty (the field is required on the form).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses the text into integer cents.
    ///
    /// ## Accepted Shapes
    /// - Optional leading `$` and surrounding whitespace
    /// - Optional leading `-`
    /// - Whole digits, then optionally `.` or `,` and one or two digits
    ///
    /// Anything else (thousands separators, words, three decimals) yields
    /// `None`.
    pub fn to_cents(&self) -> Option<i64> {
        let text = self.0.trim();
        let text = text.strip_prefix('$').unwrap_or(text).trim_start();
        let (negative, text) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (whole, frac) = match text.find(['.', ',']) {
            Some(idx) => (&text[..idx], &text[idx + 1..]),
            None => (text, ""),
        };

        if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        if frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        let whole: i64 = whole.parse().ok()?;
        let frac: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().ok()? * 10,
            _ => frac.parse().ok()?,
        };

        let cents = whole.checked_mul(100)?.checked_add(frac)?;
        Some(if negative { -cents } else { cents })
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Price {
    fn from(text: &str) -> Self {
        Price::new(text)
    }
}

impl From<String> for Price {
    fn from(text: String) -> Self {
        Price(text)
    }
}

// =============================================================================
// Stock Valuation
// =============================================================================

/// Total value of `quantity` units at `price`, in cents.
///
/// Returns `None` when the price text does not parse.
pub fn line_value_cents(price: &Price, quantity: i64) -> Option<i64> {
    price.to_cents()?.checked_mul(quantity)
}

/// Formats cents as a currency string with two decimals.
///
/// ## Example
/// ```rust
/// use vivero_core::price::format_cents;
///
/// assert_eq!(format_cents(123456, "$"), "$1234.56");
/// assert_eq!(format_cents(-50, "$"), "-$0.50");
/// ```
pub fn format_cents(cents: i64, symbol: &str) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}{}{}.{:02}", sign, symbol, abs / 100, abs % 100)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_round_trips_unchanged() {
        let price = Price::new(" $ 99,90 ");
        assert_eq!(price.as_str(), " $ 99,90 ");
        assert_eq!(price.to_string(), " $ 99,90 ");
    }

    #[test]
    fn test_to_cents_plain_amounts() {
        assert_eq!(Price::new("150").to_cents(), Some(15000));
        assert_eq!(Price::new("150.5").to_cents(), Some(15050));
        assert_eq!(Price::new("150,05").to_cents(), Some(15005));
        assert_eq!(Price::new("$200").to_cents(), Some(20000));
        assert_eq!(Price::new(" $ 12.30 ").to_cents(), Some(1230));
        assert_eq!(Price::new("-3").to_cents(), Some(-300));
        assert_eq!(Price::new("0").to_cents(), Some(0));
    }

    #[test]
    fn test_to_cents_rejects_non_amounts() {
        assert_eq!(Price::new("").to_cents(), None);
        assert_eq!(Price::new("a consultar").to_cents(), None);
        assert_eq!(Price::new("1.234,50").to_cents(), None);
        assert_eq!(Price::new("10.125").to_cents(), None);
        assert_eq!(Price::new(".50").to_cents(), None);
        assert_eq!(Price::new("12a").to_cents(), None);
    }

    #[test]
    fn test_to_cents_overflow_is_none() {
        assert_eq!(Price::new("99999999999999999999").to_cents(), None);
    }

    #[test]
    fn test_line_value() {
        assert_eq!(line_value_cents(&Price::new("150"), 10), Some(150000));
        assert_eq!(line_value_cents(&Price::new("n/a"), 10), None);
        assert_eq!(line_value_cents(&Price::new("2.5"), -2), Some(-500));
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(0, "$"), "$0.00");
        assert_eq!(format_cents(1, "$"), "$0.01");
        assert_eq!(format_cents(15000, "$"), "$150.00");
        assert_eq!(format_cents(-1234, "$"), "-$12.34");
    }
}
