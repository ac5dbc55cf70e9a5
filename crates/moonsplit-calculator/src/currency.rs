//! Currency and area formatting for presentation boundaries.
//!
//! Engine values are never rounded; every renderer rounds on its own through
//! these helpers.

use serde::{Deserialize, Serialize};

/// Rounds to two decimals, halves away from zero.
pub fn round_currency(value: f64) -> f64 {
    to_cents(value) as f64 / 100.0
}

/// Converts an amount to integer cents. Non-finite values become zero.
pub fn to_cents(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    (value * 100.0).round() as i64
}

/// Like [`to_cents`], but `None` when the amount does not fit in `i64` cents.
pub fn checked_cents(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return Some(0);
    }
    let cents = (value * 100.0).round();
    // `i64::MAX as f64` is 2^63, itself out of range.
    if cents.abs() < i64::MAX as f64 { Some(cents as i64) } else { None }
}

/// Plain `1234.50` rendering used by machine-readable exports.
pub fn plain_decimal(value: f64) -> String {
    plain_cents(to_cents(value))
}

pub fn plain_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

/// Locale conventions for rendering amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    pub symbol: String,
    /// Place the symbol after the number (`1.800,00 €`) rather than before it.
    pub symbol_after: bool,
    pub decimal_separator: char,
    pub thousands_separator: Option<char>,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "€".to_string(),
            symbol_after: true,
            decimal_separator: ',',
            thousands_separator: Some('.'),
        }
    }
}

impl CurrencyFormat {
    /// English-style euro format, `€1,800.00`.
    pub fn euro_en() -> Self {
        Self {
            symbol: "€".to_string(),
            symbol_after: false,
            decimal_separator: '.',
            thousands_separator: Some(','),
        }
    }

    pub fn format_amount(&self, value: f64) -> String {
        self.format_cents(to_cents(value))
    }

    pub fn format_cents(&self, cents: i64) -> String {
        let number = self.group_cents(cents);
        if self.symbol.is_empty() {
            number
        } else if self.symbol_after {
            format!("{number} {}", self.symbol)
        } else if let Some(unsigned) = number.strip_prefix('-') {
            format!("-{}{unsigned}", self.symbol)
        } else {
            format!("{}{number}", self.symbol)
        }
    }

    /// Two-decimal number with this format's separators and no symbol.
    pub fn format_number(&self, value: f64) -> String {
        self.group_cents(to_cents(value))
    }

    pub fn format_area(&self, value_m2: f64) -> String {
        format!("{} m²", self.format_number(value_m2))
    }

    fn group_cents(&self, cents: i64) -> String {
        let abs = cents.unsigned_abs();
        let digits = (abs / 100).to_string();

        let mut integer = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                if let Some(separator) = self.thousands_separator {
                    integer.push(separator);
                }
            }
            integer.push(digit);
        }

        let sign = if cents < 0 { "-" } else { "" };
        format!("{sign}{integer}{}{:02}", self.decimal_separator, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(to_cents(0.125), 13);
        assert_eq!(to_cents(-0.125), -13);
        assert_eq!(to_cents(578.181818), 57818);
        assert_eq!(to_cents(f64::NAN), 0);
        assert_eq!(checked_cents(578.181818), Some(57818));
        assert_eq!(checked_cents(f64::INFINITY), Some(0));
        assert_eq!(checked_cents(1e17), None);
        assert_eq!(checked_cents(-1e17), None);
        assert_eq!(round_currency(761.8181818), 761.82);
    }

    #[test]
    fn test_default_format_is_spanish_euro() {
        let format = CurrencyFormat::default();
        assert_eq!(format.format_amount(1800.0), "1.800,00 €");
        assert_eq!(format.format_amount(670.0), "670,00 €");
        assert_eq!(format.format_amount(1234567.891), "1.234.567,89 €");
        assert_eq!(format.format_amount(0.004), "0,00 €");
    }

    #[test]
    fn test_negative_zero_renders_as_zero() {
        let format = CurrencyFormat::default();
        assert_eq!(format.format_amount(-0.0), "0,00 €");
        assert_eq!(format.format_amount(-0.001), "0,00 €");
        assert_eq!(plain_decimal(-0.001), "0.00");
    }

    #[test]
    fn test_english_format() {
        let format = CurrencyFormat::euro_en();
        assert_eq!(format.format_amount(2010.0), "€2,010.00");
        assert_eq!(format.format_amount(-12.5), "-€12.50");
    }

    #[test]
    fn test_area_and_plain() {
        let format = CurrencyFormat::default();
        assert_eq!(format.format_area(12.0), "12,00 m²");
        assert_eq!(plain_decimal(761.818181), "761.82");
        assert_eq!(plain_cents(-1205), "-12.05");
    }
}
