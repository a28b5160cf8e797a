//! Money and number formatting (en-US conventions)

use serde::{Deserialize, Serialize};

use crate::models::Interval;

/// Display prefixes for common currencies
const CURRENCY_SYMBOLS: &[(&str, &str)] = &[
    ("USD", "$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("JPY", "¥"),
    ("CAD", "CA$"),
    ("AUD", "A$"),
    ("NZD", "NZ$"),
    ("MXN", "MX$"),
    ("INR", "₹"),
    ("BRL", "R$"),
    ("KRW", "₩"),
    ("ILS", "₪"),
];

/// Currencies without minor units
const ZERO_DECIMAL_CURRENCIES: &[&str] = &["JPY", "KRW"];

pub fn currency_symbol(currency: &str) -> Option<&'static str> {
    CURRENCY_SYMBOLS
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(currency))
        .map(|(_, symbol)| *symbol)
}

/// Insert thousands separators into a string of ASCII digits
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a number with grouping and at most three fraction digits
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return n.to_string();
    }
    let sign = if n < 0.0 { "-" } else { "" };
    let fixed = format!("{:.3}", n.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');
    if frac.is_empty() {
        format!("{}{}", sign, group_thousands(int_part))
    } else {
        format!("{}{}.{}", sign, group_thousands(int_part), frac)
    }
}

/// Format an amount in cents.
///
/// Whole amounts drop the fraction digits: 1000 USD is `$10`, 1050 USD is `$10.50`.
pub fn format_currency(cents: i64, currency: &str) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();

    let number = if ZERO_DECIMAL_CURRENCIES.iter().any(|c| c.eq_ignore_ascii_case(currency)) {
        group_thousands(&abs.to_string())
    } else {
        let (units, minor) = (abs / 100, abs % 100);
        if minor == 0 {
            group_thousands(&units.to_string())
        } else {
            format!("{}.{:02}", group_thousands(&units.to_string()), minor)
        }
    };

    match currency_symbol(currency) {
        Some(symbol) => format!("{}{}{}", sign, symbol, number),
        None => format!("{}{} {}", sign, currency.to_uppercase(), number),
    }
}

/// An amount with its currency and optional recurrence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyAmount {
    pub amount: i64,
    pub currency: String,
    pub interval: Option<Interval>,
}

impl MoneyAmount {
    pub fn new(amount: i64, currency: impl Into<String>, interval: Option<Interval>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            interval,
        }
    }

    /// The emphasized part, e.g. `$10`
    pub fn formatted_amount(&self) -> String {
        format_currency(self.amount, &self.currency)
    }
}
