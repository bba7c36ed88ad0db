//! Amount parsing and formatting
//!
//! Budget figures are plain f64 values: the 50/30/20 split and the yearly
//! projection are defined over floating-point arithmetic with no internal
//! rounding. This module owns the string boundary around those values:
//! parsing user-entered amounts and formatting them for display.

use std::fmt;

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    Empty,
    InvalidFormat(String),
    NotFinite(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::Empty => write!(f, "Amount cannot be empty"),
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount format: {}", s),
            AmountParseError::NotFinite(s) => write!(f, "Amount must be finite: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}

/// Parse an amount from a string
///
/// Accepts formats: "1050", "1050.50", "-1050", "₹1050", "$1,050.50".
/// Thousands separators are stripped before parsing. The sign is kept;
/// callers decide whether negative values are acceptable.
pub fn parse_amount(s: &str) -> Result<f64, AmountParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(AmountParseError::Empty);
    }

    // Handle negative sign at start
    let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
        (true, stripped)
    } else {
        (false, s)
    };

    // Remove currency symbol if present
    let s = s.strip_prefix('₹').or_else(|| s.strip_prefix('$')).unwrap_or(s);

    let cleaned: String = s.chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Err(AmountParseError::Empty);
    }

    let value: f64 = cleaned
        .parse()
        .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?;

    if !value.is_finite() {
        return Err(AmountParseError::NotFinite(s.to_string()));
    }

    Ok(if negative { -value } else { value })
}

/// Format an amount with thousands separators and two decimal places
///
/// `950000.0` becomes `"950,000.00"`. Formatting is display-only; nothing
/// downstream ever parses these strings back.
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let value = value.abs();

    // Round at the cent and carry into the whole part
    let total_cents = (value * 100.0).round() as u64;
    let whole = total_cents / 100;
    let cents = total_cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-{}.{:02}", grouped, cents)
    } else {
        format!("{}.{:02}", grouped, cents)
    }
}

/// Format an amount with a currency symbol prefix
pub fn format_with_symbol(value: f64, symbol: &str) -> String {
    if value < 0.0 {
        format!("-{}{}", symbol, format_amount(-value))
    } else {
        format!("{}{}", symbol, format_amount(value))
    }
}
