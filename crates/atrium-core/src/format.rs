//! Display formatting for currency and percentage values.
//!
//! These helpers reproduce the dashboard's compact display conventions:
//! budgets render in millions ("$24M"), ratios as percentages ("18.0%").

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

const MILLION: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Formats a currency amount in whole millions, e.g. `$24M`.
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    let millions = (amount / MILLION).to_f64().unwrap_or(0.0);
    format!("${}M", millions.round())
}

/// Formats a currency amount in millions with cents, e.g. `$24.50M`.
#[must_use]
pub fn format_currency_precise(amount: Decimal) -> String {
    let millions = (amount / MILLION).to_f64().unwrap_or(0.0);
    format!("${millions:.2}M")
}

/// Formats a full currency amount with thousands separators, e.g.
/// `$24,000,000`. Fractional cents are dropped.
#[must_use]
pub fn format_currency_full(amount: Decimal) -> String {
    let rounded = amount
        .round()
        .to_i128()
        .unwrap_or_default()
        .unsigned_abs();
    let digits = rounded.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount.is_sign_negative() && rounded > 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Formats a fractional value as a percentage, e.g. `0.18` -> `18.0%`.
#[must_use]
pub fn format_percentage(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec!(24_000_000)), "$24M");
        assert_eq!(format_currency(dec!(24_600_000)), "$25M");
        assert_eq!(format_currency(dec!(500_000)), "$1M");
        assert_eq!(format_currency(Decimal::ZERO), "$0M");
    }

    #[test]
    fn test_format_currency_precise() {
        assert_eq!(format_currency_precise(dec!(24_500_000)), "$24.50M");
        assert_eq!(format_currency_precise(dec!(1_000_000)), "$1.00M");
    }

    #[test]
    fn test_format_currency_full() {
        assert_eq!(format_currency_full(dec!(24_000_000)), "$24,000,000");
        assert_eq!(format_currency_full(dec!(950)), "$950");
        assert_eq!(format_currency_full(dec!(1_234_567.89)), "$1,234,568");
        assert_eq!(format_currency_full(Decimal::ZERO), "$0");
        assert_eq!(format_currency_full(dec!(-2_500_000)), "-$2,500,000");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.18, 1), "18.0%");
        assert_eq!(format_percentage(0.1234, 2), "12.34%");
        assert_eq!(format_percentage(-0.05, 1), "-5.0%");
    }
}
