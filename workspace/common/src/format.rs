//! Amount formatting for display.
//!
//! Dashboard amounts are whole-currency figures rendered with `,` thousands
//! separators. Fractions, when present, are kept up to three places.

use rust_decimal::Decimal;

const MAX_FRACTION_DIGITS: u32 = 3;

/// Groups the absolute value of `amount` in threes: `1234567.5` → `1,234,567.5`.
pub fn group_thousands(amount: Decimal) -> String {
    let text = amount.abs().round_dp(MAX_FRACTION_DIGITS).normalize().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(text.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

/// Absolute value with a dollar sign.
pub fn format_amount(amount: Decimal) -> String {
    format!("${}", group_thousands(amount))
}

/// `+$15,000` for positive amounts; negative and zero amounts get no sign.
pub fn format_signed_amount(amount: Decimal) -> String {
    let prefix = if amount > Decimal::ZERO { "+" } else { "" };
    format!("{}{}", prefix, format_amount(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(Decimal::new(0, 0)), "0");
        assert_eq!(group_thousands(Decimal::new(299, 0)), "299");
        assert_eq!(group_thousands(Decimal::new(1200, 0)), "1,200");
        assert_eq!(group_thousands(Decimal::new(156780, 0)), "156,780");
        assert_eq!(group_thousands(Decimal::new(1234567, 0)), "1,234,567");
    }

    #[test]
    fn test_group_thousands_keeps_fraction() {
        assert_eq!(group_thousands(Decimal::new(12345, 1)), "1,234.5");
        assert_eq!(group_thousands(Decimal::new(150000, 2)), "1,500");
        assert_eq!(group_thousands(Decimal::new(1234567, 4)), "123.457");
    }

    #[test]
    fn test_group_thousands_drops_sign() {
        assert_eq!(group_thousands(Decimal::new(-3500, 0)), "3,500");
    }

    #[test]
    fn test_format_signed_amount() {
        assert_eq!(format_signed_amount(Decimal::new(15000, 0)), "+$15,000");
        assert_eq!(format_signed_amount(Decimal::new(-299, 0)), "$299");
        assert_eq!(format_signed_amount(Decimal::ZERO), "$0");
    }
}
