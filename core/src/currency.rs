//! GBP currency formatting (`en-GB`, two fraction digits).
//!
//! Amounts are kept exact everywhere else; rounding happens here only.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round to pence, half away from zero.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Render an amount as `£1,234,567.89`.
pub fn format_gbp(amount: Decimal) -> String {
    let rounded = round_currency(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    // `{:.2}` pads to exactly two fraction digits
    let plain = format!("{:.2}", rounded.abs());
    let (whole, pence) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    format!("{sign}£{}.{pence}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
