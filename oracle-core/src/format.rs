//! Display formatting for prices, percentages, scaled amounts, and dates.
//!
//! Every function here is pure and total over its input type; the only fallible
//! entry point is [`format_date_str`], which has to parse its input first.
//!
//! Rounding is decimal half-away-from-zero throughout, so `0.125` at two places
//! renders as `0.13` regardless of how the value would round in binary floating point.

use chrono::{DateTime, NaiveDate};
use oracle_types::OracleError;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::currency::Currency;

const THOUSAND: u64 = 1_000;
const MILLION: u64 = 1_000_000;
const BILLION: u64 = 1_000_000_000;
const TRILLION: u64 = 1_000_000_000_000;

/// Fixed-point rendering with exactly `decimals` fraction digits.
#[must_use]
pub fn format_fixed(value: Decimal, decimals: u32) -> String {
    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.prec$}", prec = decimals as usize)
}

/// Percentage with `decimals` fraction digits, e.g. `format_percent(171.4, 1)` → `171.4%`.
///
/// The value is already a percentage; it is not multiplied by 100.
#[must_use]
pub fn format_percent(value: Decimal, decimals: u32) -> String {
    format!("{}%", format_fixed(value, decimals))
}

/// [`format_percent`] with the default two fraction digits.
#[must_use]
pub fn format_percent_default(value: Decimal) -> String {
    format_percent(value, 2)
}

/// en-US thousands grouping of a non-negative integer, e.g. `57,234,567`.
#[must_use]
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    group_digits(&digits)
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Scale `value` by `unit` and render with one fraction digit.
fn scaled(value: u64, unit: u64) -> String {
    format_fixed(Decimal::from(value) / Decimal::from(unit), 1)
}

/// Market capitalization with a `$` prefix, scaled to T/B/M.
///
/// Tier boundaries are inclusive: exactly `1e12` renders as `$1.0T`. Values
/// below one million render as a grouped integer, e.g. `$999,999`. Rounding
/// within a tier does not promote to the next one, so `999_999_999_999`
/// renders as `$1000.0B`.
#[must_use]
pub fn format_market_cap(market_cap: u64) -> String {
    if market_cap >= TRILLION {
        format!("${}T", scaled(market_cap, TRILLION))
    } else if market_cap >= BILLION {
        format!("${}B", scaled(market_cap, BILLION))
    } else if market_cap >= MILLION {
        format!("${}M", scaled(market_cap, MILLION))
    } else {
        format!("${}", format_grouped(market_cap))
    }
}

/// Trading volume scaled to B/M/K without a currency prefix.
///
/// Below one thousand the grouped integer is returned unchanged.
#[must_use]
pub fn format_volume(volume: u64) -> String {
    if volume >= BILLION {
        format!("{}B", scaled(volume, BILLION))
    } else if volume >= MILLION {
        format!("{}M", scaled(volume, MILLION))
    } else if volume >= THOUSAND {
        format!("{}K", scaled(volume, THOUSAND))
    } else {
        format_grouped(volume)
    }
}

/// Dollar price with two fixed decimals and no grouping, e.g. `$273.67`.
#[must_use]
pub fn format_price(price: Decimal) -> String {
    format!("${}", format_fixed(price, 2))
}

/// Locale-aware (en-US) currency amount.
///
/// Uses the currency's symbol when it has one (`$1,234.50`, `€3.00`), otherwise
/// the code followed by a no-break space (`XOF 1,000`). Fraction digits follow
/// the currency's ISO minor units. Negative amounts put the sign before the
/// symbol (`-$5.00`); zero renders as `$0.00`.
#[must_use]
pub fn format_currency(amount: Decimal, currency: Currency) -> String {
    let rounded = amount
        .abs()
        .round_dp_with_strategy(currency.minor_units(), RoundingStrategy::MidpointAwayFromZero);
    let body = format!("{rounded:.prec$}", prec = currency.minor_units() as usize);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body.as_str(), None),
    };
    let mut number = group_digits(int_part);
    if let Some(frac) = frac_part {
        number.push('.');
        number.push_str(frac);
    }
    let sign = if amount.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    match currency.symbol() {
        Some(symbol) => format!("{sign}{symbol}{number}"),
        None => format!("{sign}{}\u{a0}{number}", currency.code()),
    }
}

/// `Mon D, YYYY`, e.g. `May 6, 2023`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Parse `YYYY-MM-DD` or an RFC 3339 timestamp and format it like [`format_date`].
///
/// Timestamps keep the calendar date of their own offset; no local-time conversion happens.
///
/// # Errors
/// Returns `OracleError::InvalidDate` when the input is in neither format.
pub fn format_date_str(input: &str) -> Result<String, OracleError> {
    let trimmed = input.trim();
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.date_naive()))
        .map_err(|_| OracleError::InvalidDate(input.to_string()))?;
    Ok(format_date(date))
}
