//! Raw form input -> typed values.
//!
//! Every helper returns `None` for empty or malformed input, so callers
//! decide explicitly what "missing" means instead of inheriting it from
//! float semantics.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

/// Decimal amount such as a loan principal or an interest rate.
/// Accepts plain (`"1500.50"`) and scientific (`"1.5e3"`) notation.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

/// Whole, non-negative count such as a number of installments.
pub fn parse_count(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    u32::from_str(raw).ok()
}

/// Calendar date in `YYYY-MM-DD` form, as sent by a date input.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Time of day, `HH:MM` or `HH:MM:SS`.
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::FromPrimitive;

    #[test]
    fn amount_accepts_plain_and_scientific() {
        assert_eq!(parse_amount(" 1500.50 "), Decimal::from_f64(1500.5));
        assert_eq!(parse_amount("1.5e3"), Some(Decimal::from(1500)));
    }

    #[test]
    fn amount_rejects_empty_and_garbage() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("12abc"), None);
    }

    #[test]
    fn count_is_whole_and_non_negative() {
        assert_eq!(parse_count("12"), Some(12));
        assert_eq!(parse_count(" 0 "), Some(0));
        assert_eq!(parse_count("12.5"), None);
        assert_eq!(parse_count("-3"), None);
        assert_eq!(parse_count(""), None);
    }

    #[test]
    fn date_and_time_formats() {
        assert_eq!(parse_date("2024-01-10"), NaiveDate::from_ymd_opt(2024, 1, 10));
        assert_eq!(parse_date("10/01/2024"), None);
        assert_eq!(parse_time("09:30"), NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(parse_time("09:30:15"), NaiveTime::from_hms_opt(9, 30, 15));
        assert_eq!(parse_time("25:00"), None);
    }
}
