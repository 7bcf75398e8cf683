//! Flat-interest loan quote.
//!
//! Interest is charged once on the original principal and is independent of
//! the number of installments. This is the figure the loan form has always
//! shown; it is not a reducing-balance EMI.

use rust_decimal::{Decimal, RoundingStrategy};

use super::parse::{parse_amount, parse_count};

/// Total payable and per-installment amount, both rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanQuote {
    pub final_amount: Decimal,
    pub emi: Decimal,
}

impl LoanQuote {
    /// Quote shown while the form is incomplete or invalid: 0.00 / 0.00.
    pub fn zero() -> Self {
        Self {
            final_amount: to_money(Decimal::ZERO),
            emi: to_money(Decimal::ZERO),
        }
    }

    /// A positive installment; a tiny principal can still round to 0.00.
    pub fn is_payable(&self) -> bool {
        self.emi > Decimal::ZERO
    }
}

impl Default for LoanQuote {
    fn default() -> Self {
        Self::zero()
    }
}

/// Round half away from zero to 2 places and pin the scale, so the value
/// always renders with exactly two fraction digits.
pub fn to_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Quote for typed inputs.
///
/// A non-positive principal, a zero installment count or a negative rate
/// yields `LoanQuote::zero()`, as does an amount too large to represent.
pub fn calculate_emi(principal: Decimal, annual_rate_percent: Decimal, installments: u32) -> LoanQuote {
    if principal <= Decimal::ZERO || installments == 0 || annual_rate_percent.is_sign_negative() {
        return LoanQuote::zero();
    }

    let quote = principal
        .checked_mul(annual_rate_percent)
        .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
        .and_then(|interest| principal.checked_add(interest))
        .and_then(|final_amount| {
            final_amount
                .checked_div(Decimal::from(installments))
                .map(|emi| (final_amount, emi))
        });

    match quote {
        Some((final_amount, emi)) => LoanQuote {
            final_amount: to_money(final_amount),
            emi: to_money(emi),
        },
        None => LoanQuote::zero(),
    }
}

/// Quote straight from form strings.
///
/// Missing or non-numeric principal / installment count makes the quote
/// zero. A missing or non-numeric rate counts as 0 %.
pub fn quote_from_raw(principal: &str, annual_rate_percent: &str, installments: &str) -> LoanQuote {
    let (Some(principal), Some(installments)) = (parse_amount(principal), parse_count(installments))
    else {
        return LoanQuote::zero();
    };
    let rate = parse_amount(annual_rate_percent).unwrap_or(Decimal::ZERO);

    calculate_emi(principal, rate, installments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn reference_quote() {
        let quote = quote_from_raw("100000", "10", "12");
        assert_eq!(quote.final_amount.to_string(), "110000.00");
        assert_eq!(quote.emi.to_string(), "9166.67");
    }

    #[test]
    fn interest_ignores_term_length() {
        let short = quote_from_raw("50000", "12", "6");
        let long = quote_from_raw("50000", "12", "60");
        assert_eq!(short.final_amount, long.final_amount);
        assert_eq!(short.final_amount.to_string(), "56000.00");
        assert_eq!(long.emi.to_string(), "933.33");
    }

    #[test]
    fn zero_rate_splits_principal() {
        let quote = quote_from_raw("1200", "0", "12");
        assert_eq!(quote.final_amount.to_string(), "1200.00");
        assert_eq!(quote.emi.to_string(), "100.00");
    }

    #[test]
    fn missing_rate_counts_as_zero_percent() {
        assert_eq!(quote_from_raw("1200", "", "12"), quote_from_raw("1200", "0", "12"));
    }

    #[test]
    fn incomplete_inputs_give_zero_quote() {
        for (p, r, n) in [
            ("0", "10", "12"),
            ("100000", "10", "0"),
            ("", "10", "12"),
            ("100000", "10", ""),
            ("abc", "10", "12"),
            ("-500", "10", "12"),
            ("100000", "10", "twelve"),
            ("100000", "-5", "12"),
        ] {
            let quote = quote_from_raw(p, r, n);
            assert_eq!(quote, LoanQuote::zero(), "{p}/{r}/{n}");
            assert_eq!(quote.final_amount.to_string(), "0.00");
            assert_eq!(quote.emi.to_string(), "0.00");
        }
    }

    #[test]
    fn tiny_principal_is_not_payable() {
        let quote = quote_from_raw("0.01", "0", "12");
        assert_eq!(quote.final_amount.to_string(), "0.01");
        assert_eq!(quote.emi.to_string(), "0.00");
        assert!(!quote.is_payable());
        assert!(quote_from_raw("100000", "10", "12").is_payable());
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(to_money(Decimal::new(125, 3)).to_string(), "0.13");
        assert_eq!(to_money(Decimal::new(1005, 3)).to_string(), "1.01");
        assert_eq!(to_money(Decimal::new(1004, 3)).to_string(), "1.00");
        assert_eq!(to_money(Decimal::from(7)).to_string(), "7.00");
    }

    #[test]
    fn huge_amounts_degrade_to_zero() {
        let quote = calculate_emi(Decimal::MAX, Decimal::from(50), 1);
        assert_eq!(quote, LoanQuote::zero());
    }

    proptest! {
        #[test]
        fn installments_add_up_to_final_amount(
            cents in 1i64..1_000_000_000,
            rate_bp in 0i64..10_000,
            n in 1u32..=360,
        ) {
            let principal = Decimal::new(cents, 2);
            let rate = Decimal::new(rate_bp, 2);
            let quote = calculate_emi(principal, rate, n);

            let drift = (quote.emi * Decimal::from(n) - quote.final_amount).abs();
            // half a cent per rounded installment, plus the rounded total
            let tolerance = Decimal::new(5, 3) * Decimal::from(n + 1);
            prop_assert!(drift <= tolerance, "drift {} > {}", drift, tolerance);
        }

        #[test]
        fn same_inputs_same_quote(p in "[0-9]{0,8}", r in "[0-9]{0,2}", n in "[0-9]{0,3}") {
            prop_assert_eq!(quote_from_raw(&p, &r, &n), quote_from_raw(&p, &r, &n));
        }

        #[test]
        fn zero_principal_or_count_is_zero(r in 0i64..10_000, n in 0u32..1000) {
            prop_assert_eq!(calculate_emi(Decimal::ZERO, Decimal::new(r, 2), n), LoanQuote::zero());
            prop_assert_eq!(calculate_emi(Decimal::new(r + 1, 0), Decimal::new(r, 2), 0), LoanQuote::zero());
        }
    }
}
