use std::collections::BTreeMap;

use strum::IntoEnumIterator;

use crate::calc::{
    loan::{LoanQuote, quote_from_raw},
    validator::{FieldError, LoanField},
};

/// Loan form state, holding inputs exactly as typed. Every change returns a
/// new record with the quote recomputed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoanRequest {
    principal: String,
    annual_interest_rate: String,
    installment_count: String,
    loan_type: String,
    reason: String,
    quote: LoanQuote,
}

impl LoanRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(self, field: LoanField, value: impl Into<String>) -> Self {
        let value = value.into();
        let next = match field {
            LoanField::RequestedAmount => Self {
                principal: value,
                ..self
            },
            LoanField::InstallmentCount => Self {
                installment_count: value,
                ..self
            },
            LoanField::Reason => Self {
                reason: value,
                ..self
            },
            LoanField::LoanType => Self {
                loan_type: value,
                ..self
            },
        };
        next.requote()
    }

    /// The rate comes with the chosen loan type and has no rule of its own.
    pub fn with_interest_rate(self, value: impl Into<String>) -> Self {
        Self {
            annual_interest_rate: value.into(),
            ..self
        }
        .requote()
    }

    fn requote(self) -> Self {
        let quote = quote_from_raw(
            &self.principal,
            &self.annual_interest_rate,
            &self.installment_count,
        );
        Self { quote, ..self }
    }

    pub fn raw(&self, field: LoanField) -> &str {
        match field {
            LoanField::RequestedAmount => &self.principal,
            LoanField::InstallmentCount => &self.installment_count,
            LoanField::Reason => &self.reason,
            LoanField::LoanType => &self.loan_type,
        }
    }

    pub fn quote(&self) -> LoanQuote {
        self.quote
    }

    pub fn errors(&self) -> BTreeMap<LoanField, FieldError> {
        LoanField::iter()
            .filter_map(|field| field.validate(self.raw(field)).err().map(|e| (field, e)))
            .collect()
    }

    pub fn can_submit(&self) -> bool {
        self.errors().is_empty() && self.quote.is_payable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::validator::{Grouped, MAX_PRINCIPAL};

    fn filled() -> LoanRequest {
        LoanRequest::new()
            .with_field(LoanField::LoanType, "PF")
            .with_interest_rate("10")
            .with_field(LoanField::RequestedAmount, "100000")
            .with_field(LoanField::InstallmentCount, "12")
            .with_field(LoanField::Reason, "house repair after flood")
    }

    #[test]
    fn empty_form_quotes_zero_and_reports_every_field() {
        let req = LoanRequest::new();
        assert_eq!(req.quote(), LoanQuote::zero());
        assert_eq!(req.errors().len(), 4);
        assert!(!req.can_submit());
    }

    #[test]
    fn complete_form_is_submittable() {
        let req = filled();
        assert_eq!(req.quote().final_amount.to_string(), "110000.00");
        assert_eq!(req.quote().emi.to_string(), "9166.67");
        assert!(req.errors().is_empty());
        assert!(req.can_submit());
    }

    #[test]
    fn quote_follows_each_change() {
        let req = filled().with_field(LoanField::InstallmentCount, "24");
        assert_eq!(req.quote().emi.to_string(), "4583.33");

        let req = req.with_interest_rate("0");
        assert_eq!(req.quote().final_amount.to_string(), "100000.00");

        let req = req.with_field(LoanField::RequestedAmount, "");
        assert_eq!(req.quote(), LoanQuote::zero());
        assert!(!req.can_submit());
    }

    #[test]
    fn quote_matches_raw_calculation() {
        let req = filled().with_field(LoanField::RequestedAmount, "7777.77");
        assert_eq!(
            req.quote(),
            quote_from_raw(
                req.raw(LoanField::RequestedAmount),
                &req.annual_interest_rate,
                req.raw(LoanField::InstallmentCount),
            )
        );
    }

    #[test]
    fn out_of_range_blocks_submission() {
        let req = filled().with_field(LoanField::RequestedAmount, "20000000");
        assert!(req.quote().is_payable());
        assert_eq!(
            req.errors().get(&LoanField::RequestedAmount),
            Some(&FieldError::TooLarge("Loan amount", Grouped(MAX_PRINCIPAL)))
        );
        assert!(!req.can_submit());
    }

    #[test]
    fn installment_rounding_to_zero_blocks_submission() {
        let req = filled().with_field(LoanField::RequestedAmount, "0.01");
        assert!(req.errors().is_empty());
        assert_eq!(req.quote().final_amount.to_string(), "0.01");
        assert!(!req.quote().is_payable());
        assert!(!req.can_submit());
    }
}
