use std::fmt;
use std::str::FromStr;

use derive_more::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter, EnumString};
use utoipa::ToSchema;

use super::parse::{parse_amount, parse_count};

pub const MAX_PRINCIPAL: u64 = 10_000_000;
pub const MAX_INSTALLMENTS: u32 = 360;
pub const REASON_MIN_CHARS: usize = 10;
pub const REASON_MAX_CHARS: usize = 500;

/// Loan form inputs that carry validation rules.
///
/// The wire names are the field keys the loan form posts.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    AsRefStr,
    EnumString,
    EnumIter,
)]
pub enum LoanField {
    #[serde(rename = "ls_ReqAmnt")]
    #[strum(serialize = "ls_ReqAmnt")]
    RequestedAmount,
    #[serde(rename = "ls_InstallmentNo")]
    #[strum(serialize = "ls_InstallmentNo")]
    InstallmentCount,
    #[serde(rename = "ls_Reason")]
    #[strum(serialize = "ls_Reason")]
    Reason,
    #[serde(rename = "ls_LoanType")]
    #[strum(serialize = "ls_LoanType")]
    LoanType,
}

/// A limit as the form prints it, with comma thousands separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grouped(pub u64);

impl fmt::Display for Grouped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        f.write_str(&out)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FieldError {
    #[display(fmt = "{} is required", _0)]
    Required(&'static str),
    #[display(fmt = "{} must be a positive number", _0)]
    NotPositive(&'static str),
    #[display(fmt = "{} must be a positive whole number", _0)]
    NotPositiveWhole(&'static str),
    #[display(fmt = "{} cannot exceed {}", _0, _1)]
    TooLarge(&'static str, Grouped),
    #[display(fmt = "{} must be minimum {} characters", _0, _1)]
    TooShort(&'static str, usize),
    #[display(fmt = "{} must be maximum {} characters", _0, _1)]
    TooLong(&'static str, usize),
}

impl LoanField {
    pub fn label(self) -> &'static str {
        match self {
            LoanField::RequestedAmount => "Loan amount",
            LoanField::InstallmentCount => "Number of installments",
            LoanField::Reason => "Reason",
            LoanField::LoanType => "Loan type",
        }
    }

    /// Check one raw input. Every field is required.
    pub fn validate(self, raw: &str) -> Result<(), FieldError> {
        let label = self.label();
        let value = raw.trim();
        if value.is_empty() {
            return Err(FieldError::Required(label));
        }

        match self {
            LoanField::RequestedAmount => match parse_amount(value) {
                Some(amount) if amount > Decimal::ZERO => {
                    if amount > Decimal::from(MAX_PRINCIPAL) {
                        Err(FieldError::TooLarge(label, Grouped(MAX_PRINCIPAL)))
                    } else {
                        Ok(())
                    }
                }
                _ => Err(FieldError::NotPositive(label)),
            },
            LoanField::InstallmentCount => match parse_count(value) {
                Some(n) if n > 0 => {
                    if n > MAX_INSTALLMENTS {
                        Err(FieldError::TooLarge(label, Grouped(MAX_INSTALLMENTS.into())))
                    } else {
                        Ok(())
                    }
                }
                _ => Err(FieldError::NotPositiveWhole(label)),
            },
            LoanField::Reason => {
                let len = value.chars().count();
                if len < REASON_MIN_CHARS {
                    Err(FieldError::TooShort(label, REASON_MIN_CHARS))
                } else if len > REASON_MAX_CHARS {
                    Err(FieldError::TooLong(label, REASON_MAX_CHARS))
                } else {
                    Ok(())
                }
            }
            LoanField::LoanType => Ok(()),
        }
    }
}

/// Message for a field keyed by its form name, or `None` when the value is
/// fine. Field names this form does not validate always pass.
pub fn validate_field(field_name: &str, raw: &str) -> Option<String> {
    let field = LoanField::from_str(field_name).ok()?;
    field.validate(raw).err().map(|e| e.to_string())
}
