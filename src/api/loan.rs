use std::collections::BTreeMap;

use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use utoipa::ToSchema;

use super::{RawValue, raw_text};
use crate::calc::loan::{LoanQuote, quote_from_raw};
use crate::calc::validator::{LoanField, validate_field};
use crate::model::loan_request::LoanRequest;

#[derive(Deserialize, ToSchema)]
pub struct EmiReq {
    #[schema(example = "100000", value_type = Option<String>)]
    pub principal: Option<RawValue>,
    /// yearly rate in percent, charged once on the principal
    #[schema(example = "10", value_type = Option<String>)]
    pub annual_interest_rate: Option<RawValue>,
    #[schema(example = "12", value_type = Option<String>)]
    pub installment_count: Option<RawValue>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "final_amount": "110000.00",
    "emi": "9166.67"
}))]
pub struct EmiResponse {
    #[schema(example = "110000.00")]
    pub final_amount: String,
    #[schema(example = "9166.67")]
    pub emi: String,
}

impl From<LoanQuote> for EmiResponse {
    fn from(quote: LoanQuote) -> Self {
        Self {
            final_amount: quote.final_amount.to_string(),
            emi: quote.emi.to_string(),
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct ValidateFieldReq {
    #[schema(example = "ls_ReqAmnt")]
    pub field: String,
    #[schema(example = "20000000", value_type = Option<String>)]
    pub value: Option<RawValue>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ValidateFieldResponse {
    #[schema(example = "ls_ReqAmnt")]
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Loan amount cannot exceed 10,000,000")]
    pub error: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct LoanCheckReq {
    #[serde(rename = "ls_LoanType")]
    #[schema(example = "PF", value_type = Option<String>)]
    pub loan_type: Option<RawValue>,
    #[serde(rename = "ls_ReqAmnt")]
    #[schema(example = "100000", value_type = Option<String>)]
    pub principal: Option<RawValue>,
    #[schema(example = "10", value_type = Option<String>)]
    pub annual_interest_rate: Option<RawValue>,
    #[serde(rename = "ls_InstallmentNo")]
    #[schema(example = "12", value_type = Option<String>)]
    pub installment_count: Option<RawValue>,
    #[serde(rename = "ls_Reason")]
    #[schema(example = "House repair after flood", value_type = Option<String>)]
    pub reason: Option<RawValue>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "final_amount": "110000.00",
    "emi": "9166.67",
    "errors": {},
    "submittable": true
}))]
pub struct LoanCheckResponse {
    pub final_amount: String,
    pub emi: String,
    /// message per failing field, keyed by form field name
    pub errors: BTreeMap<String, String>,
    pub submittable: bool,
}

/* =========================
Loan quote
========================= */
/// Flat-interest total payable and per-installment amount
#[utoipa::path(
    post,
    path = "/api/loan/emi",
    request_body(
        content = EmiReq,
        description = "Raw loan inputs",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Quote computed, 0.00 when inputs are incomplete", body = EmiResponse),
        (status = 400, description = "Malformed body")
    ),
    tag = "Loan"
)]
pub async fn loan_emi(payload: web::Json<EmiReq>) -> impl Responder {
    let quote = quote_from_raw(
        &raw_text(&payload.principal),
        &raw_text(&payload.annual_interest_rate),
        &raw_text(&payload.installment_count),
    );

    debug!(
        final_amount = %quote.final_amount,
        emi = %quote.emi,
        "Loan quote computed"
    );

    HttpResponse::Ok().json(EmiResponse::from(quote))
}

/* =========================
Single field validation
========================= */
/// Validation message for one loan form field
#[utoipa::path(
    post,
    path = "/api/loan/validate",
    request_body(
        content = ValidateFieldReq,
        description = "Field name and raw value",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Field checked; unknown fields always pass", body = ValidateFieldResponse),
        (status = 400, description = "Malformed body")
    ),
    tag = "Loan"
)]
pub async fn validate_loan_field(payload: web::Json<ValidateFieldReq>) -> impl Responder {
    let payload = payload.into_inner();
    let error = validate_field(&payload.field, &raw_text(&payload.value));

    if let Some(msg) = &error {
        info!(field = %payload.field, error = %msg, "Loan field rejected");
    }

    HttpResponse::Ok().json(ValidateFieldResponse {
        field: payload.field,
        error,
    })
}

/* =========================
Loan submission check
========================= */
/// Quote plus every field error for the whole loan form
#[utoipa::path(
    post,
    path = "/api/loan/check",
    request_body(
        content = LoanCheckReq,
        description = "Whole loan form",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Form checked", body = LoanCheckResponse),
        (status = 400, description = "Malformed body")
    ),
    tag = "Loan"
)]
pub async fn check_loan(payload: web::Json<LoanCheckReq>) -> impl Responder {
    let request = LoanRequest::new()
        .with_field(LoanField::LoanType, raw_text(&payload.loan_type))
        .with_interest_rate(raw_text(&payload.annual_interest_rate))
        .with_field(LoanField::RequestedAmount, raw_text(&payload.principal))
        .with_field(LoanField::InstallmentCount, raw_text(&payload.installment_count))
        .with_field(LoanField::Reason, raw_text(&payload.reason));

    let errors: BTreeMap<String, String> = request
        .errors()
        .into_iter()
        .map(|(field, err)| (field.as_ref().to_string(), err.to_string()))
        .collect();
    let submittable = request.can_submit();

    if !submittable {
        info!(failing = errors.len(), "Loan form not submittable");
    }

    let quote = EmiResponse::from(request.quote());
    HttpResponse::Ok().json(LoanCheckResponse {
        final_amount: quote.final_amount,
        emi: quote.emi,
        errors,
        submittable,
    })
}
