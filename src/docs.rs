use crate::api::leave_request::{
    DurationResponse, LeaveCheckReq, LeaveCheckResponse, LeaveDurationReq,
};
use crate::api::loan::{
    EmiReq, EmiResponse, LoanCheckReq, LoanCheckResponse, ValidateFieldReq, ValidateFieldResponse,
};
use crate::calc::duration::DayType;
use crate::calc::validator::LoanField;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRM Form Calculation API",
        version = "1.0.0",
        description = r#"
## HRM form calculations

Stateless calculations shared by the leave and loan application forms.

### Leave
- Day count for full-day, half-day and multi-day leave
- Chronology checks (end before start)
- Submission readiness of the whole leave form

### Loan
- Flat-interest total payable and per-installment (EMI) amount
- Field validation for amount, installments, reason and loan type
- Submission readiness of the whole loan form

Incomplete or non-numeric inputs never fail the request: quotes fall back to `0.00`
and problems come back as messages next to the field.
"#,
    ),
    paths(
        crate::api::leave_request::leave_duration,
        crate::api::leave_request::check_leave,

        crate::api::loan::loan_emi,
        crate::api::loan::validate_loan_field,
        crate::api::loan::check_loan
    ),
    components(
        schemas(
            DayType,
            LoanField,
            LeaveDurationReq,
            LeaveCheckReq,
            DurationResponse,
            LeaveCheckResponse,
            EmiReq,
            EmiResponse,
            ValidateFieldReq,
            ValidateFieldResponse,
            LoanCheckReq,
            LoanCheckResponse
        )
    ),
    tags(
        (name = "Leave", description = "Leave form calculations"),
        (name = "Loan", description = "Loan form calculations"),
    )
)]
pub struct ApiDoc;
