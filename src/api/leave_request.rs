use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use utoipa::ToSchema;

use crate::calc::duration::{DayType, LeaveDates, LeaveTimes, compute_duration};
use crate::calc::parse::{parse_date, parse_time};
use crate::model::leave_request::LeaveRequest;

#[derive(Deserialize, ToSchema)]
pub struct LeaveDurationReq {
    #[schema(example = "multi")]
    pub day_type: DayType,
    /// leave date for full-day and half-day leave
    #[schema(example = "2026-01-01", format = "date", value_type = Option<String>)]
    pub date: Option<String>,
    #[schema(example = "2026-01-01", format = "date", value_type = Option<String>)]
    pub from_date: Option<String>,
    #[schema(example = "2026-01-05", format = "date", value_type = Option<String>)]
    pub to_date: Option<String>,
    #[schema(example = "09:00", value_type = Option<String>)]
    pub from_time: Option<String>,
    #[schema(example = "13:00", value_type = Option<String>)]
    pub to_time: Option<String>,
}

impl LeaveDurationReq {
    fn dates(&self) -> LeaveDates {
        LeaveDates {
            date: self.date.as_deref().and_then(parse_date),
            from_date: self.from_date.as_deref().and_then(parse_date),
            to_date: self.to_date.as_deref().and_then(parse_date),
        }
    }

    fn times(&self) -> LeaveTimes {
        LeaveTimes {
            from_time: self.from_time.as_deref().and_then(parse_time),
            to_time: self.to_time.as_deref().and_then(parse_time),
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct LeaveCheckReq {
    #[serde(flatten)]
    pub duration: LeaveDurationReq,
    #[schema(example = "CL")]
    /// leave type code picked in the form
    pub leave_type: Option<String>,
    #[schema(example = "Family function")]
    pub reason: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "num_days": 5.0
}))]
pub struct DurationResponse {
    #[schema(example = 5.0)]
    pub num_days: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "End date must be after start date")]
    pub error: Option<String>,
    /// form field the error belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "to_date")]
    pub field: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LeaveCheckResponse {
    #[schema(example = 1.0)]
    pub num_days: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Reason is required")]
    pub error: Option<String>,
    /// set when the blocking problem is a date/time conflict
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "to_date")]
    pub field: Option<String>,
    pub submittable: bool,
}

/* =========================
Leave duration
========================= */
/// Number of leave days for the current form values
#[utoipa::path(
    post,
    path = "/api/leave/duration",
    request_body(
        content = LeaveDurationReq,
        description = "Day type with raw date/time inputs",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Duration computed", body = DurationResponse),
        (status = 400, description = "Malformed body or unknown day type")
    ),
    tag = "Leave"
)]
pub async fn leave_duration(payload: web::Json<LeaveDurationReq>) -> impl Responder {
    let outcome = compute_duration(payload.day_type, &payload.dates(), &payload.times());

    match outcome.error {
        Some(err) => info!(day_type = payload.day_type.as_ref(), error = %err, "Leave duration rejected"),
        None => debug!(
            day_type = payload.day_type.as_ref(),
            num_days = outcome.num_days,
            "Leave duration computed"
        ),
    }

    HttpResponse::Ok().json(DurationResponse {
        num_days: outcome.num_days,
        error: outcome.error.map(|e| e.to_string()),
        field: outcome.error.map(|e| e.field().to_string()),
    })
}

/* =========================
Leave submission check
========================= */
/// Whether the leave form may be submitted, with the blocking message
#[utoipa::path(
    post,
    path = "/api/leave/check",
    request_body(
        content = LeaveCheckReq,
        description = "Whole leave form",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Form checked", body = LeaveCheckResponse),
        (status = 400, description = "Malformed body or unknown day type")
    ),
    tag = "Leave"
)]
pub async fn check_leave(payload: web::Json<LeaveCheckReq>) -> impl Responder {
    let payload = payload.into_inner();
    let dates = payload.duration.dates();
    let times = payload.duration.times();

    let request = LeaveRequest::new(payload.duration.day_type)
        .with_leave_type(payload.leave_type)
        .with_reason(payload.reason.unwrap_or_default())
        .with_date(dates.date)
        .with_from_date(dates.from_date)
        .with_to_date(dates.to_date)
        .with_from_time(times.from_time)
        .with_to_time(times.to_time);

    let error = request.submission_error();
    if let Some(msg) = &error {
        info!(day_type = request.day_type().as_ref(), error = %msg, "Leave form not submittable");
    }

    HttpResponse::Ok().json(LeaveCheckResponse {
        num_days: request.num_days(),
        field: request.error().map(|e| e.field().to_string()),
        submittable: error.is_none(),
        error,
    })
}
