use chrono::{NaiveDate, NaiveTime, Timelike};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumString};
use utoipa::ToSchema;

/// Length of the reference workday that defines 1.0 leave day.
pub const WORKDAY_MINUTES: i64 = 480;

/// A half-day request never counts for more than this, however long the
/// time range is.
pub const HALF_DAY_CAP: f64 = 0.5;

/// Leave mode. Selects which of the date/time fields are meaningful.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, AsRefStr, EnumString,
)]
pub enum DayType {
    #[serde(rename = "full")]
    #[strum(serialize = "full")]
    FullDay,
    #[serde(rename = "half")]
    #[strum(serialize = "half")]
    HalfDay,
    #[serde(rename = "multi")]
    #[strum(serialize = "multi")]
    MultiDay,
}

impl DayType {
    /// Day count shown right after switching into this mode, before any
    /// date or time has been picked.
    pub fn default_days(self) -> f64 {
        match self {
            DayType::FullDay => 1.0,
            DayType::HalfDay => HALF_DAY_CAP,
            DayType::MultiDay => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeaveDates {
    /// Used by full-day and half-day leave.
    pub date: Option<NaiveDate>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeaveTimes {
    pub from_time: Option<NaiveTime>,
    pub to_time: Option<NaiveTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DurationError {
    #[display(fmt = "End time must be after start time")]
    EndTimeNotAfterStart,
    #[display(fmt = "End date must be after start date")]
    EndDateBeforeStart,
}

impl DurationError {
    /// Form field the message belongs next to.
    pub fn field(self) -> &'static str {
        match self {
            DurationError::EndTimeNotAfterStart => "to_time",
            DurationError::EndDateBeforeStart => "to_date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationOutcome {
    pub num_days: f64,
    pub error: Option<DurationError>,
}

impl DurationOutcome {
    fn days(num_days: f64) -> Self {
        Self {
            num_days,
            error: None,
        }
    }

    fn rejected(error: DurationError) -> Self {
        Self {
            num_days: 0.0,
            error: Some(error),
        }
    }

    /// Submission stays blocked while this is false.
    pub fn is_submittable(&self) -> bool {
        self.num_days > 0.0 && self.error.is_none()
    }
}

/// True once every field the mode needs has a value.
pub fn has_required_fields(day_type: DayType, dates: &LeaveDates, times: &LeaveTimes) -> bool {
    match day_type {
        DayType::FullDay => dates.date.is_some(),
        DayType::HalfDay => times.from_time.is_some() && times.to_time.is_some(),
        DayType::MultiDay => dates.from_date.is_some() && dates.to_date.is_some(),
    }
}

/// Number of leave days for a request.
///
/// Incomplete input gives 0 days and no error. Chronological problems give
/// 0 days plus a `DurationError`; nothing here fails hard.
pub fn compute_duration(
    day_type: DayType,
    dates: &LeaveDates,
    times: &LeaveTimes,
) -> DurationOutcome {
    match day_type {
        DayType::FullDay => match dates.date {
            Some(_) => DurationOutcome::days(1.0),
            None => DurationOutcome::days(0.0),
        },
        DayType::HalfDay => match (times.from_time, times.to_time) {
            (Some(from), Some(to)) => half_day(from, to),
            _ => DurationOutcome::days(0.0),
        },
        DayType::MultiDay => match (dates.from_date, dates.to_date) {
            (Some(from), Some(to)) => multi_day(from, to),
            _ => DurationOutcome::days(0.0),
        },
    }
}

fn minutes_since_midnight(t: NaiveTime) -> i64 {
    i64::from(t.hour()) * 60 + i64::from(t.minute())
}

fn half_day(from: NaiveTime, to: NaiveTime) -> DurationOutcome {
    let minutes = minutes_since_midnight(to) - minutes_since_midnight(from);
    if minutes <= 0 {
        return DurationOutcome::rejected(DurationError::EndTimeNotAfterStart);
    }

    DurationOutcome::days((minutes as f64 / WORKDAY_MINUTES as f64).min(HALF_DAY_CAP))
}

fn multi_day(from: NaiveDate, to: NaiveDate) -> DurationOutcome {
    if to < from {
        return DurationOutcome::rejected(DurationError::EndDateBeforeStart);
    }

    // inclusive of both ends
    DurationOutcome::days(((to - from).num_days() + 1) as f64)
}
