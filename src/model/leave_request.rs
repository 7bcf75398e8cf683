use chrono::{NaiveDate, NaiveTime};

use crate::calc::duration::{
    DayType, DurationError, DurationOutcome, LeaveDates, LeaveTimes, compute_duration,
    has_required_fields,
};

/// Leave form state. Never mutated: every change returns a new record with
/// `num_days` recomputed from scratch.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaveRequest {
    day_type: DayType,
    dates: LeaveDates,
    times: LeaveTimes,
    leave_type: Option<String>,
    reason: String,
    num_days: f64,
    error: Option<DurationError>,
}

impl LeaveRequest {
    pub fn new(day_type: DayType) -> Self {
        Self {
            day_type,
            dates: LeaveDates::default(),
            times: LeaveTimes::default(),
            leave_type: None,
            reason: String::new(),
            num_days: day_type.default_days(),
            error: None,
        }
    }

    /// Switch mode. Dates and times belong to the old mode and are dropped;
    /// leave type and reason carry over.
    pub fn with_day_type(self, day_type: DayType) -> Self {
        Self {
            leave_type: self.leave_type,
            reason: self.reason,
            ..Self::new(day_type)
        }
    }

    pub fn with_date(self, date: Option<NaiveDate>) -> Self {
        let dates = LeaveDates { date, ..self.dates };
        self.with_dates(dates)
    }

    pub fn with_from_date(self, from_date: Option<NaiveDate>) -> Self {
        let dates = LeaveDates {
            from_date,
            ..self.dates
        };
        self.with_dates(dates)
    }

    pub fn with_to_date(self, to_date: Option<NaiveDate>) -> Self {
        let dates = LeaveDates { to_date, ..self.dates };
        self.with_dates(dates)
    }

    pub fn with_from_time(self, from_time: Option<NaiveTime>) -> Self {
        let times = LeaveTimes {
            from_time,
            ..self.times
        };
        self.with_times(times)
    }

    pub fn with_to_time(self, to_time: Option<NaiveTime>) -> Self {
        let times = LeaveTimes { to_time, ..self.times };
        self.with_times(times)
    }

    pub fn with_leave_type(self, leave_type: Option<String>) -> Self {
        let leave_type = leave_type.filter(|t| !t.trim().is_empty());
        Self { leave_type, ..self }
    }

    pub fn with_reason(self, reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            ..self
        }
    }

    fn with_dates(self, dates: LeaveDates) -> Self {
        Self { dates, ..self }.recompute()
    }

    fn with_times(self, times: LeaveTimes) -> Self {
        Self { times, ..self }.recompute()
    }

    // The mode default only lasts until the first date/time edit; from then
    // on the count is whatever the current fields give, 0 while incomplete.
    fn recompute(self) -> Self {
        let outcome = compute_duration(self.day_type, &self.dates, &self.times);
        Self {
            num_days: outcome.num_days,
            error: outcome.error,
            ..self
        }
    }

    pub fn day_type(&self) -> DayType {
        self.day_type
    }

    pub fn num_days(&self) -> f64 {
        self.num_days
    }

    pub fn error(&self) -> Option<DurationError> {
        self.error
    }

    pub fn outcome(&self) -> DurationOutcome {
        DurationOutcome {
            num_days: self.num_days,
            error: self.error,
        }
    }

    /// First problem that blocks submitting the form, if any.
    pub fn submission_error(&self) -> Option<String> {
        if self.leave_type.is_none() {
            return Some("Please select a leave type".to_string());
        }

        // the day count of a half day ignores the date, the submission does not
        if self.day_type == DayType::HalfDay && self.dates.date.is_none() {
            return Some("Date is required".to_string());
        }

        if !has_required_fields(self.day_type, &self.dates, &self.times) {
            let msg = match self.day_type {
                DayType::FullDay => "Date is required",
                DayType::HalfDay => "Start and end time are required",
                DayType::MultiDay => "From and to dates are required",
            };
            return Some(msg.to_string());
        }

        let outcome = self.outcome();
        if !outcome.is_submittable() {
            let msg = match outcome.error {
                Some(err) => err.to_string(),
                None => "Number of days must be greater than zero".to_string(),
            };
            return Some(msg);
        }

        if self.reason.trim().is_empty() {
            return Some("Reason is required".to_string());
        }

        None
    }
}
