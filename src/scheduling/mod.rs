//! Appointment availability engine
//!
//! Pure functions over appointment intervals: business-hours containment,
//! overlap detection and selectable time range computation. Nothing here keeps
//! state between calls; callers pass the relevant bookings as a snapshot.

pub mod range;
pub mod working_hours;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use range::{
    compute_selectable_time_range, day_slots, day_slots_with_rules, SelectableRange, TimeSlot,
};
pub use working_hours::{fits_working_hours, working_window, WorkingWindow};

// ---------------------------------------------------------------------------
// Interval
// ---------------------------------------------------------------------------

/// Half-open time interval `[start, end)` on the local wall clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Interval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        debug_assert!(start < end, "Interval start must be before end");
        Self { start, end }
    }

    /// Interval occupied by a booking of `minutes` starting at `start`.
    /// `minutes` must be positive.
    pub fn from_duration(start: NaiveDateTime, minutes: u32) -> Self {
        Self::new(start, start + Duration::minutes(i64::from(minutes)))
    }

    /// Midnight to midnight on `date`
    pub fn day(date: NaiveDate) -> Self {
        let start = date.and_time(NaiveTime::default());
        Self::new(start, start + Duration::days(1))
    }

    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Global daily scheduling window, in whole hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BusinessHours {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl BusinessHours {
    pub fn new(start_hour: u32, end_hour: u32) -> Self {
        Self { start_hour, end_hour }
    }

    pub fn is_valid(&self) -> bool {
        self.start_hour < self.end_hour && self.end_hour <= 24
    }

    /// Opening instant on `date`
    pub fn opening(&self, date: NaiveDate) -> NaiveDateTime {
        at_hour(date, self.start_hour)
    }

    /// Closing instant on `date` (an `end_hour` of 24 is midnight of the next day)
    pub fn closing(&self, date: NaiveDate) -> NaiveDateTime {
        at_hour(date, self.end_hour)
    }

    /// Only the hour of the start instant is inspected
    pub fn admits_start(&self, start: NaiveDateTime) -> bool {
        let hour = start.hour();
        hour >= self.start_hour && hour < self.end_hour
    }
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self::new(9, 17)
    }
}

fn at_hour(date: NaiveDate, hour: u32) -> NaiveDateTime {
    date.and_time(NaiveTime::default()) + Duration::hours(i64::from(hour))
}

/// How the closing hour applies to a candidate booking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ClosingPolicy {
    /// Only the start hour must fall inside business hours; the booking may
    /// run past closing.
    #[default]
    StartOnly,
    /// The whole booking must end no later than closing.
    WholeAppointment,
}

/// Staff working-hours constraint for one candidate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StaffHours {
    #[default]
    Unchecked,
    Within(WorkingWindow),
    DayOff,
}

/// Everything besides the bookings that decides a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRules {
    pub business_hours: BusinessHours,
    pub closing: ClosingPolicy,
    pub staff_hours: StaffHours,
}

impl SlotRules {
    /// Global window, start hour only, no staff constraint
    pub fn lenient(business_hours: BusinessHours) -> Self {
        Self {
            business_hours,
            closing: ClosingPolicy::StartOnly,
            staff_hours: StaffHours::Unchecked,
        }
    }

    pub fn with_closing(mut self, closing: ClosingPolicy) -> Self {
        self.closing = closing;
        self
    }

    pub fn with_staff_hours(mut self, staff_hours: StaffHours) -> Self {
        self.staff_hours = staff_hours;
        self
    }
}

// ---------------------------------------------------------------------------
// Decisions
// ---------------------------------------------------------------------------

/// Outcome of evaluating one candidate slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotDecision {
    Available,
    InvalidDuration,
    OutsideBusinessHours,
    PastClosing,
    OutsideWorkingHours,
    Conflict(Interval),
}

impl SlotDecision {
    pub fn is_available(&self) -> bool {
        matches!(self, SlotDecision::Available)
    }

    pub fn reason_code(&self) -> &'static str {
        match self {
            SlotDecision::Available => "available",
            SlotDecision::InvalidDuration => "invalid_duration",
            SlotDecision::OutsideBusinessHours => "outside_business_hours",
            SlotDecision::PastClosing => "past_closing",
            SlotDecision::OutsideWorkingHours => "outside_working_hours",
            SlotDecision::Conflict(_) => "conflict",
        }
    }

    pub fn conflict(&self) -> Option<Interval> {
        match self {
            SlotDecision::Conflict(interval) => Some(*interval),
            _ => None,
        }
    }
}

impl std::fmt::Display for SlotDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlotDecision::Available => write!(f, "slot is available"),
            SlotDecision::InvalidDuration => write!(f, "service duration must be positive"),
            SlotDecision::OutsideBusinessHours => write!(f, "start time is outside business hours"),
            SlotDecision::PastClosing => write!(f, "appointment would end after closing time"),
            SlotDecision::OutsideWorkingHours => {
                write!(f, "staff member is not working at that time")
            }
            SlotDecision::Conflict(existing) => write!(
                f,
                "overlaps an existing appointment from {} to {}",
                existing.start.format("%Y-%m-%d %H:%M"),
                existing.end.format("%H:%M")
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Checks
// ---------------------------------------------------------------------------

/// Evaluate a candidate start against the rules and the existing bookings.
///
/// Rules are checked before bookings, so an out-of-hours candidate reports
/// the hours problem even when it also overlaps something. A zero duration is
/// never available.
pub fn check_slot(
    candidate_start: NaiveDateTime,
    service_duration: u32,
    rules: &SlotRules,
    existing: &[Interval],
) -> SlotDecision {
    if service_duration == 0 {
        return SlotDecision::InvalidDuration;
    }
    if !rules.business_hours.admits_start(candidate_start) {
        return SlotDecision::OutsideBusinessHours;
    }

    let candidate = Interval::from_duration(candidate_start, service_duration);

    if rules.closing == ClosingPolicy::WholeAppointment
        && candidate.end > rules.business_hours.closing(candidate_start.date())
    {
        return SlotDecision::PastClosing;
    }

    match rules.staff_hours {
        StaffHours::Unchecked => {}
        StaffHours::DayOff => return SlotDecision::OutsideWorkingHours,
        StaffHours::Within(window) => {
            if !fits_working_hours(&candidate, &window) {
                return SlotDecision::OutsideWorkingHours;
            }
        }
    }

    existing
        .iter()
        .find(|booked| candidate.overlaps(booked))
        .map(|booked| SlotDecision::Conflict(*booked))
        .unwrap_or(SlotDecision::Available)
}

/// Whether a candidate start is inside business hours (start hour only) and
/// free of overlap with every existing interval.
pub fn is_slot_available(
    candidate_start: NaiveDateTime,
    service_duration: u32,
    business_hours: BusinessHours,
    existing: &[Interval],
) -> bool {
    check_slot(
        candidate_start,
        service_duration,
        &SlotRules::lenient(business_hours),
        existing,
    )
    .is_available()
}
