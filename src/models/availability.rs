//! Availability request and response shapes

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::scheduling::{BusinessHours, Interval, SelectableRange, SlotDecision, TimeSlot};

/// Query for the selectable start range
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct RangeQuery {
    /// Selected date (YYYY-MM-DD); omitted means nothing selected yet
    pub date: Option<NaiveDate>,
    pub service_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RangeResponse {
    pub min_time: Option<NaiveDateTime>,
    pub max_time: Option<NaiveDateTime>,
    /// False when the service does not fit in the business window
    pub has_slots: bool,
    pub business_hours: BusinessHours,
}

impl RangeResponse {
    pub fn new(range: SelectableRange, business_hours: BusinessHours) -> Self {
        Self {
            min_time: range.min_time,
            max_time: range.max_time,
            has_slots: !range.is_empty(),
            business_hours,
        }
    }
}

/// Query for a single candidate slot
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct SlotCheckQuery {
    /// Candidate start (ISO-8601 local date-time)
    pub start_time: NaiveDateTime,
    pub service_id: Uuid,
    /// Without a staff member every booking on that day counts
    pub staff_id: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SlotCheckResponse {
    pub available: bool,
    /// `available`, `invalid_duration`, `outside_business_hours`,
    /// `past_closing`, `outside_working_hours` or `conflict`
    pub reason: String,
    pub message: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub conflict: Option<Interval>,
}

impl SlotCheckResponse {
    pub fn new(decision: SlotDecision, candidate: Interval) -> Self {
        Self {
            available: decision.is_available(),
            reason: decision.reason_code().to_string(),
            message: decision.to_string(),
            start_time: candidate.start,
            end_time: candidate.end,
            conflict: decision.conflict(),
        }
    }
}

/// Query for the slot grid of a day
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct SlotsQuery {
    pub date: NaiveDate,
    pub service_id: Uuid,
    pub staff_id: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SlotsResponse {
    pub date: NaiveDate,
    pub duration: u32,
    pub slots: Vec<TimeSlot>,
}
