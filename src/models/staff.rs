//! Staff member and working-hours models

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use super::enums::StaffRole;
use super::validation::{check_phone, merge, parse_hhmm, violation};

// ---------------------------------------------------------------------------
// WorkingHours
// ---------------------------------------------------------------------------

/// Working window for one day of the week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WorkingHours {
    /// Day of week (0=Sunday, 6=Saturday)
    pub day_of_week: u8,
    /// Start time (HH:mm)
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "09:00")]
    pub start_time: NaiveTime,
    /// End time (HH:mm)
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "17:00")]
    pub end_time: NaiveTime,
}

/// Working hours as submitted, before parsing
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct WorkingHoursInput {
    /// Day of week (0=Sunday, 6=Saturday)
    pub day_of_week: u8,
    /// Start time (HH:mm)
    pub start_time: String,
    /// End time (HH:mm)
    pub end_time: String,
}

mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_hhmm(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid time '{}' (use HH:mm)", s)))
    }
}

/// Parse and check a weekly schedule; the result is sorted by day of week.
pub fn parse_schedule(entries: &[WorkingHoursInput]) -> Result<Vec<WorkingHours>, ValidationError> {
    let mut schedule: Vec<WorkingHours> = Vec::with_capacity(entries.len());

    for entry in entries {
        if entry.day_of_week > 6 {
            return Err(violation(
                "day_of_week",
                format!("Invalid day of week {} (use 0-6, Sunday first)", entry.day_of_week),
            ));
        }
        let (Some(start_time), Some(end_time)) =
            (parse_hhmm(&entry.start_time), parse_hhmm(&entry.end_time))
        else {
            return Err(violation("time_format", "Working hours must use HH:mm"));
        };
        if start_time >= end_time {
            return Err(violation(
                "time_order",
                format!("Start time must be before end time on day {}", entry.day_of_week),
            ));
        }
        if schedule.iter().any(|wh| wh.day_of_week == entry.day_of_week) {
            return Err(violation(
                "duplicate_day",
                format!("Day {} appears more than once", entry.day_of_week),
            ));
        }
        schedule.push(WorkingHours {
            day_of_week: entry.day_of_week,
            start_time,
            end_time,
        });
    }

    schedule.sort_by_key(|wh| wh.day_of_week);
    Ok(schedule)
}

// ---------------------------------------------------------------------------
// StaffMember
// ---------------------------------------------------------------------------

/// A staff member who can be booked
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StaffMember {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: StaffRole,
    /// Services this member is qualified to perform
    pub service_ids: Vec<Uuid>,
    pub schedule: Vec<WorkingHours>,
    pub active: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl StaffMember {
    pub fn can_perform(&self, service_id: Uuid) -> bool {
        self.service_ids.contains(&service_id)
    }
}

/// Create staff member request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateStaff {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    /// Format (XXX) XXX-XXXX
    pub phone: String,
    pub role: StaffRole,
    #[validate(length(min = 1, message = "At least one service must be selected"))]
    pub service_ids: Vec<Uuid>,
    #[serde(default)]
    pub schedule: Vec<WorkingHoursInput>,
    pub active: Option<bool>,
    #[validate(url(message = "Must be a valid URL"))]
    pub image_url: Option<String>,
}

impl CreateStaff {
    /// Check every field and return the parsed schedule
    pub fn check(&self) -> Result<Vec<WorkingHours>, ValidationErrors> {
        let mut extra = Vec::new();
        if let Some(e) = check_phone(&self.phone) {
            extra.push(("phone", e));
        }
        let schedule = parse_schedule(&self.schedule);
        if let Err(e) = &schedule {
            extra.push(("schedule", e.clone()));
        }
        merge(self.validate(), extra)?;
        Ok(schedule.unwrap_or_default())
    }
}

/// Update staff member request; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateStaff {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
    #[validate(email(message = "Invalid email"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<StaffRole>,
    #[validate(length(min = 1, message = "At least one service must be selected"))]
    pub service_ids: Option<Vec<Uuid>>,
    pub schedule: Option<Vec<WorkingHoursInput>>,
    pub active: Option<bool>,
    #[validate(url(message = "Must be a valid URL"))]
    pub image_url: Option<String>,
}

impl UpdateStaff {
    /// Check present fields and return the parsed schedule, if one was given
    pub fn check(&self) -> Result<Option<Vec<WorkingHours>>, ValidationErrors> {
        let mut extra = Vec::new();
        if let Some(e) = self.phone.as_deref().and_then(check_phone) {
            extra.push(("phone", e));
        }
        let schedule = self.schedule.as_deref().map(parse_schedule).transpose();
        if let Err(e) = &schedule {
            extra.push(("schedule", e.clone()));
        }
        merge(self.validate(), extra)?;
        Ok(schedule.unwrap_or_default())
    }
}

/// Replace schedule request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateSchedule {
    pub schedule: Vec<WorkingHoursInput>,
}

/// Staff list query parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct StaffQuery {
    /// Only return active members
    pub active_only: Option<bool>,
    /// Only return members qualified for this service
    pub service_id: Option<Uuid>,
}

/// Empty strings from forms mean "no image"
pub fn normalize_image_url(url: Option<String>) -> Option<String> {
    url.filter(|u| !u.trim().is_empty())
}
