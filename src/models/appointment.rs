//! Appointment models

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::enums::AppointmentStatus;
use crate::scheduling::Interval;

/// A booked appointment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Appointment {
    pub id: Uuid,
    pub client_name: String,
    pub service_id: Uuid,
    pub staff_id: Uuid,
    /// Local wall-clock start (ISO-8601, no offset)
    pub start_time: NaiveDateTime,
    /// Duration in minutes, copied from the service when booked
    pub duration: u32,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Appointment {
    /// Occupied interval `[start, start + duration)`
    pub fn interval(&self) -> Interval {
        Interval::from_duration(self.start_time, self.duration)
    }

    pub fn end_time(&self) -> NaiveDateTime {
        self.interval().end
    }

    pub fn date(&self) -> NaiveDate {
        self.start_time.date()
    }
}

/// Create appointment request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateAppointment {
    #[validate(length(min = 1, message = "Client name is required"))]
    pub client_name: String,
    pub service_id: Uuid,
    pub staff_id: Uuid,
    /// Local wall-clock start (ISO-8601, no offset)
    pub start_time: NaiveDateTime,
    pub notes: Option<String>,
}

/// Status change request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateAppointmentStatus {
    pub status: AppointmentStatus,
}

/// Appointment list query parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct AppointmentQuery {
    /// Only appointments starting on this date (YYYY-MM-DD)
    pub date: Option<NaiveDate>,
    pub staff_id: Option<Uuid>,
    pub status: Option<AppointmentStatus>,
}

impl AppointmentQuery {
    pub fn matches(&self, appointment: &Appointment) -> bool {
        self.date.map_or(true, |d| appointment.date() == d)
            && self.staff_id.map_or(true, |id| appointment.staff_id == id)
            && self.status.map_or(true, |s| appointment.status == s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Appointment {
        Appointment {
            id: Uuid::new_v4(),
            client_name: "John Doe".to_string(),
            service_id: Uuid::new_v4(),
            staff_id: Uuid::new_v4(),
            start_time: NaiveDate::from_ymd_opt(2026, 10, 19)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            duration: 30,
            status: AppointmentStatus::Scheduled,
            notes: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_interval_is_start_plus_duration() {
        let appt = sample();
        assert_eq!(appt.interval().start, appt.start_time);
        assert_eq!(appt.end_time().format("%H:%M").to_string(), "09:30");
    }

    #[test]
    fn test_query_matching() {
        let appt = sample();
        assert!(AppointmentQuery::default().matches(&appt));

        let query = AppointmentQuery {
            date: NaiveDate::from_ymd_opt(2026, 10, 20),
            ..Default::default()
        };
        assert!(!query.matches(&appt));

        let query = AppointmentQuery {
            staff_id: Some(appt.staff_id),
            status: Some(AppointmentStatus::Scheduled),
            ..Default::default()
        };
        assert!(query.matches(&appt));
    }

    #[test]
    fn test_create_appointment_parses_iso_start() {
        let data: CreateAppointment = serde_json::from_value(serde_json::json!({
            "client_name": "Jane Smith",
            "service_id": Uuid::new_v4(),
            "staff_id": Uuid::new_v4(),
            "start_time": "2026-10-19T10:00:00"
        }))
        .unwrap();
        assert_eq!(data.start_time.format("%H:%M").to_string(), "10:00");
        assert!(data.validate().is_ok());
    }
}
