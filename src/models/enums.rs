//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// AppointmentStatus
// ---------------------------------------------------------------------------

/// Lifecycle stage of an appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Whether the status machine allows moving from `self` to `next`.
    ///
    /// `scheduled -> confirmed -> in-progress -> completed`, plus cancellation
    /// from `scheduled` or `confirmed`. `completed` and `cancelled` are terminal.
    pub fn can_transition_to(self, next: AppointmentStatus) -> bool {
        use AppointmentStatus::*;
        matches!(
            (self, next),
            (Scheduled, Confirmed)
                | (Confirmed, InProgress)
                | (InProgress, Completed)
                | (Scheduled, Cancelled)
                | (Confirmed, Cancelled)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, AppointmentStatus::Completed | AppointmentStatus::Cancelled)
    }

    /// Cancelled bookings free their slot
    pub fn occupies_slot(self) -> bool {
        self != AppointmentStatus::Cancelled
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::InProgress => "in-progress",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// StaffRole
// ---------------------------------------------------------------------------

/// Staff member role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Stylist,
    Barber,
    Colorist,
    Assistant,
}

impl std::fmt::Display for StaffRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            StaffRole::Stylist => "Stylist",
            StaffRole::Barber => "Barber",
            StaffRole::Colorist => "Colorist",
            StaffRole::Assistant => "Assistant",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// ServiceCategory
// ---------------------------------------------------------------------------

/// Service catalog category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Haircuts,
    Grooming,
    Color,
    Styling,
    Treatment,
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ServiceCategory::Haircuts => "Haircuts",
            ServiceCategory::Grooming => "Grooming",
            ServiceCategory::Color => "Hair Color",
            ServiceCategory::Styling => "Styling",
            ServiceCategory::Treatment => "Treatment",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for ServiceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "haircuts" => Ok(ServiceCategory::Haircuts),
            "grooming" => Ok(ServiceCategory::Grooming),
            "color" => Ok(ServiceCategory::Color),
            "styling" => Ok(ServiceCategory::Styling),
            "treatment" => Ok(ServiceCategory::Treatment),
            other => Err(format!("Unknown service category '{}'", other)),
        }
    }
}
