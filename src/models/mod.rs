//! Data models for the salon server

pub mod appointment;
pub mod availability;
pub mod enums;
pub mod service;
pub mod staff;
pub mod validation;

// Re-export commonly used types
pub use appointment::Appointment;
pub use enums::{AppointmentStatus, ServiceCategory, StaffRole};
pub use service::Service;
pub use staff::{StaffMember, WorkingHours};
