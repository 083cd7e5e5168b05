//! Repository layer: in-memory collections for services, staff and appointments

pub mod appointments;
pub mod seed;
pub mod services;
pub mod staff;

/// Main repository struct holding every collection
#[derive(Clone, Default)]
pub struct Repository {
    pub services: services::ServicesRepository,
    pub staff: staff::StaffRepository,
    pub appointments: appointments::AppointmentsRepository,
}

impl Repository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}
