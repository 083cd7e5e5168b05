//! Business logic services

pub mod appointments;
pub mod availability;
pub mod catalog;
pub mod staff;

use crate::{config::SchedulingConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub staff: staff::StaffService,
    pub appointments: appointments::AppointmentsService,
    pub availability: availability::AvailabilityService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, scheduling: SchedulingConfig) -> Self {
        let availability = availability::AvailabilityService::new(repository.clone(), scheduling);
        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            staff: staff::StaffService::new(repository.clone()),
            appointments: appointments::AppointmentsService::new(repository, availability.clone()),
            availability,
        }
    }
}
