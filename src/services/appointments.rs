//! Appointment booking and lifecycle

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use super::availability::AvailabilityService;
use crate::{
    error::{AppError, AppResult},
    models::{
        appointment::{Appointment, AppointmentQuery, CreateAppointment},
        enums::AppointmentStatus,
    },
    repository::Repository,
    scheduling::check_slot,
};

#[derive(Clone)]
pub struct AppointmentsService {
    repository: Repository,
    availability: AvailabilityService,
}

impl AppointmentsService {
    pub fn new(repository: Repository, availability: AvailabilityService) -> Self {
        Self { repository, availability }
    }

    pub async fn list(&self, query: &AppointmentQuery) -> AppResult<Vec<Appointment>> {
        Ok(self.repository.appointments.list(query).await)
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Appointment> {
        self.repository.appointments.get_by_id(id).await
    }

    /// Book an appointment.
    ///
    /// The service must be active and the staff member active and qualified for
    /// it. The slot is checked against the staff member's bookings and inserted
    /// in the same critical section, so two concurrent requests for overlapping
    /// slots cannot both succeed.
    pub async fn create(&self, data: &CreateAppointment) -> AppResult<Appointment> {
        data.validate()?;

        let service = self
            .repository
            .services
            .get_by_id(data.service_id)
            .await
            .map_err(|_| AppError::BusinessRule(format!("Unknown service {}", data.service_id)))?;
        if !service.active {
            return Err(AppError::BusinessRule(format!("Service '{}' is not active", service.name)));
        }

        let staff = self
            .repository
            .staff
            .get_by_id(data.staff_id)
            .await
            .map_err(|_| AppError::BusinessRule(format!("Unknown staff member {}", data.staff_id)))?;
        if !staff.active {
            return Err(AppError::BusinessRule(format!("{} is not active", staff.name)));
        }
        if !staff.can_perform(service.id) {
            return Err(AppError::BusinessRule(format!(
                "{} does not perform '{}'",
                staff.name, service.name
            )));
        }

        let rules = self.availability.rules_for(Some(&staff), data.start_time.date());
        let appointment = Appointment {
            id: Uuid::new_v4(),
            client_name: data.client_name.trim().to_string(),
            service_id: service.id,
            staff_id: staff.id,
            start_time: data.start_time,
            duration: service.duration,
            status: AppointmentStatus::Scheduled,
            notes: data.notes.clone().filter(|n| !n.trim().is_empty()),
            created_at: Utc::now(),
            updated_at: None,
        };

        let start_time = appointment.start_time;
        let duration = appointment.duration;
        let appointment = self
            .repository
            .appointments
            .create_checked(appointment, |existing| {
                AvailabilityService::require_available(check_slot(start_time, duration, &rules, existing))
            })
            .await
            .map_err(|e| {
                if let AppError::SlotUnavailable(decision) = &e {
                    tracing::info!("Rejected booking for {} at {}: {}", staff.name, start_time, decision);
                }
                e
            })?;

        tracing::info!(
            "Booked {} with {} at {} ({} min)",
            service.name,
            staff.name,
            appointment.start_time,
            appointment.duration
        );
        Ok(appointment)
    }

    /// Apply a status change allowed by the status machine
    pub async fn update_status(&self, id: Uuid, status: AppointmentStatus) -> AppResult<Appointment> {
        let appointment = self.repository.appointments.transition(id, status).await?;
        tracing::info!("Appointment {} is now {}", appointment.id, appointment.status);
        Ok(appointment)
    }
}
