//! Appointment book
//!
//! Appointments are never deleted; cancelling is a status change.

use std::{collections::HashMap, sync::Arc};

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        appointment::{Appointment, AppointmentQuery},
        enums::AppointmentStatus,
    },
    scheduling::Interval,
};

#[derive(Clone, Default)]
pub struct AppointmentsRepository {
    rows: Arc<RwLock<HashMap<Uuid, Appointment>>>,
}

/// Intervals of slot-occupying bookings that overlap `window`, optionally for one staff member
fn occupied_within<'a>(
    rows: impl Iterator<Item = &'a Appointment>,
    staff_id: Option<Uuid>,
    window: &Interval,
) -> Vec<Interval> {
    rows.filter(|a| a.status.occupies_slot())
        .filter(|a| staff_id.map_or(true, |id| a.staff_id == id))
        .map(Appointment::interval)
        .filter(|interval| interval.overlaps(window))
        .collect()
}

impl AppointmentsRepository {
    /// List appointments matching the query, ordered by start time
    pub async fn list(&self, query: &AppointmentQuery) -> Vec<Appointment> {
        let rows = self.rows.read().await;
        let mut appointments: Vec<Appointment> =
            rows.values().filter(|a| query.matches(a)).cloned().collect();
        appointments.sort_by_key(|a| a.start_time);
        appointments
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Appointment> {
        self.rows
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", id)))
    }

    /// Read-only snapshot of occupied intervals overlapping `window`
    pub async fn snapshot(&self, staff_id: Option<Uuid>, window: Interval) -> Vec<Interval> {
        let rows = self.rows.read().await;
        occupied_within(rows.values(), staff_id, &window)
    }

    /// Insert `appointment` only if `check` accepts the staff member's bookings
    /// that overlap its interval, whatever day they start on. Check and insert
    /// happen under one write lock.
    pub async fn create_checked<F>(&self, appointment: Appointment, check: F) -> AppResult<Appointment>
    where
        F: FnOnce(&[Interval]) -> AppResult<()>,
    {
        let mut rows = self.rows.write().await;
        let existing = occupied_within(rows.values(), Some(appointment.staff_id), &appointment.interval());
        check(&existing)?;
        rows.insert(appointment.id, appointment.clone());
        Ok(appointment)
    }

    /// Move an appointment to `next` if the status machine allows it
    pub async fn transition(&self, id: Uuid, next: AppointmentStatus) -> AppResult<Appointment> {
        let mut rows = self.rows.write().await;
        let appointment = rows
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", id)))?;

        if !appointment.status.can_transition_to(next) {
            return Err(AppError::InvalidTransition {
                from: appointment.status,
                to: next,
            });
        }
        appointment.status = next;
        appointment.updated_at = Some(Utc::now());
        Ok(appointment.clone())
    }

    /// Number of bookings that still reference a service or staff member
    pub async fn count_referencing(&self, service_id: Option<Uuid>, staff_id: Option<Uuid>) -> usize {
        self.rows
            .read()
            .await
            .values()
            .filter(|a| !a.status.is_terminal())
            .filter(|a| service_id.map_or(false, |id| a.service_id == id)
                || staff_id.map_or(false, |id| a.staff_id == id))
            .count()
    }
}
