//! Availability queries on top of the scheduling engine

use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

use crate::{
    config::SchedulingConfig,
    error::{AppError, AppResult},
    models::{
        availability::{RangeResponse, SlotCheckResponse, SlotsResponse},
        service::Service,
        staff::StaffMember,
    },
    repository::Repository,
    scheduling::{
        self, compute_selectable_time_range, day_slots_with_rules, Interval, SlotDecision,
        SlotRules, StaffHours,
    },
};

#[derive(Clone)]
pub struct AvailabilityService {
    repository: Repository,
    config: SchedulingConfig,
}

impl AvailabilityService {
    pub fn new(repository: Repository, config: SchedulingConfig) -> Self {
        Self { repository, config }
    }

    /// Rules in force for a booking on `date`, optionally with a given staff member
    pub fn rules_for(&self, staff: Option<&StaffMember>, date: NaiveDate) -> SlotRules {
        let rules = SlotRules::lenient(self.config.business_hours).with_closing(self.config.closing_policy);
        match staff {
            Some(member) if self.config.enforce_staff_hours => {
                let staff_hours = scheduling::working_window(&member.schedule, date)
                    .map(StaffHours::Within)
                    .unwrap_or(StaffHours::DayOff);
                rules.with_staff_hours(staff_hours)
            }
            _ => rules,
        }
    }

    async fn service(&self, id: Uuid) -> AppResult<Service> {
        self.repository.services.get_by_id(id).await
    }

    async fn staff(&self, id: Option<Uuid>) -> AppResult<Option<StaffMember>> {
        match id {
            Some(id) => Ok(Some(self.repository.staff.get_by_id(id).await?)),
            None => Ok(None),
        }
    }

    /// Earliest and latest start for the service on `date`
    pub async fn selectable_range(&self, date: Option<NaiveDate>, service_id: Uuid) -> AppResult<RangeResponse> {
        let service = self.service(service_id).await?;
        let range = compute_selectable_time_range(date, service.duration, self.config.business_hours);
        if range.is_empty() {
            tracing::debug!("Service {} ({} min) does not fit in business hours", service.id, service.duration);
        }
        Ok(RangeResponse::new(range, self.config.business_hours))
    }

    /// Decision for one candidate start
    pub async fn check(
        &self,
        start_time: NaiveDateTime,
        service_id: Uuid,
        staff_id: Option<Uuid>,
    ) -> AppResult<SlotCheckResponse> {
        let service = self.service(service_id).await?;
        let staff = self.staff(staff_id).await?;
        let candidate = Interval::from_duration(start_time, service.duration);

        // Bookings overlapping the candidate itself, including ones starting after midnight
        let existing = self.repository.appointments.snapshot(staff_id, candidate).await;
        let rules = self.rules_for(staff.as_ref(), start_time.date());
        let decision = scheduling::check_slot(start_time, service.duration, &rules, &existing);

        tracing::debug!("Slot {} for service {}: {}", start_time, service.id, decision.reason_code());
        Ok(SlotCheckResponse::new(decision, candidate))
    }

    /// Slot grid for a day
    pub async fn slots(&self, date: NaiveDate, service_id: Uuid, staff_id: Option<Uuid>) -> AppResult<SlotsResponse> {
        let service = self.service(service_id).await?;
        let staff = self.staff(staff_id).await?;

        // Every grid slot ends by closing, which is at most the next midnight
        let existing = self.repository.appointments.snapshot(staff_id, Interval::day(date)).await;
        let rules = self.rules_for(staff.as_ref(), date);
        let slots = day_slots_with_rules(date, service.duration, &rules, self.config.slot_step_minutes, &existing);

        Ok(SlotsResponse {
            date,
            duration: service.duration,
            slots,
        })
    }

    /// Gate used when booking: turn a negative decision into an error
    pub fn require_available(decision: SlotDecision) -> AppResult<()> {
        if decision.is_available() {
            Ok(())
        } else {
            Err(AppError::SlotUnavailable(decision))
        }
    }
}
