//! Staff management service

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::staff::{
        normalize_image_url, parse_schedule, CreateStaff, StaffMember, StaffQuery, UpdateSchedule,
        UpdateStaff,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct StaffService {
    repository: Repository,
}

impl StaffService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &StaffQuery) -> AppResult<Vec<StaffMember>> {
        let active_only = query.active_only.unwrap_or(false);
        Ok(self
            .repository
            .staff
            .list()
            .await
            .into_iter()
            .filter(|m| !active_only || m.active)
            .filter(|m| query.service_id.map_or(true, |id| m.can_perform(id)))
            .collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<StaffMember> {
        self.repository.staff.get_by_id(id).await
    }

    /// Every qualified service must exist in the catalog and be active
    async fn ensure_services_offered(&self, service_ids: &[Uuid]) -> AppResult<()> {
        for id in service_ids {
            let service = self
                .repository
                .services
                .get_by_id(*id)
                .await
                .map_err(|_| AppError::BusinessRule(format!("Unknown service {}", id)))?;
            if !service.active {
                return Err(AppError::BusinessRule(format!(
                    "Service '{}' is not active",
                    service.name
                )));
            }
        }
        Ok(())
    }

    pub async fn create(&self, data: &CreateStaff) -> AppResult<StaffMember> {
        let mut data = data.clone();
        data.image_url = normalize_image_url(data.image_url.take());

        let schedule = data.check()?;
        self.ensure_services_offered(&data.service_ids).await?;

        let member = self.repository.staff.create(&data, schedule).await;
        tracing::info!("Created staff member {} ({})", member.name, member.id);
        Ok(member)
    }

    pub async fn update(&self, id: Uuid, data: &UpdateStaff) -> AppResult<StaffMember> {
        // An explicit empty string clears the image
        let clear_image = matches!(data.image_url.as_deref(), Some(u) if u.trim().is_empty());
        let mut data = data.clone();
        data.image_url = normalize_image_url(data.image_url.take());

        let schedule = data.check()?;
        if let Some(ref service_ids) = data.service_ids {
            self.ensure_services_offered(service_ids).await?;
        }

        let mut member = self.repository.staff.update(id, &data, schedule).await?;
        if clear_image {
            member = self.repository.staff.set_image_url(id, None).await?;
        }
        tracing::info!("Updated staff member {} ({})", member.name, member.id);
        Ok(member)
    }

    /// Replace the weekly schedule
    pub async fn update_schedule(&self, id: Uuid, data: &UpdateSchedule) -> AppResult<StaffMember> {
        let schedule = parse_schedule(&data.schedule).map_err(|e| {
            let mut errors = validator::ValidationErrors::new();
            errors.add("schedule", e);
            AppError::InvalidFields(errors)
        })?;
        let member = self.repository.staff.replace_schedule(id, schedule).await?;
        tracing::info!("Updated schedule of {} ({} working day(s))", member.id, member.schedule.len());
        Ok(member)
    }

    pub async fn toggle_active(&self, id: Uuid) -> AppResult<StaffMember> {
        let member = self.repository.staff.toggle_active(id).await?;
        tracing::info!("Staff member {} is now {}", member.id, if member.active { "active" } else { "inactive" });
        Ok(member)
    }

    /// Delete a staff member with no open appointments
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.staff.get_by_id(id).await?;

        let open = self.repository.appointments.count_referencing(None, Some(id)).await;
        if open > 0 {
            return Err(AppError::BusinessRule(format!(
                "Staff member {} has {} open appointment(s); deactivate instead",
                id, open
            )));
        }

        self.repository.staff.delete(id).await?;
        tracing::info!("Deleted staff member {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{enums::StaffRole, staff::WorkingHoursInput};

    async fn seeded() -> StaffService {
        let repository = Repository::new();
        repository.seed_demo().await;
        StaffService::new(repository)
    }

    fn alex(service_ids: Vec<Uuid>) -> CreateStaff {
        CreateStaff {
            name: "Alex Rivera".to_string(),
            email: "alex@example.com".to_string(),
            phone: "(555) 222-3333".to_string(),
            role: StaffRole::Colorist,
            service_ids,
            schedule: vec![WorkingHoursInput {
                day_of_week: 6,
                start_time: "10:00".to_string(),
                end_time: "14:00".to_string(),
            }],
            active: None,
            image_url: Some(String::new()),
        }
    }

    #[tokio::test]
    async fn test_create_requires_known_services() {
        let staff = seeded().await;
        let result = staff.create(&alex(vec![Uuid::new_v4()])).await;
        assert!(matches!(result, Err(AppError::BusinessRule(_))));
    }

    #[tokio::test]
    async fn test_inactive_services_cannot_be_assigned() {
        let staff = seeded().await;
        let color = staff
            .repository
            .services
            .list()
            .await
            .into_iter()
            .find(|s| s.name == "Hair Color")
            .unwrap();
        staff.repository.services.toggle_active(color.id).await.unwrap();

        let result = staff.create(&alex(vec![color.id])).await;
        assert!(matches!(result, Err(AppError::BusinessRule(_))));

        let john = staff.list(&StaffQuery::default()).await.unwrap().remove(0);
        let update = UpdateStaff {
            service_ids: Some(vec![color.id]),
            ..Default::default()
        };
        assert!(matches!(
            staff.update(john.id, &update).await,
            Err(AppError::BusinessRule(_))
        ));
    }

    #[tokio::test]
    async fn test_create_and_filter_by_service() {
        let staff = seeded().await;
        let color = staff
            .repository
            .services
            .list()
            .await
            .into_iter()
            .find(|s| s.name == "Hair Color")
            .unwrap();

        let member = staff.create(&alex(vec![color.id])).await.unwrap();
        assert_eq!(member.image_url, None);
        assert_eq!(member.schedule.len(), 1);

        let query = StaffQuery { active_only: Some(true), service_id: Some(color.id) };
        let qualified = staff.list(&query).await.unwrap();
        let names: Vec<_> = qualified.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Alex Rivera", "Sarah Johnson"]);
    }

    #[tokio::test]
    async fn test_update_clears_image_with_empty_string() {
        let staff = seeded().await;
        let member = staff.list(&StaffQuery::default()).await.unwrap().remove(0);

        let with_image = UpdateStaff {
            image_url: Some("https://example.com/john.png".to_string()),
            ..Default::default()
        };
        let updated = staff.update(member.id, &with_image).await.unwrap();
        assert!(updated.image_url.is_some());

        let cleared = UpdateStaff {
            image_url: Some(String::new()),
            ..Default::default()
        };
        let updated = staff.update(member.id, &cleared).await.unwrap();
        assert_eq!(updated.image_url, None);
    }

    #[tokio::test]
    async fn test_update_schedule_rejects_duplicates() {
        let staff = seeded().await;
        let member = staff.list(&StaffQuery::default()).await.unwrap().remove(0);
        let entry = WorkingHoursInput {
            day_of_week: 1,
            start_time: "09:00".to_string(),
            end_time: "12:00".to_string(),
        };
        let data = UpdateSchedule { schedule: vec![entry.clone(), entry] };
        assert!(matches!(
            staff.update_schedule(member.id, &data).await,
            Err(AppError::InvalidFields(_))
        ));
    }
}
