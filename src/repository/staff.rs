//! Staff collection

use std::{collections::HashMap, sync::Arc};

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::staff::{CreateStaff, StaffMember, UpdateStaff, WorkingHours},
};

#[derive(Clone, Default)]
pub struct StaffRepository {
    rows: Arc<RwLock<HashMap<Uuid, StaffMember>>>,
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Staff member {} not found", id))
}

impl StaffRepository {
    /// List all staff members, ordered by name
    pub async fn list(&self) -> Vec<StaffMember> {
        let rows = self.rows.read().await;
        let mut staff: Vec<StaffMember> = rows.values().cloned().collect();
        staff.sort_by(|a, b| a.name.cmp(&b.name));
        staff
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<StaffMember> {
        self.rows.read().await.get(&id).cloned().ok_or_else(|| not_found(id))
    }

    /// Insert a new staff member with an already parsed schedule
    pub async fn create(&self, data: &CreateStaff, schedule: Vec<WorkingHours>) -> StaffMember {
        let member = StaffMember {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            email: data.email.clone(),
            phone: data.phone.clone(),
            role: data.role,
            service_ids: data.service_ids.clone(),
            schedule,
            active: data.active.unwrap_or(true),
            image_url: data.image_url.clone(),
            created_at: Utc::now(),
            updated_at: None,
        };
        self.rows.write().await.insert(member.id, member.clone());
        member
    }

    /// Apply the present fields of `data`
    pub async fn update(
        &self,
        id: Uuid,
        data: &UpdateStaff,
        schedule: Option<Vec<WorkingHours>>,
    ) -> AppResult<StaffMember> {
        let mut rows = self.rows.write().await;
        let member = rows.get_mut(&id).ok_or_else(|| not_found(id))?;

        if let Some(ref name) = data.name { member.name = name.clone(); }
        if let Some(ref email) = data.email { member.email = email.clone(); }
        if let Some(ref phone) = data.phone { member.phone = phone.clone(); }
        if let Some(role) = data.role { member.role = role; }
        if let Some(ref service_ids) = data.service_ids { member.service_ids = service_ids.clone(); }
        if let Some(schedule) = schedule { member.schedule = schedule; }
        if let Some(active) = data.active { member.active = active; }
        if data.image_url.is_some() { member.image_url = data.image_url.clone(); }
        member.updated_at = Some(Utc::now());

        Ok(member.clone())
    }

    pub async fn replace_schedule(&self, id: Uuid, schedule: Vec<WorkingHours>) -> AppResult<StaffMember> {
        let mut rows = self.rows.write().await;
        let member = rows.get_mut(&id).ok_or_else(|| not_found(id))?;
        member.schedule = schedule;
        member.updated_at = Some(Utc::now());
        Ok(member.clone())
    }

    pub async fn set_image_url(&self, id: Uuid, image_url: Option<String>) -> AppResult<StaffMember> {
        let mut rows = self.rows.write().await;
        let member = rows.get_mut(&id).ok_or_else(|| not_found(id))?;
        member.image_url = image_url;
        member.updated_at = Some(Utc::now());
        Ok(member.clone())
    }

    pub async fn toggle_active(&self, id: Uuid) -> AppResult<StaffMember> {
        let mut rows = self.rows.write().await;
        let member = rows.get_mut(&id).ok_or_else(|| not_found(id))?;
        member.active = !member.active;
        member.updated_at = Some(Utc::now());
        Ok(member.clone())
    }

    /// Members whose only qualification is `service_id`
    pub async fn solely_qualified_for(&self, service_id: Uuid) -> Vec<StaffMember> {
        let rows = self.rows.read().await;
        let mut staff: Vec<StaffMember> = rows
            .values()
            .filter(|m| m.service_ids.iter().all(|id| *id == service_id) && m.can_perform(service_id))
            .cloned()
            .collect();
        staff.sort_by(|a, b| a.name.cmp(&b.name));
        staff
    }

    /// Drop a deleted service from every member's qualifications.
    /// Returns how many members were touched.
    pub async fn remove_service(&self, service_id: Uuid) -> usize {
        let mut rows = self.rows.write().await;
        let mut touched = 0;
        for member in rows.values_mut() {
            let before = member.service_ids.len();
            member.service_ids.retain(|id| *id != service_id);
            if member.service_ids.len() != before {
                member.updated_at = Some(Utc::now());
                touched += 1;
            }
        }
        touched
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.rows
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::StaffRole;

    fn sarah(service_ids: Vec<Uuid>) -> CreateStaff {
        CreateStaff {
            name: "Sarah Johnson".to_string(),
            email: "sarah.j@example.com".to_string(),
            phone: "(555) 987-6543".to_string(),
            role: StaffRole::Stylist,
            service_ids,
            schedule: Vec::new(),
            active: None,
            image_url: None,
        }
    }

    #[test]
    fn test_remove_service_from_qualifications() {
        tokio_test::block_on(async {
            let repo = StaffRepository::default();
            let kept = Uuid::new_v4();
            let removed = Uuid::new_v4();
            let member = repo.create(&sarah(vec![kept, removed]), Vec::new()).await;

            assert_eq!(repo.remove_service(removed).await, 1);
            assert_eq!(repo.remove_service(removed).await, 0);

            let member = repo.get_by_id(member.id).await.unwrap();
            assert_eq!(member.service_ids, vec![kept]);
        });
    }

    #[test]
    fn test_solely_qualified_for() {
        tokio_test::block_on(async {
            let repo = StaffRepository::default();
            let only = Uuid::new_v4();
            let other = Uuid::new_v4();
            let single = repo.create(&sarah(vec![only]), Vec::new()).await;
            repo.create(&sarah(vec![only, other]), Vec::new()).await;

            let stranded = repo.solely_qualified_for(only).await;
            assert_eq!(stranded.len(), 1);
            assert_eq!(stranded[0].id, single.id);
            assert!(repo.solely_qualified_for(other).await.is_empty());
        });
    }

    #[test]
    fn test_partial_update_keeps_other_fields() {
        tokio_test::block_on(async {
            let repo = StaffRepository::default();
            let member = repo.create(&sarah(vec![Uuid::new_v4()]), Vec::new()).await;
            let update = UpdateStaff {
                role: Some(StaffRole::Colorist),
                ..Default::default()
            };
            let updated = repo.update(member.id, &update, None).await.unwrap();
            assert_eq!(updated.role, StaffRole::Colorist);
            assert_eq!(updated.email, member.email);
            assert!(updated.active);
        });
    }
}
