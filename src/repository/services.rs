//! Service catalog collection

use std::{collections::HashMap, sync::Arc};

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::service::{CreateService, Service, UpdateService},
};

#[derive(Clone, Default)]
pub struct ServicesRepository {
    rows: Arc<RwLock<HashMap<Uuid, Service>>>,
}

impl ServicesRepository {
    /// List all services, ordered by name
    pub async fn list(&self) -> Vec<Service> {
        let rows = self.rows.read().await;
        let mut services: Vec<Service> = rows.values().cloned().collect();
        services.sort_by(|a, b| a.name.cmp(&b.name));
        services
    }

    /// Get a service by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Service> {
        self.rows
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Service {} not found", id)))
    }

    /// Insert a new service (input must already be validated)
    pub async fn create(&self, data: &CreateService) -> Service {
        let service = Service {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            description: data.description.clone(),
            duration: data.duration,
            price: data.price,
            category: data.category,
            active: data.active.unwrap_or(true),
            created_at: Utc::now(),
            updated_at: None,
        };
        self.rows.write().await.insert(service.id, service.clone());
        service
    }

    /// Apply the present fields of `data`
    pub async fn update(&self, id: Uuid, data: &UpdateService) -> AppResult<Service> {
        let mut rows = self.rows.write().await;
        let service = rows
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Service {} not found", id)))?;

        if let Some(ref name) = data.name { service.name = name.clone(); }
        if let Some(ref description) = data.description { service.description = description.clone(); }
        if let Some(duration) = data.duration { service.duration = duration; }
        if let Some(price) = data.price { service.price = price; }
        if let Some(category) = data.category { service.category = category; }
        if let Some(active) = data.active { service.active = active; }
        service.updated_at = Some(Utc::now());

        Ok(service.clone())
    }

    /// Flip the active flag
    pub async fn toggle_active(&self, id: Uuid) -> AppResult<Service> {
        let mut rows = self.rows.write().await;
        let service = rows
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Service {} not found", id)))?;
        service.active = !service.active;
        service.updated_at = Some(Utc::now());
        Ok(service.clone())
    }

    /// Delete a service
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.rows
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Service {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::ServiceCategory;
    use rust_decimal::Decimal;

    fn beard_trim() -> CreateService {
        CreateService {
            name: "Beard Trim".to_string(),
            description: "Professional beard trimming and shaping".to_string(),
            duration: 20,
            price: Decimal::new(15, 0),
            category: ServiceCategory::Grooming,
            active: None,
        }
    }

    #[test]
    fn test_crud_cycle() {
        tokio_test::block_on(async {
            let repo = ServicesRepository::default();
            let created = repo.create(&beard_trim()).await;
            assert!(created.active);
            assert_eq!(repo.list().await.len(), 1);

            let updated = repo
                .update(created.id, &UpdateService { duration: Some(25), ..Default::default() })
                .await
                .unwrap();
            assert_eq!(updated.duration, 25);
            assert_eq!(updated.name, "Beard Trim");
            assert!(updated.updated_at.is_some());

            let toggled = repo.toggle_active(created.id).await.unwrap();
            assert!(!toggled.active);

            repo.delete(created.id).await.unwrap();
            assert!(matches!(repo.get_by_id(created.id).await, Err(AppError::NotFound(_))));
            assert!(matches!(repo.delete(created.id).await, Err(AppError::NotFound(_))));
        });
    }
}
