//! Service catalog management

use std::cmp::Ordering;

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::ServiceCategory,
        service::{
            CreateService, Service, ServiceQuery, ServiceSortField, ServiceSummary, SortDirection,
            UpdateService,
        },
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

fn parse_categories(raw: &str) -> AppResult<Vec<ServiceCategory>> {
    raw.split(',')
        .filter(|c| !c.trim().is_empty())
        .map(|c| c.parse::<ServiceCategory>().map_err(AppError::Validation))
        .collect()
}

fn compare(a: &Service, b: &Service, field: ServiceSortField) -> Ordering {
    match field {
        ServiceSortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        ServiceSortField::Price => a.price.cmp(&b.price),
        ServiceSortField::Duration => a.duration.cmp(&b.duration),
    }
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List services with category filter, text search and sorting
    pub async fn list(&self, query: &ServiceQuery) -> AppResult<Vec<Service>> {
        let categories = match query.category.as_deref() {
            Some(raw) => parse_categories(raw)?,
            None => Vec::new(),
        };
        let needle = query
            .search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        let mut services: Vec<Service> = self
            .repository
            .services
            .list()
            .await
            .into_iter()
            .filter(|s| categories.is_empty() || categories.contains(&s.category))
            .filter(|s| match &needle {
                Some(n) => {
                    s.name.to_lowercase().contains(n) || s.description.to_lowercase().contains(n)
                }
                None => true,
            })
            .collect();

        let field = query.sort.unwrap_or_default();
        let direction = query.direction.unwrap_or_default();
        services.sort_by(|a, b| {
            let ord = compare(a, b, field);
            match direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });

        Ok(services)
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Service> {
        self.repository.services.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateService) -> AppResult<Service> {
        data.check()?;
        let service = self.repository.services.create(data).await;
        tracing::info!("Created service {} ({})", service.name, service.id);
        Ok(service)
    }

    pub async fn update(&self, id: Uuid, data: &UpdateService) -> AppResult<Service> {
        data.check()?;
        let service = self.repository.services.update(id, data).await?;
        tracing::info!("Updated service {} ({})", service.name, service.id);
        Ok(service)
    }

    pub async fn toggle_active(&self, id: Uuid) -> AppResult<Service> {
        let service = self.repository.services.toggle_active(id).await?;
        tracing::info!("Service {} is now {}", service.id, if service.active { "active" } else { "inactive" });
        Ok(service)
    }

    /// Delete a service that no open appointment references and that is not
    /// the last qualification of any staff member, then drop it from staff
    /// qualifications
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.services.get_by_id(id).await?;

        let open = self.repository.appointments.count_referencing(Some(id), None).await;
        if open > 0 {
            return Err(AppError::BusinessRule(format!(
                "Service {} has {} open appointment(s); deactivate it instead",
                id, open
            )));
        }

        let stranded = self.repository.staff.solely_qualified_for(id).await;
        if !stranded.is_empty() {
            let names: Vec<&str> = stranded.iter().map(|m| m.name.as_str()).collect();
            return Err(AppError::BusinessRule(format!(
                "Service {} is the only qualification of {}; reassign first",
                id,
                names.join(", ")
            )));
        }

        self.repository.services.delete(id).await?;
        let touched = self.repository.staff.remove_service(id).await;
        tracing::info!("Deleted service {} (removed from {} staff member(s))", id, touched);
        Ok(())
    }

    pub async fn summary(&self) -> ServiceSummary {
        let services = self.repository.services.list().await;
        ServiceSummary {
            total: services.len(),
            active: services.iter().filter(|s| s.active).count(),
        }
    }
}
