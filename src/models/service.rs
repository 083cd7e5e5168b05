//! Service catalog models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use super::enums::ServiceCategory;
use super::validation::{check_price, merge};

/// A bookable salon service
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Duration in minutes
    pub duration: u32,
    #[schema(value_type = String, example = "25.00")]
    pub price: Decimal,
    pub category: ServiceCategory,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create service request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateService {
    #[validate(length(min = 1, message = "Service name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    /// Duration in minutes
    #[validate(range(min = 1, message = "Duration must be positive"))]
    pub duration: u32,
    #[schema(value_type = String, example = "25.00")]
    pub price: Decimal,
    pub category: ServiceCategory,
    /// Defaults to active
    pub active: Option<bool>,
}

impl CreateService {
    pub fn check(&self) -> Result<(), ValidationErrors> {
        let extra = check_price(&self.price)
            .map(|e| vec![("price", e)])
            .unwrap_or_default();
        merge(self.validate(), extra)
    }
}

/// Update service request; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateService {
    #[validate(length(min = 1, message = "Service name is required"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: Option<String>,
    #[validate(range(min = 1, message = "Duration must be positive"))]
    pub duration: Option<u32>,
    #[schema(value_type = Option<String>, example = "25.00")]
    pub price: Option<Decimal>,
    pub category: Option<ServiceCategory>,
    pub active: Option<bool>,
}

impl UpdateService {
    pub fn check(&self) -> Result<(), ValidationErrors> {
        let extra = self
            .price
            .as_ref()
            .and_then(check_price)
            .map(|e| vec![("price", e)])
            .unwrap_or_default();
        merge(self.validate(), extra)
    }
}

/// Sortable service fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ServiceSortField {
    #[default]
    Name,
    Price,
    Duration,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Service list query parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct ServiceQuery {
    /// Comma-separated categories, e.g. `haircuts,color`
    pub category: Option<String>,
    /// Case-insensitive match on name or description
    pub search: Option<String>,
    pub sort: Option<ServiceSortField>,
    pub direction: Option<SortDirection>,
}

/// Catalog counters
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceSummary {
    pub total: usize,
    pub active: usize,
}
