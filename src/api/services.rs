//! Service catalog endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::service::{CreateService, Service, ServiceQuery, ServiceSummary, UpdateService},
};

/// List services
#[utoipa::path(
    get,
    path = "/services",
    tag = "services",
    params(ServiceQuery),
    responses(
        (status = 200, description = "Filtered and sorted services", body = Vec<Service>),
        (status = 400, description = "Unknown category", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_services(
    State(state): State<crate::AppState>,
    Query(query): Query<ServiceQuery>,
) -> AppResult<Json<Vec<Service>>> {
    let services = state.services.catalog.list(&query).await?;
    Ok(Json(services))
}

/// Total and active service counts
#[utoipa::path(
    get,
    path = "/services/summary",
    tag = "services",
    responses(
        (status = 200, description = "Catalog counts", body = ServiceSummary)
    )
)]
pub async fn services_summary(State(state): State<crate::AppState>) -> Json<ServiceSummary> {
    Json(state.services.catalog.summary().await)
}

/// Get service by ID
#[utoipa::path(
    get,
    path = "/services/{id}",
    tag = "services",
    params(("id" = Uuid, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service details", body = Service),
        (status = 404, description = "Service not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_service(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Service>> {
    let service = state.services.catalog.get_by_id(id).await?;
    Ok(Json(service))
}

/// Create a service
#[utoipa::path(
    post,
    path = "/services",
    tag = "services",
    request_body = CreateService,
    responses(
        (status = 201, description = "Service created", body = Service),
        (status = 400, description = "Invalid fields", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_service(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateService>,
) -> AppResult<(StatusCode, Json<Service>)> {
    let service = state.services.catalog.create(&data).await?;
    Ok((StatusCode::CREATED, Json(service)))
}

/// Update a service
#[utoipa::path(
    put,
    path = "/services/{id}",
    tag = "services",
    params(("id" = Uuid, Path, description = "Service ID")),
    request_body = UpdateService,
    responses(
        (status = 200, description = "Service updated", body = Service),
        (status = 400, description = "Invalid fields", body = crate::error::ErrorResponse),
        (status = 404, description = "Service not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_service(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateService>,
) -> AppResult<Json<Service>> {
    let service = state.services.catalog.update(id, &data).await?;
    Ok(Json(service))
}

/// Flip the active flag of a service
#[utoipa::path(
    post,
    path = "/services/{id}/toggle-active",
    tag = "services",
    params(("id" = Uuid, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service toggled", body = Service),
        (status = 404, description = "Service not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn toggle_service(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Service>> {
    let service = state.services.catalog.toggle_active(id).await?;
    Ok(Json(service))
}

/// Delete a service
#[utoipa::path(
    delete,
    path = "/services/{id}",
    tag = "services",
    params(("id" = Uuid, Path, description = "Service ID")),
    responses(
        (status = 204, description = "Service deleted"),
        (status = 404, description = "Service not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Service has open appointments", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_service(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.catalog.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
