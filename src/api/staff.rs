//! Staff endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::staff::{CreateStaff, StaffMember, StaffQuery, UpdateSchedule, UpdateStaff},
};

/// List staff members
#[utoipa::path(
    get,
    path = "/staff",
    tag = "staff",
    params(StaffQuery),
    responses(
        (status = 200, description = "Staff members", body = Vec<StaffMember>)
    )
)]
pub async fn list_staff(
    State(state): State<crate::AppState>,
    Query(query): Query<StaffQuery>,
) -> AppResult<Json<Vec<StaffMember>>> {
    let staff = state.services.staff.list(&query).await?;
    Ok(Json(staff))
}

/// Get staff member by ID
#[utoipa::path(
    get,
    path = "/staff/{id}",
    tag = "staff",
    params(("id" = Uuid, Path, description = "Staff member ID")),
    responses(
        (status = 200, description = "Staff member details", body = StaffMember),
        (status = 404, description = "Staff member not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_staff(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<StaffMember>> {
    let member = state.services.staff.get_by_id(id).await?;
    Ok(Json(member))
}

/// Create a staff member
#[utoipa::path(
    post,
    path = "/staff",
    tag = "staff",
    request_body = CreateStaff,
    responses(
        (status = 201, description = "Staff member created", body = StaffMember),
        (status = 400, description = "Invalid fields", body = crate::error::ErrorResponse),
        (status = 422, description = "Unknown service", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_staff(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateStaff>,
) -> AppResult<(StatusCode, Json<StaffMember>)> {
    let member = state.services.staff.create(&data).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// Update a staff member
#[utoipa::path(
    put,
    path = "/staff/{id}",
    tag = "staff",
    params(("id" = Uuid, Path, description = "Staff member ID")),
    request_body = UpdateStaff,
    responses(
        (status = 200, description = "Staff member updated", body = StaffMember),
        (status = 400, description = "Invalid fields", body = crate::error::ErrorResponse),
        (status = 404, description = "Staff member not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_staff(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateStaff>,
) -> AppResult<Json<StaffMember>> {
    let member = state.services.staff.update(id, &data).await?;
    Ok(Json(member))
}

/// Replace the weekly working schedule
#[utoipa::path(
    put,
    path = "/staff/{id}/schedule",
    tag = "staff",
    params(("id" = Uuid, Path, description = "Staff member ID")),
    request_body = UpdateSchedule,
    responses(
        (status = 200, description = "Schedule replaced", body = StaffMember),
        (status = 400, description = "Invalid schedule", body = crate::error::ErrorResponse),
        (status = 404, description = "Staff member not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_schedule(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateSchedule>,
) -> AppResult<Json<StaffMember>> {
    let member = state.services.staff.update_schedule(id, &data).await?;
    Ok(Json(member))
}

/// Flip the active flag of a staff member
#[utoipa::path(
    post,
    path = "/staff/{id}/toggle-active",
    tag = "staff",
    params(("id" = Uuid, Path, description = "Staff member ID")),
    responses(
        (status = 200, description = "Staff member toggled", body = StaffMember),
        (status = 404, description = "Staff member not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn toggle_staff(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<StaffMember>> {
    let member = state.services.staff.toggle_active(id).await?;
    Ok(Json(member))
}

/// Delete a staff member
#[utoipa::path(
    delete,
    path = "/staff/{id}",
    tag = "staff",
    params(("id" = Uuid, Path, description = "Staff member ID")),
    responses(
        (status = 204, description = "Staff member deleted"),
        (status = 404, description = "Staff member not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Staff member has open appointments", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_staff(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.staff.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
