use axum::{
    Json,
    extract::{Path, Query, State},
    response::Response,
};
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::{
    AppState,
    auth::{AuthAdmin, require_role},
    models::{AdminRole, CountResponse, CreateStudentRequest, Student, UpdateStudentRequest},
    pagination::PageQuery,
    response::{self, ApiError},
};

use super::page_window;

/// register_student
///
/// [Public Route] The school's enrollment form. Anyone may submit a
/// registration; the record is managed by super admins afterwards.
#[utoipa::path(
    post,
    path = "/api/students",
    request_body = CreateStudentRequest,
    responses((status = 201, description = "Student created successfully", body = Student))
)]
pub async fn register_student(
    State(state): State<AppState>,
    Json(payload): Json<CreateStudentRequest>,
) -> Result<Response, ApiError> {
    let student = state.repo.create_student(payload).await?;
    tracing::info!(id = %student.id, "student registration received");
    Ok(response::created("Student created successfully", student))
}

/// list_students
///
/// [Super Admin Route] Paginated listing of student registrations.
#[utoipa::path(
    get,
    path = "/api/students",
    params(PageQuery),
    responses(
        (status = 200, description = "Students retrieved successfully"),
        (status = 403, description = "Super Admin access required")
    )
)]
pub async fn list_students(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Response, ApiError> {
    require_role(&admin, AdminRole::SuperAdmin)?;
    let window = page_window(&query)?;

    let page = state.repo.find_students(window).await?;
    Ok(response::ok("Students retrieved successfully", page))
}

/// get_student
///
/// [Super Admin Route] Retrieves a single student registration by ID.
#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student retrieved successfully", body = Student),
        (status = 404, description = "Student not found")
    )
)]
pub async fn get_student(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    require_role(&admin, AdminRole::SuperAdmin)?;

    let student = state
        .repo
        .find_student(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Student not found"))?;
    Ok(response::ok("Student retrieved successfully", student))
}

/// update_student
///
/// [Super Admin Route] Partially updates a student registration. Fields
/// absent from the payload keep their stored values.
#[utoipa::path(
    patch,
    path = "/api/students/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    request_body = UpdateStudentRequest,
    responses(
        (status = 200, description = "Student updated successfully", body = Student),
        (status = 404, description = "Student not found")
    )
)]
pub async fn update_student(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStudentRequest>,
) -> Result<Response, ApiError> {
    require_role(&admin, AdminRole::SuperAdmin)?;

    let existing = state
        .repo
        .find_student(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Student not found"))?;

    let merged = payload.merge(&existing);
    let updated = state
        .repo
        .update_student(id, merged)
        .await?
        .ok_or_else(|| ApiError::not_found("Student not found"))?;
    Ok(response::ok("Student updated successfully", updated))
}

/// delete_student
///
/// [Super Admin Route] Deletes a student registration.
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student deleted successfully"),
        (status = 404, description = "Student not found")
    )
)]
pub async fn delete_student(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    require_role(&admin, AdminRole::SuperAdmin)?;

    state
        .repo
        .find_student(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Student not found"))?;

    state.repo.delete_student(id).await?;
    Ok(response::ok_message("Student deleted successfully"))
}

/// student_registered_count
///
/// [Super Admin Route] Total number of student registrations.
#[utoipa::path(
    get,
    path = "/api/students/stats/registered-count",
    responses(
        (status = 200, description = "Registered students count retrieved successfully", body = CountResponse),
        (status = 403, description = "Super Admin access required")
    )
)]
pub async fn student_registered_count(
    admin: AuthAdmin,
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    require_role(&admin, AdminRole::SuperAdmin)?;

    let count = state.repo.student_count().await?;
    Ok(response::ok(
        "Registered students count retrieved successfully",
        CountResponse { count },
    ))
}

/// student_last_week_registered_count
///
/// [Super Admin Route] Number of student registrations received in the last
/// seven days.
#[utoipa::path(
    get,
    path = "/api/students/stats/last-week-registered-count",
    responses(
        (status = 200, description = "Last week registered students count retrieved successfully", body = CountResponse),
        (status = 403, description = "Super Admin access required")
    )
)]
pub async fn student_last_week_registered_count(
    admin: AuthAdmin,
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    require_role(&admin, AdminRole::SuperAdmin)?;

    let cutoff = Utc::now() - Duration::days(7);
    let count = state.repo.student_count_since(cutoff).await?;
    Ok(response::ok(
        "Last week registered students count retrieved successfully",
        CountResponse { count },
    ))
}
