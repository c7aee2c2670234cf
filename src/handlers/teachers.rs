use axum::{
    extract::{Multipart, Path, Query, State},
    response::Response,
};
use uuid::Uuid;

use crate::{
    AppState,
    auth::AuthAdmin,
    models::{CreateTeacherRequest, Teacher, UpdateTeacherRequest},
    pagination::PageQuery,
    response::{self, ApiError},
};

use super::{page_window, read_form, upload_photo};

/// list_teachers
///
/// [Public Route] Paginated listing of teaching staff, consumed by the
/// public school website.
#[utoipa::path(
    get,
    path = "/api/teachers",
    params(PageQuery),
    responses((status = 200, description = "Teachers retrieved successfully"))
)]
pub async fn list_teachers(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Response, ApiError> {
    let window = page_window(&query)?;
    let page = state.repo.find_teachers(window).await?;
    Ok(response::ok("Teachers retrieved successfully", page))
}

/// get_teacher
///
/// [Public Route] Retrieves a single teacher profile by ID.
#[utoipa::path(
    get,
    path = "/api/teachers/{id}",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Teacher retrieved successfully", body = Teacher),
        (status = 404, description = "Teacher not found")
    )
)]
pub async fn get_teacher(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let teacher = state
        .repo
        .find_teacher(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Teacher not found"))?;
    Ok(response::ok("Teacher retrieved successfully", teacher))
}

/// create_teacher
///
/// [Authenticated Route] Creates a teacher profile from a multipart form.
/// An attached photo file is pushed to the image host first and the hosted
/// URL is what gets persisted; an upload failure aborts the create.
#[utoipa::path(
    post,
    path = "/api/teachers",
    responses(
        (status = 201, description = "Teacher created successfully", body = Teacher),
        (status = 400, description = "Missing or invalid form field")
    )
)]
pub async fn create_teacher(
    _admin: AuthAdmin,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let form = read_form(multipart).await?;

    let mut req = CreateTeacherRequest {
        name: form.required("name")?,
        place_date_of_birth: form.required("place_date_of_birth")?,
        status: form.required_parsed("status")?,
        start_working_date: form.required_datetime("start_working_date")?,
        position: form.required("position")?,
        role: form.required("role")?,
        nuptk_nbm: form.optional("nuptk_nbm"),
        education: form.required("education")?,
        // A plain-text photo field may carry an already-hosted URL.
        photo: form.optional("photo"),
    };

    if let Some(upload) = form.photo {
        req.photo = Some(upload_photo(&state.images, upload, "teacher").await?);
    }

    let teacher = state.repo.create_teacher(req).await?;
    tracing::info!(id = %teacher.id, "teacher created");
    Ok(response::created("Teacher created successfully", teacher))
}

/// update_teacher
///
/// [Authenticated Route] Partially updates a teacher profile from a
/// multipart form. Fields absent from the form keep their stored values; a
/// new photo file replaces the stored URL.
#[utoipa::path(
    patch,
    path = "/api/teachers/{id}",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Teacher updated successfully", body = Teacher),
        (status = 404, description = "Teacher not found")
    )
)]
pub async fn update_teacher(
    _admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let existing = state
        .repo
        .find_teacher(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Teacher not found"))?;

    let form = read_form(multipart).await?;
    let mut patch = UpdateTeacherRequest {
        name: form.optional("name"),
        place_date_of_birth: form.optional("place_date_of_birth"),
        status: form.optional_parsed("status")?,
        start_working_date: form.optional_datetime("start_working_date")?,
        position: form.optional("position"),
        role: form.optional("role"),
        nuptk_nbm: form.optional("nuptk_nbm"),
        education: form.optional("education"),
        photo: form.optional("photo"),
    };

    if let Some(upload) = form.photo {
        patch.photo = Some(upload_photo(&state.images, upload, "teacher").await?);
    }

    let merged = patch.merge(&existing);
    let updated = state
        .repo
        .update_teacher(id, merged)
        .await?
        .ok_or_else(|| ApiError::not_found("Teacher not found"))?;
    Ok(response::ok("Teacher updated successfully", updated))
}

/// delete_teacher
///
/// [Authenticated Route] Deletes a teacher profile.
#[utoipa::path(
    delete,
    path = "/api/teachers/{id}",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Teacher deleted successfully"),
        (status = 404, description = "Teacher not found")
    )
)]
pub async fn delete_teacher(
    _admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    state
        .repo
        .find_teacher(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Teacher not found"))?;

    state.repo.delete_teacher(id).await?;
    Ok(response::ok_message("Teacher deleted successfully"))
}
