use axum::{
    extract::{Multipart, Path, Query, State},
    response::Response,
};
use uuid::Uuid;

use crate::{
    AppState,
    auth::AuthAdmin,
    models::{Career, CreateCareerRequest, UpdateCareerRequest},
    pagination::PageQuery,
    response::{self, ApiError},
};

use super::{page_window, read_form, upload_photo};

/// list_careers
///
/// [Public Route] Paginated listing of job postings.
#[utoipa::path(
    get,
    path = "/api/careers",
    params(PageQuery),
    responses((status = 200, description = "Careers retrieved successfully"))
)]
pub async fn list_careers(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Response, ApiError> {
    let window = page_window(&query)?;
    let page = state.repo.find_careers(window).await?;
    Ok(response::ok("Careers retrieved successfully", page))
}

/// get_career
///
/// [Public Route] Retrieves a single job posting by ID.
#[utoipa::path(
    get,
    path = "/api/careers/{id}",
    params(("id" = Uuid, Path, description = "Career ID")),
    responses(
        (status = 200, description = "Career retrieved successfully", body = Career),
        (status = 404, description = "Career not found")
    )
)]
pub async fn get_career(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let career = state
        .repo
        .find_career(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Career not found"))?;
    Ok(response::ok("Career retrieved successfully", career))
}

/// create_career
///
/// [Authenticated Route] Creates a job posting from a multipart form. The
/// deadline is submitted as a `YYYY-MM-DD` date and stored as midnight UTC.
/// An attached poster file is pushed to the image host first; an upload
/// failure aborts the create.
#[utoipa::path(
    post,
    path = "/api/careers",
    responses(
        (status = 201, description = "Career created successfully", body = Career),
        (status = 400, description = "Missing or invalid form field")
    )
)]
pub async fn create_career(
    _admin: AuthAdmin,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let form = read_form(multipart).await?;

    let mut req = CreateCareerRequest {
        title: form.required("title")?,
        requirements: form.optional("requirements"),
        job_description: form.optional("job_description"),
        location: form.optional("location"),
        benefits: form.optional("benefits"),
        deadline: form.optional_datetime("deadline")?,
        photo: form.optional("photo"),
    };

    if let Some(upload) = form.photo {
        req.photo = Some(upload_photo(&state.images, upload, "career").await?);
    }

    let career = state.repo.create_career(req).await?;
    tracing::info!(id = %career.id, "career posting created");
    Ok(response::created("Career created successfully", career))
}

/// update_career
///
/// [Authenticated Route] Partially updates a job posting from a multipart
/// form. Fields absent from the form keep their stored values.
#[utoipa::path(
    patch,
    path = "/api/careers/{id}",
    params(("id" = Uuid, Path, description = "Career ID")),
    responses(
        (status = 200, description = "Career updated successfully", body = Career),
        (status = 404, description = "Career not found")
    )
)]
pub async fn update_career(
    _admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let existing = state
        .repo
        .find_career(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Career not found"))?;

    let form = read_form(multipart).await?;
    let mut patch = UpdateCareerRequest {
        title: form.optional("title"),
        requirements: form.optional("requirements"),
        job_description: form.optional("job_description"),
        location: form.optional("location"),
        benefits: form.optional("benefits"),
        deadline: form.optional_datetime("deadline")?,
        photo: form.optional("photo"),
    };

    if let Some(upload) = form.photo {
        patch.photo = Some(upload_photo(&state.images, upload, "career").await?);
    }

    let merged = patch.merge(&existing);
    let updated = state
        .repo
        .update_career(id, merged)
        .await?
        .ok_or_else(|| ApiError::not_found("Career not found"))?;
    Ok(response::ok("Career updated successfully", updated))
}

/// delete_career
///
/// [Authenticated Route] Deletes a job posting.
#[utoipa::path(
    delete,
    path = "/api/careers/{id}",
    params(("id" = Uuid, Path, description = "Career ID")),
    responses(
        (status = 200, description = "Career deleted successfully"),
        (status = 404, description = "Career not found")
    )
)]
pub async fn delete_career(
    _admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    state
        .repo
        .find_career(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Career not found"))?;

    state.repo.delete_career(id).await?;
    Ok(response::ok_message("Career deleted successfully"))
}
