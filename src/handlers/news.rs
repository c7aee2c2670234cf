use axum::{
    extract::{Multipart, Path, Query, State},
    response::Response,
};
use uuid::Uuid;

use crate::{
    AppState,
    auth::AuthAdmin,
    models::{CountResponse, CreateNewsRequest, News, UpdateNewsRequest},
    pagination::PageQuery,
    response::{self, ApiError},
};

use super::{page_window, read_form, upload_photo};

/// list_news
///
/// [Public Route] Paginated listing of all news items, drafts included.
#[utoipa::path(
    get,
    path = "/api/news",
    params(PageQuery),
    responses((status = 200, description = "News retrieved successfully"))
)]
pub async fn list_news(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Response, ApiError> {
    let window = page_window(&query)?;
    let page = state.repo.find_news(window).await?;
    Ok(response::ok("News retrieved successfully", page))
}

/// list_published_news
///
/// [Public Route] Paginated listing restricted to PUBLISHED items; what the
/// public website renders.
#[utoipa::path(
    get,
    path = "/api/news/published",
    params(PageQuery),
    responses((status = 200, description = "Published news retrieved successfully"))
)]
pub async fn list_published_news(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Response, ApiError> {
    let window = page_window(&query)?;
    let page = state.repo.find_published_news(window).await?;
    Ok(response::ok("Published news retrieved successfully", page))
}

/// get_news
///
/// [Public Route] Retrieves a single news item by ID.
#[utoipa::path(
    get,
    path = "/api/news/{id}",
    params(("id" = Uuid, Path, description = "News ID")),
    responses(
        (status = 200, description = "News retrieved successfully", body = News),
        (status = 404, description = "News not found")
    )
)]
pub async fn get_news(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let item = state
        .repo
        .find_news_item(id)
        .await?
        .ok_or_else(|| ApiError::not_found("News not found"))?;
    Ok(response::ok("News retrieved successfully", item))
}

/// create_news
///
/// [Authenticated Route] Creates a news item from a multipart form. An
/// attached photo file is pushed to the image host first; an upload failure
/// aborts the create.
#[utoipa::path(
    post,
    path = "/api/news",
    responses(
        (status = 201, description = "News created successfully", body = News),
        (status = 400, description = "Missing or invalid form field")
    )
)]
pub async fn create_news(
    _admin: AuthAdmin,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let form = read_form(multipart).await?;

    let mut req = CreateNewsRequest {
        title: form.required("title")?,
        content: form.required("content")?,
        photo: form.optional("photo"),
        status: form.required_parsed("status")?,
    };

    if let Some(upload) = form.photo {
        req.photo = Some(upload_photo(&state.images, upload, "news").await?);
    }

    let item = state.repo.create_news(req).await?;
    tracing::info!(id = %item.id, "news item created");
    Ok(response::created("News created successfully", item))
}

/// update_news
///
/// [Authenticated Route] Partially updates a news item from a multipart
/// form. Fields absent from the form keep their stored values.
#[utoipa::path(
    patch,
    path = "/api/news/{id}",
    params(("id" = Uuid, Path, description = "News ID")),
    responses(
        (status = 200, description = "News updated successfully", body = News),
        (status = 404, description = "News not found")
    )
)]
pub async fn update_news(
    _admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let existing = state
        .repo
        .find_news_item(id)
        .await?
        .ok_or_else(|| ApiError::not_found("News not found"))?;

    let form = read_form(multipart).await?;
    let mut patch = UpdateNewsRequest {
        title: form.optional("title"),
        content: form.optional("content"),
        photo: form.optional("photo"),
        status: form.optional_parsed("status")?,
    };

    if let Some(upload) = form.photo {
        patch.photo = Some(upload_photo(&state.images, upload, "news").await?);
    }

    let merged = patch.merge(&existing);
    let updated = state
        .repo
        .update_news(id, merged)
        .await?
        .ok_or_else(|| ApiError::not_found("News not found"))?;
    Ok(response::ok("News updated successfully", updated))
}

/// delete_news
///
/// [Authenticated Route] Deletes a news item.
#[utoipa::path(
    delete,
    path = "/api/news/{id}",
    params(("id" = Uuid, Path, description = "News ID")),
    responses(
        (status = 200, description = "News deleted successfully"),
        (status = 404, description = "News not found")
    )
)]
pub async fn delete_news(
    _admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    state
        .repo
        .find_news_item(id)
        .await?
        .ok_or_else(|| ApiError::not_found("News not found"))?;

    state.repo.delete_news(id).await?;
    Ok(response::ok_message("News deleted successfully"))
}

/// news_total_count
///
/// [Authenticated Route] Total number of news items, for the dashboard.
#[utoipa::path(
    get,
    path = "/api/news/stats/total-count",
    responses((status = 200, description = "Total news count retrieved successfully", body = CountResponse))
)]
pub async fn news_total_count(
    _admin: AuthAdmin,
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    let count = state.repo.news_count().await?;
    Ok(response::ok(
        "Total news count retrieved successfully",
        CountResponse { count },
    ))
}

/// news_published_count
///
/// [Authenticated Route] Number of PUBLISHED news items, for the dashboard.
#[utoipa::path(
    get,
    path = "/api/news/stats/published-count",
    responses((status = 200, description = "Published news count retrieved successfully", body = CountResponse))
)]
pub async fn news_published_count(
    _admin: AuthAdmin,
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    let count = state.repo.published_news_count().await?;
    Ok(response::ok(
        "Published news count retrieved successfully",
        CountResponse { count },
    ))
}
