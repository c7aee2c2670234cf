use axum::{
    Json,
    extract::{Path, Query, State},
    response::Response,
};
use uuid::Uuid;

use crate::{
    AppState,
    auth::AuthAdmin,
    models::{CreateSocialMediaRequest, SocialMedia, UpdateSocialMediaRequest},
    pagination::PageQuery,
    response::{self, ApiError},
};

use super::page_window;

/// list_social_media
///
/// [Public Route] Paginated listing of the school's social-media links.
#[utoipa::path(
    get,
    path = "/api/social-media",
    params(PageQuery),
    responses((status = 200, description = "Social media retrieved successfully"))
)]
pub async fn list_social_media(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Response, ApiError> {
    let window = page_window(&query)?;
    let page = state.repo.find_social_media(window).await?;
    Ok(response::ok("Social media retrieved successfully", page))
}

/// get_social_media
///
/// [Public Route] Retrieves a single social-media link by ID.
#[utoipa::path(
    get,
    path = "/api/social-media/{id}",
    params(("id" = Uuid, Path, description = "Social media ID")),
    responses(
        (status = 200, description = "Social media retrieved successfully", body = SocialMedia),
        (status = 404, description = "Social media not found")
    )
)]
pub async fn get_social_media(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let link = state
        .repo
        .find_social_media_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Social media not found"))?;
    Ok(response::ok("Social media retrieved successfully", link))
}

/// create_social_media
///
/// [Authenticated Route] Adds a social-media link.
#[utoipa::path(
    post,
    path = "/api/social-media",
    request_body = CreateSocialMediaRequest,
    responses((status = 201, description = "Social media created successfully", body = SocialMedia))
)]
pub async fn create_social_media(
    _admin: AuthAdmin,
    State(state): State<AppState>,
    Json(payload): Json<CreateSocialMediaRequest>,
) -> Result<Response, ApiError> {
    let link = state.repo.create_social_media(payload).await?;
    tracing::info!(id = %link.id, "social media link created");
    Ok(response::created(
        "Social media created successfully",
        link,
    ))
}

/// update_social_media
///
/// [Authenticated Route] Partially updates a social-media link. Fields
/// absent from the payload keep their stored values.
#[utoipa::path(
    patch,
    path = "/api/social-media/{id}",
    params(("id" = Uuid, Path, description = "Social media ID")),
    request_body = UpdateSocialMediaRequest,
    responses(
        (status = 200, description = "Social media updated successfully", body = SocialMedia),
        (status = 404, description = "Social media not found")
    )
)]
pub async fn update_social_media(
    _admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSocialMediaRequest>,
) -> Result<Response, ApiError> {
    let existing = state
        .repo
        .find_social_media_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Social media not found"))?;

    let merged = payload.merge(&existing);
    let updated = state
        .repo
        .update_social_media(id, merged)
        .await?
        .ok_or_else(|| ApiError::not_found("Social media not found"))?;
    Ok(response::ok("Social media updated successfully", updated))
}

/// delete_social_media
///
/// [Authenticated Route] Removes a social-media link.
#[utoipa::path(
    delete,
    path = "/api/social-media/{id}",
    params(("id" = Uuid, Path, description = "Social media ID")),
    responses(
        (status = 200, description = "Social media deleted successfully"),
        (status = 404, description = "Social media not found")
    )
)]
pub async fn delete_social_media(
    _admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    state
        .repo
        .find_social_media_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Social media not found"))?;

    state.repo.delete_social_media(id).await?;
    Ok(response::ok_message("Social media deleted successfully"))
}
