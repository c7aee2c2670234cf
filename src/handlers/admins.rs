use axum::{
    Json,
    extract::{Path, Query, State},
    response::Response,
};
use uuid::Uuid;

use crate::{
    AppState,
    auth::{AuthAdmin, hash_password, require_role},
    models::{
        AdminResponse, AdminRole, CountResponse, CreateAdminRequest, NewAdmin, UpdateAdminRequest,
        UserStatus,
    },
    pagination::PageQuery,
    response::{self, ApiError},
};

use super::page_window;

/// list_admins
///
/// [Super Admin Route] Paginated listing of all admin accounts.
#[utoipa::path(
    get,
    path = "/api/admins",
    params(PageQuery),
    responses(
        (status = 200, description = "Admins retrieved successfully"),
        (status = 403, description = "Super Admin access required")
    )
)]
pub async fn list_admins(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Response, ApiError> {
    require_role(&admin, AdminRole::SuperAdmin)?;
    let window = page_window(&query)?;

    let page = state.repo.find_admins(window).await?;
    Ok(response::ok(
        "Admins retrieved successfully",
        page.map(AdminResponse::from),
    ))
}

/// get_admin
///
/// [Super Admin Route] Retrieves a single admin account by ID.
#[utoipa::path(
    get,
    path = "/api/admins/{id}",
    params(("id" = Uuid, Path, description = "Admin ID")),
    responses(
        (status = 200, description = "Admin retrieved successfully", body = AdminResponse),
        (status = 404, description = "Admin not found")
    )
)]
pub async fn get_admin(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    require_role(&admin, AdminRole::SuperAdmin)?;

    let found = state
        .repo
        .find_admin(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Admin not found"))?;
    Ok(response::ok(
        "Admin retrieved successfully",
        AdminResponse::from(found),
    ))
}

/// create_admin
///
/// [Super Admin Route] Creates a new admin account. The email must not be
/// in use by any existing account; the password is hashed before it reaches
/// the repository.
#[utoipa::path(
    post,
    path = "/api/admins",
    request_body = CreateAdminRequest,
    responses(
        (status = 201, description = "Admin created successfully", body = AdminResponse),
        (status = 409, description = "Admin with this email already exists")
    )
)]
pub async fn create_admin(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Json(payload): Json<CreateAdminRequest>,
) -> Result<Response, ApiError> {
    require_role(&admin, AdminRole::SuperAdmin)?;

    if state
        .repo
        .find_admin_by_email(&payload.email)
        .await?
        .is_some()
    {
        return Err(ApiError::conflict("Admin with this email already exists"));
    }

    let new = NewAdmin {
        name: payload.name,
        email: payload.email,
        password_hash: hash_password(&payload.password)?,
        role: payload.role,
        status: payload.status.unwrap_or(UserStatus::Active),
    };

    let created = state.repo.create_admin(new).await?;
    tracing::info!(id = %created.id, "admin account created");
    Ok(response::created(
        "Admin created successfully",
        AdminResponse::from(created),
    ))
}

/// update_admin
///
/// [Super Admin Route] Partially updates an admin account. Fields absent
/// from the payload keep their stored values.
///
/// Self-protection: an admin cannot change their own `role`, so privileges
/// can never be self-escalated. The check compares the token identity
/// against the target ID and rejects before anything is persisted.
#[utoipa::path(
    patch,
    path = "/api/admins/{id}",
    params(("id" = Uuid, Path, description = "Admin ID")),
    request_body = UpdateAdminRequest,
    responses(
        (status = 200, description = "Admin updated successfully", body = AdminResponse),
        (status = 400, description = "Attempted to change own role"),
        (status = 404, description = "Admin not found"),
        (status = 409, description = "Email already taken by another admin")
    )
)]
pub async fn update_admin(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAdminRequest>,
) -> Result<Response, ApiError> {
    require_role(&admin, AdminRole::SuperAdmin)?;

    let existing = state
        .repo
        .find_admin(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Admin not found"))?;

    if admin.id == id && payload.role.is_some_and(|role| role != existing.role) {
        return Err(ApiError::validation("You cannot change your own role"));
    }

    // Email uniqueness only matters when the address actually changes.
    if let Some(email) = &payload.email {
        if email != &existing.email
            && state.repo.find_admin_by_email(email).await?.is_some()
        {
            return Err(ApiError::conflict("Email already taken by another admin"));
        }
    }

    let password_hash = payload
        .password
        .as_deref()
        .map(hash_password)
        .transpose()?;

    let merged = payload.merge(&existing, password_hash);
    let updated = state
        .repo
        .update_admin(id, merged)
        .await?
        .ok_or_else(|| ApiError::not_found("Admin not found"))?;

    tracing::info!(id = %updated.id, "admin account updated");
    Ok(response::ok(
        "Admin updated successfully",
        AdminResponse::from(updated),
    ))
}

/// delete_admin
///
/// [Super Admin Route] Deletes an admin account.
///
/// Self-protection: an admin cannot delete their own account. The check
/// short-circuits before the account is even looked up.
#[utoipa::path(
    delete,
    path = "/api/admins/{id}",
    params(("id" = Uuid, Path, description = "Admin ID")),
    responses(
        (status = 200, description = "Admin deleted successfully"),
        (status = 400, description = "Attempted to delete own account"),
        (status = 404, description = "Admin not found")
    )
)]
pub async fn delete_admin(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    require_role(&admin, AdminRole::SuperAdmin)?;

    if admin.id == id {
        return Err(ApiError::validation("You cannot delete your own account"));
    }

    state
        .repo
        .find_admin(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Admin not found"))?;

    state.repo.delete_admin(id).await?;
    tracing::info!(%id, "admin account deleted");
    Ok(response::ok_message("Admin deleted successfully"))
}

/// admin_registered_count
///
/// [Super Admin Route] Total number of admin accounts, for the dashboard.
#[utoipa::path(
    get,
    path = "/api/admins/stats/registered-count",
    responses(
        (status = 200, description = "Registered admins count retrieved successfully", body = CountResponse),
        (status = 403, description = "Super Admin access required")
    )
)]
pub async fn admin_registered_count(
    admin: AuthAdmin,
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    require_role(&admin, AdminRole::SuperAdmin)?;

    let count = state.repo.admin_count().await?;
    Ok(response::ok(
        "Registered admins count retrieved successfully",
        CountResponse { count },
    ))
}
