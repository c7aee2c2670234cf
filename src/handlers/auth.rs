use axum::{Json, extract::State, response::Response};

use crate::{
    AppState,
    auth::{issue_token, verify_password},
    models::{LoginRequest, TokenResponse, UserStatus},
    response::{self, ApiError},
};

/// login_admin
///
/// [Public Route] Authenticates an admin by email and password and issues a
/// one-hour bearer token.
///
/// The same `Unauthorized` answer covers an unknown email and a wrong
/// password, so the endpoint does not leak which admin accounts exist. An
/// inactive account is rejected regardless of the password.
#[utoipa::path(
    post,
    path = "/api/auth/login/admin",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Admin logged in successfully", body = TokenResponse),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn login_admin(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    tracing::info!(email = %payload.email, "admin login attempt");

    let admin = state
        .repo
        .find_admin_by_email(&payload.email)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid email or password"))?;

    if admin.status != UserStatus::Active {
        tracing::warn!(email = %payload.email, "login rejected: inactive account");
        return Err(ApiError::unauthorized("Admin account is inactive"));
    }

    if !verify_password(&payload.password, &admin.password_hash) {
        tracing::warn!(email = %payload.email, "login rejected: password mismatch");
        return Err(ApiError::unauthorized("Invalid email or password"));
    }

    let token = issue_token(&state.config.jwt_secret, admin.id, &admin.email)
        .map_err(|e| ApiError::Internal(format!("token signing failed: {e}")))?;

    tracing::info!(email = %payload.email, "admin login successful");
    Ok(response::ok(
        "Admin logged in successfully",
        TokenResponse { token },
    ))
}
