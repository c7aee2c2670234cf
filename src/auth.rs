use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use chrono::Utc;
use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    config::{AppConfig, Env},
    models::{AdminRole, UserStatus},
    repository::RepositoryState,
    response::ApiError,
};

/// Lifetime of an issued admin token.
pub const TOKEN_TTL_SECS: i64 = 3600;

/// Claims
///
/// The payload structure carried inside an admin JWT. Signed with the
/// server's secret and validated on every protected request.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (sub): the admin's UUID, used to re-resolve the account on
    /// each request.
    pub sub: Uuid,
    /// Email at the time of issue.
    pub email: String,
    /// Expiration time (exp): seconds since epoch after which the token is
    /// rejected.
    pub exp: usize,
    /// Issued at (iat).
    pub iat: usize,
}

/// Signs a token for a successfully authenticated admin. The token expires
/// one hour after issue.
pub fn issue_token(
    secret: &str,
    admin_id: Uuid,
    email: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let iat = Utc::now().timestamp();
    let claims = Claims {
        sub: admin_id,
        email: email.to_string(),
        iat: iat as usize,
        exp: (iat + TOKEN_TTL_SECS) as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Hashes a plaintext password into an argon2 PHC string with a fresh
/// random salt.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ApiError::Internal(format!("password hashing failed: {e}")))
}

/// Verifies a plaintext password against a stored hash. The comparison runs
/// in constant time inside the argon2 verifier; any malformed stored hash
/// counts as a mismatch.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// AuthAdmin
///
/// The resolved identity of an authenticated request. Handlers receive this
/// struct to identify the caller and verify permissions.
#[derive(Debug, Clone)]
pub struct AuthAdmin {
    pub id: Uuid,
    pub email: String,
    /// RBAC field used by [`require_role`].
    pub role: AdminRole,
}

/// Compares the authenticated identity against a route's required role and
/// returns the allow/deny decision.
pub fn require_role(admin: &AuthAdmin, required: AdminRole) -> Result<(), ApiError> {
    if admin.role == required {
        Ok(())
    } else {
        Err(ApiError::forbidden("Super Admin access required"))
    }
}

/// AuthAdmin Extractor Implementation
///
/// Implements Axum's `FromRequestParts`, making `AuthAdmin` usable as an
/// argument of any protected handler and as the gate of the route-level
/// auth middleware. The flow:
/// 1. Dependency resolution: repository and config from the app state.
/// 2. Local bypass: the `x-admin-id` header authenticates a known account
///    when running in `Env::Local`.
/// 3. Token validation: Bearer extraction, signature and expiry checks.
/// 4. Database lookup: the account must still exist and be ACTIVE.
///
/// Rejection: 401 in the uniform envelope on any failure.
impl<S> FromRequestParts<S> for AuthAdmin
where
    S: Send + Sync,
    RepositoryState: FromRef<S>,
    AppConfig: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let repo = RepositoryState::from_ref(state);
        let config = AppConfig::from_ref(state);

        // Development bypass, only honored in Env::Local: a valid admin UUID
        // in the x-admin-id header stands in for a signed token. The account
        // is still resolved from the database so the real role applies.
        if config.env == Env::Local {
            if let Some(header_value) = parts.headers.get("x-admin-id") {
                if let Ok(id_str) = header_value.to_str() {
                    if let Ok(admin_id) = Uuid::parse_str(id_str) {
                        if let Ok(Some(admin)) = repo.find_admin(admin_id).await {
                            if admin.status == UserStatus::Active {
                                return Ok(AuthAdmin {
                                    id: admin.id,
                                    email: admin.email,
                                    role: admin.role,
                                });
                            }
                        }
                    }
                }
            }
        }

        // Standard Bearer token flow.
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Missing authorization token"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::unauthorized("Missing authorization token"))?;

        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());
        let mut validation = Validation::default();
        validation.validate_exp = true;

        let token_data = match decode::<Claims>(token, &decoding_key, &validation) {
            Ok(data) => data,
            Err(e) => {
                return Err(match e.kind() {
                    ErrorKind::ExpiredSignature => ApiError::unauthorized("Token has expired"),
                    _ => ApiError::unauthorized("Invalid authorization token"),
                });
            }
        };

        // Final verification against the database. A token for a deleted or
        // deactivated account is worthless regardless of its signature.
        let admin = repo
            .find_admin(token_data.claims.sub)
            .await?
            .ok_or_else(|| ApiError::unauthorized("Invalid authorization token"))?;

        if admin.status != UserStatus::Active {
            return Err(ApiError::unauthorized("Admin account is inactive"));
        }

        Ok(AuthAdmin {
            id: admin.id,
            email: admin.email,
            role: admin.role,
        })
    }
}
