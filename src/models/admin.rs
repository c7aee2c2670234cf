use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{AdminRole, UserStatus};

/// Admin
///
/// The canonical admin account row from the `admins` table. Carries the
/// password hash, so this struct is never serialized onto the wire; handlers
/// convert it into [`AdminResponse`] first.
#[derive(Debug, Clone, FromRow, Default)]
pub struct Admin {
    pub id: Uuid,
    pub name: String,
    // Unique across all admin accounts.
    pub email: String,
    /// Argon2 PHC string, stored in the `password` column.
    #[sqlx(rename = "password")]
    pub password_hash: String,
    pub role: AdminRole,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// AdminResponse
///
/// The wire representation of an admin account, without the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct AdminResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: AdminRole,
    pub status: UserStatus,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

impl From<Admin> for AdminResponse {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id,
            name: admin.name,
            email: admin.email,
            role: admin.role,
            status: admin.status,
            created_at: admin.created_at,
            updated_at: admin.updated_at,
        }
    }
}

/// NewAdmin
///
/// The full column set persisted on admin create and update. The password
/// is already hashed by the time this struct exists.
#[derive(Debug, Clone, Default)]
pub struct NewAdmin {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: AdminRole,
    pub status: UserStatus,
}

/// CreateAdminRequest
///
/// Input payload for creating an admin account (POST /api/admins).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateAdminRequest {
    pub name: String,
    pub email: String,
    /// Plaintext password; hashed before it reaches the repository.
    pub password: String,
    pub role: AdminRole,
    /// Defaults to ACTIVE when omitted.
    pub status: Option<UserStatus>,
}

/// UpdateAdminRequest
///
/// Partial update payload for an admin account (PATCH /api/admins/{id}).
/// Fields left out of the request keep their stored values.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateAdminRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<AdminRole>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}

impl UpdateAdminRequest {
    /// Merges this patch over the existing record, producing the complete
    /// column set to persist. `password_hash` is the freshly hashed value
    /// when the patch carried a new password, `None` otherwise.
    pub fn merge(&self, existing: &Admin, password_hash: Option<String>) -> NewAdmin {
        NewAdmin {
            name: self.name.clone().unwrap_or_else(|| existing.name.clone()),
            email: self.email.clone().unwrap_or_else(|| existing.email.clone()),
            password_hash: password_hash.unwrap_or_else(|| existing.password_hash.clone()),
            role: self.role.unwrap_or(existing.role),
            status: self.status.unwrap_or(existing.status),
        }
    }
}

/// LoginRequest
///
/// Input payload for POST /api/auth/login/admin.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// TokenResponse
///
/// Payload returned by a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct TokenResponse {
    pub token: String,
}
