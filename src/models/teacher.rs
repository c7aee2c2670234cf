use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

use super::UserStatus;

/// Teacher
///
/// A teaching-staff record from the `teachers` table, shown on the public
/// school website and managed by authenticated admins.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Teacher {
    pub id: Uuid,
    pub name: String,
    // Free-form "place, date" string as printed on staff documents.
    pub place_date_of_birth: String,
    pub status: UserStatus,
    #[ts(type = "string")]
    pub start_working_date: DateTime<Utc>,
    pub position: String,
    // Duty description (e.g. subject teacher, homeroom), not an RBAC role.
    pub role: String,
    /// National teacher registration number, when assigned.
    pub nuptk_nbm: Option<String>,
    pub education: String,
    /// Hosted photo URL.
    pub photo: Option<String>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// CreateTeacherRequest
///
/// The full column set written on teacher create and (after merging) update.
/// Assembled from a multipart form; `photo` already holds the hosted URL by
/// the time the repository sees it.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateTeacherRequest {
    pub name: String,
    pub place_date_of_birth: String,
    pub status: UserStatus,
    #[ts(type = "string")]
    pub start_working_date: DateTime<Utc>,
    pub position: String,
    pub role: String,
    pub nuptk_nbm: Option<String>,
    pub education: String,
    pub photo: Option<String>,
}

/// UpdateTeacherRequest
///
/// Partial update payload (PATCH /api/teachers/{id}). Fields left out of the
/// form keep their stored values.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateTeacherRequest {
    pub name: Option<String>,
    pub place_date_of_birth: Option<String>,
    pub status: Option<UserStatus>,
    #[ts(type = "string | null")]
    pub start_working_date: Option<DateTime<Utc>>,
    pub position: Option<String>,
    pub role: Option<String>,
    pub nuptk_nbm: Option<String>,
    pub education: Option<String>,
    pub photo: Option<String>,
}

impl UpdateTeacherRequest {
    /// Merges this patch over the existing record, producing the complete
    /// column set to persist. Absent fields keep their stored values.
    pub fn merge(&self, existing: &Teacher) -> CreateTeacherRequest {
        CreateTeacherRequest {
            name: self.name.clone().unwrap_or_else(|| existing.name.clone()),
            place_date_of_birth: self
                .place_date_of_birth
                .clone()
                .unwrap_or_else(|| existing.place_date_of_birth.clone()),
            status: self.status.unwrap_or(existing.status),
            start_working_date: self
                .start_working_date
                .unwrap_or(existing.start_working_date),
            position: self
                .position
                .clone()
                .unwrap_or_else(|| existing.position.clone()),
            role: self.role.clone().unwrap_or_else(|| existing.role.clone()),
            nuptk_nbm: self.nuptk_nbm.clone().or_else(|| existing.nuptk_nbm.clone()),
            education: self
                .education
                .clone()
                .unwrap_or_else(|| existing.education.clone()),
            photo: self.photo.clone().or_else(|| existing.photo.clone()),
        }
    }
}
