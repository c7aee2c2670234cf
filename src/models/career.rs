use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

/// Career
///
/// A job posting from the `careers` table, published on the school's
/// careers page.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Career {
    pub id: Uuid,
    pub title: String,
    pub requirements: Option<String>,
    pub job_description: Option<String>,
    pub location: Option<String>,
    pub benefits: Option<String>,
    /// Application deadline, midnight UTC of the submitted date.
    #[ts(type = "string | null")]
    pub deadline: Option<DateTime<Utc>>,
    /// Hosted poster URL.
    pub photo: Option<String>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// CreateCareerRequest
///
/// The full column set written on career create and (after merging) update.
/// Assembled from a multipart form; `photo` already holds the hosted URL by
/// the time the repository sees it.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateCareerRequest {
    pub title: String,
    pub requirements: Option<String>,
    pub job_description: Option<String>,
    pub location: Option<String>,
    pub benefits: Option<String>,
    #[ts(type = "string | null")]
    pub deadline: Option<DateTime<Utc>>,
    pub photo: Option<String>,
}

/// UpdateCareerRequest
///
/// Partial update payload (PATCH /api/careers/{id}). Fields left out of the
/// form keep their stored values.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateCareerRequest {
    pub title: Option<String>,
    pub requirements: Option<String>,
    pub job_description: Option<String>,
    pub location: Option<String>,
    pub benefits: Option<String>,
    #[ts(type = "string | null")]
    pub deadline: Option<DateTime<Utc>>,
    pub photo: Option<String>,
}

impl UpdateCareerRequest {
    /// Merges this patch over the existing record, producing the complete
    /// column set to persist. Absent fields keep their stored values.
    pub fn merge(&self, existing: &Career) -> CreateCareerRequest {
        CreateCareerRequest {
            title: self.title.clone().unwrap_or_else(|| existing.title.clone()),
            requirements: self
                .requirements
                .clone()
                .or_else(|| existing.requirements.clone()),
            job_description: self
                .job_description
                .clone()
                .or_else(|| existing.job_description.clone()),
            location: self.location.clone().or_else(|| existing.location.clone()),
            benefits: self.benefits.clone().or_else(|| existing.benefits.clone()),
            deadline: self.deadline.or(existing.deadline),
            photo: self.photo.clone().or_else(|| existing.photo.clone()),
        }
    }
}
