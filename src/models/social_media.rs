use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

/// SocialMedia
///
/// A social-media link shown in the public site footer, from the
/// `social_media` table.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct SocialMedia {
    pub id: Uuid,
    pub name: String,
    pub link: String,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// CreateSocialMediaRequest
///
/// Input payload for POST /api/social-media. Also the full column set
/// written on update, after merging.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateSocialMediaRequest {
    pub name: String,
    pub link: String,
}

/// UpdateSocialMediaRequest
///
/// Partial update payload (PATCH /api/social-media/{id}).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateSocialMediaRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl UpdateSocialMediaRequest {
    /// Merges this patch over the existing record. Absent fields keep their
    /// stored values.
    pub fn merge(&self, existing: &SocialMedia) -> CreateSocialMediaRequest {
        CreateSocialMediaRequest {
            name: self.name.clone().unwrap_or_else(|| existing.name.clone()),
            link: self.link.clone().unwrap_or_else(|| existing.link.clone()),
        }
    }
}
