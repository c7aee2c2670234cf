use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

/// NewsStatus
///
/// Publication state of a news item. Only PUBLISHED items appear on the
/// public `/api/news/published` listing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, sqlx::Type, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum NewsStatus {
    #[default]
    Draft,
    Published,
}

impl FromStr for NewsStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(Self::Draft),
            "PUBLISHED" => Ok(Self::Published),
            other => Err(format!("invalid status: {other}")),
        }
    }
}

/// News
///
/// A school news item from the `news` table.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct News {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Hosted photo URL.
    pub photo: Option<String>,
    pub status: NewsStatus,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// CreateNewsRequest
///
/// The full column set written on news create and (after merging) update.
/// Assembled from a multipart form; `photo` already holds the hosted URL by
/// the time the repository sees it.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateNewsRequest {
    pub title: String,
    pub content: String,
    pub photo: Option<String>,
    pub status: NewsStatus,
}

/// UpdateNewsRequest
///
/// Partial update payload (PATCH /api/news/{id}). Fields left out of the
/// form keep their stored values.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateNewsRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub photo: Option<String>,
    pub status: Option<NewsStatus>,
}

impl UpdateNewsRequest {
    /// Merges this patch over the existing record, producing the complete
    /// column set to persist. Absent fields keep their stored values.
    pub fn merge(&self, existing: &News) -> CreateNewsRequest {
        CreateNewsRequest {
            title: self.title.clone().unwrap_or_else(|| existing.title.clone()),
            content: self
                .content
                .clone()
                .unwrap_or_else(|| existing.content.clone()),
            photo: self.photo.clone().or_else(|| existing.photo.clone()),
            status: self.status.unwrap_or(existing.status),
        }
    }
}
