use serde::{Deserialize, Serialize};
use std::str::FromStr;
use ts_rs::TS;
use utoipa::ToSchema;

// --- Entity Modules ---

mod admin;
mod career;
mod news;
mod social_media;
mod student;
mod teacher;

pub use admin::{
    Admin, AdminResponse, CreateAdminRequest, LoginRequest, NewAdmin, TokenResponse,
    UpdateAdminRequest,
};
pub use career::{Career, CreateCareerRequest, UpdateCareerRequest};
pub use news::{CreateNewsRequest, News, NewsStatus, UpdateNewsRequest};
pub use social_media::{CreateSocialMediaRequest, SocialMedia, UpdateSocialMediaRequest};
pub use student::{CreateStudentRequest, Student, UpdateStudentRequest};
pub use teacher::{CreateTeacherRequest, Teacher, UpdateTeacherRequest};

// --- Shared Enumerations ---

/// AdminRole
///
/// The RBAC field on admin accounts. Stored as its string representation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, sqlx::Type, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum AdminRole {
    #[default]
    Admin,
    SuperAdmin,
}

/// UserStatus
///
/// Account/employment status shared by admins and teachers. Stored as its
/// string representation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, sqlx::Type, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(Self::Active),
            "INACTIVE" => Ok(Self::Inactive),
            other => Err(format!("invalid status: {other}")),
        }
    }
}

impl FromStr for AdminRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Self::Admin),
            "SUPER_ADMIN" => Ok(Self::SuperAdmin),
            other => Err(format!("invalid role: {other}")),
        }
    }
}

/// CountResponse
///
/// Scalar payload of the `/stats/...` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CountResponse {
    pub count: i64,
}
