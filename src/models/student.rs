use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

/// Student
///
/// A student registration record from the `students` table. Created through
/// the public enrollment form; managed afterwards by super admins only.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub gender: String,
    pub place_of_birth: String,
    #[ts(type = "string")]
    pub date_of_birth: DateTime<Utc>,
    pub address: String,
    pub phone_number: String,
    // School the applicant graduated from.
    pub from_school: String,
    pub graduation_year: i32,
    pub biological_father: String,
    pub biological_mother: String,
    pub father_condition: String,
    pub mother_condition: String,
    pub father_job: String,
    pub mother_job: String,
    pub parent_guardian_phone_number: String,
    pub major: String,
    pub recommendation_from: String,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// CreateStudentRequest
///
/// Input payload of the public registration endpoint (POST /api/students).
/// Also serves as the full column set written on update, after the partial
/// payload has been merged over the stored record.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateStudentRequest {
    pub name: String,
    pub gender: String,
    pub place_of_birth: String,
    #[ts(type = "string")]
    pub date_of_birth: DateTime<Utc>,
    pub address: String,
    pub phone_number: String,
    pub from_school: String,
    pub graduation_year: i32,
    pub biological_father: String,
    pub biological_mother: String,
    pub father_condition: String,
    pub mother_condition: String,
    pub father_job: String,
    pub mother_job: String,
    pub parent_guardian_phone_number: String,
    pub major: String,
    pub recommendation_from: String,
}

/// UpdateStudentRequest
///
/// Partial update payload (PATCH /api/students/{id}). Fields left out of the
/// request keep their stored values.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateStudentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_of_birth: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(type = "string | null")]
    pub date_of_birth: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_school: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub biological_father: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub biological_mother: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub father_condition: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mother_condition: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub father_job: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mother_job: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_guardian_phone_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation_from: Option<String>,
}

impl UpdateStudentRequest {
    /// Merges this patch over the existing record, producing the complete
    /// column set to persist. Absent fields keep their stored values.
    pub fn merge(&self, existing: &Student) -> CreateStudentRequest {
        CreateStudentRequest {
            name: self.name.clone().unwrap_or_else(|| existing.name.clone()),
            gender: self
                .gender
                .clone()
                .unwrap_or_else(|| existing.gender.clone()),
            place_of_birth: self
                .place_of_birth
                .clone()
                .unwrap_or_else(|| existing.place_of_birth.clone()),
            date_of_birth: self.date_of_birth.unwrap_or(existing.date_of_birth),
            address: self
                .address
                .clone()
                .unwrap_or_else(|| existing.address.clone()),
            phone_number: self
                .phone_number
                .clone()
                .unwrap_or_else(|| existing.phone_number.clone()),
            from_school: self
                .from_school
                .clone()
                .unwrap_or_else(|| existing.from_school.clone()),
            graduation_year: self.graduation_year.unwrap_or(existing.graduation_year),
            biological_father: self
                .biological_father
                .clone()
                .unwrap_or_else(|| existing.biological_father.clone()),
            biological_mother: self
                .biological_mother
                .clone()
                .unwrap_or_else(|| existing.biological_mother.clone()),
            father_condition: self
                .father_condition
                .clone()
                .unwrap_or_else(|| existing.father_condition.clone()),
            mother_condition: self
                .mother_condition
                .clone()
                .unwrap_or_else(|| existing.mother_condition.clone()),
            father_job: self
                .father_job
                .clone()
                .unwrap_or_else(|| existing.father_job.clone()),
            mother_job: self
                .mother_job
                .clone()
                .unwrap_or_else(|| existing.mother_job.clone()),
            parent_guardian_phone_number: self
                .parent_guardian_phone_number
                .clone()
                .unwrap_or_else(|| existing.parent_guardian_phone_number.clone()),
            major: self.major.clone().unwrap_or_else(|| existing.major.clone()),
            recommendation_from: self
                .recommendation_from
                .clone()
                .unwrap_or_else(|| existing.recommendation_from.clone()),
        }
    }
}
