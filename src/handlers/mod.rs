use axum::extract::Multipart;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashMap;
use std::str::FromStr;
use uuid::Uuid;

use crate::images::{ImageHostState, ImageUpload};
use crate::pagination::{PageQuery, PageWindow};
use crate::response::ApiError;

pub mod admins;
pub mod auth;
pub mod careers;
pub mod news;
pub mod social_media;
pub mod students;
pub mod teachers;

/// Resolves and validates the pagination query parameters. Rejected input
/// never reaches a repository query.
pub(crate) fn page_window(query: &PageQuery) -> Result<PageWindow, ApiError> {
    query
        .window()
        .map_err(|_| ApiError::validation("Invalid pagination parameters"))
}

/// FormFields
///
/// The decoded content of a multipart request body: text fields by name,
/// plus the optional photo file part.
pub(crate) struct FormFields {
    values: HashMap<String, String>,
    pub photo: Option<ImageUpload>,
}

/// Drains a multipart body into [`FormFields`]. A part named `photo` that
/// carries a file name is treated as the photo upload; everything else is
/// read as text.
pub(crate) async fn read_form(mut multipart: Multipart) -> Result<FormFields, ApiError> {
    let mut values = HashMap::new();
    let mut photo = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::validation("Malformed multipart body"))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == "photo" && field.file_name().is_some() {
            let file_name = field
                .file_name()
                .unwrap_or("photo")
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|_| ApiError::validation("Malformed multipart body"))?;
            if !bytes.is_empty() {
                photo = Some(ImageUpload {
                    file_name,
                    bytes: bytes.to_vec(),
                });
            }
        } else {
            let text = field
                .text()
                .await
                .map_err(|_| ApiError::validation("Malformed multipart body"))?;
            values.insert(name, text);
        }
    }

    Ok(FormFields { values, photo })
}

impl FormFields {
    /// A mandatory text field; missing or empty input is a validation error.
    pub fn required(&self, name: &str) -> Result<String, ApiError> {
        self.optional(name)
            .ok_or_else(|| ApiError::validation(format!("Field '{name}' is required")))
    }

    /// An optional text field. Empty strings count as absent.
    pub fn optional(&self, name: &str) -> Option<String> {
        self.values
            .get(name)
            .filter(|value| !value.is_empty())
            .cloned()
    }

    /// A mandatory field parsed into its typed form (enums, numbers).
    pub fn required_parsed<T: FromStr>(&self, name: &str) -> Result<T, ApiError> {
        parse_field(name, &self.required(name)?)
    }

    /// An optional field parsed into its typed form. Present-but-invalid
    /// input is still a validation error.
    pub fn optional_parsed<T: FromStr>(&self, name: &str) -> Result<Option<T>, ApiError> {
        self.optional(name)
            .map(|value| parse_field(name, &value))
            .transpose()
    }

    /// A mandatory timestamp field, see [`parse_datetime`].
    pub fn required_datetime(&self, name: &str) -> Result<DateTime<Utc>, ApiError> {
        parse_datetime(name, &self.required(name)?)
    }

    /// An optional timestamp field.
    pub fn optional_datetime(&self, name: &str) -> Result<Option<DateTime<Utc>>, ApiError> {
        self.optional(name)
            .map(|value| parse_datetime(name, &value))
            .transpose()
    }
}

fn parse_field<T: FromStr>(name: &str, value: &str) -> Result<T, ApiError> {
    value
        .parse()
        .map_err(|_| ApiError::validation(format!("Invalid value for field '{name}'")))
}

/// Parses a form timestamp: RFC 3339, or a bare `YYYY-MM-DD` date taken as
/// midnight UTC.
pub(crate) fn parse_datetime(name: &str, value: &str) -> Result<DateTime<Utc>, ApiError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_time(chrono::NaiveTime::MIN).and_utc())
        .map_err(|_| ApiError::validation(format!("Invalid value for field '{name}'")))
}

/// Pushes an uploaded photo to the image host under a unique remote name
/// and returns the hosted URL. A failure here aborts the write that
/// requested it.
pub(crate) async fn upload_photo(
    images: &ImageHostState,
    upload: ImageUpload,
    prefix: &str,
) -> Result<String, ApiError> {
    let remote_name = format!("{prefix}-{}", Uuid::new_v4());
    tracing::info!(file = %upload.file_name, remote = %remote_name, "uploading photo");
    Ok(images.upload(upload.bytes, &remote_name).await?)
}
