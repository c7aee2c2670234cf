use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

/// ImageUpload
///
/// A file part pulled out of a multipart request body, ready to be pushed
/// to the image host.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Client-supplied file name, only used for logging.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Failures of the remote image-hosting API. Uploads are never retried; a
/// failure aborts the write that requested it.
#[derive(Debug, thiserror::Error)]
pub enum ImageHostError {
    #[error("image host request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("image host rejected upload: {0}")]
    Rejected(String),
}

/// ImageHost Contract
///
/// The abstract contract for pushing photos to the remote image-hosting
/// service. Lets handlers stay independent of the concrete client, and the
/// tests swap in [`MockImageHost`].
#[async_trait]
pub trait ImageHost: Send + Sync {
    /// Uploads the file bytes under the given remote name and returns the
    /// public URL of the hosted image.
    async fn upload(&self, bytes: Vec<u8>, file_name: &str) -> Result<String, ImageHostError>;
}

/// ImageHostState
///
/// The concrete type used to share the image-host client across the
/// application state.
pub type ImageHostState = Arc<dyn ImageHost>;

/// The fields of the upload response we care about.
#[derive(Deserialize)]
struct UploadResponse {
    url: String,
}

/// ImageKitClient
///
/// The concrete implementation backed by the ImageKit upload REST API:
/// a multipart POST authenticated with the private API key, answering with
/// the hosted file's metadata.
#[derive(Clone)]
pub struct ImageKitClient {
    http: reqwest::Client,
    upload_url: String,
    private_key: String,
    folder: String,
}

impl ImageKitClient {
    /// Constructs the client from the credentials resolved by AppConfig.
    pub fn new(upload_url: &str, private_key: &str, folder: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            upload_url: upload_url.to_string(),
            private_key: private_key.to_string(),
            folder: folder.to_string(),
        }
    }
}

#[async_trait]
impl ImageHost for ImageKitClient {
    async fn upload(&self, bytes: Vec<u8>, file_name: &str) -> Result<String, ImageHostError> {
        let form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string()),
            )
            .text("fileName", file_name.to_string())
            .text("folder", self.folder.clone());

        let response = self
            .http
            .post(&self.upload_url)
            // ImageKit authenticates with the private key as the basic-auth
            // username and an empty password.
            .basic_auth(&self.private_key, Some(""))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ImageHostError::Rejected(format!("{status}: {body}")));
        }

        let uploaded = response.json::<UploadResponse>().await?;
        Ok(uploaded.url)
    }
}

/// MockImageHost
///
/// A mock implementation used exclusively in tests, so handler logic can be
/// exercised without a network connection to the image host.
#[derive(Clone, Default)]
pub struct MockImageHost {
    /// When true, all uploads return a simulated failure.
    pub should_fail: bool,
}

impl MockImageHost {
    pub fn new() -> Self {
        Self { should_fail: false }
    }

    pub fn new_failing() -> Self {
        Self { should_fail: true }
    }
}

#[async_trait]
impl ImageHost for MockImageHost {
    async fn upload(&self, _bytes: Vec<u8>, file_name: &str) -> Result<String, ImageHostError> {
        if self.should_fail {
            return Err(ImageHostError::Rejected(
                "mock image host: simulated failure".to_string(),
            ));
        }
        // Deterministic URL for mock assertions.
        Ok(format!("https://images.example.com/mock/{file_name}"))
    }
}
