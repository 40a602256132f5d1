//! File upload to `<upload base>/upload/<category>`.
//!
//! The returned reference is only written into the owning input; it is
//! persisted when that input is submitted.

use std::path::Path;

use async_trait::async_trait;
use common::AssetCategory;
use models::AssetField;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::api::ApiClient;
use crate::errors::ApiError;

/// A file read into memory, ready to be sent as the `file` part.
#[derive(Clone, Debug)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime: Option<String>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { file_name: file_name.into(), bytes, mime: None }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(file_name, bytes))
    }
}

#[async_trait]
pub trait Uploader: Send + Sync {
    /// Single round trip; returns the server-provided reference.
    async fn upload(&self, category: AssetCategory, file: UploadFile) -> Result<String, ApiError>;
}

/// Upload `file` into the category of `I` and store the reference on `input`.
pub async fn upload_into<I, U>(uploader: &U, input: &mut I, file: UploadFile) -> Result<String, ApiError>
where
    I: AssetField,
    U: Uploader + ?Sized,
{
    let reference = uploader.upload(I::CATEGORY, file).await?;
    input.set_asset(reference.clone());
    Ok(reference)
}

/// Pull a non-empty string `url` out of an upload response body.
pub(crate) fn reference_from(body: &Value) -> Option<String> {
    body.get("url")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(str::to_string)
}

#[async_trait]
impl Uploader for ApiClient {
    #[instrument(skip(self, file), fields(file = %file.file_name, size = file.bytes.len()))]
    async fn upload(&self, category: AssetCategory, file: UploadFile) -> Result<String, ApiError> {
        let mut part = Part::bytes(file.bytes).file_name(file.file_name);
        if let Some(mime) = file.mime.as_deref() {
            part = part.mime_str(mime).map_err(|e| ApiError::Upload(Some(e.to_string())))?;
        }
        let url = format!("{}/upload/{}", self.upload_base(), category);

        let response = self
            .http()
            .post(url)
            .multipart(Form::new().part("file", part))
            .send()
            .await
            .map_err(|e| {
                warn!(op = "upload", error = %e, "request failed");
                ApiError::Upload(Some(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(op = "upload", status = status.as_u16(), "non-success response");
            return Err(ApiError::Upload(Some(format!("status {}", status.as_u16()))));
        }
        let body: Value = response.json().await.map_err(|e| ApiError::Upload(Some(e.to_string())))?;
        let reference = reference_from(&body).ok_or_else(|| {
            warn!(op = "upload", %body, "response without url");
            ApiError::Upload(Some("response has no url".into()))
        })?;
        info!(%category, %reference, "uploaded");
        Ok(reference)
    }
}
