//! Asset uploader - external image hosting boundary.
//!
//! Single-attempt, no retry: a failed upload inside a provisioning
//! transaction aborts the whole transaction. There is no
//! "create without photo" fallback once an image was supplied.

use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Raw image handed over by the HTTP layer
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub file_name: String,
    pub content: Vec<u8>,
}

/// Stable reference returned by the asset store
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedAsset {
    pub url: String,
}

/// Asset uploader trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AssetUploader: Send + Sync {
    /// Upload image bytes under the given name, returning its reference URL
    async fn upload(&self, name: &str, content: Vec<u8>) -> AppResult<UploadedAsset>;
}

/// HTTP-backed asset uploader posting multipart bodies to the configured
/// endpoint.
pub struct HttpAssetUploader {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAssetUploader {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl AssetUploader for HttpAssetUploader {
    async fn upload(&self, name: &str, content: Vec<u8>) -> AppResult<UploadedAsset> {
        let part = reqwest::multipart::Part::bytes(content).file_name(name.to_string());
        let form = reqwest::multipart::Form::new()
            .text("name", name.to_string())
            .part("file", part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::upload(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::upload(format!(
                "asset store returned {}",
                response.status()
            )));
        }

        response
            .json::<UploadedAsset>()
            .await
            .map_err(|e| AppError::upload(format!("malformed asset store response: {}", e)))
    }
}
