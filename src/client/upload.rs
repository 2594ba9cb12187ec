use std::path::Path;

use reqwest::{multipart, Client};

use crate::{
    error::{QrError, Result},
    models::UploadResponse,
};

/// Sub-client for the logo upload endpoint.
pub(crate) struct UploadClient {
    http: Client,
    endpoint: String,
}

impl UploadClient {
    pub(crate) fn new(http: Client, endpoint: String) -> Self {
        Self { http, endpoint }
    }

    /// Uploads the file and returns the raw response body, or the flattened
    /// `Error: <message>` text on any failure.
    pub(crate) async fn upload(&self, path: &Path) -> String {
        match self.try_upload(path).await {
            Ok(body) => body,
            Err(e) => {
                log::error!("Upload failed: {}", e);
                e.into_message()
            }
        }
    }

    pub(crate) async fn logo_token(&self, path: &Path) -> Result<String> {
        let body = self.try_upload(path).await?;
        let parsed: UploadResponse = serde_json::from_str(&body)?;
        parsed
            .file
            .ok_or_else(|| QrError::Config("upload response missing `file` field".to_string()))
    }

    async fn try_upload(&self, path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("logo")
            .to_string();

        log::debug!("POST {} (file={}, {} bytes)", self.endpoint, file_name, bytes.len());

        let part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/octet-stream")?;
        let form = multipart::Form::new().part("file", part);

        let response = self.http.post(&self.endpoint).multipart(form).send().await?;
        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(QrError::Service(body));
        }

        Ok(response.text().await?)
    }
}
