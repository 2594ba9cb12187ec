pub mod blocking;
mod generate;
mod upload;

use std::path::Path;

use crate::{
    config::ServiceConfig,
    error::Result,
    models::{GenerationResult, ImageResult, StyleConfig},
    registry::StyleRegistry,
};

use generate::GenerateClient;
use upload::UploadClient;

/// Asynchronous client for the styling service: owns the style registry and
/// the two endpoint sub-clients.
///
/// Each operation is a single linear request/response exchange; there are no
/// retries, backoff, or timeouts beyond what the HTTP stack applies.
pub struct QrClient {
    generate: GenerateClient,
    upload: UploadClient,
    styles: StyleRegistry,
}

impl QrClient {
    pub fn new(config: ServiceConfig) -> Self {
        let http = reqwest::Client::new();
        Self {
            generate: GenerateClient::new(http.clone(), config.generate_url()),
            upload: UploadClient::new(http, config.upload_url()),
            styles: StyleRegistry::new(),
        }
    }

    /// Registers `config` under `id`, replacing any existing preset.
    pub fn add_style(&mut self, id: u32, config: StyleConfig) {
        self.styles.add_or_replace(id, config);
    }

    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    /// Generates a styled code and, when `save_path` is given, downloads the
    /// rendered image to disk. The returned result carries the image URL on
    /// success and a flat error message otherwise.
    pub async fn generate_to_file(
        &self,
        data: &str,
        style_id: u32,
        save_path: Option<&Path>,
    ) -> GenerationResult {
        self.generate
            .to_file(data, self.styles.resolve(style_id), save_path)
            .await
    }

    /// Generates a styled code and decodes the rendered image in memory.
    pub async fn generate_to_image(&self, data: &str, style_id: u32) -> ImageResult {
        self.generate
            .to_image(data, self.styles.resolve(style_id))
            .await
    }

    /// Uploads a logo image; returns the raw JSON response body on success or
    /// `Error: <body>` on failure.
    pub async fn upload_image(&self, path: &Path) -> String {
        self.upload.upload(path).await
    }

    /// Uploads a logo image and extracts the opaque logo token from the
    /// response, ready for a [`StyleConfig`] `logo` field.
    pub async fn upload_logo(&self, path: &Path) -> Result<String> {
        self.upload.logo_token(path).await
    }
}
