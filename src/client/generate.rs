use std::path::Path;

use image::DynamicImage;
use reqwest::Client;

use crate::{
    error::{QrError, Result},
    logger,
    models::{GenerateResponse, GenerationResult, ImageResult, QrRequest, StyleConfig},
};

/// Sub-client for the generation endpoint.
pub(crate) struct GenerateClient {
    http: Client,
    endpoint: String,
}

impl GenerateClient {
    pub(crate) fn new(http: Client, endpoint: String) -> Self {
        Self { http, endpoint }
    }

    pub(crate) async fn to_file(
        &self,
        data: &str,
        style: &StyleConfig,
        save_path: Option<&Path>,
    ) -> GenerationResult {
        match self.fetch_image_url(data, style).await {
            Ok(image_url) => {
                if let Some(path) = save_path {
                    if let Err(e) = self.download_to(&image_url, path).await {
                        log::error!("Failed to save image to {}: {}", path.display(), e);
                        return GenerationResult::failed(e);
                    }
                    log::info!("💾 Image saved to: {}", path.display());
                }
                GenerationResult::ok(image_url)
            }
            Err(e) => {
                log::error!("Generation failed: {}", e);
                GenerationResult::failed(e)
            }
        }
    }

    pub(crate) async fn to_image(&self, data: &str, style: &StyleConfig) -> ImageResult {
        match self.fetch_decoded(data, style).await {
            Ok((image_url, image)) => ImageResult::ok(image_url, image),
            Err(e) => {
                log::error!("Generation failed: {}", e);
                ImageResult::failed(e)
            }
        }
    }

    async fn fetch_decoded(
        &self,
        data: &str,
        style: &StyleConfig,
    ) -> Result<(String, DynamicImage)> {
        let image_url = self.fetch_image_url(data, style).await?;
        let bytes = self.download(&image_url).await?;
        let image = image::load_from_memory(&bytes)?;
        Ok((image_url, image))
    }

    /// POSTs the request envelope and returns the rendered image URL. The
    /// service answers with a scheme-relative URL; the `http:` prefix is
    /// applied here, exactly once.
    async fn fetch_image_url(&self, data: &str, style: &StyleConfig) -> Result<String> {
        let request = QrRequest::new(data, style.clone());
        log::debug!(
            "POST {} (body={}, eye={}, eyeBall={})",
            self.endpoint,
            request.config.body_token(),
            request.config.eye_token(),
            request.config.eye_ball_token()
        );

        let _timer = logger::timer("qr generate");
        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(QrError::Service(body));
        }

        let parsed: GenerateResponse = response.json().await?;
        let image_url = parsed.image_url.ok_or(QrError::MissingImageUrl)?;
        Ok(format!("http:{}", image_url))
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(QrError::Service(body));
        }
        Ok(response.bytes().await?.to_vec())
    }

    async fn download_to(&self, url: &str, path: &Path) -> Result<()> {
        let bytes = self.download(url).await?;
        tokio::fs::write(path, &bytes).await?;
        Ok(())
    }
}
