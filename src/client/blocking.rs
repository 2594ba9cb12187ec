//! Synchronous mirror of [`QrClient`](super::QrClient) built on
//! `reqwest::blocking`. Must not be used from inside an async runtime; it is
//! the invocation shape for plain threaded callers.

use std::fs;
use std::path::Path;

use image::DynamicImage;
use reqwest::blocking::{multipart, Client};

use crate::{
    config::ServiceConfig,
    error::{QrError, Result},
    logger,
    models::{
        GenerateResponse, GenerationResult, ImageResult, QrRequest, StyleConfig, UploadResponse,
    },
    registry::StyleRegistry,
};

pub struct QrClient {
    http: Client,
    generate_url: String,
    upload_url: String,
    styles: StyleRegistry,
}

impl QrClient {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            http: Client::new(),
            generate_url: config.generate_url(),
            upload_url: config.upload_url(),
            styles: StyleRegistry::new(),
        }
    }

    pub fn add_style(&mut self, id: u32, config: StyleConfig) {
        self.styles.add_or_replace(id, config);
    }

    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    pub fn generate_to_file(
        &self,
        data: &str,
        style_id: u32,
        save_path: Option<&Path>,
    ) -> GenerationResult {
        let style = self.styles.resolve(style_id);
        match self.fetch_image_url(data, style) {
            Ok(image_url) => {
                if let Some(path) = save_path {
                    if let Err(e) = self.download_to(&image_url, path) {
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

    pub fn generate_to_image(&self, data: &str, style_id: u32) -> ImageResult {
        let style = self.styles.resolve(style_id);
        match self.fetch_decoded(data, style) {
            Ok((image_url, image)) => ImageResult::ok(image_url, image),
            Err(e) => {
                log::error!("Generation failed: {}", e);
                ImageResult::failed(e)
            }
        }
    }

    pub fn upload_image(&self, path: &Path) -> String {
        match self.try_upload(path) {
            Ok(body) => body,
            Err(e) => {
                log::error!("Upload failed: {}", e);
                e.into_message()
            }
        }
    }

    pub fn upload_logo(&self, path: &Path) -> Result<String> {
        let body = self.try_upload(path)?;
        let parsed: UploadResponse = serde_json::from_str(&body)?;
        parsed
            .file
            .ok_or_else(|| QrError::Config("upload response missing `file` field".to_string()))
    }

    fn fetch_decoded(&self, data: &str, style: &StyleConfig) -> Result<(String, DynamicImage)> {
        let image_url = self.fetch_image_url(data, style)?;
        let bytes = self.download(&image_url)?;
        let image = image::load_from_memory(&bytes)?;
        Ok((image_url, image))
    }

    fn fetch_image_url(&self, data: &str, style: &StyleConfig) -> Result<String> {
        let request = QrRequest::new(data, style.clone());
        log::debug!("POST {} (body={})", self.generate_url, request.config.body_token());

        let _timer = logger::timer("qr generate");
        let response = self.http.post(&self.generate_url).json(&request).send()?;

        if !response.status().is_success() {
            let body = response.text().unwrap_or_default();
            return Err(QrError::Service(body));
        }

        let parsed: GenerateResponse = response.json()?;
        let image_url = parsed.image_url.ok_or(QrError::MissingImageUrl)?;
        // the service returns scheme-relative URLs
        Ok(format!("http:{}", image_url))
    }

    fn download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.http.get(url).send()?;
        if !response.status().is_success() {
            let body = response.text().unwrap_or_default();
            return Err(QrError::Service(body));
        }
        Ok(response.bytes()?.to_vec())
    }

    fn download_to(&self, url: &str, path: &Path) -> Result<()> {
        let bytes = self.download(url)?;
        fs::write(path, &bytes)?;
        Ok(())
    }

    fn try_upload(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("logo")
            .to_string();

        let part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/octet-stream")?;
        let form = multipart::Form::new().part("file", part);

        let response = self.http.post(&self.upload_url).multipart(form).send()?;
        if !response.status().is_success() {
            let body = response.text().unwrap_or_default();
            return Err(QrError::Service(body));
        }

        Ok(response.text()?)
    }
}
