use image::DynamicImage;
use serde::Deserialize;

use crate::error::QrError;

/// Body of a successful generation response. The service returns the image
/// location as a scheme-relative URL.
#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

/// Body of a successful upload response; `file` is the opaque logo token to
/// echo back in a later [`StyleConfig`](super::StyleConfig) `logo` field.
#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    pub file: Option<String>,
}

/// Unified outcome of every generation entry point. Failures are reported
/// flat, as a message, never as a panic or a silent empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub success: bool,
    pub message: String,
    pub image_url: Option<String>,
}

impl GenerationResult {
    pub(crate) fn ok(image_url: String) -> Self {
        Self {
            success: true,
            message: "Success".to_string(),
            image_url: Some(image_url),
        }
    }

    pub(crate) fn failed(error: QrError) -> Self {
        Self {
            success: false,
            message: error.into_message(),
            image_url: None,
        }
    }
}

/// Outcome of an in-memory generation call: the structured result plus, on
/// success, the decoded image.
#[derive(Debug)]
pub struct ImageResult {
    pub result: GenerationResult,
    pub image: Option<DynamicImage>,
}

impl ImageResult {
    pub(crate) fn ok(image_url: String, image: DynamicImage) -> Self {
        Self {
            result: GenerationResult::ok(image_url),
            image: Some(image),
        }
    }

    pub(crate) fn failed(error: QrError) -> Self {
        Self {
            result: GenerationResult::failed(error),
            image: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_result_carries_url_and_message() {
        let result = GenerationResult::ok("http://example.test/x.png".to_string());
        assert!(result.success);
        assert_eq!(result.message, "Success");
        assert_eq!(result.image_url.as_deref(), Some("http://example.test/x.png"));
    }

    #[test]
    fn failed_result_has_no_url() {
        let result = GenerationResult::failed(QrError::MissingImageUrl);
        assert!(!result.success);
        assert_eq!(result.message, "Failed to get image URL");
        assert!(result.image_url.is_none());
    }

    #[test]
    fn upload_response_parses_the_file_token() {
        let parsed: UploadResponse = serde_json::from_str(r#"{"file":"abc123.png"}"#).unwrap();
        assert_eq!(parsed.file.as_deref(), Some("abc123.png"));
    }
}
