use serde::Serialize;

use super::style::StyleConfig;

pub const DEFAULT_SIZE: u32 = 1000;
pub const DEFAULT_DOWNLOAD_MODE: &str = "imageUrl";
pub const DEFAULT_FILE_FORMAT: &str = "png";

/// Request envelope for the generation endpoint. Built per call from the
/// payload text and a snapshot of the resolved style; the payload is passed
/// through unvalidated, the service is the authority on acceptable input.
#[derive(Debug, Clone, Serialize)]
pub struct QrRequest {
    pub data: String,
    pub config: StyleConfig,
    pub size: u32,
    pub download: String,
    pub file: String,
}

impl QrRequest {
    pub fn new(data: impl Into<String>, config: StyleConfig) -> Self {
        Self {
            data: data.into(),
            config,
            size: DEFAULT_SIZE,
            download: DEFAULT_DOWNLOAD_MODE.to_string(),
            file: DEFAULT_FILE_FORMAT.to_string(),
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_file_format(mut self, format: impl Into<String>) -> Self {
        self.file = format.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_defaults() {
        let request = QrRequest::new("https://example.com", StyleConfig::default());
        assert_eq!(request.size, 1000);
        assert_eq!(request.download, "imageUrl");
        assert_eq!(request.file, "png");
    }

    #[test]
    fn envelope_serializes_config_tokens_not_enums() {
        let request = QrRequest::new("hello", StyleConfig::default()).with_size(512);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["data"], "hello");
        assert_eq!(value["size"], 512);
        assert_eq!(value["config"]["body"], "square");
        assert_eq!(value["config"]["eye"], "frame0");
    }
}
