use std::env;

pub const DEFAULT_BASE_URL: &str = "https://api.qrcode-monkey.com";
pub const DEFAULT_GENERATE_PATH: &str = "/qr/custom";
pub const DEFAULT_UPLOAD_PATH: &str = "/qr/uploadimage";

/// Endpoint configuration for the styling service. Every field is optional;
/// unset fields fall back to the public service defaults. Injecting the base
/// URL at construction lets tests point a client at a local mock server.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub base_url: Option<String>,
    pub generate_path: Option<String>,
    pub upload_path: Option<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            base_url: None,
            generate_path: None,
            upload_path: None,
        }
    }
}

impl ServiceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let base_url = env::var("QRSTYLE_BASE_URL").ok();
        let generate_path = env::var("QRSTYLE_GENERATE_PATH").ok();
        let upload_path = env::var("QRSTYLE_UPLOAD_PATH").ok();

        ServiceConfig {
            base_url,
            generate_path,
            upload_path,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_generate_path(mut self, path: impl Into<String>) -> Self {
        self.generate_path = Some(path.into());
        self
    }

    pub fn with_upload_path(mut self, path: impl Into<String>) -> Self {
        self.upload_path = Some(path.into());
        self
    }

    /// Full URL of the generation endpoint.
    pub fn generate_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
            self.generate_path.as_deref().unwrap_or(DEFAULT_GENERATE_PATH)
        )
    }

    /// Full URL of the logo upload endpoint.
    pub fn upload_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
            self.upload_path.as_deref().unwrap_or(DEFAULT_UPLOAD_PATH)
        )
    }
}
