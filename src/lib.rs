//! Client library for a remote QR-code styling web service.
//!
//! The service renders styled QR codes; this crate shapes enumerated style
//! choices into the JSON payload it expects, performs the network call
//! (async, blocking, and save-to-file variants), and uploads logo images via
//! multipart form data. No QR encoding or image composition happens here.

pub mod client;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod registry;

pub use client::{blocking, QrClient};
pub use config::ServiceConfig;
pub use error::{QrError, Result};
pub use models::{
    Ball, Body, Eye, GenerationResult, Gradient, ImageResult, LogoMode, QrRequest, StyleConfig,
};
pub use registry::{StyleRegistry, DEFAULT_STYLE_ID};
