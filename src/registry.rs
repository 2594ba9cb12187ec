use std::collections::HashMap;

use crate::models::{Ball, Body, Eye, Gradient, StyleConfig};

/// Reserved id of the built-in preset; guaranteed present for the lifetime of
/// a registry, which is what lets [`StyleRegistry::resolve`] never fail.
pub const DEFAULT_STYLE_ID: u32 = 1;

/// Caller-managed table of reusable style presets keyed by integer id.
///
/// Intentionally simple: no eviction and no interior synchronization. A
/// registry is owned by one client instance; concurrent mutation is a caller
/// concern.
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    styles: HashMap<u32, StyleConfig>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        let mut styles = HashMap::new();
        styles.insert(DEFAULT_STYLE_ID, Self::builtin_default());
        Self { styles }
    }

    fn builtin_default() -> StyleConfig {
        StyleConfig {
            body: Body::Square,
            eye: Eye::Frame13,
            eye_ball: Ball::Ball14,
            eye1_color: "#021326".to_string(),
            eye2_color: "#021326".to_string(),
            eye3_color: "#021326".to_string(),
            eye_ball1_color: "#074f03".to_string(),
            eye_ball2_color: "#074f03".to_string(),
            eye_ball3_color: "#074f03".to_string(),
            gradient_color1: "#12a637".to_string(),
            gradient_color2: "#0b509e".to_string(),
            gradient: Gradient::Linear,
            gradient_on_eyes: true,
            ..StyleConfig::default()
        }
    }

    /// Inserts `config` under `id`, overwriting any existing entry.
    pub fn add_or_replace(&mut self, id: u32, config: StyleConfig) {
        self.styles.insert(id, config);
    }

    /// Returns the configuration for `id`, falling back to the built-in
    /// preset when `id` is unknown.
    pub fn resolve(&self, id: u32) -> &StyleConfig {
        match self.styles.get(&id) {
            Some(config) => config,
            // seeded at construction and never removed
            None => &self.styles[&DEFAULT_STYLE_ID],
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.styles.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
