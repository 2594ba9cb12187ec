use serde::{Serialize, Serializer};

use super::patterns::{Ball, Body, Eye, Gradient, LogoMode};

/// Complete visual configuration for one generated code.
///
/// Pattern fields hold the enum variants; the wire tokens are computed at
/// serialization time from the enums, so a token can never go stale no matter
/// how the struct is mutated. Serialization emits the service's exact field
/// names (`bodyColor`, `eyeBall`, `gradientOnEyes`, ...) and only ever the
/// string tokens, never raw enum values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    #[serde(serialize_with = "ser_body")]
    pub body: Body,
    #[serde(serialize_with = "ser_eye")]
    pub eye: Eye,
    #[serde(serialize_with = "ser_ball")]
    pub eye_ball: Ball,

    /// Corner-radius override flags for the three eye frames, passed through
    /// opaquely; the service is the authority on their semantics.
    pub erf1: Vec<String>,
    pub erf2: Vec<String>,
    pub erf3: Vec<String>,
    /// Corner-radius override flags for the three eye balls.
    pub brf1: Vec<String>,
    pub brf2: Vec<String>,
    pub brf3: Vec<String>,

    pub body_color: String,
    pub bg_color: String,
    pub eye1_color: String,
    pub eye2_color: String,
    pub eye3_color: String,
    pub eye_ball1_color: String,
    pub eye_ball2_color: String,
    pub eye_ball3_color: String,
    pub gradient_color1: String,
    pub gradient_color2: String,

    #[serde(rename = "gradientType", serialize_with = "ser_gradient")]
    pub gradient: Gradient,
    pub gradient_on_eyes: bool,

    /// Opaque token returned by the upload endpoint; empty means no logo.
    pub logo: String,
    #[serde(serialize_with = "ser_logo_mode")]
    pub logo_mode: LogoMode,
}

fn ser_body<S: Serializer>(body: &Body, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(body.token())
}

fn ser_eye<S: Serializer>(eye: &Eye, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(eye.token())
}

fn ser_ball<S: Serializer>(ball: &Ball, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(ball.token())
}

fn ser_gradient<S: Serializer>(gradient: &Gradient, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(gradient.token())
}

fn ser_logo_mode<S: Serializer>(mode: &LogoMode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(mode.token())
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig {
            body: Body::Square,
            eye: Eye::Frame0,
            eye_ball: Ball::Ball0,
            erf1: Vec::new(),
            erf2: Vec::new(),
            erf3: Vec::new(),
            brf1: Vec::new(),
            brf2: Vec::new(),
            brf3: Vec::new(),
            body_color: "#000000".to_string(),
            bg_color: "#FFFFFF".to_string(),
            eye1_color: "#000000".to_string(),
            eye2_color: "#000000".to_string(),
            eye3_color: "#000000".to_string(),
            eye_ball1_color: "#000000".to_string(),
            eye_ball2_color: "#000000".to_string(),
            eye_ball3_color: "#000000".to_string(),
            gradient_color1: "#000000".to_string(),
            gradient_color2: "#000000".to_string(),
            gradient: Gradient::Linear,
            gradient_on_eyes: false,
            logo: String::new(),
            logo_mode: LogoMode::Default,
        }
    }
}

impl StyleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    pub fn with_eye(mut self, eye: Eye) -> Self {
        self.eye = eye;
        self
    }

    pub fn with_eye_ball(mut self, ball: Ball) -> Self {
        self.eye_ball = ball;
        self
    }

    pub fn with_gradient(mut self, gradient: Gradient) -> Self {
        self.gradient = gradient;
        self
    }

    pub fn with_logo(mut self, token: impl Into<String>, mode: LogoMode) -> Self {
        self.logo = token.into();
        self.logo_mode = mode;
        self
    }

    pub fn with_colors(mut self, body: impl Into<String>, background: impl Into<String>) -> Self {
        self.body_color = body.into();
        self.bg_color = background.into();
        self
    }

    pub fn body_token(&self) -> &'static str {
        self.body.token()
    }

    pub fn eye_token(&self) -> &'static str {
        self.eye.token()
    }

    pub fn eye_ball_token(&self) -> &'static str {
        self.eye_ball.token()
    }

    pub fn gradient_token(&self) -> &'static str {
        self.gradient.token()
    }

    pub fn logo_mode_token(&self) -> &'static str {
        self.logo_mode.token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn default_style_matches_the_service_defaults() {
        let style = StyleConfig::default();
        assert_eq!(style.body_token(), "square");
        assert_eq!(style.eye_token(), "frame0");
        assert_eq!(style.eye_ball_token(), "ball0");
        assert_eq!(style.gradient_token(), "linear");
        assert_eq!(style.logo_mode_token(), "default");
        assert!(style.erf1.is_empty() && style.erf2.is_empty() && style.erf3.is_empty());
        assert!(style.brf1.is_empty() && style.brf2.is_empty() && style.brf3.is_empty());
        assert!(!style.gradient_on_eyes);
        assert!(style.logo.is_empty());

        for color in [
            &style.body_color,
            &style.bg_color,
            &style.eye1_color,
            &style.eye2_color,
            &style.eye3_color,
            &style.eye_ball1_color,
            &style.eye_ball2_color,
            &style.eye_ball3_color,
            &style.gradient_color1,
            &style.gradient_color2,
        ] {
            assert!(color.starts_with('#'));
            assert_eq!(color.len(), 7);
        }
    }

    #[test]
    fn serialization_emits_wire_field_names_and_tokens() {
        let style = StyleConfig::new()
            .with_body(Body::Round)
            .with_eye(Eye::Frame13)
            .with_eye_ball(Ball::Ball14)
            .with_gradient(Gradient::Radial);
        let value = serde_json::to_value(&style).unwrap();

        assert_eq!(value["body"], "round");
        assert_eq!(value["eye"], "frame13");
        assert_eq!(value["eyeBall"], "ball14");
        assert_eq!(value["gradientType"], "radial");
        assert_eq!(value["logoMode"], "default");
        assert_eq!(value["bodyColor"], "#000000");
        assert_eq!(value["bgColor"], "#FFFFFF");
        assert_eq!(value["eye1Color"], "#000000");
        assert_eq!(value["eyeBall1Color"], "#000000");
        assert_eq!(value["gradientColor1"], "#000000");
        assert_eq!(value["gradientOnEyes"], false);
        assert_eq!(value["erf1"], Value::Array(vec![]));
        assert_eq!(value["brf3"], Value::Array(vec![]));
        assert_eq!(value["logo"], "");
    }

    #[test]
    fn tokens_follow_later_mutation() {
        let mut style = StyleConfig::default();
        style.body = Body::Leaf;
        assert_eq!(style.body_token(), "leaf");
        let value = serde_json::to_value(&style).unwrap();
        assert_eq!(value["body"], "leaf");
    }

    #[test]
    fn rounding_overrides_serialize_in_order() {
        let mut style = StyleConfig::default();
        style.erf2 = vec!["fv".to_string(), "fh".to_string()];
        let value = serde_json::to_value(&style).unwrap();
        assert_eq!(value["erf2"][0], "fv");
        assert_eq!(value["erf2"][1], "fh");
    }
}
