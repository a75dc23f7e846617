//! Compositor configuration loaded from JSON.
//!
//! ```json
//! {
//!   "style": { "color": [1, 1, 1, 1], "scale": 1.5, "button_tint": [1, 1, 1, 1] },
//!   "text_font": { "advance": 9, "line_spacing": 18, "overrides": { "i": 4 } },
//!   "button_font": { "advance": 64, "line_spacing": 64 }
//! }
//! ```
//!
//! Every section is optional and falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::compositor::{CompositeStyle, Compositor};
use crate::error::ConfigError;
use crate::font::FixedAdvanceFont;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositorConfig {
    pub style: CompositeStyle,
    pub text_font: FixedAdvanceFont,
    pub button_font: FixedAdvanceFont,
}

impl Default for CompositorConfig {
    fn default() -> Self {
        Self {
            style: CompositeStyle::default(),
            text_font: FixedAdvanceFont::new(8.0, 16.0),
            button_font: FixedAdvanceFont::new(32.0, 32.0),
        }
    }
}

impl CompositorConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), "loaded compositor config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("style.scale", self.style.scale)?;
        positive("text_font.line_spacing", self.text_font.line_spacing)?;
        positive("button_font.line_spacing", self.button_font.line_spacing)?;
        non_negative("text_font.advance", self.text_font.advance)?;
        non_negative("button_font.advance", self.button_font.advance)?;
        Ok(())
    }

    pub fn compositor(&self) -> Compositor {
        Compositor::new(self.style)
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be a positive number, got {value}"),
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be zero or more, got {value}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::primitives::Color;

    #[test]
    fn empty_object_is_default() {
        let config = CompositorConfig::from_json_str("{}").unwrap();
        assert_eq!(config, CompositorConfig::default());
    }

    #[test]
    fn partial_style_keeps_other_defaults() {
        let config =
            CompositorConfig::from_json_str(r#"{"style": {"scale": 2.5, "color": [0, 0, 0, 1]}}"#)
                .unwrap();
        assert_eq!(config.style.scale, 2.5);
        assert_eq!(config.style.color, Color::BLACK);
        assert_eq!(config.style.button_tint, Color::WHITE);
        assert_eq!(config.compositor().style().scale, 2.5);
    }

    #[test]
    fn rejects_zero_scale() {
        let err = CompositorConfig::from_json_str(r#"{"style": {"scale": 0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "style.scale", .. }), "{err}");
    }

    #[test]
    fn rejects_zero_button_line_spacing() {
        let err = CompositorConfig::from_json_str(
            r#"{"button_font": {"advance": 10, "line_spacing": 0}}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "button_font.line_spacing",
                ..
            }
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = CompositorConfig::from_json_str("{ style: }").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"text_font": {{"advance": 6, "line_spacing": 12}}}}"#).unwrap();

        let config = CompositorConfig::load(file.path()).unwrap();
        assert_eq!(config.text_font, FixedAdvanceFont::new(6.0, 12.0));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CompositorConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
