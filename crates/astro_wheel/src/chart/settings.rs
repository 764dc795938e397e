use crate::rendering::primitives::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading chart settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Could not read settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid TOML: {0}")]
    InvalidToml(String),
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    // Surface
    pub width: f64,
    pub height: f64,

    // Ring chain
    pub ring_padding: f64,
    pub transit_band: f64,
    pub sign_ratio: f64,
    pub house_ratio: f64,
    pub placement_ratio: f64,
    pub center_ratio: f64,
    pub house_label_ratio: f64,

    // Aspects
    pub orb: f64,

    // Theme colors
    pub color_background: String,
    pub color_circles: String,
    pub color_cusps: String,
    pub color_connectors: String,
    pub color_text: String,
    pub color_tension: String,
    pub color_harmony: String,
    pub color_default_body: String,
    pub color_center: String,
    pub sign_colors: Vec<String>,

    // Strokes
    pub stroke_circles: f64,
    pub stroke_cusps: f64,
    pub stroke_connectors: f64,
    pub stroke_aspects: f64,

    // Glyphs and labels
    pub glyph_size: f64,
    pub transit_glyph_scale: f64,
    pub sign_label_size: f64,
    pub house_label_size: f64,
    pub center_text_size: f64,
    pub retrograde_marker_size: f64,
    pub retrograde_marker_offset: [f64; 2],
    pub hit_radius: f64,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,

            ring_padding: 20.0,
            transit_band: 40.0,
            sign_ratio: 0.85,
            house_ratio: 0.85,
            placement_ratio: 0.75,
            center_ratio: 0.4,
            house_label_ratio: 0.9,

            orb: 8.0,

            color_background: "#1a1a1a".to_string(),
            color_circles: "#444444".to_string(),
            color_cusps: "#888888".to_string(),
            color_connectors: "#666666".to_string(),
            color_text: "#eeeeee".to_string(),
            color_tension: "#FF4500".to_string(), // OrangeRed
            color_harmony: "#27AE60".to_string(), // Green
            color_default_body: "#cccccc".to_string(),
            color_center: "#111111".to_string(),

            // Element cycle: fire, earth, air, water
            sign_colors: vec![
                "#E74C3C".to_string(), // Aries
                "#8B4513".to_string(), // Taurus
                "#87CEEB".to_string(), // Gemini
                "#2E86C1".to_string(), // Cancer
                "#F39C12".to_string(), // Leo
                "#9ACD32".to_string(), // Virgo
                "#FF69B4".to_string(), // Libra
                "#8B0000".to_string(), // Scorpio
                "#800080".to_string(), // Sagittarius
                "#708090".to_string(), // Capricorn
                "#00CED1".to_string(), // Aquarius
                "#2E8B57".to_string(), // Pisces
            ],

            stroke_circles: 1.5,
            stroke_cusps: 1.0,
            stroke_connectors: 0.8,
            stroke_aspects: 1.2,

            glyph_size: 18.0,
            transit_glyph_scale: 0.85,
            sign_label_size: 16.0,
            house_label_size: 11.0,
            center_text_size: 14.0,
            retrograde_marker_size: 9.0,
            retrograde_marker_offset: [10.0, -8.0],
            hit_radius: 12.0,
        }
    }
}

impl ChartSettings {
    /// Parse and validate settings from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        let settings: ChartSettings =
            toml::from_str(text).map_err(|e| SettingsError::InvalidToml(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_toml_str(&text)?;
        log::debug!("Loaded chart settings from {}", path.display());
        Ok(settings)
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let ratios = [
            ("sign_ratio", self.sign_ratio),
            ("house_ratio", self.house_ratio),
            ("placement_ratio", self.placement_ratio),
            ("center_ratio", self.center_ratio),
            ("house_label_ratio", self.house_label_ratio),
        ];
        for (field, value) in ratios {
            if !(value > 0.0 && value < 1.0) {
                return Err(invalid(field, format!("must be between 0 and 1, got {}", value)));
            }
        }

        // Above 15° the 90° and 120° windows start to overlap
        if !(self.orb > 0.0 && self.orb <= 15.0) {
            return Err(invalid("orb", format!("must be in (0, 15], got {}", self.orb)));
        }

        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(invalid(
                "width/height",
                format!("must be positive, got {}x{}", self.width, self.height),
            ));
        }

        if self.ring_padding < 0.0 || self.transit_band < 0.0 {
            return Err(invalid("ring_padding/transit_band", "must not be negative".to_string()));
        }

        // Room for the widest layout: padding plus the transit band
        let bounding = self.width.min(self.height) / 2.0;
        if bounding <= self.ring_padding + self.transit_band {
            return Err(invalid(
                "width/height",
                format!(
                    "{}x{} leaves no room inside ring_padding {} and transit_band {}",
                    self.width, self.height, self.ring_padding, self.transit_band
                ),
            ));
        }

        let colors = [
            ("color_background", &self.color_background),
            ("color_circles", &self.color_circles),
            ("color_cusps", &self.color_cusps),
            ("color_connectors", &self.color_connectors),
            ("color_text", &self.color_text),
            ("color_tension", &self.color_tension),
            ("color_harmony", &self.color_harmony),
            ("color_default_body", &self.color_default_body),
            ("color_center", &self.color_center),
        ];
        for (field, hex) in colors {
            if Color::from_hex(hex).is_none() {
                return Err(invalid(field, format!("not a hex color: {:?}", hex)));
            }
        }

        if self.sign_colors.len() != 12 {
            return Err(invalid(
                "sign_colors",
                format!("expected 12 colors, got {}", self.sign_colors.len()),
            ));
        }
        if let Some(bad) = self.sign_colors.iter().find(|c| Color::from_hex(c).is_none()) {
            return Err(invalid("sign_colors", format!("not a hex color: {:?}", bad)));
        }

        Ok(())
    }
}

fn invalid(field: &str, message: String) -> SettingsError {
    SettingsError::InvalidValue {
        field: field.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ChartSettings::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = ChartSettings::from_toml_str("width = 800.0\norb = 6.0\n").unwrap();
        assert_eq!(settings.width, 800.0);
        assert_eq!(settings.height, 600.0);
        assert_eq!(settings.orb, 6.0);
        assert_eq!(settings.sign_ratio, 0.85);
    }

    #[test]
    fn test_rejects_bad_ratio() {
        let err = ChartSettings::from_toml_str("center_ratio = 1.5").unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "center_ratio"));
    }

    #[test]
    fn test_rejects_surface_smaller_than_bands() {
        let err = ChartSettings::default()
            .with_size(50.0, 50.0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "width/height"));

        // 2 * (20 + 40) is the limit; only the shorter side counts
        assert!(ChartSettings::default().with_size(120.0, 900.0).validate().is_err());
        assert!(ChartSettings::default().with_size(122.0, 900.0).validate().is_ok());
    }

    #[test]
    fn test_rejects_wide_orb() {
        assert!(ChartSettings::from_toml_str("orb = 20.0").is_err());
    }

    #[test]
    fn test_rejects_bad_color() {
        let err = ChartSettings::from_toml_str("color_tension = \"red\"").unwrap_err();
        assert!(err.to_string().contains("color_tension"));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(matches!(
            ChartSettings::from_toml_str("width = "),
            Err(SettingsError::InvalidToml(_))
        ));
    }
}
