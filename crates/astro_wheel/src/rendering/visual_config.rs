use crate::chart::ChartSettings;
use crate::rendering::primitives::Color;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Sign glyphs in zodiac order
pub const SIGN_SYMBOLS: [&str; 12] = [
    "♈", "♉", "♊", "♋", "♌", "♍", "♎", "♏", "♐", "♑", "♒", "♓",
];

lazy_static! {
    /// Recognized body names -> (hex color, symbol)
    static ref BODY_TABLE: HashMap<&'static str, (&'static str, &'static str)> = {
        let mut m = HashMap::new();
        m.insert("Sun", ("#FFD700", "☉"));
        m.insert("Moon", ("#C0C0C0", "☽"));
        m.insert("Mars", ("#DC143C", "♂"));
        m.insert("Mercury", ("#8B7355", "☿"));
        m.insert("Jupiter", ("#FFA500", "♃"));
        m.insert("Venus", ("#FFC0CB", "♀"));
        m.insert("Saturn", ("#808080", "♄"));
        m.insert("Rahu", ("#00CED1", "☊"));
        m.insert("Ketu", ("#5F9EA0", "☋"));
        m.insert("Uranus", ("#87CEEB", "♅"));
        m.insert("Neptune", ("#4169E1", "♆"));
        m.insert("Pluto", ("#2F4F4F", "♇"));
        m
    };
}

/// Resolved color and symbol for a body name
#[derive(Debug, Clone, PartialEq)]
pub struct BodyStyle {
    pub color: Color,
    pub symbol: String,
    pub recognized: bool,
}

/// Look up a body by name; unknown names get a two-letter abbreviation
/// and `fallback_color`.
pub fn body_style(name: &str, fallback_color: Color) -> BodyStyle {
    match BODY_TABLE.get(name) {
        Some((hex, symbol)) => BodyStyle {
            color: Color::from_hex(hex).unwrap_or(fallback_color),
            symbol: symbol.to_string(),
            recognized: true,
        },
        None => BodyStyle {
            color: fallback_color,
            symbol: name.chars().take(2).collect(),
            recognized: false,
        },
    }
}

pub fn is_recognized_body(name: &str) -> bool {
    BODY_TABLE.contains_key(name)
}

/// Visual styling resolved from [`ChartSettings`]
#[derive(Debug, Clone)]
pub struct VisualConfig {
    pub background_color: Color,
    pub circle_color: Color,
    pub cusp_color: Color,
    pub connector_color: Color,
    pub text_color: Color,
    pub tension_color: Color,
    pub harmony_color: Color,
    pub default_body_color: Color,
    pub center_color: Color,
    pub sign_colors: Vec<Color>,
}

impl VisualConfig {
    pub fn from_settings(settings: &ChartSettings) -> Self {
        let parse = |hex: &str| Color::from_hex(hex).unwrap_or(Color::WHITE);
        Self {
            background_color: parse(&settings.color_background),
            circle_color: parse(&settings.color_circles),
            cusp_color: parse(&settings.color_cusps),
            connector_color: parse(&settings.color_connectors),
            text_color: parse(&settings.color_text),
            tension_color: parse(&settings.color_tension),
            harmony_color: parse(&settings.color_harmony),
            default_body_color: parse(&settings.color_default_body),
            center_color: parse(&settings.color_center),
            sign_colors: settings.sign_colors.iter().map(|c| parse(c)).collect(),
        }
    }

    pub fn sign_color(&self, index: usize) -> Color {
        self.sign_colors.get(index).copied().unwrap_or(Color::WHITE)
    }

    pub fn body_style(&self, name: &str) -> BodyStyle {
        body_style(name, self.default_body_color)
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self::from_settings(&ChartSettings::default())
    }
}
