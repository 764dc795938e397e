use serde::{Deserialize, Serialize};
use std::fmt;

/// Zodiac signs in display order, Aries at 0°.
pub const SIGN_NAMES: [&str; 12] = [
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
    "Capricorn",
    "Aquarius",
    "Pisces",
];

/// Wrap a longitude into [0, 360).
pub fn normalize_longitude(longitude: f64) -> f64 {
    let normalized = longitude.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Sign index (0-11) containing a longitude
pub fn sign_index(longitude: f64) -> usize {
    ((normalize_longitude(longitude) / 30.0).floor() as usize) % 12
}

pub fn sign_name(longitude: f64) -> &'static str {
    SIGN_NAMES[sign_index(longitude)]
}

/// Degrees past the start of the containing sign, in [0, 30)
pub fn sign_degree(longitude: f64) -> f64 {
    normalize_longitude(longitude) % 30.0
}

/// Position within a sign split into whole degrees and arc-minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeMinute {
    pub degree: u32,
    pub minute: u32,
}

impl DegreeMinute {
    pub fn from_longitude(longitude: f64) -> Self {
        let within_sign = sign_degree(longitude);
        let degree = within_sign.floor();
        let minute = ((within_sign - degree) * 60.0).floor().min(59.0);
        Self {
            degree: degree as u32,
            minute: minute as u32,
        }
    }
}

impl fmt::Display for DegreeMinute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°{:02}'", self.degree, self.minute)
    }
}

/// A plotted body. Only `longitude` drives geometry; `sign` and `house`
/// are carried for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelestialBody {
    pub name: String,
    /// Ecliptic longitude in degrees (0-360)
    pub longitude: f64,
    #[serde(default)]
    pub sign: String,
    #[serde(default)]
    pub house: Option<u8>,
    /// Speed in longitude (degrees per day)
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default, rename = "isRetrograde")]
    pub retrograde: Option<bool>,
}

impl CelestialBody {
    pub fn new(name: impl Into<String>, longitude: f64) -> Self {
        Self {
            name: name.into(),
            longitude,
            sign: sign_name(longitude).to_string(),
            house: None,
            speed: None,
            retrograde: None,
        }
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn with_retrograde(mut self, retrograde: bool) -> Self {
        self.retrograde = Some(retrograde);
        self
    }

    pub fn with_house(mut self, house: u8) -> Self {
        self.house = Some(house);
        self
    }

    /// Explicit flag wins; otherwise negative speed means retrograde.
    pub fn is_retrograde(&self) -> bool {
        match (self.retrograde, self.speed) {
            (Some(flag), _) => flag,
            (None, Some(speed)) => speed < 0.0,
            (None, None) => false,
        }
    }

    /// Sign shown for this body: the supplied label, or the one its
    /// longitude falls in when none was given.
    pub fn display_sign(&self) -> &str {
        if self.sign.trim().is_empty() {
            sign_name(self.longitude)
        } else {
            &self.sign
        }
    }
}

/// Rotation reference of the wheel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ascendant {
    #[serde(default)]
    pub sign: String,
    pub longitude: f64,
}

impl Ascendant {
    pub fn new(longitude: f64) -> Self {
        Self {
            sign: sign_name(longitude).to_string(),
            longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub ascendant: Ascendant,
    #[serde(default)]
    pub planets: Vec<CelestialBody>,
}

impl ChartData {
    pub fn new(ascendant_longitude: f64, planets: Vec<CelestialBody>) -> Self {
        Self {
            ascendant: Ascendant::new(ascendant_longitude),
            planets,
        }
    }

    pub fn find_planet(&self, name: &str) -> Option<&CelestialBody> {
        self.planets.iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_longitude() {
        assert_eq!(normalize_longitude(370.0), 10.0);
        assert_eq!(normalize_longitude(-30.0), 330.0);
        assert_eq!(normalize_longitude(360.0), 0.0);
        assert!(normalize_longitude(-1e-20) < 360.0);
    }

    #[test]
    fn test_sign_lookup() {
        assert_eq!(sign_name(0.0), "Aries");
        assert_eq!(sign_name(29.99), "Aries");
        assert_eq!(sign_name(30.0), "Taurus");
        assert_eq!(sign_name(359.0), "Pisces");
        assert_eq!(sign_name(-1.0), "Pisces");
        assert_eq!(sign_degree(45.5), 15.5);
    }

    #[test]
    fn test_degree_minute() {
        let dm = DegreeMinute::from_longitude(45.5);
        assert_eq!(dm, DegreeMinute { degree: 15, minute: 30 });
        assert_eq!(dm.to_string(), "15°30'");

        let dm = DegreeMinute::from_longitude(59.999);
        assert_eq!(dm.degree, 29);
        assert_eq!(dm.minute, 59);
    }

    #[test]
    fn test_retrograde_resolution() {
        let body = CelestialBody::new("Mars", 10.0);
        assert!(!body.is_retrograde());
        assert!(body.clone().with_speed(-0.2).is_retrograde());
        assert!(!body.clone().with_speed(-0.2).with_retrograde(false).is_retrograde());
        assert!(body.with_speed(0.5).with_retrograde(true).is_retrograde());
    }

    #[test]
    fn test_body_json_field_names() {
        let json = r#"{"name":"Saturn","longitude":300.5,"sign":"Aquarius","house":11,"speed":-0.03,"isRetrograde":true}"#;
        let body: CelestialBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.house, Some(11));
        assert_eq!(body.retrograde, Some(true));
        assert_eq!(body.display_sign(), "Aquarius");
    }
}
