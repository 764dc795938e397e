use astro_wheel::chart::ChartSettings;
use astro_wheel::layout::{load_bodies_from_json, load_chart_data_from_json, ChartDataError};
use std::io::Write;

#[test]
fn test_load_valid_chart() {
    let json = r#"
    {
      "ascendant": { "sign": "Leo", "longitude": 132.4 },
      "planets": [
        { "name": "Sun", "longitude": 10.5, "sign": "Aries", "house": 9 },
        { "name": "Saturn", "longitude": 300.0, "sign": "Aquarius", "house": 6, "speed": -0.02 },
        { "name": "Rahu", "longitude": 45.0, "isRetrograde": true }
      ]
    }
    "#;
    let chart = load_chart_data_from_json(json).unwrap();
    assert_eq!(chart.ascendant.sign, "Leo");
    assert_eq!(chart.planets.len(), 3);
    assert!(chart.planets[1].is_retrograde());
    assert!(chart.planets[2].is_retrograde());
    assert_eq!(chart.planets[0].house, Some(9));
}

#[test]
fn test_missing_ascendant() {
    let err = load_chart_data_from_json(r#"{ "planets": [] }"#).unwrap_err();
    assert!(matches!(err, ChartDataError::MissingField(ref f) if f == "ascendant"));
}

#[test]
fn test_missing_planets() {
    let err = load_chart_data_from_json(r#"{ "ascendant": { "longitude": 1.0 } }"#).unwrap_err();
    assert!(matches!(err, ChartDataError::MissingField(ref f) if f == "planets"));
}

#[test]
fn test_body_without_longitude() {
    let json = r#"{ "ascendant": { "longitude": 1.0 }, "planets": [ { "name": "Sun" } ] }"#;
    let err = load_chart_data_from_json(json).unwrap_err();
    assert!(matches!(err, ChartDataError::MissingField(ref f) if f == "planets[0].longitude"));
}

#[test]
fn test_house_out_of_range() {
    let json = r#"{ "ascendant": { "longitude": 1.0 }, "planets": [ { "name": "Sun", "longitude": 3.0, "house": 13 } ] }"#;
    assert!(matches!(
        load_chart_data_from_json(json),
        Err(ChartDataError::InvalidFieldValue(_))
    ));
}

#[test]
fn test_non_numeric_longitude() {
    let json = r#"{ "ascendant": { "longitude": "east" }, "planets": [] }"#;
    assert!(matches!(
        load_chart_data_from_json(json),
        Err(ChartDataError::InvalidFieldValue(_))
    ));
}

#[test]
fn test_invalid_json() {
    assert!(matches!(
        load_chart_data_from_json("{ not json"),
        Err(ChartDataError::InvalidJson(_))
    ));
}

#[test]
fn test_out_of_domain_longitude_accepted() {
    let json = r#"{ "ascendant": { "longitude": 0.0 }, "planets": [ { "name": "Sun", "longitude": 400.0 } ] }"#;
    let chart = load_chart_data_from_json(json).unwrap();
    assert_eq!(chart.planets[0].longitude, 400.0);
}

#[test]
fn test_load_transit_array() {
    let bodies = load_bodies_from_json(r#"[ { "name": "Mars", "longitude": 88.0 } ]"#).unwrap();
    assert_eq!(bodies.len(), 1);
    assert!(load_bodies_from_json(r#"{ "name": "Mars" }"#).is_err());
    assert!(load_bodies_from_json(r#"[ { "name": "", "longitude": 1.0 } ]"#).is_err());
}

#[test]
fn test_settings_file_roundtrip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "width = 900.0\nheight = 700.0\ncolor_harmony = \"#00FF00\"").unwrap();
    let settings = ChartSettings::load(file.path()).unwrap();
    assert_eq!(settings.width, 900.0);
    assert_eq!(settings.color_harmony, "#00FF00");
    assert_eq!(settings.orb, 8.0);
}

#[test]
fn test_settings_missing_file() {
    assert!(ChartSettings::load("/nonexistent/wheel.toml").is_err());
}
