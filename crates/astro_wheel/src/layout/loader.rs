use crate::chart::{CelestialBody, ChartData};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur when loading chart data
#[derive(Error, Debug)]
pub enum ChartDataError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Missing required field: {0}")]
    MissingField(String),
    #[error("Invalid field value: {0}")]
    InvalidFieldValue(String),
}

/// Load chart data (`ascendant` + `planets`) from a JSON string
pub fn load_chart_data_from_json(json: &str) -> Result<ChartData, ChartDataError> {
    let parsed: Value =
        serde_json::from_str(json).map_err(|e| ChartDataError::InvalidJson(e.to_string()))?;

    let obj = parsed.as_object().ok_or_else(|| {
        ChartDataError::InvalidFieldValue("chart data must be an object".to_string())
    })?;

    let ascendant = obj
        .get("ascendant")
        .ok_or_else(|| ChartDataError::MissingField("ascendant".to_string()))?;
    let ascendant = ascendant.as_object().ok_or_else(|| {
        ChartDataError::InvalidFieldValue("ascendant must be an object".to_string())
    })?;
    validate_longitude(ascendant, "ascendant")?;

    let planets = obj
        .get("planets")
        .ok_or_else(|| ChartDataError::MissingField("planets".to_string()))?;
    validate_bodies(planets, "planets")?;

    let chart: ChartData = serde_json::from_value(parsed)
        .map_err(|e| ChartDataError::InvalidFieldValue(e.to_string()))?;
    log::debug!("Loaded chart with {} bodies", chart.planets.len());
    Ok(chart)
}

/// Load a bare array of bodies, as used for a transit overlay
pub fn load_bodies_from_json(json: &str) -> Result<Vec<CelestialBody>, ChartDataError> {
    let parsed: Value =
        serde_json::from_str(json).map_err(|e| ChartDataError::InvalidJson(e.to_string()))?;
    validate_bodies(&parsed, "transits")?;
    serde_json::from_value(parsed).map_err(|e| ChartDataError::InvalidFieldValue(e.to_string()))
}

fn validate_bodies(value: &Value, context: &str) -> Result<(), ChartDataError> {
    let bodies = value.as_array().ok_or_else(|| {
        ChartDataError::InvalidFieldValue(format!("{} must be an array", context))
    })?;

    for (index, body) in bodies.iter().enumerate() {
        let at = format!("{}[{}]", context, index);
        let body = body
            .as_object()
            .ok_or_else(|| ChartDataError::InvalidFieldValue(format!("{} must be an object", at)))?;

        match body.get("name") {
            None => return Err(ChartDataError::MissingField(format!("{}.name", at))),
            Some(name) if name.as_str().map_or(true, |s| s.is_empty()) => {
                return Err(ChartDataError::InvalidFieldValue(format!(
                    "{}.name must be a non-empty string",
                    at
                )));
            }
            Some(_) => {}
        }

        validate_longitude(body, &at)?;

        if let Some(house) = body.get("house") {
            if !house.is_null() {
                let valid = house.as_u64().map_or(false, |h| (1..=12).contains(&h));
                if !valid {
                    return Err(ChartDataError::InvalidFieldValue(format!(
                        "{}.house must be an integer 1-12, got {}",
                        at, house
                    )));
                }
            }
        }
    }

    Ok(())
}

fn validate_longitude(obj: &Map<String, Value>, at: &str) -> Result<(), ChartDataError> {
    let longitude = obj
        .get("longitude")
        .ok_or_else(|| ChartDataError::MissingField(format!("{}.longitude", at)))?;
    match longitude.as_f64() {
        Some(lon) if lon.is_finite() => {
            if !(0.0..360.0).contains(&lon) {
                log::warn!("{}.longitude {} is outside [0, 360)", at, lon);
            }
            Ok(())
        }
        _ => Err(ChartDataError::InvalidFieldValue(format!(
            "{}.longitude must be a number, got {}",
            at, longitude
        ))),
    }
}
