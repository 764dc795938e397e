pub mod data;
pub mod focus;
pub mod settings;

pub use data::{
    normalize_longitude, sign_degree, sign_index, sign_name, Ascendant, CelestialBody, ChartData,
    DegreeMinute, SIGN_NAMES,
};
pub use focus::{BodyId, FocusEvent, FocusState, FocusedBody, Layer};
pub use settings::{ChartSettings, SettingsError};

use crate::rendering::primitives::Point;

/// Phase added to every screen angle before it is turned into radians.
pub const PHASE_SHIFT_DEGREES: f64 = -180.0;

/// Screen angle (degrees) of a longitude on a wheel rotated to the ascendant.
///
/// The ascendant itself always lands on 180°; raising the ascendant by Δ
/// raises every screen angle by Δ, so the whole wheel turns rigidly.
pub fn to_screen_angle(longitude: f64, ascendant_longitude: f64) -> f64 {
    180.0 - (longitude - ascendant_longitude)
}

pub fn get_point_position(
    cx: f64,
    cy: f64,
    radius: f64,
    angle_degrees: f64,
    shift_degrees: f64,
) -> Point {
    let angle_rad = (shift_degrees + angle_degrees).to_radians();
    let x = cx + radius * angle_rad.cos();
    let y = cy + radius * angle_rad.sin();
    Point { x, y }
}

/// Cartesian point for a screen angle at `radius` around `center`.
pub fn to_point(angle_degrees: f64, radius: f64, center: Point) -> Point {
    get_point_position(center.x, center.y, radius, angle_degrees, PHASE_SHIFT_DEGREES)
}
