//! Radial chart engine for astrological wheels.
//!
//! Takes already-computed body longitudes and produces a flat list of
//! drawing primitives: zodiac band, equal-house cusps, natal placements,
//! aspect lines and an optional transit ring.

pub mod aspects;
pub mod chart;
pub mod layout;
pub mod rendering;

pub use aspects::{AspectCalculator, AspectKind, AspectRecord};
pub use chart::{
    get_point_position, to_point, to_screen_angle, Ascendant, BodyId, CelestialBody, ChartData,
    ChartSettings, FocusEvent, FocusState, FocusedBody, Layer,
};
pub use layout::{RingGeometry, WheelLayout};
pub use rendering::{ChartSpec, ChartSpecGenerator};

/// Render a wheel with the default settings and no focused body.
pub fn render(chart: Option<&ChartData>, transits: Option<&[CelestialBody]>) -> ChartSpec {
    ChartSpecGenerator::new().generate(chart, transits, &FocusState::Idle)
}

/// Same as [`render`] on a `width` x `height` surface.
pub fn render_sized(
    chart: Option<&ChartData>,
    transits: Option<&[CelestialBody]>,
    width: f64,
    height: f64,
) -> ChartSpec {
    ChartSpecGenerator::with_settings(ChartSettings::default().with_size(width, height))
        .generate(chart, transits, &FocusState::Idle)
}
