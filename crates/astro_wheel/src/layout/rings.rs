use crate::chart::SIGN_NAMES;
use crate::layout::geometry::WheelLayout;
use crate::rendering::primitives::{Color, Point};
use crate::rendering::visual_config::{VisualConfig, SIGN_SYMBOLS};

/// One 30° band of the zodiac ring
#[derive(Debug, Clone, PartialEq)]
pub struct ZodiacSegment {
    pub index: usize,
    pub name: &'static str,
    pub symbol: &'static str,
    pub start_lon: f64,
    pub end_lon: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub radius_outer: f64,
    pub radius_inner: f64,
    pub label: Point,
    pub color: Color,
}

/// One equal-house cusp and its number label
#[derive(Debug, Clone, PartialEq)]
pub struct HouseCusp {
    pub house: u8,
    pub angle: f64,
    pub from: Point,
    pub to: Point,
    pub label: Point,
}

/// Build the 12 sign segments between the outer and sign radii.
///
/// Boundaries sit on absolute zodiac degrees; only their screen angle
/// follows the ascendant.
pub fn build_zodiac_segments(layout: &WheelLayout, visual: &VisualConfig) -> Vec<ZodiacSegment> {
    let radius_outer = layout.rings.outer;
    let radius_inner = layout.rings.sign;
    let label_radius = (radius_outer + radius_inner) / 2.0;

    SIGN_NAMES
        .iter()
        .zip(SIGN_SYMBOLS.iter())
        .enumerate()
        .map(|(i, (name, symbol))| {
            let start_lon = i as f64 * 30.0;
            let end_lon = (i + 1) as f64 * 30.0;
            let mid_lon = (start_lon + end_lon) / 2.0;

            ZodiacSegment {
                index: i,
                name: *name,
                symbol: *symbol,
                start_lon,
                end_lon,
                start_angle: layout.screen_angle(start_lon),
                end_angle: layout.screen_angle(end_lon),
                radius_outer,
                radius_inner,
                label: layout.point_at(mid_lon, label_radius),
                color: visual.sign_color(i),
            }
        })
        .collect()
}

/// Build 12 cusps spaced every 30° from the ascendant.
pub fn build_house_cusps(layout: &WheelLayout, house_label_ratio: f64) -> Vec<HouseCusp> {
    let rings = &layout.rings;
    let label_radius = rings.house * house_label_ratio;

    (0..12u8)
        .map(|i| {
            let angle = 180.0 - f64::from(i) * 30.0;
            HouseCusp {
                house: i + 1,
                angle,
                from: layout.point_at_angle(angle, rings.sign),
                to: layout.point_at_angle(angle, rings.center),
                // mid-house, not on the cusp line
                label: layout.point_at_angle(angle - 15.0, label_radius),
            }
        })
        .collect()
}
