use crate::chart::{BodyId, CelestialBody, Layer};
use crate::layout::geometry::WheelLayout;
use crate::rendering::primitives::{Color, Point};
use crate::rendering::visual_config::VisualConfig;

/// A body resolved onto one of the placement rings
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBody {
    pub id: BodyId,
    pub longitude: f64,
    pub angle: f64,
    pub point: Point,
    /// Connector runs from the glyph ring to the ring it relates to
    pub connector_from: Point,
    pub connector_to: Point,
    pub symbol: String,
    pub color: Color,
    pub retrograde: bool,
    pub retrograde_marker: Option<Point>,
}

/// Stable ascending sort by longitude; equal longitudes keep input order.
pub fn sort_by_longitude(bodies: &[CelestialBody]) -> Vec<&CelestialBody> {
    let mut sorted: Vec<&CelestialBody> = bodies.iter().collect();
    // + 0.0 folds -0.0 into 0.0 so the two tie
    sorted.sort_by(|a, b| (a.longitude + 0.0).total_cmp(&(b.longitude + 0.0)));
    sorted
}

/// Place natal bodies on the placement ring, connectors into the centre void.
pub fn resolve_natal(
    bodies: &[CelestialBody],
    layout: &WheelLayout,
    visual: &VisualConfig,
    marker_offset: [f64; 2],
) -> Vec<PlacedBody> {
    resolve(
        bodies,
        Layer::Natal,
        layout.rings.placement,
        layout.rings.center,
        layout,
        visual,
        marker_offset,
    )
}

/// Place transit bodies on the transit ring, connectors onto the zodiac band.
/// Without a transit ring in the layout nothing is placed.
pub fn resolve_overlay(
    bodies: &[CelestialBody],
    layout: &WheelLayout,
    visual: &VisualConfig,
    marker_offset: [f64; 2],
) -> Vec<PlacedBody> {
    match layout.rings.transit {
        Some(transit) => resolve(
            bodies,
            Layer::Transit,
            transit,
            layout.rings.outer,
            layout,
            visual,
            marker_offset,
        ),
        None => Vec::new(),
    }
}

fn resolve(
    bodies: &[CelestialBody],
    layer: Layer,
    radius: f64,
    connector_radius: f64,
    layout: &WheelLayout,
    visual: &VisualConfig,
    marker_offset: [f64; 2],
) -> Vec<PlacedBody> {
    sort_by_longitude(bodies)
        .into_iter()
        .map(|body| {
            let angle = layout.screen_angle(body.longitude);
            let point = layout.point_at_angle(angle, radius);
            let style = visual.body_style(&body.name);
            let retrograde = body.is_retrograde();

            PlacedBody {
                id: BodyId {
                    name: body.name.clone(),
                    layer,
                },
                longitude: body.longitude,
                angle,
                point,
                connector_from: point,
                connector_to: layout.point_at_angle(angle, connector_radius),
                symbol: style.symbol,
                color: style.color,
                retrograde,
                retrograde_marker: retrograde
                    .then(|| point.offset(marker_offset[0], marker_offset[1])),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::geometry::RingGeometry;

    #[test]
    fn test_sort_is_stable() {
        let bodies = vec![
            CelestialBody::new("B", 50.0),
            CelestialBody::new("A", 10.0),
            CelestialBody::new("C", 50.0),
        ];
        let names: Vec<&str> = sort_by_longitude(&bodies).iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_signed_zeros_tie() {
        let bodies = vec![CelestialBody::new("A", 0.0), CelestialBody::new("B", -0.0)];
        let names: Vec<&str> = sort_by_longitude(&bodies).iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_overlay_needs_transit_ring() {
        let layout = WheelLayout::new(600.0, 600.0, RingGeometry::with_defaults(600.0, 600.0, false), 0.0);
        let placed = resolve_overlay(
            &[CelestialBody::new("Sun", 10.0)],
            &layout,
            &VisualConfig::default(),
            [0.0, 0.0],
        );
        assert!(placed.is_empty());
    }
}
