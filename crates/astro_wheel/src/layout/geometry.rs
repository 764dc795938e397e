use crate::chart::{to_point, to_screen_angle, ChartSettings};
use crate::rendering::primitives::Point;
use serde::{Deserialize, Serialize};

/// Radii of the nested wheel bands, outermost first.
///
/// `outer > sign > house > placement > center`; with an overlay,
/// `outer < transit < bounding`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingGeometry {
    /// Half the shorter side of the drawing surface
    pub bounding: f64,
    pub transit: Option<f64>,
    pub outer: f64,
    pub sign: f64,
    pub house: f64,
    pub placement: f64,
    pub center: f64,
}

impl RingGeometry {
    pub fn compute(width: f64, height: f64, has_overlay: bool, settings: &ChartSettings) -> Self {
        let bounding = width.min(height) / 2.0;
        // Radii floor at zero on surfaces too small for the bands
        let (transit, outer) = if has_overlay {
            (
                Some((bounding - settings.ring_padding).max(0.0)),
                (bounding - settings.ring_padding - settings.transit_band).max(0.0),
            )
        } else {
            (None, (bounding - settings.ring_padding).max(0.0))
        };

        let sign = outer * settings.sign_ratio;
        let house = sign * settings.house_ratio;
        let placement = house * settings.placement_ratio;
        let center = placement * settings.center_ratio;

        Self {
            bounding,
            transit,
            outer,
            sign,
            house,
            placement,
            center,
        }
    }

    /// Geometry with the stock padding and ratios
    pub fn with_defaults(width: f64, height: f64, has_overlay: bool) -> Self {
        Self::compute(width, height, has_overlay, &ChartSettings::default())
    }

    pub fn has_overlay(&self) -> bool {
        self.transit.is_some()
    }

    /// Whether every band sits strictly inside the previous one.
    pub fn is_nested(&self) -> bool {
        let chain = self.center > 0.0
            && self.center < self.placement
            && self.placement < self.house
            && self.house < self.sign
            && self.sign < self.outer;
        match self.transit {
            Some(transit) => chain && self.outer < transit && transit < self.bounding,
            None => chain && self.outer < self.bounding,
        }
    }
}

/// Ring geometry bound to a screen centre and an ascendant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelLayout {
    pub center: Point,
    pub rings: RingGeometry,
    pub ascendant: f64,
}

impl WheelLayout {
    pub fn new(width: f64, height: f64, rings: RingGeometry, ascendant: f64) -> Self {
        Self {
            center: Point::new(width / 2.0, height / 2.0),
            rings,
            ascendant,
        }
    }

    pub fn screen_angle(&self, longitude: f64) -> f64 {
        to_screen_angle(longitude, self.ascendant)
    }

    /// Point for a zodiac longitude at `radius`
    pub fn point_at(&self, longitude: f64, radius: f64) -> Point {
        to_point(self.screen_angle(longitude), radius, self.center)
    }

    /// Point for a raw screen angle at `radius`
    pub fn point_at_angle(&self, angle: f64, radius: f64) -> Point {
        to_point(angle, radius, self.center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_chain() {
        let g = RingGeometry::with_defaults(600.0, 600.0, false);
        assert_eq!(g.bounding, 300.0);
        assert_eq!(g.outer, 280.0);
        assert!(g.transit.is_none());
        assert!((g.sign - 238.0).abs() < 1e-9);
        assert!(g.is_nested());
    }

    #[test]
    fn test_uses_shorter_side() {
        let g = RingGeometry::with_defaults(1000.0, 400.0, false);
        assert_eq!(g.bounding, 200.0);
        assert_eq!(g.outer, 180.0);
    }

    #[test]
    fn test_tiny_surface_collapses_to_zero() {
        let g = RingGeometry::with_defaults(50.0, 50.0, true);
        assert_eq!(g.transit, Some(5.0));
        assert_eq!(g.outer, 0.0);
        assert_eq!(g.center, 0.0);
        assert!(!g.is_nested());

        let g = RingGeometry::with_defaults(30.0, 30.0, true);
        assert_eq!(g.transit, Some(0.0));
    }

    #[test]
    fn test_layout_centre() {
        let layout = WheelLayout::new(600.0, 400.0, RingGeometry::with_defaults(600.0, 400.0, false), 0.0);
        assert_eq!(layout.center, Point::new(300.0, 200.0));
        let p = layout.point_at(0.0, 100.0);
        assert!((p.x - 400.0).abs() < 1e-9);
        assert!((p.y - 200.0).abs() < 1e-9);
    }
}
