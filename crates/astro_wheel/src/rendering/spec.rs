use crate::aspects::AspectRecord;
use crate::chart::{BodyId, FocusedBody};
use crate::layout::RingGeometry;
use crate::rendering::primitives::{Color, Point, Shape};
use serde::{Deserialize, Serialize};

/// Chart specification - declarative description of a wheel to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub width: f64,
    pub height: f64,
    pub center: Point,
    pub background_color: Color,
    /// `None` when there was no chart to draw
    pub rings: Option<RingGeometry>,
    /// Paint order: first shape is painted first
    pub shapes: Vec<Shape>,
    pub aspects: Vec<AspectRecord>,
    pub focused: Option<FocusedBody>,
}

impl ChartSpec {
    /// Create a new empty chart spec
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            center: Point {
                x: width / 2.0,
                y: height / 2.0,
            },
            background_color: Color::BLACK,
            rings: None,
            shapes: Vec::new(),
            aspects: Vec::new(),
            focused: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Body glyph under `point`, nearest first when hit areas overlap
    pub fn hit_test(&self, point: Point) -> Option<&BodyId> {
        self.shapes
            .iter()
            .filter_map(|shape| match shape {
                Shape::BodyGlyph {
                    center,
                    body,
                    hit_radius,
                    ..
                } => {
                    let distance = center.distance_to(&point);
                    (distance <= *hit_radius).then_some((distance, body))
                }
                _ => None,
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, body)| body)
    }

    /// Every body glyph with its centre, natal before transit
    pub fn body_glyphs(&self) -> impl Iterator<Item = (&BodyId, Point)> {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::BodyGlyph { center, body, .. } => Some((body, *center)),
            _ => None,
        })
    }
}
