use crate::aspects::{AspectCalculator, AspectRecord};
use crate::chart::{
    sign_name, CelestialBody, ChartData, ChartSettings, DegreeMinute, FocusState, FocusedBody,
};
use crate::layout::placement::{resolve_natal, resolve_overlay, PlacedBody};
use crate::layout::rings::{build_house_cusps, build_zodiac_segments};
use crate::layout::{RingGeometry, WheelLayout};
use crate::rendering::primitives::{Color, Point, Shape, Stroke, TextAnchor};
use crate::rendering::spec::ChartSpec;
use crate::rendering::visual_config::VisualConfig;

/// ChartSpec generator - runs the whole wheel pipeline for one set of inputs
pub struct ChartSpecGenerator {
    settings: ChartSettings,
    visual_config: VisualConfig,
    calculator: AspectCalculator,
}

impl ChartSpecGenerator {
    /// Create a new generator with default settings
    pub fn new() -> Self {
        Self::with_settings(ChartSettings::default())
    }

    pub fn with_settings(settings: ChartSettings) -> Self {
        let visual_config = VisualConfig::from_settings(&settings);
        let calculator = AspectCalculator::with_orb(settings.orb);
        Self {
            settings,
            visual_config,
            calculator,
        }
    }

    pub fn settings(&self) -> &ChartSettings {
        &self.settings
    }

    /// Generate the wheel. With no chart the spec carries no shapes at all.
    pub fn generate(
        &self,
        chart: Option<&ChartData>,
        transits: Option<&[CelestialBody]>,
        focus: &FocusState,
    ) -> ChartSpec {
        let width = self.settings.width;
        let height = self.settings.height;
        let mut spec = ChartSpec::new(width, height);
        spec.background_color = self.visual_config.background_color;

        let Some(chart) = chart else {
            log::debug!("No chart data, emitting empty wheel");
            return spec;
        };

        let transits = transits.filter(|t| !t.is_empty());
        let rings = RingGeometry::compute(width, height, transits.is_some(), &self.settings);
        let layout = WheelLayout::new(width, height, rings, chart.ascendant.longitude);

        let marker_offset = self.settings.retrograde_marker_offset;
        let natal = resolve_natal(&chart.planets, &layout, &self.visual_config, marker_offset);
        let overlay = transits
            .map(|t| resolve_overlay(t, &layout, &self.visual_config, marker_offset))
            .unwrap_or_default();
        let pairs = self.calculator.detect_pairs(&natal);
        let focused = focus.detail(chart, transits);

        log::debug!(
            "wheel {}x{}: outer={:.1} sign={:.1} house={:.1} placement={:.1} center={:.1} transit={:?}; {} natal, {} transit, {} aspects",
            width,
            height,
            rings.outer,
            rings.sign,
            rings.house,
            rings.placement,
            rings.center,
            rings.transit,
            natal.len(),
            overlay.len(),
            pairs.len()
        );

        let mut shapes = Vec::new();
        self.push_zodiac(&mut shapes, &layout);
        self.push_ring_outlines(&mut shapes, &layout);
        self.push_house_cusps(&mut shapes, &layout);
        self.push_aspect_lines(&mut shapes, &pairs, &natal);
        self.push_bodies(&mut shapes, &natal, 1.0);
        self.push_bodies(&mut shapes, &overlay, self.settings.transit_glyph_scale);
        self.push_center_content(&mut shapes, &layout, chart, focused.as_ref());

        spec.rings = Some(rings);
        spec.shapes = shapes;
        spec.aspects = pairs.into_iter().map(|(_, _, record)| record).collect();
        spec.focused = focused;
        spec
    }

    fn stroke(&self, color: Color, width: f64) -> Stroke {
        Stroke { color, width }
    }

    fn push_zodiac(&self, shapes: &mut Vec<Shape>, layout: &WheelLayout) {
        let outline = self.stroke(self.visual_config.circle_color, self.settings.stroke_circles);
        for segment in build_zodiac_segments(layout, &self.visual_config) {
            shapes.push(Shape::Wedge {
                center: layout.center,
                radius_inner: segment.radius_inner,
                radius_outer: segment.radius_outer,
                start_angle: segment.start_angle,
                end_angle: segment.end_angle,
                fill: segment.color,
                stroke: Some(outline.clone()),
            });
            shapes.push(Shape::Text {
                position: segment.label,
                content: segment.symbol.to_string(),
                size: self.settings.sign_label_size,
                color: self.visual_config.text_color,
                anchor: TextAnchor::Middle,
            });
        }
    }

    fn push_ring_outlines(&self, shapes: &mut Vec<Shape>, layout: &WheelLayout) {
        let rings = &layout.rings;
        let outline = self.stroke(self.visual_config.circle_color, self.settings.stroke_circles);

        let mut radii = Vec::with_capacity(5);
        if let Some(transit) = rings.transit {
            // outer edge of the transit band
            radii.push(transit + self.settings.ring_padding / 2.0);
        }
        radii.extend([rings.outer, rings.sign, rings.house]);

        for radius in radii {
            shapes.push(Shape::Circle {
                center: layout.center,
                radius,
                fill: None,
                stroke: Some(outline.clone()),
            });
        }

        shapes.push(Shape::Circle {
            center: layout.center,
            radius: rings.center,
            fill: Some(self.visual_config.center_color),
            stroke: Some(outline),
        });
    }

    fn push_house_cusps(&self, shapes: &mut Vec<Shape>, layout: &WheelLayout) {
        let stroke = self.stroke(self.visual_config.cusp_color, self.settings.stroke_cusps);
        for cusp in build_house_cusps(layout, self.settings.house_label_ratio) {
            shapes.push(Shape::Line {
                from: cusp.from,
                to: cusp.to,
                stroke: stroke.clone(),
            });
            shapes.push(Shape::Text {
                position: cusp.label,
                content: cusp.house.to_string(),
                size: self.settings.house_label_size,
                color: self.visual_config.cusp_color,
                anchor: TextAnchor::Middle,
            });
        }
    }

    /// Lines join the connector ends on the centre ring, not the glyphs.
    fn push_aspect_lines(
        &self,
        shapes: &mut Vec<Shape>,
        pairs: &[(usize, usize, AspectRecord)],
        natal: &[PlacedBody],
    ) {
        for (i, j, aspect) in pairs.iter().filter(|(_, _, a)| a.kind.is_rendered()) {
            let color = if aspect.is_hard {
                self.visual_config.tension_color
            } else {
                self.visual_config.harmony_color
            };
            shapes.push(Shape::AspectLine {
                from: natal[*i].connector_to,
                to: natal[*j].connector_to,
                aspect: aspect.kind,
                color,
                width: self.settings.stroke_aspects,
            });
        }
    }

    fn push_bodies(&self, shapes: &mut Vec<Shape>, placed: &[PlacedBody], scale: f64) {
        let connector = self.stroke(
            self.visual_config.connector_color,
            self.settings.stroke_connectors,
        );
        for body in placed {
            shapes.push(Shape::Line {
                from: body.connector_from,
                to: body.connector_to,
                stroke: connector.clone(),
            });
            shapes.push(Shape::BodyGlyph {
                center: body.point,
                body: body.id.clone(),
                symbol: body.symbol.clone(),
                size: self.settings.glyph_size * scale,
                color: body.color,
                retrograde: body.retrograde,
                hit_radius: self.settings.hit_radius * scale,
            });
            if let Some(marker) = body.retrograde_marker {
                shapes.push(Shape::Text {
                    position: marker,
                    content: "℞".to_string(),
                    size: self.settings.retrograde_marker_size * scale,
                    color: body.color,
                    anchor: TextAnchor::Start,
                });
            }
        }
    }

    /// Ascendant summary by default; the focused body while one is focused.
    fn push_center_content(
        &self,
        shapes: &mut Vec<Shape>,
        layout: &WheelLayout,
        chart: &ChartData,
        focused: Option<&FocusedBody>,
    ) {
        let lines: Vec<String> = match focused {
            Some(body) => vec![
                body.id.name.clone(),
                body.position.to_string(),
                body.sign.clone(),
            ],
            None => {
                let asc = &chart.ascendant;
                let sign = if asc.sign.trim().is_empty() {
                    sign_name(asc.longitude).to_string()
                } else {
                    asc.sign.clone()
                };
                vec![
                    "Asc".to_string(),
                    DegreeMinute::from_longitude(asc.longitude).to_string(),
                    sign,
                ]
            }
        };

        let size = self.settings.center_text_size;
        let top = layout.center.y - size * (lines.len() as f64 - 1.0) / 2.0;
        for (i, content) in lines.into_iter().enumerate() {
            shapes.push(Shape::Text {
                position: Point::new(layout.center.x, top + size * i as f64),
                content,
                size,
                color: self.visual_config.text_color,
                anchor: TextAnchor::Middle,
            });
        }
    }
}

impl Default for ChartSpecGenerator {
    fn default() -> Self {
        Self::new()
    }
}
