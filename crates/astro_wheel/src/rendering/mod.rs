pub mod generator;
pub mod primitives;
pub mod spec;
pub mod svg;
pub mod visual_config;

pub use generator::ChartSpecGenerator;
pub use primitives::{Color, Point, Shape, Stroke, TextAnchor};
pub use spec::ChartSpec;
pub use visual_config::{body_style, BodyStyle, VisualConfig};
