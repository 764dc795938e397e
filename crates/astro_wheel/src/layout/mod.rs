pub mod geometry;
pub mod loader;
pub mod placement;
pub mod rings;

pub use geometry::{RingGeometry, WheelLayout};
pub use loader::{load_bodies_from_json, load_chart_data_from_json, ChartDataError};
pub use placement::{resolve_natal, resolve_overlay, sort_by_longitude, PlacedBody};
pub use rings::{build_house_cusps, build_zodiac_segments, HouseCusp, ZodiacSegment};
