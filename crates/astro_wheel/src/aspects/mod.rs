pub mod calculator;
pub mod types;

pub use calculator::{angular_separation, AspectCalculator, DEFAULT_ORB, EXACT_THRESHOLD};
pub use types::{AspectKind, AspectRecord};
