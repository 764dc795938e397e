use crate::chart::BodyId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
}

impl AspectKind {
    /// Evaluation order; the first window that matches wins
    pub const ALL: [AspectKind; 4] = [
        AspectKind::Conjunction,
        AspectKind::Opposition,
        AspectKind::Trine,
        AspectKind::Square,
    ];

    pub fn exact_angle(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Opposition => 180.0,
            AspectKind::Trine => 120.0,
            AspectKind::Square => 90.0,
        }
    }

    /// Square and opposition
    pub fn is_hard(self) -> bool {
        matches!(self, AspectKind::Square | AspectKind::Opposition)
    }

    /// Conjunctions overlap their placements and get no line.
    pub fn is_rendered(self) -> bool {
        self != AspectKind::Conjunction
    }

    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Opposition => "opposition",
            AspectKind::Trine => "trine",
            AspectKind::Square => "square",
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified pair of natal bodies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectRecord {
    pub body_a: BodyId,
    pub body_b: BodyId,
    pub kind: AspectKind,
    /// Minimal angular distance, 0-180
    pub separation: f64,
    /// Deviation from the exact angle
    pub orb: f64,
    pub is_hard: bool,
    /// Within 0.1 degrees of exact
    pub is_exact: bool,
}
