use crate::aspects::types::{AspectKind, AspectRecord};
use crate::chart::normalize_longitude;
use crate::layout::placement::PlacedBody;

/// Tolerance either side of an exact aspect angle
pub const DEFAULT_ORB: f64 = 8.0;

/// Orb below which an aspect counts as exact
pub const EXACT_THRESHOLD: f64 = 0.1;

/// Minimal angular distance between two longitudes, in [0, 180].
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = (normalize_longitude(lon1) - normalize_longitude(lon2)).abs();
    if raw_diff > 180.0 {
        360.0 - raw_diff
    } else {
        raw_diff
    }
}

/// Aspect calculator
#[derive(Debug, Clone, Copy)]
pub struct AspectCalculator {
    orb: f64,
}

impl AspectCalculator {
    pub fn new() -> Self {
        Self { orb: DEFAULT_ORB }
    }

    pub fn with_orb(orb: f64) -> Self {
        Self { orb }
    }

    pub fn orb(&self) -> f64 {
        self.orb
    }

    /// Classify a separation; `None` when it falls in no window.
    pub fn classify(&self, separation: f64) -> Option<AspectKind> {
        AspectKind::ALL
            .into_iter()
            .find(|kind| (separation - kind.exact_angle()).abs() < self.orb)
    }

    /// Kind, separation and orb for two longitudes
    pub fn calculate_aspect(&self, lon1: f64, lon2: f64) -> Option<(AspectKind, f64, f64)> {
        let separation = angular_separation(lon1, lon2);
        let kind = self.classify(separation)?;
        Some((kind, separation, (separation - kind.exact_angle()).abs()))
    }

    /// Every aspected unordered pair among placed bodies, in placement order.
    pub fn detect(&self, placed: &[PlacedBody]) -> Vec<AspectRecord> {
        self.detect_pairs(placed)
            .into_iter()
            .map(|(_, _, record)| record)
            .collect()
    }

    /// Same as [`detect`](Self::detect), keeping the indices of both bodies.
    pub fn detect_pairs(&self, placed: &[PlacedBody]) -> Vec<(usize, usize, AspectRecord)> {
        let mut pairs = Vec::new();
        for i in 0..placed.len() {
            for j in (i + 1)..placed.len() {
                let a = &placed[i];
                let b = &placed[j];

                if let Some((kind, separation, orb)) = self.calculate_aspect(a.longitude, b.longitude) {
                    pairs.push((
                        i,
                        j,
                        AspectRecord {
                            body_a: a.id.clone(),
                            body_b: b.id.clone(),
                            kind,
                            separation,
                            orb,
                            is_hard: kind.is_hard(),
                            is_exact: orb < EXACT_THRESHOLD,
                        },
                    ));
                }
            }
        }
        pairs
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separation_wraps() {
        assert_eq!(angular_separation(350.0, 10.0), 20.0);
        assert_eq!(angular_separation(10.0, 350.0), 20.0);
        assert_eq!(angular_separation(0.0, 180.0), 180.0);
        assert_eq!(angular_separation(720.0, 90.0), 90.0);
    }

    #[test]
    fn test_orb_is_exclusive() {
        let calc = AspectCalculator::new();
        assert_eq!(calc.classify(97.9), Some(AspectKind::Square));
        assert_eq!(calc.classify(98.0), None);
        assert_eq!(calc.classify(7.99), Some(AspectKind::Conjunction));
        assert_eq!(calc.classify(8.0), None);
    }

    #[test]
    fn test_custom_orb() {
        let calc = AspectCalculator::with_orb(2.0);
        assert_eq!(calc.classify(123.0), None);
        assert_eq!(calc.classify(121.5), Some(AspectKind::Trine));
    }
}
