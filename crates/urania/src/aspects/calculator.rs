use crate::aspects::types::{Aspect, AspectType};
use crate::chart::Planet;
use crate::zodiac::normalize_longitude;

/// Fold any angular difference into the minimal separation in [0, 180].
pub fn fold_separation(angle_difference: f64) -> f64 {
    let reduced = normalize_longitude(angle_difference);
    reduced.min(360.0 - reduced)
}

/// Aspect calculator
pub struct AspectCalculator;

impl AspectCalculator {
    /// Create a new aspect calculator
    pub fn new() -> Self {
        Self
    }

    /// Classify an angular difference. Types are tested in
    /// `AspectType::PRIORITY` order and the first one within its orb wins.
    pub fn classify(&self, angle_difference: f64) -> Option<AspectType> {
        if !angle_difference.is_finite() {
            return None;
        }
        let angle = fold_separation(angle_difference);
        AspectType::PRIORITY
            .into_iter()
            .find(|kind| (angle - kind.exact_angle()).abs() <= kind.orb_tolerance())
    }

    /// Deviation of an angular difference from the exact angle of `aspect_type`.
    pub fn orb(&self, angle_difference: f64, aspect_type: AspectType) -> f64 {
        let angle = fold_separation(angle_difference);
        (angle - aspect_type.exact_angle()).abs()
    }

    /// Calculate the aspect between two planets, if any
    pub fn calculate_aspect(&self, a: &Planet, b: &Planet) -> Option<Aspect> {
        let angle = (a.abs_degree - b.abs_degree).abs();
        let aspect_type = self.classify(angle)?;
        Some(Aspect {
            planet_a: a.name.clone(),
            planet_b: b.name.clone(),
            aspect_type,
            orb: self.orb(angle, aspect_type),
            angle,
        })
    }

    /// Compute aspects for every unordered pair of planets
    pub fn compute_chart_aspects(&self, planets: &[Planet]) -> Vec<Aspect> {
        let mut aspects = Vec::new();
        for i in 0..planets.len() {
            for j in (i + 1)..planets.len() {
                if let Some(aspect) = self.calculate_aspect(&planets[i], &planets[j]) {
                    aspects.push(aspect);
                }
            }
        }
        aspects
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}
