use crate::zodiac::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five major aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectType {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

/// Provider type strings accepted as-is. Anything else becomes a conjunction.
const PROVIDER_ASPECT_TYPES: &[(&str, AspectType)] = &[
    ("conjunction", AspectType::Conjunction),
    ("sextile", AspectType::Sextile),
    ("square", AspectType::Square),
    ("trine", AspectType::Trine),
    ("opposition", AspectType::Opposition),
];

// Indexed by type name; types outside this table print their raw name.
const ASPECT_SYMBOLS: &[(&str, &str)] = &[
    ("conjunction", "☌"),
    ("sextile", "⚹"),
    ("square", "□"),
    ("trine", "△"),
    ("opposition", "☍"),
];

impl AspectType {
    /// Classification order. The first type whose orb matches wins.
    pub const PRIORITY: [AspectType; 5] = [
        AspectType::Conjunction,
        AspectType::Sextile,
        AspectType::Square,
        AspectType::Trine,
        AspectType::Opposition,
    ];

    pub fn exact_angle(self) -> f64 {
        match self {
            AspectType::Conjunction => 0.0,
            AspectType::Sextile => 60.0,
            AspectType::Square => 90.0,
            AspectType::Trine => 120.0,
            AspectType::Opposition => 180.0,
        }
    }

    /// Maximum allowed deviation from the exact angle, in degrees.
    pub fn orb_tolerance(self) -> f64 {
        match self {
            AspectType::Sextile => 6.0,
            _ => 8.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AspectType::Conjunction => "conjunction",
            AspectType::Sextile => "sextile",
            AspectType::Square => "square",
            AspectType::Trine => "trine",
            AspectType::Opposition => "opposition",
        }
    }

    pub fn symbol(self) -> &'static str {
        aspect_symbol(self.as_str())
    }

    pub fn display_name(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (AspectType::Conjunction, Locale::PtBr) => "Conjunção",
            (AspectType::Sextile, Locale::PtBr) => "Sextil",
            (AspectType::Square, Locale::PtBr) => "Quadratura",
            (AspectType::Trine, Locale::PtBr) => "Trígono",
            (AspectType::Opposition, Locale::PtBr) => "Oposição",
            (AspectType::Conjunction, Locale::En) => "Conjunction",
            (AspectType::Sextile, Locale::En) => "Sextile",
            (AspectType::Square, Locale::En) => "Square",
            (AspectType::Trine, Locale::En) => "Trine",
            (AspectType::Opposition, Locale::En) => "Opposition",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            AspectType::Conjunction => "#ff6b6b",
            AspectType::Sextile => "#4ecdc4",
            AspectType::Square => "#ff9f43",
            AspectType::Trine => "#10ac84",
            AspectType::Opposition => "#ee5a24",
        }
    }

    /// Map a provider-supplied type string; unrecognized strings become a conjunction.
    pub fn from_provider(raw: &str) -> AspectType {
        let raw = raw.trim().to_lowercase();
        PROVIDER_ASPECT_TYPES
            .iter()
            .find(|(name, _)| *name == raw)
            .map(|(_, kind)| *kind)
            .unwrap_or(AspectType::Conjunction)
    }
}

impl fmt::Display for AspectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Glyph for an aspect type name, or the name itself when it has none.
pub fn aspect_symbol(type_name: &str) -> &str {
    ASPECT_SYMBOLS
        .iter()
        .find(|(name, _)| *name == type_name)
        .map(|(_, symbol)| *symbol)
        .unwrap_or(type_name)
}

/// An aspect between two planets of the same chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aspect {
    pub planet_a: String,
    pub planet_b: String,
    #[serde(rename = "type")]
    pub aspect_type: AspectType,
    /// Deviation from the exact angle
    pub orb: f64,
    /// Raw separation between the two longitudes
    pub angle: f64,
}
