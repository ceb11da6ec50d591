use crate::aspects::Aspect;
use crate::zodiac::{normalize_longitude, sign_from_abs_degree, sign_name, Locale};
use serde::{Deserialize, Serialize};

/// A planet placed in the zodiac.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub name: String,
    pub sign: String,
    pub sign_index: u8,
    /// Position within the sign, 0 <= degree < 30
    pub degree: f64,
    /// Ecliptic longitude, 0 <= abs_degree < 360
    pub abs_degree: f64,
    pub house: u8,
}

impl Planet {
    /// Place a planet from its longitude. Sign and degree are always derived here.
    pub fn from_longitude(name: impl Into<String>, longitude: f64, house: u8, locale: Locale) -> Self {
        let position = sign_from_abs_degree(longitude);
        Self {
            name: name.into(),
            sign: sign_name(position.sign_index as usize, locale).to_string(),
            sign_index: position.sign_index,
            degree: position.degree,
            abs_degree: normalize_longitude(longitude),
            house,
        }
    }
}

/// A house cusp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct House {
    pub house: u8,
    pub sign: String,
    pub sign_index: u8,
    pub degree: f64,
    pub abs_degree: f64,
}

impl House {
    pub fn from_longitude(house: u8, longitude: f64, locale: Locale) -> Self {
        let position = sign_from_abs_degree(longitude);
        Self {
            house,
            sign: sign_name(position.sign_index as usize, locale).to_string(),
            sign_index: position.sign_index,
            degree: position.degree,
            abs_degree: normalize_longitude(longitude),
        }
    }
}

/// A normalized natal chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub name: String,
    pub birth_date: String,
    pub birth_time: String,
    pub birth_place: String,
    pub planets: Vec<Planet>,
    pub houses: Vec<House>,
    pub aspects: Vec<Aspect>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Live,
    Fallback,
}

/// Assembler output: the chart plus where its data came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedChart {
    #[serde(flatten)]
    pub chart: ChartData,
    pub source: SourceKind,
    /// Approximate IANA zone derived from the birth longitude
    pub timezone: String,
    /// Set whenever demo data replaced provider output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl GeneratedChart {
    pub fn is_demo(&self) -> bool {
        self.source == SourceKind::Fallback
    }
}
