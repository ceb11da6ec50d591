//! Conversion between absolute ecliptic longitude and sign placement.

use serde::{Deserialize, Serialize};

pub const FULL_CIRCLE: f64 = 360.0;
pub const SIGN_SPAN: f64 = 30.0;

/// A longitude split into its sign and the offset inside that sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignPosition {
    /// 0 = Aries .. 11 = Pisces
    pub sign_index: u8,
    /// 0 <= degree < 30
    pub degree: f64,
}

/// Reduce any longitude into [0, 360). Non-finite input maps to 0.
pub fn normalize_longitude(longitude: f64) -> f64 {
    if !longitude.is_finite() {
        return 0.0;
    }
    let reduced = longitude.rem_euclid(FULL_CIRCLE);
    // rem_euclid rounds tiny negative inputs up to the modulus itself
    if reduced >= FULL_CIRCLE {
        0.0
    } else {
        reduced
    }
}

pub fn sign_from_abs_degree(abs_degree: f64) -> SignPosition {
    let reduced = normalize_longitude(abs_degree);
    let degree = reduced % SIGN_SPAN;
    let sign_index = ((reduced - degree) / SIGN_SPAN).round().min(11.0) as u8;
    SignPosition { sign_index, degree }
}

pub fn absolute_degree(sign_index: u8, degree_in_sign: f64) -> f64 {
    f64::from(sign_index) * SIGN_SPAN + degree_in_sign
}

/// Render as `D°MM'`. Minutes are truncated, never carried into the degree.
pub fn format_degree(degree: f64) -> String {
    let (whole, minutes) = split_degree(degree);
    format!("{}°{:02}'", whole, minutes)
}

/// Floor of the degree and floor of its fractional part in arc minutes.
/// Minutes never reach 60, so the degree is never bumped.
pub fn split_degree(degree: f64) -> (i64, i64) {
    let whole = degree.floor();
    let minutes = ((degree - whole) * 60.0).floor().min(59.0);
    (whole as i64, minutes as i64)
}
