//! Demo chart used whenever real provider data is unavailable.
//!
//! Planets and aspects come from fixed tables, so two fallback charts for the
//! same subject always agree on them. House cusps get a random
//! degree-in-sign and carry no such guarantee.

use crate::aspects::{Aspect, AspectType};
use crate::chart::data::{ChartData, House, Planet};
use crate::chart::subject::BirthSubject;
use crate::zodiac::{absolute_degree, Locale};
use rand::Rng;

// (planet, sign index, degree in sign, house)
const FALLBACK_PLANETS: [(&str, u8, f64, u8); 10] = [
    ("Sun", 4, 15.5, 1),
    ("Moon", 3, 22.3, 12),
    ("Mercury", 5, 8.7, 2),
    ("Venus", 6, 12.1, 3),
    ("Mars", 7, 25.8, 4),
    ("Jupiter", 8, 18.4, 5),
    ("Saturn", 9, 5.2, 6),
    ("Uranus", 10, 14.9, 7),
    ("Neptune", 11, 28.1, 8),
    ("Pluto", 7, 3.6, 4),
];

// (planet a, planet b, type, orb, angle)
const FALLBACK_ASPECTS: [(&str, &str, AspectType, f64, f64); 5] = [
    ("Sun", "Moon", AspectType::Trine, 2.1, 120.0),
    ("Venus", "Mars", AspectType::Conjunction, 1.5, 0.0),
    ("Mercury", "Jupiter", AspectType::Sextile, 3.2, 60.0),
    ("Saturn", "Uranus", AspectType::Square, 4.1, 90.0),
    ("Sun", "Pluto", AspectType::Opposition, 2.8, 180.0),
];

pub fn fallback_planets(locale: Locale) -> Vec<Planet> {
    FALLBACK_PLANETS
        .iter()
        .map(|&(name, sign_index, degree, house)| {
            Planet::from_longitude(name, absolute_degree(sign_index, degree), house, locale)
        })
        .collect()
}

pub fn fallback_aspects() -> Vec<Aspect> {
    FALLBACK_ASPECTS
        .iter()
        .map(|&(a, b, aspect_type, orb, angle)| Aspect {
            planet_a: a.to_string(),
            planet_b: b.to_string(),
            aspect_type,
            orb,
            angle,
        })
        .collect()
}

/// House `n` sits in sign `n - 1` at a random degree.
pub fn fallback_houses<R: Rng + ?Sized>(rng: &mut R, locale: Locale) -> Vec<House> {
    (0u8..12)
        .map(|sign_index| {
            let degree: f64 = rng.gen_range(0.0..30.0);
            House::from_longitude(sign_index + 1, absolute_degree(sign_index, degree), locale)
        })
        .collect()
}

pub fn fallback_chart<R: Rng + ?Sized>(
    subject: &BirthSubject,
    locale: Locale,
    rng: &mut R,
) -> ChartData {
    ChartData {
        name: subject.name.clone(),
        birth_date: subject.date.clone(),
        birth_time: subject.time.clone(),
        birth_place: subject.place.clone(),
        planets: fallback_planets(locale),
        houses: fallback_houses(rng, locale),
        aspects: fallback_aspects(),
    }
}
