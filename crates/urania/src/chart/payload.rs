//! Mapping of raw provider payloads into chart records.
//!
//! Providers disagree on field names, so every field is read through an
//! ordered list of accessor paths: the first path that yields a usable
//! value wins. Missing or malformed values fall back to safe defaults
//! instead of aborting the chart.

use crate::aspects::{Aspect, AspectType};
use crate::chart::data::{House, Planet};
use crate::zodiac::Locale;
use log::debug;
use serde_json::Value;

/// Nested keys, outermost first.
pub type FieldPath = &'static [&'static str];

pub const PLANET_LISTS: &[FieldPath] = &[&["data", "planets"], &["planets"]];
pub const HOUSE_LISTS: &[FieldPath] = &[&["data", "houses"], &["houses"]];
pub const ASPECT_LISTS: &[FieldPath] = &[&["data", "aspects"], &["aspects"]];

pub const PLANET_NAME: &[FieldPath] = &[&["name"]];
pub const LONGITUDE: &[FieldPath] = &[&["longitude"], &["abs_pos"], &["absDegree"], &["degree"]];
pub const PLANET_HOUSE: &[FieldPath] = &[&["house"]];
pub const HOUSE_NUMBER: &[FieldPath] = &[&["number"], &["house"]];

pub const ASPECT_FIRST: &[FieldPath] = &[&["first_planet", "name"], &["p1_name"], &["planet1"]];
pub const ASPECT_SECOND: &[FieldPath] = &[&["second_planet", "name"], &["p2_name"], &["planet2"]];
pub const ASPECT_TYPE: &[FieldPath] = &[&["type"], &["aspect"]];
pub const ASPECT_ORB: &[FieldPath] = &[&["orb"], &["orbit"]];
pub const ASPECT_ANGLE: &[FieldPath] = &[&["angle"], &["aspect_degrees"]];

const UNKNOWN_PLANET: &str = "Unknown";

const PLANET_IDENTIFIERS: &[(&str, &str)] = &[
    ("sun", "Sun"),
    ("moon", "Moon"),
    ("mercury", "Mercury"),
    ("venus", "Venus"),
    ("mars", "Mars"),
    ("jupiter", "Jupiter"),
    ("saturn", "Saturn"),
    ("uranus", "Uranus"),
    ("neptune", "Neptune"),
    ("pluto", "Pluto"),
    ("north_node", "North Node"),
    ("south_node", "South Node"),
    ("chiron", "Chiron"),
    ("ascendant", "Ascendant"),
    ("midheaven", "Midheaven"),
];

const HOUSE_NAMES: [&str; 12] = [
    "first_house",
    "second_house",
    "third_house",
    "fourth_house",
    "fifth_house",
    "sixth_house",
    "seventh_house",
    "eighth_house",
    "ninth_house",
    "tenth_house",
    "eleventh_house",
    "twelfth_house",
];

pub fn lookup<'a>(value: &'a Value, path: FieldPath) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, key| current.get(*key))
}

fn as_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

fn as_house_number(value: &Value) -> Option<u8> {
    let number = match value {
        Value::String(s) => {
            let lowered = s.trim().to_lowercase();
            HOUSE_NAMES
                .iter()
                .position(|name| *name == lowered)
                .map(|index| index as f64 + 1.0)
                .or_else(|| as_number(value))
        }
        _ => as_number(value),
    }?;
    if number.fract() == 0.0 && (1.0..=12.0).contains(&number) {
        Some(number as u8)
    } else {
        None
    }
}

/// First path holding a finite number (numeric strings included).
pub fn first_number(entry: &Value, paths: &[FieldPath]) -> Option<f64> {
    paths
        .iter()
        .find_map(|path| lookup(entry, path).and_then(as_number))
}

/// First path holding a non-empty string.
pub fn first_text<'a>(entry: &'a Value, paths: &[FieldPath]) -> Option<&'a str> {
    paths.iter().find_map(|path| {
        lookup(entry, path)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    })
}

fn first_house_number(entry: &Value, paths: &[FieldPath]) -> Option<u8> {
    paths
        .iter()
        .find_map(|path| lookup(entry, path).and_then(as_house_number))
}

/// Entries of the first list path present in the payload. Keyed objects are
/// accepted too, in which case their values are the entries.
pub fn entries<'a>(payload: &'a Value, lists: &[FieldPath]) -> Option<Vec<&'a Value>> {
    lists.iter().find_map(|path| match lookup(payload, path)? {
        Value::Array(items) => Some(items.iter().collect()),
        Value::Object(map) => Some(map.values().collect()),
        _ => None,
    })
}

/// Display identifier for a provider planet name.
pub fn planet_identifier(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return UNKNOWN_PLANET.to_string();
    };
    let lowered = raw.to_lowercase();
    PLANET_IDENTIFIERS
        .iter()
        .find(|(slug, _)| *slug == lowered)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| raw.to_string())
}

pub fn map_planets(payload: &Value, locale: Locale) -> Vec<Planet> {
    let Some(items) = entries(payload, PLANET_LISTS) else {
        debug!("Provider payload has no planet list");
        return Vec::new();
    };
    items
        .into_iter()
        .map(|entry| {
            let name = planet_identifier(first_text(entry, PLANET_NAME));
            let longitude = first_number(entry, LONGITUDE).unwrap_or(0.0);
            let house = first_house_number(entry, PLANET_HOUSE).unwrap_or(1);
            Planet::from_longitude(name, longitude, house, locale)
        })
        .collect()
}

/// Map house cusps. Cusps without a number are numbered by input order; cusps
/// without a longitude sit at `index * 30`.
pub fn map_houses(payload: &Value, locale: Locale) -> Vec<House> {
    let Some(items) = entries(payload, HOUSE_LISTS) else {
        debug!("Provider payload has no house list");
        return Vec::new();
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let longitude = first_number(entry, LONGITUDE).unwrap_or(index as f64 * 30.0);
            let number = first_house_number(entry, HOUSE_NUMBER)
                .unwrap_or_else(|| u8::try_from(index + 1).unwrap_or(u8::MAX));
            House::from_longitude(number, longitude, locale)
        })
        .collect()
}

/// Provider-supplied aspects, passed through unchanged apart from the type
/// mapping. `None` when the payload carries no aspect list at all.
pub fn map_aspects(payload: &Value) -> Option<Vec<Aspect>> {
    let items = entries(payload, ASPECT_LISTS)?;
    Some(
        items
            .into_iter()
            .map(|entry| Aspect {
                planet_a: planet_identifier(first_text(entry, ASPECT_FIRST)),
                planet_b: planet_identifier(first_text(entry, ASPECT_SECOND)),
                aspect_type: first_text(entry, ASPECT_TYPE)
                    .map(AspectType::from_provider)
                    .unwrap_or(AspectType::Conjunction),
                orb: first_number(entry, ASPECT_ORB).unwrap_or(0.0),
                angle: first_number(entry, ASPECT_ANGLE).unwrap_or(0.0),
            })
            .collect(),
    )
}

/// Enforce exactly one cusp per house 1..=12. Out-of-range and duplicate
/// cusps are dropped; missing houses get an evenly spaced cusp.
pub fn complete_houses(houses: Vec<House>, locale: Locale) -> Vec<House> {
    let mut slots: [Option<House>; 12] = Default::default();
    for house in houses {
        let Some(slot) = (house.house as usize)
            .checked_sub(1)
            .and_then(|index| slots.get_mut(index))
        else {
            debug!("Dropping cusp for out-of-range house {}", house.house);
            continue;
        };
        if slot.is_some() {
            debug!("Dropping duplicate cusp for house {}", house.house);
            continue;
        }
        *slot = Some(house);
    }
    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| {
            slot.unwrap_or_else(|| {
                debug!("Filling missing house {} with an evenly spaced cusp", index + 1);
                House::from_longitude(index as u8 + 1, index as f64 * 30.0, locale)
            })
        })
        .collect()
}
