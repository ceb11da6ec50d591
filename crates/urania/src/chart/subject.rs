//! Birth data intake and validation.

use crate::error::{FieldIssue, ValidationError};
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static::lazy_static! {
    static ref DATE_PATTERN: Regex = Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("valid date pattern");
    static ref TIME_PATTERN: Regex = Regex::new(r"^(\d{2}):(\d{2})$").expect("valid time pattern");
}

/// Unvalidated birth data as it arrives from a form, CLI or JSON body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubjectRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub place: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Validated birth data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthSubject {
    pub name: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:mm`
    pub time: String,
    pub place: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip)]
    date_parts: (i32, u32, u32),
    #[serde(skip)]
    time_parts: (u32, u32),
}

impl BirthSubject {
    /// (year, month, day) as written in `date`
    pub fn date_parts(&self) -> (i32, u32, u32) {
        self.date_parts
    }

    /// (hour, minute) as written in `time`
    pub fn time_parts(&self) -> (u32, u32) {
        self.time_parts
    }
}

impl SubjectRequest {
    /// Validate every field, collecting all violations before failing.
    pub fn validate(&self) -> Result<BirthSubject, ValidationError> {
        let mut issues = Vec::new();

        let name = required_text(&self.name, "name", "Name is required", &mut issues);
        let place = required_text(&self.place, "place", "Place is required", &mut issues);

        let date = self.date.clone().unwrap_or_default();
        let date_parts = parse_date(&date);
        if date_parts.is_none() {
            issues.push(FieldIssue::new("date", "Date must use the YYYY-MM-DD format"));
        }

        let time = self.time.clone().unwrap_or_default();
        let time_parts = parse_time(&time);
        if time_parts.is_none() {
            issues.push(FieldIssue::new("time", "Time must use the HH:mm format"));
        }

        let latitude = coordinate(self.latitude, "latitude", 90.0, &mut issues);
        let longitude = coordinate(self.longitude, "longitude", 180.0, &mut issues);

        match (date_parts, time_parts, latitude, longitude) {
            (Some(date_parts), Some(time_parts), Some(latitude), Some(longitude))
                if issues.is_empty() =>
            {
                Ok(BirthSubject {
                    name,
                    date,
                    time,
                    place,
                    latitude,
                    longitude,
                    date_parts,
                    time_parts,
                })
            }
            _ => Err(ValidationError { issues }),
        }
    }
}

fn required_text(
    value: &Option<String>,
    field: &str,
    message: &str,
    issues: &mut Vec<FieldIssue>,
) -> String {
    match value {
        Some(text) if !text.is_empty() => text.clone(),
        _ => {
            issues.push(FieldIssue::new(field, message));
            String::new()
        }
    }
}

fn coordinate(
    value: Option<f64>,
    field: &str,
    limit: f64,
    issues: &mut Vec<FieldIssue>,
) -> Option<f64> {
    match value {
        Some(v) if v.is_finite() && (-limit..=limit).contains(&v) => Some(v),
        Some(_) => {
            issues.push(FieldIssue::new(
                field,
                format!("{} must be between -{} and {}", capitalize_first(field), limit, limit),
            ));
            None
        }
        None => {
            issues.push(FieldIssue::new(field, format!("{} is required", capitalize_first(field))));
            None
        }
    }
}

fn parse_date(date: &str) -> Option<(i32, u32, u32)> {
    let caps = DATE_PATTERN.captures(date)?;
    Some((
        caps[1].parse().ok()?,
        caps[2].parse().ok()?,
        caps[3].parse().ok()?,
    ))
}

fn parse_time(time: &str) -> Option<(u32, u32)> {
    let caps = TIME_PATTERN.captures(time)?;
    Some((caps[1].parse().ok()?, caps[2].parse().ok()?))
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
