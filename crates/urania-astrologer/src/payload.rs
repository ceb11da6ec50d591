use serde::Serialize;
use urania::chart::BirthSubject;
use urania::timezone::iana_zone_for_longitude;
use urania_config::ProviderSettings;

/// Subject block of the Astrologer v4 `birth-chart` request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectPayload {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub longitude: f64,
    pub latitude: f64,
    pub city: String,
    pub nation: String,
    pub timezone: String,
    pub name: String,
    pub zodiac_type: String,
    pub sidereal_mode: Option<String>,
    pub perspective_type: String,
    pub houses_system_identifier: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthChartRequest {
    pub subject: SubjectPayload,
    pub theme: String,
    pub language: String,
    pub wheel_only: bool,
}

impl BirthChartRequest {
    pub fn new(subject: &BirthSubject, settings: &ProviderSettings) -> Self {
        let (year, month, day) = subject.date_parts();
        let (hour, minute) = subject.time_parts();
        Self {
            subject: SubjectPayload {
                year,
                month,
                day,
                hour,
                minute,
                longitude: subject.longitude,
                latitude: subject.latitude,
                city: city_of(&subject.place),
                nation: settings.nation.clone(),
                timezone: iana_zone_for_longitude(subject.longitude).to_string(),
                name: subject.name.clone(),
                zodiac_type: settings.zodiac_type.clone(),
                sidereal_mode: None,
                perspective_type: settings.perspective_type.clone(),
                houses_system_identifier: settings.house_system.clone(),
            },
            theme: settings.theme.clone(),
            language: settings.language.clone(),
            wheel_only: false,
        }
    }
}

/// First comma-separated part of a place, or the whole place when that part is blank.
fn city_of(place: &str) -> String {
    match place.split(',').next().map(str::trim) {
        Some(city) if !city.is_empty() => city.to_string(),
        _ => place.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use urania::chart::SubjectRequest;

    fn subject(place: &str) -> BirthSubject {
        SubjectRequest {
            name: Some("Ana".to_string()),
            date: Some("1990-01-01".to_string()),
            time: Some("12:05".to_string()),
            place: Some(place.to_string()),
            latitude: Some(40.7128),
            longitude: Some(-74.0060),
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn test_request_fields() {
        let request = BirthChartRequest::new(&subject("New York, NY, USA"), &ProviderSettings::default());
        let s = &request.subject;
        assert_eq!((s.year, s.month, s.day), (1990, 1, 1));
        assert_eq!((s.hour, s.minute), (12, 5));
        assert_eq!(s.city, "New York");
        assert_eq!(s.nation, "BR");
        assert_eq!(s.timezone, "America/New_York");
        assert_eq!(s.houses_system_identifier, "P");
        assert!(!request.wheel_only);
    }

    #[test]
    fn test_request_json_shape() {
        let request = BirthChartRequest::new(&subject("Recife"), &ProviderSettings::default());
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["subject"]["city"], "Recife");
        assert_eq!(value["subject"]["zodiac_type"], "Tropic");
        assert_eq!(value["subject"]["perspective_type"], "Apparent Geocentric");
        assert!(value["subject"]["sidereal_mode"].is_null());
        assert_eq!(value["theme"], "classic");
        assert_eq!(value["language"], "EN");
        assert_eq!(value["wheel_only"], false);
    }

    #[test]
    fn test_city_of_leading_comma() {
        assert_eq!(city_of(", Brazil"), ", Brazil");
        assert_eq!(city_of("São Paulo, SP"), "São Paulo");
    }
}
