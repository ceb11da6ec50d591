use crate::aspects::AspectCalculator;
use crate::chart::data::{ChartData, GeneratedChart, SourceKind};
use crate::chart::fallback::fallback_chart;
use crate::chart::payload::{complete_houses, map_aspects, map_houses, map_planets};
use crate::chart::subject::BirthSubject;
use crate::source::{ChartSource, FallbackReason};
use crate::timezone::iana_zone_for_longitude;
use crate::zodiac::Locale;
use log::{debug, warn};
use rand::Rng;
use serde_json::Value;

/// Builds normalized charts from a subject and a chart source.
pub struct ChartAssembler {
    locale: Locale,
    calculator: AspectCalculator,
}

impl ChartAssembler {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            calculator: AspectCalculator::new(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn assemble(&self, subject: &BirthSubject, source: ChartSource) -> GeneratedChart {
        self.assemble_with_rng(subject, source, &mut rand::thread_rng())
    }

    /// Same as [`assemble`](Self::assemble) with an explicit RNG for fallback house cusps.
    pub fn assemble_with_rng<R: Rng + ?Sized>(
        &self,
        subject: &BirthSubject,
        source: ChartSource,
        rng: &mut R,
    ) -> GeneratedChart {
        let timezone = iana_zone_for_longitude(subject.longitude).to_string();
        let reason = match source {
            ChartSource::LiveProvider(payload) => match self.chart_from_payload(subject, &payload) {
                Ok(chart) => {
                    return GeneratedChart {
                        chart,
                        source: SourceKind::Live,
                        timezone,
                        warning: None,
                    }
                }
                Err(reason) => reason,
            },
            ChartSource::DeterministicFallback(reason) => reason,
        };

        warn!("Using demo chart data: {:?}", reason);
        GeneratedChart {
            chart: fallback_chart(subject, self.locale, rng),
            source: SourceKind::Fallback,
            timezone,
            warning: Some(reason.warning().to_string()),
        }
    }

    fn chart_from_payload(&self, subject: &BirthSubject, payload: &Value) -> Result<ChartData, FallbackReason> {
        if !payload.is_object() {
            return Err(FallbackReason::Processing(
                "provider payload is not a JSON object".to_string(),
            ));
        }

        let planets = map_planets(payload, self.locale);
        let houses = complete_houses(map_houses(payload, self.locale), self.locale);
        // Provider aspects are trusted as given; only a payload without any
        // aspect list gets locally computed ones.
        let aspects = match map_aspects(payload) {
            Some(aspects) => aspects,
            None => {
                debug!("Provider payload has no aspect list, computing aspects locally");
                self.calculator.compute_chart_aspects(&planets)
            }
        };

        Ok(ChartData {
            name: subject.name.clone(),
            birth_date: subject.date.clone(),
            birth_time: subject.time.clone(),
            birth_place: subject.place.clone(),
            planets,
            houses,
            aspects,
        })
    }
}

impl Default for ChartAssembler {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}
