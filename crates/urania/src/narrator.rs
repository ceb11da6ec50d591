//! Plain-text chart summary used as grounding context for a language model.

use crate::aspects::aspect_symbol;
use crate::chart::{ChartData, Planet};
use crate::zodiac::{element_of, modality_of, split_degree, Element, Locale, Modality};
use std::fmt::Write;

struct Labels {
    title: &'static str,
    birth_date: &'static str,
    birth_time: &'static str,
    birth_place: &'static str,
    planets: &'static str,
    houses: &'static str,
    house: &'static str,
    aspects: &'static str,
    orb: &'static str,
    elements: &'static str,
    modalities: &'static str,
    planet_count: &'static str,
}

const EN_LABELS: Labels = Labels {
    title: "NATAL CHART OF",
    birth_date: "Birth date",
    birth_time: "Birth time",
    birth_place: "Birth place",
    planets: "PLANETARY POSITIONS:",
    houses: "HOUSES:",
    house: "House",
    aspects: "ASPECTS:",
    orb: "orb",
    elements: "ELEMENTS:",
    modalities: "MODALITIES:",
    planet_count: "planets",
};

const PT_BR_LABELS: Labels = Labels {
    title: "MAPA ASTRAL DE",
    birth_date: "Data de nascimento",
    birth_time: "Hora",
    birth_place: "Local",
    planets: "POSIÇÕES PLANETÁRIAS:",
    houses: "CASAS ASTROLÓGICAS:",
    house: "Casa",
    aspects: "ASPECTOS PLANETÁRIOS:",
    orb: "orbe",
    elements: "DISTRIBUIÇÃO POR ELEMENTOS:",
    modalities: "DISTRIBUIÇÃO POR MODALIDADES:",
    planet_count: "planetas",
};

fn labels(locale: Locale) -> &'static Labels {
    match locale {
        Locale::En => &EN_LABELS,
        Locale::PtBr => &PT_BR_LABELS,
    }
}

/// Summarize a chart with English labels: header, planets, houses, aspects,
/// then element and modality tallies over planets. The text is never
/// truncated here.
pub fn narrate(chart: &ChartData) -> String {
    narrate_localized(chart, Locale::En)
}

/// Same layout as [`narrate`] with labels in `locale`. Pass the locale the
/// chart was assembled with so labels and sign names agree.
pub fn narrate_localized(chart: &ChartData, locale: Locale) -> String {
    let labels = labels(locale);
    let mut text = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(text, "{} {}", labels.title, chart.name.to_uppercase());
    let _ = writeln!(text, "{}: {}", labels.birth_date, chart.birth_date);
    let _ = writeln!(text, "{}: {}", labels.birth_time, chart.birth_time);
    let _ = writeln!(text, "{}: {}", labels.birth_place, chart.birth_place);

    let _ = writeln!(text, "\n{}", labels.planets);
    for planet in &chart.planets {
        let _ = writeln!(
            text,
            "• {}: {} {} ({} {})",
            planet.name,
            planet.sign,
            degree_minutes(planet.degree),
            labels.house,
            planet.house
        );
    }

    let _ = writeln!(text, "\n{}", labels.houses);
    for house in &chart.houses {
        let _ = writeln!(
            text,
            "• {} {}: {} {}",
            labels.house,
            house.house,
            house.sign,
            degree_minutes(house.degree)
        );
    }

    if !chart.aspects.is_empty() {
        let _ = writeln!(text, "\n{}", labels.aspects);
        for aspect in &chart.aspects {
            let _ = writeln!(
                text,
                "• {} {} {} ({}: {:.1}°)",
                aspect.planet_a,
                aspect_symbol(aspect.aspect_type.as_str()),
                aspect.planet_b,
                labels.orb,
                round_tenths(aspect.orb)
            );
        }
    }

    let _ = writeln!(text, "\n{}", labels.elements);
    for (element, count) in element_tally(&chart.planets) {
        let _ = writeln!(
            text,
            "• {}: {} {}",
            element.display_name(locale),
            count,
            labels.planet_count
        );
    }

    let _ = writeln!(text, "\n{}", labels.modalities);
    for (modality, count) in modality_tally(&chart.planets) {
        let _ = writeln!(
            text,
            "• {}: {} {}",
            modality.display_name(locale),
            count,
            labels.planet_count
        );
    }

    text
}

/// Planet counts per element, in Fire, Earth, Air, Water order.
pub fn element_tally(planets: &[Planet]) -> Vec<(Element, usize)> {
    Element::ALL
        .into_iter()
        .map(|element| {
            let count = planets
                .iter()
                .filter(|p| element_of(p.sign_index as usize) == Some(element))
                .count();
            (element, count)
        })
        .collect()
}

/// Planet counts per modality, in Cardinal, Fixed, Mutable order.
pub fn modality_tally(planets: &[Planet]) -> Vec<(Modality, usize)> {
    Modality::ALL
        .into_iter()
        .map(|modality| {
            let count = planets
                .iter()
                .filter(|p| modality_of(p.sign_index as usize) == Some(modality))
                .count();
            (modality, count)
        })
        .collect()
}

// Minutes unpadded: 15.5 -> 15°30', 3.1 -> 3°6'
fn degree_minutes(degree: f64) -> String {
    let (whole, minutes) = split_degree(degree);
    format!("{}°{}'", whole, minutes)
}

// Halves round away from zero before formatting
fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_minutes() {
        assert_eq!(degree_minutes(15.5), "15°30'");
        assert_eq!(degree_minutes(3.1), "3°6'");
        assert_eq!(degree_minutes(0.0), "0°0'");
    }

    #[test]
    fn test_degree_minutes_truncates_below_boundary() {
        assert_eq!(degree_minutes(29.999999999), "29°59'");
        assert_eq!(degree_minutes(112.3 % 30.0), "22°17'");
    }

    #[test]
    fn test_round_tenths() {
        assert_eq!(format!("{:.1}", round_tenths(2.25)), "2.3");
        assert_eq!(format!("{:.1}", round_tenths(4.04)), "4.0");
    }
}
