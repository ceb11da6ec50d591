use approx::assert_abs_diff_eq;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;
use urania::aspects::AspectType;
use urania::chart::{BirthSubject, ChartAssembler, SourceKind, SubjectRequest};
use urania::source::{ChartSource, FallbackReason};
use urania::zodiac::Locale;

fn ana() -> BirthSubject {
    SubjectRequest {
        name: Some("Ana".to_string()),
        date: Some("1990-01-01".to_string()),
        time: Some("12:00".to_string()),
        place: Some("New York".to_string()),
        latitude: Some(40.7128),
        longitude: Some(-74.0060),
    }
    .validate()
    .unwrap()
}

fn fallback(reason: FallbackReason) -> ChartSource {
    ChartSource::DeterministicFallback(reason)
}

#[test]
fn test_no_credential_end_to_end() {
    let assembler = ChartAssembler::default();
    assert_eq!(assembler.locale(), Locale::PtBr);
    let generated = assembler.assemble(&ana(), fallback(FallbackReason::MissingCredential));

    assert_eq!(generated.source, SourceKind::Fallback);
    assert!(generated.is_demo());
    assert_eq!(generated.chart.planets.len(), 10);
    assert_eq!(generated.chart.houses.len(), 12);
    assert_eq!(generated.chart.aspects.len(), 5);
    assert!(generated.warning.as_deref().is_some_and(|w| !w.is_empty()));
    assert_eq!(generated.chart.name, "Ana");
    assert_eq!(generated.chart.birth_date, "1990-01-01");
    assert_eq!(generated.chart.birth_time, "12:00");
    assert_eq!(generated.chart.birth_place, "New York");
    assert_eq!(generated.timezone, "America/New_York");
}

#[test]
fn test_fallback_is_deterministic_for_planets_and_aspects() {
    let assembler = ChartAssembler::new(Locale::PtBr);
    let first = assembler.assemble_with_rng(
        &ana(),
        fallback(FallbackReason::MissingCredential),
        &mut ChaCha8Rng::seed_from_u64(1),
    );
    let second = assembler.assemble_with_rng(
        &ana(),
        fallback(FallbackReason::MissingCredential),
        &mut ChaCha8Rng::seed_from_u64(2),
    );

    assert_eq!(first.chart.planets, second.chart.planets);
    assert_eq!(first.chart.aspects, second.chart.aspects);
    // Cusps are random; only their placement per sign is fixed.
    for (a, b) in first.chart.houses.iter().zip(&second.chart.houses) {
        assert_eq!(a.house, b.house);
        assert_eq!(a.sign_index, b.sign_index);
    }
}

#[test]
fn test_fallback_warnings_distinguish_reasons() {
    let assembler = ChartAssembler::default();
    let subject = ana();
    let unauthorized = assembler.assemble(&subject, fallback(FallbackReason::Unauthorized));
    let limited = assembler.assemble(&subject, fallback(FallbackReason::RateLimited));
    let failed = assembler.assemble(
        &subject,
        fallback(FallbackReason::ProviderFailure {
            status: Some(503),
            detail: "unavailable".to_string(),
        }),
    );

    assert_ne!(unauthorized.warning, limited.warning);
    assert_ne!(limited.warning, failed.warning);
    assert_eq!(unauthorized.chart.planets, limited.chart.planets);
}

#[test]
fn test_fallback_planet_table() {
    let generated =
        ChartAssembler::new(Locale::En).assemble(&ana(), fallback(FallbackReason::MissingCredential));
    let sun = &generated.chart.planets[0];
    assert_eq!(sun.name, "Sun");
    assert_eq!(sun.sign, "Leo");
    assert_eq!(sun.sign_index, 4);
    assert_abs_diff_eq!(sun.degree, 15.5);
    assert_abs_diff_eq!(sun.abs_degree, 135.5);
    assert_eq!(sun.house, 1);

    let first = &generated.chart.aspects[0];
    assert_eq!((first.planet_a.as_str(), first.planet_b.as_str()), ("Sun", "Moon"));
    assert_eq!(first.aspect_type, AspectType::Trine);
    assert_abs_diff_eq!(first.orb, 2.1);
}

#[test]
fn test_live_payload_recomputes_signs() {
    let payload = json!({
        "data": {
            "planets": [
                {"name": "sun", "longitude": 135.5, "sign": {"name": "Ari"}, "house": 10},
                {"name": "moon", "degree": -10.0},
                {"name": "north_node", "abs_pos": "200.25", "house": "Seventh_House"},
                {}
            ],
            "houses": [],
            "aspects": []
        }
    });

    let generated = ChartAssembler::new(Locale::En).assemble(&ana(), ChartSource::LiveProvider(payload));
    assert_eq!(generated.source, SourceKind::Live);
    assert_eq!(generated.warning, None);

    let planets = &generated.chart.planets;
    assert_eq!(planets.len(), 4);

    assert_eq!(planets[0].name, "Sun");
    assert_eq!(planets[0].sign, "Leo");
    assert_eq!(planets[0].house, 10);

    assert_eq!(planets[1].name, "Moon");
    assert_eq!(planets[1].sign_index, 11);
    assert_abs_diff_eq!(planets[1].abs_degree, 350.0);
    assert_eq!(planets[1].house, 1);

    assert_eq!(planets[2].name, "North Node");
    assert_eq!(planets[2].sign_index, 6);
    assert_eq!(planets[2].house, 7);

    assert_eq!(planets[3].name, "Unknown");
    assert_abs_diff_eq!(planets[3].abs_degree, 0.0);
    assert_eq!(planets[3].house, 1);
}

#[test]
fn test_live_houses_sequential_and_evenly_spaced_defaults() {
    let payload = json!({
        "houses": [
            {"longitude": 95.0},
            {"degree": 130.0},
            {},
            {"number": 4, "longitude": 190.0}
        ],
        "planets": [],
        "aspects": []
    });

    let generated = ChartAssembler::new(Locale::En).assemble(&ana(), ChartSource::LiveProvider(payload));
    let houses = &generated.chart.houses;

    assert_eq!(houses.len(), 12);
    let numbers: Vec<u8> = houses.iter().map(|h| h.house).collect();
    assert_eq!(numbers, (1..=12).collect::<Vec<u8>>());

    assert_abs_diff_eq!(houses[0].abs_degree, 95.0);
    assert_abs_diff_eq!(houses[1].abs_degree, 130.0);
    // third entry has no longitude: index * 30
    assert_abs_diff_eq!(houses[2].abs_degree, 60.0);
    assert_abs_diff_eq!(houses[3].abs_degree, 190.0);
    // houses the provider never sent are filled evenly
    assert_abs_diff_eq!(houses[11].abs_degree, 330.0);
}

#[test]
fn test_live_houses_drop_duplicates() {
    let payload = json!({
        "houses": [
            {"number": 1, "longitude": 10.0},
            {"number": 1, "longitude": 50.0},
            {"number": 13, "longitude": 70.0}
        ],
        "planets": []
    });

    let generated = ChartAssembler::new(Locale::En).assemble(&ana(), ChartSource::LiveProvider(payload));
    assert_eq!(generated.chart.houses.len(), 12);
    assert_abs_diff_eq!(generated.chart.houses[0].abs_degree, 10.0);
}

#[test]
fn test_provider_aspects_pass_through() {
    let payload = json!({
        "planets": [
            {"name": "sun", "longitude": 10.0},
            {"name": "moon", "longitude": 125.0}
        ],
        "aspects": [
            {"first_planet": {"name": "sun"}, "second_planet": {"name": "moon"}, "type": "Square", "orb": 3.3, "angle": 93.3},
            {"planet1": "Venus", "planet2": "Mars", "type": "quincunx", "orb": 1.0},
            {}
        ]
    });

    let generated = ChartAssembler::new(Locale::En).assemble(&ana(), ChartSource::LiveProvider(payload));
    let aspects = &generated.chart.aspects;

    // Not re-derived from longitudes, even though sun/moon actually form a trine.
    assert_eq!(aspects.len(), 3);
    assert_eq!(aspects[0].planet_a, "Sun");
    assert_eq!(aspects[0].planet_b, "Moon");
    assert_eq!(aspects[0].aspect_type, AspectType::Square);
    assert_abs_diff_eq!(aspects[0].orb, 3.3);
    assert_abs_diff_eq!(aspects[0].angle, 93.3);

    assert_eq!(aspects[1].planet_a, "Venus");
    assert_eq!(aspects[1].aspect_type, AspectType::Conjunction);
    assert_abs_diff_eq!(aspects[1].angle, 0.0);

    assert_eq!(aspects[2].planet_a, "Unknown");
    assert_eq!(aspects[2].planet_b, "Unknown");
}

#[test]
fn test_missing_aspect_list_is_synthesized() {
    let payload = json!({
        "planets": [
            {"name": "sun", "longitude": 10.0},
            {"name": "moon", "longitude": 125.0},
            {"name": "mars", "longitude": 55.0}
        ]
    });

    let generated = ChartAssembler::new(Locale::En).assemble(&ana(), ChartSource::LiveProvider(payload));
    let aspects = &generated.chart.aspects;

    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].aspect_type, AspectType::Trine);
    assert_abs_diff_eq!(aspects[0].angle, 115.0);
    assert_abs_diff_eq!(aspects[0].orb, 5.0);
}

#[test]
fn test_non_object_payload_falls_back() {
    let generated = ChartAssembler::default()
        .assemble(&ana(), ChartSource::LiveProvider(json!("<html>gateway timeout</html>")));
    assert_eq!(generated.source, SourceKind::Fallback);
    assert_eq!(generated.chart.planets.len(), 10);
    assert!(generated.warning.is_some());
}

#[test]
fn test_generated_chart_json_shape() {
    let generated = ChartAssembler::new(Locale::PtBr)
        .assemble(&ana(), fallback(FallbackReason::MissingCredential));
    let value = serde_json::to_value(&generated).unwrap();

    assert_eq!(value["name"], "Ana");
    assert_eq!(value["birthDate"], "1990-01-01");
    assert_eq!(value["source"], "fallback");
    assert_eq!(value["planets"][0]["signIndex"], 4);
    assert_eq!(value["planets"][0]["sign"], "Leão");
    assert_eq!(value["planets"][0]["absDegree"], 135.5);
    assert_eq!(value["aspects"][0]["type"], "trine");
    assert_eq!(value["aspects"][0]["planetA"], "Sun");
    assert!(value["warning"].is_string());

    let live = ChartAssembler::new(Locale::PtBr)
        .assemble(&ana(), ChartSource::LiveProvider(json!({"planets": []})));
    let value = serde_json::to_value(&live).unwrap();
    assert!(value.get("warning").is_none());
}
