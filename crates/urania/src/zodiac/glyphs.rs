const PLANET_SYMBOLS: &[(&str, &str)] = &[
    ("Sun", "☉"),
    ("Moon", "☽"),
    ("Mercury", "☿"),
    ("Venus", "♀"),
    ("Mars", "♂"),
    ("Jupiter", "♃"),
    ("Saturn", "♄"),
    ("Uranus", "♅"),
    ("Neptune", "♆"),
    ("Pluto", "♇"),
    ("North Node", "☊"),
    ("South Node", "☋"),
    ("Chiron", "⚷"),
    ("Ascendant", "AC"),
    ("Midheaven", "MC"),
];

/// Glyph for a planet identifier. Unknown identifiers use their first character.
pub fn planet_symbol(planet: &str) -> String {
    PLANET_SYMBOLS
        .iter()
        .find(|(name, _)| *name == planet)
        .map(|(_, symbol)| symbol.to_string())
        .unwrap_or_else(|| planet.chars().next().map(String::from).unwrap_or_default())
}
