//! Fixed zodiac tables.
//!
//! Every lookup is keyed by sign index (0 = Aries .. 11 = Pisces). Indices
//! outside the table never panic; they resolve to a sentinel instead.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language used for sign and aspect display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en")]
    En,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pt-br" | "pt_br" | "pt" => Ok(Locale::PtBr),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            other => Err(format!("Unknown locale: {}", other)),
        }
    }
}

// (pt-BR, en)
const SIGN_NAMES: [(&str, &str); 12] = [
    ("Áries", "Aries"),
    ("Touro", "Taurus"),
    ("Gêmeos", "Gemini"),
    ("Câncer", "Cancer"),
    ("Leão", "Leo"),
    ("Virgem", "Virgo"),
    ("Libra", "Libra"),
    ("Escorpião", "Scorpio"),
    ("Sagitário", "Sagittarius"),
    ("Capricórnio", "Capricorn"),
    ("Aquário", "Aquarius"),
    ("Peixes", "Pisces"),
];

const SIGN_COLORS: [&str; 12] = [
    "#ff6b6b", // Aries
    "#4ecdc4", // Taurus
    "#45b7d1", // Gemini
    "#96ceb4", // Cancer
    "#feca57", // Leo
    "#ff9ff3", // Virgo
    "#54a0ff", // Libra
    "#5f27cd", // Scorpio
    "#00d2d3", // Sagittarius
    "#ff9f43", // Capricorn
    "#10ac84", // Aquarius
    "#ee5a24", // Pisces
];

const UNKNOWN_COLOR: &str = "#gray";

/// Display name of a sign, or the locale's "unknown" label for indices past the table.
pub fn sign_name(sign_index: usize, locale: Locale) -> &'static str {
    match (SIGN_NAMES.get(sign_index), locale) {
        (Some((pt, _)), Locale::PtBr) => pt,
        (Some((_, en)), Locale::En) => en,
        (None, Locale::PtBr) => "Desconhecido",
        (None, Locale::En) => "Unknown",
    }
}

pub fn sign_color(sign_index: usize) -> &'static str {
    SIGN_COLORS.get(sign_index).copied().unwrap_or(UNKNOWN_COLOR)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    /// Tally order used in chart summaries.
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

    pub fn label(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        }
    }

    pub fn display_name(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Element::Fire, Locale::PtBr) => "Fogo",
            (Element::Earth, Locale::PtBr) => "Terra",
            (Element::Air, Locale::PtBr) => "Ar",
            (Element::Water, Locale::PtBr) => "Água",
            (element, Locale::En) => element.label(),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Modality {
    pub const ALL: [Modality; 3] = [Modality::Cardinal, Modality::Fixed, Modality::Mutable];

    pub fn label(self) -> &'static str {
        match self {
            Modality::Cardinal => "Cardinal",
            Modality::Fixed => "Fixed",
            Modality::Mutable => "Mutable",
        }
    }

    pub fn display_name(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Modality::Cardinal, Locale::PtBr) => "Cardinal",
            (Modality::Fixed, Locale::PtBr) => "Fixo",
            (Modality::Mutable, Locale::PtBr) => "Mutável",
            (modality, Locale::En) => modality.label(),
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Elements cycle every 4 signs starting from Aries.
const SIGN_ELEMENTS: [Element; 12] = [
    Element::Fire,
    Element::Earth,
    Element::Air,
    Element::Water,
    Element::Fire,
    Element::Earth,
    Element::Air,
    Element::Water,
    Element::Fire,
    Element::Earth,
    Element::Air,
    Element::Water,
];

const SIGN_MODALITIES: [Modality; 12] = [
    Modality::Cardinal, // Aries
    Modality::Fixed,    // Taurus
    Modality::Mutable,  // Gemini
    Modality::Cardinal, // Cancer
    Modality::Fixed,    // Leo
    Modality::Mutable,  // Virgo
    Modality::Cardinal, // Libra
    Modality::Fixed,    // Scorpio
    Modality::Mutable,  // Sagittarius
    Modality::Cardinal, // Capricorn
    Modality::Fixed,    // Aquarius
    Modality::Mutable,  // Pisces
];

pub fn element_of(sign_index: usize) -> Option<Element> {
    SIGN_ELEMENTS.get(sign_index).copied()
}

pub fn modality_of(sign_index: usize) -> Option<Modality> {
    SIGN_MODALITIES.get(sign_index).copied()
}
