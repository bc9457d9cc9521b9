//! Categorical presentation labels derived from observation fields.
//!
//! Everything in here is a total function over (possibly missing) provider
//! data: unknown or absent input maps to a defined fallback, never an error.

use serde::{Deserialize, Serialize};

/// Compass labels indexed clockwise from true north in 45-degree steps.
const COMPASS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// English condition phrases and their Swedish display forms.
const CONDITION_TRANSLATIONS: &[(&str, &str)] = &[
    ("clear sky", "Klar himmel"),
    ("nearly clear sky", "Nästan klar himmel"),
    ("halfclear sky", "Halvklart väder"),
    ("variable cloudiness", "Växlande molnighet"),
    ("cloudy sky", "Molnigt väder"),
    ("overcast", "Mulet"),
    ("fog", "Dimma"),
    ("mist", "Dis"),
    ("rain", "Regn"),
    ("rain showers", "Regnskurar"),
    ("heavy rain", "Kraftigt regn"),
    ("thunder", "Åska"),
    ("thunderstorm", "Åskväder"),
    ("snow", "Snö"),
    ("snow showers", "Snöskurar"),
    ("heavy snow", "Kraftig snö"),
    ("sleet", "Snöblandat regn"),
    ("hail", "Hagel"),
    ("light rain", "Lätt regn"),
    ("drizzle", "Duggregn"),
    ("freezing rain", "Underkylt regn"),
    ("partly cloudy", "Delvis molnigt"),
    ("mostly cloudy", "Mestadels molnigt"),
];

/// Map a free-text condition summary to an emoji.
///
/// Substring rules, first match wins. The rule order is significant: several
/// keywords are substrings of longer phrases further down the list.
pub fn condition_emoji(summary: &str) -> &'static str {
    let s = summary.to_lowercase();
    if s.contains("clear") || s.contains("sunny") {
        return "☀️";
    }
    if s.contains("nearly clear") {
        return "🌤️";
    }
    if s.contains("partly") || s.contains("scattered") {
        return "⛅";
    }
    if s.contains("cloud") || s.contains("overcast") {
        return "☁️";
    }
    if s.contains("rain") || s.contains("shower") || s.contains("drizzle") {
        return "🌧️";
    }
    if s.contains("thunder") || s.contains("storm") {
        return "⛈️";
    }
    if s.contains("snow") || s.contains("sleet") || s.contains("blizzard") {
        return "❄️";
    }
    if s.contains("fog") || s.contains("mist") || s.contains("haze") {
        return "🌫️";
    }
    "🌥️"
}

/// Translate an English condition summary to Swedish.
///
/// Matching is exact after lower-casing and trimming; phrases outside the
/// table come back unmodified.
pub fn translate_condition(summary: &str) -> String {
    let s = summary.to_lowercase();
    let s = s.trim();
    CONDITION_TRANSLATIONS
        .iter()
        .find(|(english, _)| *english == s)
        .map(|(_, swedish)| (*swedish).to_string())
        .unwrap_or_else(|| summary.to_string())
}

/// Compass label for a wind direction in degrees (0 = true north).
///
/// Degrees are reduced modulo 360 first, so any real input maps into the
/// eight-sector table. Missing direction renders as a dash.
pub fn wind_compass(degrees: Option<f64>) -> &'static str {
    let Some(degrees) = degrees else {
        return "—";
    };
    let normalized = degrees.rem_euclid(360.0);
    let index = ((normalized / 45.0).round() as usize) % COMPASS.len();
    COMPASS[index]
}

/// Icon tier for a cloud-cover percentage.
pub fn cloud_cover_icon(cloud_cover: Option<f64>) -> &'static str {
    match cloud_cover {
        None => "🌥️",
        Some(pct) if pct < 20.0 => "☀️",
        Some(pct) if pct < 50.0 => "⛅",
        Some(pct) if pct < 80.0 => "🌥️",
        Some(_) => "☁️",
    }
}

/// Thunder-risk band for a thunder probability percentage.
///
/// Each band carries a fixed pair of presentation style tags consumed by
/// web frontends; they are data, not computed styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThunderRisk {
    Low,
    Moderate,
    High,
}

impl ThunderRisk {
    /// Band a probability percentage. Values at or above 50 (and anything
    /// that fails both comparisons, NaN included) land in the top band.
    pub fn from_probability(probability: f64) -> Self {
        if probability < 20.0 {
            ThunderRisk::Low
        } else if probability < 50.0 {
            ThunderRisk::Moderate
        } else {
            ThunderRisk::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThunderRisk::Low => "Låg",
            ThunderRisk::Moderate => "Medel",
            ThunderRisk::High => "Hög",
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            ThunderRisk::Low => "text-destructive/90 text-green-600",
            ThunderRisk::Moderate => "text-secondary-foreground text-amber-600",
            ThunderRisk::High => "text-destructive",
        }
    }

    pub fn bg_class(self) -> &'static str {
        match self {
            ThunderRisk::Low => "bg-destructive/10",
            ThunderRisk::Moderate => "bg-secondary/10",
            ThunderRisk::High => "bg-destructive/10",
        }
    }
}
