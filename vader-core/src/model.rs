use serde::{Deserialize, Serialize};
use std::fmt;

/// Label used whenever no usable location information is available.
pub const UNKNOWN_PLACE: &str = "Okänd plats";

/// What the caller asks the forecast service for: either a free-text place
/// name or a coordinate pair from a geolocation source.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    Name(String),
    Coords { lat: f64, lon: f64 },
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationQuery::Name(name) => f.write_str(name),
            LocationQuery::Coords { lat, lon } => write!(f, "{lat},{lon}"),
        }
    }
}

/// Geocoded location as returned by the forecast service. Display only,
/// never mutated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub name: Option<String>,
    pub display_name: Option<String>,
}

impl Location {
    /// Derive a short human-readable label.
    ///
    /// A non-blank `name` wins outright. Otherwise `display_name` (a
    /// comma-separated geocoder string, possibly with postal codes) is
    /// reduced to locality + optional municipality + country.
    pub fn label(&self) -> String {
        if let Some(name) = self.name.as_deref() {
            if !name.trim().is_empty() {
                return name.to_string();
            }
        }

        let display = self.display_name.as_deref().unwrap_or("");

        let parts: Vec<&str> = display
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .filter(|p| !is_postal_code(p))
            .collect();

        if parts.is_empty() {
            return if display.is_empty() { UNKNOWN_PLACE.to_string() } else { display.to_string() };
        }

        let locality = parts[0];
        let mut municipality = if parts.len() > 1 { parts[1] } else { "" };
        let country = parts[parts.len() - 1];

        // A lone trailing segment often doubles as the country; drop the
        // municipality when it is just the country repeated.
        if !municipality.is_empty() && municipality.to_lowercase() == country.to_lowercase() {
            municipality = "";
        }

        let mut out: Vec<String> = Vec::new();
        if !locality.is_empty() {
            out.push(trim_filler(locality));
        }
        if !municipality.is_empty() {
            out.push(trim_filler(municipality));
        }
        if !country.is_empty() && country != locality && country != municipality {
            out.push(country.to_string());
        }

        if out.is_empty() {
            if display.is_empty() { UNKNOWN_PLACE.to_string() } else { display.to_string() }
        } else {
            out.join(", ")
        }
    }
}

/// Label for an optional location, falling back to the unknown-place text.
pub fn location_label(location: Option<&Location>) -> String {
    match location {
        Some(loc) => loc.label(),
        None => UNKNOWN_PLACE.to_string(),
    }
}

/// Pure 3-6 digit segments are postal codes, not place names.
fn is_postal_code(segment: &str) -> bool {
    (3..=6).contains(&segment.len()) && segment.chars().all(|c| c.is_ascii_digit())
}

fn trim_filler(segment: &str) -> String {
    segment.trim_matches(|c: char| c.is_whitespace() || c == ',' || c == '-').to_string()
}

/// One forecast sample for a fixed valid instant.
///
/// Every field is optional on the wire: the service aggregates an upstream
/// feed and individual samples routinely miss values. `valid_time` is kept
/// as the raw string; parsing happens where a calendar view is derived, so
/// a bad timestamp degrades that one sample instead of the whole response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Observation {
    pub valid_time: String,
    pub temp: Option<f64>,
    pub humidity: Option<f64>,
    pub air_pressure: Option<f64>,
    pub visibility: Option<f64>,
    pub cloud_cover: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_gust: Option<f64>,
    pub wind_direction: Option<f64>,
    pub precipitation_mean: Option<f64>,
    pub precipitation_category: Option<String>,
    pub thunder_probability: Option<f64>,
    pub summary: Option<String>,
}

/// Forecast service response: optional location metadata plus the ordered
/// observation sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Forecast {
    pub location: Option<Location>,
    pub timeseries: Vec<Observation>,
}
