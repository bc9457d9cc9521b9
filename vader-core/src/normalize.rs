//! Selection of presentation rows from a raw forecast timeseries.
//!
//! The forecast service returns one chronological list of observations per
//! location. The views built here never re-sort or mutate that list; they
//! only select from it and annotate the picks with display labels.

use chrono::{Days, Local, NaiveDate, Timelike};
use serde::Serialize;

use crate::format::{self, parse_valid_time};
use crate::labels::{self, ThunderRisk};
use crate::model::{Forecast, Observation, location_label};

/// How many upcoming observations the near-term view shows.
pub const NEAR_TERM_CARDS: usize = 6;

/// How many days the midday outlook covers, starting tomorrow.
pub const OUTLOOK_DAYS: usize = 10;

/// The observation shown as "now": the first entry of the timeseries.
///
/// The service emits observations in ascending time order with the nearest
/// one first, so no timestamp comparison is needed here.
pub fn current(timeseries: &[Observation]) -> Option<&Observation> {
    timeseries.first()
}

/// The leading slice of the timeseries shown as near-term cards.
///
/// At most [`NEAR_TERM_CARDS`] entries, in original order, including the
/// entry that [`current`] returns.
pub fn near_term(timeseries: &[Observation]) -> &[Observation] {
    &timeseries[..timeseries.len().min(NEAR_TERM_CARDS)]
}

/// One observation per calendar day, closest to local noon.
///
/// Scans `days + 1` target dates starting at `today` and keeps, per date,
/// the observation whose hour is nearest 12 (first one wins a tie). Days
/// without a parseable observation yield nothing, so the result may have
/// gaps. The first collected pick is dropped, which shifts the outlook to
/// begin tomorrow.
pub fn midday_outlook<'a>(
    timeseries: &'a [Observation],
    today: NaiveDate,
    days: usize,
) -> Vec<&'a Observation> {
    let mut picks: Vec<&Observation> = Vec::new();

    for offset in 0..=days {
        let Some(target) = today.checked_add_days(Days::new(offset as u64)) else {
            break;
        };

        let pick = timeseries
            .iter()
            .filter_map(|obs| parse_valid_time(&obs.valid_time).map(|dt| (obs, dt)))
            .filter(|(_, dt)| dt.date() == target)
            .min_by_key(|(_, dt)| (i64::from(dt.hour()) - 12).abs());

        if let Some((obs, _)) = pick {
            picks.push(obs);
        }
    }

    if !picks.is_empty() {
        picks.remove(0);
    }
    picks
}

/// One observation annotated with everything a renderer needs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationCard {
    pub observation: Observation,
    /// Emoji for the condition summary.
    pub emoji: &'static str,
    /// Swedish condition text; empty when the observation has no summary.
    pub condition: String,
    /// Eight-sector compass label, or a dash when direction is missing.
    pub wind_compass: &'static str,
    /// Icon tier for the cloud cover percentage.
    pub cloud_icon: &'static str,
    /// Risk band, present only when the observation carries a probability.
    pub thunder_risk: Option<ThunderRisk>,
    pub date_label: String,
    pub time_label: String,
}

impl ObservationCard {
    pub fn new(observation: &Observation) -> Self {
        let summary = observation.summary.as_deref().unwrap_or_default();
        ObservationCard {
            emoji: labels::condition_emoji(summary),
            condition: labels::translate_condition(summary),
            wind_compass: labels::wind_compass(observation.wind_direction),
            cloud_icon: labels::cloud_cover_icon(observation.cloud_cover),
            thunder_risk: observation
                .thunder_probability
                .map(ThunderRisk::from_probability),
            date_label: format::format_date_short(&observation.valid_time),
            time_label: format::format_time(&observation.valid_time),
            observation: observation.clone(),
        }
    }
}

/// The three selection views plus the resolved location label.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastView {
    pub location: String,
    pub current: Option<ObservationCard>,
    pub near_term: Vec<ObservationCard>,
    pub midday: Vec<ObservationCard>,
}

/// Build the full presentation view, evaluating "today" from the local clock.
pub fn normalize(forecast: &Forecast) -> ForecastView {
    normalize_at(forecast, Local::now().date_naive())
}

/// Build the full presentation view for an explicit evaluation date.
pub fn normalize_at(forecast: &Forecast, today: NaiveDate) -> ForecastView {
    ForecastView {
        location: location_label(forecast.location.as_ref()),
        current: current(&forecast.timeseries).map(ObservationCard::new),
        near_term: near_term(&forecast.timeseries)
            .iter()
            .map(ObservationCard::new)
            .collect(),
        midday: midday_outlook(&forecast.timeseries, today, OUTLOOK_DAYS)
            .into_iter()
            .map(ObservationCard::new)
            .collect(),
    }
}
