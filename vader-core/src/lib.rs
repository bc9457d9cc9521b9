//! Core library for the `vader` CLI.
//!
//! This crate defines:
//! - The forecast service wire model and its tolerant deserialization
//! - Selection of presentation views from a raw timeseries
//! - Swedish condition, icon, wind and thunder-risk labels
//! - Date/time formatting, configuration and the HTTP provider
//!
//! It is used by `vader-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod format;
pub mod labels;
pub mod model;
pub mod normalize;
pub mod provider;

pub use config::Config;
pub use labels::ThunderRisk;
pub use model::{Forecast, Location, LocationQuery, Observation};
pub use normalize::{
    ForecastView, NEAR_TERM_CARDS, OUTLOOK_DAYS, ObservationCard, normalize, normalize_at,
};
pub use provider::{
    DEFAULT_BASE_URL, FetchError, ForecastProvider, HttpForecastProvider, provider_from_config,
};
