use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use vader_core::{Config, LocationQuery, normalize, provider_from_config};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "vader", version, about = "Forecast reports in the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the forecast service URL and a default location.
    Configure,

    /// Show the forecast report for a location.
    Show {
        /// Place name, e.g. "Stockholm". Falls back to the configured default.
        location: Option<String>,

        /// Coordinates as "lat,lon", used instead of a place name.
        #[arg(long, conflicts_with = "location")]
        coords: Option<String>,

        /// Print the raw views as JSON instead of the text report.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show {
                location,
                coords,
                json,
            } => show(location, coords.as_deref(), json).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let base_url = inquire::Text::new("Forecast service base URL:")
        .with_initial_value(config.base_url())
        .prompt()
        .context("Failed to read base URL")?;
    config.set_base_url(base_url);

    let default_location = inquire::Text::new("Default location (blank for none):")
        .with_initial_value(config.default_location().unwrap_or_default())
        .prompt()
        .context("Failed to read default location")?;
    config.set_default_location(default_location);

    config.save()?;
    println!(
        "Configuration saved to {}",
        Config::config_file_path()?.display()
    );

    Ok(())
}

async fn show(location: Option<String>, coords: Option<&str>, json: bool) -> anyhow::Result<()> {
    let config = Config::load()?;
    let query = resolve_query(location, coords, &config)?;

    let provider = provider_from_config(&config);
    let forecast = provider
        .fetch(&query)
        .await
        .with_context(|| format!("Failed to fetch forecast for '{query}'"))?;
    tracing::debug!(observations = forecast.timeseries.len(), "forecast received");

    let view = normalize(&forecast);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&view).context("Failed to encode views as JSON")?
        );
    } else {
        print!("{}", render::render_report(&view));
    }

    Ok(())
}

/// Pick the query to send: explicit name first, then coordinates, then the
/// configured default.
fn resolve_query(
    location: Option<String>,
    coords: Option<&str>,
    config: &Config,
) -> anyhow::Result<LocationQuery> {
    if let Some(name) = location {
        return Ok(LocationQuery::Name(name));
    }
    if let Some(raw) = coords {
        return parse_coords(raw);
    }
    if let Some(name) = config.default_location() {
        return Ok(LocationQuery::Name(name.to_string()));
    }

    Err(anyhow!(
        "No location given and no default configured.\n\
         Hint: pass a location (`vader show Stockholm`) or run `vader configure`."
    ))
}

fn parse_coords(raw: &str) -> anyhow::Result<LocationQuery> {
    let (lat, lon) = raw
        .split_once(',')
        .ok_or_else(|| anyhow!("Coordinates must look like 'lat,lon', got '{raw}'"))?;

    let lat: f64 = lat
        .trim()
        .parse()
        .with_context(|| format!("Invalid latitude '{}'", lat.trim()))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .with_context(|| format!("Invalid longitude '{}'", lon.trim()))?;

    Ok(LocationQuery::Coords { lat, lon })
}
