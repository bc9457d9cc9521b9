//! Plain-text rendering of the forecast views.

use vader_core::{ForecastView, Observation, ObservationCard};

/// Render the complete report: current conditions with details, the
/// near-term cards and the ten-day midday outlook.
pub fn render_report(view: &ForecastView) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(view.location.clone());
    lines.push(String::new());

    match &view.current {
        Some(current) => render_current(&mut lines, current),
        None => lines.push("Ingen väderdata tillgänglig.".to_string()),
    }

    if !view.near_term.is_empty() {
        lines.push(String::new());
        lines.push("Kommande timmar".to_string());
        lines.push(String::new());
        for (i, card) in view.near_term.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            render_card(&mut lines, card);
        }
    }

    if !view.midday.is_empty() {
        lines.push(String::new());
        lines.push("10-dagarsprognos — temperatur vid kl. 12".to_string());
        lines.push(String::new());
        for card in &view.midday {
            lines.push(midday_row(card));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_current(lines: &mut Vec<String>, card: &ObservationCard) {
    let obs = &card.observation;

    lines.push(headline(card));
    let stamp = format!("{} {}", card.date_label, card.time_label)
        .trim()
        .to_string();
    if !stamp.is_empty() {
        lines.push(stamp);
    }

    lines.push(String::new());
    lines.push(format!("Luftfuktighet: {}", percent(obs.humidity)));
    lines.push(format!("Lufttryck: {}", unit(obs.air_pressure, "hPa")));
    lines.push(format!("Sikt: {}", kilometers(obs.visibility)));
    lines.push(format!(
        "Molntäcke: {} {}",
        card.cloud_icon,
        percent(obs.cloud_cover)
    ));
}

fn render_card(lines: &mut Vec<String>, card: &ObservationCard) {
    let obs = &card.observation;

    lines.push(
        format!("{}  {}", card.time_label, headline(card))
            .trim()
            .to_string(),
    );

    if obs.wind_speed.is_some() || obs.wind_direction.is_some() {
        let mut wind = format!("  Vind: {} m/s {}", num(obs.wind_speed), card.wind_compass);
        if let Some(gust) = obs.wind_gust {
            wind.push_str(&format!(", byar {gust} m/s"));
        }
        lines.push(wind.trim_end().to_string());
    }

    if let Some(precipitation) = obs.precipitation_mean {
        let mut line = format!("  Nederbörd: {precipitation} mm");
        if let Some(category) = obs.precipitation_category.as_deref() {
            line.push_str(&format!(" ({category})"));
        }
        lines.push(line);
    }

    if obs.humidity.is_some() || obs.cloud_cover.is_some() {
        lines.push(format!(
            "  Luftfuktighet: {}  Molntäcke: {}",
            percent(obs.humidity),
            percent(obs.cloud_cover)
        ));
    }

    if let Some(line) = thunder_line(card) {
        lines.push(line);
    }
}

fn midday_row(card: &ObservationCard) -> String {
    let obs = &card.observation;
    let mut row = format!(
        "{}  {}  {}  {}",
        card.date_label,
        card.emoji,
        temperature(obs),
        card.condition
    )
    .trim_end()
    .to_string();

    if let Some(precipitation) = obs.precipitation_mean.filter(|p| *p > 0.0) {
        row.push_str(&format!(", {precipitation} mm"));
    }
    row
}

fn headline(card: &ObservationCard) -> String {
    format!(
        "{}  {}  {}",
        card.emoji,
        temperature(&card.observation),
        card.condition
    )
    .trim_end()
    .to_string()
}

/// The risk row is only shown when a probability is present and positive.
fn thunder_line(card: &ObservationCard) -> Option<String> {
    let risk = card.thunder_risk?;
    let probability = card.observation.thunder_probability?;
    if probability <= 0.0 {
        return None;
    }
    Some(format!("  Åskrisk: {} ({probability}%)", risk.label()))
}

fn temperature(obs: &Observation) -> String {
    obs.temp.map_or_else(|| "—".to_string(), |t| format!("{t}°C"))
}

fn num(value: Option<f64>) -> String {
    value.map_or_else(|| "—".to_string(), |v| v.to_string())
}

fn percent(value: Option<f64>) -> String {
    value.map_or_else(|| "—".to_string(), |v| format!("{v}%"))
}

fn unit(value: Option<f64>, suffix: &str) -> String {
    value.map_or_else(|| "—".to_string(), |v| format!("{v} {suffix}"))
}

fn kilometers(meters: Option<f64>) -> String {
    meters.map_or_else(|| "—".to_string(), |m| format!("{:.1} km", m / 1000.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;
    use vader_core::{Forecast, normalize_at};

    fn view_for(value: serde_json::Value) -> ForecastView {
        let forecast: Forecast = serde_json::from_value(value).expect("forecast");
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).expect("date");
        normalize_at(&forecast, today)
    }

    fn sample_view() -> ForecastView {
        view_for(json!({
            "location": {"name": "Stockholm"},
            "timeseries": [
                {
                    "validTime": "2024-06-01T09:00",
                    "temp": 18.5,
                    "humidity": 72,
                    "airPressure": 1013,
                    "visibility": 24100,
                    "cloudCover": 45,
                    "windSpeed": 3.2,
                    "windDirection": 225,
                    "windGust": 7.8,
                    "thunderProbability": 0,
                    "summary": "clear sky"
                },
                {
                    "validTime": "2024-06-01T12:00",
                    "temp": 21.0,
                    "windSpeed": 5.0,
                    "windDirection": 90,
                    "precipitationMean": 0.4,
                    "precipitationCategory": "regn",
                    "thunderProbability": 35,
                    "summary": "rain showers"
                },
                {
                    "validTime": "2024-06-02T12:00",
                    "temp": 19.0,
                    "summary": "overcast"
                },
                {
                    "validTime": "2024-06-03T12:00",
                    "temp": 17.5,
                    "precipitationMean": 2.4,
                    "summary": "heavy rain"
                }
            ]
        }))
    }

    #[test]
    fn report_opens_with_location_and_current_conditions() {
        let report = render_report(&sample_view());
        assert!(report.starts_with("Stockholm\n"));
        assert!(report.contains("☀️  18.5°C  Klar himmel"));
        assert!(report.contains("1 juni 09:00"));
        assert!(report.contains("Luftfuktighet: 72%"));
        assert!(report.contains("Lufttryck: 1013 hPa"));
        assert!(report.contains("Sikt: 24.1 km"));
        assert!(report.contains("Molntäcke: ⛅ 45%"));
    }

    #[test]
    fn near_term_cards_carry_wind_precipitation_and_risk() {
        let report = render_report(&sample_view());
        assert!(report.contains("Kommande timmar"));
        assert!(report.contains("Vind: 3.2 m/s SW, byar 7.8 m/s"));
        assert!(report.contains("Nederbörd: 0.4 mm (regn)"));
        assert!(report.contains("Luftfuktighet: 72%  Molntäcke: 45%"));
        assert!(report.contains("Åskrisk: Medel (35%)"));
    }

    #[test]
    fn zero_thunder_probability_hides_the_risk_row() {
        let view = view_for(json!({
            "timeseries": [
                {"validTime": "2024-06-01T09:00", "thunderProbability": 0}
            ]
        }));
        let report = render_report(&view);
        assert!(!report.contains("Åskrisk"));
    }

    #[test]
    fn midday_outlook_lists_one_row_per_day() {
        let report = render_report(&sample_view());
        assert!(report.contains("10-dagarsprognos — temperatur vid kl. 12"));
        assert!(report.contains("2 juni  ☁️  19°C  Mulet"));
        assert!(report.contains("3 juni  🌧️  17.5°C  Kraftigt regn, 2.4 mm"));
    }

    #[test]
    fn missing_values_render_as_dashes() {
        let view = view_for(json!({
            "timeseries": [{"validTime": "2024-06-01T09:00"}]
        }));
        let report = render_report(&view);
        assert!(report.contains("Okänd plats"));
        assert!(report.contains("Luftfuktighet: —"));
        assert!(report.contains("Lufttryck: —"));
        assert!(report.contains("Sikt: —"));
        assert!(report.contains("🌥️  —"));
    }

    #[test]
    fn empty_forecast_reports_no_data() {
        let view = view_for(json!({}));
        let report = render_report(&view);
        assert!(report.contains("Okänd plats"));
        assert!(report.contains("Ingen väderdata tillgänglig."));
        assert!(!report.contains("Kommande timmar"));
        assert!(!report.contains("10-dagarsprognos"));
    }
}
