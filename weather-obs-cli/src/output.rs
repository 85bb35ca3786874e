use anyhow::Context;
use chrono::{DateTime, Local};
use weather_obs_core::{Field, ProviderId, WeatherObservation, check::unspecified_fields};

use crate::sky::{Outlook, Sky};

const UNKNOWN: &str = "n/a";

/// Field-for-field JSON, values emitted as stored.
pub fn to_json(obs: &WeatherObservation) -> anyhow::Result<String> {
    serde_json::to_string_pretty(obs).context("Failed to serialize observation to JSON")
}

/// Human-readable rendering. Fields still at their zero value print as `n/a`.
pub fn to_text(
    obs: &WeatherObservation,
    provider: ProviderId,
    fetched_at: DateTime<Local>,
) -> String {
    let unknown = unspecified_fields(obs);
    let show = |field: Field, value: String| {
        if unknown.contains(&field) {
            UNKNOWN.to_string()
        } else {
            value
        }
    };

    let place = match (obs.city(), obs.country()) {
        ("", "") => "Unknown location".to_string(),
        (city, "") => city.to_string(),
        ("", country) => country.to_string(),
        (city, country) => format!("{city}, {country}"),
    };

    let condition = show(
        Field::Condition,
        format!("{} ({})", obs.condition(), Sky::from_condition(obs.condition())),
    );
    let outlook = Outlook::of(obs).map_or_else(|| UNKNOWN.to_string(), |o| o.to_string());

    let lines = [
        place,
        format!("  Condition:   {condition}"),
        format!("  Outlook:     {outlook}"),
        format!(
            "  Temperature: {}",
            show(Field::Temperature, format!("{:.1} °C", obs.temperature()))
        ),
        format!("  Humidity:    {}", show(Field::Humidity, format!("{} %", obs.humidity()))),
        format!("  Pressure:    {}", show(Field::Pressure, format!("{} hPa", obs.pressure()))),
        format!(
            "  Wind:        {}",
            show(Field::WindSpeed, format!("{:.1} m/s", obs.wind_speed()))
        ),
        format!(
            "  Visibility:  {}",
            show(Field::Visibility, format!("{} km", obs.visibility()))
        ),
        format!("Fetched {} via {provider}", fetched_at.format("%Y-%m-%d %H:%M")),
    ];

    lines.join("\n")
}
