use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::{
    model::{WeatherObservation, WeatherRequest},
    provider::{ProviderId, http_client, log_issues, require_city, truncate_body},
};

use super::WeatherProvider;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// OpenWeather current-weather adapter.
///
/// Requests `units=metric`, so temperature is °C and wind is m/s. Visibility is
/// reported in metres upstream and rounded to the nearest whole km, so anything
/// under 500 m is stored as 0 and reads as "not supplied".
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL, timeout)
    }

    pub fn with_base_url(api_key: String, base_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: http_client(timeout)?,
        })
    }

    async fn fetch_current(&self, city: &str) -> Result<OwCurrentResponse> {
        let url = format!("{}/data/2.5/weather", self.base_url);
        tracing::debug!(%url, city, "requesting OpenWeather current conditions");

        let res = self
            .http
            .get(&url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await
            .context("Failed to send request to OpenWeather (current weather)")?;

        let status = res.status();
        let body = res.text().await.context("Failed to read OpenWeather current response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather current request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        serde_json::from_str(&body).context("Failed to parse OpenWeather current JSON")
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: i32,
    pressure: i32,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
    wind: Option<OwWind>,
    sys: Option<OwSys>,
    visibility: Option<i32>,
}

impl From<OwCurrentResponse> for WeatherObservation {
    fn from(parsed: OwCurrentResponse) -> Self {
        let mut obs = WeatherObservation::new();
        obs.set_city(parsed.name);
        obs.set_temperature(parsed.main.temp);
        obs.set_humidity(parsed.main.humidity);
        obs.set_pressure(parsed.main.pressure);

        if let Some(country) = parsed.sys.and_then(|s| s.country) {
            obs.set_country(country);
        }
        if let Some(wind) = parsed.wind {
            obs.set_wind_speed(wind.speed);
        }
        if let Some(metres) = parsed.visibility {
            obs.set_visibility(metres_to_km(metres));
        }
        if let Some(weather) = parsed.weather.into_iter().next() {
            obs.set_condition(weather.main);
        }

        obs
    }
}

fn metres_to_km(metres: i32) -> i32 {
    (f64::from(metres) / 1000.0).round() as i32
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    fn id(&self) -> ProviderId {
        ProviderId::OpenWeather
    }

    async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherObservation> {
        let city = require_city(request)?;
        let parsed = self.fetch_current(city).await?;

        Ok(log_issues(self.id(), parsed.into()))
    }
}
