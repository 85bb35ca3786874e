use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::{
    model::{WeatherObservation, WeatherRequest},
    provider::{ProviderId, http_client, log_issues, require_city, truncate_body},
};

use super::WeatherProvider;

const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com";

/// WeatherAPI.com current-conditions adapter.
///
/// Wind is converted from km/h to m/s; pressure (mb == hPa) and visibility (km)
/// are rounded to whole numbers.
#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
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

    async fn fetch_current(&self, city: &str) -> Result<WaResponse> {
        let url = format!("{}/v1/current.json", self.base_url);
        tracing::debug!(%url, city, "requesting WeatherAPI current conditions");

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", city)])
            .send()
            .await
            .context("Failed to send request to WeatherAPI.com (current)")?;

        let status = res.status();
        let body = res.text().await.context("Failed to read WeatherAPI current response body")?;

        if !status.is_success() {
            return Err(anyhow::anyhow!(
                "WeatherAPI current request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        serde_json::from_str(&body).context("Failed to parse WeatherAPI current JSON")
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    humidity: i32,
    pressure_mb: f64,
    wind_kph: f64,
    vis_km: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

impl From<WaResponse> for WeatherObservation {
    fn from(parsed: WaResponse) -> Self {
        let current = parsed.current;

        let mut obs = WeatherObservation::new();
        obs.set_city(parsed.location.name);
        obs.set_country(parsed.location.country);
        obs.set_temperature(current.temp_c);
        obs.set_humidity(current.humidity);
        obs.set_pressure(current.pressure_mb.round() as i32);
        obs.set_wind_speed(current.wind_kph / 3.6);
        obs.set_visibility(current.vis_km.round() as i32);
        obs.set_condition(current.condition.text);
        obs
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    fn id(&self) -> ProviderId {
        ProviderId::WeatherApi
    }

    async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherObservation> {
        let city = require_city(request)?;
        let parsed = self.fetch_current(city).await?;

        Ok(log_issues(self.id(), parsed.into()))
    }
}
