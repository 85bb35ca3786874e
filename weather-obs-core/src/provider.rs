use crate::{
    Config, WeatherObservation, WeatherRequest, check,
    provider::{openweather::OpenWeatherProvider, weatherapi::WeatherApiProvider},
};
use anyhow::{Context, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use std::{fmt::Debug, time::Duration};

pub mod openweather;
pub mod weatherapi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    OpenWeather,
    WeatherApi,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::OpenWeather => "openweather",
            ProviderId::WeatherApi => "weatherapi",
        }
    }

    pub const fn all() -> &'static [ProviderId] {
        &[ProviderId::OpenWeather, ProviderId::WeatherApi]
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProviderId {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.trim().to_lowercase();

        match lower.as_str() {
            "openweather" => Ok(ProviderId::OpenWeather),
            "weatherapi" => Ok(ProviderId::WeatherApi),
            _ => Err(anyhow!(
                "Unknown provider '{value}'. Supported providers: openweather, weatherapi."
            )),
        }
    }
}

/// Producer of [`WeatherObservation`]s for current conditions.
///
/// Implementations convert to °C, hPa, m/s and km before populating the record,
/// and leave fields the upstream API does not report at their zero value.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    fn id(&self) -> ProviderId;

    async fn get_weather(&self, request: &WeatherRequest) -> anyhow::Result<WeatherObservation>;
}

/// Construct a provider from config and explicit ProviderId.
pub fn provider_from_config(
    id: ProviderId,
    config: &Config,
) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let provider_cfg = config.provider_config(id).ok_or_else(|| {
        anyhow!(
            "No API key configured for provider '{id}'.\n\
                 Hint: run `weather-obs configure {id}` and enter your API key."
        )
    })?;

    let api_key = provider_cfg.api_key.clone();
    let timeout = config.request_timeout();

    let boxed: Box<dyn WeatherProvider> = match (id, provider_cfg.base_url.as_deref()) {
        (ProviderId::OpenWeather, Some(url)) => {
            Box::new(OpenWeatherProvider::with_base_url(api_key, url, timeout)?)
        }
        (ProviderId::OpenWeather, None) => Box::new(OpenWeatherProvider::new(api_key, timeout)?),
        (ProviderId::WeatherApi, Some(url)) => {
            Box::new(WeatherApiProvider::with_base_url(api_key, url, timeout)?)
        }
        (ProviderId::WeatherApi, None) => Box::new(WeatherApiProvider::new(api_key, timeout)?),
    };

    Ok(boxed)
}

/// Construct the default provider from config, using `default_provider` field.
pub fn default_provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let id = config.default_provider_id()?;
    provider_from_config(id, config)
}

pub(crate) fn http_client(timeout: Duration) -> anyhow::Result<Client> {
    Client::builder().timeout(timeout).build().context("Failed to build HTTP client")
}

pub(crate) fn require_city(request: &WeatherRequest) -> anyhow::Result<&str> {
    let city = request.city.trim();
    if city.is_empty() {
        return Err(anyhow!("City name must not be empty"));
    }
    Ok(city)
}

/// Runs the plausibility checks and logs what they find. The record is
/// returned as populated.
pub(crate) fn log_issues(provider: ProviderId, obs: WeatherObservation) -> WeatherObservation {
    for issue in check::check(&obs) {
        tracing::warn!(%provider, city = obs.city(), "implausible observation: {issue}");
    }
    obs
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
