//! Coarse labels derived from an observation for display.
//!
//! Matching is keyword based on the lowercased condition text, so provider
//! wording like "Light rain" or "Overcast clouds" lands in the same bucket.

use std::fmt;

use weather_obs_core::WeatherObservation;

/// What the condition text says about the sky. Checked in declaration order;
/// anything unrecognised counts as clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sky {
    Rain,
    Cloudy,
    Snow,
    Thunder,
    Clear,
}

impl Sky {
    pub fn from_condition(condition: &str) -> Self {
        let condition = condition.to_lowercase();

        if condition.contains("rain") {
            Self::Rain
        } else if condition.contains("cloud") {
            Self::Cloudy
        } else if condition.contains("snow") {
            Self::Snow
        } else if condition.contains("thunder") {
            Self::Thunder
        } else {
            Self::Clear
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Rain => "rain",
            Self::Cloudy => "cloudy",
            Self::Snow => "snow",
            Self::Thunder => "thunder",
            Self::Clear => "clear",
        }
    }
}

impl fmt::Display for Sky {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Overall feel of an observation: wet or overcast skies win over temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outlook {
    Rainy,
    Cloudy,
    Cold,
    Mild,
    Hot,
}

impl Outlook {
    pub const COLD_MAX_C: f64 = 15.0;
    pub const HOT_MIN_C: f64 = 30.0;

    /// `temperature` is `None` when the reading was not supplied; an outlook
    /// can then only come from the condition text.
    pub fn classify(condition: &str, temperature: Option<f64>) -> Option<Self> {
        let condition = condition.to_lowercase();
        if condition.contains("rain") {
            return Some(Self::Rainy);
        }
        if condition.contains("cloud") {
            return Some(Self::Cloudy);
        }

        let temp = temperature?.round();
        if temp <= Self::COLD_MAX_C {
            Some(Self::Cold)
        } else if temp < Self::HOT_MIN_C {
            Some(Self::Mild)
        } else {
            Some(Self::Hot)
        }
    }

    /// A zero temperature reads as "not supplied".
    pub fn of(obs: &WeatherObservation) -> Option<Self> {
        let temperature = (obs.temperature() != 0.0).then_some(obs.temperature());
        Self::classify(obs.condition(), temperature)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Rainy => "rainy",
            Self::Cloudy => "cloudy",
            Self::Cold => "cold",
            Self::Mild => "mild",
            Self::Hot => "hot",
        }
    }
}

impl fmt::Display for Outlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
