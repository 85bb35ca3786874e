use serde::{Deserialize, Serialize};

/// What a producer is asked for: current conditions in a named city.
#[derive(Debug, Clone)]
pub struct WeatherRequest {
    pub city: String,
}

impl WeatherRequest {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into() }
    }
}

/// Point-in-time weather reading for a location.
///
/// A transparent value container: every field starts at its zero value and
/// every setter accepts any value of the right type. Range checks live in
/// [`crate::check`] and are the producer's job. A zero value means "not
/// supplied" to consumers, even though the record itself cannot tell the two
/// cases apart.
///
/// Serializes to an object with exactly eight camelCase fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WeatherObservation {
    city: String,
    country: String,
    temperature: f64,
    humidity: i32,
    pressure: i32,
    wind_speed: f64,
    visibility: i32,
    condition: String,
}

/// Name the record goes by on the wire.
pub type WeatherResponse = WeatherObservation;

impl WeatherObservation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }

    /// Country name or ISO code, whichever the producer supplies.
    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn set_country(&mut self, country: impl Into<String>) {
        self.country = country.into();
    }

    /// Air temperature in °C.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn set_temperature(&mut self, temperature: f64) {
        self.temperature = temperature;
    }

    /// Relative humidity in percent.
    pub fn humidity(&self) -> i32 {
        self.humidity
    }

    pub fn set_humidity(&mut self, humidity: i32) {
        self.humidity = humidity;
    }

    /// Barometric pressure in hPa.
    pub fn pressure(&self) -> i32 {
        self.pressure
    }

    pub fn set_pressure(&mut self, pressure: i32) {
        self.pressure = pressure;
    }

    /// Wind speed in whatever unit the producer documents (m/s for the
    /// bundled providers).
    pub fn wind_speed(&self) -> f64 {
        self.wind_speed
    }

    pub fn set_wind_speed(&mut self, wind_speed: f64) {
        self.wind_speed = wind_speed;
    }

    /// Visibility in whatever unit the producer documents (km for the
    /// bundled providers).
    pub fn visibility(&self) -> i32 {
        self.visibility
    }

    pub fn set_visibility(&mut self, visibility: i32) {
        self.visibility = visibility;
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }

    pub fn set_condition(&mut self, condition: impl Into<String>) {
        self.condition = condition.into();
    }
}
