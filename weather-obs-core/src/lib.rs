//! Core library for `weather-obs`.
//!
//! This crate defines:
//! - The `WeatherObservation` record handed to clients
//! - Plausibility checks producers run on it
//! - Provider adapters that populate it from third-party APIs
//! - Configuration & credentials handling
//!
//! It is used by `weather-obs-cli`, but can also be reused by other binaries or services.

pub mod check;
pub mod config;
pub mod model;
pub mod provider;

pub use check::{Field, ObservationIssue};
pub use config::{Config, ProviderConfig};
pub use model::{WeatherObservation, WeatherRequest, WeatherResponse};
pub use provider::{ProviderId, WeatherProvider};
