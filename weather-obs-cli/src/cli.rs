use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use inquire::{Password, PasswordDisplayMode};
use weather_obs_core::{
    Config, ProviderId, WeatherRequest,
    provider::{default_provider_from_config, provider_from_config},
};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-obs", version, about = "Fetch normalized weather observations")]
pub struct Cli {
    /// Log requests and config handling to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// The eight observation fields as a JSON object.
    Json,
    /// Labelled fields with units.
    Text,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure credentials for a specific provider.
    Configure {
        /// Provider short name, e.g. "openweather" or "weatherapi".
        provider: String,

        /// Also make this the default provider.
        #[arg(long)]
        default: bool,
    },

    /// Show current weather for a city.
    Show {
        /// City name, e.g. "Paris" or "New York".
        city: String,

        /// Provider to use instead of the configured default.
        #[arg(long)]
        provider: Option<String>,

        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure { provider, default } => configure(&provider, default),
            Command::Show {
                city,
                provider,
                format,
            } => show(&city, provider.as_deref(), format).await,
        }
    }
}

fn configure(provider: &str, make_default: bool) -> anyhow::Result<()> {
    let id = ProviderId::try_from(provider)?;
    let mut config = Config::load()?;

    let api_key = Password::new(&format!("API key for {id}:"))
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let api_key = api_key.trim().to_string();
    if api_key.is_empty() {
        anyhow::bail!("API key must not be empty");
    }

    config.upsert_provider_api_key(id, api_key);
    if make_default {
        config.set_default_provider(id);
    }

    let path = config.save()?;
    tracing::info!(provider = %id, path = %path.display(), "saved provider credentials");
    println!("Configured {id}. Settings saved to {}", path.display());

    Ok(())
}

async fn show(city: &str, provider: Option<&str>, format: Format) -> anyhow::Result<()> {
    let config = Config::load()?;

    let provider = match provider {
        Some(name) => provider_from_config(ProviderId::try_from(name)?, &config)?,
        None => default_provider_from_config(&config)?,
    };

    let request = WeatherRequest::new(city);
    let observation = provider
        .get_weather(&request)
        .await
        .with_context(|| format!("Could not fetch weather for '{city}' from {}", provider.id()))?;

    let rendered = match format {
        Format::Json => output::to_json(&observation)?,
        Format::Text => output::to_text(&observation, provider.id(), chrono::Local::now()),
    };
    println!("{rendered}");

    Ok(())
}
