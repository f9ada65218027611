use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use inquire::{Password, PasswordDisplayMode};
use tracing::{debug, info};
use weather_core::{Config, OpenWeatherClient, RequestKind, Units};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather",
    version,
    about = "Weather app retrieves weather information for a city",
    after_help = "Thank you for visiting!"
)]
pub struct Cli {
    /// City name; multiple words are joined with spaces.
    #[arg(required_unless_present = "configure", num_args = 1..)]
    pub city: Vec<String>,

    /// Display temperature in Fahrenheit and wind speed in mph.
    #[arg(short, long)]
    pub imperial: bool,

    /// Show current weather (the default).
    #[arg(short, long, conflicts_with = "forecast")]
    pub current: bool,

    /// Show the 5-day forecast in 3-hour steps.
    #[arg(short, long)]
    pub forecast: bool,

    /// Config file to use instead of the platform default.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Prompt for the OpenWeather API key and store it in the config file.
    #[arg(long)]
    pub configure: bool,

    /// Increase log verbosity (-v, -vv, -vvv). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn request_kind(&self) -> RequestKind {
        if self.forecast { RequestKind::Forecast } else { RequestKind::Current }
    }

    fn config_path(&self) -> anyhow::Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Ok(Config::config_file_path()?),
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let path = self.config_path()?;
        debug!(path = %path.display(), "using config file");

        if self.configure {
            return configure(&path);
        }

        let config = Config::load(&path)?;
        let api_key = config.require_api_key(&path)?;
        let units = if self.imperial { Units::Imperial } else { config.default_units()? };

        let client = OpenWeatherClient::new();
        let kind = self.request_kind();
        let report =
            weather_core::lookup(&client, self.city.as_slice(), units, kind, api_key).await?;

        print!("{report}");
        Ok(())
    }
}

/// Interactive API key setup.
fn configure(path: &std::path::Path) -> anyhow::Result<()> {
    let mut config = Config::load(path)?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message("Create one at https://home.openweathermap.org/api_keys")
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());
    config.save(path)?;

    info!(path = %path.display(), "stored API key");
    println!("Saved API key to {}", path.display());
    Ok(())
}
