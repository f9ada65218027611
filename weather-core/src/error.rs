use std::path::PathBuf;

use thiserror::Error;

/// Every way a weather lookup can fail. All of them are terminal for the CLI.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to write config file {}: {reason}", path.display())]
    ConfigWrite { path: PathBuf, reason: String },

    #[error("Could not determine platform config directory")]
    ConfigDir,

    #[error(
        "No OpenWeather API key configured in {}.\n\
         Hint: run `weather --configure` and enter your API key.",
        path.display()
    )]
    MissingApiKey { path: PathBuf },

    #[error("Access denied. Check API key")]
    Unauthorized,

    #[error("Can't find weather data for this city.")]
    NotFound,

    #[error("Something went wrong. {0}")]
    Status(u16),

    #[error("Could not reach the weather service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Couldn't read the server response.")]
    Decode,

    #[error("Weather data is missing an expected field: {0}")]
    FieldAccess(String),

    #[error("{0}")]
    Usage(String),
}

impl WeatherError {
    /// Process exit code for this error. Never zero.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => 2,
            Self::ConfigRead { .. }
            | Self::ConfigParse { .. }
            | Self::ConfigWrite { .. }
            | Self::ConfigDir
            | Self::MissingApiKey { .. } => 3,
            Self::Unauthorized => 4,
            Self::NotFound => 5,
            Self::Status(_) | Self::Transport(_) => 6,
            Self::Decode | Self::FieldAccess(_) => 7,
        }
    }
}
