//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Query building for the OpenWeather current and forecast endpoints
//! - A single-request fetcher behind the [`WeatherSource`] trait
//! - Condition/wind classification and the text renderer
//! - Configuration & credentials handling
//!
//! It is used by `weather-cli`, but can also be reused by other binaries.

pub mod classify;
pub mod config;
pub mod error;
pub mod lookup;
pub mod model;
pub mod provider;
pub mod query;
pub mod render;

pub use config::{Config, ProviderConfig};
pub use error::WeatherError;
pub use lookup::lookup;
pub use model::WeatherRecord;
pub use provider::{OpenWeatherClient, WeatherSource};
pub use query::{RequestKind, Units, build_query};
