use std::fmt::Debug;

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;

use crate::error::WeatherError;

pub mod openweather;

pub use openweather::OpenWeatherClient;

/// Something that can answer one weather query URL with a JSON body.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    /// Performs exactly one GET. HTTP failures and non-JSON bodies come back as errors.
    async fn fetch(&self, url: &Url) -> Result<Value, WeatherError>;
}
