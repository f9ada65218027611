use chrono::{DateTime, Utc};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;

use crate::error::WeatherError;

/// One renderable weather snapshot, built from a provider response element.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRecord {
    pub location: String,
    /// Only set for forecast entries.
    pub timestamp: Option<String>,
    pub condition_code: u32,
    pub description: String,
    pub temperature: f64,
    pub feels_like: f64,
    /// Meters per second for metric queries, miles per hour for imperial ones.
    pub wind_speed: f64,
    pub wind_bearing: f64,
}

impl WeatherRecord {
    /// Builds the single record of a current-weather response.
    pub fn from_current(body: &Value) -> Result<Self, WeatherError> {
        let parsed: OwCurrentResponse = from_value(body)?;
        let weather = first_condition(&parsed.weather)?;

        Ok(WeatherRecord {
            location: parsed.name,
            timestamp: None,
            condition_code: weather.id,
            description: weather.description.clone(),
            temperature: parsed.main.temp,
            feels_like: parsed.main.feels_like,
            wind_speed: parsed.wind.speed,
            wind_bearing: parsed.wind.deg,
        })
    }

    /// Builds one record per element of a forecast response's `list`.
    pub fn from_forecast(body: &Value) -> Result<Vec<Self>, WeatherError> {
        let parsed: OwForecastResponse = from_value(body)?;
        if parsed.list.is_empty() {
            return Err(WeatherError::FieldAccess("list[0]".to_string()));
        }
        let location = parsed.city.name;

        parsed
            .list
            .into_iter()
            .map(|entry| -> Result<WeatherRecord, WeatherError> {
                let weather = first_condition(&entry.weather)?;
                Ok(WeatherRecord {
                    location: location.clone(),
                    timestamp: Some(entry.timestamp()?),
                    condition_code: weather.id,
                    description: weather.description.clone(),
                    temperature: entry.main.temp,
                    feels_like: entry.main.feels_like,
                    wind_speed: entry.wind.speed,
                    wind_bearing: entry.wind.deg,
                })
            })
            .collect()
    }
}

fn from_value<T: DeserializeOwned>(body: &Value) -> Result<T, WeatherError> {
    T::deserialize(body).map_err(|e| WeatherError::FieldAccess(e.to_string()))
}

fn first_condition(weather: &[OwWeather]) -> Result<&OwWeather, WeatherError> {
    weather
        .first()
        .ok_or_else(|| WeatherError::FieldAccess("weather[0]".to_string()))
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: u32,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
    deg: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwCity {
    name: String,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    dt_txt: Option<String>,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

impl OwForecastEntry {
    fn timestamp(&self) -> Result<String, WeatherError> {
        if let Some(text) = &self.dt_txt {
            return Ok(text.clone());
        }

        DateTime::<Utc>::from_timestamp(self.dt, 0)
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .ok_or_else(|| WeatherError::FieldAccess(format!("invalid forecast time {}", self.dt)))
    }
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    city: OwCity,
    list: Vec<OwForecastEntry>,
}
