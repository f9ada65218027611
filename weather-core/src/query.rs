use std::{convert::TryFrom, fmt};

use reqwest::Url;

use crate::error::WeatherError;

pub const CURRENT_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

/// Unit system the provider reports values in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    /// Suffix printed after temperatures.
    pub fn temperature_suffix(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Units {
    type Error = WeatherError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            _ => Err(WeatherError::Usage(format!(
                "Unknown unit system '{value}'. Supported: metric, imperial."
            ))),
        }
    }
}

/// Which provider endpoint to ask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestKind {
    #[default]
    Current,
    Forecast,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::Current => "current",
            RequestKind::Forecast => "forecast",
        }
    }

    /// Every kind, in declaration order. Library API for callers that list modes.
    pub const fn all() -> &'static [RequestKind] {
        &[RequestKind::Current, RequestKind::Forecast]
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            RequestKind::Current => CURRENT_URL,
            RequestKind::Forecast => FORECAST_URL,
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Library API for callers that take the mode as text. An unknown kind is a
/// fatal [`WeatherError::Usage`]; the bundled CLI maps its flags to the enum directly.
impl TryFrom<&str> for RequestKind {
    type Error = WeatherError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "current" => Ok(RequestKind::Current),
            "forecast" => Ok(RequestKind::Forecast),
            _ => Err(WeatherError::Usage(format!(
                "Unknown request kind '{value}'. Supported: current, forecast."
            ))),
        }
    }
}

/// Builds the provider URL for `city_tokens` joined by single spaces.
///
/// The city is form-encoded, so spaces become `+`.
pub fn build_query<S: AsRef<str>>(
    city_tokens: &[S],
    units: Units,
    kind: RequestKind,
    api_key: &str,
) -> Result<Url, WeatherError> {
    let city = city_tokens.iter().map(|token| token.as_ref()).collect::<Vec<&str>>().join(" ");
    if city.trim().is_empty() {
        return Err(WeatherError::Usage("A city name is required.".to_string()));
    }

    Url::parse_with_params(
        kind.endpoint(),
        &[("q", city.as_str()), ("units", units.as_str()), ("appid", api_key)],
    )
    .map_err(|e| WeatherError::Usage(format!("Could not build request URL: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_query_for_multi_word_city() {
        let url = build_query(&["New", "York"], Units::Metric, RequestKind::Current, "KEY")
            .expect("query should build");
        let s = url.as_str();

        assert!(s.starts_with(CURRENT_URL));
        assert!(s.contains("q=New+York"));
        assert!(s.contains("units=metric"));
        assert!(s.contains("appid=KEY"));
    }

    #[test]
    fn forecast_query_uses_forecast_endpoint_and_imperial_units() {
        let url = build_query(&["Paris"], Units::Imperial, RequestKind::Forecast, "KEY")
            .expect("query should build");

        assert_eq!(url.path(), "/data/2.5/forecast");
        assert!(url.as_str().contains("units=imperial"));
    }

    #[test]
    fn city_is_percent_encoded() {
        let url = build_query(&["São", "Paulo&x=1"], Units::Metric, RequestKind::Current, "KEY")
            .expect("query should build");
        let city = url
            .query_pairs()
            .find(|(k, _)| k == "q")
            .map(|(_, v)| v.into_owned());

        assert_eq!(city.as_deref(), Some("São Paulo&x=1"));
        assert!(!url.as_str().contains("Paulo&x"));
    }

    #[test]
    fn empty_city_is_a_usage_error() {
        let tokens: [&str; 0] = [];
        let err = build_query(&tokens, Units::Metric, RequestKind::Current, "KEY").unwrap_err();
        assert!(matches!(err, WeatherError::Usage(_)));
    }

    #[test]
    fn request_kind_as_str_roundtrip() {
        for kind in RequestKind::all() {
            let parsed = RequestKind::try_from(kind.as_str()).expect("roundtrip should succeed");
            assert_eq!(*kind, parsed);
        }
    }

    #[test]
    fn unknown_request_kind_is_fatal() {
        let err = RequestKind::try_from("hourly").unwrap_err();
        assert!(matches!(err, WeatherError::Usage(_)));
        assert!(err.to_string().contains("Unknown request kind"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn units_parse() {
        assert_eq!(Units::try_from("Imperial").unwrap(), Units::Imperial);
        assert_eq!(Units::default(), Units::Metric);
        assert!(Units::try_from("kelvin").is_err());
    }
}
