use tracing::info;

use crate::{
    error::WeatherError,
    provider::WeatherSource,
    query::{RequestKind, Units, build_query},
    render::{render_current, render_forecast},
};

/// Runs one lookup end to end: build the URL, fetch once, render.
///
/// Nothing is rendered unless the fetch succeeded, so an error here means
/// the caller has no partial output to print.
pub async fn lookup<S: AsRef<str>>(
    source: &dyn WeatherSource,
    city_tokens: &[S],
    units: Units,
    kind: RequestKind,
    api_key: &str,
) -> Result<String, WeatherError> {
    let url = build_query(city_tokens, units, kind, api_key)?;
    info!(%kind, %units, "looking up weather");

    let body = source.fetch(&url).await?;

    match kind {
        RequestKind::Current => render_current(&body, units),
        RequestKind::Forecast => render_forecast(&body, units),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use reqwest::{StatusCode, Url};
    use serde_json::{Value, json};

    use super::*;
    use crate::provider::openweather::check_status;

    #[derive(Debug)]
    struct StubSource {
        status: StatusCode,
        body: Value,
        seen: Mutex<Vec<Url>>,
    }

    impl StubSource {
        fn new(status: StatusCode, body: Value) -> Self {
            Self { status, body, seen: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait]
    impl WeatherSource for StubSource {
        async fn fetch(&self, url: &Url) -> Result<Value, WeatherError> {
            self.seen.lock().unwrap().push(url.clone());
            check_status(self.status)?;
            Ok(self.body.clone())
        }
    }

    fn london() -> Value {
        json!({
            "name": "London",
            "weather": [{ "id": 500, "description": "light rain" }],
            "main": { "temp": 15.2, "feels_like": 14.8 },
            "wind": { "speed": 5.0, "deg": 90 }
        })
    }

    #[tokio::test]
    async fn current_lookup_renders_report() {
        colored::control::set_override(false);
        let source = StubSource::new(StatusCode::OK, london());

        let out = lookup(&source, &["London"], Units::Metric, RequestKind::Current, "KEY")
            .await
            .expect("lookup");

        assert!(out.contains("London"));
        assert!(out.contains("🌧️"));
        assert!(out.contains("Light rain"));
        assert!(out.contains("18km/hr"));
        assert!(out.contains("15.2 °C, feels like 14.8 °C"));

        let seen = source.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].path(), "/data/2.5/weather");
        assert!(seen[0].as_str().contains("q=London"));
    }

    #[tokio::test]
    async fn forecast_lookup_hits_forecast_endpoint() {
        colored::control::set_override(false);
        let body = json!({
            "city": { "name": "New York" },
            "list": [{
                "dt": 1_725_451_200,
                "dt_txt": "2024-09-04 12:00:00",
                "main": { "temp": 75.1, "feels_like": 76.0 },
                "weather": [{ "id": 800, "description": "clear sky" }],
                "wind": { "speed": 8.2, "deg": 180 }
            }]
        });
        let source = StubSource::new(StatusCode::OK, body);

        let out = lookup(&source, &["New", "York"], Units::Imperial, RequestKind::Forecast, "KEY")
            .await
            .expect("lookup");

        assert!(out.contains("2024-09-04 12:00:00"));
        assert!(out.contains("☀️"));
        assert!(out.contains("⬆️ Northerly \t8mph"));
        assert!(out.contains("75.1 °F"));

        let seen = source.seen.lock().unwrap();
        assert_eq!(seen[0].path(), "/data/2.5/forecast");
        assert!(seen[0].as_str().contains("q=New+York"));
        assert!(seen[0].as_str().contains("units=imperial"));
    }

    #[tokio::test]
    async fn not_found_produces_no_output() {
        let source = StubSource::new(StatusCode::NOT_FOUND, london());

        let err = lookup(&source, &["Atlantis"], Units::Metric, RequestKind::Current, "KEY")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Can't find weather data for this city.");
        assert_ne!(err.exit_code(), 0);
    }

    #[tokio::test]
    async fn empty_city_never_fetches() {
        let source = StubSource::new(StatusCode::OK, london());
        let tokens: [&str; 0] = [];

        let err = lookup(&source, &tokens, Units::Metric, RequestKind::Current, "KEY")
            .await
            .unwrap_err();

        assert!(matches!(err, WeatherError::Usage(_)));
        assert!(source.seen.lock().unwrap().is_empty());
    }
}
