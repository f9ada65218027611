//! Turns provider responses into the colored text block printed by the CLI.

use colored::{ColoredString, Colorize};
use serde_json::Value;
use tracing::debug;

use crate::{
    classify::{ColorTag, classify_condition, classify_wind},
    error::WeatherError,
    model::WeatherRecord,
    query::Units,
};

/// Column width used to center the location and description fields.
pub const PADDING: usize = 20;

fn rule() -> String {
    "=".repeat(PADDING * 3)
}

/// Renders a current-weather response: rule, record, rule.
pub fn render_current(body: &Value, units: Units) -> Result<String, WeatherError> {
    let record = WeatherRecord::from_current(body)?;
    debug!(location = %record.location, code = record.condition_code, "rendering current weather");

    Ok(format!("{rule}\n{}{rule}\n", render_record(&record, units), rule = rule()))
}

/// Renders a forecast response: one timestamped block per entry, closed by a rule.
pub fn render_forecast(body: &Value, units: Units) -> Result<String, WeatherError> {
    let records = WeatherRecord::from_forecast(body)?;
    debug!(entries = records.len(), "rendering forecast");

    let mut out = String::new();
    for record in &records {
        out.push_str(&rule());
        out.push('\n');
        if let Some(timestamp) = &record.timestamp {
            out.push_str(&format!(" {}\n", timestamp.bold()));
        }
        out.push_str(&render_record(record, units));
    }
    out.push_str(&rule());
    out.push('\n');

    Ok(out)
}

/// Three lines: location and condition, wind, temperature.
pub fn render_record(record: &WeatherRecord, units: Units) -> String {
    let location = format!("{:^width$}", record.location, width = PADDING).reversed();

    let params = classify_condition(record.condition_code);
    let description = format!("{:^width$}", capitalize(&record.description), width = PADDING);
    let condition = paint(&format!("{} {description}", params.glyph), params.color);

    let (speed, speed_unit) = wind_speed(record.wind_speed, units);
    let temp_unit = units.temperature_suffix();

    format!(
        "{location} \t{condition}\n {} \t{speed}{speed_unit}\n ({} {temp_unit}, feels like {} {temp_unit})\n",
        classify_wind(record.wind_bearing),
        record.temperature,
        record.feels_like,
    )
}

/// Whole-number wind speed and its unit.
///
/// Metric responses report meters per second, shown as km/hr. Imperial
/// responses already report miles per hour.
pub fn wind_speed(speed: f64, units: Units) -> (i64, &'static str) {
    match units {
        Units::Metric => ((speed * 3.6).trunc() as i64, "km/hr"),
        Units::Imperial => (speed.trunc() as i64, "mph"),
    }
}

fn paint(text: &str, tag: ColorTag) -> ColoredString {
    match tag.color() {
        Some(color) => text.color(color),
        None => text.normal(),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
