//! Static lookups from provider condition codes and wind bearings to what gets drawn.
//!
//! Condition codes follow the OpenWeather grouping:
//! <https://openweathermap.org/weather-conditions#Weather-Condition-Codes-2>

use colored::Color;

/// Color a condition is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTag {
    Red,
    Cyan,
    Blue,
    White,
    Yellow,
    /// No color; used for codes outside every known group.
    Default,
}

impl ColorTag {
    /// Terminal color for this tag, `None` for the uncolored fallback.
    pub fn color(self) -> Option<Color> {
        match self {
            ColorTag::Red => Some(Color::Red),
            ColorTag::Cyan => Some(Color::Cyan),
            ColorTag::Blue => Some(Color::Blue),
            ColorTag::White => Some(Color::White),
            ColorTag::Yellow => Some(Color::Yellow),
            ColorTag::Default => None,
        }
    }
}

/// Glyph, group name and color for a condition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayParams {
    pub label: &'static str,
    pub glyph: &'static str,
    pub color: ColorTag,
}

impl DisplayParams {
    const UNKNOWN: DisplayParams = DisplayParams { label: "", glyph: "", color: ColorTag::Default };
}

struct ConditionBand {
    start: u32,
    end: u32,
    params: DisplayParams,
}

const fn band(
    start: u32,
    end: u32,
    label: &'static str,
    glyph: &'static str,
    color: ColorTag,
) -> ConditionBand {
    ConditionBand { start, end, params: DisplayParams { label, glyph, color } }
}

// Half-open, ascending, non-overlapping. 400..500 is deliberately absent.
const CONDITIONS: &[ConditionBand] = &[
    band(200, 300, "Thunderstorm", "⛈️", ColorTag::Red),
    band(300, 400, "Drizzle", "🌦️", ColorTag::Cyan),
    band(500, 600, "Rain", "🌧️", ColorTag::Blue),
    band(600, 700, "Snow", "🌨️", ColorTag::White),
    band(700, 800, "Atmosphere", "🌤️", ColorTag::Blue),
    band(800, 801, "Clear", "☀️", ColorTag::Yellow),
    band(801, 900, "Cloudy", "☁️", ColorTag::White),
];

/// Bearing label shown when the bearing falls outside every band.
pub const UNKNOWN_WIND: &str = "?";

// Half-open degree ranges. [345, 360) and anything below -15 are unmapped.
// Both [75, 105) and [255, 285) read "Easterly"; only the arrow differs.
const WIND: &[(f64, f64, &str)] = &[
    (-15.0, 15.0, "⬇️ Southerly"),
    (15.0, 75.0, "↙️ South Westerly"),
    (75.0, 105.0, "⬅️ Easterly"),
    (105.0, 165.0, "↖️ North Westerly"),
    (165.0, 195.0, "⬆️ Northerly"),
    (195.0, 255.0, "↗️ North Easterly"),
    (255.0, 285.0, "➡️ Easterly"),
    (285.0, 345.0, "↘️ South Easterly"),
];

/// Maps a condition code to its display parameters.
///
/// Total: codes outside all groups get an empty glyph and [`ColorTag::Default`].
pub fn classify_condition(code: u32) -> DisplayParams {
    CONDITIONS
        .iter()
        .find(|b| (b.start..b.end).contains(&code))
        .map_or(DisplayParams::UNKNOWN, |b| b.params)
}

/// Maps a wind bearing in degrees to a compass glyph and label, or [`UNKNOWN_WIND`].
///
/// Bearings of a full turn or more are reduced modulo 360 first.
pub fn classify_wind(bearing: f64) -> &'static str {
    let bearing = if bearing >= 360.0 { bearing % 360.0 } else { bearing };
    WIND.iter()
        .find(|(start, end, _)| (*start..*end).contains(&bearing))
        .map_or(UNKNOWN_WIND, |&(_, _, label)| label)
}
