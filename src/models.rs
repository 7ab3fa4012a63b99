use serde::Deserialize;

use crate::constants::FORECAST_HOURS;

// ============================================================================
// Open-Meteo API Models
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct OpenMeteoResponse {
    #[serde(default)]
    pub hourly: HourlyData,
}

/// Parallel hourly arrays; the provider may emit `null` for hours it has no value for.
#[derive(Debug, Default, Deserialize)]
pub struct HourlyData {
    #[serde(rename = "temperature_2m", default)]
    pub temperature: Vec<Option<f64>>,
    #[serde(rename = "relativehumidity_2m", default)]
    pub relative_humidity: Vec<Option<f64>>,
    #[serde(rename = "precipitation_probability", default)]
    pub precipitation_probability: Vec<Option<f64>>,
    #[serde(rename = "windspeed_10m", default)]
    pub wind_speed: Vec<Option<f64>>,
}

// ============================================================================
// Domain Models
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// The next day of hourly readings, at most [`FORECAST_HOURS`] values per series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HourlySeries {
    pub temperature: Vec<f64>,
    pub humidity: Vec<f64>,
    pub precipitation_probability: Vec<f64>,
    pub wind_speed: Vec<f64>,
}

impl From<HourlyData> for HourlySeries {
    fn from(hourly: HourlyData) -> Self {
        Self {
            temperature: next_hours(hourly.temperature),
            humidity: next_hours(hourly.relative_humidity),
            precipitation_probability: next_hours(hourly.precipitation_probability),
            wind_speed: next_hours(hourly.wind_speed),
        }
    }
}

/// Keeps the first [`FORECAST_HOURS`] slots and drops the ones without a value.
fn next_hours(values: Vec<Option<f64>>) -> Vec<f64> {
    values.into_iter().take(FORECAST_HOURS).flatten().collect()
}
