use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;

use crate::constants::{HOURLY_VARIABLES, OPEN_METEO_API_BASE, USER_AGENT};
use crate::models::{Coordinate, HourlySeries, OpenMeteoResponse};

/// Fetches hourly forecasts from Open-Meteo
#[derive(Clone)]
pub struct Forecaster {
    client: Arc<Client>,
    base_url: String,
}

impl Forecaster {
    /// Creates a forecaster talking to the public Open-Meteo API
    pub fn new() -> Result<Self> {
        Self::with_base_url(OPEN_METEO_API_BASE)
    }

    /// Creates a forecaster talking to another Open-Meteo compatible host
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Makes an HTTP GET request and deserializes the JSON response
    async fn make_request<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .context("Failed to send request to Open-Meteo")?;

        if !response.status().is_success() {
            anyhow::bail!("Request failed with status: {}", response.status());
        }

        let data = response
            .json::<T>()
            .await
            .context("Failed to parse Open-Meteo forecast JSON")?;
        Ok(data)
    }

    /// Gets the next day of hourly temperature, humidity, rain probability and wind
    pub async fn hourly_forecast(&self, coordinate: Coordinate) -> Result<HourlySeries> {
        tracing::info!(
            "Fetching hourly forecast for coordinates: {}, {}",
            coordinate.latitude,
            coordinate.longitude
        );

        let url = format!("{}/forecast", self.base_url);
        let query = [
            ("latitude", coordinate.latitude.to_string()),
            ("longitude", coordinate.longitude.to_string()),
            ("hourly", HOURLY_VARIABLES.to_string()),
            ("current_weather", "true".to_string()),
            ("timezone", "auto".to_string()),
        ];

        let forecast = self.make_request::<OpenMeteoResponse>(&url, &query).await?;
        let series = HourlySeries::from(forecast.hourly);

        if let Some(value) = series
            .precipitation_probability
            .iter()
            .find(|p| !(0.0..=100.0).contains(*p))
        {
            tracing::warn!("Precipitation probability out of range: {}", value);
        }

        Ok(series)
    }
}
