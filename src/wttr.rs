//! wttr.in API client
//!
//! This module provides HTTP client functionality for retrieving the
//! `format=j1` JSON report from a wttr.in-compatible weather service. The
//! deserialization structs stay close to the wire format; normalization
//! into the dashboard view happens in the pipeline.

use crate::config::SkycastConfig;
use crate::error::FetchError;
use crate::models::Coordinates;
use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, instrument};

/// Client for the wttr.in JSON API
#[derive(Debug, Clone)]
pub struct WttrClient {
    /// HTTP client
    client: reqwest::Client,
    /// Service base URL
    base_url: String,
}

impl WttrClient {
    /// Create a new client using the configured endpoint and timeout
    pub fn new(config: &SkycastConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.provider_timeout())
            .user_agent(crate::USER_AGENT)
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.provider.base_url.clone(),
        })
    }

    /// Fetch the full weather report for the given coordinates
    #[instrument(skip(self), fields(lat = coords.latitude, lon = coords.longitude))]
    pub async fn fetch(&self, coords: Coordinates) -> Result<WttrReport, FetchError> {
        let url = self.report_url(coords);
        debug!("requesting weather report: {url}");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        let body = response.text().await?;
        let report: WttrReport = serde_json::from_str(&body)?;
        debug!(
            days = report.weather.len(),
            "weather report received and decoded"
        );
        Ok(report)
    }

    fn report_url(&self, coords: Coordinates) -> String {
        format!(
            "{}/?format=j1&lat={}&lon={}",
            self.base_url, coords.latitude, coords.longitude
        )
    }
}

/// One `{"value": "..."}` wrapper as used throughout the j1 document
#[derive(Debug, Deserialize)]
pub struct ValueField {
    pub value: String,
}

/// Top-level j1 report
#[derive(Debug, Deserialize)]
pub struct WttrReport {
    /// Current observations (a single element in practice)
    pub current_condition: Vec<CurrentCondition>,
    /// Area metadata for the resolved coordinates
    pub nearest_area: Vec<NearestArea>,
    /// Daily forecast entries
    pub weather: Vec<DailyEntry>,
}

/// Current observation block
#[derive(Debug, Deserialize)]
pub struct CurrentCondition {
    /// Temperature in Celsius, as a decimal string
    #[serde(rename = "temp_C")]
    pub temp_c: String,
    /// Relative humidity percentage, as a decimal string
    pub humidity: String,
    /// Wind speed in km/h, as a decimal string
    #[serde(rename = "windspeedKmph")]
    pub windspeed_kmph: String,
    /// Condition description
    #[serde(rename = "weatherDesc")]
    pub weather_desc: Vec<ValueField>,
    /// Provider icon URL
    #[serde(rename = "weatherIconUrl")]
    pub weather_icon_url: Vec<ValueField>,
}

/// Area metadata block
#[derive(Debug, Deserialize)]
pub struct NearestArea {
    /// Area display name
    #[serde(rename = "areaName")]
    pub area_name: Vec<ValueField>,
    /// Country display name
    pub country: Vec<ValueField>,
}

/// One daily forecast entry
#[derive(Debug, Deserialize)]
pub struct DailyEntry {
    /// Calendar date, YYYY-MM-DD
    pub date: String,
    /// Three-hourly samples, midnight through 21:00
    pub hourly: Vec<HourlySample>,
}

/// One three-hourly forecast sample
#[derive(Debug, Deserialize)]
pub struct HourlySample {
    /// Temperature in Celsius, as a decimal string
    #[serde(rename = "tempC")]
    pub temp_c: String,
    /// Condition description
    #[serde(rename = "weatherDesc")]
    pub weather_desc: Vec<ValueField>,
    /// Provider icon URL
    #[serde(rename = "weatherIconUrl")]
    pub weather_icon_url: Vec<ValueField>,
}
