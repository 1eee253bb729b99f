//! Best-effort host location via IP geolocation
//!
//! A headless process has no geolocation permission prompt to lean on;
//! the closest equivalent is asking an IP geolocation service where the
//! host appears to be. The resolver never fails outward: any problem
//! becomes "location unavailable" and the dashboard proceeds without
//! coordinates.

use crate::config::SkycastConfig;
use crate::error::LocationError;
use crate::models::Coordinates;
use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

/// Response document of the ip-api.com JSON endpoint
#[derive(Debug, Deserialize)]
struct GeoIpResponse {
    /// "success" or "fail"
    status: String,
    /// Failure reason, present when status is "fail"
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

/// Resolves the host's approximate coordinates
#[derive(Debug, Clone)]
pub struct LocationResolver {
    /// HTTP client
    client: reqwest::Client,
    /// Service base URL
    base_url: String,
}

impl LocationResolver {
    /// Create a new resolver using the configured endpoint and timeout
    pub fn new(config: &SkycastConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.locator_timeout())
            .user_agent(crate::USER_AGENT)
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.locator.base_url.clone(),
        })
    }

    /// Resolve the host's coordinates, or `None` when unavailable.
    ///
    /// Failures are logged and swallowed; a `None` means the dashboard
    /// falls back to its fixed view.
    pub async fn resolve(&self) -> Option<Coordinates> {
        match self.locate().await {
            Ok(coords) => {
                debug!(
                    "resolved host location: {}",
                    coords.format_coordinates()
                );
                Some(coords)
            }
            Err(e) => {
                warn!("location unavailable: {e}");
                None
            }
        }
    }

    /// One lookup against the geolocation endpoint
    #[instrument(skip(self))]
    async fn locate(&self) -> Result<Coordinates, LocationError> {
        let url = format!("{}/json/", self.base_url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LocationError::Status { status });
        }

        let body = response.text().await?;
        let fix: GeoIpResponse = serde_json::from_str(&body)?;

        if fix.status != "success" {
            let message = fix
                .message
                .unwrap_or_else(|| "no reason given".to_string());
            return Err(LocationError::refused(message));
        }

        match (fix.lat, fix.lon) {
            (Some(lat), Some(lon)) => Ok(Coordinates::new(lat, lon)),
            _ => Err(LocationError::refused("response carries no coordinates")),
        }
    }
}
