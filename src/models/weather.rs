//! Icon classification and display colors for weather conditions

use serde::{Deserialize, Serialize};

/// Symbolic weather icon derived from the provider's icon URL.
///
/// wttr.in reports icons as image URLs whose file names embed the
/// condition ("wsymbol_0001_sunny.png"). Substring matching on the URL is
/// the stable way to classify them without carrying image assets around.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum IconKey {
    /// Clear or sunny sky
    Sun,
    /// Cloud cover, including cloudy-with-rain icons
    Cloud,
    /// Rain without a cloud-led icon name
    Rain,
    /// Snow
    Snow,
    /// Thunderstorm
    Thunder,
    /// Fog or mist
    Fog,
    /// Fallback when no known token appears in the URL
    PartlyCloudy,
}

impl IconKey {
    /// Classify a provider icon URL.
    ///
    /// Checks run in a fixed priority order and the first match wins, so
    /// "cloudy_with_light_rain" classifies as `Cloud`, not `Rain`.
    #[must_use]
    pub fn from_icon_url(url: &str) -> Self {
        if url.contains("sunny") {
            return Self::Sun;
        }
        if url.contains("cloud") {
            return Self::Cloud;
        }
        if url.contains("rain") {
            return Self::Rain;
        }
        if url.contains("snow") {
            return Self::Snow;
        }
        if url.contains("thunder") {
            return Self::Thunder;
        }
        if url.contains("fog") || url.contains("mist") {
            return Self::Fog;
        }
        Self::PartlyCloudy
    }

    /// Terminal glyph for this icon
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            IconKey::Sun => "☀",
            IconKey::Cloud => "☁",
            IconKey::Rain => "🌧",
            IconKey::Snow => "❄",
            IconKey::Thunder => "⚡",
            IconKey::Fog => "🌫",
            IconKey::PartlyCloudy => "⛅",
        }
    }
}

/// Display color (hex RGB) for a condition description.
///
/// Exact-match lookup over the conditions the dashboard styles; anything
/// else gets the accent color.
#[must_use]
pub fn condition_color(condition: &str) -> &'static str {
    match condition {
        "Sunny" | "Clear" => "#ffd700",
        "Partly Cloudy" | "Cloudy" | "Drizzle" => "#87ceeb",
        "Rain" => "#4682b4",
        "Snow" => "#ffffff",
        "Thunderstorm" => "#4b0082",
        "Mist" | "Fog" => "#d3d3d3",
        _ => "#aa00ff",
    }
}
