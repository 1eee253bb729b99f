//! Dashboard view model
//!
//! The normalized, render-ready weather snapshot. Every fetch produces a
//! complete view or the fixed fallback; partially filled views do not
//! exist.

use super::weather::IconKey;
use serde::{Deserialize, Serialize};

/// Number of days in the forecast strip
pub const FORECAST_DAYS: usize = 5;

/// Render-ready weather snapshot for one location
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ViewModel {
    /// Display name, "City, Country"
    pub location: String,
    /// Current conditions
    pub current: CurrentConditions,
    /// Five-day outlook, chronological from the request day
    pub forecast: [ForecastDay; FORECAST_DAYS],
}

/// Current conditions block
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CurrentConditions {
    /// Temperature in whole degrees Celsius
    pub temperature_c: i32,
    /// Condition description as reported by the provider
    pub condition: String,
    /// Icon classification
    pub icon: IconKey,
    /// Relative humidity percentage (0-100)
    pub humidity_pct: i32,
    /// Wind speed in whole km/h
    pub wind_speed_kph: i32,
}

/// One day of the forecast strip
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ForecastDay {
    /// Short English weekday label ("Mon")
    pub day_label: String,
    /// Mid-day temperature in whole degrees Celsius
    pub temperature_c: i32,
    /// Condition description at mid-day
    pub condition: String,
    /// Icon classification
    pub icon: IconKey,
}

impl ViewModel {
    /// The fixed fallback view shown whenever live data cannot be fetched
    #[must_use]
    pub fn mock() -> Self {
        Self {
            location: "Your Location".to_string(),
            current: CurrentConditions {
                temperature_c: 22,
                condition: "Partly Cloudy".to_string(),
                icon: IconKey::Sun,
                humidity_pct: 65,
                wind_speed_kph: 12,
            },
            forecast: [
                ForecastDay {
                    day_label: "Mon".to_string(),
                    temperature_c: 24,
                    condition: "Sunny".to_string(),
                    icon: IconKey::Sun,
                },
                ForecastDay {
                    day_label: "Tue".to_string(),
                    temperature_c: 21,
                    condition: "Cloudy".to_string(),
                    icon: IconKey::Cloud,
                },
                ForecastDay {
                    day_label: "Wed".to_string(),
                    temperature_c: 19,
                    condition: "Rain".to_string(),
                    icon: IconKey::Cloud,
                },
                ForecastDay {
                    day_label: "Thu".to_string(),
                    temperature_c: 23,
                    condition: "Partly Cloudy".to_string(),
                    icon: IconKey::Sun,
                },
                ForecastDay {
                    day_label: "Fri".to_string(),
                    temperature_c: 26,
                    condition: "Sunny".to_string(),
                    icon: IconKey::Sun,
                },
            ],
        }
    }
}
