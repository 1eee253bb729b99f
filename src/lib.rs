//! Skycast - a terminal weather dashboard
//!
//! This library provides the core functionality for resolving the host's
//! approximate location, fetching and normalizing live weather data, and
//! rendering a five-day dashboard that always has something to show: any
//! failure along the way falls back to a fixed built-in view.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod location_resolver;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod wttr;

// Re-export core types for public API
pub use config::SkycastConfig;
pub use dashboard::{Dashboard, FetchState};
pub use error::{ConfigError, FetchError, LocationError};
pub use location_resolver::LocationResolver;
pub use models::{condition_color, Coordinates, CurrentConditions, ForecastDay, IconKey, ViewModel};
pub use pipeline::WeatherPipeline;
pub use render::render_dashboard;
pub use wttr::WttrClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// User agent sent on outbound requests
pub const USER_AGENT: &str = "skycast/0.1.0";
