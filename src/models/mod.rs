//! Data models for the Skycast dashboard
//!
//! This module contains the core domain models organized by concern:
//! - Location: resolved host coordinates
//! - View: the render-ready dashboard snapshot
//! - Weather: icon classification and condition colors

pub mod location;
pub mod view;
pub mod weather;

// Re-export all public types for convenient access
pub use location::Coordinates;
pub use view::{CurrentConditions, ForecastDay, ViewModel, FORECAST_DAYS};
pub use weather::{condition_color, IconKey};
