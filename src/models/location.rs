//! Coordinate model for resolved host locations

use serde::{Deserialize, Serialize};

/// A latitude/longitude fix in decimal degrees
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinates {
    /// Create a new coordinate pair
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Format as a "lat, lon" display string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_coordinates() {
        let coords = Coordinates::new(51.340_632, 12.374_733);
        assert_eq!(coords.format_coordinates(), "51.3406, 12.3747");
    }
}
