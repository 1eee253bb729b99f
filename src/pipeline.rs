//! Weather pipeline
//!
//! Turns coordinates into a render-ready [`ViewModel`]. The pipeline never
//! fails outward: whatever goes wrong (no location, transport failure,
//! unusable payload) the caller receives the fixed fallback view and the
//! dashboard stays usable.

use crate::error::FetchError;
use crate::models::{
    Coordinates, CurrentConditions, ForecastDay, IconKey, ViewModel, FORECAST_DAYS,
};
use crate::wttr::{CurrentCondition, DailyEntry, ValueField, WttrClient, WttrReport};
use chrono::NaiveDate;
use tracing::{debug, info, warn};

/// Hourly slot used for the daily summary. The provider sends eight
/// three-hour samples per day; index 4 is 12:00.
const MIDDAY_SLOT: usize = 4;

/// Weather pipeline facade over the provider client
#[derive(Debug, Clone)]
pub struct WeatherPipeline {
    client: WttrClient,
}

impl WeatherPipeline {
    /// Create a pipeline backed by the given provider client
    #[must_use]
    pub fn new(client: WttrClient) -> Self {
        Self { client }
    }

    /// Produce a view for the given coordinates, falling back to the fixed
    /// view on any failure. Never errors.
    pub async fn fetch_view(&self, coords: Option<Coordinates>) -> ViewModel {
        let Some(coords) = coords else {
            info!("no coordinates available, serving fallback view");
            return ViewModel::mock();
        };

        match self.fetch_conditions(coords).await {
            Ok(view) => view,
            Err(e) => {
                warn!("weather fetch failed, serving fallback view: {e}");
                ViewModel::mock()
            }
        }
    }

    /// Fetch and normalize live data. Errors here are collapsed by
    /// [`fetch_view`](Self::fetch_view); the split keeps normalization
    /// observable in tests.
    pub async fn fetch_conditions(&self, coords: Coordinates) -> Result<ViewModel, FetchError> {
        let report = self.client.fetch(coords).await?;
        let view = normalize(&report)?;
        debug!("normalized weather for {}", view.location);
        Ok(view)
    }
}

/// Normalize a raw report into a complete view.
///
/// Any missing or unusable piece fails the whole report; a partially
/// populated view never leaves this function.
fn normalize(report: &WttrReport) -> Result<ViewModel, FetchError> {
    let current = report
        .current_condition
        .first()
        .ok_or_else(|| FetchError::shape("no current conditions reported"))?;

    let area = report
        .nearest_area
        .first()
        .ok_or_else(|| FetchError::shape("no area metadata reported"))?;

    let area_name = first_value(&area.area_name)
        .ok_or_else(|| FetchError::shape("area has no name"))?;
    let country = first_value(&area.country)
        .ok_or_else(|| FetchError::shape("area has no country"))?;

    if report.weather.len() < FORECAST_DAYS {
        return Err(FetchError::shape(format!(
            "expected {FORECAST_DAYS} forecast days, provider sent {}",
            report.weather.len()
        )));
    }

    let days: Vec<ForecastDay> = report
        .weather
        .iter()
        .take(FORECAST_DAYS)
        .map(normalize_day)
        .collect::<Result<_, _>>()?;
    let forecast: [ForecastDay; FORECAST_DAYS] = days
        .try_into()
        .map_err(|_| FetchError::shape("forecast day count changed during assembly"))?;

    Ok(ViewModel {
        location: format!("{area_name}, {country}"),
        current: normalize_current(current)?,
        forecast,
    })
}

fn normalize_current(current: &CurrentCondition) -> Result<CurrentConditions, FetchError> {
    let condition = first_value(&current.weather_desc)
        .ok_or_else(|| FetchError::shape("current conditions have no description"))?
        .to_string();

    let icon = first_value(&current.weather_icon_url)
        .map(IconKey::from_icon_url)
        .ok_or_else(|| FetchError::shape("current conditions have no icon"))?;

    Ok(CurrentConditions {
        temperature_c: parse_whole("temp_C", &current.temp_c)?,
        condition,
        icon,
        humidity_pct: parse_whole("humidity", &current.humidity)?,
        wind_speed_kph: parse_whole("windspeedKmph", &current.windspeed_kmph)?,
    })
}

fn normalize_day(day: &DailyEntry) -> Result<ForecastDay, FetchError> {
    let midday = day.hourly.get(MIDDAY_SLOT).ok_or_else(|| {
        FetchError::shape(format!("day {} has no mid-day sample", day.date))
    })?;

    let condition = first_value(&midday.weather_desc)
        .ok_or_else(|| FetchError::shape("mid-day sample has no description"))?
        .to_string();

    let icon = first_value(&midday.weather_icon_url)
        .map(IconKey::from_icon_url)
        .ok_or_else(|| FetchError::shape("mid-day sample has no icon"))?;

    Ok(ForecastDay {
        day_label: weekday_label(&day.date)?,
        temperature_c: parse_whole("tempC", &midday.temp_c)?,
        condition,
        icon,
    })
}

/// Short English weekday for a YYYY-MM-DD date
fn weekday_label(date: &str) -> Result<String, FetchError> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| FetchError::shape(format!("bad forecast date {date:?}: {e}")))?;
    Ok(parsed.format("%a").to_string())
}

/// Parse a provider numeric string into whole units, truncating any
/// fractional part toward zero ("21.7" becomes 21, "-3.9" becomes -3)
fn parse_whole(field: &'static str, raw: &str) -> Result<i32, FetchError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| FetchError::shape(format!("{field} is not numeric: {raw:?}")))?;
    if !value.is_finite() {
        return Err(FetchError::shape(format!(
            "{field} is not a finite number: {raw:?}"
        )));
    }
    Ok(value.trunc() as i32)
}

/// First `value` string of a j1 value-array field
fn first_value(values: &[ValueField]) -> Option<&str> {
    values.first().map(|v| v.value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SkycastConfig;
    use rstest::rstest;
    use serde_json::json;

    fn hourly(temp: &str, desc: &str, icon: &str) -> serde_json::Value {
        json!({
            "tempC": temp,
            "weatherDesc": [{"value": desc}],
            "weatherIconUrl": [{"value": icon}],
        })
    }

    fn day(date: &str, noon_temp: &str, desc: &str, icon: &str) -> serde_json::Value {
        // Eight three-hour slots; slot 4 carries the mid-day values the
        // dashboard samples.
        let filler = hourly("10", "Overcast", "wsymbol_0004_black_low_cloud.png");
        let mut slots = vec![filler; 8];
        slots[MIDDAY_SLOT] = hourly(noon_temp, desc, icon);
        json!({"date": date, "hourly": slots})
    }

    fn sample_report() -> WttrReport {
        let raw = json!({
            "current_condition": [{
                "temp_C": "21.6",
                "humidity": "68",
                "windspeedKmph": "14.2",
                "weatherDesc": [{"value": "Sunny"}],
                "weatherIconUrl": [{"value": "wsymbol_0001_sunny.png"}],
            }],
            "nearest_area": [{
                "areaName": [{"value": "Leipzig"}],
                "country": [{"value": "Germany"}],
            }],
            "weather": [
                day("2026-08-24", "24.9", "Sunny", "wsymbol_0001_sunny.png"),
                day("2026-08-25", "21", "Cloudy", "wsymbol_0003_white_cloud.png"),
                day("2026-08-26", "19.5", "Light rain", "wsymbol_0017_cloudy_with_light_rain.png"),
                day("2026-08-27", "23.1", "Partly cloudy", "wsymbol_0002_sunny_intervals.png"),
                day("2026-08-28", "26", "Sunny", "wsymbol_0001_sunny.png"),
                day("2026-08-29", "18", "Overcast", "wsymbol_0004_black_low_cloud.png"),
            ],
        });
        serde_json::from_value(raw).unwrap()
    }

    #[rstest]
    #[case("22", 22)]
    #[case("21.7", 21)]
    #[case("-3.9", -3)]
    #[case(" 15 ", 15)]
    #[case("0.4", 0)]
    fn parse_whole_truncates_toward_zero(#[case] raw: &str, #[case] expected: i32) {
        assert_eq!(parse_whole("tempC", raw).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("21 degrees")]
    #[case("NaN")]
    #[case("inf")]
    fn parse_whole_rejects_unusable_strings(#[case] raw: &str) {
        assert!(parse_whole("tempC", raw).is_err());
    }

    #[test]
    fn weekday_labels_are_short_english() {
        assert_eq!(weekday_label("2024-01-01").unwrap(), "Mon");
        assert_eq!(weekday_label("2024-01-06").unwrap(), "Sat");
        assert!(weekday_label("01/06/2024").is_err());
        assert!(weekday_label("2024-13-40").is_err());
    }

    #[test]
    fn normalize_builds_complete_view() {
        let view = normalize(&sample_report()).unwrap();

        assert_eq!(view.location, "Leipzig, Germany");
        assert_eq!(view.current.temperature_c, 21);
        assert_eq!(view.current.condition, "Sunny");
        assert_eq!(view.current.icon, IconKey::Sun);
        assert_eq!(view.current.humidity_pct, 68);
        assert_eq!(view.current.wind_speed_kph, 14);

        // Six daily entries arrive, five survive, each sampled at mid-day.
        let labels: Vec<&str> = view
            .forecast
            .iter()
            .map(|d| d.day_label.as_str())
            .collect();
        assert_eq!(labels, ["Mon", "Tue", "Wed", "Thu", "Fri"]);

        let temps: Vec<i32> = view.forecast.iter().map(|d| d.temperature_c).collect();
        assert_eq!(temps, [24, 21, 19, 23, 26]);

        assert_eq!(view.forecast[2].condition, "Light rain");
        assert_eq!(view.forecast[2].icon, IconKey::Cloud);
        assert_eq!(view.forecast[3].icon, IconKey::Sun);
    }

    #[test]
    fn normalize_rejects_short_forecast() {
        let mut report = sample_report();
        report.weather.truncate(3);

        let err = normalize(&report).unwrap_err();
        assert!(matches!(err, FetchError::Shape { .. }));
        assert!(err.to_string().contains("forecast days"));
    }

    #[test]
    fn normalize_rejects_missing_midday_sample() {
        let mut report = sample_report();
        report.weather[1].hourly.truncate(MIDDAY_SLOT);

        let err = normalize(&report).unwrap_err();
        assert!(err.to_string().contains("mid-day"));
    }

    #[test]
    fn normalize_rejects_empty_current_conditions() {
        let mut report = sample_report();
        report.current_condition.clear();

        let err = normalize(&report).unwrap_err();
        assert!(err.to_string().contains("current conditions"));
    }

    #[test]
    fn normalize_rejects_non_numeric_temperature() {
        let mut report = sample_report();
        report.current_condition[0].temp_c = "balmy".to_string();

        assert!(normalize(&report).is_err());
    }

    #[tokio::test]
    async fn fetch_view_without_coordinates_serves_fallback() {
        let config = SkycastConfig::default();
        let pipeline = WeatherPipeline::new(WttrClient::new(&config).unwrap());

        let view = pipeline.fetch_view(None).await;
        assert_eq!(view, ViewModel::mock());
    }
}
