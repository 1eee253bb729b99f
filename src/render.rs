//! Terminal rendering of the dashboard view
//!
//! Pure formatting: a view plus the forecast toggle go in, styled text
//! comes out. Colors use ANSI truecolor escapes derived from the same hex
//! palette the condition lookup provides.

use crate::models::{condition_color, ViewModel};

const RESET: &str = "\x1b[0m";

/// Convert a `#rrggbb` hex color to an ANSI truecolor escape prefix
fn ansi_color(hex: &str) -> String {
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(255)
    };
    format!(
        "\x1b[38;2;{};{};{}m",
        channel(1..3),
        channel(3..5),
        channel(5..7)
    )
}

/// Render the dashboard view as terminal text
#[must_use]
pub fn render_dashboard(view: &ViewModel, show_forecast: bool) -> String {
    let mut out = String::new();
    let current = &view.current;
    let color = ansi_color(condition_color(&current.condition));

    out.push_str(&format!("  {}\n", view.location));
    out.push_str(&format!(
        "  {}{}  {}°C  {}{}\n",
        color,
        current.icon.glyph(),
        current.temperature_c,
        current.condition,
        RESET
    ));
    out.push_str(&format!(
        "  humidity {}%  wind {} km/h\n",
        current.humidity_pct, current.wind_speed_kph
    ));

    if show_forecast {
        out.push_str("\n  5-day forecast\n");
        for day in &view.forecast {
            let day_color = ansi_color(condition_color(&day.condition));
            out.push_str(&format!(
                "  {:<4} {}{}  {:>3}°C  {}{}\n",
                day.day_label,
                day_color,
                day.icon.glyph(),
                day.temperature_c,
                day.condition,
                RESET
            ));
        }
    }

    out
}
