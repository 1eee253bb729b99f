//! Dashboard state
//!
//! Owns what the front-end needs to render: the fetch lifecycle and
//! installed view, plus the forecast visibility toggle. Every refresh is
//! tagged with a monotonically increasing sequence number so a slow
//! response can never overwrite a newer one.

use crate::location_resolver::LocationResolver;
use crate::models::ViewModel;
use crate::pipeline::WeatherPipeline;
use tracing::{debug, info};

/// Fetch lifecycle of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    /// Nothing requested yet
    NotFetched,
    /// A refresh is in flight
    Loading,
    /// A view is installed
    Loaded,
}

/// Weather dashboard state machine
#[derive(Debug)]
pub struct Dashboard {
    state: FetchState,
    view: Option<ViewModel>,
    show_forecast: bool,
    /// Sequence number of the most recently started refresh
    latest_seq: u64,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    /// Create an empty dashboard
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: FetchState::NotFetched,
            view: None,
            show_forecast: false,
            latest_seq: 0,
        }
    }

    /// Current fetch state
    #[must_use]
    pub fn state(&self) -> FetchState {
        self.state
    }

    /// The installed view, if any
    #[must_use]
    pub fn view(&self) -> Option<&ViewModel> {
        self.view.as_ref()
    }

    /// Whether the forecast strip is visible
    #[must_use]
    pub fn show_forecast(&self) -> bool {
        self.show_forecast
    }

    /// Flip forecast visibility. Independent of the fetch lifecycle.
    pub fn toggle_forecast(&mut self) {
        self.show_forecast = !self.show_forecast;
        debug!(
            show_forecast = self.show_forecast,
            "forecast visibility toggled"
        );
    }

    /// Start a refresh and return its sequence number. Any previously
    /// installed view stays visible until the refresh completes.
    pub fn begin_refresh(&mut self) -> u64 {
        self.latest_seq += 1;
        self.state = FetchState::Loading;
        debug!(seq = self.latest_seq, "refresh started");
        self.latest_seq
    }

    /// Install the result of refresh `seq`.
    ///
    /// Returns false when `seq` is not the most recently started refresh;
    /// the stale result is dropped and the state is left alone.
    pub fn complete_refresh(&mut self, seq: u64, view: ViewModel) -> bool {
        if seq != self.latest_seq {
            debug!(
                seq,
                latest = self.latest_seq,
                "dropping stale refresh result"
            );
            return false;
        }

        info!(location = %view.location, "view installed");
        self.view = Some(view);
        self.state = FetchState::Loaded;
        true
    }

    /// Run one full refresh cycle: resolve the location, fetch the view,
    /// install it. Always leaves the dashboard in [`FetchState::Loaded`]
    /// because the pipeline always produces a view.
    pub async fn refresh(&mut self, resolver: &LocationResolver, pipeline: &WeatherPipeline) {
        let seq = self.begin_refresh();
        let coords = resolver.resolve().await;
        let view = pipeline.fetch_view(coords).await;
        self.complete_refresh(seq, view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked_view(location: &str) -> ViewModel {
        let mut view = ViewModel::mock();
        view.location = location.to_string();
        view
    }

    #[test]
    fn starts_empty() {
        let dashboard = Dashboard::new();
        assert_eq!(dashboard.state(), FetchState::NotFetched);
        assert!(dashboard.view().is_none());
        assert!(!dashboard.show_forecast());
    }

    #[test]
    fn toggle_flips_forecast_visibility() {
        let mut dashboard = Dashboard::new();
        dashboard.toggle_forecast();
        assert!(dashboard.show_forecast());
        dashboard.toggle_forecast();
        assert!(!dashboard.show_forecast());
    }

    #[test]
    fn toggle_does_not_disturb_fetch_state() {
        let mut dashboard = Dashboard::new();
        dashboard.toggle_forecast();
        assert_eq!(dashboard.state(), FetchState::NotFetched);

        let seq = dashboard.begin_refresh();
        dashboard.toggle_forecast();
        assert_eq!(dashboard.state(), FetchState::Loading);

        dashboard.complete_refresh(seq, ViewModel::mock());
        dashboard.toggle_forecast();
        assert_eq!(dashboard.state(), FetchState::Loaded);
    }

    #[test]
    fn refresh_moves_through_loading_to_loaded() {
        let mut dashboard = Dashboard::new();

        let seq = dashboard.begin_refresh();
        assert_eq!(dashboard.state(), FetchState::Loading);
        assert!(dashboard.view().is_none());

        assert!(dashboard.complete_refresh(seq, ViewModel::mock()));
        assert_eq!(dashboard.state(), FetchState::Loaded);
        assert_eq!(dashboard.view(), Some(&ViewModel::mock()));
    }

    #[test]
    fn stale_completion_is_dropped() {
        let mut dashboard = Dashboard::new();

        let first = dashboard.begin_refresh();
        let second = dashboard.begin_refresh();

        // The newer refresh finishes first.
        assert!(dashboard.complete_refresh(second, marked_view("Fresh")));
        assert_eq!(dashboard.state(), FetchState::Loaded);

        // The older one limps in afterwards and must not win.
        assert!(!dashboard.complete_refresh(first, marked_view("Stale")));
        assert_eq!(dashboard.view().map(|v| v.location.as_str()), Some("Fresh"));
        assert_eq!(dashboard.state(), FetchState::Loaded);
    }

    #[test]
    fn stale_completion_leaves_loading_untouched() {
        let mut dashboard = Dashboard::new();

        let first = dashboard.begin_refresh();
        let _second = dashboard.begin_refresh();

        assert!(!dashboard.complete_refresh(first, marked_view("Stale")));
        assert_eq!(dashboard.state(), FetchState::Loading);
        assert!(dashboard.view().is_none());
    }

    #[test]
    fn previous_view_survives_a_new_refresh_start() {
        let mut dashboard = Dashboard::new();

        let seq = dashboard.begin_refresh();
        dashboard.complete_refresh(seq, marked_view("First"));

        dashboard.begin_refresh();
        assert_eq!(dashboard.state(), FetchState::Loading);
        assert_eq!(dashboard.view().map(|v| v.location.as_str()), Some("First"));
    }
}
