use crate::alerts::{Alert, Snapshot};
use crate::app::route::Route;
use crate::app::samples::SampleCycle;
use crate::config::AppConfig;
use crate::gesture::{PullToRefresh, SwipeNavigator};
use chrono::{DateTime, Local};
use std::collections::HashMap;

/// Lines scrolled per key press or wheel notch.
const SCROLL_STEP: u16 = 3;

pub struct AppState {
    pub config: AppConfig,
    pub route: Route,
    pub pull: PullToRefresh,
    pub swipe: SwipeNavigator<Route>,
    pub scroll: HashMap<Route, u16>,
    pub alerts: Snapshot,
    pub selected_alert: usize,
    pub samples: SampleCycle,
    pub refresh_count: u64,
    pub last_refreshed: Option<DateTime<Local>>,
    pub status_message: Option<String>,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let pull = PullToRefresh::new(config.gestures.pull_config());
        let swipe = SwipeNavigator::new(
            config.navigation.routes.clone(),
            config.gestures.swipe_threshold,
        );
        let route = config.navigation.start;
        Self {
            config,
            route,
            pull,
            swipe,
            scroll: HashMap::new(),
            alerts: Snapshot::from(Vec::new()),
            selected_alert: 0,
            samples: SampleCycle::default(),
            refresh_count: 0,
            last_refreshed: None,
            status_message: None,
            tick_count: 0,
            should_quit: false,
            dirty: true,
        }
    }

    /// Convert a terminal cell to gesture units.
    pub fn to_units(&self, column: u16, row: u16) -> (f64, f64) {
        let gestures = &self.config.gestures;
        (
            f64::from(column) * gestures.cell_width,
            f64::from(row) * gestures.cell_height,
        )
    }

    pub fn navigate(&mut self, route: Route) {
        if self.route != route {
            self.route = route;
            self.status_message = None;
            self.dirty = true;
        }
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll.get(&self.route).copied().unwrap_or(0)
    }

    pub fn scroll_up(&mut self) {
        let offset = self.scroll.entry(self.route).or_insert(0);
        *offset = offset.saturating_sub(SCROLL_STEP);
        self.dirty = true;
    }

    /// Scroll towards the end of a page of `lines` lines. The last line stays
    /// on screen; the offset never goes past it.
    pub fn scroll_down(&mut self, lines: u16) {
        let max = lines.saturating_sub(1);
        let offset = self.scroll.entry(self.route).or_insert(0);
        *offset = offset.saturating_add(SCROLL_STEP).min(max);
        self.dirty = true;
    }

    pub fn set_alerts(&mut self, alerts: Snapshot) {
        self.selected_alert = self.selected_alert.min(alerts.len().saturating_sub(1));
        self.alerts = alerts;
        self.dirty = true;
    }

    pub fn unread_count(&self) -> usize {
        self.alerts.iter().filter(|a| !a.read).count()
    }

    pub fn selected_alert(&self) -> Option<&Alert> {
        self.alerts.get(self.selected_alert)
    }

    pub fn select_next_alert(&mut self) {
        if self.selected_alert + 1 < self.alerts.len() {
            self.selected_alert += 1;
            self.dirty = true;
        }
    }

    pub fn select_prev_alert(&mut self) {
        if self.selected_alert > 0 {
            self.selected_alert -= 1;
            self.dirty = true;
        }
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        if self.pull.is_refreshing() {
            return "Refreshing...".to_string();
        }
        let mut s = format!("Unread alerts: {}", self.unread_count());
        if let Some(at) = self.last_refreshed {
            s.push_str(&format!(" | Updated {}", at.format("%H:%M")));
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::AlertKind;
    use chrono::Utc;

    fn alert(id: &str, read: bool) -> Alert {
        Alert {
            id: id.into(),
            kind: AlertKind::Info,
            title: id.into(),
            message: String::new(),
            created_at: Utc::now(),
            read,
        }
    }

    #[test]
    fn test_scroll_is_per_route() {
        let mut state = AppState::new(AppConfig::default());
        state.scroll_down(40);
        assert_eq!(state.scroll_offset(), SCROLL_STEP);
        state.navigate(Route::Impact);
        assert_eq!(state.scroll_offset(), 0);
        state.scroll_up();
        assert_eq!(state.scroll_offset(), 0);
    }

    #[test]
    fn test_scroll_stops_at_last_line() {
        let mut state = AppState::new(AppConfig::default());
        for _ in 0..50 {
            state.scroll_down(17);
        }
        assert_eq!(state.scroll_offset(), 16);

        // Back at the top within the page's own number of steps
        for _ in 0..6 {
            state.scroll_up();
        }
        assert_eq!(state.scroll_offset(), 0);

        state.scroll_down(0);
        assert_eq!(state.scroll_offset(), 0);
    }

    #[test]
    fn test_selection_clamped_when_alerts_shrink() {
        let mut state = AppState::new(AppConfig::default());
        state.set_alerts(vec![alert("1", false), alert("2", true), alert("3", false)].into());
        state.select_next_alert();
        state.select_next_alert();
        state.select_next_alert();
        assert_eq!(state.selected_alert, 2);
        assert_eq!(state.unread_count(), 2);

        state.set_alerts(vec![alert("1", true)].into());
        assert_eq!(state.selected_alert, 0);
        assert_eq!(state.selected_alert().map(|a| a.id.as_str()), Some("1"));
    }

    #[test]
    fn test_cell_to_units() {
        let state = AppState::new(AppConfig::default());
        assert_eq!(state.to_units(10, 5), (80.0, 80.0));
    }
}
