//! Pull-to-refresh gesture tracking.
//!
//! A downward drag that starts while the page is scrolled to the very top is
//! tracked as a "pull". The raw displacement is damped and clamped into a
//! feedback distance; releasing past the threshold triggers exactly one
//! refresh, and the tracker resets once that refresh settles.

use std::future::Future;

/// Below this distance the refresh indicator is hidden entirely.
const INDICATOR_MIN_DISTANCE: f64 = 10.0;

/// Tuning for a [`PullToRefresh`] tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PullConfig {
    /// Minimum feedback distance required to trigger a refresh.
    pub threshold: f64,
    /// Scale applied to the raw drag distance.
    pub damping: f64,
    /// Maximum feedback distance, as a multiple of `threshold`.
    pub max_travel: f64,
}

impl Default for PullConfig {
    fn default() -> Self {
        Self {
            threshold: 80.0,
            damping: 0.5,
            max_travel: 1.5,
        }
    }
}

/// What a gesture release resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullRelease {
    /// No gesture was being tracked, or a refresh is already running.
    Ignored,
    /// The pull did not reach the threshold.
    Cancelled,
    /// The pull crossed the threshold; the caller must run the refresh and
    /// call [`PullToRefresh::complete`] afterwards.
    Refresh,
}

#[derive(Debug, Clone)]
pub struct PullToRefresh {
    config: PullConfig,
    active: bool,
    start_position: f64,
    pull_distance: f64,
    refreshing: bool,
}

impl PullToRefresh {
    pub fn new(config: PullConfig) -> Self {
        Self {
            config,
            active: false,
            start_position: 0.0,
            pull_distance: 0.0,
            refreshing: false,
        }
    }

    pub fn config(&self) -> &PullConfig {
        &self.config
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn pull_distance(&self) -> f64 {
        self.pull_distance
    }

    /// Begin tracking a pull. Only honoured when the surface is scrolled to
    /// the top. A start without an intervening end supersedes the previous
    /// gesture.
    pub fn on_gesture_start(&mut self, position: f64, scroll_offset: f64) {
        if scroll_offset != 0.0 {
            return;
        }
        self.start_position = position;
        self.active = true;
    }

    /// Track the drag. The feedback distance follows the pointer in both
    /// directions: dragging back above the start point retracts it to zero
    /// instead of holding the last positive value.
    pub fn on_gesture_move(&mut self, position: f64, scroll_offset: f64) {
        if !self.active || self.refreshing {
            return;
        }
        if scroll_offset != 0.0 {
            return;
        }
        let raw = (position - self.start_position).max(0.0);
        self.pull_distance = self.damp(raw);
    }

    /// Resolve the current gesture without running anything.
    ///
    /// On [`PullRelease::Refresh`] the tracker enters the refreshing state
    /// with the feedback distance pinned to the threshold; it stays there
    /// until [`complete`](Self::complete) is called.
    pub fn release(&mut self) -> PullRelease {
        if !self.active {
            return PullRelease::Ignored;
        }
        self.active = false;

        if self.refreshing {
            return PullRelease::Ignored;
        }

        if self.pull_distance >= self.config.threshold {
            self.refreshing = true;
            self.pull_distance = self.config.threshold;
            PullRelease::Refresh
        } else {
            self.pull_distance = 0.0;
            PullRelease::Cancelled
        }
    }

    /// Settle an in-flight refresh, whatever its outcome.
    pub fn complete(&mut self) {
        self.refreshing = false;
        self.pull_distance = 0.0;
    }

    /// Release the gesture and, if it crossed the threshold, await `refresh`.
    ///
    /// The tracker is reset once the refresh resolves, fails, or is dropped
    /// mid-flight. A refresh error is handed back untouched.
    pub async fn on_gesture_end<F, Fut, E>(&mut self, refresh: F) -> Result<PullRelease, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        let release = self.release();
        if release != PullRelease::Refresh {
            return Ok(release);
        }

        let guard = CompleteOnDrop(self);
        let result = refresh().await;
        drop(guard);
        result.map(|()| release)
    }

    /// Fraction of the threshold covered so far, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.config.threshold <= 0.0 {
            return 1.0;
        }
        (self.pull_distance / self.config.threshold).min(1.0)
    }

    pub fn indicator_visible(&self) -> bool {
        self.pull_distance > INDICATOR_MIN_DISTANCE || self.refreshing
    }

    fn damp(&self, raw: f64) -> f64 {
        (raw * self.config.damping).min(self.config.threshold * self.config.max_travel)
    }
}

impl Default for PullToRefresh {
    fn default() -> Self {
        Self::new(PullConfig::default())
    }
}

struct CompleteOnDrop<'a>(&'a mut PullToRefresh);

impl Drop for CompleteOnDrop<'_> {
    fn drop(&mut self) {
        self.0.complete();
    }
}
