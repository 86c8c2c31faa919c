//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use crate::app::route::Route;
use crate::gesture::PullConfig;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub gestures: GestureConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
    #[serde(default)]
    pub alerts: AlertsConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Gesture thresholds, in gesture units.
///
/// Terminal cells are converted to units with `cell_width` and `cell_height`
/// so the thresholds keep their touch-screen meaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureConfig {
    #[serde(default = "default_pull_threshold")]
    pub pull_threshold: f64,
    #[serde(default = "default_pull_damping")]
    pub pull_damping: f64,
    #[serde(default = "default_pull_max_travel")]
    pub pull_max_travel: f64,
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f64,
    #[serde(default = "default_cell_width")]
    pub cell_width: f64,
    #[serde(default = "default_cell_height")]
    pub cell_height: f64,
}

impl GestureConfig {
    /// Reject settings the trackers cannot work with. A non-positive pull
    /// threshold would turn every click into a refresh.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("pull_threshold", self.pull_threshold),
            ("pull_damping", self.pull_damping),
            ("cell_width", self.cell_width),
            ("cell_height", self.cell_height),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                bail!("gestures.{} must be a positive number, got {}", name, value);
            }
        }
        if !self.pull_max_travel.is_finite() || self.pull_max_travel < 1.0 {
            bail!(
                "gestures.pull_max_travel must be at least 1.0, got {}",
                self.pull_max_travel
            );
        }
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            bail!(
                "gestures.swipe_threshold must not be negative, got {}",
                self.swipe_threshold
            );
        }
        Ok(())
    }

    pub fn pull_config(&self) -> PullConfig {
        PullConfig {
            threshold: self.pull_threshold,
            damping: self.pull_damping,
            max_travel: self.pull_max_travel,
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            pull_threshold: default_pull_threshold(),
            pull_damping: default_pull_damping(),
            pull_max_travel: default_pull_max_travel(),
            swipe_threshold: default_swipe_threshold(),
            cell_width: default_cell_width(),
            cell_height: default_cell_height(),
        }
    }
}

/// Simulated data refresh triggered by pull-to-refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshConfig {
    #[serde(default = "default_refresh_delay")]
    pub delay_ms: u64,
    /// Upper bound on a refresh; a stalled one is abandoned after this.
    #[serde(default = "default_refresh_timeout")]
    pub timeout_ms: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_refresh_delay(),
            timeout_ms: default_refresh_timeout(),
        }
    }
}

/// Alert log location and demo push settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertsConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Populate an empty log with sample alerts on startup.
    #[serde(default = "default_true")]
    pub seed_samples: bool,
    /// Push a demo alert from a background task every N seconds.
    #[serde(default)]
    pub demo_push_secs: Option<u64>,
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            seed_samples: true,
            demo_push_secs: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Pages reachable by swiping, in order.
    #[serde(default = "default_routes")]
    pub routes: Vec<Route>,
    #[serde(default)]
    pub start: Route,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            routes: default_routes(),
            start: Route::default(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_pull_threshold() -> f64 {
    80.0
}
fn default_pull_damping() -> f64 {
    0.5
}
fn default_pull_max_travel() -> f64 {
    1.5
}
fn default_swipe_threshold() -> f64 {
    50.0
}
fn default_cell_width() -> f64 {
    8.0
}
fn default_cell_height() -> f64 {
    16.0
}
fn default_refresh_delay() -> u64 {
    1000
}
fn default_refresh_timeout() -> u64 {
    10_000
}
fn default_data_dir() -> String {
    "~/.local/share/ecodash".to_string()
}
fn default_routes() -> Vec<Route> {
    vec![
        Route::Dashboard,
        Route::Challenges,
        Route::Impact,
        Route::Settings,
    ]
}
fn default_log_dir() -> String {
    "~/.local/share/ecodash/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.gestures.pull_threshold, 80.0);
        assert_eq!(config.gestures.swipe_threshold, 50.0);
        assert_eq!(config.navigation.routes, default_routes());
        assert_eq!(config.navigation.start, Route::Dashboard);
        assert!(!config.logging.enabled);
        assert!(config.alerts.demo_push_secs.is_none());
    }

    #[test]
    fn test_gesture_validation() {
        assert!(GestureConfig::default().validate().is_ok());

        let invalid = [
            "pull_threshold = 0.0",
            "pull_threshold = -5.0",
            "pull_max_travel = 0.5",
            "cell_height = 0.0",
        ];
        for bad in invalid {
            let config: AppConfig = toml::from_str(&format!("[gestures]\n{}", bad)).unwrap();
            assert!(config.gestures.validate().is_err(), "{bad}");
        }
    }

    #[test]
    fn test_partial_sections_merge_with_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [gestures]
            pull_threshold = 40.0

            [navigation]
            routes = ["impact", "alerts"]
            start = "impact"

            [alerts]
            demo_push_secs = 30
            "#,
        )
        .unwrap();
        assert_eq!(config.gestures.pull_config().threshold, 40.0);
        assert_eq!(config.gestures.pull_config().damping, 0.5);
        assert_eq!(config.navigation.routes, vec![Route::Impact, Route::Alerts]);
        assert_eq!(config.navigation.start, Route::Impact);
        assert_eq!(config.alerts.demo_push_secs, Some(30));
        assert!(config.alerts.seed_samples);
    }
}
