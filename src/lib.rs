//! EcoDash: a household utility dashboard for the terminal.
//!
//! The reusable core is [`gesture`] (pull-to-refresh and swipe navigation
//! trackers) and [`alerts`] (a persisted publish/subscribe alert log). The
//! remaining modules host them in a ratatui application.

pub mod alerts;
pub mod app;
pub mod config;
pub mod gesture;
pub mod logging;
pub mod ui;
pub mod worker;
