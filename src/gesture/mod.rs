//! Gesture trackers that turn raw pointer coordinates into commands.
//!
//! Both trackers are plain state machines: the host forwards
//! start/move/end events and acts on what they return. They know nothing
//! about terminals or rendering.

pub mod pull;
pub mod swipe;

pub use pull::{PullConfig, PullRelease, PullToRefresh};
pub use swipe::{Direction, SwipeNavigator};
