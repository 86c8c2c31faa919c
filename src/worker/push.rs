//! Simulated server push: periodically publishes sample alerts from a
//! background task, exercising the store from outside the UI loop.

use crate::alerts::AlertStore;
use crate::app::samples::SampleCycle;
use std::time::Duration;
use tokio::task::JoinHandle;

pub fn spawn_demo_push(store: AlertStore, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut samples = SampleCycle::default();
        let mut interval = tokio::time::interval(every);
        // The first tick completes immediately
        interval.tick().await;
        loop {
            interval.tick().await;
            let sample = samples.next_sample();
            if let Err(e) = store.send_alert(sample.kind, sample.title, sample.message) {
                tracing::warn!("demo push failed: {}", e);
            }
        }
    })
}
