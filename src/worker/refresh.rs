//! Data refresh worker.
//!
//! A refresh runs on its own task and always reports back exactly one
//! [`AppEvent::RefreshFinished`], whether it succeeded, failed, panicked or
//! ran past the configured timeout. The pull-to-refresh tracker relies on
//! that event to leave its refreshing state.

use crate::app::event::AppEvent;
use crate::config::model::RefreshConfig;
use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub fn spawn_refresh(
    config: &RefreshConfig,
    event_tx: mpsc::UnboundedSender<AppEvent>,
) -> JoinHandle<()> {
    let delay = Duration::from_millis(config.delay_ms);
    let timeout = Duration::from_millis(config.timeout_ms);
    tokio::spawn(async move {
        let outcome = run_bounded(simulate_refresh(delay), timeout).await;
        match &outcome {
            Ok(()) => tracing::info!("refresh complete"),
            Err(e) => tracing::warn!("refresh failed: {}", e),
        }
        let _ = event_tx.send(AppEvent::RefreshFinished { outcome });
    })
}

/// Run `work` on a separate task, giving up after `timeout`.
pub async fn run_bounded<F>(work: F, timeout: Duration) -> Result<(), String>
where
    F: Future<Output = Result<(), String>> + Send + 'static,
{
    let mut task = tokio::spawn(work);
    match tokio::time::timeout(timeout, &mut task).await {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => Err(format!("refresh task aborted: {}", e)),
        Err(_) => {
            task.abort();
            Err(format!("timed out after {}ms", timeout.as_millis()))
        }
    }
}

/// Stand-in for fetching fresh readings; the dashboard figures are static.
async fn simulate_refresh(delay: Duration) -> Result<(), String> {
    tokio::time::sleep(delay).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_successful_refresh() {
        let outcome = run_bounded(
            simulate_refresh(Duration::from_millis(1)),
            Duration::from_secs(5),
        )
        .await;
        assert_eq!(outcome, Ok(()));
    }

    #[tokio::test]
    async fn test_error_is_passed_through() {
        let outcome =
            run_bounded(async { Err("offline".to_string()) }, Duration::from_secs(5)).await;
        assert_eq!(outcome, Err("offline".to_string()));
    }

    #[tokio::test]
    async fn test_stalled_refresh_times_out() {
        let outcome = run_bounded(std::future::pending(), Duration::from_millis(20)).await;
        assert_eq!(outcome, Err("timed out after 20ms".to_string()));
    }

    #[tokio::test]
    async fn test_panicking_refresh_still_reports() {
        let outcome = run_bounded(
            async {
                if true {
                    panic!("boom");
                }
                Ok(())
            },
            Duration::from_secs(5),
        )
        .await;
        assert!(outcome.unwrap_err().starts_with("refresh task aborted"));
    }

    #[tokio::test]
    async fn test_spawn_refresh_sends_finished_event() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let config = RefreshConfig {
            delay_ms: 1,
            timeout_ms: 1000,
        };
        spawn_refresh(&config, tx).await.unwrap();
        match rx.recv().await {
            Some(AppEvent::RefreshFinished { outcome }) => assert_eq!(outcome, Ok(())),
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
