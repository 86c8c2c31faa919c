//! The alert store: an append-only, newest-first log of alerts with
//! publish/subscribe change notification.
//!
//! Every mutation follows the same sequence under the store lock: build the
//! next log, persist it, then commit it in memory and queue its snapshot.
//! Observers are called outside the lock, by a single notification pass at a
//! time. If an observer mutates or subscribes while a pass is running, the
//! resulting delivery is queued and handled after the current one, in order.
//! A new observer receives the log as of its subscription first, then only
//! snapshots committed after it.

use crate::alerts::blob::BlobStore;
use crate::alerts::model::{Alert, AlertKind};
use chrono::Utc;
use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use thiserror::Error;

/// Key of the persisted alert log in the blob store.
pub const ALERT_LOG_KEY: &str = "government_alerts";

/// Immutable view of the log handed to observers, newest first.
pub type Snapshot = Arc<[Alert]>;

type Observer = Arc<dyn Fn(Snapshot) + Send + Sync>;

struct Registration {
    observer: Observer,
    /// Sequence number of the subscription's initial delivery. Broadcasts
    /// at or before it predate the subscription.
    since: u64,
}

/// A queued notification. `target` is set for the initial delivery to a
/// single new observer.
struct Delivery {
    seq: u64,
    snapshot: Snapshot,
    target: Option<u64>,
}

#[derive(Debug, Error)]
pub enum AlertError {
    #[error("failed to encode alert log: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to persist alert log: {0}")]
    Persist(#[from] std::io::Error),
}

/// Cloneable handle to a shared alert log.
#[derive(Clone)]
pub struct AlertStore {
    shared: Arc<Shared>,
}

struct Shared {
    backend: Box<dyn BlobStore>,
    inner: Mutex<Inner>,
}

struct Inner {
    alerts: Snapshot,
    observers: BTreeMap<u64, Registration>,
    next_subscription: u64,
    last_id: i64,
    pending: VecDeque<Delivery>,
    next_seq: u64,
    dispatching: bool,
}

impl Inner {
    fn enqueue(&mut self, snapshot: Snapshot, target: Option<u64>) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push_back(Delivery {
            seq,
            snapshot,
            target,
        });
        seq
    }
}

/// Handle returned by [`AlertStore::subscribe`].
///
/// Dropping it keeps the observer registered; call
/// [`unsubscribe`](Subscription::unsubscribe) to stop notifications.
pub struct Subscription {
    id: u64,
    shared: Weak<Shared>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        if let Some(shared) = self.shared.upgrade() {
            shared.lock().observers.remove(&self.id);
        }
    }
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl AlertStore {
    /// Open the store, loading any previously persisted log.
    ///
    /// A missing, unreadable or malformed log starts the store empty.
    pub fn open(backend: impl BlobStore + 'static) -> Self {
        let alerts = load_log(&backend);
        let last_id = alerts
            .iter()
            .filter_map(|a| a.id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);
        tracing::debug!(count = alerts.len(), "alert log loaded");

        Self {
            shared: Arc::new(Shared {
                backend: Box::new(backend),
                inner: Mutex::new(Inner {
                    alerts: alerts.into(),
                    observers: BTreeMap::new(),
                    next_subscription: 0,
                    last_id,
                    pending: VecDeque::new(),
                    next_seq: 0,
                    dispatching: false,
                }),
            }),
        }
    }

    /// Register `observer` and call it with the current log.
    ///
    /// The call is made before this returns unless a notification pass is
    /// already running, re-entrantly or on another thread; that pass then
    /// makes it, ahead of any later snapshot.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(Snapshot) + Send + Sync + 'static,
    {
        let id = {
            let mut inner = self.shared.lock();
            let id = inner.next_subscription;
            inner.next_subscription += 1;
            let current = Arc::clone(&inner.alerts);
            let since = inner.enqueue(current, Some(id));
            inner.observers.insert(
                id,
                Registration {
                    observer: Arc::new(observer),
                    since,
                },
            );
            id
        };
        self.dispatch();
        Subscription {
            id,
            shared: Arc::downgrade(&self.shared),
        }
    }

    /// Publish a new unread alert at the head of the log.
    pub fn send_alert(
        &self,
        kind: AlertKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Alert, AlertError> {
        let alert = {
            let mut inner = self.shared.lock();
            let now = Utc::now();
            let millis = now.timestamp_millis();
            let id = if millis > inner.last_id {
                millis
            } else {
                inner.last_id + 1
            };
            inner.last_id = id;

            let alert = Alert {
                id: id.to_string(),
                kind,
                title: title.into(),
                message: message.into(),
                created_at: now,
                read: false,
            };
            let mut next = Vec::with_capacity(inner.alerts.len() + 1);
            next.push(alert.clone());
            next.extend(inner.alerts.iter().cloned());
            self.commit(&mut inner, next)?;
            alert
        };
        tracing::info!(id = %alert.id, kind = ?alert.kind, "alert sent");
        self.dispatch();
        Ok(alert)
    }

    /// Flag one alert as read. Unknown ids are ignored.
    pub fn mark_as_read(&self, id: &str) -> Result<(), AlertError> {
        {
            let mut inner = self.shared.lock();
            if !inner.alerts.iter().any(|a| a.id == id) {
                tracing::debug!(id, "mark_as_read: unknown alert");
                return Ok(());
            }
            let next = inner
                .alerts
                .iter()
                .map(|a| Alert {
                    read: a.read || a.id == id,
                    ..a.clone()
                })
                .collect();
            self.commit(&mut inner, next)?;
        }
        self.dispatch();
        Ok(())
    }

    pub fn mark_all_as_read(&self) -> Result<(), AlertError> {
        {
            let mut inner = self.shared.lock();
            let next = inner
                .alerts
                .iter()
                .map(|a| Alert {
                    read: true,
                    ..a.clone()
                })
                .collect();
            self.commit(&mut inner, next)?;
        }
        self.dispatch();
        Ok(())
    }

    /// Copy of the current log, newest first.
    pub fn get_alerts(&self) -> Vec<Alert> {
        self.shared.lock().alerts.to_vec()
    }

    pub fn unread_count(&self) -> usize {
        self.shared.lock().alerts.iter().filter(|a| !a.read).count()
    }

    pub fn count_by_kind(&self, kind: AlertKind) -> usize {
        self.shared
            .lock()
            .alerts
            .iter()
            .filter(|a| a.kind == kind)
            .count()
    }

    /// Persist `next`, then make it the current log and queue its snapshot.
    /// Nothing changes if persisting fails.
    fn commit(&self, inner: &mut Inner, next: Vec<Alert>) -> Result<(), AlertError> {
        let encoded = serde_json::to_string(&next)?;
        if let Err(e) = self.shared.backend.write(ALERT_LOG_KEY, &encoded) {
            tracing::warn!("failed to persist alert log: {}", e);
            return Err(e.into());
        }
        let snapshot: Snapshot = next.into();
        inner.alerts = Arc::clone(&snapshot);
        inner.enqueue(snapshot, None);
        Ok(())
    }

    /// Deliver queued snapshots to their observers. Returns immediately when
    /// a pass is already running further up the stack (or on another
    /// thread); that pass picks up whatever was queued.
    fn dispatch(&self) {
        {
            let mut inner = self.shared.lock();
            if inner.dispatching {
                return;
            }
            inner.dispatching = true;
        }
        let _reset = DispatchReset(&self.shared);

        loop {
            let (snapshot, observers) = {
                let mut inner = self.shared.lock();
                let Some(delivery) = inner.pending.pop_front() else {
                    // Cleared under the same lock as the empty check so a
                    // concurrent commit either lands in this pass or runs its
                    // own.
                    inner.dispatching = false;
                    return;
                };
                let observers: Vec<Observer> = match delivery.target {
                    Some(id) => inner
                        .observers
                        .get(&id)
                        .map(|r| Arc::clone(&r.observer))
                        .into_iter()
                        .collect(),
                    None => inner
                        .observers
                        .values()
                        .filter(|r| r.since < delivery.seq)
                        .map(|r| Arc::clone(&r.observer))
                        .collect(),
                };
                (delivery.snapshot, observers)
            };
            for observer in observers {
                observer(Arc::clone(&snapshot));
            }
        }
    }
}

/// Clears the dispatching flag when an observer panics mid-pass.
struct DispatchReset<'a>(&'a Shared);

impl Drop for DispatchReset<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            self.0.lock().dispatching = false;
        }
    }
}

fn load_log(backend: &dyn BlobStore) -> Vec<Alert> {
    let raw = match backend.read(ALERT_LOG_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!("failed to read alert log, starting empty: {}", e);
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(alerts) => alerts,
        Err(e) => {
            tracing::warn!("malformed alert log, starting empty: {}", e);
            Vec::new()
        }
    }
}
