//! Derived sync state and its observer/subject store.

use super::{SyncReport, SyncReportSource};
use chrono::{DateTime, Utc};
use log::*;
use serde::{Deserialize, Serialize};

/// Single finite-state summary of the engine's activity.
///
/// `Idle` only appears before the first recomputation; the derivation rule
/// maps every observed report (and the absence of one) to `Syncing`,
/// `Success`, or `Offline`. `Error` is set solely through
/// [`SyncStore::set_error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    Idle,
    Syncing,
    Success,
    Error,
    Offline,
}

/// Derived state consumed uniformly by every display surface.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SyncState {
    pub status: SyncStatus,
    pub is_connected: bool,
    pub last_sync_time: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

/// Defines pre-first-report state: idle and disconnected.
///
impl Default for SyncState {
    fn default() -> SyncState {
        SyncState {
            status: SyncStatus::Idle,
            is_connected: false,
            last_sync_time: None,
            error: None,
        }
    }
}

/// Identifies a registered subscriber so it can be removed on teardown.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subscription(usize);

type Subscriber = Box<dyn FnMut(&SyncState)>;

/// Observer/subject pair around the engine's status report.
///
/// Holds the pull accessor, the current derived [`SyncState`], and the
/// subscriber list. All mutation happens on the event thread in call order;
/// the most recent call always wins.
pub struct SyncStore {
    source: Box<dyn SyncReportSource>,
    state: SyncState,
    subscribers: Vec<(Subscription, Subscriber)>,
    next_subscription: usize,
}

impl SyncStore {
    /// Return a new store over the given report accessor, in the idle state.
    ///
    pub fn new(source: impl SyncReportSource + 'static) -> SyncStore {
        SyncStore {
            source: Box::new(source),
            state: SyncState::default(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current derived state.
    ///
    pub fn state(&self) -> &SyncState {
        &self.state
    }

    /// Register `callback` to run synchronously after every recomputation,
    /// in subscription order. Returns the handle needed to unsubscribe.
    ///
    pub fn subscribe(&mut self, callback: impl FnMut(&SyncState) + 'static) -> Subscription {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((subscription, Box::new(callback)));
        subscription
    }

    /// Remove a previously registered subscriber. Unknown handles are
    /// ignored.
    ///
    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.subscribers.retain(|(held, _)| *held != subscription);
    }

    /// Re-read the engine's current report and recompute the derived state.
    ///
    /// This is also the target for the engine's push-style "status changed"
    /// notification; any payload attached to that notification is ignored
    /// and the report is re-read through the accessor. The error message
    /// slot is carried across recomputes untouched.
    ///
    pub fn update_status(&mut self) {
        let report = self.source.current_report();
        debug!("Recomputing sync state from report {:?}...", report);
        let (status, is_connected, last_sync_time) = derive(report.as_ref());
        self.state.status = status;
        self.state.is_connected = is_connected;
        self.state.last_sync_time = last_sync_time;
        self.notify();
    }

    /// Record an upstream error signal. The derivation path never sets the
    /// error slot; it is filled only here and emptied only by
    /// [`SyncStore::clear_error`].
    ///
    pub fn set_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("Sync error reported: {}", message);
        self.state.status = SyncStatus::Error;
        self.state.error = Some(message);
        self.notify();
    }

    /// Empty the error slot without touching status, connectivity, or the
    /// last-synced instant.
    ///
    pub fn clear_error(&mut self) {
        self.state.error = None;
        self.notify();
    }

    /// Run all current subscribers against the current state, in
    /// subscription order.
    ///
    fn notify(&mut self) {
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.state);
        }
    }
}

/// Priority-ordered collapse of a raw report into the finite status, with
/// the mirrored connectivity flag and last-synced instant. First match wins:
/// absent report is offline, transfer activity is syncing, connectivity
/// alone is success, anything else is offline.
///
fn derive(report: Option<&SyncReport>) -> (SyncStatus, bool, Option<DateTime<Utc>>) {
    match report {
        None => (SyncStatus::Offline, false, None),
        Some(report) => {
            let status = if report.uploading || report.downloading {
                SyncStatus::Syncing
            } else if report.connected {
                SyncStatus::Success
            } else {
                SyncStatus::Offline
            };
            (status, report.connected, report.last_synced_at)
        }
    }
}
