//! Raw status snapshots from the sync engine boundary.

use chrono::{DateTime, Utc};
use fake::Dummy;
use serde::{Deserialize, Serialize};

/// Read-only snapshot of the sync engine's current activity.
///
#[derive(Clone, Debug, Dummy, PartialEq, Serialize, Deserialize)]
pub struct SyncReport {
    pub connected: bool,
    pub uploading: bool,
    pub downloading: bool,
    pub last_synced_at: Option<DateTime<Utc>>,
}

/// Pull-style accessor for the engine's current report.
///
/// Returns `None` while the engine is not initialized or unreachable. The
/// store always re-reads through this accessor rather than trusting any
/// payload attached to a change notification.
pub trait SyncReportSource {
    fn current_report(&self) -> Option<SyncReport>;
}
