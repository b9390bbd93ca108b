//! Derived synchronization status over the data-sync engine.
//!
//! The engine reports a multi-field snapshot of its activity (connectivity,
//! upload/download flags, last-synced instant). Display surfaces never read
//! that snapshot directly: they consume a single finite status derived here,
//! so every badge and banner agrees on what "syncing" means. The store is an
//! explicit observer/subject pair: state mutation is always followed by
//! synchronous notification to subscribers in subscription order.

mod report;
mod store;

pub use report::{SyncReport, SyncReportSource};
pub use store::{Subscription, SyncState, SyncStatus, SyncStore};
