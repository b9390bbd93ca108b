//! Interaction-state coordination core for the Focusdeck productivity app.
//!
//! This crate holds the non-visual, stateful mechanisms the app's views
//! coordinate through:
//! - Exclusive-open registry for swipe-revealable list rows
//! - Derived synchronization status over the data-sync engine
//! - Progress/time-display engine for the focus timer
//! - Persisted user preferences
//! - Log capture for the in-app diagnostics surface
//!
//! Views and the sync engine are collaborators on the other side of these
//! interfaces; nothing in this crate renders, navigates, or touches the
//! network.

pub mod config;
pub mod error;
pub mod logger;
pub mod reveal;
pub mod sync;
pub mod timer;

pub use config::{Config, ConfigError};
pub use error::{AppError, AppResult};
pub use logger::DiagnosticsLogger;
pub use reveal::RevealRegistry;
pub use sync::{SyncReport, SyncReportSource, SyncState, SyncStatus, SyncStore};
pub use timer::TimerDisplay;
