//! Exclusive-open coordination for swipe-revealable list rows.
//!
//! Rows mount and unmount unpredictably and open or close independently of
//! each other; the registry guarantees that at most one row is visually open
//! at any time. It is a best-effort coordination primitive, not a
//! transactional one: its operations cannot fail, and a close callback that
//! panics is its owner's responsibility.

use log::*;

/// Handle for the row currently recorded as open. The close callback returns
/// the row to its closed visual state.
///
struct OpenRow {
    id: String,
    close: Box<dyn FnMut()>,
}

/// Coordinates an unbounded, dynamically changing collection of revealable
/// rows so that at most one is open at any time.
///
/// Constructed explicitly and passed by reference to consumers; independent
/// instances coordinate independent row collections.
pub struct RevealRegistry {
    open: Option<OpenRow>,
}

impl RevealRegistry {
    /// Return a new registry with no open row.
    ///
    pub fn new() -> RevealRegistry {
        RevealRegistry { open: None }
    }

    /// Record the row with `id` as the open one. If a different row is
    /// currently open, its close callback is invoked synchronously exactly
    /// once before the handle is replaced. Re-registering the same id only
    /// replaces the stored callback.
    ///
    pub fn register_open(&mut self, id: impl Into<String>, close: impl FnMut() + 'static) {
        let id = id.into();
        if let Some(mut previous) = self.open.take() {
            if previous.id != id {
                debug!("Closing row {} superseded by row {}", previous.id, id);
                (previous.close)();
            }
        }
        self.open = Some(OpenRow {
            id,
            close: Box::new(close),
        });
    }

    /// Close the currently open row, if any, and clear the handle. Calling
    /// with no open row is a no-op.
    ///
    pub fn close_current(&mut self) {
        if let Some(mut row) = self.open.take() {
            debug!("Closing row {}", row.id);
            (row.close)();
        }
    }

    /// Return the id of the currently open row, if any.
    ///
    pub fn open_id(&self) -> Option<&str> {
        self.open.as_ref().map(|row| row.id.as_str())
    }
}

impl Default for RevealRegistry {
    fn default() -> RevealRegistry {
        RevealRegistry::new()
    }
}
