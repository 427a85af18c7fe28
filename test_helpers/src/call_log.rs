//! Records which deferred branches ran.
//!
//! Each thunk built by [`CallLog::thunk`] appends its label when invoked, so
//! a test can assert both which branch ran and that the other one did not.
//!
//! # Examples
//!
//! ```
//! use ternary_result_test_helpers::CallLog;
//!
//! let log = CallLog::new();
//! let first = log.thunk("first", 1);
//! let _second = log.thunk("second", 2);
//! assert_eq!(first(), 1);
//! assert_eq!(log.entries(), vec!["first"]);
//! ```

use parking_lot::Mutex;

/// Thread-safe, append-only log of invoked thunk labels.
#[derive(Debug, Default)]
pub struct CallLog {
    entries: Mutex<Vec<String>>,
}

impl CallLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `label` to the log.
    pub fn record(&self, label: impl Into<String>) {
        self.entries.lock().push(label.into());
    }

    /// Build a thunk that records `label` and then yields `value`.
    pub fn thunk<'a, T: 'a>(
        &'a self,
        label: impl Into<String>,
        value: T,
    ) -> impl FnOnce() -> T + 'a {
        let name: String = label.into();
        move || {
            self.record(name);
            value
        }
    }

    /// Snapshot of the labels recorded so far, in invocation order.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    /// Number of times `label` was recorded.
    #[must_use]
    pub fn count(&self, label: &str) -> usize {
        self.entries
            .lock()
            .iter()
            .filter(|entry| entry.as_str() == label)
            .count()
    }

    /// Whether no thunk has run yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::CallLog;

    #[test]
    fn unused_thunks_leave_no_entry() {
        let log = CallLog::new();
        {
            let _thunk = log.thunk("never", ());
        }
        assert!(log.is_empty());
    }

    #[test]
    fn thunks_can_yield_borrowed_values() {
        let log = CallLog::new();
        let payload = String::from("borrowed");
        let thunk = log.thunk("borrow", payload.as_str());
        assert_eq!(thunk(), "borrowed");
        assert_eq!(log.entries(), vec!["borrow"]);
    }

    #[test]
    fn count_tracks_repeated_labels() {
        let log = CallLog::new();
        log.record("a");
        log.record("b");
        log.record("a");
        assert_eq!(log.count("a"), 2);
        assert_eq!(log.count("b"), 1);
        assert_eq!(log.entries(), vec!["a", "b", "a"]);
    }
}
