//! Test-only helpers for observing adapters.

use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::perf_guard::{SlowCall, SlowCallReporter};

/// Collects slow calls instead of emitting them.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    reported: RefCell<Vec<(String, Duration)>>,
}

impl RecordingReporter {
    /// Reported `(operation, elapsed)` pairs in report order.
    pub fn reported(&self) -> Vec<(String, Duration)> {
        self.reported.borrow().clone()
    }
}

impl SlowCallReporter for RecordingReporter {
    fn report(&self, call: &SlowCall<'_>) {
        self.reported
            .borrow_mut()
            .push((call.operation.to_string(), call.elapsed));
    }
}

/// Lines of a sink file; empty when the file does not exist.
pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .map(|contents| contents.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
