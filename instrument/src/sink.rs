//! Append-only text sinks for call records.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Sink used when a [`CallLogger`](crate::CallLogger) is built without one.
pub const DEFAULT_SINK_NAME: &str = "accounting.log";

/// Append-only text file identified by its path.
///
/// Each append opens the file in create+append mode, writes one line and
/// releases the handle before returning. Nothing is held between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSink {
    path: PathBuf,
}

impl LogSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `line` followed by a newline.
    pub fn append(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        file.write_all(buf.as_bytes())?;
        debug!(path = %self.path.display(), "call record appended");
        Ok(())
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new(DEFAULT_SINK_NAME)
    }
}
