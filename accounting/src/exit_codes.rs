//! Stable exit codes for accounting CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed: bad config, a failed check, or an unexpected call error.
pub const FAILED: i32 = 1;
