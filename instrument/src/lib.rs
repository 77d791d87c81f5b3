//! Call instrumentation adapters.
//!
//! A target [`Operation`] is wrapped by small, stateless adapters that share
//! its calling signature, so they compose by nesting:
//!
//! - **[`CallLogger`]**: appends one [`CallRecord`] line per call to a
//!   [`LogSink`], on success and on error, then hands back the target's
//!   outcome untouched.
//! - **[`PerformanceGuard`]**: measures elapsed time and reports calls slower
//!   than a threshold to a diagnostic channel.
//! - **[`ArgumentValidator`]**: checks positional argument kinds before the
//!   target runs.
//!
//! Arguments travel as a dynamic [`Args`] list of [`Value`]s so every adapter
//! can render or inspect them without knowing the target's Rust signature.

pub mod call_logger;
pub mod clock;
pub mod error;
pub mod operation;
pub mod perf_guard;
pub mod record;
pub mod render;
pub mod sink;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod validator;
pub mod value;

pub use call_logger::CallLogger;
pub use clock::{Clock, FakeClock, SystemClock};
pub use error::CallError;
pub use operation::{Func, Operation, OperationExt};
pub use perf_guard::{
    DEFAULT_SLOW_THRESHOLD, PerformanceGuard, SlowCall, SlowCallReporter, TracingReporter,
};
pub use record::{CallRecord, LineStyle, Outcome};
pub use render::{Render, render_json};
pub use sink::{DEFAULT_SINK_NAME, LogSink};
pub use validator::ArgumentValidator;
pub use value::{Args, Value, ValueKind};
