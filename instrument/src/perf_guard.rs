//! Adapter reporting calls that run longer than a threshold.

use std::fmt;
use std::time::Duration;

use tracing::warn;

use crate::clock::{Clock, SystemClock};
use crate::error::CallError;
use crate::operation::Operation;
use crate::value::Args;

/// Calls strictly slower than this are reported.
pub const DEFAULT_SLOW_THRESHOLD: Duration = Duration::from_secs(1);

/// A call that exceeded its guard's threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlowCall<'a> {
    pub operation: &'a str,
    pub elapsed: Duration,
    pub threshold: Duration,
}

impl fmt::Display for SlowCall<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "slow call: {} took {:.2} seconds",
            self.operation,
            self.elapsed.as_secs_f64()
        )
    }
}

/// Diagnostic channel for slow calls. Never the call-record sink.
pub trait SlowCallReporter {
    fn report(&self, call: &SlowCall<'_>);
}

impl<R: SlowCallReporter + ?Sized> SlowCallReporter for &R {
    fn report(&self, call: &SlowCall<'_>) {
        (**self).report(call);
    }
}

/// Emits slow calls as `tracing` warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl SlowCallReporter for TracingReporter {
    fn report(&self, call: &SlowCall<'_>) {
        warn!(
            operation = call.operation,
            elapsed_ms = call.elapsed.as_millis() as u64,
            threshold_ms = call.threshold.as_millis() as u64,
            "{call}"
        );
    }
}

/// Measures the wrapped operation and reports it when slow.
///
/// Results and errors pass through untouched; a failing call is never
/// reported.
#[derive(Debug, Clone)]
pub struct PerformanceGuard<O, C = SystemClock, R = TracingReporter> {
    inner: O,
    threshold: Duration,
    clock: C,
    reporter: R,
}

impl<O> PerformanceGuard<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            threshold: DEFAULT_SLOW_THRESHOLD,
            clock: SystemClock,
            reporter: TracingReporter,
        }
    }
}

impl<O, C, R> PerformanceGuard<O, C, R> {
    pub fn with_threshold(mut self, threshold: Duration) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_clock<C2: Clock>(self, clock: C2) -> PerformanceGuard<O, C2, R> {
        PerformanceGuard {
            inner: self.inner,
            threshold: self.threshold,
            clock,
            reporter: self.reporter,
        }
    }

    pub fn with_reporter<R2: SlowCallReporter>(self, reporter: R2) -> PerformanceGuard<O, C, R2> {
        PerformanceGuard {
            inner: self.inner,
            threshold: self.threshold,
            clock: self.clock,
            reporter,
        }
    }

    pub fn threshold(&self) -> Duration {
        self.threshold
    }
}

impl<O, C, R> Operation for PerformanceGuard<O, C, R>
where
    O: Operation,
    C: Clock,
    R: SlowCallReporter,
{
    type Output = O::Output;

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn invoke(&self, args: &Args) -> Result<Self::Output, CallError> {
        let start = self.clock.now();
        let value = self.inner.invoke(args)?;
        let elapsed = self.clock.elapsed_since(start);

        if elapsed > self.threshold {
            self.reporter.report(&SlowCall {
                operation: self.name(),
                elapsed,
                threshold: self.threshold,
            });
        }
        Ok(value)
    }
}
