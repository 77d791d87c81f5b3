//! Adapter appending one call record per invocation.

use chrono::Local;
use tracing::{debug, error};

use crate::clock::{Clock, SystemClock};
use crate::error::CallError;
use crate::operation::Operation;
use crate::record::{CallRecord, LineStyle, Outcome};
use crate::render::Render;
use crate::sink::LogSink;
use crate::value::Args;

/// Records every call of the wrapped operation to a [`LogSink`].
///
/// The target's result is returned as-is. A target error is recorded and then
/// returned unchanged. If the record cannot be appended after a successful
/// call the caller gets [`CallError::Sink`]; after a failed call the target's
/// error wins and the lost record is reported through `tracing`.
#[derive(Debug, Clone)]
pub struct CallLogger<O, C = SystemClock> {
    inner: O,
    sink: LogSink,
    style: LineStyle,
    clock: C,
}

impl<O> CallLogger<O> {
    /// Wrap `inner`, logging to [`LogSink::default`].
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            sink: LogSink::default(),
            style: LineStyle::default(),
            clock: SystemClock,
        }
    }
}

impl<O, C> CallLogger<O, C> {
    pub fn with_sink(mut self, sink: LogSink) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_clock<C2: Clock>(self, clock: C2) -> CallLogger<O, C2> {
        CallLogger {
            inner: self.inner,
            sink: self.sink,
            style: self.style,
            clock,
        }
    }

    pub fn sink(&self) -> &LogSink {
        &self.sink
    }
}

impl<O, C> Operation for CallLogger<O, C>
where
    O: Operation,
    O::Output: Render,
    C: Clock,
{
    type Output = O::Output;

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn invoke(&self, args: &Args) -> Result<Self::Output, CallError> {
        let timestamp = Local::now().naive_local();
        let start = self.clock.now();
        let result = self.inner.invoke(args);
        let elapsed = self.clock.elapsed_since(start);

        let outcome = match &result {
            Ok(value) => Outcome::Returned(value.render()),
            Err(err) => Outcome::failed(err),
        };
        let record = CallRecord {
            timestamp,
            operation: self.name().to_string(),
            arguments: args.render(),
            outcome,
            elapsed,
        };
        let appended = self.sink.append(&record.to_line(self.style));
        debug!(
            operation = %record.operation,
            elapsed_ms = elapsed.as_millis() as u64,
            ok = result.is_ok(),
            "call recorded"
        );

        match (result, appended) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(source)) => Err(CallError::Sink {
                path: self.sink.path().to_path_buf(),
                source,
            }),
            (Err(err), Ok(())) => Err(err),
            (Err(err), Err(source)) => {
                error!(
                    operation = %record.operation,
                    path = %self.sink.path().display(),
                    error = %source,
                    "call record lost"
                );
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::fs;
    use std::time::Duration;

    use super::*;
    use crate::clock::FakeClock;
    use crate::operation::Func;

    fn add(args: &Args) -> Result<f64, CallError> {
        Ok(args.number(0, "a")? + args.number(1, "b").unwrap_or(0.0))
    }

    fn lines(sink: &LogSink) -> Vec<String> {
        fs::read_to_string(sink.path())
            .expect("read sink")
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn success_appends_one_detailed_line() {
        let temp = tempfile::tempdir().expect("tempdir");
        let sink = LogSink::new(temp.path().join("calls.log"));
        let logged = CallLogger::new(Func::new("add", add)).with_sink(sink.clone());

        let result = logged.invoke(&Args::new().arg(4.3).kwarg("b", 2.2)).expect("add");

        assert_eq!(result, 6.5);
        let lines = lines(&sink);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains(" | SUCCESS | add(4.3, b=2.2) -> 6.5 | Время: "));
        assert!(lines[0].ends_with('с'));
    }

    #[test]
    fn error_is_recorded_and_returned_unchanged() {
        let temp = tempfile::tempdir().expect("tempdir");
        let sink = LogSink::new(temp.path().join("calls.log"));
        let logged = CallLogger::new(Func::new("taxes", |_: &Args| -> Result<f64, CallError> {
            Err(CallError::invalid_value("negative salary"))
        }))
        .with_sink(sink.clone());

        let err = logged.invoke(&Args::new().arg(-1000)).expect_err("error");

        assert!(matches!(err, CallError::InvalidValue(ref msg) if msg == "negative salary"));
        let lines = lines(&sink);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains(" | ERROR | taxes(-1000) -> InvalidValue: negative salary | "));
    }

    #[test]
    fn target_runs_once_per_call() {
        let temp = tempfile::tempdir().expect("tempdir");
        let sink = LogSink::new(temp.path().join("calls.log"));
        let calls = Cell::new(0);
        let logged = CallLogger::new(Func::new("count", |_: &Args| {
            calls.set(calls.get() + 1);
            Ok(calls.get() as i64)
        }))
        .with_sink(sink.clone());

        logged.invoke(&Args::new()).expect("first");
        logged.invoke(&Args::new()).expect("second");

        assert_eq!(calls.get(), 2);
        let lines = lines(&sink);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("count() -> 1"));
        assert!(lines[1].contains("count() -> 2"));
    }

    #[test]
    fn elapsed_comes_from_clock() {
        let temp = tempfile::tempdir().expect("tempdir");
        let sink = LogSink::new(temp.path().join("calls.log"));
        let clock = FakeClock::new();
        let tick = clock.clone();
        let logged = CallLogger::new(Func::new("slow", move |_: &Args| {
            tick.advance(Duration::from_millis(2500));
            Ok(())
        }))
        .with_sink(sink.clone())
        .with_clock(clock);

        logged.invoke(&Args::new()).expect("slow");

        assert!(lines(&sink)[0].ends_with("slow() -> None | Время: 2.5000с"));
    }

    #[test]
    fn simple_style_line() {
        let temp = tempfile::tempdir().expect("tempdir");
        let sink = LogSink::new(temp.path().join("main.log"));
        let logged = CallLogger::new(Func::new("add", add))
            .with_sink(sink.clone())
            .with_style(LineStyle::Simple);

        logged.invoke(&Args::new().arg(2).arg(2)).expect("add");

        let lines = lines(&sink);
        assert!(lines[0].ends_with(" - add(2, 2) -> 4.0"));
        assert!(!lines[0].contains("SUCCESS"));
    }

    #[test]
    fn sink_failure_after_success_surfaces_as_sink_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let sink = LogSink::new(temp.path().join("missing").join("calls.log"));
        let logged = CallLogger::new(Func::new("add", add)).with_sink(sink);

        let err = logged.invoke(&Args::new().arg(1).arg(1)).expect_err("sink");
        assert!(matches!(err, CallError::Sink { .. }));
    }

    #[test]
    fn sink_failure_after_error_keeps_target_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let sink = LogSink::new(temp.path().join("missing").join("calls.log"));
        let logged = CallLogger::new(Func::new("div", |_: &Args| -> Result<f64, CallError> {
            Err(CallError::DivisionByZero)
        }))
        .with_sink(sink);

        let err = logged.invoke(&Args::new()).expect_err("div");
        assert!(matches!(err, CallError::DivisionByZero));
    }
}
