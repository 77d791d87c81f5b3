//! The callable seam every adapter wraps and exposes.

use std::marker::PhantomData;

use crate::call_logger::CallLogger;
use crate::error::CallError;
use crate::perf_guard::PerformanceGuard;
use crate::sink::LogSink;
use crate::validator::ArgumentValidator;
use crate::value::{Args, ValueKind};

/// A named operation invoked with dynamic arguments.
///
/// Adapters implement this trait themselves and delegate [`Operation::name`]
/// to the operation they wrap, so a stack of adapters reports the leaf's name.
pub trait Operation {
    type Output;

    fn name(&self) -> &str;

    fn invoke(&self, args: &Args) -> Result<Self::Output, CallError>;
}

impl<O: Operation + ?Sized> Operation for &O {
    type Output = O::Output;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn invoke(&self, args: &Args) -> Result<Self::Output, CallError> {
        (**self).invoke(args)
    }
}

/// Leaf adapter turning a plain function or closure into an [`Operation`].
pub struct Func<F, T> {
    name: String,
    f: F,
    _output: PhantomData<fn() -> T>,
}

impl<F, T> Func<F, T>
where
    F: Fn(&Args) -> Result<T, CallError>,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
            _output: PhantomData,
        }
    }
}

impl<F, T> Operation for Func<F, T>
where
    F: Fn(&Args) -> Result<T, CallError>,
{
    type Output = T;

    fn name(&self) -> &str {
        &self.name
    }

    fn invoke(&self, args: &Args) -> Result<T, CallError> {
        (self.f)(args)
    }
}

/// Fluent nesting: `op.validated(kinds).logged_to(sink)`.
pub trait OperationExt: Operation + Sized {
    /// Log to the default sink.
    fn logged(self) -> CallLogger<Self> {
        CallLogger::new(self)
    }

    fn logged_to(self, sink: LogSink) -> CallLogger<Self> {
        CallLogger::new(self).with_sink(sink)
    }

    fn timed(self) -> PerformanceGuard<Self> {
        PerformanceGuard::new(self)
    }

    fn validated(self, expected: impl Into<Vec<ValueKind>>) -> ArgumentValidator<Self> {
        ArgumentValidator::new(self, expected)
    }
}

impl<O: Operation> OperationExt for O {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn func_invokes_closure_with_args() {
        let double = Func::new("double", |args: &Args| Ok(args.int(0, "n")? * 2));
        assert_eq!(double.name(), "double");
        assert_eq!(double.invoke(&Args::new().arg(21)).expect("invoke"), 42);
    }

    #[test]
    fn func_propagates_target_error() {
        let fail = Func::new("fail", |_: &Args| -> Result<(), CallError> {
            Err(CallError::DivisionByZero)
        });
        let err = fail.invoke(&Args::new()).expect_err("error");
        assert!(matches!(err, CallError::DivisionByZero));
    }
}
