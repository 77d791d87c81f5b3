//! Adapter checking positional argument kinds before the target runs.

use crate::error::CallError;
use crate::operation::Operation;
use crate::value::{Args, ValueKind};

/// Rejects a call whose k-th positional argument is not the k-th expected kind.
///
/// Only positions present in both lists are checked. Keyword arguments and
/// surplus positional arguments pass unchecked.
#[derive(Debug, Clone)]
pub struct ArgumentValidator<O> {
    inner: O,
    expected: Vec<ValueKind>,
}

impl<O> ArgumentValidator<O> {
    pub fn new(inner: O, expected: impl Into<Vec<ValueKind>>) -> Self {
        Self {
            inner,
            expected: expected.into(),
        }
    }

    pub fn expected(&self) -> &[ValueKind] {
        &self.expected
    }
}

impl<O: Operation> ArgumentValidator<O> {
    fn check(&self, args: &Args) -> Result<(), CallError> {
        let mismatch = args
            .positional()
            .iter()
            .zip(&self.expected)
            .enumerate()
            .find(|(_, (value, expected))| value.kind() != **expected);

        match mismatch {
            Some((index, (value, expected))) => Err(CallError::TypeMismatch {
                operation: self.inner.name().to_string(),
                position: index + 1,
                expected: *expected,
                actual: value.kind(),
            }),
            None => Ok(()),
        }
    }
}

impl<O: Operation> Operation for ArgumentValidator<O> {
    type Output = O::Output;

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn invoke(&self, args: &Args) -> Result<Self::Output, CallError> {
        self.check(args)?;
        self.inner.invoke(args)
    }
}
