use std::path::PathBuf;

use thiserror::Error;

use crate::value::ValueKind;

/// Error raised by a target operation or by an adapter's own precondition.
#[derive(Debug, Error)]
pub enum CallError {
    /// Positional argument rejected by an [`ArgumentValidator`](crate::ArgumentValidator).
    #[error("argument {position} of {operation} must be {expected}, got {actual}")]
    TypeMismatch {
        operation: String,
        /// 1-based.
        position: usize,
        expected: ValueKind,
        actual: ValueKind,
    },

    #[error("argument {name} must be {expected}, got {actual}")]
    ArgumentType {
        name: String,
        expected: &'static str,
        actual: ValueKind,
    },

    #[error("missing required argument: {name}")]
    MissingArgument { name: String },

    /// Value-domain violation raised by business logic.
    #[error("{0}")]
    InvalidValue(String),

    #[error("division by zero")]
    DivisionByZero,

    /// The call itself succeeded but its record could not be appended.
    #[error("append call record to {}: {source}", path.display())]
    Sink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CallError {
    pub fn invalid_value(message: impl Into<String>) -> Self {
        CallError::InvalidValue(message.into())
    }

    /// Stable kind name written into `ERROR` call records.
    pub fn kind(&self) -> &'static str {
        match self {
            CallError::TypeMismatch { .. } => "TypeMismatch",
            CallError::ArgumentType { .. } => "ArgumentType",
            CallError::MissingArgument { .. } => "MissingArgument",
            CallError::InvalidValue(_) => "InvalidValue",
            CallError::DivisionByZero => "DivisionByZero",
            CallError::Sink { .. } => "Sink",
        }
    }
}
