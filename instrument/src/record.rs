//! One logged line describing a single invocation.

use std::time::Duration;

use chrono::NaiveDateTime;

use crate::error::CallError;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Layout of a record line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    /// `ts | SUCCESS | name(args) -> result | Время: 0.0001с`
    #[default]
    Detailed,
    /// `ts - name(args) -> result`
    Simple,
}

/// How the call ended, already rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Returned(String),
    Failed { kind: &'static str, message: String },
}

impl Outcome {
    pub fn failed(err: &CallError) -> Self {
        Outcome::Failed {
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            Outcome::Returned(_) => "SUCCESS",
            Outcome::Failed { .. } => "ERROR",
        }
    }

    fn rendered(&self) -> String {
        match self {
            Outcome::Returned(result) => result.clone(),
            Outcome::Failed { kind, message } => format!("{kind}: {message}"),
        }
    }
}

/// Created per invocation, written immediately, then dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct CallRecord {
    /// Local wall-clock time the call started.
    pub timestamp: NaiveDateTime,
    pub operation: String,
    pub arguments: String,
    pub outcome: Outcome,
    pub elapsed: Duration,
}

impl CallRecord {
    pub fn to_line(&self, style: LineStyle) -> String {
        let timestamp = self.timestamp.format(TIMESTAMP_FORMAT);
        match style {
            LineStyle::Detailed => format!(
                "{} | {} | {}({}) -> {} | Время: {:.4}с",
                timestamp,
                self.outcome.tag(),
                self.operation,
                self.arguments,
                self.outcome.rendered(),
                self.elapsed.as_secs_f64()
            ),
            LineStyle::Simple => format!(
                "{} - {}({}) -> {}",
                timestamp,
                self.operation,
                self.arguments,
                self.outcome.rendered()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn record(outcome: Outcome) -> CallRecord {
        let timestamp = NaiveDate::from_ymd_opt(2026, 1, 2)
            .and_then(|date| date.and_hms_opt(3, 4, 5))
            .expect("valid timestamp");
        CallRecord {
            timestamp,
            operation: "add".to_string(),
            arguments: "4.3, b=2.2".to_string(),
            outcome,
            elapsed: Duration::from_micros(1234),
        }
    }

    #[test]
    fn detailed_success_line() {
        let line = record(Outcome::Returned("6.5".to_string())).to_line(LineStyle::Detailed);
        assert_eq!(
            line,
            "2026-01-02 03:04:05 | SUCCESS | add(4.3, b=2.2) -> 6.5 | Время: 0.0012с"
        );
    }

    #[test]
    fn detailed_error_line_uses_same_argument_rendering() {
        let outcome = Outcome::failed(&CallError::DivisionByZero);
        let line = record(outcome).to_line(LineStyle::Detailed);
        assert_eq!(
            line,
            "2026-01-02 03:04:05 | ERROR | add(4.3, b=2.2) -> DivisionByZero: division by zero | Время: 0.0012с"
        );
    }

    #[test]
    fn simple_line_omits_tag_and_duration() {
        let line = record(Outcome::Returned("6.5".to_string())).to_line(LineStyle::Simple);
        assert_eq!(line, "2026-01-02 03:04:05 - add(4.3, b=2.2) -> 6.5");
    }
}
