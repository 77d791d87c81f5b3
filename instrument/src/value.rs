//! Dynamic argument model shared by every adapter.

use std::fmt;

use crate::error::CallError;
use crate::render::{Render, format_float};

/// Runtime kind tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    None,
    Bool,
    Int,
    Float,
    Str,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::None => "none",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Str => "str",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single call argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::None => ValueKind::None,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
        }
    }
}

impl Render for Value {
    fn render(&self) -> String {
        match self {
            Value::None => "None".to_string(),
            Value::Bool(true) => "True".to_string(),
            Value::Bool(false) => "False".to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(x) => format_float(*x),
            Value::Str(s) => s.clone(),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

/// Positional and keyword arguments of one call, in call order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    positional: Vec<Value>,
    keyword: Vec<(String, Value)>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Append a keyword argument.
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keyword.push((name.into(), value.into()));
        self
    }

    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    pub fn keyword(&self) -> &[(String, Value)] {
        &self.keyword
    }

    /// Look up a parameter by position, falling back to its keyword name.
    pub fn get(&self, index: usize, name: &str) -> Option<&Value> {
        self.positional.get(index).or_else(|| {
            self.keyword
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value)
        })
    }

    pub fn require(&self, index: usize, name: &str) -> Result<&Value, CallError> {
        self.get(index, name)
            .ok_or_else(|| CallError::MissingArgument {
                name: name.to_string(),
            })
    }

    pub fn int(&self, index: usize, name: &str) -> Result<i64, CallError> {
        match self.require(index, name)? {
            Value::Int(n) => Ok(*n),
            other => Err(argument_type(name, "int", other)),
        }
    }

    pub fn float(&self, index: usize, name: &str) -> Result<f64, CallError> {
        match self.require(index, name)? {
            Value::Float(x) => Ok(*x),
            other => Err(argument_type(name, "float", other)),
        }
    }

    /// Accept either an int or a float.
    pub fn number(&self, index: usize, name: &str) -> Result<f64, CallError> {
        as_number(name, self.require(index, name)?)
    }

    /// Like [`Args::number`], but an absent parameter yields `default`.
    pub fn number_or(&self, index: usize, name: &str, default: f64) -> Result<f64, CallError> {
        self.get(index, name)
            .map_or(Ok(default), |value| as_number(name, value))
    }

    pub fn str(&self, index: usize, name: &str) -> Result<&str, CallError> {
        match self.require(index, name)? {
            Value::Str(s) => Ok(s),
            other => Err(argument_type(name, "str", other)),
        }
    }
}

fn as_number(name: &str, value: &Value) -> Result<f64, CallError> {
    match value {
        Value::Int(n) => Ok(*n as f64),
        Value::Float(x) => Ok(*x),
        other => Err(argument_type(name, "int or float", other)),
    }
}

fn argument_type(name: &str, expected: &'static str, actual: &Value) -> CallError {
    CallError::ArgumentType {
        name: name.to_string(),
        expected,
        actual: actual.kind(),
    }
}

impl Render for Args {
    fn render(&self) -> String {
        let positional = self
            .positional
            .iter()
            .map(Render::render)
            .collect::<Vec<_>>()
            .join(", ");
        let keyword = self
            .keyword
            .iter()
            .map(|(name, value)| format!("{}={}", name, value.render()))
            .collect::<Vec<_>>()
            .join(", ");

        [positional, keyword]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_positional_then_keyword() {
        assert_eq!(Args::new().arg(2).arg(2).render(), "2, 2");
        assert_eq!(Args::new().arg(4.3).kwarg("b", 2.2).render(), "4.3, b=2.2");
        assert_eq!(Args::new().kwarg("a", 0).kwarg("b", 0).render(), "a=0, b=0");
        assert_eq!(Args::new().render(), "");
    }

    #[test]
    fn renders_scalars_like_plain_text() {
        assert_eq!(Value::from("Иванов И.И.").render(), "Иванов И.И.");
        assert_eq!(Value::from(3.0).render(), "3.0");
        assert_eq!(Value::from(120000.0).render(), "120000.0");
        assert_eq!(Value::from(true).render(), "True");
        assert_eq!(Value::None.render(), "None");
    }

    #[test]
    fn get_prefers_position_then_keyword() {
        let args = Args::new().arg(1).kwarg("b", 5);
        assert_eq!(args.get(0, "a"), Some(&Value::Int(1)));
        assert_eq!(args.get(1, "b"), Some(&Value::Int(5)));
        assert_eq!(args.get(2, "c"), None);
    }

    #[test]
    fn typed_accessors_report_kind_errors() {
        let args = Args::new().arg("x").arg(2);
        assert_eq!(args.str(0, "name").expect("str"), "x");
        assert_eq!(args.number(1, "amount").expect("number"), 2.0);

        let err = args.float(1, "amount").expect_err("int is not float");
        assert!(matches!(
            err,
            CallError::ArgumentType {
                expected: "float",
                actual: ValueKind::Int,
                ..
            }
        ));

        let err = args.int(5, "missing").expect_err("missing");
        assert!(matches!(err, CallError::MissingArgument { .. }));
    }

    #[test]
    fn number_or_uses_default_when_absent() {
        let args = Args::new().arg("x").arg(1.0);
        assert_eq!(args.number_or(2, "bonus", 0.0).expect("default"), 0.0);
        let args = args.kwarg("bonus", 15.0);
        assert_eq!(args.number_or(2, "bonus", 0.0).expect("keyword"), 15.0);
    }

    #[test]
    fn number_or_accepts_int_keyword() {
        let args = Args::new().arg("x").arg(1.0).kwarg("bonus", 10);
        assert_eq!(args.number_or(2, "bonus", 0.0).expect("int keyword"), 10.0);

        let err = Args::new()
            .kwarg("bonus", "ten")
            .number_or(2, "bonus", 0.0)
            .expect_err("text");
        assert!(matches!(
            err,
            CallError::ArgumentType {
                expected: "int or float",
                actual: ValueKind::Str,
                ..
            }
        ));
    }
}
