//! Introductory exercises: a logger with a fixed sink, then one per sink.
//!
//! Both use the simple line style (`ts - name(args) -> result`).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use instrument::{Args, CallError, CallLogger, Func, LineStyle, LogSink, Operation, Value};

use crate::log_view::remove_log_files;

/// Sink of the first exercise.
pub const TASK1_SINK: &str = "main.log";
/// Sinks of the second exercise.
pub const TASK2_SINKS: [&str; 3] = ["log_1.log", "log_2.log", "log_3.log"];

fn hello_world(_: &Args) -> Result<String, CallError> {
    Ok("Hello World".to_string())
}

/// `summator(a, b=0)`: ints stay ints, any float makes a float.
fn summator(args: &Args) -> Result<Value, CallError> {
    let a = args.require(0, "a")?;
    let b = args.get(1, "b").cloned().unwrap_or(Value::Int(0));
    add_values(a, &b)
}

/// `div(a, b)`: always a float.
fn div(args: &Args) -> Result<Value, CallError> {
    let a = args.number(0, "a")?;
    let b = args.number(1, "b")?;
    if b == 0.0 {
        return Err(CallError::DivisionByZero);
    }
    Ok(Value::Float(a / b))
}

fn add_values(a: &Value, b: &Value) -> Result<Value, CallError> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => x
            .checked_add(*y)
            .map(Value::Int)
            .ok_or_else(|| CallError::invalid_value("integer overflow")),
        (Value::Int(x), Value::Float(y)) => Ok(Value::Float(*x as f64 + y)),
        (Value::Float(x), Value::Int(y)) => Ok(Value::Float(x + *y as f64)),
        (Value::Float(x), Value::Float(y)) => Ok(Value::Float(x + y)),
        (Value::Str(x), Value::Str(y)) => Ok(Value::Str(format!("{x}{y}"))),
        _ => Err(CallError::invalid_value(format!(
            "unsupported operands for +: {} and {}",
            a.kind(),
            b.kind()
        ))),
    }
}

/// Wrap one of the exercise functions for `sink`.
fn logged<F, T>(name: &str, f: F, sink: &LogSink) -> CallLogger<Func<F, T>>
where
    F: Fn(&Args) -> Result<T, CallError>,
{
    CallLogger::new(Func::new(name, f))
        .with_sink(sink.clone())
        .with_style(LineStyle::Simple)
}

/// The checks both exercises share. Returns the sink's contents.
fn exercise_sink(sink: &LogSink) -> Result<String> {
    let hello = logged("hello_world", hello_world, sink);
    let add = logged("summator", summator, sink);
    let divide = logged("div", div, sink);

    ensure!(
        hello.invoke(&Args::new())? == "Hello World",
        "hello_world must return 'Hello World'"
    );
    let result = add.invoke(&Args::new().arg(2).arg(2))?;
    ensure!(result == Value::Int(4), "2 + 2 must be the integer 4, got {result:?}");
    let result = divide.invoke(&Args::new().arg(6).arg(2))?;
    ensure!(result == Value::Float(3.0), "6 / 2 must be 3, got {result:?}");
    ensure!(
        sink.path().exists(),
        "{} must exist after logged calls",
        sink.path().display()
    );

    add.invoke(&Args::new().arg(4.3).kwarg("b", 2.2))?;

    read_and_check(sink.path())
}

fn read_and_check(path: &Path) -> Result<String> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    ensure!(
        contents.contains("summator"),
        "{} must record the function name",
        path.display()
    );
    for item in ["4.3", "2.2", "6.5"] {
        ensure!(
            contents.contains(item),
            "{} must record {}",
            path.display(),
            item
        );
    }
    Ok(contents)
}

/// Exercise 1: fixed sink `main.log` under `log_dir`, cleared first.
pub fn run_task1(log_dir: &Path) -> Result<()> {
    let sink = LogSink::new(log_dir.join(TASK1_SINK));
    remove_log_files(&[sink.path().to_path_buf()])?;

    exercise_sink(&sink)?;
    logged("summator", summator, &sink).invoke(&Args::new().kwarg("a", 0).kwarg("b", 0))?;
    let contents = read_and_check(sink.path())?;

    println!("Exercise 1 checks passed");
    println!("Contents of {}:", sink.path().display());
    println!("{}", "-".repeat(50));
    print!("{contents}");
    Ok(())
}

/// Exercise 2: the same checks against each of three sinks.
pub fn run_task2(log_dir: &Path) -> Result<()> {
    let paths: Vec<PathBuf> = TASK2_SINKS.iter().map(|name| log_dir.join(name)).collect();

    for path in &paths {
        remove_log_files(std::slice::from_ref(path))?;
        exercise_sink(&LogSink::new(path))?;
    }
    for path in &paths {
        ensure!(path.exists(), "{} must exist", path.display());
        read_and_check(path)?;
    }

    println!("Exercise 2 checks passed");
    for path in &paths {
        let contents =
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        println!("\nContents of {}:", path.display());
        println!("{}", "-".repeat(50));
        print!("{contents}");
    }
    Ok(())
}
