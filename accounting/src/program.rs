//! End-to-end flows driven by the CLI: the main program, the self-check
//! scenario and the demo that chains every flow.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Local;
use instrument::{Args, CallError, Func, Operation, OperationExt};
use tracing::info;

use crate::exercises::{run_task1, run_task2};
use crate::ledger::Ledger;
use crate::log_view::{list_log_files, remove_log_files};

const BANNER_WIDTH: usize = 60;

/// Main program: load employees, calculate payroll. Logged to the main sink
/// and timed. Returns `"SUCCESS"`.
pub fn run_main(ledger: &Ledger) -> Result<String, CallError> {
    Func::new("main", |_: &Args| {
        println!("=== Accounting with call logging ===");
        println!("Started at: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
        println!();

        println!("Fetching employees...");
        ledger.get_employees()?;
        println!();

        println!("Calculating payroll...");
        ledger.calculate_salary()?;
        println!();

        println!("Program finished successfully");
        println!(
            "Call records written to {} and {}",
            ledger.main_sink().path().display(),
            ledger.default_sink().path().display()
        );
        Ok("SUCCESS".to_string())
    })
    .timed()
    .with_threshold(ledger.config().slow_call_threshold())
    .logged_to(ledger.main_sink())
    .invoke(&Args::new())
}

/// Main program followed by a dump of its sinks.
pub fn run_program(ledger: &Ledger) -> Result<()> {
    run_main(ledger).context("main program")?;
    println!("\n{}", "=".repeat(BANNER_WIDTH));
    show_program_logs(ledger)
}

/// Print the main and default sinks.
pub fn show_program_logs(ledger: &Ledger) -> Result<()> {
    let paths = [
        ledger.main_sink().path().to_path_buf(),
        ledger.default_sink().path().to_path_buf(),
    ];
    ledger.show_logs(&paths).context("show logs")?;
    Ok(())
}

/// Every payroll operation with valid arguments. Logged to the self-check sink.
fn check_accounting_functions(ledger: &Ledger) -> Result<String, CallError> {
    Func::new("check_accounting_functions", |_: &Args| {
        println!("1. Employee by id:");
        let employee = ledger.get_employee_by_id(&Args::new().arg(1))?;
        println!("   Result: {employee:?}");

        println!("\n2. Add employee:");
        let hire = ledger.add_employee(&Args::new().arg("Кузнецов К.К.").arg("Дизайнер"))?;
        println!("   Result: {hire:?}");

        println!("\n3. Individual salary:");
        let pay = ledger.calculate_individual_salary(
            &Args::new().arg("Иванов И.И.").arg(120_000.0).arg(15.0),
        )?;
        println!("   Result: {pay:?}");

        println!("\n4. Taxes:");
        let taxes = ledger.calculate_taxes(&Args::new().arg(150_000.0))?;
        println!("   Result: {taxes:?}");

        Ok("all checks finished".to_string())
    })
    .logged_to(ledger.self_check_sink())
    .invoke(&Args::new())
}

/// Deliberately invalid calls; each must fail with the expected kind.
fn check_error_handling(ledger: &Ledger) -> Result<String, CallError> {
    Func::new("check_error_handling", |_: &Args| {
        println!("Checking error handling:");

        match ledger.calculate_individual_salary(&Args::new().arg(123).arg("invalid").arg(10.0)) {
            Err(err @ CallError::TypeMismatch { .. }) => println!("   Caught type error: {err}"),
            Err(other) => return Err(other),
            Ok(_) => return Err(CallError::invalid_value("type mismatch went undetected")),
        }

        match ledger.calculate_taxes(&Args::new().arg(-1000)) {
            Err(err @ CallError::InvalidValue(_)) => println!("   Caught value error: {err}"),
            Err(other) => return Err(other),
            Ok(_) => return Err(CallError::invalid_value("negative salary was accepted")),
        }

        Ok("error handling checks finished".to_string())
    })
    .logged_to(ledger.self_check_sink())
    .invoke(&Args::new())
}

/// Clean the sinks, run both checks, then print the self-check and default sinks.
pub fn run_self_check(ledger: &Ledger) -> Result<()> {
    println!("Running the full adapter self-check");
    println!("{}", "=".repeat(BANNER_WIDTH));

    remove_log_files(&[
        ledger.default_sink().path().to_path_buf(),
        ledger.main_sink().path().to_path_buf(),
        ledger.self_check_sink().path().to_path_buf(),
    ])?;
    println!("Log files cleaned");

    let summary = check_accounting_functions(ledger).context("accounting checks")?;
    println!("\n{summary}");
    let summary = check_error_handling(ledger).context("error handling checks")?;
    println!("{summary}");

    println!("\n{}", "=".repeat(BANNER_WIDTH));
    println!("Call records:");
    let paths: Vec<PathBuf> = vec![
        ledger.self_check_sink().path().to_path_buf(),
        ledger.default_sink().path().to_path_buf(),
    ];
    ledger.show_logs(&paths).context("show logs")?;

    println!("\n{}", "=".repeat(BANNER_WIDTH));
    println!("Self-check finished");
    Ok(())
}

/// Run every flow in order, then list the `.log` files produced.
///
/// A failing flow is reported and the remaining flows still run; the demo
/// fails at the end if any flow failed.
pub fn run_demo(ledger: &Ledger) -> Result<()> {
    let log_dir = ledger.config().log_dir.clone();
    let steps: [(&str, Box<dyn Fn() -> Result<()> + '_>); 4] = [
        ("Exercise 1: simple logger", Box::new(|| run_task1(&log_dir))),
        ("Exercise 2: logger per sink", Box::new(|| run_task2(&log_dir))),
        ("Accounting program", Box::new(|| run_program(ledger))),
        ("Adapter self-check", Box::new(|| run_self_check(ledger))),
    ];

    let mut failed = Vec::new();
    for (title, step) in &steps {
        println!("\n{}", "=".repeat(BANNER_WIDTH));
        println!("RUNNING: {title}");
        println!("{}", "=".repeat(BANNER_WIDTH));
        match step() {
            Ok(()) => println!("Step finished successfully"),
            Err(err) => {
                println!("Step failed: {err:#}");
                failed.push(*title);
            }
        }
    }

    println!("\nGenerated log files:");
    println!("{}", "=".repeat(40));
    let logs = list_log_files(&log_dir)?;
    if logs.is_empty() {
        println!("No log files found");
    }
    for log in &logs {
        println!("{} ({} bytes)", log.name, log.size_bytes);
    }
    info!(steps = steps.len(), failed = failed.len(), "demo finished");

    if !failed.is_empty() {
        bail!("demo steps failed: {}", failed.join(", "));
    }
    println!("\nAll steps finished. Inspect the log files above for the call records.");
    Ok(())
}
