//! Decorated payroll operations.
//!
//! Each method builds its adapter stack around a leaf from [`people`] or
//! [`salary`] and invokes it once. The stacks hold only configuration, so
//! building them per call is free of shared state.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use chrono::Local;
use instrument::{Args, CallError, Func, LogSink, Operation, OperationExt, Render, ValueKind};

use crate::config::AccountingConfig;
use crate::log_view;
use crate::people::{self, DataUpdate, DepartmentStats, Employee};
use crate::salary::{self, IndividualSalary, PayrollSummary, SalaryReport, TaxBreakdown};

/// Payroll facade: every method is logged, some are also timed or validated.
#[derive(Debug, Clone)]
pub struct Ledger {
    config: AccountingConfig,
}

impl Ledger {
    pub fn new(config: AccountingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AccountingConfig {
        &self.config
    }

    pub fn default_sink(&self) -> LogSink {
        self.config.sink(&self.config.default_sink)
    }

    pub fn main_sink(&self) -> LogSink {
        self.config.sink(&self.config.main_sink)
    }

    pub fn self_check_sink(&self) -> LogSink {
        self.config.sink(&self.config.self_check_sink)
    }

    /// `get_employees()`: logged and timed.
    pub fn get_employees(&self) -> Result<Vec<Employee>, CallError> {
        Func::new("get_employees", |_: &Args| {
            println!("Loading employees from the directory...");
            pause(self.config.latency.employees_ms);
            let employees = people::roster();
            println!(
                "Loaded {} employees at {}",
                employees.len(),
                Local::now().format("%H:%M:%S")
            );
            Ok(employees)
        })
        .timed()
        .with_threshold(self.config.slow_call_threshold())
        .logged_to(self.default_sink())
        .invoke(&Args::new())
    }

    /// `get_employee_by_id(employee_id: int)`. Only a positional id is
    /// kind-checked; a keyword id may be any whole number.
    pub fn get_employee_by_id(&self, args: &Args) -> Result<Option<Employee>, CallError> {
        Func::new("get_employee_by_id", |args: &Args| {
            let id = args.number(0, "employee_id")?;
            let employees = self.get_employees()?;
            // A fractional id never matches.
            let found = Some(id)
                .filter(|id| id.fract() == 0.0)
                .and_then(|id| people::find_by_id(&employees, id as i64));
            match &found {
                Some(employee) => println!("Found employee: {}", employee.name),
                None => println!(
                    "Employee with id {} not found",
                    args.require(0, "employee_id")?.render()
                ),
            }
            Ok(found)
        })
        .validated([ValueKind::Int])
        .logged_to(self.default_sink())
        .invoke(args)
    }

    /// `add_employee(name: str, position: str)`.
    pub fn add_employee(&self, args: &Args) -> Result<Employee, CallError> {
        Func::new("add_employee", |args: &Args| {
            let name = args.str(0, "name")?;
            let position = args.str(1, "position")?;
            let hire = people::new_hire(name, position, Local::now().date_naive())?;
            println!("Added employee: {} - {}", hire.name, hire.position);
            Ok(hire)
        })
        .validated([ValueKind::Str, ValueKind::Str])
        .logged_to(self.default_sink())
        .invoke(args)
    }

    /// `update_employee_data()`.
    pub fn update_employee_data(&self) -> Result<DataUpdate, CallError> {
        Func::new("update_employee_data", |_: &Args| {
            let update = people::data_update(&people::roster(), Local::now().to_rfc3339());
            println!("Employee data updated");
            Ok(update)
        })
        .logged_to(self.default_sink())
        .invoke(&Args::new())
    }

    /// `get_employees_by_position(position)`. A non-string position is an
    /// argument-type error raised by the function itself.
    pub fn get_employees_by_position(&self, args: &Args) -> Result<Vec<Employee>, CallError> {
        Func::new("get_employees_by_position", |args: &Args| {
            let position = args.str(0, "position")?;
            let employees = self.get_employees()?;
            let found = people::filter_by_position(&employees, position);
            println!("Found {} employees with position '{}'", found.len(), position);
            Ok(found)
        })
        .logged_to(self.default_sink())
        .invoke(args)
    }

    /// `calculate_department_stats()`.
    pub fn calculate_department_stats(&self) -> Result<DepartmentStats, CallError> {
        Func::new("calculate_department_stats", |_: &Args| {
            let employees = self.get_employees()?;
            let stats = people::department_stats(&employees, Local::now().to_rfc3339());
            println!("Department statistics calculated");
            Ok(stats)
        })
        .logged_to(self.default_sink())
        .invoke(&Args::new())
    }

    /// `calculate_salary()`: logged and timed.
    pub fn calculate_salary(&self) -> Result<PayrollSummary, CallError> {
        Func::new("calculate_salary", |_: &Args| {
            println!("Calculating payroll...");
            println!("   - base salaries");
            println!("   - bonuses and allowances");
            println!("   - taxes and deductions");
            println!("   - calculation date: {}", Local::now().format("%d.%m.%Y"));
            pause(self.config.latency.payroll_ms);
            let summary = salary::payroll_summary(&people::roster());
            println!("Payroll calculated");
            Ok(summary)
        })
        .timed()
        .with_threshold(self.config.slow_call_threshold())
        .logged_to(self.default_sink())
        .invoke(&Args::new())
    }

    /// `calculate_individual_salary(employee_name: str, base_salary: float,
    /// bonus_percent: float = 0.0)`. Positional arguments are kind-checked;
    /// keyword amounts accept ints as well.
    pub fn calculate_individual_salary(&self, args: &Args) -> Result<IndividualSalary, CallError> {
        Func::new("calculate_individual_salary", |args: &Args| {
            let name = args.str(0, "employee_name")?;
            let base = args.number(1, "base_salary")?;
            let bonus_percent = args.number_or(2, "bonus_percent", 0.0)?;
            let pay = salary::individual_salary(name, base, bonus_percent);
            println!(
                "{}: {:.2} (base: {}, bonus: {:.2})",
                pay.employee, pay.total, pay.base, pay.bonus
            );
            Ok(pay)
        })
        .validated([ValueKind::Str, ValueKind::Float, ValueKind::Float])
        .logged_to(self.default_sink())
        .invoke(args)
    }

    /// `get_salary_report()`.
    pub fn get_salary_report(&self) -> Result<SalaryReport, CallError> {
        Func::new("get_salary_report", |_: &Args| {
            let report = salary::salary_report(Local::now().format("%Y-%m-%d").to_string());
            println!("Salary report generated");
            Ok(report)
        })
        .logged_to(self.default_sink())
        .invoke(&Args::new())
    }

    /// `calculate_taxes(gross_salary)`. Accepts int or float.
    pub fn calculate_taxes(&self, args: &Args) -> Result<TaxBreakdown, CallError> {
        Func::new("calculate_taxes", |args: &Args| {
            let gross = args.number(0, "gross_salary").map_err(|_| {
                CallError::invalid_value("gross salary must be a non-negative number")
            })?;
            salary::taxes(gross)
        })
        .logged_to(self.default_sink())
        .invoke(args)
    }

    /// Print sink files to the console; the call itself is logged.
    pub fn show_logs(&self, paths: &[PathBuf]) -> Result<(), CallError> {
        Func::new("show_logs", |_: &Args| {
            log_view::print_log_files(paths);
            Ok(())
        })
        .logged_to(self.default_sink())
        .invoke(&Args::new())
    }
}

fn pause(millis: u64) {
    if millis > 0 {
        thread::sleep(Duration::from_millis(millis));
    }
}
