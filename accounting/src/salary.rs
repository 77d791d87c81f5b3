//! Salary and tax arithmetic.

use instrument::{CallError, Render, render_json};
use serde::Serialize;

use crate::people::Employee;

/// Personal income tax share of gross salary.
pub const INCOME_TAX_RATE: f64 = 0.13;
/// Employer social contributions share of gross salary.
pub const SOCIAL_TAX_RATE: f64 = 0.22;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayrollSummary {
    pub total_employees: usize,
    pub total_salary: f64,
    pub average_salary: f64,
}

impl Render for PayrollSummary {
    fn render(&self) -> String {
        render_json(self)
    }
}

pub fn payroll_summary(employees: &[Employee]) -> PayrollSummary {
    let total_salary: f64 = employees.iter().map(|employee| employee.salary).sum();
    let average_salary = if employees.is_empty() {
        0.0
    } else {
        total_salary / employees.len() as f64
    };
    PayrollSummary {
        total_employees: employees.len(),
        total_salary,
        average_salary,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndividualSalary {
    pub employee: String,
    pub base: f64,
    pub bonus: f64,
    pub total: f64,
}

impl Render for IndividualSalary {
    fn render(&self) -> String {
        render_json(self)
    }
}

pub fn individual_salary(employee: &str, base: f64, bonus_percent: f64) -> IndividualSalary {
    let bonus = base * (bonus_percent / 100.0);
    IndividualSalary {
        employee: employee.to_string(),
        base,
        bonus,
        total: base + bonus,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryReport {
    pub report_date: String,
    pub status: String,
    pub format: String,
}

impl Render for SalaryReport {
    fn render(&self) -> String {
        render_json(self)
    }
}

pub fn salary_report(report_date: String) -> SalaryReport {
    SalaryReport {
        report_date,
        status: "generated".to_string(),
        format: "detailed".to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxBreakdown {
    pub gross_salary: f64,
    pub income_tax: f64,
    pub social_tax: f64,
    /// Gross minus income tax; social contributions are paid on top.
    pub net_salary: f64,
    pub total_taxes: f64,
}

impl Render for TaxBreakdown {
    fn render(&self) -> String {
        render_json(self)
    }
}

/// Taxes on a gross salary. Negative (or NaN) salaries are rejected.
pub fn taxes(gross_salary: f64) -> Result<TaxBreakdown, CallError> {
    if gross_salary.is_nan() || gross_salary < 0.0 {
        return Err(CallError::invalid_value(
            "gross salary must be a non-negative number",
        ));
    }
    let income_tax = gross_salary * INCOME_TAX_RATE;
    let social_tax = gross_salary * SOCIAL_TAX_RATE;
    Ok(TaxBreakdown {
        gross_salary,
        income_tax,
        social_tax,
        net_salary: gross_salary - income_tax,
        total_taxes: income_tax + social_tax,
    })
}
