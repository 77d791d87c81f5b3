//! Employee records and the pure lookups over them.
//!
//! The directory is a fixed in-memory list; nothing here performs I/O.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use instrument::{CallError, Render, render_json};
use serde::Serialize;

/// Id assigned to a newly added employee.
const NEW_EMPLOYEE_ID: i64 = 4;
const NEW_EMPLOYEE_SALARY: f64 = 100_000.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub salary: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,
}

impl Employee {
    fn new(id: i64, name: &str, position: &str, salary: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            position: position.to_string(),
            salary,
            hire_date: None,
        }
    }
}

impl Render for Employee {
    fn render(&self) -> String {
        render_json(self)
    }
}

/// The fixed staff list.
pub fn roster() -> Vec<Employee> {
    vec![
        Employee::new(1, "Иванов И.И.", "Менеджер", 120_000.0),
        Employee::new(2, "Петров П.П.", "Программист", 180_000.0),
        Employee::new(3, "Сидоров С.С.", "Аналитик", 150_000.0),
    ]
}

pub fn find_by_id(employees: &[Employee], id: i64) -> Option<Employee> {
    employees.iter().find(|employee| employee.id == id).cloned()
}

/// Build the record for a new hire. Blank name or position is rejected.
pub fn new_hire(name: &str, position: &str, hired_on: NaiveDate) -> Result<Employee, CallError> {
    let name = name.trim();
    let position = position.trim();
    if name.is_empty() {
        return Err(CallError::invalid_value("employee name must not be empty"));
    }
    if position.is_empty() {
        return Err(CallError::invalid_value("position must not be empty"));
    }
    Ok(Employee {
        hire_date: Some(hired_on.format("%Y-%m-%d").to_string()),
        ..Employee::new(NEW_EMPLOYEE_ID, name, position, NEW_EMPLOYEE_SALARY)
    })
}

/// Case-insensitive match on position.
pub fn filter_by_position(employees: &[Employee], position: &str) -> Vec<Employee> {
    let wanted = position.to_lowercase();
    employees
        .iter()
        .filter(|employee| employee.position.to_lowercase() == wanted)
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataUpdate {
    pub updated_at: String,
    pub records_updated: usize,
    pub status: String,
}

impl Render for DataUpdate {
    fn render(&self) -> String {
        render_json(self)
    }
}

pub fn data_update(employees: &[Employee], updated_at: String) -> DataUpdate {
    DataUpdate {
        updated_at,
        records_updated: employees.len(),
        status: "success".to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionStats {
    pub count: usize,
    pub total_salary: f64,
    pub average_salary: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentStats {
    pub total_employees: usize,
    pub total_salary_budget: f64,
    /// Zero for an empty directory.
    pub average_salary: f64,
    pub positions: BTreeMap<String, PositionStats>,
    pub generated_at: String,
}

impl Render for DepartmentStats {
    fn render(&self) -> String {
        render_json(self)
    }
}

/// Group salaries by position.
pub fn department_stats(employees: &[Employee], generated_at: String) -> DepartmentStats {
    let mut positions: BTreeMap<String, PositionStats> = BTreeMap::new();
    let mut total_salary = 0.0;

    for employee in employees {
        let stats = positions
            .entry(employee.position.clone())
            .or_insert(PositionStats {
                count: 0,
                total_salary: 0.0,
                average_salary: 0.0,
            });
        stats.count += 1;
        stats.total_salary += employee.salary;
        total_salary += employee.salary;
    }
    for stats in positions.values_mut() {
        stats.average_salary = stats.total_salary / stats.count as f64;
    }

    let average_salary = if employees.is_empty() {
        0.0
    } else {
        total_salary / employees.len() as f64
    };

    DepartmentStats {
        total_employees: employees.len(),
        total_salary_budget: total_salary,
        average_salary,
        positions,
        generated_at,
    }
}
