//! Toy payroll ("accounting") instrumented with call adapters.
//!
//! The business logic is deliberately trivial. Its purpose is to exercise
//! the adapters from the `instrument` crate:
//!
//! - **[`people`]** and **[`salary`]**: pure leaves over a fixed, in-memory
//!   employee list. No I/O.
//! - **[`ledger`]**: the same operations wrapped in logging, timing and
//!   argument validation, writing call records to the configured sinks.
//!
//! [`exercises`] and [`program`] drive those operations for the CLI commands.

pub mod config;
pub mod exercises;
pub mod exit_codes;
pub mod ledger;
pub mod log_view;
pub mod logging;
pub mod people;
pub mod program;
pub mod salary;
