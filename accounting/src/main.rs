//! Accounting CLI.
//!
//! Runs the payroll program, its self-check and the introductory logger
//! exercises. Every instrumented call appends a record to a `.log` file under
//! the configured log directory.

use std::path::{Path, PathBuf};

use accounting::config::{
    AccountingConfig, DEFAULT_CONFIG_PATH, load_config, render_config, write_config,
};
use accounting::exercises::{run_task1, run_task2};
use accounting::ledger::Ledger;
use accounting::program::{run_demo, run_program, run_self_check, show_program_logs};
use accounting::{exit_codes, logging};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "accounting",
    version,
    about = "Toy payroll instrumented with call logging, timing and argument validation"
)]
struct Cli {
    /// Path to the TOML config. Defaults apply when the file is missing.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the payroll program, then print its log files.
    Run,
    /// Print the main and default log files.
    Logs,
    /// Exercise 1: logger with a fixed `main.log` sink.
    Task1,
    /// Exercise 2: logger writing to `log_1.log` .. `log_3.log`.
    Task2,
    /// Clean the log files and exercise every payroll operation, errors included.
    SelfCheck,
    /// Run every exercise and flow in order, then list the log files.
    Demo,
    /// Print the effective configuration.
    Config {
        /// Also write it to the config path.
        #[arg(long)]
        write: bool,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::FAILED);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    debug!(config = %cli.config.display(), log_dir = %config.log_dir.display(), "config loaded");

    let ledger = Ledger::new(config);
    match cli.command {
        Command::Run => run_program(&ledger),
        Command::Logs => show_program_logs(&ledger),
        Command::Task1 => run_task1(&ledger.config().log_dir),
        Command::Task2 => run_task2(&ledger.config().log_dir),
        Command::SelfCheck => run_self_check(&ledger),
        Command::Demo => run_demo(&ledger),
        Command::Config { write } => cmd_config(&cli.config, write, ledger.config()),
    }
}

fn cmd_config(path: &Path, write: bool, config: &AccountingConfig) -> Result<()> {
    print!("{}", render_config(config)?);
    if write {
        write_config(path, config).with_context(|| format!("write {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_run_with_default_config() {
        let cli = Cli::parse_from(["accounting", "run"]);
        assert!(matches!(cli.command, Command::Run));
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn parse_config_flag_after_subcommand() {
        let cli = Cli::parse_from(["accounting", "self-check", "--config", "alt.toml"]);
        assert!(matches!(cli.command, Command::SelfCheck));
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
    }

    #[test]
    fn parse_config_write() {
        let cli = Cli::parse_from(["accounting", "config", "--write"]);
        assert!(matches!(cli.command, Command::Config { write: true }));
    }

    #[test]
    fn parse_exercises() {
        assert!(matches!(
            Cli::parse_from(["accounting", "task1"]).command,
            Command::Task1
        ));
        assert!(matches!(
            Cli::parse_from(["accounting", "task2"]).command,
            Command::Task2
        ));
    }
}
