//! Accounting configuration stored in `accounting.toml`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use instrument::{DEFAULT_SINK_NAME, LogSink};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_CONFIG_PATH: &str = "accounting.toml";

/// Accounting configuration (TOML).
///
/// Missing fields fall back to the defaults below, so an empty or absent file
/// is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AccountingConfig {
    /// Directory every sink file name is resolved against.
    pub log_dir: PathBuf,

    /// Sink for payroll and employee operations.
    pub default_sink: String,

    /// Sink for the main program run.
    pub main_sink: String,

    /// Sink for the self-check scenario.
    pub self_check_sink: String,

    /// Calls slower than this are reported as slow.
    pub slow_call_threshold_ms: u64,

    pub latency: LatencyConfig,
}

/// Simulated latency of the fake data sources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LatencyConfig {
    pub employees_ms: u64,
    pub payroll_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            employees_ms: 50,
            payroll_ms: 100,
        }
    }
}

impl Default for AccountingConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("."),
            default_sink: DEFAULT_SINK_NAME.to_string(),
            main_sink: "main_operations.log".to_string(),
            self_check_sink: "test.log".to_string(),
            slow_call_threshold_ms: 1000,
            latency: LatencyConfig::default(),
        }
    }
}

impl AccountingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.slow_call_threshold_ms == 0 {
            return Err(anyhow!("slow_call_threshold_ms must be > 0"));
        }
        for (field, name) in [
            ("default_sink", &self.default_sink),
            ("main_sink", &self.main_sink),
            ("self_check_sink", &self.self_check_sink),
        ] {
            if name.trim().is_empty() {
                return Err(anyhow!("{field} must be a non-empty file name"));
            }
        }
        Ok(())
    }

    /// Resolve a sink file name against `log_dir`.
    pub fn sink(&self, name: &str) -> LogSink {
        LogSink::new(self.log_dir.join(name))
    }

    pub fn slow_call_threshold(&self) -> Duration {
        Duration::from_millis(self.slow_call_threshold_ms)
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `AccountingConfig::default()`.
pub fn load_config(path: &Path) -> Result<AccountingConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = AccountingConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: AccountingConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &AccountingConfig) -> Result<()> {
    cfg.validate()?;
    let buf = render_config(cfg)?;
    write_atomic(path, &buf)
}

/// Serialize config as pretty TOML with a trailing newline.
pub fn render_config(cfg: &AccountingConfig) -> Result<String> {
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    if !buf.ends_with('\n') {
        buf.push('\n');
    }
    Ok(buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, AccountingConfig::default());
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("accounting.toml");
        let cfg = AccountingConfig {
            slow_call_threshold_ms: 250,
            ..AccountingConfig::default()
        };
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("accounting.toml");
        fs::write(&path, "main_sink = \"run.log\"\n\n[latency]\nemployees_ms = 0\n")
            .expect("write");

        let cfg = load_config(&path).expect("load");

        assert_eq!(cfg.main_sink, "run.log");
        assert_eq!(cfg.latency.employees_ms, 0);
        assert_eq!(cfg.latency.payroll_ms, 100);
        assert_eq!(cfg.default_sink, DEFAULT_SINK_NAME);
    }

    #[test]
    fn rejects_zero_threshold_and_blank_sinks() {
        let cfg = AccountingConfig {
            slow_call_threshold_ms: 0,
            ..AccountingConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = AccountingConfig {
            default_sink: "  ".to_string(),
            ..AccountingConfig::default()
        };
        let err = cfg.validate().expect_err("blank sink");
        assert!(err.to_string().contains("default_sink"));
    }

    #[test]
    fn sinks_resolve_against_log_dir() {
        let cfg = AccountingConfig {
            log_dir: PathBuf::from("/var/tmp/logs"),
            ..AccountingConfig::default()
        };
        assert_eq!(
            cfg.sink(&cfg.main_sink).path(),
            Path::new("/var/tmp/logs/main_operations.log")
        );
    }
}
