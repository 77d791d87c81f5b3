//! Console helpers for inspecting and cleaning sink files.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

const RULE_WIDTH: usize = 60;

/// Print each file's contents, or a note when it is empty or missing.
pub fn print_log_files(paths: &[PathBuf]) {
    for path in paths {
        match fs::read_to_string(path) {
            Ok(contents) => {
                println!("\nContents of {}:", path.display());
                println!("{}", "-".repeat(RULE_WIDTH));
                if contents.is_empty() {
                    println!("(empty)");
                } else {
                    print!("{contents}");
                }
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                println!("Log file {} not found", path.display());
            }
            Err(err) => {
                println!("Log file {} unreadable: {}", path.display(), err);
            }
        }
    }
}

/// Remove sink files before a fresh run. Missing files are fine.
pub fn remove_log_files(paths: &[PathBuf]) -> Result<()> {
    for path in paths {
        match fs::remove_file(path) {
            Ok(()) => debug!(path = %path.display(), "removed log file"),
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => {
                return Err(err).with_context(|| format!("remove {}", path.display()));
            }
        }
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFileInfo {
    pub name: String,
    pub size_bytes: u64,
}

/// `.log` files directly inside `dir`, sorted by name.
pub fn list_log_files(dir: &Path) -> Result<Vec<LogFileInfo>> {
    let mut found = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read {}", dir.display()))? {
        let entry = entry.context("read entry")?;
        let path = entry.path();
        if path.extension().is_none_or(|ext| ext != "log") {
            continue;
        }
        let metadata = entry
            .metadata()
            .with_context(|| format!("stat {}", path.display()))?;
        if !metadata.is_file() {
            continue;
        }
        found.push(LogFileInfo {
            name: entry.file_name().to_string_lossy().into_owned(),
            size_bytes: metadata.len(),
        });
    }
    found.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(found)
}
