use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub fn smartbudget_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".smartbudget"))
}

pub fn ensure_smartbudget_home() -> Result<PathBuf> {
    let dir = smartbudget_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// Log file used while the full-screen dashboard owns the terminal
pub fn dashboard_log_path() -> Result<PathBuf> {
    Ok(ensure_smartbudget_home()?.join("dashboard.log"))
}
