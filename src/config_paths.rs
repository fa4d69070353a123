//! Where carddeck keeps its files
//!
//! One base directory holds the config, the saved state and the logs:
//! `$XDG_CONFIG_HOME/carddeck` (or `~/.config/carddeck`) on Unix and
//! `%APPDATA%\carddeck` on Windows.

use std::{env, fs, path::PathBuf};

use anyhow::Context;

const APP_DIR: &str = "carddeck";
const CONFIG_FILE: &str = "config.yaml";
const STATE_FILE: &str = "state.json";
const LOGS_DIR: &str = "logs";

pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    let base = env::var_os("APPDATA").map(PathBuf::from);

    #[cfg(not(target_os = "windows"))]
    let base = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")));

    base.map(|dir| dir.join(APP_DIR))
}

/// Cascade geometry and animation settings
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// The persisted `was_ever_opened` flag
pub fn state_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(STATE_FILE))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOGS_DIR))
}

fn ensure(dir: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    let dir = dir.context("No config directory available")?;
    fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    Ok(dir)
}

/// Create the base directory if needed and return it
pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
    ensure(config_dir())
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> anyhow::Result<PathBuf> {
    ensure(logs_dir())
}

/// Config file path with its directory created
pub fn ensure_config_file() -> anyhow::Result<PathBuf> {
    Ok(ensure_config_dir()?.join(CONFIG_FILE))
}
