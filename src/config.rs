//! Cascade configuration persistence
//!
//! Stores construction-time settings in `~/.config/carddeck/config.yaml`.
//! Every field has a default, so a partial file is valid.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{PanelError, Result};
use crate::panel::Side;
use crate::transition::{AnimationBackend, DEFAULT_SLIDE_DURATION_MS};

/// Diagnostics verbosity, passed explicitly at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Directive for an `EnvFilter`
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Whether per-step cascade tracing should be emitted
    pub fn is_verbose(&self) -> bool {
        *self == LogLevel::Trace
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!("unknown log level: {}", other)),
        }
    }
}

/// Settings fixed for the lifetime of a chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CascadeConfig {
    /// Screen edge the chain opens from
    #[serde(default)]
    pub side: Side,

    /// Strip each ancestor keeps visible per layer depth
    #[serde(default = "default_collapsed_width")]
    pub collapsed_width: i32,

    /// Open/close transition length
    #[serde(default = "default_slide_duration_ms")]
    pub slide_duration_ms: u32,

    /// Width of the drag activation zone along the opening edge
    #[serde(default = "default_touch_activation_width")]
    pub touch_activation_width: i32,

    /// Top padding propagated to child panels (status bar height)
    #[serde(default)]
    pub top_inset: i32,

    #[serde(default)]
    pub animation: AnimationBackend,

    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_collapsed_width() -> i32 {
    40
}

fn default_slide_duration_ms() -> u32 {
    DEFAULT_SLIDE_DURATION_MS
}

fn default_touch_activation_width() -> i32 {
    48
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self {
            side: Side::default(),
            collapsed_width: default_collapsed_width(),
            slide_duration_ms: default_slide_duration_ms(),
            touch_activation_width: default_touch_activation_width(),
            top_inset: 0,
            animation: AnimationBackend::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl CascadeConfig {
    /// Reject configurations no chain can be built from
    pub fn validate(&self) -> Result<()> {
        PanelError::check_non_negative("collapsed_width", self.collapsed_width)?;
        PanelError::check_non_negative("touch_activation_width", self.touch_activation_width)?;
        PanelError::check_non_negative("top_inset", self.top_inset)?;
        if self.slide_duration_ms == 0 {
            return Err(PanelError::InvalidDuration(self.slide_duration_ms));
        }
        Ok(())
    }

    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {:#}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load and validate a specific config file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the default location
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = crate::config_paths::ensure_config_file()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
