//! Command-line argument parsing for the replay tool
//!
//! Supports:
//! - Replaying a gesture script and printing every offset change
//! - Printing the effective configuration

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{CascadeConfig, LogLevel};

/// Cascading slide-out panel engine
#[derive(Parser, Debug)]
#[command(
    name = "carddeck",
    version,
    about = "Replay gesture scripts against a cascading panel chain"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Config file to use instead of ~/.config/carddeck/config.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the configured log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Replay a gesture script and print every render hook call
    Replay {
        /// YAML gesture script
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,

        /// Restore and persist the "was ever opened" flag
        #[arg(long)]
        persist: bool,
    },
    /// Print the effective configuration as YAML
    Config {
        /// Write the effective configuration to the default location
        #[arg(long)]
        save: bool,
    },
}

impl CliArgs {
    /// Resolve the base configuration from `--config` or the user config
    pub fn resolve_config(&self) -> anyhow::Result<CascadeConfig> {
        let mut config = match &self.config {
            Some(path) => CascadeConfig::load_from(path)?,
            None => CascadeConfig::load(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    /// Apply command-line overrides on top of a loaded config
    pub fn apply_overrides(&self, config: &mut CascadeConfig) {
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_replay_command() {
        let args = parse(&["carddeck", "replay", "open.yaml"]);
        assert_eq!(
            args.command,
            Command::Replay {
                script: PathBuf::from("open.yaml"),
                persist: false
            }
        );
        assert!(args.log_level.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = parse(&[
            "carddeck",
            "replay",
            "drag.yaml",
            "--persist",
            "--log-level",
            "trace",
            "--config",
            "alt.yaml",
        ]);
        assert_eq!(args.log_level, Some(LogLevel::Trace));
        assert_eq!(args.config, Some(PathBuf::from("alt.yaml")));
        assert!(matches!(args.command, Command::Replay { persist: true, .. }));
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        assert!(CliArgs::try_parse_from(["carddeck", "config", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn test_missing_subcommand_rejected() {
        assert!(CliArgs::try_parse_from(["carddeck"]).is_err());
    }

    #[test]
    fn test_overrides_apply_log_level() {
        let args = parse(&["carddeck", "config", "--log-level", "debug"]);
        let mut config = CascadeConfig::default();
        args.apply_overrides(&mut config);
        assert_eq!(config.log_level, LogLevel::Debug);
    }
}
