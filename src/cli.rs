//! Command-line argument parsing for the demo host
//!
//! Supports:
//! - Naming the panels to start with
//! - An alternate config file
//! - Overriding the reattach policy from the command line

use clap::Parser;
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::config::DockConfig;

/// Panel names used when none are given
pub const DEFAULT_PANELS: [&str; 3] = ["Layers", "Properties", "History"];

/// A detachable tab container
#[derive(Parser, Debug)]
#[command(name = "tabdock", version, about = "A detachable tab container")]
pub struct CliArgs {
    /// Panels to open as tabs, in order
    #[arg(value_name = "PANELS")]
    pub panels: Vec<String>,

    /// Read configuration from this file instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Reattach panels at the index they were detached from
    #[arg(long)]
    pub preserve_origin: bool,

    /// Make a panel non-closable (repeatable)
    #[arg(long, value_name = "NAME")]
    pub protect: Vec<String>,

    /// Make every panel non-closable
    #[arg(long)]
    pub protect_all: bool,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Panels to open, in strip order
    pub panels: Vec<String>,
    /// Container configuration with command-line overrides applied
    pub dock: DockConfig,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let dock = match &self.config {
            Some(path) if !path.exists() => {
                return Err(format!("Config file not found: {}", path.display()));
            }
            Some(path) => DockConfig::load_from(path),
            None => DockConfig::load(),
        };
        self.into_config_with(dock)
    }

    /// Apply the command-line overrides on top of `dock`
    pub fn into_config_with(self, mut dock: DockConfig) -> Result<StartupConfig, String> {
        let panels = if self.panels.is_empty() {
            DEFAULT_PANELS.iter().map(|s| s.to_string()).collect()
        } else {
            self.panels
        };

        let mut seen = BTreeSet::new();
        if let Some(dup) = panels.iter().find(|name| !seen.insert(name.as_str())) {
            return Err(format!("Panel name given twice: {dup}"));
        }

        dock.preserve_origin_index |= self.preserve_origin;
        dock.protect_all |= self.protect_all;
        for name in self.protect {
            if !dock.protected_names.contains(&name) {
                dock.protected_names.push(name);
            }
        }

        Ok(StartupConfig { panels, dock })
    }
}
