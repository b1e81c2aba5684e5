//! Tracing setup and registry snapshots for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=tabdock::strip=debug` - gesture classification only
//! - `RUST_LOG=tabdock::update=debug` - coordinator decisions and state diffs
//!
//! # Log Files
//!
//! Logs are written to `~/.config/tabdock/logs/tabdock.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::DockModel;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes to
/// `~/.config/tabdock/logs/tabdock.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of container state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrySnapshot {
    pub attached: Vec<String>,
    pub detached: Vec<String>,
    pub active: Option<usize>,
}

impl RegistrySnapshot {
    pub fn from_model<C>(model: &DockModel<C>) -> Self {
        Self {
            attached: model.registry.tab_names(),
            detached: model.registry.detached_names(),
            active: model.active_index,
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &RegistrySnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.attached != other.attached {
            changes.push(format!(
                "attached: [{}] → [{}]",
                self.attached.join(", "),
                other.attached.join(", ")
            ));
        }
        if self.detached != other.detached {
            changes.push(format!(
                "detached: [{}] → [{}]",
                self.detached.join(", "),
                other.detached.join(", ")
            ));
        }
        if self.active != other.active {
            changes.push(format!("active: {:?} → {:?}", self.active, other.active));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
