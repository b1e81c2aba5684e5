//! Where tabdock keeps its files
//!
//! - Unix/macOS: `$XDG_CONFIG_HOME/tabdock/`, falling back to `~/.config/tabdock/`
//! - Windows: `%APPDATA%\tabdock\`
//!
//! `config.yaml` sits at the top; daily log files go in `logs/`.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "tabdock";

/// Prefix of the daily-rotated log files (`tabdock.log.YYYY-MM-DD`)
pub const LOG_FILE_PREFIX: &str = "tabdock.log";

/// Base config directory, if the platform has one
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    std::fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create directory {}: {}", logs.display(), e))?;
    Ok(logs)
}
