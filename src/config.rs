//! Container configuration persistence
//!
//! Stores user preferences in `~/.config/tabdock/config.yaml`

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::panel::ReattachPolicy;
use crate::strip::StripOptions;

/// Configuration for a detachable panel container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DockConfig {
    /// Tabs can be dragged to reorder or detach
    #[serde(default = "default_true")]
    pub draggable: bool,

    /// Double-clicking a tab detaches it
    #[serde(default = "default_true")]
    pub detach_on_double_click: bool,

    /// Reattach closed/dropped panels at their original index
    #[serde(default)]
    pub preserve_origin_index: bool,

    /// Every tab in the container is non-closable
    #[serde(default)]
    pub protect_all: bool,

    /// Panel names that are always non-closable
    #[serde(default)]
    pub protected_names: Vec<String>,

    /// Pointer travel (Manhattan, pixels) before a press becomes a drag
    #[serde(default = "default_drag_threshold")]
    pub drag_threshold: f32,

    /// Maximum interval between the presses of a double-click
    #[serde(default = "default_double_click_ms")]
    pub double_click_ms: u64,

    /// Preferred tab width in pixels
    #[serde(default = "default_tab_width")]
    pub tab_width: f32,

    /// Height of the tab strip in pixels
    #[serde(default = "default_strip_height")]
    pub strip_height: f32,

    /// Window icon; tab icons identical to it are dropped on reattach
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_icon: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

fn default_drag_threshold() -> f32 {
    10.0
}

fn default_double_click_ms() -> u64 {
    400
}

fn default_tab_width() -> f32 {
    120.0
}

fn default_strip_height() -> f32 {
    28.0
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            draggable: true,
            detach_on_double_click: true,
            preserve_origin_index: false,
            protect_all: false,
            protected_names: Vec::new(),
            drag_threshold: default_drag_threshold(),
            double_click_ms: default_double_click_ms(),
            tab_width: default_tab_width(),
            strip_height: default_strip_height(),
            window_icon: None,
        }
    }
}

impl DockConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to `path`, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Strip gesture options derived from this config
    pub fn strip_options(&self) -> StripOptions {
        StripOptions {
            draggable: self.draggable,
            detach_on_double_click: self.detach_on_double_click,
            drag_threshold: self.drag_threshold.max(0.0),
            double_click_time: Duration::from_millis(self.double_click_ms),
        }
    }

    /// Reattach policy derived from this config (without the default icon)
    pub fn reattach_policy(&self) -> ReattachPolicy {
        ReattachPolicy {
            preserve_origin_index: self.preserve_origin_index,
            protect_all: self.protect_all,
            protected_names: self.protected_names.iter().cloned().collect(),
            default_icon: None,
        }
    }
}
