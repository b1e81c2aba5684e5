//! Demo collaborator: owns panel contents and answers container events

use tabdock::commands::{Cmd, ContainerEvent};
use tabdock::model::DockModel;

/// Content hosted by a demo panel: a flat body color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelContent {
    pub color: u32,
}

impl PanelContent {
    /// Stable color derived from the panel name (FNV-1a)
    pub fn for_name(name: &str) -> Self {
        let hash = name
            .bytes()
            .fold(0x811C9DC5u32, |h, b| (h ^ b as u32).wrapping_mul(0x01000193));
        // keep every channel in the darker half so tabs stay readable
        Self {
            color: 0xFF000000 | (hash & 0x007F7F7F),
        }
    }
}

/// React to a container event the way an embedding application would
///
/// Close requests are honored by removing the panel for good. Everything
/// else is only logged.
pub fn handle_event(model: &mut DockModel<PanelContent>, event: ContainerEvent) -> Option<Cmd> {
    match event {
        ContainerEvent::TabCloseRequested { index, name } => {
            match model.remove_panel(&name) {
                Ok((removed, cmd)) => {
                    tracing::info!(%name, index, color = removed.content.color, "panel closed");
                    cmd
                }
                Err(e) => {
                    tracing::warn!(%name, "close request for unknown panel: {e}");
                    None
                }
            }
        }
        ContainerEvent::TabActivated(index) => {
            tracing::info!(index, name = ?model.active_tab().map(|t| &t.name), "tab activated");
            None
        }
        ContainerEvent::ContextClick(index) => {
            tracing::info!(index, "context menu requested");
            None
        }
        ContainerEvent::PanelDetached(name) => {
            tracing::info!(%name, "panel detached");
            None
        }
        ContainerEvent::PanelReattached { name, index } => {
            tracing::info!(%name, index, "panel reattached");
            None
        }
    }
}
