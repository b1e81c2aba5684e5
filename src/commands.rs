//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update:
//! window management for floating panels, collaborator notifications, and
//! redraws.

/// Events the container reports to the collaborator that owns it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerEvent {
    /// The tab at `index` became the active tab
    TabActivated(usize),
    /// Right click on the tab at `index`
    ContextClick(usize),
    /// The close box of a tab was pressed; the collaborator decides
    TabCloseRequested { index: usize, name: String },
    /// A panel was torn off into its own window
    PanelDetached(String),
    /// A floating panel came back into the strip at `index`
    PanelReattached { name: String, index: usize },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the container and its floating windows
    Redraw,
    /// Create the top-level window for the named floating panel
    OpenFloatingWindow { name: String },
    /// Destroy the top-level window of the named floating panel
    CloseFloatingWindow { name: String },
    /// Deliver an event to the collaborator
    Notify(ContainerEvent),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Request application exit
    Quit,
}

impl Cmd {
    /// Combine commands, flattening `None`s
    pub fn batch(cmds: impl IntoIterator<Item = Cmd>) -> Option<Cmd> {
        let mut cmds: Vec<Cmd> = cmds
            .into_iter()
            .filter(|c| !matches!(c, Cmd::None))
            .collect();
        match cmds.len() {
            0 => None,
            1 => cmds.pop(),
            _ => Some(Cmd::Batch(cmds)),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None | Cmd::Notify(_) | Cmd::Quit => false,
            Cmd::Redraw | Cmd::OpenFloatingWindow { .. } | Cmd::CloseFloatingWindow { .. } => {
                true
            }
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Flatten nested batches into execution order
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }

    /// Collaborator events carried by this command, in order
    pub fn events(&self) -> Vec<&ContainerEvent> {
        match self {
            Cmd::Notify(event) => vec![event],
            Cmd::Batch(cmds) => cmds.iter().flat_map(|c| c.events()).collect(),
            _ => Vec::new(),
        }
    }
}
