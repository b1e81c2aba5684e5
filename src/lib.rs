//! tabdock - detachable tab panel containers
//!
//! A container hosts named panels as tabs. Tabs can be reordered by
//! dragging, torn off into floating windows, and dropped back onto the
//! strip. State changes follow the Elm Architecture: pointer and platform
//! input arrive as `Msg`s, `update()` mutates a `DockModel` and returns the
//! `Cmd`s the host must carry out.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod floating;
pub mod messages;
pub mod model;
pub mod panel;
pub mod strip;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::{Cmd, ContainerEvent};
pub use config::DockConfig;
pub use error::DockError;
pub use messages::Msg;
pub use model::DockModel;
pub use panel::{Icon, TabRegistry};
pub use update::update;
