//! Runtime module - winit/platform integration
//!
//! This module contains the platform-specific code of the demo host:
//! - `app` - ApplicationHandler and window management
//! - `host` - the collaborator that owns panel contents
//! - `mouse` - pointer and window event to message mapping

pub mod app;
pub mod host;
pub mod mouse;

pub use app::App;
