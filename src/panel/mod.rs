//! Panel bookkeeping for a detachable container
//!
//! ## Architecture
//!
//! - `Tab`: an attached panel at a contiguous strip index
//! - `FloatingPanel`: a detached panel living in its own top-level window
//! - `TabRegistry`: ordered tabs plus the detached map, the single source of truth
//! - `ReattachPolicy`: origin-index and protection settings applied on reattach
//! - `Icon`: decoded RGBA icon with pixel-level equality
//!
//! ## Integration
//!
//! The registry is only mutated by the drop coordinator in
//! `update/coordinator.rs` and by the collaborator API on `DockModel`.
//! The tab strip and floating windows read from it but never write.

mod icon;
mod registry;

pub use icon::Icon;
pub use registry::{FloatingPanel, ReattachPolicy, RemovedPanel, Tab, TabRegistry};
