//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. Input handlers
//! classify gestures locally and hand the resulting events to the drop
//! coordinator, which is the only place the registry is mutated in
//! response to pointer input.

mod app;
pub mod coordinator;
mod input;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::DockModel;

#[cfg(debug_assertions)]
use crate::tracing::RegistrySnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use input::{update_floating, update_strip};

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update<C>(model: &mut DockModel<C>, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner<C>(model: &mut DockModel<C>, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Strip(m) => input::update_strip(model, m),
        Msg::Floating(m) => input::update_floating(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after registry state, logs diffs and checks the
/// registry invariants after every message.
#[cfg(debug_assertions)]
fn update_traced<C>(model: &mut DockModel<C>, msg: Msg) -> Option<Cmd> {
    use crate::messages::StripMsg;

    // Pointer motion is far too chatty to log
    let is_noisy = matches!(&msg, Msg::Strip(StripMsg::Moved { .. }));

    let msg_name = format!("{:?}", msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = RegistrySnapshot::from_model(model);
    let result = update_inner(model, msg);
    let after = RegistrySnapshot::from_model(model);

    if let Some(diff) = before.diff(&after) {
        debug!(target: "registry", %diff, "state changed");
    }

    if let Err(violation) = model.registry.check_invariants() {
        panic!("registry invariant broken after {msg_name}: {violation}");
    }

    result
}
