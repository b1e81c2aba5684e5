//! Pointer and platform input handlers
//!
//! Strip input is hit-tested against the current layout here, so the strip
//! itself only ever sees `HitTarget`s.

use std::time::Instant;

use crate::commands::Cmd;
use crate::messages::{FloatingMsg, StripMsg};
use crate::model::DockModel;
use crate::view::hit_test::{hit_test_container, HitTarget};

use super::coordinator;

/// Handle pointer input on the container window
pub fn update_strip<C>(model: &mut DockModel<C>, msg: StripMsg) -> Option<Cmd> {
    match msg {
        StripMsg::Pressed {
            button,
            pos,
            screen_pos,
        } => {
            let target = model.hit_test(pos);
            let name = tab_name(model, target);
            let event = model.strip.pointer_pressed(
                button,
                target,
                name.as_deref(),
                pos,
                screen_pos,
                Instant::now(),
            )?;
            coordinator::handle_strip_event(model, event)
        }

        StripMsg::Moved { pos } => model.strip.pointer_moved(pos).then_some(Cmd::Redraw),

        StripMsg::Released {
            button,
            pos,
            screen_pos,
        } => {
            let was_dragging = model.strip.dragging().is_some();
            let target = model.hit_test(pos);
            let name = tab_name(model, target);
            let count = model.registry.len();
            let cmd = model
                .strip
                .pointer_released(button, target, name.as_deref(), count, screen_pos)
                .and_then(|event| coordinator::handle_strip_event(model, event));
            // the drag indicator still needs clearing
            cmd.or_else(|| was_dragging.then_some(Cmd::Redraw))
        }

        StripMsg::Aborted { screen_pos } => {
            let layout = model.layout;
            let tabs = model.registry.tabs();
            let count = tabs.len();
            let event = model
                .strip
                .abort(|pt| hit_test_container(&layout, tabs, pt), count, screen_pos)?;
            coordinator::handle_strip_event(model, event)
        }
    }
}

fn tab_name<C>(model: &DockModel<C>, target: HitTarget) -> Option<String> {
    let index = target.tab_index()?;
    model.registry.tab(index).map(|tab| tab.name.clone())
}

/// Handle platform events delivered to a floating window
pub fn update_floating<C>(model: &mut DockModel<C>, msg: FloatingMsg) -> Option<Cmd> {
    match msg {
        FloatingMsg::Platform {
            name,
            event,
            cursor,
        } => {
            let Some(window) = model.floating.get_mut(&name) else {
                tracing::debug!(%name, ?event, "event for a window that is already gone");
                return None;
            };

            let floating_event = window.handle_platform_event(event, cursor);
            let position = window.position;
            model.registry.set_floating_position(&name, position);

            coordinator::handle_floating_event(model, floating_event?)
        }

        FloatingMsg::DragStarted { name } => {
            match model.floating.get_mut(&name) {
                Some(window) => window.begin_drag(),
                None => tracing::debug!(%name, "drag start for a window that is already gone"),
            }
            None
        }
    }
}
