//! Drop coordinator
//!
//! Turns strip and floating-window events into registry mutations. Every
//! index in an incoming event is re-checked against the registry before it
//! is used; a stale one is a protocol violation, not a recoverable error.

use crate::commands::{Cmd, ContainerEvent};
use crate::error::{report_violation, DockError};
use crate::floating::{FloatingEvent, FloatingWindow};
use crate::model::DockModel;
use crate::strip::StripEvent;
use crate::view::geometry::Point;
use crate::view::hit_test::HitTarget;

/// Apply an event reported by the tab strip
pub fn handle_strip_event<C>(model: &mut DockModel<C>, event: StripEvent) -> Option<Cmd> {
    match event {
        StripEvent::Activate(index) => activate(model, index),
        StripEvent::CloseRequested(index) => {
            let Some(tab) = model.registry.tab(index) else {
                report_violation("close request", &stale_index(index, model.registry.len()));
                return None;
            };
            Some(Cmd::Notify(ContainerEvent::TabCloseRequested {
                index,
                name: tab.name.clone(),
            }))
        }
        StripEvent::ContextClick(name) => {
            let index = current_index(model, &name)?;
            Some(Cmd::Notify(ContainerEvent::ContextClick(index)))
        }
        StripEvent::Move { name, to } => match current_index(model, &name) {
            Some(from) => apply_move(model, from, to),
            None => Some(Cmd::Redraw),
        },
        StripEvent::Detach { name, screen_pos } => {
            let index = current_index(model, &name)?;
            apply_detach(model, index, screen_pos)
        }
    }
}

/// Where the gesture's tab sits now
///
/// The collaborator may remove a tab while a button is held on it; the
/// gesture then ends without effect.
fn current_index<C>(model: &DockModel<C>, name: &str) -> Option<usize> {
    let index = model.registry.index_of(name);
    if index.is_none() {
        tracing::debug!(name, "gesture tab no longer attached");
    }
    index
}

/// Apply an event reported by a floating window
pub fn handle_floating_event<C>(model: &mut DockModel<C>, event: FloatingEvent) -> Option<Cmd> {
    match event {
        FloatingEvent::Dropped { name, cursor } => apply_window_dropped(model, &name, cursor),
        FloatingEvent::CloseRequested { name } => reattach(model, &name, None),
    }
}

fn activate<C>(model: &mut DockModel<C>, index: usize) -> Option<Cmd> {
    if index >= model.registry.len() {
        report_violation("activate", &stale_index(index, model.registry.len()));
        return None;
    }
    if model.active_index == Some(index) {
        return None;
    }
    model.active_index = Some(index);
    Cmd::batch([
        Cmd::Notify(ContainerEvent::TabActivated(index)),
        Cmd::Redraw,
    ])
}

/// Reorder a tab within the strip
pub fn apply_move<C>(model: &mut DockModel<C>, from: usize, to: usize) -> Option<Cmd> {
    if from == to {
        return None;
    }
    match model.registry.move_tab(from, to) {
        Ok(to) if to == from => None,
        Ok(to) => {
            model.tab_moved(from, to);
            Some(Cmd::Redraw)
        }
        Err(e) => {
            report_violation("move", &e);
            None
        }
    }
}

/// Tear a tab off into a floating window at `screen_pos`
pub fn apply_detach<C>(model: &mut DockModel<C>, index: usize, screen_pos: Point) -> Option<Cmd> {
    let size = model.layout.content_rect().size();
    let (name, icon) = match model.registry.detach(index, screen_pos) {
        Ok(panel) => (panel.name.clone(), panel.icon.clone()),
        Err(e) => {
            report_violation("detach", &e);
            return None;
        }
    };

    tracing::debug!(%name, index, x = screen_pos.x, y = screen_pos.y, "panel detached");
    model.floating.insert(
        name.clone(),
        FloatingWindow::new(name.clone(), icon, screen_pos, size),
    );

    let activated = model.tab_removed(index);
    let mut cmds = vec![
        Cmd::OpenFloatingWindow { name: name.clone() },
        Cmd::Notify(ContainerEvent::PanelDetached(name)),
    ];
    cmds.extend(activated.map(Cmd::Notify));
    cmds.push(Cmd::Redraw);
    Cmd::batch(cmds)
}

/// Resolve a floating window released with the cursor at `cursor`
///
/// Over a tab: reattach at that tab's index. Elsewhere inside the container,
/// on the strip band (or anywhere if no tab is attached): append. Anywhere
/// else the panel stays floating.
pub fn apply_window_dropped<C>(model: &mut DockModel<C>, name: &str, cursor: Point) -> Option<Cmd> {
    if !model.registry.is_detached(name) {
        report_violation("window drop", &DockError::NotFound(name.to_string()));
        return None;
    }

    let local = cursor.relative_to(model.screen_origin);
    let target = model.hit_test(local);

    if let Some(index) = target.tab_index() {
        return reattach(model, name, Some(index));
    }

    let inside = target != HitTarget::Outside;
    if inside && (target.in_strip() || model.registry.is_empty()) {
        return reattach(model, name, None);
    }

    tracing::debug!(name, ?target, "drop outside strip, panel stays floating");
    None
}

/// Move a floating panel back into the strip and close its window
pub fn reattach<C>(model: &mut DockModel<C>, name: &str, insert_at: Option<usize>) -> Option<Cmd> {
    let index = match model.registry.reattach(name, insert_at) {
        Ok(index) => index,
        Err(e) => {
            report_violation("reattach", &e);
            return None;
        }
    };

    model.floating.remove(name);
    model.active_index = Some(index);
    tracing::debug!(name, index, "panel reattached");

    Cmd::batch([
        Cmd::CloseFloatingWindow {
            name: name.to_string(),
        },
        Cmd::Notify(ContainerEvent::PanelReattached {
            name: name.to_string(),
            index,
        }),
        Cmd::Notify(ContainerEvent::TabActivated(index)),
        Cmd::Redraw,
    ])
}

/// Reattach every floating panel (application close)
pub fn close_all_floating<C>(model: &mut DockModel<C>) -> Option<Cmd> {
    let names = model.registry.detached_names();
    if !names.is_empty() {
        tracing::info!(count = names.len(), "closing floating windows");
    }
    Cmd::batch(
        names
            .iter()
            .filter_map(|name| reattach(model, name, None))
            .collect::<Vec<_>>(),
    )
}

fn stale_index(index: usize, count: usize) -> DockError {
    DockError::ProtocolViolation(format!("tab index {index} out of range (count {count})"))
}
