//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use winit::event::MouseButton;

use tabdock::config::DockConfig;
use tabdock::messages::{FloatingMsg, Msg, StripMsg};
use tabdock::floating::PlatformEvent;
use tabdock::model::DockModel;
use tabdock::update::update;
use tabdock::view::geometry::{Point, Size};
use tabdock::Cmd;

/// Screen position of the test container's client area
pub const ORIGIN: Point = Point { x: 1000.0, y: 500.0 };

/// Create a 600x400 container at `ORIGIN` holding closable panels `names`
///
/// Each panel's content is its insertion order.
pub fn test_model(names: &[&str]) -> DockModel<usize> {
    test_model_with(DockConfig::default(), names)
}

pub fn test_model_with(config: DockConfig, names: &[&str]) -> DockModel<usize> {
    let mut model = DockModel::new(config, Size::new(600.0, 400.0));
    model.screen_origin = ORIGIN;
    for (i, name) in names.iter().enumerate() {
        model.insert_panel(*name, None, i, true, None).unwrap();
    }
    model
}

/// Window-local centre of tab `index` (default 120px tabs, 28px strip)
pub fn tab_center(index: usize) -> Point {
    Point::new(index as f32 * 120.0 + 40.0, 14.0)
}

fn screen(pos: Point) -> Point {
    ORIGIN.offset(pos.x, pos.y)
}

pub fn press(model: &mut DockModel<usize>, button: MouseButton, pos: Point) -> Option<Cmd> {
    update(
        model,
        Msg::Strip(StripMsg::Pressed {
            button,
            pos,
            screen_pos: screen(pos),
        }),
    )
}

pub fn move_to(model: &mut DockModel<usize>, pos: Point) -> Option<Cmd> {
    update(model, Msg::Strip(StripMsg::Moved { pos }))
}

pub fn release(model: &mut DockModel<usize>, button: MouseButton, pos: Point) -> Option<Cmd> {
    update(
        model,
        Msg::Strip(StripMsg::Released {
            button,
            pos,
            screen_pos: screen(pos),
        }),
    )
}

/// Press on `from`, drag through `to` and release there, returning the
/// release's commands
pub fn drag(model: &mut DockModel<usize>, from: Point, to: Point) -> Option<Cmd> {
    press(model, MouseButton::Left, from);
    move_to(model, to);
    release(model, MouseButton::Left, to)
}

/// Send a platform event to the floating window of `name`
pub fn platform(
    model: &mut DockModel<usize>,
    name: &str,
    event: PlatformEvent,
    cursor: Point,
) -> Option<Cmd> {
    update(
        model,
        Msg::Floating(FloatingMsg::Platform {
            name: name.to_string(),
            event,
            cursor,
        }),
    )
}

/// The user grabs the floating window of `name` to move it
pub fn begin_window_drag(model: &mut DockModel<usize>, name: &str) -> Option<Cmd> {
    update(
        model,
        Msg::Floating(FloatingMsg::DragStarted {
            name: name.to_string(),
        }),
    )
}

/// Grab the floating window of `name`, move it and let go with the cursor
/// at the window-local point `local` of the container
pub fn drop_window_at(model: &mut DockModel<usize>, name: &str, local: Point) -> Option<Cmd> {
    let cursor = screen(local);
    begin_window_drag(model, name);
    platform(model, name, PlatformEvent::WindowMoved(cursor), cursor);
    platform(model, name, PlatformEvent::NonClientInteraction, cursor)
}
