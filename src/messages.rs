//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. Positions are in
//! container window-local pixels unless named `screen_pos`/`cursor`.

use winit::event::MouseButton;

use crate::floating::PlatformEvent;
use crate::view::geometry::Point;

/// Pointer input on the container's window
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StripMsg {
    /// A button went down
    Pressed {
        button: MouseButton,
        pos: Point,
        screen_pos: Point,
    },
    /// The pointer moved (only matters while a button is held)
    Moved { pos: Point },
    /// A button went up; `pos` may lie outside the window while dragging
    Released {
        button: MouseButton,
        pos: Point,
        screen_pos: Point,
    },
    /// The platform dropped the gesture (focus or capture lost)
    Aborted { screen_pos: Point },
}

/// Input on a floating window, addressed by panel name
#[derive(Debug, Clone, PartialEq)]
pub enum FloatingMsg {
    /// A platform event, with the global cursor sampled at delivery
    Platform {
        name: String,
        event: PlatformEvent,
        cursor: Point,
    },
    /// The user grabbed the window and the platform is now moving it
    DragStarted { name: String },
}

/// Application-level messages
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppMsg {
    /// Container window client area resized (physical pixels)
    Resize(u32, u32),
    /// Container window client area moved on screen
    Moved(Point),
    /// The application is closing; floating windows must go first
    Shutdown,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Strip(StripMsg),
    Floating(FloatingMsg),
    App(AppMsg),
}
