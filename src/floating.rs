//! Floating windows for detached panels
//!
//! Dragging a whole top-level window by its frame does not produce pointer
//! events for the window's content, so the window cannot see its own drag
//! end. Instead it watches the platform event stream: a frame (non-client)
//! interaction arriving immediately after a window move means the user let
//! go of the frame. At that instant the cursor is sampled and reported as a
//! drop; the drop coordinator decides whether that drop reattaches.
//!
//! Only a drag the user started counts. Window creation and placement
//! produce the same move-then-activity pattern, so the detector stays
//! disarmed until the host reports a drag start with `begin_drag`.

use crate::panel::Icon;
use crate::view::geometry::{Point, Size};

/// Platform events a floating window cares about
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlatformEvent {
    /// The window's outer position changed (screen coordinates)
    WindowMoved(Point),
    /// Pointer activity on the window frame rather than its content
    NonClientInteraction,
    /// The native close affordance was used
    CloseRequested,
    /// Anything else the platform delivered; breaks a move sequence
    Other,
}

/// Events a floating window reports to the drop coordinator
#[derive(Debug, Clone, PartialEq)]
pub enum FloatingEvent {
    /// The window was dragged and released with the cursor at `cursor`
    Dropped { name: String, cursor: Point },
    /// The user closed the window; the panel goes back to the strip
    CloseRequested { name: String },
}

/// Detects the end of a whole-window drag from the platform event stream
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowDragDetector {
    armed: bool,
    after_move: bool,
}

impl WindowDragDetector {
    /// A user drag has begun; moves from here on can end in a drop
    pub fn arm(&mut self) {
        self.armed = true;
        self.after_move = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Feed one event; returns true when a drag-release is recognized
    pub fn observe(&mut self, event: &PlatformEvent) -> bool {
        match event {
            PlatformEvent::WindowMoved(_) => {
                self.after_move = self.armed;
                false
            }
            PlatformEvent::NonClientInteraction => {
                let released = std::mem::take(&mut self.after_move);
                if released {
                    self.armed = false;
                }
                released
            }
            PlatformEvent::CloseRequested => {
                *self = Self::default();
                false
            }
            PlatformEvent::Other => {
                self.after_move = false;
                false
            }
        }
    }
}

/// A standalone top-level window hosting one detached panel
#[derive(Debug, Clone)]
pub struct FloatingWindow {
    name: String,
    icon: Option<Icon>,
    /// Screen position of the window's top-left corner
    pub position: Point,
    /// Client size, matching the content bounds before detachment
    pub size: Size,
    detector: WindowDragDetector,
}

impl FloatingWindow {
    pub fn new(name: impl Into<String>, icon: Option<Icon>, position: Point, size: Size) -> Self {
        Self {
            name: name.into(),
            icon,
            position,
            size,
            detector: WindowDragDetector::default(),
        }
    }

    /// Name of the hosted panel, also the window title
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    /// The user grabbed the window to drag it
    pub fn begin_drag(&mut self) {
        tracing::debug!(name = %self.name, "window drag started");
        self.detector.arm();
    }

    pub fn is_dragging(&self) -> bool {
        self.detector.is_armed()
    }

    /// Feed a platform event; `cursor` is the global cursor position now
    pub fn handle_platform_event(
        &mut self,
        event: PlatformEvent,
        cursor: Point,
    ) -> Option<FloatingEvent> {
        if let PlatformEvent::WindowMoved(position) = event {
            self.position = position;
        }

        if event == PlatformEvent::CloseRequested {
            self.detector.observe(&event);
            return Some(FloatingEvent::CloseRequested {
                name: self.name.clone(),
            });
        }

        if self.detector.observe(&event) {
            tracing::debug!(name = %self.name, x = cursor.x, y = cursor.y, "floating window dropped");
            return Some(FloatingEvent::Dropped {
                name: self.name.clone(),
                cursor,
            });
        }

        None
    }
}
