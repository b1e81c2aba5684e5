//! Pointer event mapping for container and floating windows
//!
//! winit reports cursor positions relative to each window's client area.
//! The trackers here remember the last position and the window's screen
//! origin so every message carries both local and screen coordinates.

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, WindowEvent};

use tabdock::floating::PlatformEvent;
use tabdock::messages::StripMsg;
use tabdock::view::geometry::Point;

fn to_point<T: Into<f64>>(pos: PhysicalPosition<T>) -> Point {
    let (x, y): (f64, f64) = (pos.x.into(), pos.y.into());
    Point::new(x as f32, y as f32)
}

/// Cursor state of one window
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    /// Last cursor position, window-local
    pub local: Point,
    /// Screen position of the window's client-area origin
    pub origin: Point,
    buttons_down: u8,
}

impl PointerTracker {
    pub fn set_origin<T: Into<f64>>(&mut self, origin: PhysicalPosition<T>) {
        self.origin = to_point(origin);
    }

    /// Global cursor position as of the last event
    pub fn screen_pos(&self) -> Point {
        self.origin.offset(self.local.x, self.local.y)
    }

    /// Map a container window event to strip input
    ///
    /// Focus loss while a button is held aborts the gesture; the strip
    /// ignores the abort unless a drag is in flight.
    pub fn strip_msg(&mut self, event: &WindowEvent) -> Option<StripMsg> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.local = to_point(*position);
                Some(StripMsg::Moved { pos: self.local })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let (pos, screen_pos) = (self.local, self.screen_pos());
                match state {
                    ElementState::Pressed => {
                        self.buttons_down = self.buttons_down.saturating_add(1);
                        Some(StripMsg::Pressed {
                            button: *button,
                            pos,
                            screen_pos,
                        })
                    }
                    ElementState::Released => {
                        self.buttons_down = self.buttons_down.saturating_sub(1);
                        Some(StripMsg::Released {
                            button: *button,
                            pos,
                            screen_pos,
                        })
                    }
                }
            }
            WindowEvent::Focused(false) if self.buttons_down > 0 => {
                self.buttons_down = 0;
                Some(StripMsg::Aborted {
                    screen_pos: self.screen_pos(),
                })
            }
            _ => None,
        }
    }

    /// Map a floating window event to a platform event for drag detection
    ///
    /// winit has no non-client events. The first pointer activity delivered
    /// to the window after a move stands in for the frame release; the
    /// model ignores it unless the window was grabbed for a drag first.
    pub fn platform_event(&mut self, event: &WindowEvent) -> Option<PlatformEvent> {
        match event {
            WindowEvent::Moved(position) => {
                Some(PlatformEvent::WindowMoved(to_point(*position)))
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.local = to_point(*position);
                Some(PlatformEvent::NonClientInteraction)
            }
            WindowEvent::CursorEntered { .. }
            | WindowEvent::MouseInput { .. }
            | WindowEvent::Focused(true) => Some(PlatformEvent::NonClientInteraction),
            WindowEvent::CloseRequested => Some(PlatformEvent::CloseRequested),
            WindowEvent::KeyboardInput { .. }
            | WindowEvent::Resized(_)
            | WindowEvent::ScaleFactorChanged { .. } => Some(PlatformEvent::Other),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::event::{DeviceId, MouseButton};

    fn cursor_moved(x: f64, y: f64) -> WindowEvent {
        WindowEvent::CursorMoved {
            // SAFETY: only compared, never handed back to the platform
            device_id: unsafe { DeviceId::dummy() },
            position: PhysicalPosition::new(x, y),
        }
    }

    fn mouse(state: ElementState) -> WindowEvent {
        WindowEvent::MouseInput {
            // SAFETY: only compared, never handed back to the platform
            device_id: unsafe { DeviceId::dummy() },
            state,
            button: MouseButton::Left,
        }
    }

    #[test]
    fn test_press_carries_local_and_screen_pos() {
        let mut tracker = PointerTracker::default();
        tracker.set_origin(PhysicalPosition::new(100, 50));
        tracker.strip_msg(&cursor_moved(10.0, 5.0));
        assert_eq!(
            tracker.strip_msg(&mouse(ElementState::Pressed)),
            Some(StripMsg::Pressed {
                button: MouseButton::Left,
                pos: Point::new(10.0, 5.0),
                screen_pos: Point::new(110.0, 55.0),
            })
        );
    }

    #[test]
    fn test_focus_loss_aborts_only_with_button_held() {
        let mut tracker = PointerTracker::default();
        assert_eq!(tracker.strip_msg(&WindowEvent::Focused(false)), None);
        tracker.strip_msg(&mouse(ElementState::Pressed));
        assert!(matches!(
            tracker.strip_msg(&WindowEvent::Focused(false)),
            Some(StripMsg::Aborted { .. })
        ));
        assert_eq!(tracker.strip_msg(&WindowEvent::Focused(false)), None);
    }

    #[test]
    fn test_floating_move_then_pointer_maps_to_drop_sequence() {
        let mut tracker = PointerTracker::default();
        assert_eq!(
            tracker.platform_event(&WindowEvent::Moved(PhysicalPosition::new(300, 200))),
            Some(PlatformEvent::WindowMoved(Point::new(300.0, 200.0)))
        );
        assert_eq!(
            tracker.platform_event(&cursor_moved(4.0, 4.0)),
            Some(PlatformEvent::NonClientInteraction)
        );
        assert_eq!(tracker.local, Point::new(4.0, 4.0));
    }

    #[test]
    fn test_redraw_not_forwarded() {
        let mut tracker = PointerTracker::default();
        assert_eq!(tracker.platform_event(&WindowEvent::RedrawRequested), None);
    }
}
