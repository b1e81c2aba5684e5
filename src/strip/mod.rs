//! Tab strip gesture classification
//!
//! The strip turns raw pointer input into a small set of events:
//!
//! ```text
//!   Idle ──left press on tab──▶ PressedLeft ──travel > threshold──▶ Dragging
//!    │ ▲                          │                                   │
//!    │ └──────release (no-op)─────┘                 release: over strip → Move
//!    │                                                       elsewhere → Detach
//!    └──right press──▶ PressedRight ──release on same tab──▶ ContextClick
//! ```
//!
//! A double-click on a tab detaches it immediately, bypassing the drag
//! threshold. Presses below the threshold never produce `Move` or `Detach`,
//! so ordinary tab switching cannot tear a panel off by accident.
//!
//! The strip never touches the registry. It only needs hit-test results, the
//! name of the tab under the pointer and the current tab count. A gesture
//! follows its tab by name, so tabs inserted or removed while a button is
//! held cannot redirect it; the drop coordinator looks the index up again
//! when the gesture ends.

mod click;

use std::time::{Duration, Instant};

use winit::event::MouseButton;

use crate::view::geometry::Point;
use crate::view::hit_test::HitTarget;

pub use click::ClickTracker;

/// An in-flight left-button drag on a tab
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Window-local position of the press
    pub start_pos: Point,
    /// Name of the tab the press landed on
    pub dragged: String,
    /// Last known window-local pointer position
    pub drop_pos: Point,
    /// Pointer travel has exceeded the drag threshold
    pub gesture_confirmed: bool,
}

/// Gesture state of the strip
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// Left button down on a tab, threshold not yet crossed
    PressedLeft(DragSession),
    /// Drag confirmed; release decides between move and detach
    Dragging(DragSession),
    /// Right button down; `name` is the tab under the pointer at press time
    PressedRight { name: Option<String> },
}

/// Events the strip reports upward to the drop coordinator
///
/// Press events carry the index hit-tested a moment ago. Events that end a
/// longer gesture carry the tab's name instead.
#[derive(Debug, Clone, PartialEq)]
pub enum StripEvent {
    /// Left press on a tab body
    Activate(usize),
    /// Left press on a closable tab's close box
    CloseRequested(usize),
    /// Right press and release on the same tab
    ContextClick(String),
    /// Drag released over the strip; `to` comes from the release hit-test
    Move { name: String, to: usize },
    /// Drag released outside the strip, or a double-click
    Detach { name: String, screen_pos: Point },
}

/// Behavior knobs, usually taken from `DockConfig`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripOptions {
    /// Whether tabs can be dragged at all
    pub draggable: bool,
    /// Whether a double-click on a tab detaches it
    pub detach_on_double_click: bool,
    /// Manhattan distance in pixels before a press becomes a drag
    pub drag_threshold: f32,
    /// Maximum interval between the two presses of a double-click
    pub double_click_time: Duration,
}

impl Default for StripOptions {
    fn default() -> Self {
        Self {
            draggable: true,
            detach_on_double_click: true,
            drag_threshold: 10.0,
            double_click_time: Duration::from_millis(400),
        }
    }
}

/// Pointer gesture state machine for one container's tab strip
#[derive(Debug, Clone)]
pub struct TabStrip {
    state: GestureState,
    options: StripOptions,
    clicks: ClickTracker,
}

impl Default for TabStrip {
    fn default() -> Self {
        Self::new(StripOptions::default())
    }
}

impl TabStrip {
    pub fn new(options: StripOptions) -> Self {
        Self {
            state: GestureState::Idle,
            options,
            clicks: ClickTracker::new(options.double_click_time),
        }
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn options(&self) -> &StripOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: StripOptions) {
        self.options = options;
        self.clicks = ClickTracker::new(options.double_click_time);
    }

    /// The active drag session, once the threshold has been crossed
    pub fn dragging(&self) -> Option<&DragSession> {
        match &self.state {
            GestureState::Dragging(session) => Some(session),
            _ => None,
        }
    }

    /// Handle a button press at window-local `pos` over `target`
    ///
    /// `tab_name` names the tab `target` points into, if any.
    pub fn pointer_pressed(
        &mut self,
        button: MouseButton,
        target: HitTarget,
        tab_name: Option<&str>,
        pos: Point,
        screen_pos: Point,
        now: Instant,
    ) -> Option<StripEvent> {
        if matches!(self.state, GestureState::Dragging(_)) {
            // a second button during a drag does not start a new gesture
            return None;
        }

        match button {
            MouseButton::Left => self.left_pressed(target, tab_name, pos, screen_pos, now),
            MouseButton::Right => {
                self.state = GestureState::PressedRight {
                    name: tab_name.map(str::to_string),
                };
                None
            }
            _ => None,
        }
    }

    fn left_pressed(
        &mut self,
        target: HitTarget,
        tab_name: Option<&str>,
        pos: Point,
        screen_pos: Point,
        now: Instant,
    ) -> Option<StripEvent> {
        self.state = GestureState::Idle;
        match target {
            HitTarget::CloseButton { index } => {
                self.clicks.reset();
                Some(StripEvent::CloseRequested(index))
            }
            HitTarget::Tab { index } => {
                let Some(name) = tab_name else {
                    return Some(StripEvent::Activate(index));
                };
                let count = self.clicks.track_click(name, now);
                if count == 2 && self.options.detach_on_double_click {
                    self.clicks.reset();
                    tracing::debug!(name, index, "double-click detach");
                    return Some(StripEvent::Detach {
                        name: name.to_string(),
                        screen_pos,
                    });
                }

                self.state = GestureState::PressedLeft(DragSession {
                    start_pos: pos,
                    dragged: name.to_string(),
                    drop_pos: pos,
                    gesture_confirmed: false,
                });
                Some(StripEvent::Activate(index))
            }
            _ => None,
        }
    }

    /// Track pointer motion; returns true when the drag state changed
    pub fn pointer_moved(&mut self, pos: Point) -> bool {
        match &mut self.state {
            GestureState::PressedLeft(session) => {
                session.drop_pos = pos;
                let travel = session.start_pos.manhattan_distance(pos);
                if self.options.draggable && travel > self.options.drag_threshold {
                    let mut session = session.clone();
                    session.gesture_confirmed = true;
                    tracing::debug!(name = %session.dragged, travel, "drag confirmed");
                    self.state = GestureState::Dragging(session);
                    self.clicks.reset();
                    true
                } else {
                    false
                }
            }
            GestureState::Dragging(session) => {
                session.drop_pos = pos;
                true
            }
            _ => false,
        }
    }

    /// Handle a button release over `target`
    ///
    /// `tab_name` names the tab under the pointer now. `tab_count` is the
    /// number of attached tabs right now; a drag released on the empty part
    /// of the strip moves the tab to the last slot.
    pub fn pointer_released(
        &mut self,
        button: MouseButton,
        target: HitTarget,
        tab_name: Option<&str>,
        tab_count: usize,
        screen_pos: Point,
    ) -> Option<StripEvent> {
        match (std::mem::take(&mut self.state), button) {
            (GestureState::Dragging(session), MouseButton::Left) => {
                Some(Self::resolve_drop(session, target, tab_count, screen_pos))
            }
            (GestureState::PressedRight { name: Some(name) }, MouseButton::Right) => {
                if tab_name == Some(name.as_str()) {
                    Some(StripEvent::ContextClick(name))
                } else {
                    None
                }
            }
            (GestureState::PressedLeft(_), MouseButton::Left)
            | (GestureState::PressedRight { .. }, MouseButton::Right)
            | (GestureState::Idle, _) => None,
            (other, _) => {
                // release of a button that did not start the current gesture
                self.state = other;
                None
            }
        }
    }

    /// The platform abandoned the gesture (focus or capture lost)
    ///
    /// Before the threshold this is a silent no-op. A confirmed drag is
    /// resolved as if released at its last known position; `resolve`
    /// hit-tests that position.
    pub fn abort(
        &mut self,
        resolve: impl FnOnce(Point) -> HitTarget,
        tab_count: usize,
        screen_pos: Point,
    ) -> Option<StripEvent> {
        match std::mem::take(&mut self.state) {
            GestureState::Dragging(session) => {
                let target = resolve(session.drop_pos);
                Some(Self::resolve_drop(session, target, tab_count, screen_pos))
            }
            _ => None,
        }
    }

    fn resolve_drop(
        session: DragSession,
        target: HitTarget,
        tab_count: usize,
        screen_pos: Point,
    ) -> StripEvent {
        let name = session.dragged;
        let event = match target {
            HitTarget::Tab { index } | HitTarget::CloseButton { index } => {
                StripEvent::Move { name, to: index }
            }
            HitTarget::StripEmpty => StripEvent::Move {
                name,
                to: tab_count.saturating_sub(1),
            },
            HitTarget::Content | HitTarget::Outside => StripEvent::Detach { name, screen_pos },
        };
        tracing::debug!(?event, "drag released");
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Point = Point { x: 900.0, y: 500.0 };
    const NAMES: [&str; 3] = ["A", "B", "C"];

    fn on_tab(index: usize) -> (HitTarget, Option<&'static str>) {
        (HitTarget::Tab { index }, NAMES.get(index).copied())
    }

    fn press_left(strip: &mut TabStrip, index: usize, pos: Point) -> Option<StripEvent> {
        let (target, name) = on_tab(index);
        strip.pointer_pressed(MouseButton::Left, target, name, pos, SCREEN, Instant::now())
    }

    fn press_at(strip: &mut TabStrip, button: MouseButton, index: usize, now: Instant) -> Option<StripEvent> {
        let (target, name) = on_tab(index);
        strip.pointer_pressed(button, target, name, Point::new(10.0, 10.0), SCREEN, now)
    }

    fn release(strip: &mut TabStrip, button: MouseButton, target: HitTarget, count: usize) -> Option<StripEvent> {
        let name = target.tab_index().and_then(|i| NAMES.get(i).copied());
        strip.pointer_released(button, target, name, count, SCREEN)
    }

    #[test]
    fn test_press_activates_and_arms_drag() {
        let mut strip = TabStrip::default();
        let event = press_left(&mut strip, 1, Point::new(130.0, 10.0));
        assert_eq!(event, Some(StripEvent::Activate(1)));
        assert!(matches!(strip.state(), GestureState::PressedLeft(s) if s.dragged == "B"));
    }

    #[test]
    fn test_below_threshold_emits_nothing() {
        let mut strip = TabStrip::default();
        press_left(&mut strip, 0, Point::new(10.0, 10.0));
        assert!(!strip.pointer_moved(Point::new(14.0, 13.0)));
        let event = release(&mut strip, MouseButton::Left, HitTarget::Content, 3);
        assert_eq!(event, None);
        assert_eq!(*strip.state(), GestureState::Idle);
    }

    #[test]
    fn test_threshold_is_manhattan_and_strict() {
        let mut strip = TabStrip::default();
        press_left(&mut strip, 0, Point::new(10.0, 10.0));
        // exactly 10 does not start a drag
        strip.pointer_moved(Point::new(16.0, 14.0));
        assert!(strip.dragging().is_none());
        strip.pointer_moved(Point::new(16.0, 15.0));
        assert!(strip.dragging().is_some_and(|s| s.gesture_confirmed));
    }

    #[test]
    fn test_drag_release_on_tab_moves() {
        let mut strip = TabStrip::default();
        press_left(&mut strip, 0, Point::new(10.0, 10.0));
        strip.pointer_moved(Point::new(250.0, 10.0));
        let event = release(&mut strip, MouseButton::Left, HitTarget::Tab { index: 2 }, 3);
        assert_eq!(
            event,
            Some(StripEvent::Move {
                name: "A".into(),
                to: 2
            })
        );
        assert_eq!(*strip.state(), GestureState::Idle);
    }

    #[test]
    fn test_drag_release_on_empty_strip_moves_to_end() {
        let mut strip = TabStrip::default();
        press_left(&mut strip, 0, Point::new(10.0, 10.0));
        strip.pointer_moved(Point::new(500.0, 10.0));
        let event = release(&mut strip, MouseButton::Left, HitTarget::StripEmpty, 3);
        assert_eq!(
            event,
            Some(StripEvent::Move {
                name: "A".into(),
                to: 2
            })
        );
    }

    #[test]
    fn test_drag_release_outside_detaches() {
        let mut strip = TabStrip::default();
        press_left(&mut strip, 1, Point::new(130.0, 10.0));
        strip.pointer_moved(Point::new(130.0, 300.0));
        let event = release(&mut strip, MouseButton::Left, HitTarget::Outside, 3);
        assert_eq!(
            event,
            Some(StripEvent::Detach {
                name: "B".into(),
                screen_pos: SCREEN
            })
        );
    }

    #[test]
    fn test_drag_release_on_content_detaches() {
        let mut strip = TabStrip::default();
        press_left(&mut strip, 0, Point::new(10.0, 10.0));
        strip.pointer_moved(Point::new(10.0, 100.0));
        let event = release(&mut strip, MouseButton::Left, HitTarget::Content, 3);
        assert!(matches!(event, Some(StripEvent::Detach { name, .. }) if name == "A"));
    }

    #[test]
    fn test_not_draggable_never_drags() {
        let mut strip = TabStrip::new(StripOptions {
            draggable: false,
            ..StripOptions::default()
        });
        press_left(&mut strip, 0, Point::new(10.0, 10.0));
        strip.pointer_moved(Point::new(10.0, 300.0));
        assert!(strip.dragging().is_none());
        let event = release(&mut strip, MouseButton::Left, HitTarget::Outside, 1);
        assert_eq!(event, None);
    }

    #[test]
    fn test_double_click_detaches() {
        let mut strip = TabStrip::default();
        let t0 = Instant::now();
        press_at(&mut strip, MouseButton::Left, 0, t0);
        release(&mut strip, MouseButton::Left, HitTarget::Tab { index: 0 }, 2);
        let event = press_at(&mut strip, MouseButton::Left, 0, t0 + Duration::from_millis(120));
        assert_eq!(
            event,
            Some(StripEvent::Detach {
                name: "A".into(),
                screen_pos: SCREEN
            })
        );
        // the trailing release is a no-op
        let event = release(&mut strip, MouseButton::Left, HitTarget::Tab { index: 0 }, 1);
        assert_eq!(event, None);
    }

    #[test]
    fn test_double_click_needs_the_same_tab_not_the_same_slot() {
        let mut strip = TabStrip::default();
        let t0 = Instant::now();
        let pos = Point::new(10.0, 10.0);
        strip.pointer_pressed(MouseButton::Left, HitTarget::Tab { index: 0 }, Some("A"), pos, SCREEN, t0);
        strip.pointer_released(MouseButton::Left, HitTarget::Tab { index: 0 }, Some("A"), 2, SCREEN);
        // a tab inserted in front now occupies slot 0
        let event = strip.pointer_pressed(
            MouseButton::Left,
            HitTarget::Tab { index: 0 },
            Some("Z"),
            pos,
            SCREEN,
            t0 + Duration::from_millis(120),
        );
        assert_eq!(event, Some(StripEvent::Activate(0)));
    }

    #[test]
    fn test_double_click_detach_can_be_disabled() {
        let mut strip = TabStrip::new(StripOptions {
            detach_on_double_click: false,
            ..StripOptions::default()
        });
        let t0 = Instant::now();
        press_at(&mut strip, MouseButton::Left, 0, t0);
        release(&mut strip, MouseButton::Left, HitTarget::Tab { index: 0 }, 1);
        let event = press_at(&mut strip, MouseButton::Left, 0, t0 + Duration::from_millis(120));
        assert_eq!(event, Some(StripEvent::Activate(0)));
    }

    #[test]
    fn test_right_click_same_tab_is_context_click() {
        let mut strip = TabStrip::default();
        press_at(&mut strip, MouseButton::Right, 2, Instant::now());
        let event = release(&mut strip, MouseButton::Right, HitTarget::Tab { index: 2 }, 3);
        assert_eq!(event, Some(StripEvent::ContextClick("C".into())));
    }

    #[test]
    fn test_right_click_released_elsewhere_is_nothing() {
        let mut strip = TabStrip::default();
        press_at(&mut strip, MouseButton::Right, 2, Instant::now());
        let event = release(&mut strip, MouseButton::Right, HitTarget::Tab { index: 1 }, 3);
        assert_eq!(event, None);

        strip.pointer_pressed(
            MouseButton::Right,
            HitTarget::StripEmpty,
            None,
            Point::default(),
            SCREEN,
            Instant::now(),
        );
        let event = release(&mut strip, MouseButton::Right, HitTarget::StripEmpty, 3);
        assert_eq!(event, None);
    }

    #[test]
    fn test_close_box_press_requests_close() {
        let mut strip = TabStrip::default();
        let event = strip.pointer_pressed(
            MouseButton::Left,
            HitTarget::CloseButton { index: 1 },
            Some("B"),
            Point::default(),
            SCREEN,
            Instant::now(),
        );
        assert_eq!(event, Some(StripEvent::CloseRequested(1)));
        assert_eq!(*strip.state(), GestureState::Idle);
    }

    #[test]
    fn test_abort_before_threshold_is_silent() {
        let mut strip = TabStrip::default();
        press_left(&mut strip, 0, Point::new(10.0, 10.0));
        let event = strip.abort(|_| HitTarget::Outside, 2, SCREEN);
        assert_eq!(event, None);
        assert_eq!(*strip.state(), GestureState::Idle);
    }

    #[test]
    fn test_abort_while_dragging_resolves_at_last_position() {
        let mut strip = TabStrip::default();
        press_left(&mut strip, 0, Point::new(10.0, 10.0));
        strip.pointer_moved(Point::new(250.0, 12.0));
        let event = strip.abort(
            |pt| {
                assert_eq!(pt, Point::new(250.0, 12.0));
                HitTarget::Tab { index: 2 }
            },
            3,
            SCREEN,
        );
        assert_eq!(
            event,
            Some(StripEvent::Move {
                name: "A".into(),
                to: 2
            })
        );
    }

    #[test]
    fn test_right_press_during_drag_is_ignored() {
        let mut strip = TabStrip::default();
        press_left(&mut strip, 0, Point::new(10.0, 10.0));
        strip.pointer_moved(Point::new(10.0, 200.0));
        strip.pointer_pressed(
            MouseButton::Right,
            HitTarget::Content,
            None,
            Point::default(),
            SCREEN,
            Instant::now(),
        );
        assert!(strip.dragging().is_some());
        // releasing the right button does not end the drag either
        release(&mut strip, MouseButton::Right, HitTarget::Content, 1);
        assert!(strip.dragging().is_some());
    }
}
