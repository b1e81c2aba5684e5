//! Centralized geometry helpers for rendering and hit-testing
//!
//! This module provides a single source of truth for the container layout:
//! where the tab strip sits, where each tab and its close box are drawn, and
//! how a pointer position maps back to a tab index. It is shared between
//! the view (rendering) and the update layer (gesture classification and
//! drop resolution).
//!
//! All functions here are pure (no I/O, no side effects) and can be
//! tested independently of the rendering infrastructure.

use serde::{Deserialize, Serialize};

// ============================================================================
// Primitives
// ============================================================================

/// A point in pixels. Window-local or screen coordinates depending on context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Sum of the absolute axis distances to `other`
    #[inline]
    pub fn manhattan_distance(&self, other: Point) -> f32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Translate into the coordinate space whose origin is `origin`
    #[inline]
    pub fn relative_to(&self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }

    #[inline]
    pub fn offset(&self, dx: f32, dy: f32) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// A width/height pair in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Rectangle for layout calculations
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    #[inline]
    pub fn contains_point(&self, pt: Point) -> bool {
        self.contains(pt.x, pt.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

// ============================================================================
// Container Layout
// ============================================================================

/// Minimum tab width before tabs stop shrinking to fit the strip
pub const MIN_TAB_WIDTH: f32 = 48.0;

/// Padding between the close box and the tab's right edge
const CLOSE_BOX_PADDING: f32 = 6.0;

/// Layout of a container window: a tab strip along the top, content below.
///
/// Coordinates are window-local. Tabs are laid out left to right with a
/// preferred width, shrinking uniformly (down to `MIN_TAB_WIDTH`) when the
/// strip is too narrow to hold them all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerLayout {
    /// Size of the whole container (window client area)
    pub size: Size,
    /// Height of the tab strip band
    pub strip_height: f32,
    /// Preferred width of a single tab
    pub tab_width: f32,
}

impl ContainerLayout {
    pub fn new(size: Size, strip_height: f32, tab_width: f32) -> Self {
        Self {
            size,
            strip_height,
            tab_width,
        }
    }

    /// Bounds of the whole container
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.size)
    }

    /// The tab strip band across the top of the container
    pub fn strip_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.size.width, self.strip_height.min(self.size.height))
    }

    /// The area below the strip where the active panel's content lives
    pub fn content_rect(&self) -> Rect {
        let top = self.strip_height.min(self.size.height);
        Rect::new(0.0, top, self.size.width, self.size.height - top)
    }

    /// Effective width of each tab given how many are attached
    pub fn effective_tab_width(&self, count: usize) -> f32 {
        if count == 0 {
            return self.tab_width;
        }
        let fit = self.size.width / count as f32;
        self.tab_width.min(fit.max(MIN_TAB_WIDTH))
    }

    /// Rect of the tab at `index` when `count` tabs are attached
    pub fn tab_rect(&self, index: usize, count: usize) -> Rect {
        let width = self.effective_tab_width(count);
        Rect::new(index as f32 * width, 0.0, width, self.strip_rect().height)
    }

    /// Close box inside a tab, square, vertically centered at the right edge
    pub fn close_button_rect(&self, index: usize, count: usize) -> Rect {
        let tab = self.tab_rect(index, count);
        let side = (tab.height * 0.5).round();
        Rect::new(
            tab.x + tab.width - side - CLOSE_BOX_PADDING,
            tab.y + (tab.height - side) / 2.0,
            side,
            side,
        )
    }

    /// Resolve a window-local point to the tab under it, if any
    pub fn tab_at(&self, pt: Point, count: usize) -> Option<usize> {
        if count == 0 || !self.strip_rect().contains_point(pt) {
            return None;
        }
        let width = self.effective_tab_width(count);
        if width <= 0.0 || pt.x < 0.0 {
            return None;
        }
        let index = (pt.x / width) as usize;
        (index < count).then_some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ContainerLayout {
        ContainerLayout::new(Size::new(600.0, 400.0), 28.0, 120.0)
    }

    #[test]
    fn test_tab_at_resolves_indices() {
        let layout = layout();
        assert_eq!(layout.tab_at(Point::new(10.0, 10.0), 3), Some(0));
        assert_eq!(layout.tab_at(Point::new(130.0, 10.0), 3), Some(1));
        assert_eq!(layout.tab_at(Point::new(359.0, 27.0), 3), Some(2));
    }

    #[test]
    fn test_tab_at_past_last_tab_is_none() {
        let layout = layout();
        assert_eq!(layout.tab_at(Point::new(400.0, 10.0), 3), None);
    }

    #[test]
    fn test_tab_at_below_strip_is_none() {
        let layout = layout();
        assert_eq!(layout.tab_at(Point::new(10.0, 28.0), 3), None);
        assert_eq!(layout.tab_at(Point::new(10.0, -1.0), 3), None);
    }

    #[test]
    fn test_tabs_shrink_to_fit() {
        let layout = layout();
        assert_eq!(layout.effective_tab_width(10), 60.0);
        // never below the minimum
        assert_eq!(layout.effective_tab_width(100), MIN_TAB_WIDTH);
    }

    #[test]
    fn test_close_button_inside_tab() {
        let layout = layout();
        let tab = layout.tab_rect(1, 3);
        let close = layout.close_button_rect(1, 3);
        assert!(tab.contains(close.x, close.y));
        assert!(tab.contains(close.x + close.width - 1.0, close.y + close.height - 1.0));
    }

    #[test]
    fn test_content_rect_below_strip() {
        let layout = layout();
        let content = layout.content_rect();
        assert_eq!(content.y, 28.0);
        assert_eq!(content.height, 372.0);
    }

    #[test]
    fn test_manhattan_distance() {
        let a = Point::new(0.0, 0.0);
        assert_eq!(a.manhattan_distance(Point::new(3.0, -4.0)), 7.0);
    }
}
