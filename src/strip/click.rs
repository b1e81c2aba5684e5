//! Double-click detection on tabs

use std::time::{Duration, Instant};

/// Click tracking state for double-click detection
#[derive(Debug, Clone)]
pub struct ClickTracker {
    last_click_time: Instant,
    last_click_tab: Option<String>,
    click_count: u32,
    double_click_time: Duration,
}

impl ClickTracker {
    pub fn new(double_click_time: Duration) -> Self {
        Self {
            last_click_time: Instant::now(),
            last_click_tab: None,
            click_count: 0,
            double_click_time,
        }
    }

    /// Record a press on the tab named `tab`; returns the click count (1 or 2)
    pub fn track_click(&mut self, tab: &str, now: Instant) -> u8 {
        let is_rapid_click = now.saturating_duration_since(self.last_click_time) < self.double_click_time;
        let is_same_tab = self.last_click_tab.as_deref() == Some(tab);

        if is_rapid_click && is_same_tab && self.click_count == 1 {
            self.click_count = 2;
        } else {
            self.click_count = 1;
        }

        self.last_click_time = now;
        self.last_click_tab = Some(tab.to_string());

        self.click_count as u8
    }

    /// Forget the previous click (after a drag or a detach)
    pub fn reset(&mut self) {
        self.click_count = 0;
        self.last_click_tab = None;
    }
}

impl Default for ClickTracker {
    fn default() -> Self {
        Self::new(Duration::from_millis(400))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rapid_click_on_same_tab_is_double() {
        let mut tracker = ClickTracker::default();
        let t0 = Instant::now();
        assert_eq!(tracker.track_click("B", t0), 1);
        assert_eq!(tracker.track_click("B", t0 + Duration::from_millis(100)), 2);
        // a third rapid click starts over
        assert_eq!(tracker.track_click("B", t0 + Duration::from_millis(200)), 1);
    }

    #[test]
    fn test_slow_click_is_single() {
        let mut tracker = ClickTracker::default();
        let t0 = Instant::now();
        tracker.track_click("A", t0);
        assert_eq!(tracker.track_click("A", t0 + Duration::from_millis(500)), 1);
    }

    #[test]
    fn test_click_on_other_tab_is_single() {
        let mut tracker = ClickTracker::default();
        let t0 = Instant::now();
        tracker.track_click("A", t0);
        assert_eq!(tracker.track_click("B", t0 + Duration::from_millis(50)), 1);
    }

    #[test]
    fn test_reset_forgets_previous_click() {
        let mut tracker = ClickTracker::default();
        let t0 = Instant::now();
        tracker.track_click("A", t0);
        tracker.reset();
        assert_eq!(tracker.track_click("A", t0 + Duration::from_millis(50)), 1);
    }
}
