//! Scroll-driven and toggle state: back-to-top visibility, the mobile
//! navigation drawer, and one-shot reveal tracking.

use std::collections::HashSet;

pub fn back_to_top_visible(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

/// Open/closed state of the mobile navigation drawer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavDrawer {
    open: bool,
}

impl NavDrawer {
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip the drawer; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Any link inside the drawer closes it
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Resync with the class list when something else changed it
    pub fn set(&mut self, open: bool) {
        self.open = open;
    }
}

/// Tracks which observed targets have already been revealed.
///
/// A target is revealed the first time it intersects and never again.
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<usize>,
    total: usize,
}

impl RevealTracker {
    pub fn new(total: usize) -> Self {
        Self {
            revealed: HashSet::new(),
            total,
        }
    }

    /// Record an intersection report; `true` means reveal it now
    pub fn observe(&mut self, index: usize, intersecting: bool) -> bool {
        intersecting && index < self.total && self.revealed.insert(index)
    }

    /// Everything has been revealed; the observer can be dropped
    pub fn is_done(&self) -> bool {
        self.revealed.len() == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_to_top_threshold_is_exclusive() {
        assert!(!back_to_top_visible(0.0, 380.0));
        assert!(!back_to_top_visible(380.0, 380.0));
        assert!(back_to_top_visible(380.5, 380.0));
    }

    #[test]
    fn test_nav_drawer() {
        let mut drawer = NavDrawer::default();
        assert!(drawer.toggle());
        assert!(drawer.is_open());
        drawer.close();
        assert!(!drawer.is_open());
        assert!(drawer.toggle());
        assert!(!drawer.toggle());
    }

    #[test]
    fn test_reveal_happens_once() {
        let mut tracker = RevealTracker::new(2);
        assert!(!tracker.observe(0, false));
        assert!(tracker.observe(0, true));
        assert!(!tracker.observe(0, true));
        assert!(!tracker.is_done());
        assert!(tracker.observe(1, true));
        assert!(tracker.is_done());
        assert!(!tracker.observe(5, true));
    }

    #[test]
    fn test_empty_tracker_is_done() {
        assert!(RevealTracker::new(0).is_done());
    }
}
