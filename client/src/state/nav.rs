//! Navbar chrome state: solid background once scrolled, mobile menu.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Scroll offset past which the navbar switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 80.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    /// Record the window scroll offset. Returns whether `scrolled` changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > SCROLL_THRESHOLD_PX;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
