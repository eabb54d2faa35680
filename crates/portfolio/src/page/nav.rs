//! Navigation bar, mobile menu and floating action menu state

/// Scroll offset past which the navbar turns nearly opaque
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;

/// Height of the fixed navbar, subtracted from anchor scroll targets
pub const NAVBAR_OFFSET: f64 = 80.0;

/// Navbar background opacity for a scroll position
pub fn navbar_opacity(scroll_y: f64) -> f64 {
    if scroll_y > NAVBAR_SCROLL_THRESHOLD {
        0.98
    } else {
        0.95
    }
}

/// Where to scroll so a section clears the fixed navbar
pub fn anchor_scroll_target(offset_top: f64) -> f64 {
    (offset_top - NAVBAR_OFFSET).max(0.0)
}

/// Open/closed state for the hamburger menu and the floating action menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuToggle {
    open: bool,
}

impl MenuToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu (item click, outside click, Escape); returns whether
    /// anything changed
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Icon for the trigger button
    pub fn icon(&self) -> &'static str {
        if self.open { "fas fa-times" } else { "fas fa-bars" }
    }
}
