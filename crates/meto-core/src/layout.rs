//! Responsive sidebar state.
//!
//! [`LayoutState`] is the single piece of shared UI state. It changes only
//! through the methods below, driven by viewport resizes and user toggles.
//!
//! | Viewport | Sidebar | Main content offset |
//! |----------|---------|---------------------|
//! | Mobile (< 768px) | Off-canvas, opened by the menu button | 0 |
//! | Desktop, collapsed | Icons only | 5rem |
//! | Desktop, expanded | Icons and labels | 16rem |

/// Viewport width (px) below which the layout is mobile.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Expanded sidebar width in rem.
pub const SIDEBAR_EXPANDED_REM: f32 = 16.0;

/// Collapsed sidebar width in rem.
pub const SIDEBAR_COLLAPSED_REM: f32 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    Mobile,
    Desktop,
}

impl LayoutMode {
    pub fn for_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT_PX {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

/// Left margin the main content reserves for the sidebar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SidebarOffset(pub f32);

impl SidebarOffset {
    /// CSS length, e.g. `16rem` or `0`.
    pub fn css(self) -> String {
        if self.0 == 0.0 {
            "0".to_string()
        } else {
            format!("{}rem", self.0)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutState {
    pub is_mobile: bool,
    pub is_collapsed: bool,
    pub is_mobile_menu_open: bool,
}

impl LayoutState {
    /// Fresh state for a viewport: expanded sidebar, menu closed.
    pub fn from_width(width: f64) -> Self {
        Self {
            is_mobile: LayoutMode::for_width(width) == LayoutMode::Mobile,
            is_collapsed: false,
            is_mobile_menu_open: false,
        }
    }

    pub fn mode(&self) -> LayoutMode {
        if self.is_mobile {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }

    /// Apply a viewport resize.
    ///
    /// Leaving the mobile layout force-closes an open mobile menu; entering
    /// it changes nothing else. Returns the new mode when the breakpoint was
    /// crossed.
    pub fn resize(&mut self, width: f64) -> Option<LayoutMode> {
        let previous = self.mode();
        let next = LayoutMode::for_width(width);
        self.is_mobile = next == LayoutMode::Mobile;

        if !self.is_mobile && self.is_mobile_menu_open {
            self.is_mobile_menu_open = false;
        }

        (previous != next).then_some(next)
    }

    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.is_collapsed = collapsed;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.is_mobile_menu_open = !self.is_mobile_menu_open;
    }

    /// Overlay click.
    pub fn close_mobile_menu(&mut self) {
        self.is_mobile_menu_open = false;
    }

    /// Open or close the mobile menu. Ignored on desktop, where there is no
    /// menu to open.
    pub fn set_mobile_menu(&mut self, open: bool) {
        self.is_mobile_menu_open = open && self.is_mobile;
    }

    /// Whether following a nav link should close the menu.
    pub fn navigation_closes_menu(&self) -> bool {
        self.is_mobile && self.is_mobile_menu_open
    }

    /// Following a nav link on mobile closes the menu.
    pub fn close_for_navigation(&mut self) {
        if self.navigation_closes_menu() {
            self.close_mobile_menu();
        }
    }

    pub fn sidebar_offset(&self) -> SidebarOffset {
        if self.is_mobile {
            SidebarOffset(0.0)
        } else if self.is_collapsed {
            SidebarOffset(SIDEBAR_COLLAPSED_REM)
        } else {
            SidebarOffset(SIDEBAR_EXPANDED_REM)
        }
    }

    /// The collapse button exists only on desktop.
    pub fn shows_collapse_toggle(&self) -> bool {
        !self.is_mobile
    }

    /// Mobile menu button (menu / close glyph).
    pub fn shows_menu_button(&self) -> bool {
        self.is_mobile
    }

    /// Dimming overlay behind the open mobile menu.
    pub fn shows_overlay(&self) -> bool {
        self.is_mobile && self.is_mobile_menu_open
    }

    /// Sidebar is slid off-canvas.
    pub fn sidebar_hidden(&self) -> bool {
        self.is_mobile && !self.is_mobile_menu_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_for_width() {
        assert_eq!(LayoutMode::for_width(500.0), LayoutMode::Mobile);
        assert_eq!(LayoutMode::for_width(767.9), LayoutMode::Mobile);
        assert_eq!(LayoutMode::for_width(768.0), LayoutMode::Desktop);
        assert_eq!(LayoutMode::for_width(1024.0), LayoutMode::Desktop);
    }

    #[test]
    fn test_resize_to_mobile() {
        let mut state = LayoutState::from_width(1024.0);
        assert_eq!(state.resize(500.0), Some(LayoutMode::Mobile));
        assert!(state.is_mobile);
        assert!(!state.is_mobile_menu_open);
    }

    #[test]
    fn test_resize_to_desktop_closes_menu() {
        let mut state = LayoutState::from_width(500.0);
        state.toggle_mobile_menu();
        assert!(state.is_mobile_menu_open);

        assert_eq!(state.resize(1024.0), Some(LayoutMode::Desktop));
        assert!(!state.is_mobile);
        assert!(!state.is_mobile_menu_open);
    }

    #[test]
    fn test_resize_within_mode_keeps_menu() {
        let mut state = LayoutState::from_width(500.0);
        state.toggle_mobile_menu();
        assert_eq!(state.resize(600.0), None);
        assert!(state.is_mobile_menu_open);
    }

    #[test]
    fn test_resize_keeps_collapse() {
        let mut state = LayoutState::from_width(1280.0);
        state.set_collapsed(true);
        state.resize(500.0);
        state.resize(1280.0);
        assert!(state.is_collapsed);
    }

    #[test]
    fn test_sidebar_offset() {
        let mut state = LayoutState::from_width(1280.0);
        assert_eq!(state.sidebar_offset(), SidebarOffset(16.0));
        assert_eq!(state.sidebar_offset().css(), "16rem");

        state.set_collapsed(true);
        assert_eq!(state.sidebar_offset(), SidebarOffset(5.0));
        assert_eq!(state.sidebar_offset().css(), "5rem");

        state.resize(500.0);
        assert_eq!(state.sidebar_offset(), SidebarOffset(0.0));
        assert_eq!(state.sidebar_offset().css(), "0");
    }

    #[test]
    fn test_set_mobile_menu() {
        let mut state = LayoutState::from_width(500.0);
        state.set_mobile_menu(true);
        assert!(state.shows_overlay());
        assert!(state.navigation_closes_menu());

        state.set_mobile_menu(false);
        assert!(state.sidebar_hidden());
        assert!(!state.navigation_closes_menu());

        let mut desktop = LayoutState::from_width(1280.0);
        desktop.set_mobile_menu(true);
        assert!(!desktop.is_mobile_menu_open);
        assert!(!desktop.navigation_closes_menu());
    }

    #[test]
    fn test_navigation_closes_mobile_menu() {
        let mut state = LayoutState::from_width(500.0);
        state.toggle_mobile_menu();
        state.close_for_navigation();
        assert!(!state.is_mobile_menu_open);
        assert!(state.sidebar_hidden());
    }

    #[test]
    fn test_chrome_visibility() {
        let mut state = LayoutState::from_width(1280.0);
        assert!(state.shows_collapse_toggle());
        assert!(!state.shows_menu_button());
        assert!(!state.sidebar_hidden());

        state.resize(400.0);
        assert!(!state.shows_collapse_toggle());
        assert!(state.shows_menu_button());
        assert!(!state.shows_overlay());
        assert!(state.sidebar_hidden());

        state.toggle_mobile_menu();
        assert!(state.shows_overlay());
        assert!(!state.sidebar_hidden());
    }
}
