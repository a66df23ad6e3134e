use super::constants::{MOBILE_BREAKPOINT_PX, PANEL_CLOSE_GLYPH, PANEL_OPEN_GLYPH};

/// Layout mode derived from the window width.
///
/// Desktop always shows the control panel. Mobile shows it only while
/// `panel_visible` is set, which only the floating toggle changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportMode {
    pub is_mobile: bool,
    pub panel_visible: bool,
}

#[inline]
pub fn is_mobile_width(width: f64) -> bool {
    width <= MOBILE_BREAKPOINT_PX
}

impl ViewportMode {
    pub fn from_width(width: f64) -> Self {
        let is_mobile = is_mobile_width(width);
        Self {
            is_mobile,
            panel_visible: !is_mobile,
        }
    }

    /// Recompute on a resize. Wide viewports force the panel open; crossing
    /// into mobile closes it; staying mobile keeps the user's choice.
    pub fn on_resize(&mut self, width: f64) {
        let was_mobile = self.is_mobile;
        self.is_mobile = is_mobile_width(width);
        if !self.is_mobile {
            self.panel_visible = true;
        } else if !was_mobile {
            self.panel_visible = false;
        }
    }

    /// Flip the mobile visibility flag. No-op on desktop.
    pub fn toggle_panel(&mut self) -> bool {
        if self.is_mobile {
            self.panel_visible = !self.panel_visible;
        }
        self.panel_shown()
    }

    #[inline]
    pub fn panel_shown(&self) -> bool {
        !self.is_mobile || self.panel_visible
    }

    #[inline]
    pub fn toggle_button_shown(&self) -> bool {
        self.is_mobile
    }

    pub fn toggle_glyph(&self) -> &'static str {
        if self.panel_shown() {
            PANEL_CLOSE_GLYPH
        } else {
            PANEL_OPEN_GLYPH
        }
    }
}
