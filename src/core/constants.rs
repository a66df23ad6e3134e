// Shared interaction and layout constants used by the overlay state.

// Overlay defaults
pub const DEFAULT_OPACITY: f64 = 0.5;
pub const DEFAULT_SCALE: f64 = 1.0;

// Slider ranges
pub const OPACITY_MIN: f64 = 0.0;
pub const OPACITY_MAX: f64 = 1.0;
pub const SCALE_MIN: f64 = 0.1;
pub const SCALE_MAX: f64 = 3.0;

// Selection frame
pub const MIN_BOX_SIZE: f64 = 10.0; // smallest width/height a resize may produce
pub const HANDLE_HIT_RADIUS: f64 = 12.0; // pointer slop around a corner anchor (css px)

// Layout
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0; // widths at or below this are "mobile"

// Keyboard stepping
pub const NUDGE_STEP_PX: f64 = 1.0;
pub const NUDGE_STEP_FAST_PX: f64 = 10.0;
pub const SCALE_KEY_STEP: f64 = 0.05;

// Panel toggle glyphs
pub const PANEL_OPEN_GLYPH: &str = "☰";
pub const PANEL_CLOSE_GLYPH: &str = "✕";
