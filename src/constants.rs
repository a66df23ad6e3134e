/// DOM element ids and selection-frame styling.
///
/// Element ids must match `index.html`; the frame styling keeps magic numbers
/// out of the render code.
// Host page elements
pub const VIDEO_ID: &str = "camera-feed";
pub const CANVAS_ID: &str = "overlay-canvas";
pub const PANEL_ID: &str = "control-panel";
pub const PANEL_TOGGLE_ID: &str = "panel-toggle";
pub const FILE_INPUT_ID: &str = "image-file";
pub const OPACITY_INPUT_ID: &str = "opacity-input";
pub const OPACITY_LABEL_ID: &str = "opacity-label";
pub const SCALE_INPUT_ID: &str = "scale-input";
pub const SCALE_LABEL_ID: &str = "scale-label";
pub const ZOOM_ROW_ID: &str = "zoom-row";
pub const ZOOM_INPUT_ID: &str = "zoom-input";
pub const ZOOM_LABEL_ID: &str = "zoom-label";
pub const MIRROR_BUTTON_ID: &str = "mirror-button";

// CSS class used to hide elements
pub const HIDDEN_CLASS: &str = "hidden";

// Selection frame
pub const FRAME_STROKE: &str = "rgb(0, 161, 255)"; // outline and anchor border
pub const FRAME_LINE_WIDTH: f64 = 1.0;
pub const HANDLE_FILL: &str = "white";
pub const HANDLE_SIZE: f64 = 10.0; // anchor square edge (css px)
