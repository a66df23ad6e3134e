pub mod constants;
pub mod error;
pub mod keys;
pub mod labels;
pub mod overlay;
pub mod selection;
pub mod transform;
pub mod viewport;
pub mod zoom;

pub use constants::*;
pub use error::OverlayError;
pub use keys::{action_for_key, KeyAction};
pub use overlay::{load_image, LoadOutcome};
pub use selection::{bound_box, handle_at, resize_from_handle, BoundingBox, Handle, Selection};
pub use transform::OverlayTransform;
pub use viewport::ViewportMode;
pub use zoom::{CameraZoom, ZoomCapability};
