use super::constants::{
    DEFAULT_OPACITY, DEFAULT_SCALE, OPACITY_MAX, OPACITY_MIN, SCALE_MAX, SCALE_MIN,
};
use super::selection::BoundingBox;
use glam::DVec2;

/// Position/scale/opacity/mirror applied to the reference image.
///
/// `position` is the image origin on the stage. With `mirrored` set the image
/// is drawn with a negative horizontal scale, so it extends to the left of
/// `position.x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayTransform {
    pub position: DVec2,
    pub scale: f64,
    pub opacity: f64,
    pub mirrored: bool,
}

impl Default for OverlayTransform {
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            scale: DEFAULT_SCALE,
            opacity: DEFAULT_OPACITY,
            mirrored: false,
        }
    }
}

impl OverlayTransform {
    pub fn set_opacity(&mut self, v: f64) {
        if v.is_finite() {
            self.opacity = v.clamp(OPACITY_MIN, OPACITY_MAX);
        }
    }

    pub fn set_scale(&mut self, v: f64) {
        if v.is_finite() {
            self.scale = v.clamp(SCALE_MIN, SCALE_MAX);
        }
    }

    #[inline]
    pub fn toggle_mirror(&mut self) {
        self.mirrored = !self.mirrored;
    }

    /// Horizontal and vertical scale factors handed to the 2D context.
    #[inline]
    pub fn scale_factors(&self) -> (f64, f64) {
        let sign = if self.mirrored { -1.0 } else { 1.0 };
        (self.scale * sign, self.scale)
    }

    pub fn bounding_box(&self, image: DVec2) -> BoundingBox {
        let w = image.x * self.scale;
        let h = image.y * self.scale;
        let x = if self.mirrored {
            self.position.x - w
        } else {
            self.position.x
        };
        BoundingBox::new(x, self.position.y, w, h)
    }

    #[inline]
    pub fn contains(&self, image: DVec2, point: DVec2) -> bool {
        self.bounding_box(image).contains(point)
    }

    /// Place the image in the middle of a `stage`-sized surface at the current scale.
    pub fn center_in(&mut self, stage: DVec2, image: DVec2) {
        let w = image.x * self.scale;
        let h = image.y * self.scale;
        let left = (stage.x - w) * 0.5;
        let top = (stage.y - h) * 0.5;
        let x = if self.mirrored { left + w } else { left };
        self.position = DVec2::new(x, top);
    }

    /// Adopt a box produced by the selection frame. Scale follows the box
    /// width; the origin follows the box edge matching the mirror flag.
    pub fn apply_box(&mut self, image: DVec2, bbox: &BoundingBox) {
        if image.x <= 0.0 {
            return;
        }
        self.scale = bbox.width / image.x;
        let x = if self.mirrored {
            bbox.x + bbox.width
        } else {
            bbox.x
        };
        self.position = DVec2::new(x, bbox.y);
    }

    #[inline]
    pub fn nudge(&mut self, delta: DVec2) {
        self.position += delta;
    }
}
