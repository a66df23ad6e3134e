use super::constants::MIN_BOX_SIZE;
use glam::DVec2;

/// Axis-aligned box in stage (css pixel) space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    pub fn corner(&self, handle: Handle) -> DVec2 {
        match handle {
            Handle::TopLeft => DVec2::new(self.x, self.y),
            Handle::TopRight => DVec2::new(self.x + self.width, self.y),
            Handle::BottomLeft => DVec2::new(self.x, self.y + self.height),
            Handle::BottomRight => DVec2::new(self.x + self.width, self.y + self.height),
        }
    }
}

/// Corner anchors of the selection frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Handle {
    pub const ALL: [Handle; 4] = [
        Handle::TopLeft,
        Handle::TopRight,
        Handle::BottomLeft,
        Handle::BottomRight,
    ];

    pub fn opposite(self) -> Handle {
        match self {
            Handle::TopLeft => Handle::BottomRight,
            Handle::TopRight => Handle::BottomLeft,
            Handle::BottomLeft => Handle::TopRight,
            Handle::BottomRight => Handle::TopLeft,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub selected: bool,
}

impl Selection {
    pub fn select(&mut self) {
        self.selected = true;
    }

    pub fn clear(&mut self) {
        self.selected = false;
    }
}

/// Return the anchor under `point`, if any, within `radius` of a corner.
pub fn handle_at(bbox: &BoundingBox, point: DVec2, radius: f64) -> Option<Handle> {
    let mut best = None::<(Handle, f64)>;
    for h in Handle::ALL {
        let d = bbox.corner(h).distance(point);
        if d <= radius {
            match best {
                Some((_, bd)) if d >= bd => {}
                _ => best = Some((h, d)),
            }
        }
    }
    best.map(|(h, _)| h)
}

/// Resize `old` by dragging `handle` to `pointer`, keeping the aspect ratio and
/// pinning the opposite corner. The pointer is projected onto the
/// anchor-to-handle diagonal, so horizontal and vertical motion both count.
///
/// A pointer dragged past the pinned corner yields a non-positive width, which
/// [`bound_box`] then rejects.
pub fn resize_from_handle(old: &BoundingBox, handle: Handle, pointer: DVec2) -> BoundingBox {
    if old.width <= 0.0 || old.height <= 0.0 {
        return *old;
    }
    let anchor = old.corner(handle.opposite());
    let diagonal = old.corner(handle) - anchor;
    let t = (pointer - anchor).dot(diagonal) / diagonal.length_squared();
    let width = old.width * t;
    let height = old.height * t;
    let x = match handle {
        Handle::TopRight | Handle::BottomRight => anchor.x,
        Handle::TopLeft | Handle::BottomLeft => anchor.x - width,
    };
    let y = match handle {
        Handle::BottomLeft | Handle::BottomRight => anchor.y,
        Handle::TopLeft | Handle::TopRight => anchor.y - height,
    };
    BoundingBox::new(x, y, width, height)
}

/// Gate a proposed box: anything smaller than [`MIN_BOX_SIZE`] on either axis
/// keeps the previous box.
#[inline]
pub fn bound_box(old: BoundingBox, new: BoundingBox) -> BoundingBox {
    if new.width < MIN_BOX_SIZE || new.height < MIN_BOX_SIZE {
        return old;
    }
    new
}
