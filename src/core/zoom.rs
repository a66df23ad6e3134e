/// Zoom range a camera track reports through its capabilities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomCapability {
    pub min: f64,
    pub max: f64,
}

impl ZoomCapability {
    /// Build from raw capability bounds; rejects non-finite or inverted ranges.
    pub fn new(min: f64, max: f64) -> Option<Self> {
        (min.is_finite() && max.is_finite() && min <= max).then_some(Self { min, max })
    }

    #[inline]
    pub fn clamp(&self, v: f64) -> f64 {
        v.clamp(self.min, self.max)
    }
}

/// Camera zoom as shown in the panel. `capability` is `None` until (and unless)
/// the live track reports a zoom range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraZoom {
    pub capability: Option<ZoomCapability>,
    pub current: f64,
}

impl Default for CameraZoom {
    fn default() -> Self {
        Self {
            capability: None,
            current: 1.0,
        }
    }
}

impl CameraZoom {
    pub fn detected(capability: Option<ZoomCapability>, reported: Option<f64>) -> Self {
        match capability {
            Some(cap) => {
                let current = reported
                    .filter(|v| v.is_finite())
                    .map(|v| cap.clamp(v))
                    .unwrap_or(cap.min);
                Self {
                    capability: Some(cap),
                    current,
                }
            }
            None => Self::default(),
        }
    }

    #[inline]
    pub fn is_supported(&self) -> bool {
        self.capability.is_some()
    }

    /// Record a requested zoom. The displayed value is updated whether or not
    /// the device later honors it. Returns the value to push to the track.
    pub fn request(&mut self, v: f64) -> Option<f64> {
        let cap = self.capability?;
        if !v.is_finite() {
            return None;
        }
        self.current = cap.clamp(v);
        Some(self.current)
    }
}
