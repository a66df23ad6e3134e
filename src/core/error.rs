use thiserror::Error;

/// Failures the overlay recognizes. Neither is fatal; the panel and image
/// controls stay usable in both cases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverlayError {
    /// Permission denied, no camera present, or no media API at all.
    #[error("camera unavailable: {0}")]
    CameraUnavailable(String),
    /// The track declined a zoom constraint.
    #[error("zoom constraint rejected: {0}")]
    ZoomRejected(String),
}

impl OverlayError {
    /// Blocking errors are surfaced with an alert; the rest only reach the log.
    pub fn is_blocking(&self) -> bool {
        matches!(self, OverlayError::CameraUnavailable(_))
    }

    pub fn detail(&self) -> &str {
        match self {
            OverlayError::CameraUnavailable(d) | OverlayError::ZoomRejected(d) => d,
        }
    }
}
