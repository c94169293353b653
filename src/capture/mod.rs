/// Device capability access
///
/// This module handles the two permission-gated capabilities:
/// - Photo capture via a native pick dialog (camera.rs)
/// - Position lookup via a network geolocation endpoint (location.rs)
/// - Thumbnail caching for captured photos (thumbnail.rs)
///
/// Each capability is one async request/response call: consent first,
/// then a single capture or read. Denial and failure are reported to the
/// caller; neither changes any application state.

pub mod camera;
pub mod location;
pub mod thumbnail;

use thiserror::Error;

/// Options for a photo capture request
#[derive(Debug, Clone)]
pub struct CaptureOptions {
    /// Whether the captured image may be trimmed to `aspect`
    pub allow_editing: bool,
    /// Target aspect ratio (width, height), applied when editing is allowed
    pub aspect: (u32, u32),
    /// JPEG quality (1-100) for the cached thumbnail
    pub quality: u8,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            allow_editing: true,
            aspect: (4, 3),
            quality: 80,
        }
    }
}

/// Requested position resolution.
/// The network lookup is best-effort; this is a hint, not a guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accuracy {
    High,
    Balanced,
}

/// Options for a position lookup
#[derive(Debug, Clone, Copy)]
pub struct PositionRequest {
    pub accuracy: Accuracy,
}

impl Default for PositionRequest {
    fn default() -> Self {
        Self {
            accuracy: Accuracy::High,
        }
    }
}

/// Photo capture failures. Cancellation is not an error
/// (`capture_photo` reports it as `Ok(None)`).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CaptureError {
    #[error("camera permission denied")]
    PermissionDenied,
    #[error("could not take photo: {0}")]
    Failed(String),
}

/// Position lookup failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("could not fetch location: {0}")]
    Unavailable(String),
}
