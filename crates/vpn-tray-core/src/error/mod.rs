use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Tray icon errors with source location tracking.
#[derive(Error, Debug)]
pub enum TrayError {
    /// One frame of a set failed to load, so the whole set failed.
    #[error("Failed to load frame {frame}: {source} {location}")]
    FrameLoadFailed {
        /// One-based frame number as used in the asset file name.
        frame: usize,
        /// The loader error for that frame.
        #[source]
        source: Box<TrayError>,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// No image exists at the resolved path.
    #[error("Image not found at {path:?}: {reason} {location}")]
    ImageNotFound {
        /// Path that was resolved for the image.
        path: PathBuf,
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Image bytes were read but could not be decoded into a bitmap.
    #[error("Image decode failed for {path:?}: {reason} {location}")]
    ImageDecodeFailed {
        /// Path of the undecodable image.
        path: PathBuf,
        /// Description of the decode error.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The system theme query ran but produced no usable answer.
    #[error("Theme query failed: {reason} {location}")]
    ThemeQueryFailed {
        /// Description of the query failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The current platform has no way to query the system theme.
    #[error("Theme query not supported on this platform {location}")]
    ThemeQueryUnsupported {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A background loading task was cancelled or panicked.
    #[error("Background task failed: {reason} {location}")]
    TaskFailed {
        /// Description of the task failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`TrayError`].
pub type Result<T> = std::result::Result<T, TrayError>;
