use std::{io::ErrorKind, panic::Location, path::Path};

use error_location::ErrorLocation;
use tracing::trace;
use vpn_tray_core::{Bitmap, CoreResult, ImageLoader, TrayError};

/// Loads PNG and ICO frames from disk with the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsImageLoader;

impl ImageLoader for FsImageLoader {
    #[track_caller]
    fn load_image(&self, path: &Path) -> CoreResult<Bitmap> {
        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => TrayError::ImageNotFound {
                path: path.to_path_buf(),
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            _ => TrayError::ImageDecodeFailed {
                path: path.to_path_buf(),
                reason: format!("Failed to read image: {}", e),
                location: ErrorLocation::from(Location::caller()),
            },
        })?;

        let img = image::load_from_memory(&bytes).map_err(|e| TrayError::ImageDecodeFailed {
            path: path.to_path_buf(),
            reason: format!("Failed to decode image: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let rgba = img.into_rgba8();
        let (width, height) = (rgba.width(), rgba.height());
        trace!(path = ?path, width, height, "Image decoded");

        Ok(Bitmap::from_rgba(rgba.into_raw(), width, height))
    }
}
