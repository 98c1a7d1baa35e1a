use std::sync::Arc;

/// Decoded RGBA8 image ready to hand to the tray primitive.
///
/// The pixel buffer is shared, so cloning a `Bitmap` is cheap and the same
/// frame can travel from the loader to the timer task and on to the UI thread
/// without copying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    rgba: Arc<[u8]>,
    width: u32,
    height: u32,
}

impl Bitmap {
    /// Wrap raw RGBA8 pixels.
    pub fn from_rgba(rgba: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(rgba.len(), width as usize * height as usize * 4);
        Self {
            rgba: rgba.into(),
            width,
            height,
        }
    }

    /// Raw RGBA8 pixel data, row-major.
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }
}
