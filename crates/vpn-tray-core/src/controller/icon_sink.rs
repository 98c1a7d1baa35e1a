use crate::frames::{Bitmap, FrameIndex};

/// The platform tray primitive the controller draws into.
///
/// Called from the animation timer task on every visible frame change, so
/// implementations must be cheap and must not block on the UI thread.
pub trait IconSink: Send + Sync + 'static {
    /// Show `bitmap` as the tray icon. `frame` identifies which frame it is.
    fn set_icon(&self, frame: FrameIndex, bitmap: &Bitmap);
}
