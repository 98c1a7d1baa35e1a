use crate::{TrayCommand, TraySender};

use std::sync::{Mutex, PoisonError};

use tracing::warn;
use vpn_tray_core::{Bitmap, FrameIndex, IconSink};

/// Forwards animation frames to the UI thread.
///
/// `TrayIcon` is `!Send`, so the animation timer cannot touch it directly;
/// each frame is posted to the tao event loop instead.
pub struct TrayIconSink<S> {
    sender: Mutex<S>,
}

impl<S: TraySender> TrayIconSink<S> {
    /// Wrap a tray command sender.
    pub fn new(sender: S) -> Self {
        Self {
            sender: Mutex::new(sender),
        }
    }
}

impl<S: TraySender> IconSink for TrayIconSink<S> {
    fn set_icon(&self, frame: FrameIndex, bitmap: &Bitmap) {
        let sender = self.sender.lock().unwrap_or_else(PoisonError::into_inner);
        if !sender.send_tray(TrayCommand::SetIcon(bitmap.clone())) {
            warn!(frame, "Event loop closed, dropping tray frame");
        }
    }
}
