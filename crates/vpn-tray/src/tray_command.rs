use tao::event_loop::EventLoopProxy;
use vpn_tray_core::{Bitmap, IconState};

/// Commands sent from the async runtime to the main UI thread.
///
/// The main thread owns `TrayManager` (because `TrayIcon` is `!Send`),
/// so all tray mutations and process lifecycle events flow through this enum.
#[derive(Debug, Clone)]
pub enum TrayCommand {
    /// Show a new animation frame as the tray icon.
    SetIcon(Bitmap),
    /// Update the tooltip for a new connection state.
    SetState(IconState),
    /// Shut down the application. The main thread will exit the event loop.
    Shutdown,
}

/// Delivery channel for [`TrayCommand`]s.
pub trait TraySender: Send + 'static {
    /// Post a command. Returns `false` if the receiving side is gone.
    fn send_tray(&self, command: TrayCommand) -> bool;
}

impl TraySender for EventLoopProxy<TrayCommand> {
    fn send_tray(&self, command: TrayCommand) -> bool {
        self.send_event(command).is_ok()
    }
}

impl TraySender for std::sync::mpsc::Sender<TrayCommand> {
    fn send_tray(&self, command: TrayCommand) -> bool {
        self.send(command).is_ok()
    }
}
