use crate::{AppCommand, AppResult, TrayCommand, TrayMenuIds, TraySender};

use std::{ops::ControlFlow, time::Duration};

use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, instrument, warn};
use tray_icon::menu::MenuEvent;
use vpn_tray_core::{IconState, IconStyle, TrayIconController};

/// Main application state.
///
/// Runs on the async runtime thread and plays the part of the connection
/// state manager: every command ends up as a call into the tray icon
/// controller. Tray UI changes other than frames go back to the main thread
/// through `tray_tx` because `TrayIcon` is `!Send`.
pub struct App<S: TraySender> {
    pub(crate) controller: TrayIconController,
    pub(crate) monochrome: bool,
    pub(crate) tray_tx: S,
    pub(crate) menu_ids: TrayMenuIds,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    pub(crate) shutdown_tx: watch::Sender<bool>,
}

impl<S: TraySender> App<S> {
    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("VPN tray starting");

        if let Err(e) = self.controller.init().await {
            error!(error = ?e, "Failed to initialize tray icon animation");
        }

        // Tray event forwarding via single persistent blocking task.
        //
        // MenuEvent::receiver() returns a crossbeam_channel::Receiver which
        // HAS blocking recv() -- zero polling, instant response, one thread.
        //
        // Shutdown: when menu_event_rx is dropped (main loop breaks),
        // menu_event_tx.blocking_send() fails, breaking the blocking loop.
        let (menu_event_tx, mut menu_event_rx) = mpsc::channel(32);
        let menu_handle = tokio::task::spawn_blocking(move || {
            let receiver = MenuEvent::receiver();
            while let Ok(event) = receiver.recv() {
                if menu_event_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        loop {
            let command = tokio::select! {
                Some(event) = menu_event_rx.recv() => {
                    match self.menu_ids.command_for(&event.id) {
                        Some(command) => command,
                        None => continue,
                    }
                }

                Some(command) = self.command_rx.recv() => command,

                else => {
                    info!("All channels closed, shutting down");
                    let _ = self.handle_command(AppCommand::Shutdown).await;
                    break;
                }
            };

            if self.handle_command(command).await.is_break() {
                break;
            }
        }

        drop(menu_event_rx);

        match tokio::time::timeout(Duration::from_secs(1), menu_handle).await {
            Ok(Ok(())) => info!("Menu event forwarder stopped cleanly"),
            Ok(Err(e)) => error!(error = ?e, "Menu event forwarder task panicked"),
            Err(_) => info!(
                "Menu event forwarder did not stop within timeout, \
                     will be cleaned up on exit"
            ),
        }

        let _ = self.shutdown_tx.send(true);
        info!("VPN tray shut down successfully");

        Ok(())
    }

    /// Apply one command to the tray icon controller.
    #[instrument(skip(self))]
    pub(crate) async fn handle_command(&mut self, command: AppCommand) -> ControlFlow<()> {
        match command {
            AppCommand::SetConnectionState(state) => self.set_connection_state(state),
            AppCommand::ToggleMonochrome => {
                self.monochrome = !self.monochrome;
                if let Err(e) = self
                    .controller
                    .set_use_monochromatic_icon(self.monochrome)
                    .await
                {
                    error!(error = ?e, monochrome = self.monochrome, "Failed to reload icons");
                }
            }
            AppCommand::ThemeChanged(theme) => {
                if self.controller.icon_style() == IconStyle::Monochrome {
                    info!(?theme, "Reloading monochrome icons for new theme");
                    if let Err(e) = self.controller.reload_images().await {
                        error!(error = ?e, "Failed to reload icons after theme change");
                    }
                } else {
                    debug!(?theme, "Theme changed, color icons unaffected");
                }
            }
            AppCommand::Shutdown => {
                info!("Shutdown requested");
                self.controller.dispose();
                if !self.tray_tx.send_tray(TrayCommand::Shutdown) {
                    warn!("Event loop already closed");
                }
                return ControlFlow::Break(());
            }
        }

        ControlFlow::Continue(())
    }

    fn set_connection_state(&mut self, state: IconState) {
        if self.controller.icon_state() == state {
            return;
        }

        self.controller.animate_to_icon(state);
        if !self.tray_tx.send_tray(TrayCommand::SetState(state)) {
            warn!(?state, "Event loop closed, tooltip not updated");
        }
        info!(?state, "Connection state changed");
    }
}
