//! System theme watcher.
//!
//! Polls the platform theme query and tells the application when the system
//! switches between light and dark, so monochrome artwork can be reloaded.
//! Platforms without a theme query stop watching right away.

use crate::{AppCommand, AppError, AppResult};

use std::{panic::Location, sync::Arc, time::Duration};

use error_location::ErrorLocation;
use tokio::{
    sync::{mpsc, watch},
    time::MissedTickBehavior,
};
use tracing::{debug, info, instrument, warn};
use vpn_tray_core::{SystemTheme, ThemeQuery, TrayError};

/// Polls the system theme and reports changes.
pub struct ThemeWatcher {
    query: Arc<dyn ThemeQuery>,
    interval: Duration,
    command_tx: mpsc::Sender<AppCommand>,
}

enum Observation {
    Theme(SystemTheme),
    Unknown,
    Unsupported,
}

impl ThemeWatcher {
    /// Create a watcher polling `query` every `interval`.
    pub fn new(
        query: Arc<dyn ThemeQuery>,
        interval: Duration,
        command_tx: mpsc::Sender<AppCommand>,
    ) -> Self {
        Self {
            query,
            interval,
            command_tx,
        }
    }

    /// Run the watcher until a shutdown signal is received.
    #[instrument(skip(self, shutdown_rx))]
    pub async fn run(&self, mut shutdown_rx: watch::Receiver<bool>) -> AppResult<()> {
        let mut last = match self.observe().await {
            Observation::Theme(theme) => Some(theme),
            Observation::Unknown => None,
            Observation::Unsupported => {
                info!("Theme query unsupported, theme watcher idle");
                return Ok(());
            }
        };

        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick completes immediately; the initial theme is already known.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Theme watcher shutting down");
                    break;
                }
                _ = ticker.tick() => {
                    let Observation::Theme(theme) = self.observe().await else {
                        continue;
                    };
                    if last != Some(theme) {
                        debug!(?theme, previous = ?last, "System theme changed");
                        last = Some(theme);
                        self.command_tx
                            .send(AppCommand::ThemeChanged(theme))
                            .await
                            .map_err(|e| AppError::ChannelSendFailed {
                                message: format!("Failed to send ThemeChanged: {}", e),
                                location: ErrorLocation::from(Location::caller()),
                            })?;
                    }
                }
            }
        }

        Ok(())
    }

    async fn observe(&self) -> Observation {
        let query = Arc::clone(&self.query);
        match tokio::task::spawn_blocking(move || query.query_light_or_dark()).await {
            Ok(Ok(theme)) => Observation::Theme(theme),
            Ok(Err(TrayError::ThemeQueryUnsupported { .. })) => Observation::Unsupported,
            Ok(Err(e)) => {
                debug!(error = %e, "Theme query failed");
                Observation::Unknown
            }
            Err(e) => {
                warn!(error = %e, "Theme query task failed");
                Observation::Unknown
            }
        }
    }
}
