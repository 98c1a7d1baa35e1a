//! VPN tray: animated lock icon that follows the VPN connection state.

mod app;
mod app_command;
mod config;
mod error;
mod image_loader;
mod logging;
mod theme_watcher;
mod tray_command;
mod tray_icon_sink;
mod tray_manager;
mod tray_menu;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    error::{AppError, Result as AppResult},
    image_loader::FsImageLoader,
    theme_watcher::ThemeWatcher,
    tray_command::{TrayCommand, TraySender},
    tray_icon_sink::TrayIconSink,
    tray_manager::TrayManager,
    tray_menu::TrayMenuIds,
};

use crate::{config::Config, logging::init_logging};

use std::sync::Arc;

use tao::{
    event::Event,
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tokio::sync::{mpsc, watch};
use tracing::error;
use vpn_tray_core::{
    ControllerConfig, IconState, IconStyle, ImageFrameSet, Platform, TrayIconController,
};

/// Application entry point.
fn main() {
    let log_dir = Config::log_dir().ok();
    // Dropping the guard flushes the file log, so it lives as long as main.
    let _log_guard = init_logging(log_dir.as_deref());

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let assets_dir = match config.assets_dir() {
        Ok(dir) => dir,
        Err(e) => {
            error!("Failed to resolve icon directory: {:?}", e);
            std::process::exit(1);
        }
    };

    let event_loop = EventLoopBuilder::<TrayCommand>::with_user_event().build();
    let tray_proxy = event_loop.create_proxy();

    // TrayManager lives on the main thread - TrayIcon is !Send on all platforms.
    let mut tray_manager = match TrayManager::new(config.icon.monochrome) {
        Ok(tm) => tm,
        Err(e) => {
            error!("Failed to create TrayManager: {:?}", e);
            std::process::exit(1);
        }
    };

    // Moved into the runtime thread on the first Init event.
    let mut startup = Some((config, assets_dir));

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::UserEvent(cmd) => match cmd {
                TrayCommand::SetIcon(bitmap) => {
                    if let Err(e) = tray_manager.set_icon(&bitmap) {
                        error!(error = ?e, "Failed to update tray icon");
                    }
                }
                TrayCommand::SetState(state) => {
                    if let Err(e) = tray_manager.update_state(state) {
                        error!(error = ?e, "Failed to update tray tooltip");
                    }
                }
                TrayCommand::Shutdown => {
                    *control_flow = ControlFlow::ExitWithCode(0);
                }
            },
            Event::NewEvents(tao::event::StartCause::Init) => {
                let Some((config, assets_dir)) = startup.take() else {
                    return;
                };

                #[cfg(target_os = "macos")]
                unsafe {
                    use core_foundation::runloop::{CFRunLoopGetMain, CFRunLoopWakeUp};
                    CFRunLoopWakeUp(CFRunLoopGetMain());
                }

                let (command_tx, command_rx) = mpsc::channel(32);
                let (shutdown_tx, shutdown_rx) = watch::channel(false);
                let menu_ids = tray_manager.menu_ids().clone();
                let tray_proxy = tray_proxy.clone();

                // Spawn tokio runtime on separate thread.
                // TrayManager stays on the main thread.
                std::thread::spawn(move || {
                    let rt = match tokio::runtime::Runtime::new() {
                        Ok(rt) => rt,
                        Err(e) => {
                            error!("Failed to create tokio runtime: {:?}", e);
                            std::process::exit(1);
                        }
                    };

                    rt.block_on(async {
                        let platform = Platform::current();
                        let frames =
                            ImageFrameSet::new(assets_dir, platform, Arc::new(FsImageLoader));
                        let sink = Arc::new(TrayIconSink::new(tray_proxy.clone()));
                        let controller = TrayIconController::new(
                            sink,
                            frames,
                            ControllerConfig {
                                icon_style: IconStyle::from_monochrome(config.icon.monochrome),
                                current_state: IconState::Unsecured,
                            },
                        )
                        .with_speed(config.icon.frame_interval());

                        let theme_watcher = config.theme.poll_interval().map(|interval| {
                            ThemeWatcher::new(
                                Arc::from(platform.theme_query()),
                                interval,
                                command_tx.clone(),
                            )
                        });

                        let app = App {
                            controller,
                            monochrome: config.icon.monochrome,
                            tray_tx: tray_proxy,
                            menu_ids,
                            command_rx,
                            shutdown_tx,
                        };

                        tokio::join!(
                            async {
                                if let Some(watcher) = theme_watcher {
                                    if let Err(e) = watcher.run(shutdown_rx).await {
                                        error!(error = ?e, "Theme watcher error");
                                    }
                                }
                            },
                            async {
                                if let Err(e) = app.run().await {
                                    error!(error = ?e, "App error");
                                }
                            }
                        );
                    });
                });
            }
            _ => {}
        }
    });
}
