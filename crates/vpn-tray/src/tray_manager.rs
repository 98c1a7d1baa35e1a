//! System tray icon driven by the animation controller.
//!
//! Owns the platform tray icon and its context menu. The menu stands in for
//! the connection-state manager: it can put the icon in any of the three
//! states, toggle the monochrome artwork, and exit.

use crate::{AppError, AppResult, TrayMenuIds};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{info, instrument, trace};
use tray_icon::menu::{CheckMenuItem, Menu, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};
use vpn_tray_core::{Bitmap, IconState};

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    menu_ids: TrayMenuIds,
}

impl TrayManager {
    /// Create the tray icon and menu. The icon image arrives with the first
    /// animation frame.
    #[track_caller]
    #[instrument]
    pub fn new(monochrome: bool) -> AppResult<Self> {
        let menu = Menu::new();

        let unsecured_item = MenuItem::new("Unsecured", true, None);
        let securing_item = MenuItem::new("Securing", true, None);
        let secured_item = MenuItem::new("Secured", true, None);
        let monochrome_item = CheckMenuItem::new("Monochrome icon", true, monochrome, None);
        let exit_item = MenuItem::new("Exit", true, None);

        let menu_ids = TrayMenuIds {
            unsecured: unsecured_item.id().clone(),
            securing: securing_item.id().clone(),
            secured: secured_item.id().clone(),
            monochrome: monochrome_item.id().clone(),
            exit: exit_item.id().clone(),
        };

        menu.append_items(&[
            &unsecured_item,
            &securing_item,
            &secured_item,
            &PredefinedMenuItem::separator(),
            &monochrome_item,
            &PredefinedMenuItem::separator(),
            &exit_item,
        ])
        .map_err(|e| AppError::TrayUiError {
            reason: format!("Failed to build tray menu: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(Self::tooltip(IconState::Unsecured))
            .with_menu(Box::new(menu))
            .build()
            .map_err(|e| AppError::TrayUiError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon initialized");

        Ok(Self {
            tray_icon,
            menu_ids,
        })
    }

    /// Show an animation frame.
    #[track_caller]
    pub fn set_icon(&mut self, bitmap: &Bitmap) -> AppResult<()> {
        trace!(width = bitmap.width(), height = bitmap.height(), "Setting tray icon");

        let icon = Icon::from_rgba(bitmap.rgba().to_vec(), bitmap.width(), bitmap.height())
            .map_err(|e| AppError::TrayUiError {
                reason: format!("Failed to create icon from RGBA: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.tray_icon
            .set_icon(Some(icon))
            .map_err(|e| AppError::TrayUiError {
                reason: format!("Failed to update icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Update the tooltip for a connection state.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn update_state(&mut self, state: IconState) -> AppResult<()> {
        self.tray_icon
            .set_tooltip(Some(Self::tooltip(state)))
            .map_err(|e| AppError::TrayUiError {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// IDs of the menu items.
    pub fn menu_ids(&self) -> &TrayMenuIds {
        &self.menu_ids
    }

    fn tooltip(state: IconState) -> &'static str {
        match state {
            IconState::Unsecured => "VPN - Unsecured connection",
            IconState::Securing => "VPN - Creating secure connection...",
            IconState::Secured => "VPN - Secure connection",
        }
    }
}
