use crate::AppCommand;

use tray_icon::menu::MenuId;
use vpn_tray_core::IconState;

/// Menu item IDs, mapped to the commands they trigger.
///
/// `MenuId` is `Send`, so this can move to the async runtime while the menu
/// itself stays on the main thread.
#[derive(Debug, Clone)]
pub struct TrayMenuIds {
    pub(crate) unsecured: MenuId,
    pub(crate) securing: MenuId,
    pub(crate) secured: MenuId,
    pub(crate) monochrome: MenuId,
    pub(crate) exit: MenuId,
}

impl TrayMenuIds {
    /// Command for a clicked menu item, if it is one of ours.
    pub fn command_for(&self, id: &MenuId) -> Option<AppCommand> {
        if *id == self.unsecured {
            Some(AppCommand::SetConnectionState(IconState::Unsecured))
        } else if *id == self.securing {
            Some(AppCommand::SetConnectionState(IconState::Securing))
        } else if *id == self.secured {
            Some(AppCommand::SetConnectionState(IconState::Secured))
        } else if *id == self.monochrome {
            Some(AppCommand::ToggleMonochrome)
        } else if *id == self.exit {
            Some(AppCommand::Shutdown)
        } else {
            None
        }
    }
}
