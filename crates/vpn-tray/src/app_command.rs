use vpn_tray_core::{IconState, SystemTheme};

/// Commands sent to the main application loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// The VPN connection moved to a new state.
    SetConnectionState(IconState),
    /// Flip between color and monochrome artwork.
    ToggleMonochrome,
    /// The system switched between light and dark theme.
    ThemeChanged(SystemTheme),
    /// Request application shutdown.
    Shutdown,
}
