use crate::frames::FrameIndex;

/// Connection-driven states the tray icon can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconState {
    /// Tunnel is down; traffic is not protected.
    Unsecured,
    /// Tunnel is being established.
    Securing,
    /// Tunnel is up.
    Secured,
}

impl IconState {
    /// Frame the animation should settle on for this state.
    ///
    /// `Securing` sits on the last frame so that moving to `Secured` is a
    /// single step back.
    pub const fn target_frame(self) -> FrameIndex {
        match self {
            IconState::Unsecured => 0,
            IconState::Securing => 9,
            IconState::Secured => 8,
        }
    }
}

/// Rendering style for the tray icon artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconStyle {
    /// Full-color lock artwork.
    #[default]
    Color,
    /// Single-color template artwork that follows the system theme.
    Monochrome,
}

impl IconStyle {
    /// Map the user's "use monochromatic icon" preference to a style.
    pub const fn from_monochrome(flag: bool) -> Self {
        if flag {
            IconStyle::Monochrome
        } else {
            IconStyle::Color
        }
    }
}
