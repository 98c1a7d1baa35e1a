//! Monochrome artwork selection.
//!
//! Monochrome frames come in variants that must contrast with the system
//! taskbar or menu bar. Each platform resolves the file name suffix for that
//! variant differently; all of them degrade to a fixed suffix instead of
//! failing.

use crate::{CoreResult, TrayError};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, warn};

/// Suffix used whenever the system theme cannot be determined.
pub const MONOCHROME_FALLBACK_SUFFIX: &str = "_white";

const TEMPLATE_SUFFIX: &str = "Template";
const LIGHT_THEME_SUFFIX: &str = "_black";

/// Light or dark system appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemTheme {
    /// Light taskbar; dark artwork is needed.
    Light,
    /// Dark taskbar; light artwork is needed.
    Dark,
}

impl SystemTheme {
    /// Interpret a `SystemUsesLightTheme`-style flag (`1` light, `0` dark).
    #[track_caller]
    pub fn from_light_flag(value: u32) -> CoreResult<Self> {
        match value {
            1 => Ok(SystemTheme::Light),
            0 => Ok(SystemTheme::Dark),
            other => Err(TrayError::ThemeQueryFailed {
                reason: format!("Unexpected light theme flag: {}", other),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

/// Source of the current system theme.
pub trait ThemeQuery: Send + Sync {
    /// Ask the system whether it is using a light or dark theme.
    ///
    /// May block; callers run it off the async executor.
    fn query_light_or_dark(&self) -> CoreResult<SystemTheme>;
}

/// Resolves the file name suffix of monochrome frames.
pub trait ThemeSuffixResolver: Send + Sync {
    /// Suffix appended to `lock-<n>` for monochrome artwork. Never fails.
    fn monochrome_suffix(&self) -> &'static str;
}

/// macOS template images; the system recolors them itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateSuffix;

impl ThemeSuffixResolver for TemplateSuffix {
    fn monochrome_suffix(&self) -> &'static str {
        TEMPLATE_SUFFIX
    }
}

/// Fixed white artwork for platforms without a theme query.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackSuffix;

impl ThemeSuffixResolver for FallbackSuffix {
    fn monochrome_suffix(&self) -> &'static str {
        MONOCHROME_FALLBACK_SUFFIX
    }
}

/// Picks black or white artwork from a system theme query.
#[derive(Debug, Clone, Default)]
pub struct RegistryThemeSuffix<Q> {
    query: Q,
}

impl<Q: ThemeQuery> RegistryThemeSuffix<Q> {
    /// Wrap a theme query.
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

impl<Q: ThemeQuery> ThemeSuffixResolver for RegistryThemeSuffix<Q> {
    fn monochrome_suffix(&self) -> &'static str {
        match self.query.query_light_or_dark() {
            Ok(SystemTheme::Light) => LIGHT_THEME_SUFFIX,
            Ok(SystemTheme::Dark) => MONOCHROME_FALLBACK_SUFFIX,
            Err(e) => {
                warn!(error = %e, "Theme query failed, using fallback suffix");
                MONOCHROME_FALLBACK_SUFFIX
            }
        }
    }
}

/// Theme query for platforms that have none.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedThemeQuery;

impl ThemeQuery for UnsupportedThemeQuery {
    #[track_caller]
    fn query_light_or_dark(&self) -> CoreResult<SystemTheme> {
        debug!("No theme query on this platform");
        Err(TrayError::ThemeQueryUnsupported {
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

/// Reads `SystemUsesLightTheme` from the current user's personalization key.
#[cfg(target_os = "windows")]
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryThemeQuery;

#[cfg(target_os = "windows")]
impl ThemeQuery for RegistryThemeQuery {
    #[track_caller]
    fn query_light_or_dark(&self) -> CoreResult<SystemTheme> {
        use winreg::RegKey;
        use winreg::enums::HKEY_CURRENT_USER;

        const PERSONALIZE_KEY: &str =
            r"Software\Microsoft\Windows\CurrentVersion\Themes\Personalize";

        let hkcu = RegKey::predef(HKEY_CURRENT_USER);
        let key = hkcu
            .open_subkey(PERSONALIZE_KEY)
            .map_err(|e| TrayError::ThemeQueryFailed {
                reason: format!("Failed to open personalization key: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let value: u32 =
            key.get_value("SystemUsesLightTheme")
                .map_err(|e| TrayError::ThemeQueryFailed {
                    reason: format!("Failed to read SystemUsesLightTheme: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;

        let theme = SystemTheme::from_light_flag(value)?;
        debug!(?theme, "Queried system theme");

        Ok(theme)
    }
}
