use crate::frames::{
    FallbackSuffix, TemplateSuffix, ThemeQuery, ThemeSuffixResolver, UnsupportedThemeQuery,
};

#[cfg(target_os = "windows")]
use crate::frames::{RegistryThemeQuery, RegistryThemeSuffix};

/// Desktop platform the tray icon is rendered on.
///
/// Decides where the artwork lives, which image format it uses and how the
/// monochrome variant is picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// macOS menu bar.
    MacOs,
    /// Windows notification area.
    Windows,
    /// Linux and any other desktop.
    Linux,
}

impl Platform {
    /// Platform this binary was compiled for.
    pub const fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }

    /// Directory segment under the icon base directory.
    pub const fn segment(self) -> &'static str {
        match self {
            Platform::MacOs => "darwin",
            Platform::Windows => "win32",
            Platform::Linux => "linux",
        }
    }

    /// File extension of the frame images.
    pub const fn extension(self) -> &'static str {
        match self {
            Platform::Windows => "ico",
            Platform::MacOs | Platform::Linux => "png",
        }
    }

    /// Suffix resolver for monochrome artwork on this platform.
    ///
    /// Windows only gets the registry-backed resolver when running on
    /// Windows; asking for it elsewhere falls back to the fixed suffix.
    pub fn suffix_resolver(self) -> Box<dyn ThemeSuffixResolver> {
        match self {
            Platform::MacOs => Box::new(TemplateSuffix),
            #[cfg(target_os = "windows")]
            Platform::Windows => Box::new(RegistryThemeSuffix::new(RegistryThemeQuery)),
            _ => Box::new(FallbackSuffix),
        }
    }

    /// System theme query for this platform, used to notice theme changes.
    pub fn theme_query(self) -> Box<dyn ThemeQuery> {
        #[cfg(target_os = "windows")]
        if self == Platform::Windows {
            return Box::new(RegistryThemeQuery);
        }

        Box::new(UnsupportedThemeQuery)
    }
}
