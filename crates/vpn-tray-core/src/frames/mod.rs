mod bitmap;
mod frame_set;
mod platform;
mod theme;

pub use {
    bitmap::Bitmap,
    frame_set::{FrameSet, ImageFrameSet, ImageLoader},
    platform::Platform,
    theme::{
        FallbackSuffix, MONOCHROME_FALLBACK_SUFFIX, RegistryThemeSuffix, SystemTheme,
        TemplateSuffix, ThemeQuery, ThemeSuffixResolver, UnsupportedThemeQuery,
    },
};

#[cfg(target_os = "windows")]
pub use theme::RegistryThemeQuery;

/// Number of frames in the lock animation.
pub const FRAME_COUNT: usize = 10;

/// Zero-based index into a [`FrameSet`], always within `0..FRAME_COUNT`.
pub type FrameIndex = usize;
