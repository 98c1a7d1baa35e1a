mod icon_config;
#[allow(clippy::module_inception)]
mod config;
mod theme_config;

pub(crate) use {config::Config, icon_config::IconConfig, theme_config::ThemeConfig};

pub(crate) const DEFAULT_MONOCHROME: bool = false;
pub(crate) const DEFAULT_FRAME_INTERVAL_MS: u64 = 100;
pub(crate) const DEFAULT_THEME_POLL_INTERVAL_SECS: u64 = 5;

pub(crate) fn default_monochrome() -> bool {
    DEFAULT_MONOCHROME
}

pub(crate) fn default_frame_interval_ms() -> u64 {
    DEFAULT_FRAME_INTERVAL_MS
}

pub(crate) fn default_theme_poll_interval_secs() -> u64 {
    DEFAULT_THEME_POLL_INTERVAL_SECS
}
