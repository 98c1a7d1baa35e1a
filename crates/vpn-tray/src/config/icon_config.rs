use crate::config::{default_frame_interval_ms, default_monochrome};

use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

/// Tray icon artwork and animation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconConfig {
    /// Start with the monochrome artwork.
    #[serde(default = "default_monochrome")]
    pub monochrome: bool,
    /// Time each animation frame stays on screen.
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
    /// Directory holding the per-platform `lock-<n>` images.
    #[serde(default)]
    pub assets_dir: Option<PathBuf>,
}

impl IconConfig {
    /// Animation speed as a duration.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            monochrome: default_monochrome(),
            frame_interval_ms: default_frame_interval_ms(),
            assets_dir: None,
        }
    }
}
