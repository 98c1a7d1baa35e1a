use crate::config::default_theme_poll_interval_secs;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// System theme watcher configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Seconds between theme queries. `0` disables the watcher.
    #[serde(default = "default_theme_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

impl ThemeConfig {
    /// Poll interval, or `None` when watching is disabled.
    pub fn poll_interval(&self) -> Option<Duration> {
        (self.poll_interval_secs > 0).then(|| Duration::from_secs(self.poll_interval_secs))
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_theme_poll_interval_secs(),
        }
    }
}
