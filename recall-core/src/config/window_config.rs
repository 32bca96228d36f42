use serde::{Deserialize, Serialize};

use super::defaults;

/// Prompt window configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Recent raw messages included in a window.
    pub max_messages: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            max_messages: defaults::DEFAULT_WINDOW_MESSAGES,
        }
    }
}
