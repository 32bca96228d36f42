use serde::{Deserialize, Serialize};

use super::defaults;

/// Fold policy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressionConfig {
    /// Fold once a context holds at least this many messages.
    pub threshold: usize,
    /// Raw messages kept verbatim after a fold.
    pub keep_recent: usize,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            threshold: defaults::DEFAULT_COMPRESSION_THRESHOLD,
            keep_recent: defaults::DEFAULT_KEEP_RECENT,
        }
    }
}
