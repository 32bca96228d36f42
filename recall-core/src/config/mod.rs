pub mod defaults;

mod compression_config;
mod suggestion_config;
mod window_config;

pub use compression_config::CompressionConfig;
pub use suggestion_config::SuggestionConfig;
pub use window_config::WindowConfig;

use serde::{Deserialize, Serialize};

use crate::errors::RecallResult;

/// Top-level engine configuration. Every section has full defaults, so an
/// empty TOML document is a valid config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    pub compression: CompressionConfig,
    pub window: WindowConfig,
    pub suggestions: SuggestionConfig,
}

impl MemoryConfig {
    /// Parse a TOML document. Missing sections and fields fall back to defaults.
    pub fn from_toml(input: &str) -> RecallResult<Self> {
        Ok(toml::from_str(input)?)
    }
}
