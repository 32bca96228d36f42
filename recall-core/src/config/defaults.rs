//! Default values for every config section.

/// Message count at which a context is folded.
pub const DEFAULT_COMPRESSION_THRESHOLD: usize = 20;

/// Raw messages kept after a fold.
pub const DEFAULT_KEEP_RECENT: usize = 10;

/// Recent messages included in a prompt window.
pub const DEFAULT_WINDOW_MESSAGES: usize = 15;

/// High-importance messages considered for suggestions.
pub const DEFAULT_SUGGESTION_MESSAGES: usize = 5;

/// Minimum importance score for a message to yield suggestions.
pub const DEFAULT_SUGGESTION_MIN_SCORE: f64 = crate::constants::IMPORTANCE_GATE;
