/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A user message scoring above this is worth remembering.
pub const IMPORTANCE_GATE: f64 = 0.3;

/// Messages longer than this many characters get a length bonus.
pub const LONG_MESSAGE_CHARS: usize = 100;

/// Maximum distinct topics rendered into a fold summary.
pub const MAX_SUMMARY_TOPICS: usize = 5;

/// Maximum user queries rendered into a fold summary.
pub const MAX_SUMMARY_QUERIES: usize = 3;

/// Character budget per rendered query inside a fold summary.
pub const SUMMARY_QUERY_CHARS: usize = 50;
