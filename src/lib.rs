// Path Trim Library
// Utilities for relativizing slash-delimited paths and trimming string edges

// Path relativization - common-prefix removal over slash-delimited segments
pub mod relativize;

// Edge trimming - strip leading and trailing runs of caller-chosen characters
pub mod trim;

// Error text extraction
pub mod errors;

// Re-export commonly used items for convenience
pub use errors::error_message;
pub use relativize::relativize;
pub use trim::{trim_edges, TrimSet};
