//! Shared utilities for skinlab-cli
//!
//! Argument parsing and text formatting used by the `skinlab` binary.

pub mod format;
pub mod parsers;

// Re-export commonly used items at the crate root for convenience
pub use parsers::{parse_environment, parse_roi};
