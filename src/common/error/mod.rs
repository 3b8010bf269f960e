//! Error types shared by the encoders, sinks and the CLI.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
