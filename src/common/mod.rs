//! Common types and utilities shared by the encoders and sinks.

// Submodule declarations
pub mod error;
pub mod number;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
