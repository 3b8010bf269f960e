//! Tabular data model and encoders.
//!
//! - [`CellValue`]: explicitly typed scalar cell
//! - [`Record`]: ordered field name to value mapping, one per output row
//! - [`Dataset`]: ordered records; the first record fixes the header row
//! - [`text`]: CSV and SpreadsheetML writers

// Submodule declarations
pub mod record;
pub mod text;
pub mod types;

// Re-exports
pub use record::{Dataset, Record, ToRecord};
pub use types::{CellType, CellValue};
