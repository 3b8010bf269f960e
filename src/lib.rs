//! report-export - CSV and SpreadsheetML export for admin report datasets
//!
//! The crate turns ordered, flat datasets into byte-exact CSV text or a
//! SpreadsheetML 2003 document (`.xls`) and hands the result to a sink.
//!
//! # Features
//!
//! - **Typed cells**: values carry their type, so numeric strings stay strings
//! - **Stable column order**: the first record's field order is the header row
//! - **CSV quoting**: fields with delimiters or quotes are quoted, quotes doubled
//! - **SpreadsheetML**: one `Report` worksheet with `Number`/`String` typed cells
//! - **Sinks**: filesystem delivery through a staging file, or in-memory capture
//!
//! # Example
//!
//! ```no_run
//! use report_export::export::{DirectorySink, ExportFormat, export};
//! use report_export::sheet::{Dataset, Record};
//!
//! # fn main() -> Result<(), report_export::Error> {
//! let dataset: Dataset = vec![
//!     Record::new().with("kitchen_name", "Green Leaf").with("total_orders", 42i64),
//! ]
//! .into();
//!
//! let sink = DirectorySink::new("exports");
//! export(&dataset, "cook-performance", ExportFormat::Spreadsheet, &sink)?;
//! # Ok(())
//! # }
//! ```

/// Errors, XML escaping and number formatting shared by the writers
pub mod common;

/// Export configuration loaded from YAML
pub mod config;

/// Encoding plus delivery through a [`FileSink`](export::FileSink)
pub mod export;

/// Typed admin report rows and the report export entry point
pub mod reports;

/// Cell values, records, datasets and the text writers
pub mod sheet;

pub use common::{Error, Result};
pub use export::{ExportFormat, ExportOutcome};
pub use sheet::{CellValue, Dataset, Record};
