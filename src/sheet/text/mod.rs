//! Text-based export formats (CSV, TSV, SpreadsheetML).
//!
//! Every writer here is a pure function from a [`Dataset`](crate::sheet::Dataset)
//! to a `String`, returning `None` when there is nothing to export.
//!
//! # Example
//!
//! ```rust
//! use report_export::sheet::{Dataset, Record};
//! use report_export::sheet::text::{encode_csv, encode_spreadsheet};
//!
//! let dataset: Dataset = vec![
//!     Record::new().with("kitchen", "Amma's, Ward 4").with("orders", 12i64),
//!     Record::new().with("kitchen", "Green Leaf").with("orders", 7i64),
//! ]
//! .into();
//!
//! let csv = encode_csv(&dataset).unwrap();
//! assert_eq!(csv, "kitchen,orders\n\"Amma's, Ward 4\",12\nGreen Leaf,7");
//!
//! let xml = encode_spreadsheet(&dataset).unwrap();
//! assert!(xml.contains("<Worksheet ss:Name=\"Report\">"));
//!
//! assert!(encode_csv(&Dataset::new()).is_none());
//! ```

pub mod formats;

pub use formats::{CsvConfig, WORKSHEET_NAME, encode_csv, encode_csv_with, encode_spreadsheet};
