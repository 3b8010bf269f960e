//! Format-specific writers for text-based exports.

pub mod delimited;
pub mod spreadsheet_xml;

// Re-export common types and functions
pub use delimited::{CsvConfig, encode_csv, encode_csv_with};
pub use spreadsheet_xml::{WORKSHEET_NAME, encode_spreadsheet};
