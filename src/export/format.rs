//! Export formats and the artifacts they produce.

use crate::common::Error;
use crate::sheet::Dataset;
use crate::sheet::text::{CsvConfig, encode_csv_with, encode_spreadsheet};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma-separated values (`.csv`)
    #[default]
    Csv,
    /// SpreadsheetML 2003 document (`.xls`)
    #[serde(alias = "xls", alias = "excel")]
    Spreadsheet,
}

impl ExportFormat {
    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Spreadsheet => "xls",
        }
    }

    /// Media type handed to the sink along with the content.
    pub fn media_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv;charset=utf-8;",
            ExportFormat::Spreadsheet => "application/vnd.ms-excel",
        }
    }

    /// Full file name for a base name, e.g. `sales-report.csv`.
    pub fn file_name(&self, base: &str) -> String {
        format!("{}.{}", base, self.extension())
    }

    /// Encode with the default CSV settings.
    pub fn encode(&self, dataset: &Dataset) -> Option<String> {
        self.encode_with(dataset, &CsvConfig::default())
    }

    /// Encode, applying `csv` when this is the CSV format.
    pub fn encode_with(&self, dataset: &Dataset, csv: &CsvConfig) -> Option<String> {
        match self {
            ExportFormat::Csv => encode_csv_with(dataset, csv),
            ExportFormat::Spreadsheet => encode_spreadsheet(dataset),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "xls" | "excel" | "spreadsheet" => Ok(ExportFormat::Spreadsheet),
            other => Err(Error::Other(format!("unknown export format '{}'", other))),
        }
    }
}

/// Encoded content ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub content: String,
    pub filename: String,
    pub media_type: String,
}

impl ExportArtifact {
    pub fn new(
        content: impl Into<String>,
        filename: impl Into<String>,
        media_type: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            filename: filename.into(),
            media_type: media_type.into(),
        }
    }
}
