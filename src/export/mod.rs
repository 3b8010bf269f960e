//! Export façade: encode a dataset and hand it to a sink.
//!
//! ```rust
//! use report_export::export::{ExportOutcome, MemorySink, export_to_csv};
//! use report_export::sheet::{Dataset, Record};
//!
//! let sink = MemorySink::new();
//! let rows: Dataset = vec![Record::new().with("a", 1i64).with("b", "x")].into();
//!
//! let outcome = export_to_csv(&rows, "sales-report", &sink)?;
//! assert!(matches!(outcome, ExportOutcome::Delivered { .. }));
//! assert_eq!(sink.artifacts()[0].filename, "sales-report.csv");
//!
//! // Nothing is delivered for an empty dataset.
//! assert_eq!(export_to_csv(&Dataset::new(), "empty", &sink)?, ExportOutcome::Skipped);
//! assert_eq!(sink.len(), 1);
//! # Ok::<(), report_export::Error>(())
//! ```

mod format;
pub mod sink;

pub use format::{ExportArtifact, ExportFormat};
pub use sink::{DirectorySink, FileSink, MemorySink};

use crate::common::Result;
use crate::sheet::Dataset;
use crate::sheet::text::CsvConfig;
use tracing::warn;

/// Result of an export request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The artifact was handed to the sink.
    Delivered { filename: String, bytes: usize },
    /// The dataset was empty; nothing was encoded or delivered.
    Skipped,
}

/// Encode `dataset` into an artifact named `<base_filename>.<ext>`.
///
/// Returns `None` for an empty dataset.
pub fn build_artifact(
    dataset: &Dataset,
    base_filename: &str,
    format: ExportFormat,
    csv: &CsvConfig,
) -> Option<ExportArtifact> {
    let content = format.encode_with(dataset, csv)?;
    Some(ExportArtifact::new(
        content,
        format.file_name(base_filename),
        format.media_type(),
    ))
}

/// Export with default CSV settings.
pub fn export(
    dataset: &Dataset,
    base_filename: &str,
    format: ExportFormat,
    sink: &dyn FileSink,
) -> Result<ExportOutcome> {
    export_with(dataset, base_filename, format, &CsvConfig::default(), sink)
}

/// Encode and deliver a dataset.
///
/// An empty dataset is not an error: a warning is logged, the sink is not
/// called and [`ExportOutcome::Skipped`] is returned.
pub fn export_with(
    dataset: &Dataset,
    base_filename: &str,
    format: ExportFormat,
    csv: &CsvConfig,
    sink: &dyn FileSink,
) -> Result<ExportOutcome> {
    let Some(artifact) = build_artifact(dataset, base_filename, format, csv) else {
        warn!(filename = base_filename, format = %format, "No data to export");
        return Ok(ExportOutcome::Skipped);
    };

    sink.deliver(&artifact)?;
    Ok(ExportOutcome::Delivered {
        bytes: artifact.content.len(),
        filename: artifact.filename,
    })
}

/// Export as `<base_filename>.csv`.
pub fn export_to_csv(
    dataset: &Dataset,
    base_filename: &str,
    sink: &dyn FileSink,
) -> Result<ExportOutcome> {
    export(dataset, base_filename, ExportFormat::Csv, sink)
}

/// Export as `<base_filename>.xls` (SpreadsheetML).
pub fn export_to_spreadsheet(
    dataset: &Dataset,
    base_filename: &str,
    sink: &dyn FileSink,
) -> Result<ExportOutcome> {
    export(dataset, base_filename, ExportFormat::Spreadsheet, sink)
}
