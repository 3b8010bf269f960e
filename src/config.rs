//! Export configuration.
//!
//! Loaded from YAML; every field is optional.
//!
//! ```yaml
//! output_dir: ./exports
//! format: xls
//! csv:
//!   delimiter: ";"
//!   bom: true
//! ```

use crate::common::{Error, Result};
use crate::export::ExportFormat;
use crate::sheet::text::CsvConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory exported files are written to
    pub output_dir: PathBuf,
    /// Format used when none is requested explicitly
    pub format: ExportFormat,
    /// CSV writer settings
    pub csv: CsvConfig,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            format: ExportFormat::default(),
            csv: CsvConfig::default(),
        }
    }
}

impl ExportConfig {
    /// Parse a YAML document.
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_saphyr::from_str(input)
            .map_err(|e| Error::Config(format!("Failed to parse export config: {}", e)))
    }

    /// Read and parse a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml_str(&input)
    }
}
