//! Delimited text (CSV/TSV) writer.

use crate::sheet::{CellValue, Dataset};
use serde::Deserialize;

const BOM: char = '\u{FEFF}';

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CsvConfig {
    pub delimiter: char,
    pub quote: char,
    /// Also quote string fields containing `\n` or `\r`.
    pub quote_newlines: bool,
    /// Prefix the output with a UTF-8 byte order mark.
    pub bom: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: '"',
            quote_newlines: false,
            bom: false,
        }
    }
}

impl CsvConfig {
    pub fn csv() -> Self {
        Self::default()
    }

    pub fn tsv() -> Self {
        Self {
            delimiter: '\t',
            ..Self::default()
        }
    }

    pub fn with_quote_newlines(mut self, quote_newlines: bool) -> Self {
        self.quote_newlines = quote_newlines;
        self
    }

    pub fn with_bom(mut self, bom: bool) -> Self {
        self.bom = bom;
        self
    }

    fn needs_quote(&self, s: &str) -> bool {
        s.contains(self.delimiter)
            || s.contains(self.quote)
            || (self.quote_newlines && (s.contains('\n') || s.contains('\r')))
    }
}

/// Encode a dataset as comma-separated text.
///
/// Returns `None` when the dataset is empty. See [`encode_csv_with`].
pub fn encode_csv(dataset: &Dataset) -> Option<String> {
    encode_csv_with(dataset, &CsvConfig::default())
}

/// Encode a dataset as delimited text.
///
/// The header line lists the first record's field names verbatim. String
/// values containing the delimiter or the quote character are quoted with
/// inner quotes doubled; numbers and booleans are never quoted; absent and
/// empty values produce an empty field. Lines are separated by `\n` with no
/// trailing line break.
pub fn encode_csv_with(dataset: &Dataset, config: &CsvConfig) -> Option<String> {
    let header = dataset.header()?;
    let mut delimiter_buf = [0u8; 4];
    let delimiter: &str = config.delimiter.encode_utf8(&mut delimiter_buf);

    let mut out = String::with_capacity(64 * (dataset.len() + 1));
    if config.bom {
        out.push(BOM);
    }
    out.push_str(&header.join(delimiter));

    for record in dataset {
        out.push('\n');
        for (col_idx, value) in record.values_for(&header).enumerate() {
            if col_idx > 0 {
                out.push_str(delimiter);
            }
            match value {
                None | Some(CellValue::Empty) => {},
                Some(CellValue::String(s)) if config.needs_quote(s) => {
                    push_quoted(&mut out, s, config.quote);
                },
                Some(value) => out.push_str(&value.to_text()),
            }
        }
    }

    Some(out)
}

fn push_quoted(out: &mut String, field: &str, quote: char) {
    out.reserve(field.len() + 2);
    out.push(quote);
    for ch in field.chars() {
        if ch == quote {
            out.push(quote);
        }
        out.push(ch);
    }
    out.push(quote);
}
