//! Common types for tabular export.

use crate::common::number::{format_float, format_int};
use std::borrow::Cow;
use std::fmt;

/// Types of data that can be stored in a cell.
///
/// Values carry their type explicitly, so the numeric string `"42"` stays a
/// string and is never promoted to a number.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Empty cell (absent or null)
    #[default]
    Empty,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
    /// String value
    String(String),
}

/// Spreadsheet cell type, written as the `ss:Type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellType {
    Number,
    String,
}

impl CellType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CellType::Number => "Number",
            CellType::String => "String",
        }
    }
}

impl CellValue {
    /// Spreadsheet type of this value: numbers are `Number`, everything else
    /// (text, booleans, empty) is `String`.
    pub fn cell_type(&self) -> CellType {
        match self {
            CellValue::Int(_) | CellValue::Float(_) => CellType::Number,
            _ => CellType::String,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Plain text form of the value, without any quoting or escaping.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            CellValue::Empty => Cow::Borrowed(""),
            CellValue::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            CellValue::Int(i) => Cow::Owned(format_int(*i)),
            CellValue::Float(f) => Cow::Owned(format_float(*f)),
            CellValue::String(s) => Cow::Borrowed(s),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::String(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::String(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Int(value.into())
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Int(value.into())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Empty, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_type_follows_value_kind() {
        assert_eq!(CellValue::Int(42).cell_type(), CellType::Number);
        assert_eq!(CellValue::Float(4.2).cell_type(), CellType::Number);
        assert_eq!(CellValue::from("42").cell_type(), CellType::String);
        assert_eq!(CellValue::Bool(true).cell_type(), CellType::String);
        assert_eq!(CellValue::Empty.cell_type(), CellType::String);
    }

    #[test]
    fn test_to_text() {
        assert_eq!(CellValue::Empty.to_text(), "");
        assert_eq!(CellValue::Bool(false).to_text(), "false");
        assert_eq!(CellValue::Int(-3).to_text(), "-3");
        assert_eq!(CellValue::Float(2.5).to_text(), "2.5");
        assert_eq!(CellValue::from("a,b").to_text(), "a,b");
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(CellValue::from(None::<i64>), CellValue::Empty);
        assert_eq!(CellValue::from(Some(7i64)), CellValue::Int(7));
    }
}
