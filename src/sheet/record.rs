//! Records and datasets: the input side of every export.
//!
//! A [`Record`] keeps its fields in insertion order, and a [`Dataset`] keeps
//! its records in insertion order. Both orders end up in the output: the first
//! record's field order becomes the header row, the record order becomes the
//! row order.

use crate::common::{Error, Result};
use crate::sheet::CellValue;
use serde_json::{Map, Value};

/// One output row: an ordered mapping from field name to value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, CellValue)>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Record::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a field. An existing field keeps its position and gets the new value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<CellValue>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Look up a field. `None` means the field is absent from this record.
    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Values for each header column, in header order.
    ///
    /// A field at the same position as its header column is read directly;
    /// anything else falls back to a lookup by name.
    pub fn values_for<'a>(
        &'a self,
        header: &'a [&'a str],
    ) -> impl Iterator<Item = Option<&'a CellValue>> + 'a {
        header
            .iter()
            .enumerate()
            .map(move |(col_idx, name)| match self.fields.get(col_idx) {
                Some((key, value)) if key.as_str() == *name => Some(value),
                _ => self.get(name),
            })
    }

    /// Field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build a record from a JSON object, keeping key order.
    ///
    /// Rows must be flat: nested arrays and objects are rejected.
    pub fn from_json_object(index: usize, object: &Map<String, Value>) -> Result<Self> {
        let mut record = Record::new();
        for (key, value) in object {
            let cell = match value {
                Value::Null => CellValue::Empty,
                Value::Bool(b) => CellValue::Bool(*b),
                Value::Number(n) => match n.as_i64() {
                    Some(i) => CellValue::Int(i),
                    None => CellValue::Float(n.as_f64().unwrap_or(f64::NAN)),
                },
                Value::String(s) => CellValue::String(s.clone()),
                Value::Array(_) | Value::Object(_) => {
                    return Err(Error::InvalidRecord {
                        index,
                        reason: format!("field '{}' is not a scalar value", key),
                    });
                },
            };
            record.fields.push((key.clone(), cell));
        }
        Ok(record)
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.set(name, value);
        }
        record
    }
}

/// Conversion of typed rows into records.
pub trait ToRecord {
    fn to_record(&self) -> Record;
}

impl ToRecord for Record {
    fn to_record(&self) -> Record {
        self.clone()
    }
}

/// Ordered sequence of records to export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Header row: the first record's field names, or `None` for an empty dataset.
    ///
    /// Later records are not consulted; fields they add are not exported and
    /// fields they lack export as empty cells.
    pub fn header(&self) -> Option<Vec<&str>> {
        self.records.first().map(|first| first.keys().collect())
    }

    /// Build a dataset from typed rows.
    pub fn from_rows<T: ToRecord>(rows: &[T]) -> Self {
        rows.iter().map(ToRecord::to_record).collect()
    }

    /// Parse a JSON array of flat objects.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_json_value(&value)
    }

    pub fn from_json_value(value: &Value) -> Result<Self> {
        let rows = value
            .as_array()
            .ok_or_else(|| Error::Other("expected a JSON array of objects".to_string()))?;

        let mut dataset = Dataset::new();
        for (index, row) in rows.iter().enumerate() {
            let object = row.as_object().ok_or_else(|| Error::InvalidRecord {
                index,
                reason: "row is not a JSON object".to_string(),
            })?;
            dataset.push(Record::from_json_object(index, object)?);
        }
        Ok(dataset)
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_in_place() {
        let mut record = Record::new().with("a", 1i64).with("b", "x");
        record.set("a", 9i64);
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(record.get("a"), Some(&CellValue::Int(9)));
        assert_eq!(record.get("missing"), None);
    }

    #[test]
    fn test_values_for_follows_header_order() {
        let header = ["a", "b", "c"];

        let aligned = Record::new().with("a", 1i64).with("b", "x").with("c", 2.5);
        assert_eq!(
            aligned.values_for(&header).collect::<Vec<_>>(),
            vec![
                Some(&CellValue::Int(1)),
                Some(&CellValue::from("x")),
                Some(&CellValue::Float(2.5))
            ]
        );

        let shuffled = Record::new().with("c", 3i64).with("extra", true).with("a", 4i64);
        assert_eq!(
            shuffled.values_for(&header).collect::<Vec<_>>(),
            vec![Some(&CellValue::Int(4)), None, Some(&CellValue::Int(3))]
        );
    }

    #[test]
    fn test_json_keeps_numeric_like_keys_in_document_order() {
        let dataset = Dataset::from_json_str(r#"[{"b": 1, "10": 2, "2": 3}]"#).unwrap();
        assert_eq!(dataset.header(), Some(vec!["b", "10", "2"]));
    }

    #[test]
    fn test_header_from_first_record_only() {
        let dataset: Dataset = vec![
            Record::new().with("b", 1i64).with("a", 2i64),
            Record::new().with("a", 3i64).with("c", 4i64),
        ]
        .into();
        assert_eq!(dataset.header(), Some(vec!["b", "a"]));
        assert_eq!(Dataset::new().header(), None);
    }

    #[test]
    fn test_json_preserves_key_order_and_types() {
        let dataset =
            Dataset::from_json_str(r#"[{"z": 1, "a": "x", "m": null, "f": 2.5, "ok": true}]"#)
                .unwrap();
        let record = &dataset.records()[0];
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["z", "a", "m", "f", "ok"]);
        assert_eq!(record.get("z"), Some(&CellValue::Int(1)));
        assert_eq!(record.get("m"), Some(&CellValue::Empty));
        assert_eq!(record.get("f"), Some(&CellValue::Float(2.5)));
        assert_eq!(record.get("ok"), Some(&CellValue::Bool(true)));
    }

    #[test]
    fn test_json_rejects_nested_values() {
        let err = Dataset::from_json_str(r#"[{"a": 1}, {"a": [1, 2]}]"#).unwrap_err();
        assert!(matches!(err, Error::InvalidRecord { index: 1, .. }));
    }

    #[test]
    fn test_json_rejects_non_array() {
        assert!(Dataset::from_json_str(r#"{"a": 1}"#).is_err());
        assert!(matches!(
            Dataset::from_json_str(r#"[1]"#).unwrap_err(),
            Error::InvalidRecord { index: 0, .. }
        ));
    }
}
