//! Canonical in-memory table representation
//!
//! The comparison engine only ever sees [`Table`]: an ordered set of named,
//! typed columns of equal length. Row-oriented inputs (freshly parsed CSV,
//! foreign record sets) are converted through [`Table::from_records`], which
//! infers column types and surfaces a compatibility notice because the
//! inference can change types.

use crate::error::{DatadiffError, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Sub-second resolution of a timestamp column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimeUnit {
    Millis,
    Micros,
    Nanos,
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimeUnit::Millis => "ms",
            TimeUnit::Micros => "us",
            TimeUnit::Nanos => "ns",
        };
        write!(f, "{}", s)
    }
}

/// Logical data type of a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DataType {
    Bool,
    Int,
    Float,
    Text,
    Date,
    Timestamp {
        unit: TimeUnit,
        /// Time zone shared by every value in the column; `None` for naive
        /// timestamps.
        zone: Option<String>,
    },
}

impl DataType {
    /// Whether two types share the same kind. Timestamp unit and zone are
    /// ignored here; their mismatches are reported as separate difference
    /// kinds.
    pub fn same_kind(&self, other: &DataType) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    pub fn is_timestamp(&self) -> bool {
        matches!(self, DataType::Timestamp { .. })
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Bool => write!(f, "BOOLEAN"),
            DataType::Int => write!(f, "INTEGER"),
            DataType::Float => write!(f, "FLOAT"),
            DataType::Text => write!(f, "TEXT"),
            DataType::Date => write!(f, "DATE"),
            DataType::Timestamp { unit, zone } => match zone {
                Some(zone) => write!(f, "TIMESTAMP[{}, {}]", unit, zone),
                None => write!(f, "TIMESTAMP[{}]", unit),
            },
        }
    }
}

/// A single cell value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    /// Wall-clock time; the owning column's type carries zone and unit.
    Timestamp(NaiveDateTime),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) => 2,
            Value::Float(_) => 3,
            Value::Text(_) => 4,
            Value::Date(_) => 5,
            Value::Timestamp(_) => 6,
        }
    }

    /// Total order over all values, used for deterministic row sorting.
    /// Null sorts first, mixed variants by rank, floats via `f64::total_cmp`.
    pub fn total_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::Date(a), Value::Date(b)) => a.cmp(b),
            (Value::Timestamp(a), Value::Timestamp(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => write!(f, "{}", s),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::Timestamp(ts) => write!(f, "{}", ts.format("%Y-%m-%dT%H:%M:%S%.f")),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Date(_) | Value::Timestamp(_) => serializer.serialize_str(&self.to_string()),
        }
    }
}

/// A named, typed column of values
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub dtype: DataType,
    pub values: Vec<Value>,
}

impl Column {
    pub fn new(name: impl Into<String>, dtype: DataType, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            dtype,
            values,
        }
    }
}

/// Canonical columnar dataset consumed read-only by the comparison engine.
///
/// Invariants enforced at construction: column names are unique and every
/// column holds the same number of values.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for col in &columns {
            *counts.entry(col.name.as_str()).or_insert(0) += 1;
        }
        if counts.len() != columns.len() {
            let distribution: Vec<String> = counts
                .iter()
                .map(|(name, count)| format!("{}: {}", name, count))
                .collect();
            return Err(DatadiffError::invalid_input(format!(
                "Column names are not unique. Distribution of column names: {{{}}}",
                distribution.join(", ")
            )));
        }

        if let Some(first) = columns.first() {
            let len = first.values.len();
            for col in &columns {
                if col.values.len() != len {
                    return Err(DatadiffError::data_processing(format!(
                        "Column '{}' has {} values, expected {}",
                        col.name,
                        col.values.len(),
                        len
                    )));
                }
            }
        }

        Ok(Self { columns })
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, |col| col.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|col| col.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|col| col.name.as_str()).collect()
    }

    /// Extract all rows restricted to the given columns, in the given column
    /// order. The result is an independent working copy; the table itself is
    /// never mutated.
    pub fn project(&self, columns: &[String]) -> Result<Vec<Vec<Value>>> {
        let mut selected = Vec::with_capacity(columns.len());
        for name in columns {
            let col = self.column(name).ok_or_else(|| {
                DatadiffError::data_processing(format!("Unknown column in projection: '{}'", name))
            })?;
            selected.push(col);
        }

        let mut rows = Vec::with_capacity(self.len());
        for i in 0..self.len() {
            rows.push(selected.iter().map(|col| col.values[i].clone()).collect());
        }
        Ok(rows)
    }

    /// Convert a row-oriented record set into the canonical columnar form.
    ///
    /// The conversion is lossy: column types are inferred from the raw string
    /// cells, so a caller holding natively typed data should build the table
    /// directly instead. A warning is logged to surface this.
    pub fn from_records(records: &Records) -> Result<Self> {
        log::warn!(
            "Converting row-oriented records to the columnar table representation. \
             Column types are inferred from raw values and may change. \
             Prefer constructing tables natively before comparing."
        );

        for (i, row) in records.rows.iter().enumerate() {
            if row.len() != records.columns.len() {
                return Err(DatadiffError::data_processing(format!(
                    "Record {} has {} fields, expected {}",
                    i,
                    row.len(),
                    records.columns.len()
                )));
            }
        }

        let mut columns = Vec::with_capacity(records.columns.len());
        for (idx, name) in records.columns.iter().enumerate() {
            let raw: Vec<Option<&str>> = records
                .rows
                .iter()
                .map(|row| row[idx].as_deref())
                .collect();
            let (dtype, values) = infer_column(&raw);
            columns.push(Column::new(name.clone(), dtype, values));
        }

        Self::new(columns)
    }
}

/// Row-oriented record set: a header plus raw string cells, with `None` for
/// missing values. The foreign representation accepted at the normalization
/// boundary.
#[derive(Debug, Clone, Default)]
pub struct Records {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

/// Infer a column type from the first non-null cell and parse the whole
/// column under it. Any later cell that fails to parse demotes the column to
/// text.
fn infer_column(raw: &[Option<&str>]) -> (DataType, Vec<Value>) {
    let dtype = raw
        .iter()
        .flatten()
        .next()
        .map_or(DataType::Text, |cell| infer_dtype(cell));

    let mut values = Vec::with_capacity(raw.len());
    for cell in raw {
        match cell {
            None => values.push(Value::Null),
            Some(cell) => match parse_value(cell, &dtype) {
                Some(value) => values.push(value),
                None => return (DataType::Text, text_column(raw)),
            },
        }
    }
    (dtype, values)
}

fn text_column(raw: &[Option<&str>]) -> Vec<Value> {
    raw.iter()
        .map(|cell| match cell {
            None => Value::Null,
            Some(cell) => Value::Text((*cell).to_string()),
        })
        .collect()
}

fn infer_dtype(cell: &str) -> DataType {
    if cell.parse::<i64>().is_ok() {
        DataType::Int
    } else if cell.parse::<f64>().is_ok() {
        DataType::Float
    } else if cell.eq_ignore_ascii_case("true") || cell.eq_ignore_ascii_case("false") {
        DataType::Bool
    } else if NaiveDate::parse_from_str(cell, "%Y-%m-%d").is_ok() {
        DataType::Date
    } else if parse_timestamp(cell).is_some() {
        DataType::Timestamp {
            unit: TimeUnit::Micros,
            zone: None,
        }
    } else {
        DataType::Text
    }
}

fn parse_timestamp(cell: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(cell, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(cell, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

fn parse_value(cell: &str, dtype: &DataType) -> Option<Value> {
    match dtype {
        DataType::Int => cell.parse::<i64>().ok().map(Value::Int),
        DataType::Float => cell.parse::<f64>().ok().map(Value::Float),
        DataType::Bool => {
            if cell.eq_ignore_ascii_case("true") {
                Some(Value::Bool(true))
            } else if cell.eq_ignore_ascii_case("false") {
                Some(Value::Bool(false))
            } else {
                None
            }
        }
        DataType::Date => NaiveDate::parse_from_str(cell, "%Y-%m-%d")
            .ok()
            .map(Value::Date),
        DataType::Timestamp { .. } => parse_timestamp(cell).map(Value::Timestamp),
        DataType::Text => Some(Value::Text(cell.to_string())),
    }
}

/// Day-count encoding helper shared with the fingerprint encoding
pub(crate) fn date_ordinal(date: &NaiveDate) -> i32 {
    date.num_days_from_ce()
}
