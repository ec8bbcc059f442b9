//! Difference model produced by the comparison engine

use crate::table::Value;
use indexmap::IndexMap;
use serde::Serialize;
use std::cmp::Ordering;

/// Column-level difference classification.
///
/// `Missing` and `Extra` are stated from the referent (first) table's
/// perspective: a missing column exists only in the second table, an extra
/// column only in the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColumnDiffKind {
    Missing,
    Extra,
    DifferentType,
    DifferentTimezone,
    DifferentTimePrecision,
}

/// Row-level difference classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RowDiffKind {
    MissingRow,
}

/// A single column-level discrepancy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDifference {
    /// Label of the referent table
    pub source: String,
    pub column_name: String,
    pub kind: ColumnDiffKind,
    /// Per-source payload for type/timezone/precision mismatches, keyed by
    /// source label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<IndexMap<String, String>>,
}

/// Rows bundled as parallel per-column value sequences.
///
/// Columns are ordered by name and rows by the total value order over that
/// column order, so two bundles holding the same content compare equal.
/// Invariant: every value sequence has the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct RowBundle {
    #[serde(flatten)]
    columns: IndexMap<String, Vec<Value>>,
}

impl RowBundle {
    /// Pack rows (cells parallel to `names`) into a sorted bundle
    pub fn from_rows(names: &[String], rows: &[Vec<Value>]) -> Self {
        let mut order: Vec<usize> = (0..names.len()).collect();
        order.sort_by(|&a, &b| names[a].cmp(&names[b]));

        let mut packed: Vec<Vec<Value>> = rows
            .iter()
            .map(|row| order.iter().map(|&i| row[i].clone()).collect())
            .collect();
        packed.sort_by(|a, b| cmp_rows(a, b));

        let mut columns: IndexMap<String, Vec<Value>> = order
            .iter()
            .map(|&i| (names[i].clone(), Vec::with_capacity(packed.len())))
            .collect();
        for row in packed {
            for (slot, value) in columns.values_mut().zip(row) {
                slot.push(value);
            }
        }
        Self { columns }
    }

    /// Number of rows packed into the bundle
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |(_, values)| values.len())
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Reconstruct the row at `index`, cells in bundle column order
    pub fn row(&self, index: usize) -> Vec<Value> {
        self.columns
            .values()
            .map(|values| values[index].clone())
            .collect()
    }
}

/// Lexicographic row comparison using the total value order
pub fn cmp_rows(a: &[Value], b: &[Value]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        match x.total_cmp(y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}

/// Rows present in one source with no content match (or surplus duplicate
/// copies) in the other
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowDifference {
    /// Label of the table the rows belong to
    pub source: String,
    pub row: RowBundle,
    /// Number of physical rows this entry represents
    pub occurrences: usize,
    pub kind: RowDiffKind,
}

/// A pairing-key group containing differing rows from both sources
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowGroupDifference {
    /// Sorted distinct labels present in the group
    pub sources: Vec<String>,
    /// Every row in the group, without the source tag
    pub row: RowBundle,
    /// Total row count of the group
    pub occurrences: usize,
    /// Sorted pairing columns
    pub grouping_columns: Vec<String>,
    /// Sorted non-key columns whose values vary within the group
    pub column_differences: Vec<String>,
    /// Bundle restricted to grouping columns, differing columns, and the
    /// source tag
    pub concise_information: RowBundle,
    /// Full bundle plus the source tag column
    pub row_with_source: RowBundle,
}

/// Either a plain or a key-grouped row difference
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RowDiffEntry {
    Plain(RowDifference),
    Grouped(RowGroupDifference),
}

impl RowDiffEntry {
    /// Number of physical rows this entry accounts for
    pub fn occurrences(&self) -> usize {
        match self {
            Self::Plain(diff) => diff.occurrences,
            Self::Grouped(diff) => diff.occurrences,
        }
    }
}
