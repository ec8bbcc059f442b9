//! Report assembly and summary statistics

use crate::compare::{reconcile_rows, reconcile_rows_paired};
use crate::diff::{ColumnDifference, RowDiffEntry};
use crate::error::Result;
use crate::table::{Table, Value};
use crate::SOURCE_COLUMN;
use serde::Serialize;

/// Immutable result of one comparison.
///
/// The summary statistics are computed on demand from the difference list so
/// they can never drift out of sync with it.
#[derive(Debug, Clone, Serialize)]
pub struct DataReport {
    /// Row count of the referent table
    pub len0: usize,
    /// Row count of the second table
    pub len1: usize,
    pub name0: String,
    pub name1: String,
    pub comparable_columns: Vec<String>,
    pub column_differences: Vec<ColumnDifference>,
    pub row_differences: Vec<RowDiffEntry>,
}

impl DataReport {
    /// Sum of occurrences over all row differences, plain and grouped
    pub fn total_row_differences(&self) -> usize {
        self.row_differences
            .iter()
            .map(RowDiffEntry::occurrences)
            .sum()
    }

    /// Rows attributed to the referent source
    pub fn source0_count(&self) -> usize {
        self.source_count(&self.name0)
    }

    /// Rows attributed to the second source
    pub fn source1_count(&self) -> usize {
        self.source_count(&self.name1)
    }

    /// Share of the total attributed to the referent source; 0.0 when there
    /// are no row differences
    pub fn ratio_source0(&self) -> f64 {
        self.ratio(self.source0_count())
    }

    /// Share of the total attributed to the second source; 0.0 when there
    /// are no row differences
    pub fn ratio_source1(&self) -> f64 {
        self.ratio(self.source1_count())
    }

    pub fn has_differences(&self) -> bool {
        !self.column_differences.is_empty() || !self.row_differences.is_empty()
    }

    /// A plain difference counts wholly toward its own source; a grouped
    /// difference counts its source tags individually, so a two-row group
    /// with one row per source contributes one to each side.
    fn source_count(&self, label: &str) -> usize {
        self.row_differences
            .iter()
            .map(|entry| match entry {
                RowDiffEntry::Plain(diff) => {
                    if diff.source == label {
                        diff.occurrences
                    } else {
                        0
                    }
                }
                RowDiffEntry::Grouped(diff) => diff
                    .concise_information
                    .column(SOURCE_COLUMN)
                    .map_or(0, |tags| {
                        tags.iter()
                            .filter(|tag| matches!(tag, Value::Text(s) if s == label))
                            .count()
                    }),
            })
            .sum()
    }

    fn ratio(&self, count: usize) -> f64 {
        let total = self.total_row_differences();
        if total == 0 {
            return 0.0;
        }
        count as f64 / total as f64
    }
}

/// Run the full comparison and assemble the report. With pairing columns the
/// row differences are refined into key groups; without, they stay plain.
pub fn build_report(
    table0: &Table,
    table1: &Table,
    label0: &str,
    label1: &str,
    pairing_columns: Option<&[String]>,
) -> Result<DataReport> {
    let (comparable_columns, column_differences, row_differences) = match pairing_columns {
        Some(pairing) => reconcile_rows_paired(table0, table1, label0, label1, pairing)?,
        None => reconcile_rows(table0, table1, label0, label1)?,
    };

    Ok(DataReport {
        len0: table0.len(),
        len1: table1.len(),
        name0: label0.to_string(),
        name1: label1.to_string(),
        comparable_columns,
        column_differences,
        row_differences,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Column, DataType};

    fn int_column(name: &str, values: &[i64]) -> Column {
        Column::new(
            name,
            DataType::Int,
            values.iter().map(|&v| Value::Int(v)).collect(),
        )
    }

    fn table(columns: Vec<Column>) -> Table {
        Table::new(columns).unwrap()
    }

    #[test]
    fn test_report_without_differences() {
        let t0 = table(vec![int_column("a", &[1, 2])]);
        let report = build_report(&t0, &t0.clone(), "df0", "df1", None).unwrap();

        assert!(!report.has_differences());
        assert_eq!(report.total_row_differences(), 0);
        assert_eq!(report.ratio_source0(), 0.0);
        assert_eq!(report.ratio_source1(), 0.0);
        assert_eq!(report.len0, 2);
        assert_eq!(report.len1, 2);
    }

    #[test]
    fn test_report_counts_and_ratios_paired() {
        let t0 = table(vec![
            int_column("a", &[1, 2, 3, 3, 3, 4]),
            int_column("b", &[1, 2, 3, 10, 10, 15]),
        ]);
        let t1 = table(vec![
            int_column("a", &[1, 2, 3, 3, 4, 5]),
            int_column("b", &[1, 2, 3, 10, 20, 24]),
        ]);

        let report =
            build_report(&t0, &t1, "df0", "df1", Some(&["a".to_string()])).unwrap();
        assert_eq!(report.total_row_differences(), 4);
        assert_eq!(report.source0_count(), 2);
        assert_eq!(report.source1_count(), 2);
        assert_eq!(report.ratio_source0(), 0.5);
        assert_eq!(report.ratio_source1(), 0.5);
    }

    #[test]
    fn test_ratios_sum_to_one_with_differences() {
        let t0 = table(vec![int_column("a", &[1, 2, 3])]);
        let t1 = table(vec![int_column("a", &[1, 4])]);

        let report = build_report(&t0, &t1, "df0", "df1", None).unwrap();
        let total = report.total_row_differences();
        assert!(total > 0);
        assert_eq!(
            report.source0_count() + report.source1_count(),
            total
        );
        let sum = report.ratio_source0() + report.ratio_source1();
        assert!((sum - 1.0).abs() < f64::EPSILON);
    }
}
