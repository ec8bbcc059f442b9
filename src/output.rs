//! Output formatting utilities

use crate::diff::{ColumnDifference, RowDiffEntry};
use crate::error::Result;
use crate::report::DataReport;

/// Pretty printer for comparison reports
pub struct PrettyPrinter;

impl PrettyPrinter {
    /// Print a report as a tree
    pub fn print_report(report: &DataReport) {
        println!("🔍 Comparison: {} → {}", report.name0, report.name1);
        println!("├─ Rows: {} vs {}", report.len0, report.len1);
        println!(
            "├─ Comparable columns: {}",
            if report.comparable_columns.is_empty() {
                "(none)".to_string()
            } else {
                report.comparable_columns.join(", ")
            }
        );

        if report.column_differences.is_empty() {
            println!("├─ ✅ Columns: all matched");
        } else {
            println!(
                "├─ ❌ Column differences: {}",
                report.column_differences.len()
            );
            Self::print_column_differences(&report.column_differences, "│  ");
        }

        let total = report.total_row_differences();
        if total == 0 {
            println!("├─ ✅ Rows: no differences");
        } else {
            println!("├─ ❌ Row differences: {} row(s)", total);
            Self::print_row_differences(&report.row_differences, "│  ");
            println!(
                "├─ Attribution: {} from {}, {} from {}",
                report.source0_count(),
                report.name0,
                report.source1_count(),
                report.name1
            );
        }

        println!(
            "└─ Ratios: {} {:.1}% / {} {:.1}%",
            report.name0,
            report.ratio_source0() * 100.0,
            report.name1,
            report.ratio_source1() * 100.0
        );
    }

    fn print_column_differences(diffs: &[ColumnDifference], prefix: &str) {
        for (i, diff) in diffs.iter().enumerate() {
            let marker = if i == diffs.len() - 1 { "└─" } else { "├─" };
            match &diff.detail {
                Some(detail) => {
                    let payload: Vec<String> = detail
                        .iter()
                        .map(|(label, value)| format!("{}: {}", label, value))
                        .collect();
                    println!(
                        "{}{} {} ({:?}; {})",
                        prefix,
                        marker,
                        diff.column_name,
                        diff.kind,
                        payload.join(", ")
                    );
                }
                None => println!("{}{} {} ({:?})", prefix, marker, diff.column_name, diff.kind),
            }
        }
    }

    fn print_row_differences(diffs: &[RowDiffEntry], prefix: &str) {
        for (i, entry) in diffs.iter().enumerate() {
            let marker = if i == diffs.len() - 1 { "└─" } else { "├─" };
            match entry {
                RowDiffEntry::Plain(diff) => {
                    println!(
                        "{}{} {} row(s) only in {}",
                        prefix, marker, diff.occurrences, diff.source
                    );
                }
                RowDiffEntry::Grouped(diff) => {
                    println!(
                        "{}{} key group [{}] differs in [{}] ({} row(s) across {})",
                        prefix,
                        marker,
                        diff.grouping_columns.join(", "),
                        diff.column_differences.join(", "),
                        diff.occurrences,
                        diff.sources.join(", ")
                    );
                }
            }
        }
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format any serializable data as JSON
    pub fn format<T: serde::Serialize + ?Sized>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }

    /// Format a report as JSON, including the computed summary statistics
    pub fn format_report(report: &DataReport) -> Result<String> {
        let mut value = serde_json::to_value(report)?;
        if let serde_json::Value::Object(map) = &mut value {
            map.insert(
                "total_row_differences".to_string(),
                serde_json::json!(report.total_row_differences()),
            );
            map.insert(
                "source0_count".to_string(),
                serde_json::json!(report.source0_count()),
            );
            map.insert(
                "source1_count".to_string(),
                serde_json::json!(report.source1_count()),
            );
            map.insert(
                "ratio_source0".to_string(),
                serde_json::json!(report.ratio_source0()),
            );
            map.insert(
                "ratio_source1".to_string(),
                serde_json::json!(report.ratio_source1()),
            );
        }
        Ok(serde_json::to_string_pretty(&value)?)
    }
}
