//! Column, row, and key-group reconciliation between two tables
//!
//! The three public entry points mirror the layering of the engine:
//! [`reconcile_columns`] settles which columns are comparable,
//! [`reconcile_rows`] turns the projected rows of both tables into a
//! fingerprint multiset difference, and [`reconcile_rows_paired`] refines
//! those row differences into per-key groups with column attribution.

use crate::diff::{
    cmp_rows, ColumnDiffKind, ColumnDifference, RowBundle, RowDiffEntry, RowDiffKind,
    RowDifference, RowGroupDifference,
};
use crate::error::{DatadiffError, Result};
use crate::hash::{Fingerprinter, HashValue};
use crate::table::{DataType, Table, Value};
use crate::{validate, SOURCE_COLUMN};
use indexmap::IndexMap;
use std::collections::HashSet;

/// Compute column-name and column-type agreement between two tables.
///
/// Returns the comparable columns (in the referent table's column order) and
/// one [`ColumnDifference`] per discrepancy, all tagged with the referent
/// label.
pub fn reconcile_columns(
    table0: &Table,
    table1: &Table,
    label0: &str,
    label1: &str,
) -> Result<(Vec<String>, Vec<ColumnDifference>)> {
    validate::check_inputs(&[table0, table1], &[label0, label1])?;
    Ok(column_differences(table0, table1, label0, label1))
}

/// Reconcile the rows of two tables over their comparable columns.
///
/// Returns the comparable columns, the column differences, and one row
/// difference per fingerprint that is unmatched or unevenly duplicated
/// between the sources.
pub fn reconcile_rows(
    table0: &Table,
    table1: &Table,
    label0: &str,
    label1: &str,
) -> Result<(Vec<String>, Vec<ColumnDifference>, Vec<RowDiffEntry>)> {
    validate::check_inputs(&[table0, table1], &[label0, label1])?;
    let (comparable, column_diffs) = column_differences(table0, table1, label0, label1);
    let row_diffs = row_differences(table0, table1, label0, label1, &comparable)?;
    Ok((comparable, column_diffs, row_diffs))
}

/// Reconcile rows, then refine the differences into groups keyed by the
/// pairing columns.
///
/// Fails with a configuration error when a pairing column is not part of the
/// comparable column set.
pub fn reconcile_rows_paired(
    table0: &Table,
    table1: &Table,
    label0: &str,
    label1: &str,
    pairing_columns: &[String],
) -> Result<(Vec<String>, Vec<ColumnDifference>, Vec<RowDiffEntry>)> {
    validate::check_inputs(&[table0, table1], &[label0, label1])?;
    let (comparable, column_diffs) = column_differences(table0, table1, label0, label1);

    let comparable_set: HashSet<&str> = comparable.iter().map(String::as_str).collect();
    let unknown: Vec<&str> = pairing_columns
        .iter()
        .map(String::as_str)
        .filter(|name| !comparable_set.contains(name))
        .collect();
    if !unknown.is_empty() {
        return Err(DatadiffError::config(format!(
            "Pairing columns must be comparable in both tables. \
             Not comparable: [{}]. Comparable columns: [{}]",
            unknown.join(", "),
            comparable.join(", ")
        )));
    }

    let row_diffs = row_differences(table0, table1, label0, label1, &comparable)?;
    let refined = refine_groups(&row_diffs, pairing_columns);
    Ok((comparable, column_diffs, refined))
}

/// Name and type reconciliation, shared by the public entry points
fn column_differences(
    table0: &Table,
    table1: &Table,
    label0: &str,
    label1: &str,
) -> (Vec<String>, Vec<ColumnDifference>) {
    let names0: HashSet<&str> = table0.column_names().into_iter().collect();
    let names1: HashSet<&str> = table1.column_names().into_iter().collect();

    let mut diffs = Vec::new();

    // Missing: present only in the second table, stated from the referent's
    // perspective. Emitted before the extra entries, each in its owning
    // table's column order.
    for col in table1.columns() {
        if !names0.contains(col.name.as_str()) {
            diffs.push(ColumnDifference {
                source: label0.to_string(),
                column_name: col.name.clone(),
                kind: ColumnDiffKind::Missing,
                detail: None,
            });
        }
    }
    for col in table0.columns() {
        if !names1.contains(col.name.as_str()) {
            diffs.push(ColumnDifference {
                source: label0.to_string(),
                column_name: col.name.clone(),
                kind: ColumnDiffKind::Extra,
                detail: None,
            });
        }
    }

    let mut comparable = Vec::new();
    for col0 in table0.columns() {
        let Some(col1) = table1.column(&col0.name) else {
            continue;
        };

        if !col0.dtype.same_kind(&col1.dtype) {
            diffs.push(ColumnDifference {
                source: label0.to_string(),
                column_name: col0.name.clone(),
                kind: ColumnDiffKind::DifferentType,
                detail: Some(detail(
                    label0,
                    col0.dtype.to_string(),
                    label1,
                    col1.dtype.to_string(),
                )),
            });
            continue;
        }

        if let (
            DataType::Timestamp {
                unit: unit0,
                zone: zone0,
            },
            DataType::Timestamp {
                unit: unit1,
                zone: zone1,
            },
        ) = (&col0.dtype, &col1.dtype)
        {
            if zone0 != zone1 {
                // The timezone check wins; precision is not inspected for
                // this column.
                diffs.push(ColumnDifference {
                    source: label0.to_string(),
                    column_name: col0.name.clone(),
                    kind: ColumnDiffKind::DifferentTimezone,
                    detail: Some(detail(label0, zone_name(zone0), label1, zone_name(zone1))),
                });
                continue;
            }
            if unit0 != unit1 {
                diffs.push(ColumnDifference {
                    source: label0.to_string(),
                    column_name: col0.name.clone(),
                    kind: ColumnDiffKind::DifferentTimePrecision,
                    detail: Some(detail(label0, unit0.to_string(), label1, unit1.to_string())),
                });
                continue;
            }
        }

        comparable.push(col0.name.clone());
    }

    (comparable, diffs)
}

fn detail(label0: &str, value0: String, label1: &str, value1: String) -> IndexMap<String, String> {
    let mut map = IndexMap::new();
    map.insert(label0.to_string(), value0);
    map.insert(label1.to_string(), value1);
    map
}

fn zone_name(zone: &Option<String>) -> String {
    zone.clone().unwrap_or_else(|| "none".to_string())
}

/// Multiset difference over row fingerprints
fn row_differences(
    table0: &Table,
    table1: &Table,
    label0: &str,
    label1: &str,
    comparable: &[String],
) -> Result<Vec<RowDiffEntry>> {
    if comparable.is_empty() {
        // Nothing is comparable, so no row can be matched across the
        // sources; report every row as one-sided.
        let mut diffs = Vec::new();
        for (table, label) in [(table0, label0), (table1, label1)] {
            if !table.is_empty() {
                diffs.push(RowDiffEntry::Plain(RowDifference {
                    source: label.to_string(),
                    row: RowBundle::default(),
                    occurrences: table.len(),
                    kind: RowDiffKind::MissingRow,
                }));
            }
        }
        return Ok(diffs);
    }

    let rows0 = table0.project(comparable)?;
    let rows1 = table1.project(comparable)?;

    let fingerprinter = Fingerprinter::new();
    let hashes0 = fingerprinter.fingerprint_rows(&rows0);
    let hashes1 = fingerprinter.fingerprint_rows(&rows1);

    let by_hash0 = index_by_hash(&hashes0);
    let by_hash1 = index_by_hash(&hashes1);

    log::debug!(
        "row reconciliation: {} distinct fingerprints vs {}",
        by_hash0.len(),
        by_hash1.len()
    );

    let mut diffs = Vec::new();

    for (hash, indices) in &by_hash0 {
        if !by_hash1.contains_key(hash) {
            diffs.push(bundle_rows(label0, comparable, &rows0, indices, indices.len()));
        }
    }
    for (hash, indices) in &by_hash1 {
        if !by_hash0.contains_key(hash) {
            diffs.push(bundle_rows(label1, comparable, &rows1, indices, indices.len()));
        }
    }

    // Content present on both sides but duplicated an uneven number of
    // times: the surplus side owes the difference.
    for (hash, indices0) in &by_hash0 {
        let Some(indices1) = by_hash1.get(hash) else {
            continue;
        };
        let (count0, count1) = (indices0.len(), indices1.len());
        if count0 > count1 {
            diffs.push(bundle_rows(label0, comparable, &rows0, indices0, count0 - count1));
        } else if count1 > count0 {
            diffs.push(bundle_rows(label1, comparable, &rows1, indices1, count1 - count0));
        }
    }

    Ok(diffs)
}

/// Group row indices by fingerprint, preserving first-appearance order so
/// the emitted differences are reproducible.
fn index_by_hash(hashes: &[HashValue]) -> IndexMap<&str, Vec<usize>> {
    let mut by_hash: IndexMap<&str, Vec<usize>> = IndexMap::new();
    for (index, hash) in hashes.iter().enumerate() {
        by_hash.entry(hash.as_str()).or_default().push(index);
    }
    by_hash
}

/// Bundle the first `take` rows (in sorted row order) of a fingerprint's
/// occurrences into one difference entry. Rows sharing a fingerprint are
/// identical over the comparable columns, so the choice is arbitrary but
/// deterministic.
fn bundle_rows(
    label: &str,
    comparable: &[String],
    rows: &[Vec<Value>],
    indices: &[usize],
    take: usize,
) -> RowDiffEntry {
    let mut selected: Vec<Vec<Value>> = indices.iter().map(|&i| rows[i].clone()).collect();
    selected.sort_by(|a, b| cmp_rows(a, b));
    selected.truncate(take);

    RowDiffEntry::Plain(RowDifference {
        source: label.to_string(),
        row: RowBundle::from_rows(comparable, &selected),
        occurrences: take,
        kind: RowDiffKind::MissingRow,
    })
}

/// A differing row flattened out of a plain difference, tagged with its
/// originating source
struct FlatRow {
    source: String,
    cells: Vec<Value>,
}

/// Reduce plain row differences into pairing-key groups.
///
/// Only rows already known to differ participate; rows identical across both
/// tables never reach this stage.
fn refine_groups(diffs: &[RowDiffEntry], pairing_columns: &[String]) -> Vec<RowDiffEntry> {
    // Flatten the bundles back into per-row records. Every plain bundle
    // shares the same column set: the comparable columns in sorted order.
    let mut columns: Vec<String> = Vec::new();
    let mut flat: Vec<FlatRow> = Vec::new();
    for entry in diffs {
        let RowDiffEntry::Plain(diff) = entry else {
            continue;
        };
        if columns.is_empty() {
            columns = diff.row.column_names().map(str::to_string).collect();
        }
        for i in 0..diff.row.row_count() {
            flat.push(FlatRow {
                source: diff.source.clone(),
                cells: diff.row.row(i),
            });
        }
    }

    if flat.is_empty() {
        return Vec::new();
    }

    let key_positions: Vec<usize> = pairing_columns
        .iter()
        .filter_map(|key| columns.iter().position(|name| name == key))
        .collect();

    // Group by the fingerprint of the pairing values, in first-appearance
    // order.
    let fingerprinter = Fingerprinter::new();
    let mut groups: IndexMap<HashValue, Vec<usize>> = IndexMap::new();
    for (index, row) in flat.iter().enumerate() {
        let key: Vec<Value> = key_positions.iter().map(|&i| row.cells[i].clone()).collect();
        groups
            .entry(fingerprinter.fingerprint_row(&key))
            .or_default()
            .push(index);
    }

    groups
        .values()
        .map(|members| refine_group(&columns, pairing_columns, &flat, members))
        .collect()
}

/// Turn one key group into either a plain one-sided difference or a grouped
/// difference with column attribution
fn refine_group(
    columns: &[String],
    pairing_columns: &[String],
    flat: &[FlatRow],
    members: &[usize],
) -> RowDiffEntry {
    let mut sources: Vec<String> = Vec::new();
    for &index in members {
        if !sources.contains(&flat[index].source) {
            sources.push(flat[index].source.clone());
        }
    }
    sources.sort();

    let rows: Vec<Vec<Value>> = members.iter().map(|&i| flat[i].cells.clone()).collect();

    if let [source] = sources.as_slice() {
        // The key value is simply absent on the other side.
        return RowDiffEntry::Plain(RowDifference {
            source: source.clone(),
            row: RowBundle::from_rows(columns, &rows),
            occurrences: rows.len(),
            kind: RowDiffKind::MissingRow,
        });
    }

    // Attribute the disagreement to the non-key columns that take more than
    // one distinct value across the group.
    let key_set: HashSet<&str> = pairing_columns.iter().map(String::as_str).collect();
    let mut column_differences = Vec::new();
    for (position, name) in columns.iter().enumerate() {
        if key_set.contains(name.as_str()) {
            continue;
        }
        let distinct: HashSet<Vec<u8>> = members
            .iter()
            .map(|&i| Fingerprinter::encoded(&flat[i].cells[position]))
            .collect();
        if distinct.len() > 1 {
            column_differences.push(name.clone());
        }
    }

    let mut grouping_columns = pairing_columns.to_vec();
    grouping_columns.sort();

    let with_source_names: Vec<String> = columns
        .iter()
        .cloned()
        .chain([SOURCE_COLUMN.to_string()])
        .collect();
    let with_source_rows: Vec<Vec<Value>> = members
        .iter()
        .map(|&i| {
            flat[i]
                .cells
                .iter()
                .cloned()
                .chain([Value::Text(flat[i].source.clone())])
                .collect()
        })
        .collect();

    let mut concise_names: Vec<String> = grouping_columns
        .iter()
        .chain(column_differences.iter())
        .cloned()
        .collect();
    concise_names.push(SOURCE_COLUMN.to_string());
    let concise_positions: Vec<usize> = concise_names
        .iter()
        .filter_map(|name| with_source_names.iter().position(|other| other == name))
        .collect();
    let concise_rows: Vec<Vec<Value>> = with_source_rows
        .iter()
        .map(|row| concise_positions.iter().map(|&i| row[i].clone()).collect())
        .collect();

    RowDiffEntry::Grouped(RowGroupDifference {
        sources,
        row: RowBundle::from_rows(columns, &rows),
        occurrences: rows.len(),
        grouping_columns,
        column_differences,
        concise_information: RowBundle::from_rows(&concise_names, &concise_rows),
        row_with_source: RowBundle::from_rows(&with_source_names, &with_source_rows),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Column, TimeUnit};

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

    fn timestamp_column(name: &str, unit: TimeUnit, zone: Option<&str>, secs: &[i64]) -> Column {
        Column::new(
            name,
            DataType::Timestamp {
                unit,
                zone: zone.map(str::to_string),
            },
            secs.iter()
                .map(|&s| {
                    Value::Timestamp(chrono::DateTime::from_timestamp(s, 0).unwrap().naive_utc())
                })
                .collect(),
        )
    }

    #[test]
    fn test_column_name_differences() {
        let t0 = table(vec![int_column("a", &[1]), int_column("b", &[1])]);
        let t1 = table(vec![int_column("a", &[1]), int_column("c", &[1])]);

        let (comparable, diffs) = reconcile_columns(&t0, &t1, "df0", "df1").unwrap();
        assert_eq!(comparable, vec!["a".to_string()]);
        assert_eq!(diffs.len(), 2);

        let missing = diffs
            .iter()
            .find(|d| d.kind == ColumnDiffKind::Missing)
            .unwrap();
        assert_eq!(missing.column_name, "c");
        assert_eq!(missing.source, "df0");

        let extra = diffs
            .iter()
            .find(|d| d.kind == ColumnDiffKind::Extra)
            .unwrap();
        assert_eq!(extra.column_name, "b");
        assert_eq!(extra.source, "df0");
    }

    #[test]
    fn test_column_type_difference_detail() {
        let t0 = table(vec![int_column("a", &[1])]);
        let t1 = table(vec![Column::new(
            "a",
            DataType::Text,
            vec![Value::Text("1".into())],
        )]);

        let (comparable, diffs) = reconcile_columns(&t0, &t1, "df0", "df1").unwrap();
        assert!(comparable.is_empty());
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].kind, ColumnDiffKind::DifferentType);
        let detail = diffs[0].detail.as_ref().unwrap();
        assert_eq!(detail["df0"], "INTEGER");
        assert_eq!(detail["df1"], "TEXT");
    }

    #[test]
    fn test_timezone_check_wins_over_precision() {
        // Both zone and unit differ; only the timezone difference is
        // reported.
        let t0 = table(vec![timestamp_column("ts", TimeUnit::Micros, Some("UTC"), &[0])]);
        let t1 = table(vec![timestamp_column("ts", TimeUnit::Millis, None, &[0])]);

        let (comparable, diffs) = reconcile_columns(&t0, &t1, "df0", "df1").unwrap();
        assert!(comparable.is_empty());
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].kind, ColumnDiffKind::DifferentTimezone);
        let detail = diffs[0].detail.as_ref().unwrap();
        assert_eq!(detail["df0"], "UTC");
        assert_eq!(detail["df1"], "none");
    }

    #[test]
    fn test_time_precision_difference() {
        let t0 = table(vec![timestamp_column("ts", TimeUnit::Micros, None, &[0])]);
        let t1 = table(vec![timestamp_column("ts", TimeUnit::Millis, None, &[0])]);

        let (comparable, diffs) = reconcile_columns(&t0, &t1, "df0", "df1").unwrap();
        assert!(comparable.is_empty());
        assert_eq!(diffs[0].kind, ColumnDiffKind::DifferentTimePrecision);
        let detail = diffs[0].detail.as_ref().unwrap();
        assert_eq!(detail["df0"], "us");
        assert_eq!(detail["df1"], "ms");
    }

    #[test]
    fn test_reserved_column_rejected() {
        let t0 = table(vec![int_column("hash", &[1])]);
        let t1 = table(vec![int_column("a", &[1])]);
        assert!(reconcile_columns(&t0, &t1, "df0", "df1").is_err());
    }

    #[test]
    fn test_identical_labels_rejected() {
        let t0 = table(vec![int_column("a", &[1])]);
        let t1 = table(vec![int_column("a", &[1])]);
        assert!(reconcile_rows(&t0, &t1, "df0", "df0").is_err());
    }

    #[test]
    fn test_row_differences_simple() {
        let t0 = table(vec![int_column("a", &[1, 2]), int_column("b", &[1, 2])]);
        let t1 = table(vec![int_column("a", &[1, 2]), int_column("b", &[1, 3])]);

        let (comparable, column_diffs, row_diffs) =
            reconcile_rows(&t0, &t1, "df0", "df1").unwrap();
        assert_eq!(comparable, vec!["a".to_string(), "b".to_string()]);
        assert!(column_diffs.is_empty());
        assert_eq!(row_diffs.len(), 2);

        let RowDiffEntry::Plain(first) = &row_diffs[0] else {
            panic!("expected plain difference");
        };
        assert_eq!(first.source, "df0");
        assert_eq!(first.occurrences, 1);
        assert_eq!(first.row.column("b").unwrap(), &[Value::Int(2)]);

        let RowDiffEntry::Plain(second) = &row_diffs[1] else {
            panic!("expected plain difference");
        };
        assert_eq!(second.source, "df1");
        assert_eq!(second.row.column("b").unwrap(), &[Value::Int(3)]);
    }

    #[test]
    fn test_row_differences_duplicates() {
        let t0 = table(vec![int_column("a", &[1, 2, 2]), int_column("b", &[1, 2, 2])]);
        let t1 = table(vec![int_column("a", &[1, 2]), int_column("b", &[1, 3])]);

        let (_, _, row_diffs) = reconcile_rows(&t0, &t1, "df0", "df1").unwrap();
        assert_eq!(row_diffs.len(), 2);

        let RowDiffEntry::Plain(surplus) = &row_diffs[0] else {
            panic!("expected plain difference");
        };
        assert_eq!(surplus.source, "df0");
        assert_eq!(surplus.occurrences, 2);
        assert_eq!(surplus.row.column("a").unwrap(), &[Value::Int(2), Value::Int(2)]);

        let RowDiffEntry::Plain(missing) = &row_diffs[1] else {
            panic!("expected plain difference");
        };
        assert_eq!(missing.source, "df1");
        assert_eq!(missing.occurrences, 1);
    }

    #[test]
    fn test_uneven_duplicate_multiplicity() {
        // Fingerprint shared by both tables, four copies vs two.
        let t0 = table(vec![int_column("a", &[7, 7, 7, 7])]);
        let t1 = table(vec![int_column("a", &[7, 7])]);

        let (_, _, row_diffs) = reconcile_rows(&t0, &t1, "df0", "df1").unwrap();
        assert_eq!(row_diffs.len(), 1);
        let RowDiffEntry::Plain(diff) = &row_diffs[0] else {
            panic!("expected plain difference");
        };
        assert_eq!(diff.source, "df0");
        assert_eq!(diff.occurrences, 2);
        assert_eq!(diff.row.column("a").unwrap(), &[Value::Int(7), Value::Int(7)]);
    }

    #[test]
    fn test_no_comparable_columns_reports_all_rows() {
        let t0 = table(vec![int_column("a", &[1, 2])]);
        let t1 = table(vec![int_column("b", &[1, 2, 3])]);

        let (comparable, column_diffs, row_diffs) =
            reconcile_rows(&t0, &t1, "df0", "df1").unwrap();
        assert!(comparable.is_empty());
        assert_eq!(column_diffs.len(), 2);
        assert_eq!(row_diffs.len(), 2);
        assert_eq!(row_diffs[0].occurrences(), 2);
        assert_eq!(row_diffs[1].occurrences(), 3);
    }

    #[test]
    fn test_paired_requires_comparable_keys() {
        let t0 = table(vec![int_column("a", &[1])]);
        let t1 = table(vec![int_column("a", &[1])]);

        let result = reconcile_rows_paired(&t0, &t1, "df0", "df1", &["z".to_string()]);
        assert!(matches!(result, Err(DatadiffError::Config { .. })));
    }

    #[test]
    fn test_paired_groups_both_sources() {
        let t0 = table(vec![int_column("a", &[1, 2, 3]), int_column("b", &[1, 2, 3])]);
        let t1 = table(vec![int_column("a", &[1, 2, 3]), int_column("b", &[1, 2, 10])]);

        let (_, _, row_diffs) =
            reconcile_rows_paired(&t0, &t1, "df0", "df1", &["a".to_string()]).unwrap();
        assert_eq!(row_diffs.len(), 1);

        let RowDiffEntry::Grouped(group) = &row_diffs[0] else {
            panic!("expected grouped difference");
        };
        assert_eq!(group.sources, vec!["df0".to_string(), "df1".to_string()]);
        assert_eq!(group.occurrences, 2);
        assert_eq!(group.grouping_columns, vec!["a".to_string()]);
        assert_eq!(group.column_differences, vec!["b".to_string()]);
        assert_eq!(group.row.column("a").unwrap(), &[Value::Int(3), Value::Int(3)]);
        assert_eq!(group.row.column("b").unwrap(), &[Value::Int(3), Value::Int(10)]);

        let tags = group.concise_information.column(SOURCE_COLUMN).unwrap();
        assert_eq!(
            tags,
            &[Value::Text("df0".into()), Value::Text("df1".into())]
        );
        assert_eq!(
            group.row_with_source.column(SOURCE_COLUMN).unwrap(),
            &[Value::Text("df0".into()), Value::Text("df1".into())]
        );
    }

    #[test]
    fn test_paired_single_source_group_stays_plain() {
        let t0 = table(vec![
            int_column("a", &[1, 2, 3, 3, 3]),
            int_column("b", &[1, 2, 3, 10, 10]),
        ]);
        let t1 = table(vec![
            int_column("a", &[1, 2, 3, 3]),
            int_column("b", &[1, 2, 3, 10]),
        ]);

        let (_, _, row_diffs) =
            reconcile_rows_paired(&t0, &t1, "df0", "df1", &["a".to_string()]).unwrap();
        assert_eq!(row_diffs.len(), 1);
        let RowDiffEntry::Plain(diff) = &row_diffs[0] else {
            panic!("expected plain difference");
        };
        assert_eq!(diff.source, "df0");
        assert_eq!(diff.occurrences, 1);
        assert_eq!(diff.row.column("a").unwrap(), &[Value::Int(3)]);
        assert_eq!(diff.row.column("b").unwrap(), &[Value::Int(10)]);
    }

    #[test]
    fn test_paired_identical_tables_empty() {
        let t0 = table(vec![
            int_column("a", &[1, 2, 3, 3]),
            int_column("b", &[1, 2, 3, 10]),
        ]);
        let t1 = t0.clone();

        let (_, _, row_diffs) =
            reconcile_rows_paired(&t0, &t1, "df0", "df1", &["a".to_string()]).unwrap();
        assert!(row_diffs.is_empty());
    }
}
