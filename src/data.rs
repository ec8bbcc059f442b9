//! CSV ingestion for the command-line shell
//!
//! Files are parsed into the row-oriented [`Records`] form and then run
//! through the canonical conversion, which infers column types and logs the
//! compatibility notice for the lossy step.

use crate::error::{DatadiffError, Result};
use crate::table::{Records, Table};
use std::path::Path;

/// Load a CSV file (with a header row) into the canonical table
/// representation. Empty cells become nulls.
pub fn load_csv(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(DatadiffError::invalid_input(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| {
            DatadiffError::invalid_input(format!(
                "Failed to open '{}': {}",
                path.display(),
                e
            ))
        })?;

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| {
            DatadiffError::invalid_input(format!(
                "Malformed CSV file '{}': {}",
                path.display(),
                e
            ))
        })?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| {
            DatadiffError::invalid_input(format!(
                "Malformed CSV file '{}': {}",
                path.display(),
                e
            ))
        })?;
        rows.push(
            record
                .iter()
                .map(|cell| {
                    if cell.is_empty() {
                        None
                    } else {
                        Some(cell.to_string())
                    }
                })
                .collect(),
        );
    }

    log::debug!(
        "loaded '{}': {} columns, {} rows",
        path.display(),
        columns.len(),
        rows.len()
    );

    Table::from_records(&Records { columns, rows })
}
