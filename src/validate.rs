//! Input gating for the public comparison entry points
//!
//! Every public engine function calls [`check_inputs`] before doing any
//! comparison work. Column-name uniqueness and equal column lengths are
//! already guaranteed by the [`Table`] constructor; the checks here cover
//! the reserved names and label rules that only matter once two tables are
//! put side by side.

use crate::error::{DatadiffError, Result};
use crate::table::Table;
use crate::{HASH_COLUMN, SOURCE_COLUMN};
use std::collections::HashSet;

/// Reject tables whose column names collide with engine-reserved names.
pub fn check_table(table: &Table) -> Result<()> {
    for col in table.columns() {
        if col.name == HASH_COLUMN || col.name == SOURCE_COLUMN {
            return Err(DatadiffError::invalid_input(format!(
                "Column names cannot contain '{}'",
                col.name
            )));
        }
    }
    Ok(())
}

/// Reject duplicate or reserved source labels.
pub fn check_labels(labels: &[&str]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();
    for label in labels {
        if *label == HASH_COLUMN || *label == SOURCE_COLUMN {
            return Err(DatadiffError::invalid_input(format!(
                "Source names cannot contain '{}'",
                label
            )));
        }
        if !seen.insert(label) {
            return Err(DatadiffError::invalid_input(format!(
                "Source name already exists: {}",
                label
            )));
        }
    }
    Ok(())
}

/// Full gate applied at the start of every public entry point.
pub fn check_inputs(tables: &[&Table], labels: &[&str]) -> Result<()> {
    for table in tables {
        check_table(table)?;
    }
    check_labels(labels)
}
