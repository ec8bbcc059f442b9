//! # datadiff
//!
//! A content-hash based comparison engine for tabular datasets. Two sources
//! expected to hold the same logical data are reconciled column by column and
//! row by row, with duplicate-row multiplicity awareness and an optional
//! key-grouped refinement that attributes differences to specific columns.

pub mod cli;
pub mod error;
pub mod table;
pub mod validate;
pub mod hash;
pub mod diff;
pub mod compare;
pub mod report;
pub mod data;
pub mod output;

pub use compare::{reconcile_columns, reconcile_rows, reconcile_rows_paired};
pub use error::{DatadiffError, Result};
pub use report::{build_report, DataReport};
pub use table::Table;

/// Column name reserved for the engine's internal row fingerprint.
///
/// Input tables and source labels must not use this name.
pub const HASH_COLUMN: &str = "hash";

/// Column name reserved for the engine's internal source tag.
///
/// Input tables and source labels must not use this name. Grouped differences
/// expose a column with this name carrying the originating source label of
/// each bundled row.
pub const SOURCE_COLUMN: &str = "source";
