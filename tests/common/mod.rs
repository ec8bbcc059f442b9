//! Common test utilities and helpers

#![allow(dead_code)]

use chrono::NaiveDate;
use datadiff::table::{Column, DataType, Table, TimeUnit, Value};

/// Build a table of integer columns from (name, values) pairs
pub fn int_table(columns: &[(&str, &[i64])]) -> Table {
    Table::new(
        columns
            .iter()
            .map(|(name, values)| {
                Column::new(
                    *name,
                    DataType::Int,
                    values.iter().map(|&v| Value::Int(v)).collect(),
                )
            })
            .collect(),
    )
    .unwrap()
}

/// Build a table with an integer key column and a date payload column
pub fn int_date_table(keys: &[i64], days: &[u32]) -> Table {
    Table::new(vec![
        Column::new(
            "a",
            DataType::Int,
            keys.iter().map(|&v| Value::Int(v)).collect(),
        ),
        Column::new(
            "b",
            DataType::Date,
            days.iter().map(|&d| Value::Date(date(d))).collect(),
        ),
    ])
    .unwrap()
}

/// January 2021 date helper
pub fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 1, day).unwrap()
}

/// Single-column timestamp table with the given unit and zone
pub fn timestamp_table(unit: TimeUnit, zone: Option<&str>, secs: &[i64]) -> Table {
    Table::new(vec![Column::new(
        "ts",
        DataType::Timestamp {
            unit,
            zone: zone.map(str::to_string),
        },
        secs.iter()
            .map(|&s| {
                Value::Timestamp(chrono::DateTime::from_timestamp(s, 0).unwrap().naive_utc())
            })
            .collect(),
    )])
    .unwrap()
}
