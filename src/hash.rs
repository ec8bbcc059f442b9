//! Row fingerprinting
//!
//! A fingerprint is a blake3 hash over the ordered cell values of a row,
//! computed from a canonical type-tagged byte encoding so that equal content
//! in either table hashes identically. Fingerprints are the multiset keys of
//! the row reconciliation.

use crate::table::{date_ordinal, Value};
use blake3::Hasher;
use rayon::prelude::*;

/// A fingerprint represented as a hex string
pub type HashValue = String;

/// Computes content fingerprints over projected rows
pub struct Fingerprinter;

impl Fingerprinter {
    pub fn new() -> Self {
        Self
    }

    /// Canonical byte encoding of a single cell. A leading tag byte keeps
    /// values of different types distinct; text is length-prefixed so cell
    /// boundaries stay unambiguous.
    pub fn encode_value(value: &Value, buf: &mut Vec<u8>) {
        match value {
            Value::Null => buf.push(0),
            Value::Bool(b) => {
                buf.push(1);
                buf.push(u8::from(*b));
            }
            Value::Int(i) => {
                buf.push(2);
                buf.extend_from_slice(&i.to_le_bytes());
            }
            Value::Float(x) => {
                buf.push(3);
                buf.extend_from_slice(&x.to_bits().to_le_bytes());
            }
            Value::Text(s) => {
                buf.push(4);
                buf.extend_from_slice(&(s.len() as u64).to_le_bytes());
                buf.extend_from_slice(s.as_bytes());
            }
            Value::Date(d) => {
                buf.push(5);
                buf.extend_from_slice(&date_ordinal(d).to_le_bytes());
            }
            Value::Timestamp(ts) => {
                buf.push(6);
                let utc = ts.and_utc();
                buf.extend_from_slice(&utc.timestamp().to_le_bytes());
                buf.extend_from_slice(&utc.timestamp_subsec_nanos().to_le_bytes());
            }
        }
    }

    /// Owned encoding of one value, used for distinct-value counting in the
    /// group refiner.
    pub fn encoded(value: &Value) -> Vec<u8> {
        let mut buf = Vec::new();
        Self::encode_value(value, &mut buf);
        buf
    }

    /// Compute the fingerprint of one row's ordered cell values
    pub fn fingerprint_row(&self, row: &[Value]) -> HashValue {
        let mut hasher = Hasher::new();
        let mut buf = Vec::new();
        for value in row {
            buf.clear();
            Self::encode_value(value, &mut buf);
            hasher.update(&buf);
            hasher.update(b"|"); // separator between cells
        }
        hasher.finalize().to_hex().to_string()
    }

    /// Fingerprint every row in parallel; output order matches input order
    pub fn fingerprint_rows(&self, rows: &[Vec<Value>]) -> Vec<HashValue> {
        rows.par_iter()
            .map(|row| self.fingerprint_row(row))
            .collect()
    }
}

impl Default for Fingerprinter {
    fn default() -> Self {
        Self::new()
    }
}
