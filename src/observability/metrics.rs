//! Metrics collection.
//!
//! # Metrics
//! - `modifiers_rows_parsed_total` (counter): rows read from sheets
//! - `modifiers_rows_skipped_total` (counter): skipped rows, by reason
//! - `modifiers_entries` (gauge): entries in the most recently built config
//! - `modifiers_queries_total` (counter): lookups, by matched/unmatched

use ::metrics::{counter, gauge};

pub fn record_rows_parsed(rows: usize) {
    counter!("modifiers_rows_parsed_total").increment(rows as u64);
}

pub fn record_row_skipped(reason: &'static str) {
    counter!("modifiers_rows_skipped_total", "reason" => reason).increment(1);
}

pub fn record_entries(entries: usize) {
    gauge!("modifiers_entries").set(entries as f64);
}

pub fn record_query(matched: bool) {
    let outcome = if matched { "matched" } else { "unmatched" };
    counter!("modifiers_queries_total", "outcome" => outcome).increment(1);
}
