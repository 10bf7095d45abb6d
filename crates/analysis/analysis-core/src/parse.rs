//! Delimited text decoding into raw rows.

use analysis_spi::{Cell, RawRow, Result, Series};
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::warn;

use crate::ingest::ingest;

/// Decode and ingest delimited text in one step.
pub fn parse_series(content: &str) -> Result<Series> {
    ingest(parse_delimited(content))
}

/// Decode delimited text, guessing the delimiter from the first line.
pub fn parse_delimited(content: &str) -> Vec<RawRow> {
    parse_delimited_with(content, sniff_delimiter(content))
}

/// Decode delimited text into one [`RawRow`] per data line.
///
/// Lines with two or more fields use the first as label and the second as
/// value; single-field lines are labelled by their 1-based position among
/// the data lines. The first line is a header when its value field is not
/// numeric.
pub fn parse_delimited_with(content: &str, delimiter: u8) -> Vec<RawRow> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .delimiter(delimiter)
        .from_reader(content.trim().as_bytes());

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                warn!(line = line + 1, error = %e, "skipping unreadable record");
                continue;
            }
        };
        if line == 0 && is_header(&record) {
            continue;
        }
        if let Some(row) = to_row(&record, rows.len() + 1) {
            rows.push(row);
        }
    }
    rows
}

fn to_row(record: &StringRecord, position: usize) -> Option<RawRow> {
    match record.len() {
        0 => None,
        1 => Some(RawRow::new(position.to_string(), Cell::from(&record[0]))),
        _ => Some(RawRow::new(&record[0], Cell::from(&record[1]))),
    }
}

fn value_field(record: &StringRecord) -> Option<&str> {
    match record.len() {
        0 => None,
        1 => record.get(0),
        _ => record.get(1),
    }
}

fn is_header(record: &StringRecord) -> bool {
    value_field(record).is_some_and(|field| Cell::from(field).as_number().is_none())
}

fn sniff_delimiter(content: &str) -> u8 {
    let first = content.trim_start().lines().next().unwrap_or("");
    [b',', b';', b'\t']
        .into_iter()
        .max_by_key(|&d| first.bytes().filter(|&b| b == d).count())
        .filter(|&d| first.as_bytes().contains(&d))
        .unwrap_or(b',')
}
