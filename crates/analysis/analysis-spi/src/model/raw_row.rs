//! Raw tabular input as produced by a file decoder.

use serde::{Deserialize, Serialize};

/// A single uploaded cell, before coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    /// Coerce the cell to a finite real number.
    ///
    /// Text is trimmed before parsing. Anything that does not yield a
    /// finite number (including `NaN` and `inf` spellings) is missing.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            Cell::Number(x) => *x,
            Cell::Text(s) => s.trim().parse::<f64>().ok()?,
            Cell::Empty => return None,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        if value.trim().is_empty() {
            Cell::Empty
        } else {
            Cell::Text(value.to_string())
        }
    }
}

/// One observation: display label plus raw cell, in temporal order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    pub label: String,
    pub cell: Cell,
}

impl RawRow {
    pub fn new(label: impl Into<String>, cell: impl Into<Cell>) -> Self {
        Self {
            label: label.into(),
            cell: cell.into(),
        }
    }
}
