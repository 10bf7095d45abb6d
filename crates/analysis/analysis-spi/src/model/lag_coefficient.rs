//! Lag-indexed coefficient shared by the ACF and PACF tables.

use serde::{Deserialize, Serialize};

/// A coefficient reported for a positive lag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LagCoefficient {
    pub lag: usize,
    pub value: f64,
}

impl LagCoefficient {
    pub fn new(lag: usize, value: f64) -> Self {
        Self { lag, value }
    }

    /// Whether the value lies outside the symmetric band `±bound`.
    pub fn exceeds(&self, bound: f64) -> bool {
        self.value.abs() > bound
    }
}
