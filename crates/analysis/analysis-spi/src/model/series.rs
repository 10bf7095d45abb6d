//! Clean univariate series.

use serde::Serialize;

use crate::error::{AnalysisError, Result};

/// An ordered sequence of finite values with parallel display labels.
///
/// `values.len() == labels.len()` and every value is finite. The length
/// bounds every lag computed downstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    values: Vec<f64>,
    labels: Vec<String>,
}

impl Series {
    /// Build a series from values and labels, checking both invariants.
    pub fn new(values: Vec<f64>, labels: Vec<String>) -> Result<Self> {
        if values.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        if values.len() != labels.len() {
            return Err(AnalysisError::LengthMismatch {
                values: values.len(),
                labels: labels.len(),
            });
        }
        if let Some(index) = values.iter().position(|x| !x.is_finite()) {
            return Err(AnalysisError::NonFiniteValue { index });
        }
        Ok(Self { values, labels })
    }

    /// Build a series labelled by 1-based position.
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        let labels = (1..=values.len()).map(|i| i.to_string()).collect();
        Self::new(values, labels)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Arithmetic mean of the whole series.
    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<String>) {
        (self.values, self.labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_labels_by_position() {
        let series = Series::from_values(vec![3.0, 4.0, 5.0]).unwrap();
        assert_eq!(series.labels(), &["1", "2", "3"]);
        assert_eq!(series.len(), 3);
        assert!((series.mean() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_values_rejected() {
        let result = Series::from_values(Vec::new());
        assert!(matches!(result, Err(AnalysisError::EmptyInput)));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let result = Series::new(vec![1.0, 2.0], vec!["a".to_string()]);
        assert!(matches!(
            result,
            Err(AnalysisError::LengthMismatch { values: 2, labels: 1 })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let result = Series::from_values(vec![1.0, f64::INFINITY, 2.0]);
        assert!(matches!(
            result,
            Err(AnalysisError::NonFiniteValue { index: 1 })
        ));
    }

    #[test]
    fn test_serializes_values_and_labels() {
        let series = Series::new(vec![1.5], vec!["Jan".to_string()]).unwrap();
        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(json, serde_json::json!({"values": [1.5], "labels": ["Jan"]}));
    }
}
