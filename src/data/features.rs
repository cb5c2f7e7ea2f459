//! Feature assembly and schema reconciliation.
//!
//! The canonical feature schema is the column layout the model was fit on.
//! Every row handed to the model must match it exactly; [`FeatureSchema::reconcile`]
//! is the single place that guarantees it for prediction-time rows.

use std::collections::HashMap;

use ndarray::{Array1, Array2};

use crate::data::dataset::RawRecord;
use crate::data::encoding::{IndicatorRow, Vocabulary};

/// Numeric feature columns, always ahead of the indicator columns.
pub const NUMERIC_COLUMNS: [&str; 2] = ["duration", "days_left"];

/// The ordered column list captured at training time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    columns: Vec<String>,
}

impl FeatureSchema {
    /// Capture the canonical layout: numeric columns, then every indicator
    /// column in vocabulary order.
    pub fn from_training(vocabulary: &Vocabulary) -> FeatureSchema {
        let mut columns: Vec<String> = NUMERIC_COLUMNS.iter().map(|c| c.to_string()).collect();
        columns.extend(vocabulary.column_names().iter().cloned());
        FeatureSchema { columns }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Re-project a labeled one-row table onto this schema: values are
    /// copied by column name, canonical columns missing from the row become
    /// 0, and row columns outside the schema are dropped. Total over any
    /// input row, and a no-op on rows already in canonical shape.
    pub fn reconcile(&self, row: &LabeledFeatures) -> FeatureRow {
        let by_name: HashMap<&str, f64> = row
            .pairs
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
            .collect();
        let values = self
            .columns
            .iter()
            .map(|column| by_name.get(column.as_str()).copied().unwrap_or(0.0))
            .collect();
        FeatureRow { values }
    }
}

/// A one-row table with its own named columns, before reconciliation.
#[derive(Debug, Clone)]
pub struct LabeledFeatures {
    pairs: Vec<(String, f64)>,
}

impl LabeledFeatures {
    pub fn from_pairs(pairs: Vec<(String, f64)>) -> LabeledFeatures {
        LabeledFeatures { pairs }
    }

    /// Combine a query's numeric features with its encoded indicators:
    /// numeric first, then the indicator columns in vocabulary order.
    pub fn assemble(
        duration: f64,
        days_left: f64,
        vocabulary: &Vocabulary,
        indicators: &IndicatorRow,
    ) -> LabeledFeatures {
        let mut pairs = Vec::with_capacity(NUMERIC_COLUMNS.len() + vocabulary.width());
        pairs.push((NUMERIC_COLUMNS[0].to_string(), duration));
        pairs.push((NUMERIC_COLUMNS[1].to_string(), days_left));
        for (name, value) in vocabulary.column_names().iter().zip(indicators.values()) {
            pairs.push((name.clone(), *value));
        }
        LabeledFeatures { pairs }
    }

    /// Column-name/value pairs in assembly order.
    pub fn pairs(&self) -> &[(String, f64)] {
        &self.pairs
    }
}

/// A value row aligned to a canonical schema. Only [`FeatureSchema::reconcile`]
/// constructs these, so the model can rely on the alignment invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    values: Vec<f64>,
}

impl FeatureRow {
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_values(values: Vec<f64>) -> FeatureRow {
        FeatureRow { values }
    }
}

/// Assemble the full training table: one row per record holding its observed
/// duration and days_left followed by its indicators, plus the price vector.
/// Training rows are canonical by construction since the schema is defined
/// as this exact concatenation.
pub fn training_matrix(
    records: &[RawRecord],
    vocabulary: &Vocabulary,
) -> (Array2<f64>, Array1<f64>) {
    let width = NUMERIC_COLUMNS.len() + vocabulary.width();
    let mut x = Array2::zeros((records.len(), width));
    let mut y = Array1::zeros(records.len());
    for (i, record) in records.iter().enumerate() {
        let indicators = vocabulary.transform(record.categorical_values());
        x[[i, 0]] = record.duration;
        x[[i, 1]] = record.days_left;
        for (j, value) in indicators.values().iter().enumerate() {
            x[[i, NUMERIC_COLUMNS.len() + j]] = *value;
        }
        y[i] = record.price;
    }
    (x, y)
}
