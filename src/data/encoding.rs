//! Fitted one-hot vocabulary for the categorical attributes.

use std::collections::BTreeSet;

use crate::data::dataset::CATEGORICAL_ATTRIBUTES;

/// Number of categorical attributes in a row.
pub const ATTRIBUTE_COUNT: usize = CATEGORICAL_ATTRIBUTES.len();

/// The distinct values seen per attribute at fit time, frozen thereafter,
/// plus the indicator column names they induce.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Sorted distinct values, one list per attribute, in attribute order.
    blocks: Vec<Vec<String>>,
    /// `<attribute>_<value>` for every indicator column, in block order.
    columns: Vec<String>,
}

impl Vocabulary {
    /// Collect the vocabulary from training rows. Values are sorted within
    /// each attribute block so the induced column order is reproducible for
    /// the same data.
    pub fn fit<'a, I>(rows: I) -> Vocabulary
    where
        I: IntoIterator<Item = [&'a str; ATTRIBUTE_COUNT]>,
    {
        let mut seen: Vec<BTreeSet<String>> = vec![BTreeSet::new(); ATTRIBUTE_COUNT];
        for row in rows {
            for (set, value) in seen.iter_mut().zip(row) {
                if !set.contains(value) {
                    set.insert(value.to_string());
                }
            }
        }
        let blocks: Vec<Vec<String>> = seen
            .into_iter()
            .map(|set| set.into_iter().collect())
            .collect();
        let columns = CATEGORICAL_ATTRIBUTES
            .iter()
            .zip(&blocks)
            .flat_map(|(attribute, values)| {
                values
                    .iter()
                    .map(move |value| format!("{attribute}_{value}"))
            })
            .collect();
        Vocabulary { blocks, columns }
    }

    /// Indicator column names, in canonical block order.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Total indicator width.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// One-hot encode a single categorical row. A value never seen at fit
    /// time leaves its whole block at zero; encoding itself cannot fail.
    pub fn transform(&self, row: [&str; ATTRIBUTE_COUNT]) -> IndicatorRow {
        let mut values = vec![0.0; self.columns.len()];
        let mut offset = 0;
        for (block, value) in self.blocks.iter().zip(row) {
            if let Ok(position) = block.binary_search_by(|known| known.as_str().cmp(value)) {
                values[offset + position] = 1.0;
            }
            offset += block.len();
        }
        IndicatorRow { values }
    }
}

/// The encoder's output for one row: one f64 per indicator column.
#[derive(Debug, Clone)]
pub struct IndicatorRow {
    values: Vec<f64>,
}

impl IndicatorRow {
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}
