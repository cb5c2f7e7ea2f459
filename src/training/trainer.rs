//! Training orchestration and the trained-estimator bundle.

use std::path::Path;

use log::{debug, info};

use crate::data::dataset::{self, CATEGORICAL_ATTRIBUTES, FlightQuery, RawRecord};
use crate::data::encoding::Vocabulary;
use crate::data::features::{FeatureSchema, LabeledFeatures, NUMERIC_COLUMNS, training_matrix};
use crate::data::flight_time;
use crate::error::{PredictError, TrainError};
use crate::model::linear::{LinearModel, r_squared};

/// Everything a prediction request needs: the fitted model, the frozen
/// vocabulary, the canonical schema, and the table it all came from.
/// Read-only after fit, so it can be shared freely across threads.
#[derive(Debug)]
pub struct Estimator {
    model: LinearModel,
    vocabulary: Vocabulary,
    schema: FeatureSchema,
    reference: Vec<RawRecord>,
    r_squared: f64,
}

/// Load the reference table from `path` and fit the full bundle. Missing or
/// unreadable data fails here, before anything else runs.
pub fn train(path: &Path) -> Result<Estimator, TrainError> {
    info!("loading reference dataset from {}", path.display());
    let records = dataset::load(path)?;
    fit_estimator(records)
}

/// Fit the bundle from already-loaded records: vocabulary fit, schema
/// capture, matrix assembly, then the least-squares solve.
pub fn fit_estimator(records: Vec<RawRecord>) -> Result<Estimator, TrainError> {
    if records.is_empty() {
        return Err(TrainError::EmptyDataset);
    }
    info!("training on {} historical fares", records.len());

    let vocabulary = Vocabulary::fit(records.iter().map(|r| r.categorical_values()));
    let schema = FeatureSchema::from_training(&vocabulary);
    debug!(
        "canonical feature schema: {} numeric + {} indicator columns",
        NUMERIC_COLUMNS.len(),
        vocabulary.width()
    );

    let (x, y) = training_matrix(&records, &vocabulary);
    let model = LinearModel::fit(&x, &y)?;
    let fit_r2 = r_squared(&model.predict_all(&x), &y);
    info!("least-squares fit complete, training r² = {fit_r2:.4}");

    Ok(Estimator {
        model,
        vocabulary,
        schema,
        reference: records,
        r_squared: fit_r2,
    })
}

impl Estimator {
    /// Estimate a ticket price for one query: derive the duration proxy,
    /// encode with the frozen vocabulary, assemble, reconcile onto the
    /// canonical schema, and evaluate the model.
    pub fn predict(&self, query: &FlightQuery) -> Result<f64, PredictError> {
        let duration =
            flight_time::estimated_duration(&query.departure_time, &query.arrival_time)?;
        let indicators = self.vocabulary.transform(query.categorical_values());
        let assembled = LabeledFeatures::assemble(
            duration,
            f64::from(query.days_left),
            &self.vocabulary,
            &indicators,
        );
        let row = self.schema.reconcile(&assembled);
        self.model.predict(&row)
    }

    /// Sorted distinct choices per categorical attribute, scanned from the
    /// reference table. These are the lists an input surface should offer.
    pub fn categorical_choices(&self) -> Vec<(&'static str, Vec<String>)> {
        CATEGORICAL_ATTRIBUTES
            .iter()
            .enumerate()
            .map(|(i, attribute)| (*attribute, dataset::distinct_values(&self.reference, i)))
            .collect()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// The historical table the estimator was fit on.
    pub fn reference(&self) -> &[RawRecord] {
        &self.reference
    }

    /// Share of price variance explained on the training data.
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }
}
