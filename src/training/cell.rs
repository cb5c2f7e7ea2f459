//! Process-wide single-flight handle for the trained bundle.

use std::sync::OnceLock;

use crate::error::TrainError;
use crate::training::trainer::Estimator;

/// A once-initialized, read-only slot for the trained estimator. Concurrent
/// callers arriving during the training window block on the same
/// initialization; the training closure runs at most once per cell, success
/// or failure alike.
pub struct EstimatorCell {
    slot: OnceLock<Result<Estimator, TrainError>>,
}

impl EstimatorCell {
    pub const fn new() -> EstimatorCell {
        EstimatorCell {
            slot: OnceLock::new(),
        }
    }

    /// Return the shared estimator, running `train` first if no caller has
    /// populated the cell yet. A training failure is cached as the cell's
    /// final state; the condition is fatal for the process.
    pub fn get_or_train<F>(&self, train: F) -> Result<&Estimator, &TrainError>
    where
        F: FnOnce() -> Result<Estimator, TrainError>,
    {
        self.slot.get_or_init(train).as_ref()
    }
}

impl Default for EstimatorCell {
    fn default() -> Self {
        Self::new()
    }
}
