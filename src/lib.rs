//! Interactive flight ticket price estimation.
//!
//! A linear model is fit once from a historical fares table; user queries
//! are encoded into the exact feature space the model was fit on and then
//! evaluated. The crate builds as a library (and cdylib for embedding
//! hosts) next to the prompt-driven binary in `main.rs`.

pub mod data;
pub mod error;
pub mod ffi;
pub mod model;
pub mod training;
pub mod utils;

pub use data::dataset::FlightQuery;
pub use error::{PredictError, TrainError, UnknownTimeLabel};
pub use training::cell::EstimatorCell;
pub use training::trainer::{Estimator, train};

#[cfg(test)]
pub(crate) mod test_support;
