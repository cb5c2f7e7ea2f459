use std::path::PathBuf;

/// Failures raised while building the trained estimator. All of them are
/// startup-fatal: no prediction can run without a fitted bundle.
#[derive(thiserror::Error, Debug)]
pub enum TrainError {
    #[error("reference dataset {path:?} is unavailable: {source}")]
    DataUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("reference dataset could not be parsed: {0}")]
    MalformedDataset(#[from] csv::Error),
    #[error("reference dataset holds no usable rows")]
    EmptyDataset,
    #[error("least-squares fit failed: {0}")]
    DegenerateFit(String),
}

/// A time-of-day label outside the closed six-bucket set. This is a
/// configuration mismatch between the input source and the duration table,
/// not a user typo that prediction could paper over.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown time-of-day label {0:?}")]
pub struct UnknownTimeLabel(pub String);

/// Per-request prediction failures. Reported to the caller and recovered;
/// the shared estimator is never poisoned by one bad request.
#[derive(thiserror::Error, Debug)]
pub enum PredictError {
    #[error(transparent)]
    UnknownTimeLabel(#[from] UnknownTimeLabel),
    #[error("feature row has {actual} columns, trained schema has {expected}")]
    SchemaMismatch { expected: usize, actual: usize },
}
