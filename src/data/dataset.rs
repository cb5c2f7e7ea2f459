//! The historical reference table and the user-facing query record.

use std::collections::BTreeSet;
use std::fs::File;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::error::TrainError;

/// Names of the categorical attributes, in reference-table column order.
/// Encoder blocks, schema columns, and query fields follow this order
/// everywhere.
pub const CATEGORICAL_ATTRIBUTES: [&str; 7] = [
    "airline",
    "source_city",
    "departure_time",
    "stops",
    "arrival_time",
    "destination_city",
    "class",
];

/// One historical observation. The source file's unnamed row index and its
/// `flight` identifier column carry no signal and have no field here, so
/// they can never reach the feature schema.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub airline: String,
    pub source_city: String,
    pub departure_time: String,
    pub stops: String,
    pub arrival_time: String,
    pub destination_city: String,
    #[serde(rename = "class")]
    pub travel_class: String,
    /// Observed flight duration in hours.
    pub duration: f64,
    /// Days between booking and departure.
    pub days_left: f64,
    /// Ticket price in rupees, the regression target.
    pub price: f64,
}

impl RawRecord {
    /// Categorical values in [`CATEGORICAL_ATTRIBUTES`] order.
    pub fn categorical_values(&self) -> [&str; 7] {
        [
            &self.airline,
            &self.source_city,
            &self.departure_time,
            &self.stops,
            &self.arrival_time,
            &self.destination_city,
            &self.travel_class,
        ]
    }
}

/// One prediction request: the attributes a user can actually choose.
/// Duration is derived from the two time buckets, price is the output.
#[derive(Debug, Clone)]
pub struct FlightQuery {
    pub airline: String,
    pub source_city: String,
    pub departure_time: String,
    pub stops: String,
    pub arrival_time: String,
    pub destination_city: String,
    pub travel_class: String,
    pub days_left: u32,
}

impl FlightQuery {
    /// Categorical values in [`CATEGORICAL_ATTRIBUTES`] order.
    pub fn categorical_values(&self) -> [&str; 7] {
        [
            &self.airline,
            &self.source_city,
            &self.departure_time,
            &self.stops,
            &self.arrival_time,
            &self.destination_city,
            &self.travel_class,
        ]
    }
}

/// Read the reference table from any csv source. Columns without a matching
/// field (the row index, `flight`) are dropped by the header-driven decode.
pub fn read_records<R: io::Read>(reader: R) -> Result<Vec<RawRecord>, TrainError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        let record: RawRecord = row?;
        records.push(record);
    }
    Ok(records)
}

/// Load the reference table from disk. A missing or unreadable file is the
/// startup-fatal `DataUnavailable` condition.
pub fn load(path: &Path) -> Result<Vec<RawRecord>, TrainError> {
    let file = File::open(path).map_err(|source| TrainError::DataUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    read_records(file)
}

/// Sorted distinct values of one categorical attribute across the table,
/// addressed by its position in [`CATEGORICAL_ATTRIBUTES`].
pub fn distinct_values(records: &[RawRecord], attribute: usize) -> Vec<String> {
    records
        .iter()
        .map(|record| record.categorical_values()[attribute].to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
