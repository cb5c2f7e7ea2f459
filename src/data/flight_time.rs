//! Time-of-day buckets and the flight duration proxy derived from them.

use crate::error::UnknownTimeLabel;

/// Representative hour of day for each departure/arrival bucket found in the
/// reference data. Closed set: the input surfaces offer exactly these labels.
pub const TIME_OF_DAY: [(&str, i64); 6] = [
    ("Early_Morning", 5),
    ("Morning", 8),
    ("Afternoon", 15),
    ("Evening", 19),
    ("Night", 22),
    ("Late_Night", 2),
];

fn representative_hour(label: &str) -> Result<i64, UnknownTimeLabel> {
    TIME_OF_DAY
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, hour)| *hour)
        .ok_or_else(|| UnknownTimeLabel(label.to_string()))
}

/// Elapsed hours between two bucket labels, wrapping past midnight when the
/// arrival hour is at or before the departure hour. Always in (0, 24].
///
/// This is a coarse stand-in for the observed `duration` column: historical
/// rows carry a measured duration, but a query only carries its two buckets.
pub fn estimated_duration(departure: &str, arrival: &str) -> Result<f64, UnknownTimeLabel> {
    let dep = representative_hour(departure)?;
    let arr = representative_hour(arrival)?;
    let hours = if arr <= dep { arr + 24 - dep } else { arr - dep };
    Ok(hours as f64)
}
