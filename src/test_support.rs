//! Shared fixtures for unit tests.

use crate::data::dataset::RawRecord;

#[allow(clippy::too_many_arguments)]
pub(crate) fn record(
    airline: &str,
    source_city: &str,
    departure_time: &str,
    stops: &str,
    arrival_time: &str,
    destination_city: &str,
    travel_class: &str,
    duration: f64,
    days_left: f64,
    price: f64,
) -> RawRecord {
    RawRecord {
        airline: airline.to_string(),
        source_city: source_city.to_string(),
        departure_time: departure_time.to_string(),
        stops: stops.to_string(),
        arrival_time: arrival_time.to_string(),
        destination_city: destination_city.to_string(),
        travel_class: travel_class.to_string(),
        duration,
        days_left,
        price,
    }
}

/// A small but realistic slice of the reference table: two airlines, two
/// routes, both cabins, varied timings and stop counts.
pub(crate) fn sample_records() -> Vec<RawRecord> {
    vec![
        record(
            "IndiGo", "Delhi", "Morning", "zero", "Evening", "Mumbai", "Economy", 2.17, 1.0,
            5953.0,
        ),
        record(
            "AirAsia", "Delhi", "Early_Morning", "zero", "Morning", "Mumbai", "Economy", 2.33,
            8.0, 4254.0,
        ),
        record(
            "IndiGo", "Mumbai", "Evening", "one", "Night", "Delhi", "Economy", 5.25, 20.0,
            7425.0,
        ),
        record(
            "AirAsia", "Mumbai", "Night", "one", "Morning", "Delhi", "Economy", 10.0, 35.0,
            3873.0,
        ),
        record(
            "IndiGo", "Delhi", "Afternoon", "zero", "Night", "Mumbai", "Business", 6.5, 12.0,
            25612.0,
        ),
        record(
            "AirAsia", "Mumbai", "Late_Night", "two_or_more", "Evening", "Delhi", "Business",
            16.0, 44.0, 42220.0,
        ),
        record(
            "IndiGo", "Delhi", "Morning", "one", "Evening", "Mumbai", "Economy", 11.0, 15.0,
            6154.0,
        ),
        record(
            "AirAsia", "Delhi", "Evening", "zero", "Night", "Mumbai", "Economy", 3.0, 30.0,
            4867.0,
        ),
    ]
}
