//! End-to-end checks against the public api.

use std::fs;
use std::path::PathBuf;

use flight_price_estimator::data::features::LabeledFeatures;
use flight_price_estimator::training::trainer;
use flight_price_estimator::{FlightQuery, TrainError};

const FIXTURE_CSV: &str = "\
,airline,flight,source_city,departure_time,stops,arrival_time,destination_city,class,duration,days_left,price
0,IndiGo,6E-2046,Delhi,Morning,zero,Evening,Mumbai,Economy,2.17,1,5953
1,AirAsia,I5-764,Delhi,Early_Morning,zero,Morning,Mumbai,Economy,2.33,8,4254
2,IndiGo,6E-549,Mumbai,Evening,one,Night,Delhi,Economy,5.25,20,7425
3,AirAsia,I5-531,Mumbai,Night,one,Morning,Delhi,Economy,10.0,35,3873
4,IndiGo,6E-6013,Delhi,Afternoon,zero,Night,Mumbai,Business,6.5,12,25612
5,AirAsia,I5-974,Mumbai,Late_Night,two_or_more,Evening,Delhi,Business,16.0,44,42220
";

fn fixture_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{name}-{}.csv", std::process::id()))
}

fn query() -> FlightQuery {
    FlightQuery {
        airline: "IndiGo".to_string(),
        source_city: "Delhi".to_string(),
        departure_time: "Morning".to_string(),
        stops: "zero".to_string(),
        arrival_time: "Evening".to_string(),
        destination_city: "Mumbai".to_string(),
        travel_class: "Economy".to_string(),
        days_left: 15,
    }
}

#[test]
fn trains_from_disk_and_estimates_a_price() {
    let path = fixture_path("fares-e2e");
    fs::write(&path, FIXTURE_CSV).expect("fixture write failed");
    let estimator = trainer::train(&path).expect("training failed");
    fs::remove_file(&path).ok();

    let price = estimator.predict(&query()).expect("prediction failed");
    assert!(price.is_finite());

    // the same bundle keeps serving after a failed request
    let mut bad = query();
    bad.arrival_time = "Brunch".to_string();
    assert!(estimator.predict(&bad).is_err());
    assert!(estimator.predict(&query()).is_ok());
}

#[test]
fn missing_dataset_is_reported_as_unavailable() {
    let path = fixture_path("fares-missing");
    match trainer::train(&path) {
        Err(TrainError::DataUnavailable { .. }) => {}
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("training must not succeed without the dataset"),
    }
}

#[test]
fn headers_only_dataset_is_reported_as_empty() {
    let path = fixture_path("fares-empty");
    let header = FIXTURE_CSV.lines().next().expect("fixture has a header");
    fs::write(&path, format!("{header}\n")).expect("fixture write failed");
    let result = trainer::train(&path);
    fs::remove_file(&path).ok();
    match result {
        Err(TrainError::EmptyDataset) => {}
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("training must not succeed on an empty table"),
    }
}

#[test]
fn reconciled_rows_always_match_the_schema_width() {
    let path = fixture_path("fares-schema");
    fs::write(&path, FIXTURE_CSV).expect("fixture write failed");
    let estimator = trainer::train(&path).expect("training failed");
    fs::remove_file(&path).ok();

    let schema = estimator.schema();
    let vocabulary = estimator.vocabulary();

    // a fully known query row and a row of nothing but junk both land on
    // the canonical width
    let indicators = vocabulary.transform([
        "IndiGo", "Delhi", "Morning", "zero", "Evening", "Mumbai", "Economy",
    ]);
    let known = LabeledFeatures::assemble(11.0, 15.0, vocabulary, &indicators);
    assert_eq!(schema.reconcile(&known).len(), schema.len());

    let junk = LabeledFeatures::from_pairs(vec![
        ("not_a_column".to_string(), 1.0),
        ("also_not".to_string(), 2.0),
    ]);
    assert_eq!(schema.reconcile(&junk).len(), schema.len());
}

#[test]
fn unseen_airline_still_gets_an_estimate() {
    let path = fixture_path("fares-unseen");
    fs::write(&path, FIXTURE_CSV).expect("fixture write failed");
    let estimator = trainer::train(&path).expect("training failed");
    fs::remove_file(&path).ok();

    let mut unseen = query();
    unseen.airline = "Akasa".to_string();
    let price = estimator.predict(&unseen).expect("unseen values encode to zero");
    assert!(price.is_finite());
}
