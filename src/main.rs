use std::error::Error;
use std::io;
use std::path::PathBuf;

use clap::Parser;

use flight_price_estimator::utils::input;
use flight_price_estimator::{EstimatorCell, FlightQuery, training::trainer};

/// Interactive flight ticket price estimator backed by a linear model fit
/// from historical fares.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to the historical fares csv
    #[arg(long, default_value = "Clean_Dataset.csv")]
    data: PathBuf,
}

/// Prompts shown per categorical attribute, in attribute order.
const PROMPTS: [&str; 7] = [
    "Airline",
    "Source city",
    "Departure time",
    "Stops",
    "Arrival time",
    "Destination city",
    "Class",
];

const DAYS_LEFT_MIN: u32 = 1;
const DAYS_LEFT_MAX: u32 = 50;
const DAYS_LEFT_DEFAULT: u32 = 15;

static SHARED: EstimatorCell = EstimatorCell::new();

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let estimator = SHARED
        .get_or_train(|| trainer::train(&args.data))
        .map_err(|e| e.to_string())?;

    println!("Flight ticket price estimator");
    println!(
        "Model trained on {} historical fares ({} feature columns, r² = {:.3})",
        estimator.reference().len(),
        estimator.schema().len(),
        estimator.r_squared()
    );

    let choices = estimator.categorical_choices();
    loop {
        let query = match prompt_query(&choices) {
            Ok(query) => query,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e.into()),
        };
        match estimator.predict(&query) {
            Ok(price) => {
                println!("\nEstimated ticket price: ₹ {price:.2}");
                println!("Linear-regression estimate from historical fares; actual prices vary.");
            }
            Err(e) => log::error!("prediction failed: {e}"),
        }
        if !input::confirm("\nEstimate another fare? [y/N] ")? {
            break;
        }
    }
    Ok(())
}

/// Collect one query from stdin, offering only values present in the
/// reference table.
fn prompt_query(choices: &[(&str, Vec<String>)]) -> io::Result<FlightQuery> {
    let pick = |i: usize| input::choose(PROMPTS[i], &choices[i].1);
    Ok(FlightQuery {
        airline: pick(0)?,
        source_city: pick(1)?,
        departure_time: pick(2)?,
        stops: pick(3)?,
        arrival_time: pick(4)?,
        destination_city: pick(5)?,
        travel_class: pick(6)?,
        days_left: input::read_in_range(
            "Days before departure",
            DAYS_LEFT_MIN,
            DAYS_LEFT_MAX,
            DAYS_LEFT_DEFAULT,
        )?,
    })
}
