pub mod dataset;
pub mod encoding;
pub mod features;
pub mod flight_time;
