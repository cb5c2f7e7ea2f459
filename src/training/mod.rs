pub mod cell;
pub mod trainer;
