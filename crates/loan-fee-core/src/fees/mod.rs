pub mod calculator;
pub mod interpolation;
pub mod params;
pub mod schedule;
pub mod term;
