pub mod sample;
pub mod generator;
